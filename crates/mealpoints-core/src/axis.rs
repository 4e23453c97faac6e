//! Date-axis construction for report windows.

use chrono::{Datelike, Days, Duration, NaiveDate};

use crate::CoreError;

/// A report window request: a trailing run of calendar days, or the
/// Monday..Sunday week containing a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Exactly `days` consecutive days ending at `end`, inclusive.
    TrailingDays { days: u32, end: NaiveDate },
    WeekContaining(NaiveDate),
}

pub struct AxisService;

impl AxisService {
    /// Builds the complete, gap-free axis for a window, oldest first.
    ///
    /// The axis depends only on the window, never on ledger contents: every
    /// calendar day in range appears exactly once, active or not. Time of
    /// day on the reference date is irrelevant; only calendar days count.
    pub fn build(window: &Window) -> Result<Vec<NaiveDate>, CoreError> {
        match *window {
            Window::TrailingDays { days, end } => {
                if days == 0 {
                    return Err(CoreError::InvalidWindow(
                        "trailing window must cover at least one day".into(),
                    ));
                }
                let start = end
                    .checked_sub_days(Days::new(u64::from(days) - 1))
                    .ok_or_else(|| {
                        CoreError::InvalidWindow(format!(
                            "trailing window of {days} days exceeds the calendar range"
                        ))
                    })?;
                Ok(Self::run(start, days as usize))
            }
            Window::WeekContaining(date) => {
                let (monday, _) = Self::week_bounds(date);
                Ok(Self::run(monday, 7))
            }
        }
    }

    /// Monday and Sunday of the week containing `date`. A Sunday maps to
    /// the Monday six days prior.
    pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
        let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
        (monday, monday + Duration::days(6))
    }

    fn run(start: NaiveDate, len: usize) -> Vec<NaiveDate> {
        (0..len)
            .map(|offset| start + Duration::days(offset as i64))
            .collect()
    }
}
