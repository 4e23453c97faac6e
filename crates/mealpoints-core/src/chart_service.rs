//! Display-series shaping for the report charts.

use mealpoints_domain::{ChartSlice, SliceLabel};

pub struct ChartService;

impl ChartService {
    /// Remaining-vs-spent slices for a ring chart.
    ///
    /// Inputs are clamped to non-negative rather than rejected; an upstream
    /// sign bug should degrade the picture, not kill the report. When both
    /// values are zero the series is a single unit placeholder so an empty
    /// ring still renders. Slice order is part of the contract: remaining
    /// always precedes spent.
    pub fn proportion(remaining: f64, spent: f64) -> Vec<ChartSlice> {
        let remaining = clamp_non_negative(remaining);
        let spent = clamp_non_negative(spent);
        if remaining == 0.0 && spent == 0.0 {
            return vec![ChartSlice {
                label: SliceLabel::Placeholder,
                value: 1.0,
            }];
        }
        vec![
            ChartSlice {
                label: SliceLabel::Remaining,
                value: remaining,
            },
            ChartSlice {
                label: SliceLabel::Spent,
                value: spent,
            },
        ]
    }
}

fn clamp_non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
