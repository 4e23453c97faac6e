//! Report assembly for the trend and budget views.

use chrono::{FixedOffset, NaiveDate};

use mealpoints_domain::{
    BalanceSnapshot, BudgetLimit, BudgetReport, LedgerEntry, Period, SpendTotals, SpendType,
    TrendReport,
};

use crate::{
    aggregate::AggregationService, axis::AxisService, axis::Window,
    budget_service::BudgetService, chart_service::ChartService, classify::NoteClassifier,
    CoreError,
};

pub struct ReportService;

impl ReportService {
    /// Spend trend over the trailing `days` ending on `today`.
    ///
    /// `today` and `tz` are injected by the caller, read once per render:
    /// the engine never touches ambient time, so identical inputs produce
    /// identical reports.
    pub fn trend_report(
        balances: &BalanceSnapshot,
        entries: &[LedgerEntry],
        days: u32,
        today: NaiveDate,
        tz: FixedOffset,
    ) -> Result<TrendReport, CoreError> {
        tracing::debug!(days, %today, "building trend report");
        let axis = AxisService::build(&Window::TrailingDays { days, end: today })?;
        let points = AggregationService::spend_by_day(&axis, entries, tz);
        let totals = SpendTotals {
            dining: points.iter().map(|point| point.dining).sum(),
            convenience: points.iter().map(|point| point.convenience).sum(),
        };
        Ok(TrendReport {
            points,
            totals,
            remaining: SpendTotals {
                dining: balances.dining_points,
                convenience: balances.convenience_points,
            },
            today,
        })
    }

    /// Monday..Sunday budget view: dining daily breakdown, convenience
    /// category totals, the remaining-vs-spent ring, and any weekly limits
    /// found in the candidate set.
    ///
    /// `budgets` is the pre-filtered candidate set (the caller selects
    /// limits overlapping the week); `entries` are expected pre-filtered to
    /// the same window.
    pub fn budget_report(
        balances: &BalanceSnapshot,
        entries: &[LedgerEntry],
        budgets: &[BudgetLimit],
        week_start: NaiveDate,
        week_end: NaiveDate,
        tz: FixedOffset,
        classifier: &dyn NoteClassifier,
    ) -> Result<BudgetReport, CoreError> {
        tracing::debug!(%week_start, %week_end, "building budget report");
        let axis = AxisService::build(&Window::WeekContaining(week_start))?;
        if axis.first() != Some(&week_start) || axis.last() != Some(&week_end) {
            return Err(CoreError::InvalidWindow(format!(
                "expected a Monday..Sunday week, got {week_start}..{week_end}"
            )));
        }

        let daily_breakdown =
            AggregationService::daily_spend(&axis, entries, tz, SpendType::Dining);
        let weekly_total = daily_breakdown.iter().map(|day| day.spent).sum();

        let category_totals = AggregationService::totals_by_category(entries, classifier);
        let convenience_spent: f64 = category_totals.iter().map(|row| row.spent).sum();
        let convenience_remaining = balances.convenience_points.max(0.0);
        let proportion = ChartService::proportion(convenience_remaining, convenience_spent);

        Ok(BudgetReport {
            week_start,
            week_end,
            daily_breakdown,
            weekly_total,
            swipes_remaining: balances.swipes_remaining,
            category_totals,
            convenience_remaining,
            convenience_spent,
            proportion,
            dining_budget: BudgetService::resolve(budgets, SpendType::Dining, Period::Weekly)
                .cloned(),
            convenience_budget:
                BudgetService::resolve(budgets, SpendType::Convenience, Period::Weekly).cloned(),
        })
    }
}
