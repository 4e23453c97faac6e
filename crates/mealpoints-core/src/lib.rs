//! mealpoints-core
//!
//! Spend aggregation and reporting engine for the campus points ledger.
//! Pure transformations from ledger entries, a balance snapshot, and
//! budget-limit records into time-bucketed, chart-ready summaries.
//! Depends on mealpoints-domain. No CLI, no terminal I/O, no storage
//! interactions, no ambient clock: callers inject "today" and the local
//! offset, so identical inputs always produce identical reports.

pub mod aggregate;
pub mod axis;
pub mod budget_service;
pub mod chart_service;
pub mod classify;
pub mod error;
pub mod report_service;

pub use aggregate::*;
pub use axis::*;
pub use budget_service::*;
pub use chart_service::*;
pub use classify::*;
pub use error::CoreError;
pub use report_service::*;

#[cfg(test)]
mod tests;
