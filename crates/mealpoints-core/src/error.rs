use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed window request (non-positive day count, week bounds that
    /// are not a Monday..Sunday pair). Fatal to the call, never coerced.
    ///
    /// Data-quality problems are deliberately not represented here: a
    /// non-finite amount counts as zero and a missing budget match is an
    /// ordinary `None`, because a single bad ledger row must never blank
    /// an entire report.
    #[error("Invalid reporting window: {0}")]
    InvalidWindow(String),
}
