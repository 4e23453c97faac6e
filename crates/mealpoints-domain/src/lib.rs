//! mealpoints-domain
//!
//! Pure domain models for the campus points ledger (entries, balances,
//! budget limits) and the derived report structures built from them.
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod balance;
pub mod budget;
pub mod report;
pub mod snapshot;
pub mod transaction;

pub use balance::*;
pub use budget::*;
pub use report::*;
pub use snapshot::*;
pub use transaction::*;
