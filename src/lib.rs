pub mod api;
pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;

pub use crate::core::errors::LedgerError;
pub use crate::core::ledger::LedgerEngine;
pub use crate::core::money::Money;
pub use crate::core::services::SplitService;
pub use crate::core::split::{ShareMap, SplitCalculator};
pub use infrastructure::storage::in_memory::InMemoryStorage;

#[cfg(test)]
mod tests;
