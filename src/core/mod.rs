pub mod budget;
pub mod errors;
pub mod ledger;
pub mod models;
pub mod money;
pub mod reports;
pub mod services;
pub mod split;
