// Library root: re-exports all modules so integration tests and external
// consumers can access the crate's public API.

pub mod config;
pub mod loading;
pub mod model;
pub mod nav;
pub mod observable;
pub mod valuation;
