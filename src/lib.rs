//! Ledger for a small election: candidates per role, registered voters with
//! a single vote each, running tallies, and JSON persistence.

#[macro_use]
extern crate log;

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use model::{ElectionLedger, Registration, VoteError, VoteReceipt};
pub use store::{LoadOutcome, DEFAULT_DATA_PATH};
