//! Seeded arena trials between a local loadout and a ledger opponent.

mod cancel;
mod config;
mod error;
mod report;
mod runner;
mod seed;

pub use cancel::*;
pub use config::*;
pub use error::*;
pub use report::*;
pub use runner::*;
pub use seed::*;
