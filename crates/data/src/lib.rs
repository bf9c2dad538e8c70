//! Ledger access, state decoding and rule-table loading.

pub mod codec;
pub mod ledger;
pub mod load;
pub mod schema;
pub mod snapshot;

pub use codec::*;
pub use ledger::*;
pub use load::*;
pub use schema::*;
pub use snapshot::*;
