//! Arena model: items, the stacked inventory, ledger-side states, player
//! digests and the combat simulator seam. Keep this crate free of IO.

pub mod address;
pub mod arena;
pub mod config;
pub mod digest;
pub mod events;
pub mod inventory;
pub mod items;
pub mod rng;
pub mod rules;
pub mod state;

pub use address::*;
pub use arena::*;
pub use config::*;
pub use digest::*;
pub use events::*;
pub use inventory::*;
pub use items::*;
pub use rng::*;
pub use rules::*;
pub use state::*;
