use crate::RawState;
use arenasim_core::{Address, AvatarState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Account a state lives under on the ledger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AccountNamespace {
    /// Avatar-scoped states such as item slots, rune slots and runes.
    Legacy,
    /// Collection progress, keyed by avatar address.
    Collection,
}

#[derive(Debug, Error)]
pub enum StateFetchError {
    #[error("state request for {address} failed: {reason}")]
    Request { address: Address, reason: String },
    #[error("no avatar state at {0}")]
    AvatarNotFound(Address),
}

/// Read access to the remote ledger.
///
/// `Ok(None)` means nothing is stored at the address; transport failures
/// are reported as errors and never folded into `None`.
pub trait StateClient {
    fn get_state(
        &self,
        namespace: AccountNamespace,
        address: Address,
    ) -> Result<Option<RawState>, StateFetchError>;

    /// Avatars that exist are returned; missing addresses are simply absent
    /// from the map.
    fn get_avatar_states(
        &self,
        addresses: &[Address],
    ) -> Result<HashMap<Address, AvatarState>, StateFetchError>;
}

impl<T: StateClient + ?Sized> StateClient for &T {
    fn get_state(
        &self,
        namespace: AccountNamespace,
        address: Address,
    ) -> Result<Option<RawState>, StateFetchError> {
        (**self).get_state(namespace, address)
    }

    fn get_avatar_states(
        &self,
        addresses: &[Address],
    ) -> Result<HashMap<Address, AvatarState>, StateFetchError> {
        (**self).get_avatar_states(addresses)
    }
}
