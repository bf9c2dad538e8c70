use crate::{encode_state, AccountNamespace, RawState, StateClient, StateFetchError};
use anyhow::Context;
use arenasim_core::{Address, AvatarState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub namespace: AccountNamespace,
    pub address: Address,
    pub value: RawState,
}

/// On-disk form of a [`LedgerSnapshot`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotFile {
    #[serde(default)]
    pub avatars: Vec<AvatarState>,
    #[serde(default)]
    pub states: Vec<SnapshotEntry>,
}

/// Frozen copy of ledger states that answers [`StateClient`] queries
/// offline.
#[derive(Debug, Default)]
pub struct LedgerSnapshot {
    avatars: HashMap<Address, AvatarState>,
    states: HashMap<(AccountNamespace, Address), RawState>,
    requests: AtomicUsize,
}

impl LedgerSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file(file: SnapshotFile) -> Self {
        let mut snapshot = Self::new();
        for avatar in file.avatars {
            snapshot.insert_avatar(avatar);
        }
        for entry in file.states {
            snapshot.insert_raw(entry.namespace, entry.address, entry.value);
        }
        snapshot
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let file: SnapshotFile =
            serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            avatars = file.avatars.len(),
            states = file.states.len(),
            "loaded ledger snapshot"
        );
        Ok(Self::from_file(file))
    }

    pub fn insert_avatar(&mut self, avatar: AvatarState) {
        self.avatars.insert(avatar.address, avatar);
    }

    pub fn insert_raw(&mut self, namespace: AccountNamespace, address: Address, value: RawState) {
        self.states.insert((namespace, address), value);
    }

    pub fn insert_state<T: Serialize>(
        &mut self,
        namespace: AccountNamespace,
        address: Address,
        state: &T,
    ) -> Result<(), serde_json::Error> {
        let value = encode_state(state)?;
        self.insert_raw(namespace, address, value);
        Ok(())
    }

    /// Number of client calls served so far.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }
}

impl StateClient for LedgerSnapshot {
    fn get_state(
        &self,
        namespace: AccountNamespace,
        address: Address,
    ) -> Result<Option<RawState>, StateFetchError> {
        self.requests.fetch_add(1, Ordering::Relaxed);
        Ok(self.states.get(&(namespace, address)).cloned())
    }

    fn get_avatar_states(
        &self,
        addresses: &[Address],
    ) -> Result<HashMap<Address, AvatarState>, StateFetchError> {
        self.requests.fetch_add(1, Ordering::Relaxed);
        Ok(addresses
            .iter()
            .filter_map(|address| {
                self.avatars
                    .get(address)
                    .map(|avatar| (*address, avatar.clone()))
            })
            .collect())
    }
}
