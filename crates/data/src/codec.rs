use arenasim_core::{
    Address, AvatarState, CollectionState, ItemSlotState, RuneSlotState, RuneState,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Encoded ledger value as returned by a [`crate::StateClient`].
pub type RawState = serde_json::Value;

#[derive(Debug, Error)]
#[error("malformed {kind} state at {address}: {reason}")]
pub struct MalformedState {
    pub address: Address,
    pub kind: &'static str,
    pub reason: String,
}

/// A typed state that can be decoded from a ledger value.
pub trait LedgerState: DeserializeOwned {
    const KIND: &'static str;
}

impl LedgerState for AvatarState {
    const KIND: &'static str = "avatar";
}

impl LedgerState for ItemSlotState {
    const KIND: &'static str = "item slot";
}

impl LedgerState for RuneSlotState {
    const KIND: &'static str = "rune slot";
}

impl LedgerState for RuneState {
    const KIND: &'static str = "rune";
}

impl LedgerState for CollectionState {
    const KIND: &'static str = "collection";
}

pub fn decode_state<T: LedgerState>(address: Address, raw: RawState) -> Result<T, MalformedState> {
    serde_json::from_value(raw).map_err(|err| MalformedState {
        address,
        kind: T::KIND,
        reason: err.to_string(),
    })
}

/// Decodes a fetched value, treating "nothing stored" as `Ok(None)`.
///
/// A stored JSON `null` counts as nothing stored. Any other value must decode
/// or the call fails.
pub fn decode_optional<T: LedgerState>(
    address: Address,
    raw: Option<RawState>,
) -> Result<Option<T>, MalformedState> {
    match raw {
        None | Some(RawState::Null) => Ok(None),
        Some(value) => decode_state(address, value).map(Some),
    }
}

pub fn encode_state<T: Serialize>(state: &T) -> Result<RawState, serde_json::Error> {
    serde_json::to_value(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arenasim_core::BattleType;
    use serde_json::json;

    fn addr() -> Address {
        Address::new([3; 20])
    }

    #[test]
    fn absent_and_null_decode_to_none() {
        let none: Option<RuneState> = decode_optional(addr(), None).expect("decode");
        assert!(none.is_none());
        let null: Option<RuneState> = decode_optional(addr(), Some(RawState::Null)).expect("decode");
        assert!(null.is_none());
    }

    #[test]
    fn present_value_decodes() {
        let raw = json!({ "battle_type": "Arena", "equipments": [], "costumes": ["c-1"] });
        let state: ItemSlotState = decode_state(addr(), raw).expect("decode");
        assert_eq!(state.battle_type, BattleType::Arena);
        assert_eq!(state.costumes.len(), 1);
    }

    #[test]
    fn wrong_shape_is_malformed_not_default() {
        let raw = json!(["not", "a", "rune"]);
        let err = decode_optional::<RuneState>(addr(), Some(raw)).expect_err("malformed");
        assert_eq!(err.kind, "rune");
        assert_eq!(err.address, addr());
        assert!(err.to_string().starts_with("malformed rune state at 0x0303"));
    }
}
