use crate::{resolve_seed, BulkReport, CancelToken, TrialConfig, TrialError, TrialRecord};
use arenasim_core::{
    Address, ArenaLog, ArenaMatch, ArenaSettings, BattleType, CollectionState, CombatSimulator,
    Item, ItemSlotState, LocalStates, PlayerDigest, RngState, RuneSlotState, RuneState,
    StatModifier, TableSheets,
};
use arenasim_data::{decode_optional, AccountNamespace, LedgerState, StateClient, StateFetchError};
use std::time::Instant;

/// Items the local player tries on for the run. Never persisted.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverrideItems<'a> {
    pub equipment: &'a [Item],
    pub costumes: &'a [Item],
    pub consumables: &'a [Item],
}

/// Optional hooks for a run. Callbacks fire synchronously on the caller's
/// thread.
#[derive(Default)]
pub struct TrialCallbacks<'a> {
    /// Called after each trial with its 0-based index.
    pub on_progress: Option<&'a mut dyn FnMut(u32)>,
    pub on_log: Option<&'a mut dyn FnMut(&str)>,
    pub cancel: Option<CancelToken>,
}

impl TrialCallbacks<'_> {
    fn progress(&mut self, index: u32) {
        if let Some(callback) = self.on_progress.as_deref_mut() {
            callback(index);
        }
    }

    fn log(&mut self, message: &str) {
        if let Some(callback) = self.on_log.as_deref_mut() {
            callback(message);
        }
    }

    fn logging(&self) -> bool {
        self.on_log.is_some()
    }
}

fn check_cancelled(cancel: Option<&CancelToken>) -> Result<(), TrialError> {
    match cancel {
        Some(token) if token.is_cancelled() => Err(TrialError::Cancelled),
        _ => Ok(()),
    }
}

/// Both digests and effect sets, fully resolved before any trial runs and
/// shared read-only by every trial.
#[derive(Debug, Clone)]
pub struct TrialContext {
    pub local: PlayerDigest,
    pub remote: PlayerDigest,
    pub local_effects: Vec<StatModifier>,
    pub remote_effects: Vec<StatModifier>,
    pub settings: ArenaSettings,
}

pub struct ArenaTrialRunner<C, S> {
    client: C,
    simulator: S,
}

impl<C: StateClient, S: CombatSimulator> ArenaTrialRunner<C, S> {
    pub fn new(client: C, simulator: S) -> Self {
        Self { client, simulator }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn simulator(&self) -> &S {
        &self.simulator
    }

    /// Builds the local digest from `local` with `overrides` applied and the
    /// remote digest from ledger state at `remote`.
    ///
    /// Every address is fetched once, in order: avatar, item slots, rune
    /// slots, then one rune state per equipped rune. Absent slot states count
    /// as empty; absent rune states are skipped.
    pub fn build_digests(
        &self,
        local: &LocalStates,
        overrides: &OverrideItems<'_>,
        remote: Address,
        battle_type: BattleType,
        cancel: Option<&CancelToken>,
    ) -> Result<(PlayerDigest, PlayerDigest), TrialError> {
        let local_avatar = local.avatar.flyweight(
            overrides.equipment,
            overrides.costumes,
            overrides.consumables,
        );
        let local_digest =
            PlayerDigest::from_avatar(&local_avatar, local.equipped_rune_states(battle_type));

        check_cancelled(cancel)?;
        let avatar = self
            .client
            .get_avatar_states(&[remote])?
            .remove(&remote)
            .ok_or(StateFetchError::AvatarNotFound(remote))?;
        tracing::debug!(%remote, name = %avatar.name, level = avatar.level, "fetched remote avatar");

        let item_slot_address = ItemSlotState::derive_address(remote, battle_type);
        let item_slots: ItemSlotState = self
            .fetch(AccountNamespace::Legacy, item_slot_address, cancel)?
            .unwrap_or_else(|| ItemSlotState::empty(battle_type));

        let rune_slot_address = RuneSlotState::derive_address(remote, battle_type);
        let rune_slots: RuneSlotState = self
            .fetch(AccountNamespace::Legacy, rune_slot_address, cancel)?
            .unwrap_or_else(|| RuneSlotState::empty(battle_type));

        let mut runes = Vec::new();
        for info in rune_slots.equipped_rune_slot_infos() {
            let address = RuneState::derive_address(remote, info.rune_id);
            match self.fetch::<RuneState>(AccountNamespace::Legacy, address, cancel)? {
                Some(rune) => runes.push(rune),
                None => tracing::debug!(rune_id = info.rune_id, %remote, "rune state absent, skipped"),
            }
        }

        let remote_digest = PlayerDigest::from_item_slots(&avatar, &item_slots, runes);
        Ok((local_digest, remote_digest))
    }

    /// Collection progress of `avatar`; absent means nothing collected.
    pub fn fetch_collection_state(
        &self,
        avatar: Address,
        cancel: Option<&CancelToken>,
    ) -> Result<CollectionState, TrialError> {
        Ok(self
            .fetch(AccountNamespace::Collection, avatar, cancel)?
            .unwrap_or_default())
    }

    /// Resolves everything a batch of trials needs.
    pub fn prepare(
        &self,
        sheets: &TableSheets,
        local: &LocalStates,
        overrides: &OverrideItems<'_>,
        remote: Address,
        battle_type: BattleType,
        cancel: Option<&CancelToken>,
    ) -> Result<TrialContext, TrialError> {
        let (local_digest, remote_digest) =
            self.build_digests(local, overrides, remote, battle_type, cancel)?;
        let remote_collection = self.fetch_collection_state(remote, cancel)?;
        Ok(TrialContext {
            local: local_digest,
            remote: remote_digest,
            local_effects: local.collection.effects(&sheets.collection),
            remote_effects: remote_collection.effects(&sheets.collection),
            settings: ArenaSettings::from_game_config(&local.game_config),
        })
    }

    /// Plays one match; `None` seeds from the wall clock.
    pub fn run_single(
        &self,
        sheets: &TableSheets,
        context: &TrialContext,
        seed: Option<u64>,
    ) -> Result<bool, TrialError> {
        let log = self.run_trial(sheets, context, resolve_seed(seed), true)?;
        Ok(log.is_win())
    }

    fn run_trial(
        &self,
        sheets: &TableSheets,
        context: &TrialContext,
        seed: u64,
        verbose: bool,
    ) -> Result<ArenaLog, TrialError> {
        let mut rng = RngState::from_seed(seed);
        let arena = ArenaMatch {
            local: &context.local,
            remote: &context.remote,
            sheets: sheets.arena_simulator_sheets(),
            local_effects: &context.local_effects,
            remote_effects: &context.remote_effects,
            debuff_limits: &sheets.debuff_limits,
            settings: context.settings,
        };
        Ok(self.simulator.simulate(&mut rng, &arena, verbose)?)
    }

    /// Runs `config.trial_count` matches against `remote` and reports every
    /// outcome.
    ///
    /// Nothing is fetched when the trial count is zero. Any fetch, decode or
    /// simulator error aborts the whole run without a partial report.
    pub fn run_bulk_report(
        &self,
        sheets: &TableSheets,
        local: &LocalStates,
        overrides: &OverrideItems<'_>,
        remote: Address,
        config: &TrialConfig,
        callbacks: &mut TrialCallbacks<'_>,
    ) -> Result<BulkReport, TrialError> {
        if config.trial_count == 0 {
            return Err(TrialError::InvalidArgument(
                "trial count must be positive".to_string(),
            ));
        }
        let started = Instant::now();
        let cancel = callbacks.cancel.clone();
        let context = self.prepare(
            sheets,
            local,
            overrides,
            remote,
            config.battle_type,
            cancel.as_ref(),
        )?;

        if config.log_digests && callbacks.logging() {
            let summary = format!(
                "avatar: {}({})\n{}\n{}",
                local.avatar.name,
                local.avatar.address,
                context.local.summary("my"),
                context.remote.summary("enemy")
            );
            callbacks.log(&summary);
        }

        let mut trials = Vec::with_capacity(config.trial_count as usize);
        for index in 0..config.trial_count {
            check_cancelled(cancel.as_ref())?;
            let seed = resolve_seed(config.seed.seed_for(index));
            let log = self.run_trial(sheets, &context, seed, config.verbose_log)?;
            tracing::trace!(index, seed, result = ?log.result, "trial finished");
            callbacks.log(&format!("trial {index} done, win: {}", log.is_win()));
            trials.push(TrialRecord {
                index,
                seed,
                result: log.result,
                event_count: log.events.len(),
            });
            callbacks.progress(index);
        }

        let report = BulkReport {
            local: context.local.name().to_string(),
            remote: context.remote.name().to_string(),
            trials,
            wall_time_ms: started.elapsed().as_millis() as u64,
        };
        tracing::info!(
            %remote,
            wins = report.wins(),
            trials = report.trial_count(),
            "bulk arena simulation done"
        );
        callbacks.log(&format!(
            "bulk simulation done, {}/{}",
            report.wins(),
            report.trial_count()
        ));
        Ok(report)
    }

    /// Win ratio in `[0, 1]` over `config.trial_count` matches.
    pub fn run_bulk(
        &self,
        sheets: &TableSheets,
        local: &LocalStates,
        overrides: &OverrideItems<'_>,
        remote: Address,
        config: &TrialConfig,
        callbacks: &mut TrialCallbacks<'_>,
    ) -> Result<f64, TrialError> {
        let report = self.run_bulk_report(sheets, local, overrides, remote, config, callbacks)?;
        report
            .win_ratio()
            .ok_or_else(|| TrialError::InvalidArgument("no trials ran".to_string()))
    }

    fn fetch<T: LedgerState>(
        &self,
        namespace: AccountNamespace,
        address: Address,
        cancel: Option<&CancelToken>,
    ) -> Result<Option<T>, TrialError> {
        check_cancelled(cancel)?;
        let raw = self.client.get_state(namespace, address)?;
        Ok(decode_optional(address, raw)?)
    }
}
