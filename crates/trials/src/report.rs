use crate::TrialError;
use arenasim_core::ArenaResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrialRecord {
    pub index: u32,
    pub seed: u64,
    pub result: ArenaResult,
    pub event_count: usize,
}

impl TrialRecord {
    pub fn is_win(&self) -> bool {
        self.result == ArenaResult::Win
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkReport {
    pub local: String,
    pub remote: String,
    pub trials: Vec<TrialRecord>,
    pub wall_time_ms: u64,
}

impl BulkReport {
    pub fn trial_count(&self) -> usize {
        self.trials.len()
    }

    pub fn wins(&self) -> usize {
        self.trials.iter().filter(|trial| trial.is_win()).count()
    }

    /// `None` when no trial ran.
    pub fn win_ratio(&self) -> Option<f64> {
        if self.trials.is_empty() {
            return None;
        }
        Some(self.wins() as f64 / self.trials.len() as f64)
    }

    pub fn to_text_report(&self) -> String {
        let ratio = self
            .win_ratio()
            .map(|ratio| format!("{:.2}%", ratio * 100.0))
            .unwrap_or_else(|| "n/a".to_string());
        let mut lines = vec![
            format!("local: {}", self.local),
            format!("remote: {}", self.remote),
            format!(
                "wins: {}/{} ({ratio}) wall_ms: {}",
                self.wins(),
                self.trial_count(),
                self.wall_time_ms
            ),
            String::new(),
            "trials:".to_string(),
        ];
        if self.trials.is_empty() {
            lines.push("  (none)".to_string());
        }
        for trial in &self.trials {
            lines.push(format!(
                "  trial {:>4} | {} | seed {} | events {}",
                trial.index,
                result_label(trial.result),
                trial.seed,
                trial.event_count
            ));
        }
        lines.join("\n")
    }
}

fn result_label(result: ArenaResult) -> &'static str {
    match result {
        ArenaResult::Win => "Win",
        ArenaResult::Lose => "Lose",
        ArenaResult::TimeOver => "TimeOver",
    }
}

pub fn write_json(path: &Path, report: &BulkReport) -> Result<(), TrialError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(report)?;
    fs::write(path, body)?;
    Ok(())
}

pub fn write_text(path: &Path, report: &BulkReport) -> Result<(), TrialError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, report.to_text_report())?;
    Ok(())
}
