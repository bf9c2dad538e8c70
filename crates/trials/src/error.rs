use arenasim_core::SimulationFault;
use arenasim_data::{MalformedState, StateFetchError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrialError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    StateFetch(#[from] StateFetchError),
    #[error(transparent)]
    MalformedState(#[from] MalformedState),
    #[error(transparent)]
    Simulation(#[from] SimulationFault),
    #[error("trial run cancelled")]
    Cancelled,
    #[error("io error: {0}")]
    Io(String),
    #[error("serialize error: {0}")]
    Serialize(String),
}

impl From<std::io::Error> for TrialError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

impl From<serde_json::Error> for TrialError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value.to_string())
    }
}
