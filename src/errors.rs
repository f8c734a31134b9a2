use crate::env::errors::EnvError;
use crate::policies::errors::PolicyError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Env(#[from] EnvError),
    #[error(transparent)]
    Policy(#[from] PolicyError),
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error while writing report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report to JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Env(#[from] EnvError),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
