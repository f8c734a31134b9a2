use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("Could not restore checkpoint {0}")]
    Checkpoint(PathBuf),
    #[error("Environment failure: {0}")]
    Environment(String),
    #[error("Agent failure: {0}")]
    Agent(String),
}
