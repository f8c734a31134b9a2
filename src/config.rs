use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct BanditConfig {
    pub payouts: Vec<f64>,
    pub rewards: Vec<f64>,
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SimulationConfig {
    pub n_episodes: usize,
    pub log_every: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub log_level: String,
    pub bandit: BanditConfig,
    pub simulation: SimulationConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config"))
            .add_source(Environment::with_prefix("APP"))
            .build()?;

        builder.try_deserialize()
    }
}
