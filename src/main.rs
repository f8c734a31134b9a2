use bandit_sim::config::AppConfig;
use bandit_sim::env::BanditEnv;
use bandit_sim::errors::AppError;
use bandit_sim::policies::Ucb;
use bandit_sim::simulation::Simulation;

use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AppError> {
    let config = AppConfig::from_env().expect("Cannot read config");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let env = BanditEnv::new(config.bandit.payouts, config.bandit.rewards, config.bandit.seed)?;
    let policy = Ucb::new(env.n_arms());
    let mut simulation = Simulation::new(env, policy, &config.simulation);

    let report = simulation.run()?;

    for (arm_id, arm) in report.stats.arms.iter().enumerate() {
        info!(
            "Arm {}: {} pulls, mean reward {}",
            arm_id, arm.pulls, arm.mean_reward
        );
    }

    if let Some(path) = &config.output.path {
        report.write_json(path)?;
        info!("Report written to '{}'", path.display());
    }

    Ok(())
}
