use crate::config::SimulationConfig;
use crate::env::BanditEnv;
use crate::errors::{PersistenceError, SimulationError};
use crate::policies::{Policy, PolicyStats};

use serde::Serialize;
use std::path::Path;
use tracing::info;
use uuid::Uuid;

pub struct Simulation<P: Policy> {
    env: BanditEnv,
    policy: P,
    n_episodes: usize,
    log_every: usize,
}

#[derive(Clone, Debug, Serialize)]
pub struct SimulationReport {
    pub run_id: Uuid,
    pub n_episodes: usize,
    pub total_reward: f64,
    pub actions: Vec<usize>,
    pub rewards: Vec<f64>,
    pub stats: PolicyStats,
    // one series per arm, one point per episode, meant for a log-scale episode axis
    pub average_rewards: Vec<Vec<f64>>,
}

impl SimulationReport {
    pub fn write_json(&self, path: &Path) -> Result<(), PersistenceError> {
        let serialized = serde_json::to_string(self)?;
        std::fs::write(path, serialized)?;
        Ok(())
    }
}

impl<P: Policy> Simulation<P> {
    pub fn new(env: BanditEnv, policy: P, config: &SimulationConfig) -> Self {
        Self {
            env,
            policy,
            n_episodes: config.n_episodes,
            log_every: config.log_every,
        }
    }

    pub fn run(&mut self) -> Result<SimulationReport, SimulationError> {
        let run_id = Uuid::new_v4();
        let n_arms = self.policy.n_arms();

        let mut actions = Vec::with_capacity(self.n_episodes);
        let mut rewards = Vec::with_capacity(self.n_episodes);
        let mut average_rewards = vec![Vec::with_capacity(self.n_episodes); n_arms];
        let mut total_reward = 0.0;

        info!(
            "Starting run {} with {} arms for {} episodes",
            run_id, n_arms, self.n_episodes
        );

        for episode in 0..self.n_episodes {
            let arm_id = self.policy.draw()?;
            let reward = self.env.step(arm_id)?;
            self.policy.update(arm_id, reward)?;

            total_reward += reward;
            actions.push(arm_id);
            rewards.push(reward);

            let stats = self.policy.stats();
            for (series, arm) in average_rewards.iter_mut().zip(&stats.arms) {
                series.push(arm.mean_reward);
            }

            if self.log_every != 0 && (episode + 1) % self.log_every == 0 {
                info!(
                    "Episode {}: total reward {}, average reward {}",
                    episode + 1,
                    total_reward,
                    total_reward / (episode + 1) as f64
                );
            }
        }

        Ok(SimulationReport {
            run_id,
            n_episodes: self.n_episodes,
            total_reward,
            actions,
            rewards,
            stats: self.policy.stats(),
            average_rewards,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::Ucb;

    const SEED: u64 = 1234;

    fn simulation(
        payouts: Vec<f64>,
        rewards: Vec<f64>,
        n_episodes: usize,
    ) -> Simulation<Ucb> {
        let env = BanditEnv::new(payouts, rewards, Some(SEED)).unwrap();
        let policy = Ucb::new(env.n_arms());
        let config = SimulationConfig {
            n_episodes,
            log_every: 0,
        };

        Simulation::new(env, policy, &config)
    }

    #[test]
    fn every_arm_explored_once_in_first_rounds() {
        let report = simulation(vec![0.01, 0.015, 0.03], vec![1.0, 1.0, 1.0], 3)
            .run()
            .unwrap();

        assert_eq!(report.actions, vec![0, 1, 2]);
        assert!(report.stats.arms.iter().all(|arm| arm.pulls == 1));
    }

    #[test]
    fn pulls_match_selection_counts() {
        let report = simulation(vec![0.2, 0.5, 0.8], vec![1.0, 1.0, 1.0], 500)
            .run()
            .unwrap();

        for (arm_id, arm) in report.stats.arms.iter().enumerate() {
            let selected = report.actions.iter().filter(|&&a| a == arm_id).count();
            assert_eq!(arm.pulls, selected as u64);
        }
        assert_eq!(report.actions.len(), 500);
        assert_eq!(report.rewards.len(), 500);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let first = simulation(vec![0.1, 0.3, 0.5], vec![1.0, 2.0, 3.0], 1_000)
            .run()
            .unwrap();
        let second = simulation(vec![0.1, 0.3, 0.5], vec![1.0, 2.0, 3.0], 1_000)
            .run()
            .unwrap();

        assert_eq!(first.actions, second.actions);
        assert_eq!(first.rewards, second.rewards);
        assert_eq!(first.total_reward, second.total_reward);
    }

    #[test]
    fn certain_arm_dominates_pull_counts() {
        let report = simulation(vec![1.0, 0.0, 0.0], vec![1.0, 1.0, 1.0], 2_000)
            .run()
            .unwrap();

        let pulls: Vec<u64> = report.stats.arms.iter().map(|arm| arm.pulls).collect();
        assert!(pulls[0] > pulls[1] + pulls[2]);
    }

    #[test]
    fn average_reward_series_track_arm_statistics() {
        let report = simulation(vec![0.2, 0.4], vec![1.0, 1.0], 200).run().unwrap();

        assert_eq!(report.average_rewards.len(), 2);
        for (arm_id, series) in report.average_rewards.iter().enumerate() {
            assert_eq!(series.len(), 200);
            assert_eq!(*series.last().unwrap(), report.stats.arms[arm_id].mean_reward);
        }
        // only arm 0 has been pulled after the first episode
        assert_eq!(report.average_rewards[1][0], 0.0);
    }

    #[test]
    fn total_reward_matches_recorded_rewards() {
        let report = simulation(vec![0.5, 0.5], vec![1.0, 2.0], 300).run().unwrap();

        let summed: f64 = report.rewards.iter().sum();
        assert_eq!(report.total_reward, summed);
    }
}
