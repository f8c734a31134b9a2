use super::errors::PolicyError;
use super::policy::{ArmStats, Policy, PolicyStats};

#[derive(Clone, Debug, Default)]
struct UcbArm {
    pulls: u64,
    total_reward: f64,
}

impl UcbArm {
    fn mean_reward(&self) -> f64 {
        if self.pulls == 0 {
            0.0
        } else {
            self.total_reward / self.pulls as f64
        }
    }

    // an unpulled arm scores infinity so every arm is drawn once before the bound applies
    fn score(&self, t: u64) -> f64 {
        if self.pulls == 0 {
            f64::INFINITY
        } else {
            self.mean_reward() + (2.0 * (t as f64).ln() / self.pulls as f64).sqrt()
        }
    }

    fn update(&mut self, reward: f64) {
        self.pulls += 1;
        self.total_reward += reward;
    }

    fn reset(&mut self) {
        self.pulls = 0;
        self.total_reward = 0.0;
    }

    fn stats(&self) -> ArmStats {
        ArmStats {
            pulls: self.pulls,
            total_reward: self.total_reward,
            mean_reward: self.mean_reward(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Ucb {
    arms: Vec<UcbArm>,
}

impl Ucb {
    pub fn new(n_arms: usize) -> Self {
        Self {
            arms: vec![UcbArm::default(); n_arms],
        }
    }

    fn total_pulls(&self) -> u64 {
        self.arms.iter().map(|arm| arm.pulls).sum()
    }
}

impl Policy for Ucb {
    fn n_arms(&self) -> usize {
        self.arms.len()
    }

    fn reset(&mut self) {
        self.arms.iter_mut().for_each(|arm| arm.reset());
    }

    fn draw(&mut self) -> Result<usize, PolicyError> {
        // t is the 1-indexed number of the round being played; ties keep the lowest arm id
        let t = self.total_pulls() + 1;
        self.arms
            .iter()
            .enumerate()
            .map(|(arm_id, arm)| (arm_id, arm.score(t)))
            .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
            .map(|(arm_id, _)| arm_id)
            .ok_or(PolicyError::NoArmsAvailable)
    }

    fn update(&mut self, arm_id: usize, reward: f64) -> Result<(), PolicyError> {
        self.arms
            .get_mut(arm_id)
            .map(|arm| arm.update(reward))
            .ok_or(PolicyError::ArmNotFound(arm_id))
    }

    fn stats(&self) -> PolicyStats {
        PolicyStats {
            arms: self.arms.iter().map(|arm| arm.stats()).collect(),
        }
    }
}
