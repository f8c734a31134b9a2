use super::errors::PolicyError;

use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct ArmStats {
    pub pulls: u64,
    pub total_reward: f64,
    pub mean_reward: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct PolicyStats {
    pub arms: Vec<ArmStats>,
}

pub trait Policy {
    fn n_arms(&self) -> usize;
    fn reset(&mut self);
    fn draw(&mut self) -> Result<usize, PolicyError>;
    fn update(&mut self, arm_id: usize, reward: f64) -> Result<(), PolicyError>;
    fn stats(&self) -> PolicyStats;
}
