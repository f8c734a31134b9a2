pub mod errors;
mod rng;

pub use errors::EnvError;
pub use rng::MaybeSeededRng;

use rand::Rng;

pub struct BanditEnv {
    payouts: Vec<f64>,
    rewards: Vec<f64>,
    rng: MaybeSeededRng,
}

impl BanditEnv {
    pub fn new(payouts: Vec<f64>, rewards: Vec<f64>, seed: Option<u64>) -> Result<Self, EnvError> {
        if payouts.len() != rewards.len() {
            return Err(EnvError::ArmCountMismatch {
                payouts: payouts.len(),
                rewards: rewards.len(),
            });
        }
        if payouts.is_empty() {
            return Err(EnvError::NoArms);
        }
        if let Some(&payout) = payouts.iter().find(|payout| !(0.0..=1.0).contains(*payout)) {
            return Err(EnvError::InvalidPayout(payout));
        }

        Ok(Self {
            payouts,
            rewards,
            rng: MaybeSeededRng::new(seed),
        })
    }

    pub fn n_arms(&self) -> usize {
        self.payouts.len()
    }

    pub fn step(&mut self, arm_id: usize) -> Result<f64, EnvError> {
        let payout = *self.payouts.get(arm_id).ok_or(EnvError::ArmOutOfRange {
            arm_id,
            n_arms: self.payouts.len(),
        })?;

        if self.rng.get_rng().random::<f64>() < payout {
            Ok(self.rewards[arm_id])
        } else {
            Ok(0.0)
        }
    }
}
