use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("Arm {arm_id} out of range for an environment with {n_arms} arms")]
    ArmOutOfRange { arm_id: usize, n_arms: usize },
    #[error("Got {payouts} payout probabilities but {rewards} reward values")]
    ArmCountMismatch { payouts: usize, rewards: usize },
    #[error("An environment needs at least one arm")]
    NoArms,
    #[error("Payout probability {0} outside [0, 1]")]
    InvalidPayout(f64),
}
