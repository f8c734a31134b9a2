pub mod errors;

pub use errors::EvalError;

use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

pub struct Step<S> {
    pub state: S,
    pub reward: f64,
    pub done: bool,
    pub info: HashMap<String, f64>,
}

pub trait Environment {
    type State;
    type Action;

    fn reset(&mut self) -> Result<Self::State, EvalError>;
    fn step(&mut self, action: &Self::Action) -> Result<Step<Self::State>, EvalError>;
}

// the trained-policy side of the loop; the checkpoint format belongs to the implementor
pub trait Agent<S, A> {
    fn restore(&mut self, checkpoint: &Path) -> Result<(), EvalError>;
    fn compute_action(&mut self, state: &S) -> Result<A, EvalError>;
}

#[derive(Clone, Debug, Serialize)]
pub struct EvaluationReport {
    pub n_episodes: usize,
    pub episode_total_rewards: Vec<f64>,
    pub episode_mean_rewards: Vec<f64>,
    pub mean_total_reward: f64,
    pub mean_step_reward: f64,
}

pub struct Evaluator {
    n_episodes: usize,
}

impl Evaluator {
    pub fn new(n_episodes: usize) -> Self {
        Self { n_episodes }
    }

    pub fn run<E, A>(&self, env: &mut E, agent: &mut A) -> Result<EvaluationReport, EvalError>
    where
        E: Environment,
        A: Agent<E::State, E::Action>,
    {
        let mut episode_total_rewards = Vec::with_capacity(self.n_episodes);
        let mut episode_mean_rewards = Vec::with_capacity(self.n_episodes);

        for episode in 0..self.n_episodes {
            let mut state = env.reset()?;
            let mut total_reward = 0.0;
            let mut steps = 0u64;

            loop {
                let action = agent.compute_action(&state)?;
                let step = env.step(&action)?;

                total_reward += step.reward;
                steps += 1;
                state = step.state;

                if step.done {
                    break;
                }
            }

            let mean_reward = total_reward / steps as f64;
            episode_total_rewards.push(total_reward);
            episode_mean_rewards.push(mean_reward);

            info!(
                "Episode {}: total reward {}, reward per step {}",
                episode + 1,
                total_reward,
                mean_reward
            );
            info!(
                "Over {} episodes: average total reward {}, average reward per step {}",
                episode + 1,
                mean(&episode_total_rewards),
                mean(&episode_mean_rewards)
            );
        }

        Ok(EvaluationReport {
            n_episodes: self.n_episodes,
            mean_total_reward: mean(&episode_total_rewards),
            mean_step_reward: mean(&episode_mean_rewards),
            episode_total_rewards,
            episode_mean_rewards,
        })
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
