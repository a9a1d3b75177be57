use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use ludo_core::DieValue;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    #[error("scripted dice ran out of values")]
    Exhausted,

    #[error("die value {0} is outside 1..=6")]
    OutOfRange(u8),
}

/// Trusted source of die values.
///
/// The session layer draws from an oracle inside each commit attempt; clients
/// never supply the value.
pub trait DiceOracle: Send + Sync {
    fn roll(&self) -> Result<DieValue, DiceError>;
}

/// Uniform 1..=6 from a [`StdRng`].
pub struct RandomDice {
    rng: Mutex<StdRng>,
}

impl RandomDice {
    /// Seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible sequence for simulations.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomDice {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceOracle for RandomDice {
    fn roll(&self) -> Result<DieValue, DiceError> {
        // A poisoned rng is still a valid rng.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let value = rng.gen_range(1..=6);
        DieValue::new(value).ok_or(DiceError::OutOfRange(value))
    }
}

/// Replays a fixed list of values, for tests.
pub struct ScriptedDice {
    values: Mutex<VecDeque<u8>>,
}

impl ScriptedDice {
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        Self {
            values: Mutex::new(values.into_iter().collect()),
        }
    }

    pub fn remaining(&self) -> usize {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl DiceOracle for ScriptedDice {
    fn roll(&self) -> Result<DieValue, DiceError> {
        let value = self
            .values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .ok_or(DiceError::Exhausted)?;
        DieValue::new(value).ok_or(DiceError::OutOfRange(value))
    }
}
