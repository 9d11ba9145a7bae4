//! Random legal move used whenever the completion endpoint gives nothing usable.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::legal_moves::LegalMoveSet;
use crate::move_token::MoveToken;

pub trait FallbackSelector: Send + Sync {
    /// Pick one member of `moves`. Returns None only for an empty set.
    fn pick(&self, moves: &LegalMoveSet) -> Option<MoveToken>;
}

/// Uniform pick over the legal moves.
///
/// `new()` draws from the thread RNG; `seeded()` gives a reproducible
/// sequence for tests.
pub struct RandomFallback {
    seeded: Option<Mutex<StdRng>>,
}

impl RandomFallback {
    pub fn new() -> Self {
        Self { seeded: None }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            seeded: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }
}

impl Default for RandomFallback {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackSelector for RandomFallback {
    fn pick(&self, moves: &LegalMoveSet) -> Option<MoveToken> {
        let choice = match &self.seeded {
            Some(rng) => {
                let mut rng = rng.lock().unwrap_or_else(PoisonError::into_inner);
                moves.as_slice().choose(&mut *rng)
            }
            None => moves.as_slice().choose(&mut rand::thread_rng()),
        };
        choice.cloned()
    }
}
