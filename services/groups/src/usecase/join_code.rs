use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use roster_domain::join_code::{JOIN_CODE_ALPHABET, JOIN_CODE_LEN, JoinCode};

use crate::domain::repository::GroupRepository;
use crate::error::GroupsServiceError;

/// Draw a join code: each character independently uniform over the alphabet.
pub fn generate_join_code<R: RngExt>(rng: &mut R) -> JoinCode {
    let mut indices = [0usize; JOIN_CODE_LEN];
    for slot in &mut indices {
        *slot = rng.random_range(0..JOIN_CODE_ALPHABET.len());
    }
    JoinCode::from_indices(indices)
}

/// Supplies join code candidates to the prober.
pub trait JoinCodeSource: Send + Sync {
    fn next_code(&self) -> JoinCode;
}

/// Candidates from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomJoinCodes;

impl JoinCodeSource for RandomJoinCodes {
    fn next_code(&self) -> JoinCode {
        generate_join_code(&mut rand::rng())
    }
}

/// Candidates from a seeded RNG; the same seed replays the same sequence.
pub struct SeededJoinCodes {
    rng: Mutex<StdRng>,
}

impl SeededJoinCodes {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl JoinCodeSource for SeededJoinCodes {
    fn next_code(&self) -> JoinCode {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        generate_join_code(&mut *rng)
    }
}

/// Draw candidates until one is not used by any group.
///
/// One store lookup per candidate. Lookup errors propagate immediately; only a
/// taken code leads to another draw. Gives up after `max_attempts` candidates.
pub async fn reserve_unique_code<G, C>(
    groups: &G,
    codes: &C,
    max_attempts: u32,
) -> Result<JoinCode, GroupsServiceError>
where
    G: GroupRepository,
    C: JoinCodeSource,
{
    let max_attempts = max_attempts.max(1);
    for attempt in 1..=max_attempts {
        let candidate = codes.next_code();
        if !groups.join_code_exists(&candidate).await? {
            return Ok(candidate);
        }
        tracing::debug!(attempt, code = %candidate, "join code taken, drawing again");
    }
    tracing::warn!(attempts = max_attempts, "no free join code found");
    Err(GroupsServiceError::CodeSpaceExhausted {
        attempts: max_attempts,
    })
}
