use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::charset::CharacterPool;

/// Draws characters uniformly from a pool. The generator owns its own
/// rng so callers control seeding instead of relying on process state.
pub struct PasswordGenerator {
    rng: StdRng,
}

impl PasswordGenerator {
    pub fn new() -> PasswordGenerator {
        PasswordGenerator {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> PasswordGenerator {
        PasswordGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns a string of exactly `length` characters, each position
    /// chosen independently from the pool, repeats allowed.
    pub fn generate(&mut self, pool: &CharacterPool, length: usize) -> String {
        let mut password = String::with_capacity(length);

        for _ in 0..length {
            let index = self.rng.gen_range(0..pool.len());
            password.push(pool.char_at(index));
        }

        password
    }
}
