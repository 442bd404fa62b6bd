use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

/// The random context of one benchmark run.
///
/// The run seed is drawn once (OS entropy unless the caller pins it). Dataset
/// generation consumes the run generator; trials derive their own generator
/// from the seed so workers never share random state.
#[derive(Debug, Clone)]
pub struct BenchRng {
    seed: u64,
    rng: SmallRng,
}

impl BenchRng {
    pub fn from_os_rng() -> Self {
        let seed = SmallRng::from_os_rng().next_u64();
        Self::with_seed(seed)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn generator(&mut self) -> &mut SmallRng {
        &mut self.rng
    }
}

/// Builds the generator for one trial from the run seed and the trial's
/// identity. Same inputs, same stream.
pub fn trial_rng(run_seed: u64, dataset_size: usize, trial_index: usize) -> SmallRng {
    let mut state = run_seed;
    state = splitmix64(state ^ dataset_size as u64);
    state = splitmix64(state ^ (trial_index as u64).rotate_left(32));
    SmallRng::seed_from_u64(state)
}

fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
