use std::path::PathBuf;

use crate::corpus::DEFAULT_CORPUS_URL;
use crate::error::{BenchError, Result};
use crate::pool::WorkerPool;

pub const DEFAULT_SIZES: [usize; 8] = [5, 10, 100, 1000, 10000, 30000, 50000, 75000];
pub const DEFAULT_SAMPLE_SIZE: usize = 200;
pub const DEFAULT_OUTPUT: &str = "data.csv";
pub const DEFAULT_PREVIEW_COUNT: usize = 40;

#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Dataset sizes, strictly ascending.
    pub sizes: Vec<usize>,
    /// Trials per dataset size.
    pub sample_size: usize,
    /// CSV report destination.
    pub output: PathBuf,
    /// Worker threads in the pool.
    pub threads: usize,
    /// Run seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
    /// Name corpus file. Takes precedence over `corpus_url`.
    pub corpus: Option<PathBuf>,
    /// Name corpus download. With neither source set, the built-in corpus.
    pub corpus_url: Option<String>,
    /// Records shown from the largest dataset before the run; 0 disables.
    pub preview_count: usize,
    /// Print every report row to stdout.
    pub echo_rows: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            sample_size: DEFAULT_SAMPLE_SIZE,
            output: PathBuf::from(DEFAULT_OUTPUT),
            threads: WorkerPool::default_threads(),
            seed: None,
            corpus: None,
            corpus_url: Some(DEFAULT_CORPUS_URL.to_string()),
            preview_count: DEFAULT_PREVIEW_COUNT,
            echo_rows: true,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(BenchError::Config("at least one dataset size is required".to_string()));
        }
        if self.sizes.contains(&0) {
            return Err(BenchError::Config("dataset sizes must be at least 1".to_string()));
        }
        if !self.sizes.windows(2).all(|w| w[0] < w[1]) {
            return Err(BenchError::Config(format!(
                "dataset sizes must be strictly ascending, got {:?}",
                self.sizes
            )));
        }
        if self.sample_size == 0 {
            return Err(BenchError::Config("sample size must be at least 1".to_string()));
        }
        if self.threads == 0 {
            return Err(BenchError::Config("thread count must be at least 1".to_string()));
        }
        if self.preview_count % 2 != 0 {
            return Err(BenchError::Config(format!(
                "preview count must be even, got {}",
                self.preview_count
            )));
        }
        Ok(())
    }

    pub fn total_trials(&self) -> usize {
        self.sizes.len() * self.sample_size
    }
}
