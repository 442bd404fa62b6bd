use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::config::BenchConfig;
use crate::corpus::{FETCH_TIMEOUT, NameCorpus};
use crate::dataset::{DatasetGenerator, DatasetPool};
use crate::error::Result;
use crate::pool::WorkerPool;
use crate::report::Report;
use crate::rng::BenchRng;
use crate::scheduler::Scheduler;
use crate::trial::TrialRunner;

/// A benchmark whose setup has succeeded: config validated, corpus loaded,
/// datasets generated. Nothing has been scheduled yet.
pub struct Benchmark {
    config: BenchConfig,
    seed: u64,
    datasets: DatasetPool,
}

/// Everything a finished run produced.
pub struct BenchmarkRun {
    pub started_at: DateTime<Local>,
    pub seed: u64,
    pub elapsed: Duration,
    pub report: Report,
}

impl Benchmark {
    pub fn prepare(config: BenchConfig) -> Result<Self> {
        config.validate()?;

        let corpus = match (&config.corpus, &config.corpus_url) {
            (Some(path), _) => NameCorpus::from_path(path)?,
            (None, Some(url)) => {
                log::info!("Fetching name corpus from {}", url);
                NameCorpus::fetch(url, FETCH_TIMEOUT)?
            }
            (None, None) => NameCorpus::builtin()?,
        };
        log::info!("Loaded name corpus with {} brands", corpus.len());

        let rng = match config.seed {
            Some(seed) => BenchRng::with_seed(seed),
            None => BenchRng::from_os_rng(),
        };
        let seed = rng.seed();
        let mut generator = DatasetGenerator::new(rng, corpus);

        let start = Instant::now();
        let datasets = DatasetPool::build(&mut generator, &config.sizes)?;
        log::info!(
            "Generated {} records (seed {}) in {:.2}s",
            datasets.largest().len(),
            seed,
            start.elapsed().as_secs_f64()
        );

        Ok(Self {
            config,
            seed,
            datasets,
        })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn datasets(&self) -> &DatasetPool {
        &self.datasets
    }

    /// Runs every trial on a fresh worker pool, which is drained and torn
    /// down before the report is built.
    pub fn execute(self) -> Result<BenchmarkRun> {
        let started_at = Local::now();
        let start = Instant::now();

        let pool = WorkerPool::new(self.config.threads)?;
        let results = {
            let scheduler = Scheduler::new(&pool, TrialRunner::new(self.seed));
            scheduler.run(&self.datasets, self.config.sample_size)?
        };
        pool.shutdown();

        Ok(BenchmarkRun {
            started_at,
            seed: self.seed,
            elapsed: start.elapsed(),
            report: Report::from_results(results),
        })
    }
}
