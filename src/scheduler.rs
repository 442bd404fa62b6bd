use std::collections::HashSet;
use std::time::Instant;

use crate::dataset::{Dataset, DatasetPool};
use crate::error::{BenchError, Result};
use crate::pool::{TaskHandle, WorkerPool};
use crate::trial::{TrialResult, TrialRunner, TrialSpec};

/// Fans trials out to a worker pool and collects them at a single barrier.
pub struct Scheduler<'a> {
    pool: &'a WorkerPool,
    runner: TrialRunner,
}

impl<'a> Scheduler<'a> {
    pub fn new(pool: &'a WorkerPool, runner: TrialRunner) -> Self {
        Self { pool, runner }
    }

    /// Queues one trial. Returns immediately.
    pub fn submit(&self, dataset: &Dataset, trial_index: usize) -> TaskHandle<TrialResult> {
        let dataset = dataset.clone();
        let runner = self.runner;
        self.pool.submit(move || runner.run(&dataset, trial_index))
    }

    /// Runs `sample_size` trials for every dataset in `datasets`.
    ///
    /// Everything is submitted before the first join. Results come back in no
    /// particular order; each one carries its own `TrialSpec`, and every
    /// submitted spec must come back exactly once.
    pub fn run(&self, datasets: &DatasetPool, sample_size: usize) -> Result<Vec<TrialResult>> {
        let start = Instant::now();

        let mut expected = Vec::new();
        let mut handles = Vec::new();
        for dataset in datasets.iter() {
            for trial_index in 1..=sample_size {
                expected.push(TrialSpec {
                    dataset_size: dataset.len(),
                    trial_index,
                });
                handles.push(self.submit(dataset, trial_index));
            }
        }
        log::info!(
            "Submitted {} trials to {} workers",
            handles.len(),
            self.pool.num_threads()
        );

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            let result = handle.join()?;
            log::debug!("Trial {} finished", result.spec);
            results.push(result);
        }

        verify_complete(&expected, &results)?;
        log::info!(
            "Collected {} trial results in {:.2}s",
            results.len(),
            start.elapsed().as_secs_f64()
        );
        Ok(results)
    }
}

/// Checks that `results` holds exactly one result per spec in `expected`.
pub fn verify_complete(expected: &[TrialSpec], results: &[TrialResult]) -> Result<()> {
    let mut seen = HashSet::with_capacity(results.len());
    for result in results {
        if !seen.insert(result.spec) {
            return Err(BenchError::DuplicateTrial(result.spec));
        }
    }
    for spec in expected {
        if !seen.remove(spec) {
            return Err(BenchError::MissingTrial(*spec));
        }
    }
    if let Some(extra) = seen.into_iter().next() {
        return Err(BenchError::UnexpectedTrial(extra));
    }
    Ok(())
}
