mod common;

use algobench::{Scheduler, TrialRunner, TrialSpec, WorkerPool};
use std::collections::HashSet;

#[test]
fn test_many_trials_no_duplicates_no_losses() {
    let datasets = common::datasets(&[5, 10, 50, 100]);
    let pool = WorkerPool::new(8).unwrap();
    let scheduler = Scheduler::new(&pool, TrialRunner::new(common::TEST_SEED));

    let handles: Vec<_> = datasets
        .iter()
        .flat_map(|ds| (1..=25).map(move |i| (ds, i)))
        .map(|(ds, i)| scheduler.submit(ds, i))
        .collect();
    assert_eq!(handles.len(), 100);

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let specs: HashSet<TrialSpec> = results.iter().map(|r| r.spec).collect();
    assert_eq!(specs.len(), 100);
    for size in [5, 10, 50, 100] {
        for trial_index in 1..=25 {
            assert!(specs.contains(&TrialSpec {
                dataset_size: size,
                trial_index
            }));
        }
    }
}

#[test]
fn test_shared_datasets_unchanged_after_concurrent_trials() {
    let datasets = common::datasets(&[10, 200]);
    let before: Vec<_> = datasets.largest().to_vec();

    let pool = WorkerPool::new(4).unwrap();
    let results = Scheduler::new(&pool, TrialRunner::new(3))
        .run(&datasets, 10)
        .unwrap();
    pool.shutdown();

    assert_eq!(results.len(), 20);
    assert_eq!(datasets.largest(), before.as_slice());
    assert_eq!(datasets.get(10).unwrap().as_slice(), &before[..10]);
}

#[test]
fn test_single_worker_matches_many_workers() {
    let datasets = common::datasets(&[30]);
    let collect = |threads| {
        let pool = WorkerPool::new(threads).unwrap();
        let mut results = Scheduler::new(&pool, TrialRunner::new(9))
            .run(&datasets, 6)
            .unwrap();
        results.sort_by_key(|r| r.spec);
        results
            .into_iter()
            .map(|r| (r.spec, r.search_key, r.phases.map(|p| p.outcome)))
            .collect::<Vec<_>>()
    };
    assert_eq!(collect(1), collect(6));
}
