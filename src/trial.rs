use std::fmt;
use std::hint::black_box;
use std::time::Instant;

use rand::Rng;

use crate::algorithms::{binary_search, insertion_sort_by, library_sort_by_key, linear_search};
use crate::dataset::Dataset;
use crate::record::{ABSENT_PRICE, Price, Record, price_of};
use crate::rng::trial_rng;

/// The measured phases of one trial, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    UnsortedExistingLinearSearch,
    UnsortedAbsentLinearSearch,
    InsertionSort,
    LibrarySort,
    SortedExistingLinearSearch,
    SortedAbsentLinearSearch,
    ExistingBinarySearch,
    AbsentBinarySearch,
}

impl Phase {
    pub const COUNT: usize = 8;

    pub const ALL: [Phase; Phase::COUNT] = [
        Phase::UnsortedExistingLinearSearch,
        Phase::UnsortedAbsentLinearSearch,
        Phase::InsertionSort,
        Phase::LibrarySort,
        Phase::SortedExistingLinearSearch,
        Phase::SortedAbsentLinearSearch,
        Phase::ExistingBinarySearch,
        Phase::AbsentBinarySearch,
    ];

    /// Report column title.
    pub const fn title(&self) -> &'static str {
        match self {
            Phase::UnsortedExistingLinearSearch => "Unsorted Existing Linear Search",
            Phase::UnsortedAbsentLinearSearch => "Unsorted Absent Linear Search",
            Phase::InsertionSort => "Insertion Sort",
            Phase::LibrarySort => "Built-in Sort",
            Phase::SortedExistingLinearSearch => "Sorted Existing Linear Search",
            Phase::SortedAbsentLinearSearch => "Sorted Absent Linear Search",
            Phase::ExistingBinarySearch => "Existing Binary Search",
            Phase::AbsentBinarySearch => "Absent Binary Search",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrialSpec {
    pub dataset_size: usize,
    /// 1-based.
    pub trial_index: usize,
}

impl fmt::Display for TrialSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(size={}, trial={})", self.dataset_size, self.trial_index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseOutcome {
    Found(usize),
    NotFound,
    Sorted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTiming {
    pub nanos: u64,
    pub outcome: PhaseOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialResult {
    pub spec: TrialSpec,
    /// The existing key searched for in every existing-key phase.
    pub search_key: Price,
    pub phases: [PhaseTiming; Phase::COUNT],
}

impl TrialResult {
    pub fn phase(&self, phase: Phase) -> &PhaseTiming {
        &self.phases[phase.index()]
    }
}

impl fmt::Display for TrialResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.spec.dataset_size, self.spec.trial_index)?;
        for timing in &self.phases {
            write!(f, ",{}", timing.nanos)?;
        }
        Ok(())
    }
}

/// Runs the eight-phase measurement protocol.
///
/// The existing search key is sampled once from the unsorted dataset and reused
/// by every existing-key phase, before and after sorting. All post-sort
/// searches read the library-sorted copy.
#[derive(Debug, Clone, Copy)]
pub struct TrialRunner {
    run_seed: u64,
}

impl TrialRunner {
    pub fn new(run_seed: u64) -> Self {
        Self { run_seed }
    }

    /// `dataset` must be non-empty.
    pub fn run(&self, dataset: &Dataset, trial_index: usize) -> TrialResult {
        let records = dataset.as_slice();
        let spec = TrialSpec {
            dataset_size: records.len(),
            trial_index,
        };
        let mut rng = trial_rng(self.run_seed, spec.dataset_size, trial_index);
        let search_key = records[rng.random_range(0..records.len())].price;

        // Every phase walks a Vec<&Record>, so the before/after-sort searches
        // scan the same layout. The sorts get private copies; the dataset is shared.
        let unsorted: Vec<&Record> = records.iter().collect();
        let mut insertion_sorted = unsorted.clone();
        let mut library_sorted = unsorted.clone();

        let unsorted_existing = time_search(|| linear_search(&unsorted, search_key, price_of));
        let unsorted_absent = time_search(|| linear_search(&unsorted, ABSENT_PRICE, price_of));

        let insertion = time_sort(|| {
            insertion_sort_by(&mut insertion_sorted, |a, b| a.price < b.price)
        });
        let library = time_sort(|| library_sort_by_key(&mut library_sorted, price_of));

        debug_assert!(
            insertion_sorted
                .iter()
                .map(|r| r.price)
                .eq(library_sorted.iter().map(|r| r.price))
        );

        let sorted = library_sorted.as_slice();
        let sorted_existing = time_search(|| linear_search(sorted, search_key, price_of));
        let sorted_absent = time_search(|| linear_search(sorted, ABSENT_PRICE, price_of));
        let binary_existing = time_search(|| binary_search(sorted, search_key, price_of));
        let binary_absent = time_search(|| binary_search(sorted, ABSENT_PRICE, price_of));

        TrialResult {
            spec,
            search_key,
            phases: [
                unsorted_existing,
                unsorted_absent,
                insertion,
                library,
                sorted_existing,
                sorted_absent,
                binary_existing,
                binary_absent,
            ],
        }
    }
}

fn time_search<F>(search: F) -> PhaseTiming
where
    F: FnOnce() -> Option<usize>,
{
    let start = Instant::now();
    let found = black_box(search());
    let nanos = elapsed_nanos(start);
    PhaseTiming {
        nanos,
        outcome: match found {
            Some(i) => PhaseOutcome::Found(i),
            None => PhaseOutcome::NotFound,
        },
    }
}

fn time_sort<F>(sort: F) -> PhaseTiming
where
    F: FnOnce(),
{
    let start = Instant::now();
    sort();
    PhaseTiming {
        nanos: elapsed_nanos(start),
        outcome: PhaseOutcome::Sorted,
    }
}

fn elapsed_nanos(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX)
}
