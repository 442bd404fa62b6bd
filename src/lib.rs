// Search and sort micro-benchmark harness

// Implementations
pub mod algorithms;
pub mod benchmark;
pub mod config;
pub mod corpus;
pub mod dataset;
pub mod error;
pub mod pool;
pub mod record;
pub mod report;
pub mod rng;
pub mod scheduler;
pub mod trial;

// Export the main types
pub use algorithms::{binary_search, insertion_sort_by, library_sort_by_key, linear_search};
pub use benchmark::{Benchmark, BenchmarkRun};
pub use config::BenchConfig;
pub use corpus::NameCorpus;
pub use dataset::{Dataset, DatasetGenerator, DatasetPool, preview_lines};
pub use error::{BenchError, Result};
pub use pool::{TaskHandle, WorkerPool};
pub use record::{ABSENT_PRICE, Price, Record};
pub use report::{REPORT_COLUMNS, Report};
pub use rng::BenchRng;
pub use scheduler::Scheduler;
pub use trial::{Phase, PhaseOutcome, PhaseTiming, TrialResult, TrialRunner, TrialSpec};
