use crate::trial::TrialSpec;

/// Errors surfaced by a benchmark run.
///
/// Setup failures (`Config`, `Corpus`, `Io`, `Json`) happen before any trial is
/// submitted. Task failures surface when the driver joins the trial handles.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("name corpus unavailable: {0}")]
    Corpus(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("trial task panicked: {0}")]
    TaskPanicked(String),

    #[error("worker pool shut down before the task reported a result")]
    TaskDropped,

    #[error("trial {0} reported more than once")]
    DuplicateTrial(TrialSpec),

    #[error("trial {0} never reported a result")]
    MissingTrial(TrialSpec),

    #[error("trial {0} reported but never submitted")]
    UnexpectedTrial(TrialSpec),
}

pub type Result<T> = std::result::Result<T, BenchError>;
