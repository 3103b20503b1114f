use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("invalid scheduler config: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("result references unknown lemma '{0}'")]
    UnknownLemma(String),

    #[error("entry '{lemma}' has {times_correct} correct answers but was only seen {times_seen} times")]
    InconsistentStats {
        lemma: String,
        times_seen: u32,
        times_correct: u32,
    },

    #[error("no words available for practice")]
    NoWordsAvailable,

    #[error("no exercises available")]
    NoExercisesAvailable,
}
