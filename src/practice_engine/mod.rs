//! Core practice engine: scoring, candidate selection, and exercise assembly.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: vocabulary entries, scored words, exercises, results |
//! | `config`     | Named constants and the [`SchedulerConfig`] built from them |
//! | `error`      | [`SchedulerError`] |
//! | `score`      | Composite priority score for one entry |
//! | `ranker`     | Stable descending sort and candidate pool truncation |
//! | `sampler`    | Score-weighted sampling without replacement |
//! | `helpers`    | Shared builders: options, blanking, shuffling |
//! | `exercises`  | One builder per exercise type |
//! | `assembler`  | Quota-driven exercise mix for a session |
//! | `generator`  | Entry points: `select_words_for_practice`, `generate_exercise_mix`, `plan_session` |
//! | `aggregator` | Applies exercise results back to learner statistics |
//! | `client`     | JSON payloads exchanged with the practice UI |

pub mod aggregator;
pub mod assembler;
pub mod client;
pub mod config;
pub mod error;
pub mod exercises;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod ranker;
pub mod sampler;
pub mod score;

// Re-export the public API surface so callers can use
// `practice_engine::plan_session` without reaching into sub-modules.
pub use aggregator::{apply_result, record_session};
pub use assembler::average_difficulty;
pub use client::{results_from_json, to_client_payload};
pub use config::SchedulerConfig;
pub use error::SchedulerError;
pub use generator::{generate_exercise_mix, plan_session, select_words_for_practice, Scheduler};
pub use models::{
    ChoiceOption, Exercise, ExerciseResult, ExerciseType, ExerciseWord, MatchingPair,
    PracticeSession, ScoredWord, SessionRequest, SessionSummary, TranslationDirection,
    VocabularyEntry, WordContext,
};
