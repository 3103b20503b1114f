//! # practice_scheduler
//!
//! An adaptive vocabulary practice scheduler for a French learning app.
//!
//! Given a learner's vocabulary statistics, the scheduler picks a bounded set
//! of words to drill next and builds a varied session of exercises from them.
//! It balances four signals: how common a word is, how often the learner gets
//! it wrong, how long since it was last practiced, and exercise-type variety.
//! It performs no I/O; the caller supplies a vocabulary snapshot and the
//! translations/context sentences for the chosen words.
//!
//! ## How it works
//!
//! 1. Every [`VocabularyEntry`] gets a composite score in `[0, 1]`
//!    (`0.5·frequency + 0.3·weakness + 0.2·spaced-repetition`).
//! 2. Entries are ranked and the top `3 × target` become the candidate pool.
//! 3. Words are drawn from the pool with probability proportional to score,
//!    so the same top word is not drilled every session.
//! 4. The selected words become multiple-choice, translation, fill-in-the-blank
//!    and matching exercises in fixed proportions, then the list is shuffled.
//! 5. After the session, [`record_session`] applies each [`ExerciseResult`]
//!    back to the statistics.
//!
//! ## Key features
//!
//! - **Deterministic on demand**: every randomized step takes an `R: Rng`, and
//!   [`SessionRequest::rng_seed`] reproduces a whole session.
//! - **Degrades, never fails**: words without a translation or context sentence
//!   are simply left out of the exercise types that need them.
//! - **Tunable**: all weights and ratios live in [`SchedulerConfig`], loadable
//!   from JSON over the defaults.
//!
//! ## Quick start
//!
//! ```rust
//! use std::collections::HashMap;
//! use practice_scheduler::{plan_session, SessionRequest, VocabularyEntry, WordContext};
//!
//! let vocabulary: Vec<VocabularyEntry> = [("aller", "va", 95.0), ("chat", "chat", 60.0),
//!     ("maison", "maison", 70.0), ("manger", "mange", 65.0)]
//!     .into_iter()
//!     .map(|(lemma, surface, freq)| VocabularyEntry::new(lemma, surface, "x", freq))
//!     .collect();
//!
//! let contexts: HashMap<String, WordContext> = [
//!     ("aller", WordContext::new("to go", "Il va au marché demain.")),
//!     ("chat", WordContext::translation_only("cat")),
//!     ("maison", WordContext::translation_only("house")),
//!     ("manger", WordContext::new("to eat", "Elle mange une pomme.")),
//! ]
//! .into_iter()
//! .map(|(l, c)| (l.to_string(), c))
//! .collect();
//!
//! let session = plan_session(
//!     SessionRequest { rng_seed: Some(42), ..SessionRequest::new(1) },
//!     &vocabulary,
//!     &contexts,
//! )
//! .expect("vocabulary is not empty");
//!
//! println!("{} ({} exercises)", session.session_id, session.exercises.len());
//! for exercise in &session.exercises {
//!     println!("- {}", exercise.exercise_type());
//! }
//! ```

pub mod practice_engine;

// Convenience re-exports so callers can use `practice_scheduler::plan_session`
// directly without reaching into `practice_engine::`.
pub use practice_engine::{
    apply_result, average_difficulty, generate_exercise_mix, plan_session, record_session,
    results_from_json, select_words_for_practice, to_client_payload, ChoiceOption, Exercise,
    ExerciseResult, ExerciseType, ExerciseWord, MatchingPair, PracticeSession, Scheduler,
    SchedulerConfig, SchedulerError, ScoredWord, SessionRequest, SessionSummary,
    TranslationDirection, VocabularyEntry, WordContext,
};
