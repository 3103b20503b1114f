//! Feedback contract between a finished session and the statistics store.
//!
//! Every [`ExerciseResult`] counts once: `times_seen` goes up by one,
//! `times_correct` goes up by one when the answer was right, and
//! `last_practiced_session` becomes the index of the session just completed.
//! A word drilled by two exercises in one session is updated twice.

use std::collections::{HashMap, HashSet};

use crate::practice_engine::{
    error::SchedulerError,
    models::{ExerciseResult, SessionSummary, VocabularyEntry},
};

/// Apply one result to its entry.
pub fn apply_result(entry: &mut VocabularyEntry, result: &ExerciseResult, completed_session: u64) {
    debug_assert_eq!(entry.lemma, result.lemma);
    entry.times_seen = entry.times_seen.saturating_add(1);
    if result.is_correct {
        entry.times_correct = entry.times_correct.saturating_add(1);
    }
    entry.last_practiced_session = Some(completed_session);
}

/// Apply a whole session's results to an in-memory snapshot keyed by lemma.
///
/// Every lemma is checked before anything is written, so an unknown lemma
/// leaves `entries` untouched.
pub fn record_session(
    entries: &mut HashMap<String, VocabularyEntry>,
    results: &[ExerciseResult],
    completed_session: u64,
) -> Result<SessionSummary, SchedulerError> {
    if let Some(missing) = results.iter().find(|r| !entries.contains_key(&r.lemma)) {
        log::warn!("session {completed_session} result for unknown lemma '{}'", missing.lemma);
        return Err(SchedulerError::UnknownLemma(missing.lemma.clone()));
    }

    for result in results {
        if let Some(entry) = entries.get_mut(&result.lemma) {
            apply_result(entry, result, completed_session);
        }
    }

    let summary = summarize(results);
    log::debug!(
        "recorded session {completed_session}: {}/{} correct over {} words in {} ms",
        summary.correct,
        summary.exercises,
        summary.words_practiced,
        summary.total_time_ms,
    );
    Ok(summary)
}

/// Totals for a set of results.
pub fn summarize(results: &[ExerciseResult]) -> SessionSummary {
    let correct = results.iter().filter(|r| r.is_correct).count();
    let words: HashSet<&str> = results.iter().map(|r| r.lemma.as_str()).collect();
    SessionSummary {
        exercises: results.len(),
        correct,
        accuracy: if results.is_empty() { 0.0 } else { correct as f64 / results.len() as f64 },
        total_time_ms: results.iter().map(|r| r.time_spent_ms).sum(),
        words_practiced: words.len(),
    }
}
