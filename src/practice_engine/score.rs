//! Composite priority score for a single vocabulary entry.
//!
//! `score = w_f * frequency + w_a * (1 - accuracy) + w_r * spaced`
//!
//! `spaced` is a step function of the practice gap against four review
//! intervals, each a fraction of the learner's vocabulary size. Words the
//! learner answers well stretch those intervals (divided by
//! `max(0.5, 1 - accuracy)`, so up to twice as long); weak words keep the base
//! schedule and come due sooner. Never-practiced words always get the maximum
//! spaced score.

use crate::practice_engine::{
    config::SchedulerConfig,
    models::{ScoredWord, VocabularyEntry},
};

pub const SPACED_NEVER_PRACTICED: f64 = 1.0;
pub const SPACED_LONG: f64 = 1.0;
pub const SPACED_MEDIUM: f64 = 0.8;
pub const SPACED_SHORT: f64 = 0.6;
pub const SPACED_IMMEDIATE: f64 = 0.4;
pub const SPACED_RECENT: f64 = 0.1;

/// Sessions elapsed since `last`. A `last` ahead of `current` counts as 0.
pub fn practice_gap(current_session: u64, last: u64) -> u64 {
    current_session.saturating_sub(last)
}

/// Spaced-repetition component in `[0.1, 1.0]`.
pub fn spaced_score(
    accuracy: f64,
    last_practiced: Option<u64>,
    current_session: u64,
    vocabulary_size: usize,
    config: &SchedulerConfig,
) -> f64 {
    let Some(last) = last_practiced else {
        return SPACED_NEVER_PRACTICED;
    };
    let gap = practice_gap(current_session, last) as f64;

    let iv = &config.intervals;
    let multiplier = (1.0 - accuracy).max(iv.min_accuracy_multiplier);
    let interval = |fraction: f64| fraction * vocabulary_size as f64 / multiplier;

    if gap >= interval(iv.long) {
        SPACED_LONG
    } else if gap >= interval(iv.medium) {
        SPACED_MEDIUM
    } else if gap >= interval(iv.short) {
        SPACED_SHORT
    } else if gap >= interval(iv.immediate) {
        SPACED_IMMEDIATE
    } else {
        SPACED_RECENT
    }
}

/// Composite score in `[0, 1]`. Pure: identical inputs give identical bits.
pub fn score(
    entry: &VocabularyEntry,
    current_session: u64,
    vocabulary_size: usize,
    config: &SchedulerConfig,
) -> f64 {
    let accuracy = entry.accuracy();
    let frequency_score = if entry.corpus_frequency.is_finite() {
        (entry.corpus_frequency / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let accuracy_score = 1.0 - accuracy;
    let spaced = spaced_score(
        accuracy,
        entry.last_practiced_session,
        current_session,
        vocabulary_size,
        config,
    );

    let w = &config.weights;
    let s = w.frequency * frequency_score + w.accuracy * accuracy_score + w.recency * spaced;
    debug_assert!(
        (-1e-9..=1.0 + 1e-9).contains(&s),
        "score {s} for '{}' outside [0, 1]",
        entry.lemma
    );
    s.clamp(0.0, 1.0)
}

/// Score an entry and carry its display fields along.
pub fn score_entry(
    entry: &VocabularyEntry,
    current_session: u64,
    vocabulary_size: usize,
    config: &SchedulerConfig,
) -> ScoredWord {
    let practice_gap = match entry.last_practiced_session {
        Some(last) => practice_gap(current_session, last),
        None => vocabulary_size as u64,
    };
    ScoredWord {
        lemma: entry.lemma.clone(),
        surface_text: entry.surface_text.clone(),
        pos_class: entry.pos_class.clone(),
        corpus_frequency: entry.corpus_frequency,
        accuracy: entry.accuracy(),
        practice_gap,
        score: score(entry, current_session, vocabulary_size, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn entry(freq: f64, seen: u32, correct: u32, last: Option<u64>) -> VocabularyEntry {
        VocabularyEntry {
            times_seen: seen,
            times_correct: correct,
            last_practiced_session: last,
            ..VocabularyEntry::new("parler", "parlé", "verb", freq)
        }
    }

    #[test]
    fn never_practiced_word_scores_frequency_plus_full_weakness_and_recency() {
        let cfg = SchedulerConfig::default();
        let s = score(&entry(60.0, 0, 0, None), 12, 100, &cfg);
        // 0.5 * 0.6 + 0.3 * 1.0 + 0.2 * 1.0
        assert!((s - 0.8).abs() < 1e-12, "got {s}");
    }

    #[test]
    fn spaced_steps_follow_interval_fractions() {
        let cfg = SchedulerConfig::default();
        // accuracy 0 → multiplier 1; vocab 100 → intervals 5 / 15 / 35 / 60
        let at = |gap: u64| spaced_score(0.0, Some(100), 100 + gap, 100, &cfg);
        assert_eq!(at(0), SPACED_RECENT);
        assert_eq!(at(4), SPACED_RECENT);
        assert_eq!(at(5), SPACED_IMMEDIATE);
        assert_eq!(at(15), SPACED_SHORT);
        assert_eq!(at(35), SPACED_MEDIUM);
        assert_eq!(at(59), SPACED_MEDIUM);
        assert_eq!(at(60), SPACED_LONG);
    }

    #[test]
    fn well_known_words_wait_longer() {
        let cfg = SchedulerConfig::default();
        // gap 9 of 100: weak word is past "immediate" (5), strong word needs 10.
        let weak = spaced_score(0.0, Some(0), 9, 100, &cfg);
        let strong = spaced_score(0.9, Some(0), 9, 100, &cfg);
        assert_eq!(weak, SPACED_IMMEDIATE);
        assert_eq!(strong, SPACED_RECENT);
    }

    #[test]
    fn session_index_behind_last_practice_counts_as_zero_gap() {
        assert_eq!(practice_gap(3, 7), 0);
        let cfg = SchedulerConfig::default();
        assert_eq!(spaced_score(0.0, Some(7), 3, 100, &cfg), SPACED_RECENT);
    }

    #[test]
    fn scored_word_uses_vocabulary_size_as_gap_when_never_practiced() {
        let cfg = SchedulerConfig::default();
        let w = score_entry(&entry(50.0, 0, 0, None), 40, 250, &cfg);
        assert_eq!(w.practice_gap, 250);
        let w = score_entry(&entry(50.0, 4, 2, Some(30)), 40, 250, &cfg);
        assert_eq!(w.practice_gap, 10);
        assert_eq!(w.accuracy, 0.5);
    }

    #[test]
    fn inconsistent_stats_still_score_in_range() {
        let cfg = SchedulerConfig::default();
        let s = score(&entry(100.0, 2, 9, Some(0)), 1, 10, &cfg);
        assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn non_finite_frequency_counts_as_zero() {
        let cfg = SchedulerConfig::default();
        let rare = score(&entry(0.0, 3, 1, Some(2)), 5, 50, &cfg);
        for freq in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let s = score(&entry(freq, 3, 1, Some(2)), 5, 50, &cfg);
            assert_eq!(s, rare, "frequency {freq}");
        }
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let cfg = SchedulerConfig::default();
        let e = entry(37.3, 11, 7, Some(4));
        let a = score(&e, 19, 321, &cfg);
        let b = score(&e, 19, 321, &cfg);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    proptest! {
        #[test]
        fn never_practiced_is_always_max_spaced(
            acc in 0.0f64..=1.0, session in 0u64..10_000, vocab in 0usize..5_000,
        ) {
            let cfg = SchedulerConfig::default();
            prop_assert_eq!(spaced_score(acc, None, session, vocab, &cfg), SPACED_NEVER_PRACTICED);
        }

        #[test]
        fn score_stays_in_unit_interval(
            freq in -50.0f64..200.0, seen in 0u32..200, correct in 0u32..200,
            last in proptest::option::of(0u64..500), session in 0u64..500, vocab in 0usize..1_000,
        ) {
            let cfg = SchedulerConfig::default();
            let s = score(&entry(freq, seen, correct.min(seen), last), session, vocab, &cfg);
            prop_assert!((0.0..=1.0).contains(&s));
        }

        #[test]
        fn score_non_decreasing_in_frequency(
            f1 in 0.0f64..=100.0, f2 in 0.0f64..=100.0, seen in 0u32..50, correct in 0u32..50,
            last in proptest::option::of(0u64..100), session in 0u64..100, vocab in 1usize..500,
        ) {
            let cfg = SchedulerConfig::default();
            let (lo, hi) = if f1 <= f2 { (f1, f2) } else { (f2, f1) };
            let correct = correct.min(seen);
            let a = score(&entry(lo, seen, correct, last), session, vocab, &cfg);
            let b = score(&entry(hi, seen, correct, last), session, vocab, &cfg);
            prop_assert!(a <= b, "freq {lo} → {a}, freq {hi} → {b}");
        }

        #[test]
        fn score_non_increasing_in_accuracy(
            seen in 1u32..60, c1 in 0u32..60, c2 in 0u32..60, freq in 0.0f64..=100.0,
            last in proptest::option::of(0u64..100), session in 0u64..100, vocab in 1usize..500,
        ) {
            let cfg = SchedulerConfig::default();
            let (lo, hi) = (c1.min(c2).min(seen), c1.max(c2).min(seen));
            let weak = score(&entry(freq, seen, lo, last), session, vocab, &cfg);
            let strong = score(&entry(freq, seen, hi, last), session, vocab, &cfg);
            prop_assert!(strong <= weak, "correct {lo} → {weak}, correct {hi} → {strong}");
        }
    }
}
