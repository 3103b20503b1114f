//! Exercise mix assembly.
//!
//! Quotas come from [`ExerciseMix::quotas`]: 40% multiple choice, 30% word
//! translation, 20% fill in the blank (each rounded down), and the leftover
//! budget admits one matching exercise. The three single-word passes run in
//! that order over the selected words and never reuse a lemma. Matching is
//! built over the full selection and may reuse words, but its lowest-ranked
//! pair is held back from the single-word passes so a session never has more
//! exercises than distinct words. Missing translations or context sentences
//! only shrink the session; they never fail it.

use std::collections::{HashMap, HashSet};

use rand::Rng;

use crate::practice_engine::{
    config::ExerciseMix,
    exercises::{fill_in_blank, matching, multiple_choice, translation},
    helpers::shuffle,
    models::{Exercise, ExerciseType, ScoredWord, WordContext},
};

/// Run one single-word pass: build up to `quota` exercises from words not yet
/// used, marking each word that gets one.
fn fill_pass<'a>(
    exercises: &mut Vec<Exercise>,
    used: &mut HashSet<&'a str>,
    words: &'a [ScoredWord],
    quota: usize,
    mut build: impl FnMut(&ScoredWord) -> Option<Exercise>,
) -> usize {
    let mut added = 0;
    for word in words {
        if added >= quota {
            break;
        }
        if used.contains(word.lemma.as_str()) {
            continue;
        }
        if let Some(exercise) = build(word) {
            used.insert(word.lemma.as_str());
            exercises.push(exercise);
            added += 1;
        }
    }
    added
}

/// Build a shuffled session of at most `session_size` exercises.
pub fn build_session<R: Rng>(
    rng: &mut R,
    selected: &[ScoredWord],
    contexts: &HashMap<String, WordContext>,
    session_size: usize,
    mix: &ExerciseMix,
) -> Vec<Exercise> {
    let quotas = mix.quotas(session_size);
    let mut exercises: Vec<Exercise> = Vec::with_capacity(session_size);
    let board = if quotas.matching > 0 { matching::build(selected, contexts, mix) } else { None };
    let held: Option<String> = match &board {
        Some(Exercise::Matching { pairs }) => pairs.last().map(|p| p.lemma.clone()),
        _ => None,
    };
    let mut used: HashSet<&str> = held.iter().map(String::as_str).collect();

    let mc = fill_pass(&mut exercises, &mut used, selected, quotas.multiple_choice, |w| {
        multiple_choice::build(&mut *rng, w, selected, contexts, mix)
    });
    let tr = fill_pass(&mut exercises, &mut used, selected, quotas.word_translation, |w| {
        translation::build(w, contexts)
    });
    let fb = fill_pass(&mut exercises, &mut used, selected, quotas.fill_in_blank, |w| {
        fill_in_blank::build(w, contexts, mix)
    });

    let mut mt = 0;
    if let Some(exercise) = board {
        exercises.push(exercise);
        mt = 1;
    }

    log::debug!(
        "assembled {} of {session_size} exercises from {} words \
         (multiple choice {mc}/{}, translation {tr}/{}, fill in blank {fb}/{}, matching {mt}/{})",
        exercises.len(),
        selected.len(),
        quotas.multiple_choice,
        quotas.word_translation,
        quotas.fill_in_blank,
        quotas.matching,
    );
    debug_assert!(exercises.len() <= session_size);
    debug_assert!(exercises.len() <= distinct_lemmas(&exercises));

    shuffle(rng, &mut exercises);
    exercises
}

/// Mean difficulty weight of a session; 0 for an empty one.
pub fn average_difficulty(exercises: &[Exercise]) -> f64 {
    if exercises.is_empty() {
        return 0.0;
    }
    exercises.iter().map(Exercise::difficulty).sum::<f64>() / exercises.len() as f64
}

/// Number of distinct lemmas touched by a set of exercises.
pub fn distinct_lemmas(exercises: &[Exercise]) -> usize {
    exercises.iter().flat_map(Exercise::lemmas).collect::<HashSet<_>>().len()
}

/// How many exercises of each type a session contains.
pub fn type_counts(exercises: &[Exercise]) -> HashMap<ExerciseType, usize> {
    let mut counts = HashMap::new();
    for exercise in exercises {
        *counts.entry(exercise.exercise_type()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn words(n: usize) -> Vec<ScoredWord> {
        (0..n)
            .map(|i| ScoredWord {
                lemma: format!("mot{i}"),
                surface_text: format!("mot{i}"),
                pos_class: if i % 2 == 0 { "noun" } else { "verb" }.to_string(),
                corpus_frequency: 20.0 + i as f64,
                accuracy: 0.0,
                practice_gap: 2,
                score: 1.0 - i as f64 / 100.0,
            })
            .collect()
    }

    fn full_contexts(words: &[ScoredWord]) -> HashMap<String, WordContext> {
        words
            .iter()
            .map(|w| {
                let ctx = WordContext::new(
                    format!("word-{}", w.lemma),
                    format!("Voici le {} du jour.", w.surface_text),
                );
                (w.lemma.clone(), ctx)
            })
            .collect()
    }

    fn counts(exercises: &[Exercise]) -> (usize, usize, usize, usize) {
        let c = type_counts(exercises);
        let get = |t: ExerciseType| c.get(&t).copied().unwrap_or(0);
        (
            get(ExerciseType::MultipleChoice),
            get(ExerciseType::WordTranslation),
            get(ExerciseType::FillInBlank),
            get(ExerciseType::Matching),
        )
    }

    #[test]
    fn full_data_fills_every_quota() {
        let ws = words(10);
        let ctx = full_contexts(&ws);
        let mut rng = StdRng::seed_from_u64(5);
        let ex = build_session(&mut rng, &ws, &ctx, 10, &ExerciseMix::default());
        assert_eq!(ex.len(), 10);
        assert_eq!(counts(&ex), (4, 3, 2, 1));
    }

    #[test]
    fn single_word_exercises_never_share_a_lemma() {
        let ws = words(10);
        let ctx = full_contexts(&ws);
        for seed in 0..10u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let ex = build_session(&mut rng, &ws, &ctx, 10, &ExerciseMix::default());
            let mut seen = HashSet::new();
            for w in ex.iter().filter_map(Exercise::word) {
                assert!(seen.insert(w.lemma.clone()), "lemma {} reused (seed={seed})", w.lemma);
            }
        }
    }

    #[test]
    fn missing_data_shrinks_the_session() {
        let ws = words(10);
        let mut ctx = full_contexts(&ws);
        // Half the words lose their translation, the rest lose their sentence.
        for (i, w) in ws.iter().enumerate() {
            let entry = ctx.get_mut(&w.lemma).unwrap();
            if i % 2 == 0 {
                entry.translation = None;
            } else {
                entry.context_sentence = Some(String::new());
            }
        }
        let mut rng = StdRng::seed_from_u64(9);
        let ex = build_session(&mut rng, &ws, &ctx, 10, &ExerciseMix::default());
        // 5 translated words: matching over all 5 holds back the last, which
        // leaves 4 for multiple choice and none for translation.
        assert_eq!(counts(&ex), (4, 0, 0, 1));
        for e in &ex {
            if let Some(w) = e.word() {
                let c = &ctx[&w.lemma];
                assert!(c.translation().is_some());
                if matches!(e, Exercise::FillInBlank { .. }) {
                    assert!(c.context_sentence().is_some());
                }
            }
        }
    }

    #[test]
    fn no_context_no_exercises() {
        let ws = words(6);
        let mut rng = StdRng::seed_from_u64(1);
        let ex = build_session(&mut rng, &ws, &HashMap::new(), 10, &ExerciseMix::default());
        assert!(ex.is_empty());
    }

    #[test]
    fn three_translatable_words_skip_matching() {
        let ws = words(3);
        let ctx = full_contexts(&ws);
        let mut rng = StdRng::seed_from_u64(2);
        let ex = build_session(&mut rng, &ws, &ctx, 10, &ExerciseMix::default());
        assert_eq!(counts(&ex).3, 0);
        assert_eq!(ex.len(), 3);
    }

    #[test]
    fn four_translatable_words_give_one_full_matching() {
        let ws = words(4);
        let ctx: HashMap<String, WordContext> = ws
            .iter()
            .map(|w| (w.lemma.clone(), WordContext::translation_only(format!("t-{}", w.lemma))))
            .collect();
        let mut rng = StdRng::seed_from_u64(4);
        let ex = build_session(&mut rng, &ws, &ctx, 10, &ExerciseMix::default());
        let matching: Vec<&Exercise> = ex.iter().filter(|e| matches!(e, Exercise::Matching { .. })).collect();
        assert_eq!(matching.len(), 1);
        let Exercise::Matching { pairs } = matching[0] else { unreachable!() };
        assert_eq!(pairs.len(), 4);
        assert_eq!(ex.len(), 4);
    }

    #[test]
    fn never_more_exercises_than_distinct_words() {
        for n in 1..=12 {
            let ws = words(n);
            let translated_only: HashMap<String, WordContext> = ws
                .iter()
                .map(|w| (w.lemma.clone(), WordContext::translation_only(format!("t-{}", w.lemma))))
                .collect();
            for ctx in [full_contexts(&ws), translated_only] {
                for seed in 0..5u64 {
                    let mut rng = StdRng::seed_from_u64(seed);
                    let ex = build_session(&mut rng, &ws, &ctx, 10, &ExerciseMix::default());
                    assert!(
                        ex.len() <= distinct_lemmas(&ex),
                        "{} exercises over {} words (n={n}, seed={seed})",
                        ex.len(),
                        distinct_lemmas(&ex),
                    );
                }
            }
        }
    }

    #[test]
    fn session_never_exceeds_requested_size() {
        let ws = words(30);
        let ctx = full_contexts(&ws);
        for size in [0usize, 1, 3, 5, 10, 17] {
            let mut rng = StdRng::seed_from_u64(size as u64);
            let ex = build_session(&mut rng, &ws, &ctx, size, &ExerciseMix::default());
            assert!(ex.len() <= size, "size {size} produced {}", ex.len());
        }
    }

    #[test]
    fn order_is_shuffled() {
        let ws = words(10);
        let ctx = full_contexts(&ws);
        let orders: HashSet<Vec<ExerciseType>> = (0..10u64)
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                build_session(&mut rng, &ws, &ctx, 10, &ExerciseMix::default())
                    .iter()
                    .map(Exercise::exercise_type)
                    .collect()
            })
            .collect();
        assert!(orders.len() > 1, "every seed produced the same type order");
    }

    #[test]
    fn average_difficulty_uses_type_weights() {
        assert_eq!(average_difficulty(&[]), 0.0);
        let ws = words(1);
        let ctx = full_contexts(&ws);
        let tr = translation::build(&ws[0], &ctx).unwrap();
        let fb = fill_in_blank::build(&ws[0], &ctx, &ExerciseMix::default()).unwrap();
        assert_eq!(average_difficulty(&[tr, fb]), 2.5);
    }
}
