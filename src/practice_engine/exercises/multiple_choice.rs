use std::collections::HashMap;

use rand::Rng;

use crate::practice_engine::{
    config::ExerciseMix,
    helpers::{exercise_word, option, shuffle},
    models::{ChoiceOption, Exercise, ScoredWord, WordContext},
};

fn same_text(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// True if `other` is a good distractor for `target`: same part of speech and
/// a corpus frequency within the configured band around the target's.
fn is_close_match(target: &ScoredWord, other: &ScoredWord, mix: &ExerciseMix) -> bool {
    let (lo, hi) = mix.frequency_band;
    other.pos_class == target.pos_class
        && other.corpus_frequency >= target.corpus_frequency * lo
        && other.corpus_frequency <= target.corpus_frequency * hi
}

/// Pick up to `mix.distractor_count` wrong translations for `target`.
///
/// Close matches (same part of speech, similar frequency) come first, then any
/// other translated word. Each distractor differs from the correct translation
/// and from every distractor already chosen.
pub fn pick_distractors<R: Rng>(
    rng: &mut R,
    target: &ScoredWord,
    correct: &str,
    pool: &[ScoredWord],
    contexts: &HashMap<String, WordContext>,
    mix: &ExerciseMix,
) -> Vec<String> {
    let (mut preferred, mut backfill): (Vec<(&ScoredWord, &str)>, Vec<(&ScoredWord, &str)>) = pool
        .iter()
        .filter(|w| w.lemma != target.lemma)
        .filter_map(|w| Some((w, contexts.get(&w.lemma)?.translation()?)))
        .partition(|(w, _)| is_close_match(target, w, mix));
    shuffle(rng, &mut preferred);
    shuffle(rng, &mut backfill);

    let mut chosen: Vec<String> = Vec::with_capacity(mix.distractor_count);
    for (_, text) in preferred.into_iter().chain(backfill) {
        if chosen.len() >= mix.distractor_count {
            break;
        }
        if same_text(text, correct) || chosen.iter().any(|c| same_text(c, text)) {
            continue;
        }
        chosen.push(text.to_string());
    }
    chosen
}

/// Pick the right translation of the word among shuffled options.
///
/// Emitted even when fewer than the full set of distractors could be found.
pub fn build<R: Rng>(
    rng: &mut R,
    word: &ScoredWord,
    pool: &[ScoredWord],
    contexts: &HashMap<String, WordContext>,
    mix: &ExerciseMix,
) -> Option<Exercise> {
    let target = exercise_word(word, contexts.get(&word.lemma))?;
    let distractors = pick_distractors(rng, word, &target.translation, pool, contexts, mix);

    let mut options: Vec<ChoiceOption> = Vec::with_capacity(distractors.len() + 1);
    options.push(option(target.translation.clone(), true));
    options.extend(distractors.into_iter().map(|d| option(d, false)));
    shuffle(rng, &mut options);

    Some(Exercise::MultipleChoice {
        prompt: format!("What does \"{}\" mean?", target.surface_text),
        word: target,
        options,
    })
}
