use std::collections::HashMap;

use crate::practice_engine::{
    config::ExerciseMix,
    helpers::{blank_out, exercise_word},
    models::{Exercise, ScoredWord, WordContext},
};

/// Blank the word's surface form out of the sentence it was first met in.
///
/// Needs both a translation and a context sentence, and the surface form must
/// actually occur in the sentence as a whole word.
pub fn build(
    word: &ScoredWord,
    contexts: &HashMap<String, WordContext>,
    mix: &ExerciseMix,
) -> Option<Exercise> {
    let context = contexts.get(&word.lemma)?;
    let sentence = context.context_sentence()?;
    let exercise_word = exercise_word(word, Some(context))?;
    let sentence_with_blank = match blank_out(sentence, &word.surface_text, &mix.blank_marker) {
        Some(s) => s,
        None => {
            log::debug!("'{}' does not occur in its context sentence, skipping blank", word.surface_text);
            return None;
        }
    };
    Some(Exercise::FillInBlank {
        word: exercise_word,
        sentence_with_blank,
    })
}
