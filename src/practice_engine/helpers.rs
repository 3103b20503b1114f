//! Shared builder functions used by the exercise builders.
//!
//! Every builder needs the same pieces: join a scored word with its
//! translation, build answer options, blank a word out of a sentence, and
//! shuffle the result. These helpers keep the builders focused on their own
//! eligibility rules.

use rand::seq::SliceRandom;
use rand::Rng;
use regex::RegexBuilder;

use crate::practice_engine::models::{ChoiceOption, ExerciseWord, ScoredWord, WordContext};

/// Join a scored word with its context. `None` when the translation is missing.
pub fn exercise_word(word: &ScoredWord, context: Option<&WordContext>) -> Option<ExerciseWord> {
    let translation = context?.translation()?;
    Some(ExerciseWord {
        lemma: word.lemma.clone(),
        surface_text: word.surface_text.clone(),
        translation: translation.to_string(),
    })
}

/// Build one answer option.
pub fn option(text: impl Into<String>, is_correct: bool) -> ChoiceOption {
    ChoiceOption {
        text: text.into(),
        is_correct,
    }
}

/// Shuffle in place with the caller's RNG.
pub fn shuffle<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    items.shuffle(rng);
}

/// Replace every whole-word, case-insensitive occurrence of `surface` in
/// `sentence` with `marker`.
///
/// `surface` is matched literally. Returns `None` when the word does not occur
/// in the sentence, since the blanked sentence would have nothing to fill in.
pub fn blank_out(sentence: &str, surface: &str, marker: &str) -> Option<String> {
    let surface = surface.trim();
    if surface.is_empty() {
        return None;
    }
    let pattern = format!(r"\b{}\b", regex::escape(surface));
    let re = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re,
        Err(e) => {
            log::warn!("cannot build blank pattern for '{surface}': {e}");
            return None;
        }
    };
    if !re.is_match(sentence) {
        return None;
    }
    Some(re.replace_all(sentence, regex::NoExpand(marker)).into_owned())
}
