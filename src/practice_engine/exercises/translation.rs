use std::collections::HashMap;

use crate::practice_engine::{
    helpers::exercise_word,
    models::{Exercise, ScoredWord, TranslationDirection, WordContext},
};

/// Translate the word from French into English.
pub fn build(word: &ScoredWord, contexts: &HashMap<String, WordContext>) -> Option<Exercise> {
    let word = exercise_word(word, contexts.get(&word.lemma))?;
    Some(Exercise::WordTranslation {
        word,
        direction: TranslationDirection::FrenchToEnglish,
    })
}
