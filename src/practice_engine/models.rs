use std::fmt;
use serde::{Deserialize, Serialize};

use crate::practice_engine::{
    config::{DEFAULT_SESSION_SIZE, DEFAULT_TARGET_WORDS},
    error::SchedulerError,
};

// ---------------------------------------------------------------------------
// Learner vocabulary
// ---------------------------------------------------------------------------

/// One learner × lemma statistics record, as held by the external store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// Canonical dictionary form, unique per learner.
    pub lemma: String,
    /// Representative inflected form shown to the learner.
    pub surface_text: String,
    /// Coarse part-of-speech class, used to group distractors.
    pub pos_class: String,
    /// Normalised corpus popularity, 0–100.
    pub corpus_frequency: f64,
    pub times_seen: u32,
    pub times_correct: u32,
    /// Session counter value at last practice; `None` if never practiced.
    pub last_practiced_session: Option<u64>,
}

impl VocabularyEntry {
    /// A fresh entry for a word the learner has just encountered.
    pub fn new(
        lemma: impl Into<String>,
        surface_text: impl Into<String>,
        pos_class: impl Into<String>,
        corpus_frequency: f64,
    ) -> Self {
        VocabularyEntry {
            lemma: lemma.into(),
            surface_text: surface_text.into(),
            pos_class: pos_class.into(),
            corpus_frequency,
            times_seen: 0,
            times_correct: 0,
            last_practiced_session: None,
        }
    }

    /// Historical accuracy, 0 when the word has never been seen.
    pub fn accuracy(&self) -> f64 {
        if self.times_seen == 0 {
            return 0.0;
        }
        self.times_correct.min(self.times_seen) as f64 / self.times_seen as f64
    }

    /// Check the `times_correct <= times_seen` invariant.
    pub fn validate(&self) -> Result<(), SchedulerError> {
        if self.times_correct > self.times_seen {
            return Err(SchedulerError::InconsistentStats {
                lemma: self.lemma.clone(),
                times_seen: self.times_seen,
                times_correct: self.times_correct,
            });
        }
        Ok(())
    }
}

/// A vocabulary entry after scoring. Built fresh for every scheduling call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredWord {
    pub lemma: String,
    pub surface_text: String,
    pub pos_class: String,
    pub corpus_frequency: f64,
    pub accuracy: f64,
    /// Sessions since last practice, or the vocabulary size if never practiced.
    pub practice_gap: u64,
    pub score: f64,
}

/// Out-of-band data for one lemma: a gloss and the sentence the learner first
/// met the word in. Either may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordContext {
    pub translation: Option<String>,
    pub context_sentence: Option<String>,
}

impl WordContext {
    pub fn new(translation: impl Into<String>, context_sentence: impl Into<String>) -> Self {
        WordContext {
            translation: Some(translation.into()),
            context_sentence: Some(context_sentence.into()),
        }
    }

    pub fn translation_only(translation: impl Into<String>) -> Self {
        WordContext {
            translation: Some(translation.into()),
            context_sentence: None,
        }
    }

    /// The translation, if present and not blank.
    pub fn translation(&self) -> Option<&str> {
        non_blank(self.translation.as_deref())
    }

    /// The context sentence, if present and not blank.
    pub fn context_sentence(&self) -> Option<&str> {
        non_blank(self.context_sentence.as_deref())
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Exercises
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseType {
    MultipleChoice,
    WordTranslation,
    FillInBlank,
    Matching,
}

impl ExerciseType {
    /// Reporting weight. Never used for selection.
    pub fn difficulty(self) -> f64 {
        match self {
            ExerciseType::MultipleChoice  => 1.0,
            ExerciseType::Matching        => 1.5,
            ExerciseType::FillInBlank     => 2.0,
            ExerciseType::WordTranslation => 3.0,
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExerciseType::MultipleChoice  => "Multiple Choice",
            ExerciseType::WordTranslation => "Word Translation",
            ExerciseType::FillInBlank     => "Fill in the Blank",
            ExerciseType::Matching        => "Matching",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranslationDirection {
    FrenchToEnglish,
}

impl fmt::Display for TranslationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationDirection::FrenchToEnglish => write!(f, "French → English"),
        }
    }
}

/// The word an exercise drills, joined with its translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseWord {
    pub lemma: String,
    pub surface_text: String,
    pub translation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingPair {
    pub surface_text: String,
    pub translation: String,
    pub lemma: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Exercise {
    MultipleChoice {
        word: ExerciseWord,
        prompt: String,
        options: Vec<ChoiceOption>,
    },
    WordTranslation {
        word: ExerciseWord,
        direction: TranslationDirection,
    },
    FillInBlank {
        word: ExerciseWord,
        sentence_with_blank: String,
    },
    Matching {
        pairs: Vec<MatchingPair>,
    },
}

impl Exercise {
    pub fn exercise_type(&self) -> ExerciseType {
        match self {
            Exercise::MultipleChoice { .. }  => ExerciseType::MultipleChoice,
            Exercise::WordTranslation { .. } => ExerciseType::WordTranslation,
            Exercise::FillInBlank { .. }     => ExerciseType::FillInBlank,
            Exercise::Matching { .. }        => ExerciseType::Matching,
        }
    }

    pub fn difficulty(&self) -> f64 {
        self.exercise_type().difficulty()
    }

    /// The single drilled word; `None` for matching exercises.
    pub fn word(&self) -> Option<&ExerciseWord> {
        match self {
            Exercise::MultipleChoice { word, .. }
            | Exercise::WordTranslation { word, .. }
            | Exercise::FillInBlank { word, .. } => Some(word),
            Exercise::Matching { .. } => None,
        }
    }

    /// Every lemma this exercise touches.
    pub fn lemmas(&self) -> Vec<&str> {
        match self {
            Exercise::Matching { pairs } => pairs.iter().map(|p| p.lemma.as_str()).collect(),
            _ => self.word().map(|w| w.lemma.as_str()).into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Session request / response / feedback
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRequest {
    /// The learner's current session counter.
    pub session_index: u64,
    /// How many words to select for the session.
    pub target_words: usize,
    /// Upper bound on the number of exercises.
    pub session_size: usize,
    pub rng_seed: Option<u64>,
}

impl SessionRequest {
    /// Request with the default word count and session size, and an entropy seed.
    pub fn new(session_index: u64) -> Self {
        SessionRequest {
            session_index,
            target_words: DEFAULT_TARGET_WORDS,
            session_size: DEFAULT_SESSION_SIZE,
            rng_seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeSession {
    pub session_id: String,
    pub session_index: u64,
    pub words: Vec<ScoredWord>,
    pub exercises: Vec<Exercise>,
    pub average_difficulty: f64,
}

/// One exercise outcome as reported back by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseResult {
    pub exercise_type: ExerciseType,
    pub lemma: String,
    pub is_correct: bool,
    pub time_spent_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub exercises: usize,
    pub correct: usize,
    pub accuracy: f64,
    pub total_time_ms: u64,
    pub words_practiced: usize,
}
