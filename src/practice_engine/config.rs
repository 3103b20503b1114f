//! Tunable scheduler parameters.
//!
//! Every constant the scheduler relies on lives here under a name, and the
//! [`SchedulerConfig`] defaults reproduce them exactly. Callers can override a
//! subset from JSON; missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::practice_engine::error::SchedulerError;

pub const FREQUENCY_WEIGHT: f64 = 0.5;
pub const ACCURACY_WEIGHT: f64 = 0.3;
pub const RECENCY_WEIGHT: f64 = 0.2;

/// Review intervals as fractions of the learner's vocabulary size.
pub const IMMEDIATE_INTERVAL: f64 = 0.05;
pub const SHORT_INTERVAL: f64 = 0.15;
pub const MEDIUM_INTERVAL: f64 = 0.35;
pub const LONG_INTERVAL: f64 = 0.60;
pub const MIN_ACCURACY_MULTIPLIER: f64 = 0.5;

/// Candidate pool size as a multiple of the requested word count.
pub const OVERSAMPLING_FACTOR: usize = 3;

pub const MULTIPLE_CHOICE_RATIO: f64 = 0.4;
pub const WORD_TRANSLATION_RATIO: f64 = 0.3;
pub const FILL_IN_BLANK_RATIO: f64 = 0.2;
pub const DEFAULT_SESSION_SIZE: usize = 10;
pub const DEFAULT_TARGET_WORDS: usize = 10;
pub const DISTRACTOR_COUNT: usize = 3;
pub const DISTRACTOR_FREQUENCY_BAND: (f64, f64) = (0.5, 2.0);
pub const MATCHING_MIN_PAIRS: usize = 4;
pub const MATCHING_MAX_PAIRS: usize = 6;
pub const BLANK_MARKER: &str = "___";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub frequency: f64,
    pub accuracy: f64,
    pub recency: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            frequency: FREQUENCY_WEIGHT,
            accuracy: ACCURACY_WEIGHT,
            recency: RECENCY_WEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewIntervals {
    pub immediate: f64,
    pub short: f64,
    pub medium: f64,
    pub long: f64,
    pub min_accuracy_multiplier: f64,
}

impl Default for ReviewIntervals {
    fn default() -> Self {
        ReviewIntervals {
            immediate: IMMEDIATE_INTERVAL,
            short: SHORT_INTERVAL,
            medium: MEDIUM_INTERVAL,
            long: LONG_INTERVAL,
            min_accuracy_multiplier: MIN_ACCURACY_MULTIPLIER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExerciseMix {
    pub multiple_choice: f64,
    pub word_translation: f64,
    pub fill_in_blank: f64,
    pub session_size: usize,
    pub distractor_count: usize,
    /// Lower and upper frequency ratio for preferred distractors.
    pub frequency_band: (f64, f64),
    pub matching_min_pairs: usize,
    pub matching_max_pairs: usize,
    pub blank_marker: String,
}

impl Default for ExerciseMix {
    fn default() -> Self {
        ExerciseMix {
            multiple_choice: MULTIPLE_CHOICE_RATIO,
            word_translation: WORD_TRANSLATION_RATIO,
            fill_in_blank: FILL_IN_BLANK_RATIO,
            session_size: DEFAULT_SESSION_SIZE,
            distractor_count: DISTRACTOR_COUNT,
            frequency_band: DISTRACTOR_FREQUENCY_BAND,
            matching_min_pairs: MATCHING_MIN_PAIRS,
            matching_max_pairs: MATCHING_MAX_PAIRS,
            blank_marker: BLANK_MARKER.to_string(),
        }
    }
}

/// Per-type exercise quotas for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quotas {
    pub multiple_choice: usize,
    pub word_translation: usize,
    pub fill_in_blank: usize,
    /// 0 or 1.
    pub matching: usize,
}

impl ExerciseMix {
    /// Split `session_size` by the fixed ratios, rounding each share down.
    /// Whatever budget is left over admits at most one matching exercise.
    pub fn quotas(&self, session_size: usize) -> Quotas {
        let share = |ratio: f64| (session_size as f64 * ratio).floor() as usize;
        let multiple_choice = share(self.multiple_choice);
        let word_translation = share(self.word_translation);
        let fill_in_blank = share(self.fill_in_blank);
        let used = multiple_choice + word_translation + fill_in_blank;
        Quotas {
            multiple_choice,
            word_translation,
            fill_in_blank,
            matching: usize::from(session_size > used),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub weights: ScoreWeights,
    pub intervals: ReviewIntervals,
    pub oversampling_factor: usize,
    pub mix: ExerciseMix,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        SchedulerConfig {
            weights: ScoreWeights::default(),
            intervals: ReviewIntervals::default(),
            oversampling_factor: OVERSAMPLING_FACTOR,
            mix: ExerciseMix::default(),
        }
    }
}

impl SchedulerConfig {
    /// Parse a (possibly partial) JSON config over the defaults and validate it.
    pub fn from_json(json: &str) -> Result<Self, SchedulerError> {
        let config: SchedulerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SchedulerError> {
        let w = &self.weights;
        if [w.frequency, w.accuracy, w.recency].iter().any(|x| !x.is_finite() || *x < 0.0) {
            return Err(invalid("score weights must be finite and non-negative"));
        }
        let sum = w.frequency + w.accuracy + w.recency;
        if (sum - 1.0).abs() > 1e-6 {
            return Err(invalid(format!("score weights must sum to 1.0 (got {sum})")));
        }

        let i = &self.intervals;
        let ordered = 0.0 <= i.immediate
            && i.immediate <= i.short
            && i.short <= i.medium
            && i.medium <= i.long;
        if !ordered {
            return Err(invalid("review intervals must satisfy 0 <= immediate <= short <= medium <= long"));
        }
        if !(i.min_accuracy_multiplier > 0.0 && i.min_accuracy_multiplier <= 1.0) {
            return Err(invalid("min_accuracy_multiplier must be in (0, 1]"));
        }

        if self.oversampling_factor == 0 {
            return Err(invalid("oversampling_factor must be at least 1"));
        }

        let m = &self.mix;
        let ratios = [m.multiple_choice, m.word_translation, m.fill_in_blank];
        if ratios.iter().any(|r| !r.is_finite() || *r < 0.0) || ratios.iter().sum::<f64>() > 1.0 + 1e-9 {
            return Err(invalid("exercise ratios must be non-negative and sum to at most 1.0"));
        }
        let (lo, hi) = m.frequency_band;
        if !(0.0 <= lo && lo <= hi) {
            return Err(invalid("frequency_band must satisfy 0 <= low <= high"));
        }
        if m.matching_min_pairs < 2 || m.matching_min_pairs > m.matching_max_pairs {
            return Err(invalid("matching pair bounds must satisfy 2 <= min <= max"));
        }
        if m.blank_marker.is_empty() {
            return Err(invalid("blank_marker must not be empty"));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> SchedulerError {
    SchedulerError::InvalidConfig(msg.into())
}
