use std::collections::HashMap;

use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

use crate::practice_engine::{
    assembler::{average_difficulty, build_session},
    config::SchedulerConfig,
    error::SchedulerError,
    models::{Exercise, PracticeSession, ScoredWord, SessionRequest, VocabularyEntry, WordContext},
    ranker::candidate_pool,
    sampler::sample,
};

/// Session ID from the RNG stream, e.g. `PS-1A2B3C4D`.
fn make_session_id(rng: &mut impl RngCore) -> String {
    format!("PS-{:08X}", rng.next_u32())
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// A configured scheduler. Holds no state between calls.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    config: SchedulerConfig,
}

impl Scheduler {
    /// Build a scheduler from a validated config.
    pub fn new(config: SchedulerConfig) -> Result<Self, SchedulerError> {
        config.validate()?;
        Ok(Scheduler { config })
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Rank the vocabulary, keep the oversampled candidate pool, and draw
    /// `target_count` words from it by weighted sampling.
    pub fn select_words<R: Rng>(
        &self,
        rng: &mut R,
        vocabulary: &[VocabularyEntry],
        current_session: u64,
        target_count: usize,
    ) -> Vec<ScoredWord> {
        if vocabulary.is_empty() || target_count == 0 {
            return Vec::new();
        }
        let pool = candidate_pool(vocabulary, current_session, target_count, &self.config);
        let selected = sample(rng, pool, target_count);
        log::debug!(
            "selected {} of {} words for session {current_session}",
            selected.len(),
            vocabulary.len(),
        );
        selected
    }

    /// Assemble up to `session_size` exercises from the selected words.
    pub fn build_exercises<R: Rng>(
        &self,
        rng: &mut R,
        selected: &[ScoredWord],
        contexts: &HashMap<String, WordContext>,
        session_size: usize,
    ) -> Vec<Exercise> {
        build_session(rng, selected, contexts, session_size, &self.config.mix)
    }

    /// Select words and build their exercises in one RNG stream.
    ///
    /// Unlike the two steps on their own, an empty outcome is reported as an
    /// error so the caller can tell the learner there is nothing to practice.
    /// A request for zero words or zero exercises is rejected up front.
    pub fn plan_session(
        &self,
        request: &SessionRequest,
        vocabulary: &[VocabularyEntry],
        contexts: &HashMap<String, WordContext>,
    ) -> Result<PracticeSession, SchedulerError> {
        if request.target_words == 0 {
            return Err(SchedulerError::InvalidConfig("target_words must be at least 1".into()));
        }
        if request.session_size == 0 {
            return Err(SchedulerError::InvalidConfig("session_size must be at least 1".into()));
        }
        for entry in vocabulary {
            if let Err(e) = entry.validate() {
                log::warn!("scoring inconsistent snapshot entry: {e}");
            }
        }

        let mut rng = seeded_rng(request.rng_seed);
        let session_id = make_session_id(&mut rng);

        let words = self.select_words(&mut rng, vocabulary, request.session_index, request.target_words);
        if words.is_empty() {
            return Err(SchedulerError::NoWordsAvailable);
        }
        let exercises = self.build_exercises(&mut rng, &words, contexts, request.session_size);
        if exercises.is_empty() {
            return Err(SchedulerError::NoExercisesAvailable);
        }

        Ok(PracticeSession {
            session_id,
            session_index: request.session_index,
            average_difficulty: average_difficulty(&exercises),
            words,
            exercises,
        })
    }
}

/// Select words for the next session with the default config and a fresh
/// entropy-seeded RNG.
pub fn select_words_for_practice(
    vocabulary: &[VocabularyEntry],
    current_session: u64,
    target_count: usize,
) -> Vec<ScoredWord> {
    Scheduler::default().select_words(&mut seeded_rng(None), vocabulary, current_session, target_count)
}

/// Build the default-sized exercise mix for already selected words.
pub fn generate_exercise_mix(
    selected: &[ScoredWord],
    contexts: &HashMap<String, WordContext>,
) -> Vec<Exercise> {
    let scheduler = Scheduler::default();
    let size = scheduler.config().mix.session_size;
    scheduler.build_exercises(&mut seeded_rng(None), selected, contexts, size)
}

/// Plan a full session with the default config.
pub fn plan_session(
    request: SessionRequest,
    vocabulary: &[VocabularyEntry],
    contexts: &HashMap<String, WordContext>,
) -> Result<PracticeSession, SchedulerError> {
    Scheduler::default().plan_session(&request, vocabulary, contexts)
}
