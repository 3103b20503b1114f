use std::cmp::Ordering;

use crate::practice_engine::{
    config::SchedulerConfig,
    models::{ScoredWord, VocabularyEntry},
    score::score_entry,
};

fn score_desc(a: &ScoredWord, b: &ScoredWord) -> Ordering {
    b.score.total_cmp(&a.score)
}

/// Score every entry and sort by score, highest first.
///
/// The sort is stable, so entries with equal scores keep their input order and
/// repeated calls on the same snapshot give the same ranking.
pub fn rank(
    entries: &[VocabularyEntry],
    current_session: u64,
    config: &SchedulerConfig,
) -> Vec<ScoredWord> {
    let vocabulary_size = entries.len();
    let mut scored: Vec<ScoredWord> = entries
        .iter()
        .map(|e| score_entry(e, current_session, vocabulary_size, config))
        .collect();
    scored.sort_by(score_desc);
    scored
}

/// Size of the candidate pool handed to the sampler.
pub fn pool_size(target_count: usize, available: usize, config: &SchedulerConfig) -> usize {
    target_count.saturating_mul(config.oversampling_factor).min(available)
}

/// Rank and keep the top `oversampling_factor × target_count` candidates.
pub fn candidate_pool(
    entries: &[VocabularyEntry],
    current_session: u64,
    target_count: usize,
    config: &SchedulerConfig,
) -> Vec<ScoredWord> {
    let mut ranked = rank(entries, current_session, config);
    let keep = pool_size(target_count, ranked.len(), config);
    ranked.truncate(keep);
    log::debug!(
        "ranked {} entries at session {current_session}, kept {keep} candidates (top score {:.3})",
        entries.len(),
        ranked.first().map_or(0.0, |w| w.score),
    );
    ranked
}
