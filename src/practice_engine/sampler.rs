//! Weighted sampling without replacement.
//!
//! Each draw picks from the remaining pool with probability proportional to
//! score, then removes the pick. A linear scan per draw is plenty for pools of
//! a few dozen candidates. When every remaining candidate scores zero the draw
//! falls back to a uniform pick.

use rand::Rng;

use crate::practice_engine::models::ScoredWord;

/// Index of the candidate a uniform `r` in `[0, total)` lands on.
fn pick_index(pool: &[ScoredWord], r: f64) -> usize {
    let mut running = 0.0;
    for (i, w) in pool.iter().enumerate() {
        running += w.score.max(0.0);
        if running > r {
            return i;
        }
    }
    // Rounding can leave `r` just past the final sum; take the last weighted one.
    pool.iter().rposition(|w| w.score > 0.0).unwrap_or(pool.len() - 1)
}

/// Draw `min(target_count, candidates.len())` distinct candidates.
pub fn sample<R: Rng>(rng: &mut R, candidates: Vec<ScoredWord>, target_count: usize) -> Vec<ScoredWord> {
    let draws = target_count.min(candidates.len());
    let mut pool = candidates;
    let mut picked = Vec::with_capacity(draws);

    while picked.len() < draws {
        let total: f64 = pool.iter().map(|w| w.score.max(0.0)).sum();
        let idx = if total > 0.0 {
            pick_index(&pool, rng.gen_range(0.0..total))
        } else {
            log::warn!("all {} remaining candidates score zero, picking uniformly", pool.len());
            rng.gen_range(0..pool.len())
        };
        let word = pool.remove(idx);
        log::trace!("drew '{}' (score {:.3}, pool total {total:.3})", word.lemma, word.score);
        picked.push(word);
    }

    debug_assert!(
        {
            let mut seen = std::collections::HashSet::new();
            picked.iter().all(|w| seen.insert(w.lemma.as_str()))
        },
        "sampler emitted a duplicate lemma"
    );
    picked
}
