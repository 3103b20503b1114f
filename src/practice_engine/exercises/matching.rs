use std::collections::{HashMap, HashSet};

use crate::practice_engine::{
    config::ExerciseMix,
    models::{Exercise, MatchingPair, ScoredWord, WordContext},
};

/// Match French words to their translations.
///
/// Takes translated words highest score first, up to `matching_max_pairs`, and
/// needs at least `matching_min_pairs` of them. Words may already be drilled
/// by another exercise in the same session. Two words sharing a translation
/// would make the board ambiguous, so only the first of them is used.
pub fn build(
    words: &[ScoredWord],
    contexts: &HashMap<String, WordContext>,
    mix: &ExerciseMix,
) -> Option<Exercise> {
    let mut ranked: Vec<&ScoredWord> = words.iter().collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut lemmas = HashSet::new();
    let mut translations = HashSet::new();
    let pairs: Vec<MatchingPair> = ranked
        .into_iter()
        .filter_map(|w| {
            let translation = contexts.get(&w.lemma)?.translation()?;
            Some((w, translation))
        })
        .filter(|&(w, t)| lemmas.insert(w.lemma.as_str()) && translations.insert(t.trim().to_lowercase()))
        .take(mix.matching_max_pairs)
        .map(|(w, t)| MatchingPair {
            surface_text: w.surface_text.clone(),
            translation: t.to_string(),
            lemma: w.lemma.clone(),
        })
        .collect();

    if pairs.len() < mix.matching_min_pairs {
        return None;
    }
    Some(Exercise::Matching { pairs })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translated(n: usize) -> (Vec<ScoredWord>, HashMap<String, WordContext>) {
        let words: Vec<ScoredWord> = (0..n)
            .map(|i| ScoredWord {
                lemma: format!("mot{i}"),
                surface_text: format!("mot{i}"),
                pos_class: "noun".into(),
                corpus_frequency: 50.0,
                accuracy: 0.0,
                practice_gap: 1,
                score: i as f64 / 10.0,
            })
            .collect();
        let ctx = words
            .iter()
            .map(|w| (w.lemma.clone(), WordContext::translation_only(format!("word{}", &w.lemma[3..]))))
            .collect();
        (words, ctx)
    }

    #[test]
    fn three_words_are_not_enough() {
        let (words, ctx) = translated(3);
        assert!(build(&words, &ctx, &ExerciseMix::default()).is_none());
    }

    #[test]
    fn four_words_make_four_pairs() {
        let (words, ctx) = translated(4);
        let Some(Exercise::Matching { pairs }) = build(&words, &ctx, &ExerciseMix::default()) else {
            panic!("expected a matching exercise");
        };
        assert_eq!(pairs.len(), 4);
    }

    #[test]
    fn capped_at_six_highest_scoring() {
        let (words, ctx) = translated(9);
        let Some(Exercise::Matching { pairs }) = build(&words, &ctx, &ExerciseMix::default()) else {
            panic!("expected a matching exercise");
        };
        let lemmas: Vec<&str> = pairs.iter().map(|p| p.lemma.as_str()).collect();
        assert_eq!(lemmas, ["mot8", "mot7", "mot6", "mot5", "mot4", "mot3"]);
        assert_eq!(pairs[0].translation, "word8");
    }

    #[test]
    fn untranslated_and_ambiguous_words_do_not_count() {
        let (words, mut ctx) = translated(5);
        ctx.remove("mot0");
        ctx.insert("mot1".into(), WordContext::translation_only("word2"));
        assert!(build(&words, &ctx, &ExerciseMix::default()).is_none());
    }
}
