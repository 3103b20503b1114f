//! End-to-end practice session demo.
//!
//! Run with: `RUST_LOG=debug cargo run --example session`
//!
//! 1. **Plan** — a small French vocabulary is scored, sampled and turned into
//!    an exercise mix with a fixed seed, so the output is reproducible.
//! 2. **Practice** — every exercise is "answered" (matching pairs count one
//!    result each) and the results are recorded back into the statistics.
//! 3. **Replan** — the next session is planned from the updated statistics,
//!    showing how practiced words lose priority.

use std::collections::HashMap;

use practice_scheduler::{
    plan_session, record_session, to_client_payload, Exercise, ExerciseResult, PracticeSession,
    SessionRequest, VocabularyEntry, WordContext,
};

const WORDS: [(&str, &str, &str, f64, &str, &str); 12] = [
    ("aller",   "va",      "verb", 98.0, "to go",    "Il va au marché demain."),
    ("manger",  "mange",   "verb", 80.0, "to eat",   "Elle mange une pomme."),
    ("parler",  "parlé",   "verb", 85.0, "to speak", "Nous avons parlé hier soir."),
    ("courir",  "court",   "verb", 55.0, "to run",   "Le chien court dans le parc."),
    ("maison",  "maison",  "noun", 75.0, "house",    "La maison est grande."),
    ("chat",    "chat",    "noun", 60.0, "cat",      ""),
    ("voiture", "voiture", "noun", 65.0, "car",      "Sa voiture est rouge."),
    ("arbre",   "arbres",  "noun", 40.0, "tree",     "Les arbres perdent leurs feuilles."),
    ("rouge",   "rouge",   "adj",  50.0, "red",      "Sa voiture est rouge."),
    ("grand",   "grande",  "adj",  82.0, "big",      "La maison est grande."),
    ("demain",  "demain",  "adv",  70.0, "",         "Il va au marché demain."),
    ("souvent", "souvent", "adv",  58.0, "often",    "Je lis souvent le soir."),
];

fn vocabulary() -> Vec<VocabularyEntry> {
    WORDS
        .iter()
        .enumerate()
        .map(|(i, (lemma, surface, pos, freq, _, _))| {
            let mut e = VocabularyEntry::new(*lemma, *surface, *pos, *freq);
            // Every third word is brand new; the rest have some history.
            if i % 3 != 0 {
                e.times_seen = 4 + i as u32;
                e.times_correct = (i as u32 * 3) % e.times_seen;
                e.last_practiced_session = Some((i % 5) as u64);
            }
            e
        })
        .collect()
}

fn contexts() -> HashMap<String, WordContext> {
    WORDS
        .iter()
        .map(|(lemma, _, _, _, translation, sentence)| {
            let ctx = WordContext {
                translation: Some(translation.to_string()),
                context_sentence: Some(sentence.to_string()),
            };
            (lemma.to_string(), ctx)
        })
        .collect()
}

fn print_session(session: &PracticeSession) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{}]  session #{}  average difficulty {:.2}",
        session.session_id, session.session_index, session.average_difficulty);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for w in &session.words {
        println!("  {:<8} score {:.3}  accuracy {:>4.0}%  gap {}",
            w.lemma, w.score, w.accuracy * 100.0, w.practice_gap);
    }
    println!();
    for (i, exercise) in session.exercises.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, exercise.exercise_type());
        match exercise {
            Exercise::MultipleChoice { prompt, options, .. } => {
                println!("      {prompt}");
                for o in options {
                    let marker = if o.is_correct { "✓" } else { " " };
                    println!("      [{marker}] {}", o.text);
                }
            }
            Exercise::WordTranslation { word, direction } => {
                println!("      {direction}: {}", word.surface_text);
            }
            Exercise::FillInBlank { sentence_with_blank, word } => {
                println!("      {sentence_with_blank}   ({})", word.translation);
            }
            Exercise::Matching { pairs } => {
                for p in pairs {
                    println!("      {} ↔ {}", p.surface_text, p.translation);
                }
            }
        }
    }
    println!();
}

/// Pretend the learner answered: everything right except every fourth result.
fn simulate_answers(session: &PracticeSession) -> Vec<ExerciseResult> {
    session
        .exercises
        .iter()
        .flat_map(|e| {
            let t = e.exercise_type();
            e.lemmas().into_iter().map(move |lemma| (t, lemma.to_string())).collect::<Vec<_>>()
        })
        .enumerate()
        .map(|(i, (exercise_type, lemma))| ExerciseResult {
            exercise_type,
            lemma,
            is_correct: i % 4 != 3,
            time_spent_ms: 1_500 + 250 * i as u64,
        })
        .collect()
}

fn main() {
    env_logger::init();

    let mut vocab = vocabulary();
    let ctx = contexts();

    // ── Plan ─────────────────────────────────────────────────────────────────
    println!();
    println!("══ Session 5 (seed 2024) ══");
    println!();
    let request = SessionRequest { rng_seed: Some(2024), target_words: 8, ..SessionRequest::new(5) };
    let session = match plan_session(request, &vocab, &ctx) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("cannot plan session: {e}");
            return;
        }
    };
    print_session(&session);

    // ── Practice ─────────────────────────────────────────────────────────────
    let results = simulate_answers(&session);
    let mut store: HashMap<String, VocabularyEntry> =
        vocab.drain(..).map(|e| (e.lemma.clone(), e)).collect();
    match record_session(&mut store, &results, 5) {
        Ok(summary) => println!(
            "  Recorded {}/{} correct over {} words in {:.1}s",
            summary.correct, summary.exercises, summary.words_practiced,
            summary.total_time_ms as f64 / 1000.0,
        ),
        Err(e) => eprintln!("cannot record session: {e}"),
    }

    // ── Replan ───────────────────────────────────────────────────────────────
    let mut vocab: Vec<VocabularyEntry> = store.into_values().collect();
    vocab.sort_by(|a, b| a.lemma.cmp(&b.lemma));
    println!();
    println!("══ Session 6 (seed 2025) ══");
    println!();
    let request = SessionRequest { rng_seed: Some(2025), target_words: 8, ..SessionRequest::new(6) };
    match plan_session(request, &vocab, &ctx) {
        Ok(next) => {
            print_session(&next);
            println!("  Client payload:");
            println!("{}", serde_json::to_string_pretty(&to_client_payload(&next)).unwrap_or_default());
        }
        Err(e) => eprintln!("cannot plan session: {e}"),
    }
}
