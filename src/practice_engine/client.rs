use serde_json::{json, Value};

use crate::practice_engine::{
    error::SchedulerError,
    models::{ChoiceOption, Exercise, ExerciseResult, ExerciseType, ExerciseWord, PracticeSession},
};

/// Tag the UI uses to pick an exercise renderer.
fn type_tag(t: ExerciseType) -> &'static str {
    match t {
        ExerciseType::MultipleChoice  => "multipleChoice",
        ExerciseType::WordTranslation => "wordTranslation",
        ExerciseType::FillInBlank     => "fillInBlank",
        ExerciseType::Matching        => "matching",
    }
}

fn word_json(w: &ExerciseWord) -> Value {
    json!({
        "lemma": w.lemma,
        "surfaceText": w.surface_text,
        "translation": w.translation,
    })
}

fn options_json(options: &[ChoiceOption]) -> Value {
    Value::Array(
        options
            .iter()
            .enumerate()
            .map(|(i, o)| json!({ "id": i, "text": o.text, "isCorrect": o.is_correct }))
            .collect(),
    )
}

/// One exercise in the shape the UI renders.
pub fn exercise_json(index: usize, exercise: &Exercise) -> Value {
    let t = exercise.exercise_type();
    let body = match exercise {
        Exercise::MultipleChoice { word, prompt, options } => json!({
            "word": word_json(word),
            "prompt": prompt,
            "options": options_json(options),
        }),
        Exercise::WordTranslation { word, direction } => json!({
            "word": word_json(word),
            "direction": direction.to_string(),
        }),
        Exercise::FillInBlank { word, sentence_with_blank } => json!({
            "word": word_json(word),
            "sentenceWithBlank": sentence_with_blank,
        }),
        Exercise::Matching { pairs } => json!({
            "pairs": pairs
                .iter()
                .map(|p| json!({
                    "lemma": p.lemma,
                    "surfaceText": p.surface_text,
                    "translation": p.translation,
                }))
                .collect::<Vec<_>>(),
        }),
    };
    json!({
        "index": index,
        "type": type_tag(t),
        "label": t.to_string(),
        "difficulty": t.difficulty(),
        "data": body,
    })
}

/// Map a planned session to the JSON payload the practice page consumes.
pub fn to_client_payload(session: &PracticeSession) -> Value {
    json!({
        "sessionId": session.session_id,
        "sessionIndex": session.session_index,
        "averageDifficulty": session.average_difficulty,
        "words": session.words.iter().map(|w| w.lemma.as_str()).collect::<Vec<_>>(),
        "exercises": session
            .exercises
            .iter()
            .enumerate()
            .map(|(i, e)| exercise_json(i, e))
            .collect::<Vec<_>>(),
    })
}

/// Parse the UI's result report: a JSON array of
/// `{ "exerciseType", "lemma", "isCorrect", "timeSpentMs" }` objects.
pub fn results_from_json(json: &str) -> Result<Vec<ExerciseResult>, SchedulerError> {
    Ok(serde_json::from_str(json)?)
}
