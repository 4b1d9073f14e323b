//! Upstream payload fixtures.

use serde_json::{json, Value};

/// A full upstream response for `word` with four senses, one of them blank.
pub fn word_response(word: &str) -> Value {
    json!({
        "ok": true,
        "data": {
            "word": word,
            "meanings": [{
                "origin": { "raw": "Del lat. rodĕre.", "type": "lat", "text": "rodĕre" },
                "senses": [
                    { "description": format!("Primera acepción de {}.", word), "synonyms": ["uno", ""] },
                    { "raw": "2. tr. Segunda acepción.", "synonyms": null },
                    { "description": "" },
                    { "description": "Tercera acepción.", "examples": ["un ejemplo"] },
                    { "description": "Cuarta acepción." }
                ],
                "conjugations": {
                    "non_personal": { "infinitive": word },
                    "indicative": {
                        "present": { "singular_first_person": "roo" },
                        "preterite": { "singular_first_person": "roí" },
                        "future": { "singular_first_person": "roeré" }
                    },
                    "subjunctive": { "present": { "singular_first_person": "roa" } },
                    "imperative": { "singular_second_person": "roe" }
                }
            }]
        }
    })
}

/// A response whose data has no word and no meanings.
pub fn response_without_word() -> Value {
    json!({ "ok": true, "data": { "meanings": [] } })
}
