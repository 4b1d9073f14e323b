//! Upstream RAE word responses and their reduction to [`DictEntry`].
//!
//! The upstream shape is loosely specified, so every field is optional and
//! `null` collections are treated as empty.
//!
//! # Example payload
//! ```json
//! { "ok": true,
//!   "data": { "word": "roer",
//!             "meanings": [ { "origin": { "raw": "Del lat. rodĕre." },
//!                             "senses": [ { "description": "Cortar menudamente..." } ],
//!                             "conjugations": { "indicative": { "present": { ... } } } } ] } }
//! ```

use crate::types::{null_as_default, Conjugations, DictEntry, NonPersonalForms, PersonTable, Sense, Tenses};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Senses kept per simplified entry.
pub const MAX_SENSES: usize = 3;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RaeWordResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ok: bool,
    #[serde(default)]
    pub data: Option<RaeWordData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RaeWordData {
    #[serde(default, deserialize_with = "lenient_string")]
    pub word: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meanings: Vec<RaeMeaning>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RaeMeaning {
    #[serde(default)]
    pub origin: Option<RaeOrigin>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub senses: Vec<RaeSense>,
    #[serde(default)]
    pub conjugations: Option<RaeConjugations>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RaeOrigin {
    #[serde(default, deserialize_with = "lenient_string")]
    pub raw: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RaeSense {
    #[serde(default, deserialize_with = "lenient_string")]
    pub raw: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "string_items")]
    pub synonyms: Vec<String>,
    #[serde(default, deserialize_with = "string_items")]
    pub examples: Vec<String>,
}

/// A string field that tolerates any other JSON type as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// String items of a JSON array; non-string items and non-array values are dropped.
fn string_items<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RaeConjugations {
    #[serde(default)]
    pub non_personal: Option<Value>,
    /// Tense name -> person table.
    #[serde(default)]
    pub indicative: Option<Value>,
    #[serde(default)]
    pub subjunctive: Option<Value>,
    #[serde(default)]
    pub imperative: Option<Value>,
}

impl RaeWordResponse {
    /// Reduce the response to the cached payload, using `query` when the
    /// upstream omits the word.
    pub fn into_entry(self, query: &str) -> DictEntry {
        let data = self.data.unwrap_or_default();
        let word = data
            .word
            .filter(|w| !w.trim().is_empty())
            .unwrap_or_else(|| query.to_string());
        simplify(data.meanings.first(), &word)
    }
}

fn non_blank(items: &[String]) -> Vec<String> {
    items
        .iter()
        .filter(|s| !s.trim().is_empty())
        .cloned()
        .collect()
}

/// String-valued rows of an upstream person table.
fn person_table(value: Option<&Value>) -> Option<PersonTable> {
    let table: PersonTable = value?
        .as_object()?
        .iter()
        .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
        .collect();
    (!table.is_empty()).then_some(table)
}

fn non_personal_forms(value: Option<&Value>) -> Option<NonPersonalForms> {
    let object = value?.as_object()?;
    let form = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_string);
    let forms = NonPersonalForms {
        infinitive: form("infinitive"),
        participle: form("participle"),
        gerund: form("gerund"),
        compound_infinitive: form("compound_infinitive"),
        compound_gerund: form("compound_gerund"),
    };
    (!forms.is_empty()).then_some(forms)
}

fn simplify_sense(sense: &RaeSense) -> Sense {
    let text = sense
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .or(sense.raw.as_deref())
        .unwrap_or_default()
        .to_string();
    let examples = non_blank(&sense.examples);

    Sense {
        text,
        synonyms: non_blank(&sense.synonyms),
        examples: (!examples.is_empty()).then_some(examples),
    }
}

fn simplify_conjugations(cj: &RaeConjugations) -> Conjugations {
    Conjugations {
        non_personal: non_personal_forms(cj.non_personal.as_ref()),
        indicative: Some(Tenses {
            present: person_table(cj.indicative.as_ref().and_then(|t| t.get("present"))),
            preterite: person_table(cj.indicative.as_ref().and_then(|t| t.get("preterite"))),
        }),
        subjunctive: Some(Tenses {
            present: person_table(cj.subjunctive.as_ref().and_then(|t| t.get("present"))),
            preterite: None,
        }),
        imperative: person_table(cj.imperative.as_ref()),
    }
}

/// Reduce one upstream meaning to the cached payload.
///
/// Senses without text are dropped and at most [`MAX_SENSES`] are kept.
pub fn simplify(meaning: Option<&RaeMeaning>, fallback_word: &str) -> DictEntry {
    let Some(meaning) = meaning else {
        return DictEntry {
            word: fallback_word.to_string(),
            ..Default::default()
        };
    };

    let senses = meaning
        .senses
        .iter()
        .map(simplify_sense)
        .filter(|s| !s.text.is_empty())
        .take(MAX_SENSES)
        .collect();

    DictEntry {
        word: fallback_word.to_string(),
        senses,
        etymology: meaning
            .origin
            .as_ref()
            .and_then(|o| o.raw.clone())
            .filter(|raw| !raw.is_empty()),
        conjugations: meaning.conjugations.as_ref().map(simplify_conjugations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ROER: &str = r#"{
        "ok": true,
        "data": {
            "word": "roer",
            "meanings": [{
                "origin": { "raw": "Del lat. rodĕre.", "type": "lat", "text": "rodĕre" },
                "senses": [
                    { "description": "Cortar menudamente con los dientes.", "synonyms": ["mordisquear", ""] },
                    { "raw": "2. tr. Quitar poco a poco.", "synonyms": null, "examples": ["roer el hueso"] },
                    { "description": "" },
                    { "description": "Molestar, afligir.", "category": "verb" },
                    { "description": "Cuarta acepción." }
                ],
                "conjugations": {
                    "non_personal": { "infinitive": "roer", "gerund": "royendo", "participle": null },
                    "indicative": {
                        "present": { "singular_first_person": "roo", "plural_third_person": "roen" },
                        "future": { "singular_first_person": "roeré" }
                    },
                    "subjunctive": { "present": { "singular_first_person": "roa" } },
                    "imperative": { "singular_second_person": "roe", "weird": 3 }
                }
            }, {
                "senses": [{ "description": "Ignorado" }]
            }]
        }
    }"#;

    #[test]
    fn test_simplifies_first_meaning() {
        let response: RaeWordResponse = serde_json::from_str(ROER).unwrap();
        assert!(response.ok);
        let entry = response.into_entry("Roer");

        assert_eq!(entry.word, "roer");
        assert_eq!(entry.etymology.as_deref(), Some("Del lat. rodĕre."));

        let texts: Vec<&str> = entry.senses.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Cortar menudamente con los dientes.",
                "2. tr. Quitar poco a poco.",
                "Molestar, afligir.",
            ]
        );
        assert_eq!(entry.senses[0].synonyms, vec!["mordisquear".to_string()]);
        assert_eq!(entry.senses[0].examples, None);
        assert_eq!(entry.senses[1].synonyms, Vec::<String>::new());
        assert_eq!(
            entry.senses[1].examples,
            Some(vec!["roer el hueso".to_string()])
        );
    }

    #[test]
    fn test_keeps_only_sampled_conjugations() {
        let response: RaeWordResponse = serde_json::from_str(ROER).unwrap();
        let cj = response.into_entry("roer").conjugations.unwrap();

        let indicative = cj.indicative.unwrap();
        let present = indicative.present.unwrap();
        assert_eq!(present.get("singular_first_person").map(String::as_str), Some("roo"));
        assert_eq!(indicative.preterite, None);

        let subjunctive = cj.subjunctive.unwrap();
        assert_eq!(subjunctive.present.unwrap().len(), 1);

        let imperative = cj.imperative.unwrap();
        assert_eq!(imperative.len(), 1);
        assert_eq!(imperative.get("singular_second_person").map(String::as_str), Some("roe"));

        let np = cj.non_personal.unwrap();
        assert_eq!(np.infinitive.as_deref(), Some("roer"));
        assert_eq!(np.participle, None);
    }

    #[test]
    fn test_missing_data_falls_back_to_query() {
        let response: RaeWordResponse = serde_json::from_str(r#"{"ok":false,"data":null}"#).unwrap();
        let entry = response.into_entry("paradoja");
        assert_eq!(entry.word, "paradoja");
        assert!(entry.senses.is_empty());
        assert_eq!(entry.etymology, None);
        assert_eq!(entry.conjugations, None);

        let response: RaeWordResponse =
            serde_json::from_str(r#"{"data":{"word":"","meanings":null}}"#).unwrap();
        assert_eq!(response.into_entry("epítome").word, "epítome");
    }

    #[test]
    fn test_null_and_non_string_list_items_are_dropped() {
        let meaning: RaeMeaning = serde_json::from_str(
            r#"{"senses":[{"description":"Edificio","synonyms":["hogar",null,3],"examples":"suelto"}]}"#,
        )
        .unwrap();
        let entry = simplify(Some(&meaning), "casa");
        assert_eq!(entry.senses[0].synonyms, vec!["hogar".to_string()]);
        assert_eq!(entry.senses[0].examples, None);
    }

    #[test]
    fn test_unread_upstream_fields_do_not_fail_parsing() {
        let response: RaeWordResponse = serde_json::from_str(
            r#"{"ok":true,"data":{"word":"casa","meanings":[{
                "origin":{"raw":"Del lat. casa.","type":7,"voice":null},
                "senses":[{"meaning_number":"1","category":{"x":1},"usage":[],
                           "antonyms":[null],"description":"Edificio","raw":5}]
            }]}}"#,
        )
        .unwrap();
        let entry = response.into_entry("casa");
        assert_eq!(entry.senses, vec![Sense::new("Edificio")]);
        assert_eq!(entry.etymology.as_deref(), Some("Del lat. casa."));
    }

    #[test]
    fn test_meaning_without_conjugations_has_none() {
        let meaning: RaeMeaning =
            serde_json::from_str(r#"{"senses":[{"description":"Edificio"}],"origin":null}"#).unwrap();
        let entry = simplify(Some(&meaning), "casa");
        assert_eq!(entry.senses, vec![Sense::new("Edificio")]);
        assert_eq!(entry.conjugations, None);
        assert_eq!(entry.etymology, None);
    }
}
