//! Core types for the dictionary cache and quiz.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Prefix the upstream dictionary uses to mark non-definitional notes.
pub const NOTE_PREFIX: char = ':';

/// Person-keyed conjugation table (`singular_first_person` -> `hablo`).
pub type PersonTable = BTreeMap<String, String>;

/// Treat an explicit JSON `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Whether a definition text can be used as a quiz option.
pub fn is_playable_text(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && !trimmed.starts_with(NOTE_PREFIX)
}

/// One definition of a word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub synonyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
}

impl Sense {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn is_playable(&self) -> bool {
        is_playable_text(&self.text)
    }
}

/// Non-personal verb forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonPersonalForms {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infinitive: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gerund: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compound_infinitive: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compound_gerund: Option<String>,
}

impl NonPersonalForms {
    /// Present forms as `(label, form)` pairs in display order.
    pub fn labelled(&self) -> Vec<(&'static str, &str)> {
        [
            ("Infinitivo", &self.infinitive),
            ("Participio", &self.participle),
            ("Gerundio", &self.gerund),
            ("Infinitivo compuesto", &self.compound_infinitive),
            ("Gerundio compuesto", &self.compound_gerund),
        ]
        .into_iter()
        .filter_map(|(label, form)| form.as_deref().map(|f| (label, f)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.labelled().is_empty()
    }
}

/// Tenses kept for a mood.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenses {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub present: Option<PersonTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preterite: Option<PersonTable>,
}

/// Sample of a verb's conjugations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conjugations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_personal: Option<NonPersonalForms>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicative: Option<Tenses>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjunctive: Option<Tenses>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imperative: Option<PersonTable>,
}

/// Simplified dictionary payload cached per word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub word: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub senses: Vec<Sense>,
    #[serde(default)]
    pub etymology: Option<String>,
    #[serde(default)]
    pub conjugations: Option<Conjugations>,
}

impl DictEntry {
    pub fn has_playable_sense(&self) -> bool {
        self.senses.iter().any(Sense::is_playable)
    }

    /// Playable sense texts, trimmed, in upstream order.
    pub fn playable_texts(&self) -> Vec<&str> {
        self.senses
            .iter()
            .filter(|s| s.is_playable())
            .map(|s| s.text.trim())
            .collect()
    }
}

/// One cached dictionary lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Normalized (trimmed, lower-cased) lookup key.
    pub word: String,
    /// Unix milliseconds of the last write.
    pub at: i64,
    #[serde(default)]
    pub data: DictEntry,
}

/// A submitted search query, kept in its original case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSearch {
    pub q: String,
    pub at: i64,
}

/// Aggregate quiz statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub answered: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub best_streak: u32,
}

/// One answer choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub text: String,
    pub correct: bool,
}

/// A multiple-choice question about one cached word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub word: String,
    pub options: Vec<QuizOption>,
}

impl Question {
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o.correct)
    }

    pub fn is_correct(&self, index: usize) -> bool {
        self.options.get(index).is_some_and(|o| o.correct)
    }
}

/// Grammatical person, in conjugation table display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Person {
    SingularFirst,
    SingularSecond,
    SingularFormalSecond,
    SingularThird,
    PluralFirst,
    PluralSecond,
    PluralFormalSecond,
    PluralThird,
}

impl Person {
    pub const ALL: [Person; 8] = [
        Self::SingularFirst,
        Self::SingularSecond,
        Self::SingularFormalSecond,
        Self::SingularThird,
        Self::PluralFirst,
        Self::PluralSecond,
        Self::PluralFormalSecond,
        Self::PluralThird,
    ];

    /// Key used by the upstream tables.
    pub fn key(self) -> &'static str {
        match self {
            Self::SingularFirst => "singular_first_person",
            Self::SingularSecond => "singular_second_person",
            Self::SingularFormalSecond => "singular_formal_second_person",
            Self::SingularThird => "singular_third_person",
            Self::PluralFirst => "plural_first_person",
            Self::PluralSecond => "plural_second_person",
            Self::PluralFormalSecond => "plural_formal_second_person",
            Self::PluralThird => "plural_third_person",
        }
    }

    /// Pronoun shown next to the form.
    pub fn label(self) -> &'static str {
        match self {
            Self::SingularFirst => "yo",
            Self::SingularSecond => "tú",
            Self::SingularFormalSecond => "usted",
            Self::SingularThird => "él/ella",
            Self::PluralFirst => "nosotros",
            Self::PluralSecond => "vosotros",
            Self::PluralFormalSecond => "ustedes",
            Self::PluralThird => "ellos/ellas",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

/// Rows of a person table in display order. Unknown keys and blank forms are skipped.
pub fn ordered_persons(table: &PersonTable) -> Vec<(Person, &str)> {
    Person::ALL
        .into_iter()
        .filter_map(|p| {
            table
                .get(p.key())
                .map(String::as_str)
                .filter(|form| !form.is_empty())
                .map(|form| (p, form))
        })
        .collect()
}
