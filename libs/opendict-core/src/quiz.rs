//! Multiple-choice questions built from cached entries.
//!
//! A question shows one cached word and asks for its definition. The correct
//! option is one of the word's first few playable senses; distractors are
//! sense texts of other cached words. All option texts are distinct.

use crate::types::{Entry, Question, QuizOption};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use std::collections::HashSet;

/// Options per question unless the caller asks otherwise.
pub const DEFAULT_OPTION_COUNT: usize = 4;

/// Only this many leading playable senses are sampled per entry.
pub const SENSE_SAMPLE_WINDOW: usize = 3;

/// Upper bound on distractor draws for a single question.
pub const MAX_DRAW_ATTEMPTS: usize = 1000;

/// Pick one of the first [`SENSE_SAMPLE_WINDOW`] playable sense texts of `entry`.
pub fn pick_sense_text<'a, R: Rng + ?Sized>(entry: &'a Entry, rng: &mut R) -> Option<&'a str> {
    let texts = entry.data.playable_texts();
    let window = texts.len().min(SENSE_SAMPLE_WINDOW);
    if window == 0 {
        return None;
    }
    Some(texts[rng.random_range(0..window)])
}

/// Build a question with `option_count` options from `entries`.
///
/// Returns `None` when fewer than `option_count` entries have a playable
/// sense, or when the data cannot supply enough distinct option texts.
pub fn build_question<R: Rng + ?Sized>(
    entries: &[Entry],
    option_count: usize,
    rng: &mut R,
) -> Option<Question> {
    if option_count == 0 {
        return None;
    }

    let usable: Vec<&Entry> = entries
        .iter()
        .filter(|e| e.data.has_playable_sense())
        .collect();
    if usable.len() < option_count {
        return None;
    }

    let target = *usable.choose(rng)?;
    let correct_text = pick_sense_text(target, rng)?;

    let pool: Vec<&Entry> = usable
        .iter()
        .copied()
        .filter(|e| e.word != target.word)
        .collect();

    // Every text a distractor draw could produce; stops the loop early once used up.
    let candidates: HashSet<&str> = pool
        .iter()
        .flat_map(|e| {
            e.data
                .playable_texts()
                .into_iter()
                .take(SENSE_SAMPLE_WINDOW)
        })
        .filter(|t| *t != correct_text)
        .collect();

    let mut options = vec![QuizOption {
        text: correct_text.to_string(),
        correct: true,
    }];
    let mut seen: HashSet<&str> = HashSet::from([correct_text]);

    let mut attempts = 0;
    while options.len() < option_count && seen.len() <= candidates.len() {
        if attempts == MAX_DRAW_ATTEMPTS {
            tracing::debug!(
                "gave up on distractors for {} after {} draws",
                target.word,
                attempts
            );
            break;
        }
        attempts += 1;

        let Some(&candidate) = pool.choose(rng) else {
            break;
        };
        if let Some(text) = pick_sense_text(candidate, rng) {
            if seen.insert(text) {
                options.push(QuizOption {
                    text: text.to_string(),
                    correct: false,
                });
            }
        }
    }

    if options.len() < option_count.min(usable.len()) {
        return None;
    }

    options.shuffle(rng);
    Some(Question {
        word: target.word.clone(),
        options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DictEntry, Sense};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn entry(word: &str, senses: &[&str]) -> Entry {
        Entry {
            word: word.to_string(),
            at: 0,
            data: DictEntry {
                word: word.to_string(),
                senses: senses.iter().map(|s| Sense::new(*s)).collect(),
                ..Default::default()
            },
        }
    }

    fn numbered_entries(n: usize) -> Vec<Entry> {
        (0..n)
            .map(|i| entry(&format!("word{i}"), &[format!("definition {i}").as_str()]))
            .collect()
    }

    fn assert_well_formed(question: &Question, option_count: usize) {
        assert_eq!(question.options.len(), option_count);
        assert_eq!(question.options.iter().filter(|o| o.correct).count(), 1);
        let texts: HashSet<&str> = question.options.iter().map(|o| o.text.as_str()).collect();
        assert_eq!(texts.len(), option_count);
    }

    #[test]
    fn test_ten_words_always_produce_a_question() {
        let entries = numbered_entries(10);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let question = build_question(&entries, DEFAULT_OPTION_COUNT, &mut rng)
                .expect("enough data for a question");
            assert_well_formed(&question, DEFAULT_OPTION_COUNT);
        }
    }

    #[test]
    fn test_correct_option_belongs_to_the_target_word() {
        let entries = numbered_entries(6);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..50 {
            let question = build_question(&entries, DEFAULT_OPTION_COUNT, &mut rng).unwrap();
            let index = question.correct_index().unwrap();
            let suffix = question.word.trim_start_matches("word");
            assert_eq!(question.options[index].text, format!("definition {suffix}"));
        }
    }

    #[test]
    fn test_too_few_playable_entries_gives_none() {
        let entries = numbered_entries(3);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(build_question(&entries, DEFAULT_OPTION_COUNT, &mut rng).is_none());
    }

    #[test]
    fn test_note_senses_do_not_make_an_entry_usable() {
        let mut entries = numbered_entries(3);
        entries.push(entry("nota", &[":see also X"]));
        entries.push(entry("vacia", &["   "]));
        let mut rng = StdRng::seed_from_u64(2);
        assert!(build_question(&entries, DEFAULT_OPTION_COUNT, &mut rng).is_none());
    }

    #[test]
    fn test_duplicate_texts_cannot_fill_a_question() {
        let entries: Vec<Entry> = (0..6)
            .map(|i| entry(&format!("w{i}"), &["misma definición"]))
            .collect();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(build_question(&entries, DEFAULT_OPTION_COUNT, &mut rng).is_none());
    }

    #[test]
    fn test_partially_duplicated_pool_still_yields_distinct_options() {
        let entries = vec![
            entry("a", &["uno"]),
            entry("b", &["uno"]),
            entry("c", &["dos"]),
            entry("d", &["tres"]),
            entry("e", &["cuatro"]),
        ];
        let mut rng = StdRng::seed_from_u64(4);

        for _ in 0..50 {
            if let Some(question) = build_question(&entries, DEFAULT_OPTION_COUNT, &mut rng) {
                assert_well_formed(&question, DEFAULT_OPTION_COUNT);
            }
        }
    }

    #[test]
    fn test_only_leading_senses_are_sampled() {
        let target = entry(
            "roer",
            &[":nota", "primera", "segunda", "tercera", "cuarta", "quinta"],
        );
        let mut rng = StdRng::seed_from_u64(5);

        let mut picked = HashSet::new();
        for _ in 0..200 {
            picked.insert(pick_sense_text(&target, &mut rng).unwrap());
        }
        assert_eq!(picked, HashSet::from(["primera", "segunda", "tercera"]));
    }

    #[test]
    fn test_sense_text_is_trimmed() {
        let target = entry("casa", &["  Edificio para habitar  "]);
        let mut rng = StdRng::seed_from_u64(6);
        assert_eq!(pick_sense_text(&target, &mut rng), Some("Edificio para habitar"));
        assert_eq!(pick_sense_text(&entry("nada", &[":x"]), &mut rng), None);
    }

    #[test]
    fn test_option_count_is_configurable() {
        let entries = numbered_entries(3);
        let mut rng = StdRng::seed_from_u64(8);
        let question = build_question(&entries, 2, &mut rng).unwrap();
        assert_well_formed(&question, 2);
        assert!(build_question(&entries, 0, &mut rng).is_none());
    }

    #[test]
    fn test_correct_option_position_varies() {
        let entries = numbered_entries(10);
        let mut rng = StdRng::seed_from_u64(9);

        let positions: HashSet<usize> = (0..200)
            .filter_map(|_| build_question(&entries, DEFAULT_OPTION_COUNT, &mut rng))
            .filter_map(|q| q.correct_index())
            .collect();
        assert_eq!(positions.len(), DEFAULT_OPTION_COUNT);
    }
}
