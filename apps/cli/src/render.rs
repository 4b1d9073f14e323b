//! Plain-text rendering of cached entries.

use std::io::{self, Write};

use chrono::{Local, TimeZone};
use opendict_core::{ordered_persons, Conjugations, DictEntry, Person, PersonTable, Sense};

const MAX_SYNONYMS: usize = 8;

pub fn format_timestamp(at: i64) -> String {
    Local
        .timestamp_millis_opt(at)
        .single()
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn render_sense<W: Write>(out: &mut W, number: usize, sense: &Sense) -> io::Result<()> {
    writeln!(out, "{}. {}", number, sense.text.trim())?;

    let synonyms: Vec<&str> = sense
        .synonyms
        .iter()
        .take(MAX_SYNONYMS)
        .map(String::as_str)
        .collect();
    if !synonyms.is_empty() {
        writeln!(out, "   Sinónimos: {}", synonyms.join(", "))?;
    }

    if let Some(example) = sense.examples.as_ref().and_then(|e| e.first()) {
        writeln!(out, "   Ej.: {}", example)?;
    }
    Ok(())
}

fn render_table<W: Write>(out: &mut W, title: &str, table: Option<&PersonTable>) -> io::Result<()> {
    let Some(table) = table else {
        return Ok(());
    };
    let mut rows: Vec<(String, &str)> = ordered_persons(table)
        .into_iter()
        .map(|(person, form)| (person.label().to_string(), form))
        .collect();
    // Keys outside the known persons go last, in key order.
    rows.extend(
        table
            .iter()
            .filter(|(key, form)| Person::from_key(key).is_none() && !form.is_empty())
            .map(|(key, form)| (key.replace('_', " "), form.as_str())),
    );
    if rows.is_empty() {
        return Ok(());
    }

    writeln!(out, "  {}", title)?;
    for (label, form) in rows {
        writeln!(out, "    {:<12} {}", label, form)?;
    }
    Ok(())
}

fn render_conjugations<W: Write>(out: &mut W, cj: &Conjugations) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Conjugaciones (muestra)")?;

    if let Some(np) = &cj.non_personal {
        for (label, form) in np.labelled() {
            writeln!(out, "  {}: {}", label, form)?;
        }
    }

    let indicative = cj.indicative.as_ref();
    render_table(
        out,
        "Indicativo — Presente",
        indicative.and_then(|t| t.present.as_ref()),
    )?;
    render_table(
        out,
        "Indicativo — Pretérito",
        indicative.and_then(|t| t.preterite.as_ref()),
    )?;
    render_table(
        out,
        "Subjuntivo — Presente",
        cj.subjunctive.as_ref().and_then(|t| t.present.as_ref()),
    )?;
    render_table(out, "Imperativo", cj.imperative.as_ref())
}

/// Write the full entry view: word, senses, origin and conjugation sample.
pub fn render_entry<W: Write>(out: &mut W, entry: &DictEntry) -> io::Result<()> {
    writeln!(out, "{}", entry.word)?;
    writeln!(out)?;

    if entry.senses.is_empty() {
        writeln!(out, "Sin definiciones disponibles.")?;
    }
    for (i, sense) in entry.senses.iter().enumerate() {
        render_sense(out, i + 1, sense)?;
    }

    if let Some(etymology) = &entry.etymology {
        writeln!(out)?;
        writeln!(out, "Origen: {}", etymology)?;
    }

    if let Some(cj) = &entry.conjugations {
        render_conjugations(out, cj)?;
    }
    Ok(())
}
