use std::io::Write;

use opendict_core::EntryStore;

use crate::render::{format_timestamp, render_entry};

pub fn show<W: Write>(store: &EntryStore, word: &str, out: &mut W) -> anyhow::Result<()> {
    match store.get_entry(word) {
        Some(entry) => {
            render_entry(out, &entry.data)?;
            writeln!(out)?;
            writeln!(out, "Guardado: {}", format_timestamp(entry.at))?;
        }
        None => {
            let word = word.trim();
            writeln!(out, "«{}» no está guardada. Prueba: opendict search {}", word, word)?;
        }
    }
    Ok(())
}

pub fn history<W: Write>(store: &EntryStore, limit: usize, out: &mut W) -> anyhow::Result<()> {
    let entries = store.list_entries();
    if entries.is_empty() {
        writeln!(out, "Aún no hay palabras guardadas.")?;
        return Ok(());
    }

    for entry in entries.iter().take(limit) {
        writeln!(out, "{}  {}", format_timestamp(entry.at), entry.word)?;
    }
    if entries.len() > limit {
        writeln!(out, "… y {} más", entries.len() - limit)?;
    }
    Ok(())
}

pub fn recents<W: Write>(store: &EntryStore, out: &mut W) -> anyhow::Result<()> {
    let recents = store.recent_searches();
    if recents.is_empty() {
        writeln!(out, "Sin búsquedas recientes.")?;
    }
    for recent in recents {
        writeln!(out, "{}  {}", format_timestamp(recent.at), recent.q)?;
    }
    Ok(())
}

pub fn stats<W: Write>(store: &EntryStore, out: &mut W) -> anyhow::Result<()> {
    let stats = store.get_play_stats();
    let threshold = store.config().quiz_unlock_threshold;

    writeln!(out, "Respondidas: {}", stats.answered)?;
    writeln!(out, "Mejor racha: {}", stats.best_streak)?;
    writeln!(
        out,
        "Palabras jugables: {}/{}",
        store.playable_count(),
        threshold
    )?;
    if !store.is_persistent() {
        writeln!(out, "(sin almacenamiento: los datos no se guardan)")?;
    }
    Ok(())
}
