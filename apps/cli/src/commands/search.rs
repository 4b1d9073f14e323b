use std::io::Write;

use opendict_core::EntryStore;

use crate::api::DefineClient;
use crate::render::render_entry;

/// Look up `query`, showing any cached copy first and caching the fresh result.
///
/// A failed lookup is only reported as an error when there was nothing cached
/// to show.
pub async fn search<W: Write>(
    store: &EntryStore,
    client: &DefineClient,
    query: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    let query = query.trim();
    if query.is_empty() {
        anyhow::bail!("Escribe una palabra");
    }

    store.add_recent_search(query);

    let cached = store.get_entry(query);
    if let Some(entry) = &cached {
        tracing::debug!("showing cached entry for {}", entry.word);
        render_entry(out, &entry.data)?;
    }

    match client.define(query).await {
        Ok(data) => {
            let unchanged = cached.as_ref().is_some_and(|c| c.data == data);
            if !unchanged {
                if cached.is_some() {
                    writeln!(out)?;
                    writeln!(out, "(actualizado)")?;
                }
                render_entry(out, &data)?;
            }
            store.upsert_entry(query, data);
            Ok(())
        }
        Err(e) if cached.is_some() => {
            tracing::warn!("lookup failed for {}, keeping cached copy: {}", query, e);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
