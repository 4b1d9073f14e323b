use opendict_core::{EntryStore, StoreConfig};

use crate::api::DefineClient;
use crate::config::ClientConfig;
use crate::db::SqliteStorage;

pub struct AppState {
    pub store: EntryStore,
    pub client: DefineClient,
}

impl AppState {
    pub fn from_config(config: &ClientConfig) -> anyhow::Result<Self> {
        let store = match SqliteStorage::open(&config.db_path) {
            Ok(storage) => {
                tracing::debug!("using database at {}", config.db_path.display());
                EntryStore::new(storage, StoreConfig::default())
            }
            Err(e) => {
                tracing::warn!(
                    "cannot open {}: {}, nothing will be saved",
                    config.db_path.display(),
                    e
                );
                EntryStore::detached()
            }
        };
        let client = DefineClient::new(&config.api_url, config.request_timeout)?;

        Ok(Self { store, client })
    }
}
