//! API request and response types

use serde::{Deserialize, Serialize};

pub use opendict_core::DictEntry;

/// Query string of `GET /api/define`
#[derive(Debug, Deserialize)]
pub struct DefineQuery {
    pub q: Option<String>,
}

/// Successful definition lookup
#[derive(Debug, Serialize, Deserialize)]
pub struct DefineResponse {
    pub ok: bool,
    pub word: String,
    pub data: DictEntry,
}
