//! Definition lookup endpoint

use std::time::Instant;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/define?q=
pub async fn define(
    State(state): State<AppState>,
    Query(query): Query<DefineQuery>,
) -> Result<Json<DefineResponse>> {
    let q = query.q.as_deref().unwrap_or_default().trim();
    if q.is_empty() {
        return Err(ApiError::BadRequest("Missing q".to_string()));
    }

    let started = Instant::now();
    let entry = state.rae.define(q).await.map_err(|e| {
        tracing::error!("[RAE] lookup failed for {}: {}", q, e);
        ApiError::from(e)
    })?;

    tracing::info!(
        word = %entry.word,
        senses = entry.senses.len(),
        has_etymology = entry.etymology.is_some(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "[RAE] dto"
    );

    Ok(Json(DefineResponse {
        ok: true,
        word: entry.word.clone(),
        data: entry,
    }))
}
