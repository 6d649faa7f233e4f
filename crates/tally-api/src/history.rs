//! Search history endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Json, response::IntoResponse};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use tally_core::models::{HistoryEntry, MAX_TEXT_LEN, NewHistoryEntry, format_timestamp};

use crate::AppState;
use crate::error::ApiError;
use crate::validate::{require_fields, string_field};

const REQUIRED_FIELDS: &[&str] = &[
    "userId",
    "query",
    "parameters",
    "timestamp",
    "tags",
    "notes",
    "responseData",
];

#[derive(Serialize)]
pub struct CreateHistoryResponse {
    pub id: i64,
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
}

/// `POST /api/history` — record a search.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    require_fields(&body, REQUIRED_FIELDS)?;

    // `result` lives one level down, checked separately from the top-level set
    if body["responseData"].get("results").is_none() {
        return Err(ApiError::Validation(
            "Missing required field: results".to_string(),
        ));
    }

    let user_id = body["userId"]
        .as_str()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ApiError::Format("Invalid UUID format for userId".to_string()))?;

    let query = string_field(&body, "query", Some(MAX_TEXT_LEN))?;
    let notes = string_field(&body, "notes", Some(MAX_TEXT_LEN))?;

    let raw_timestamp = string_field(&body, "timestamp", None)?;
    let timestamp = dateparser::parse(&raw_timestamp)
        .map_err(|e| ApiError::Format(format!("Invalid timestamp format: {e}")))?;

    let entry = NewHistoryEntry {
        user_id,
        query,
        timestamp,
        result: body["responseData"]["results"].clone(),
        parameters: body["parameters"].clone(),
        notes,
        tags: body["tags"].clone(),
    };

    let id = state.db.insert_history(&entry).await?;
    log::info!("recorded search history entry {id} for user {user_id}");

    Ok((
        StatusCode::CREATED,
        Json(CreateHistoryResponse {
            id,
            status: "success",
            message: "Search history recorded successfully",
            timestamp: format_timestamp(&Utc::now()),
        }),
    ))
}

/// `GET /api/history/user/{user_id}` — all entries for a user, newest first.
pub async fn list_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<HistoryEntry>>, ApiError> {
    let entries = state.db.list_history_for_user(user_id).await?;
    Ok(Json(entries))
}

/// `GET /api/history/entry/{id}` — lookup is global by id, not user-scoped.
pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<HistoryEntry>, ApiError> {
    match state.db.get_history_entry(id).await? {
        Some(entry) => Ok(Json(entry)),
        None => Err(ApiError::NotFound(format!("No history entry with id {id}"))),
    }
}

/// `DELETE /api/history/entry/{id}` — 204 on success.
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.db.delete_history_entry(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
