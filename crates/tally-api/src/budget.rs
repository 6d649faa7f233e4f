//! Budget blob endpoints. Contents are base64 text on the wire, raw bytes in
//! the store.

use axum::Json;
use axum::extract::{Path, State};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use serde::Serialize;
use serde_json::Value;

use crate::AppState;
use crate::error::ApiError;
use crate::validate::{id_field, require_fields, string_field};

#[derive(Serialize)]
pub struct BudgetIdsResponse {
    #[serde(rename = "budgetIDs")]
    pub budget_ids: Vec<i64>,
}

#[derive(Serialize)]
pub struct CreateBudgetResponse {
    #[serde(rename = "newBudgetID")]
    pub new_budget_id: i64,
}

#[derive(Serialize)]
pub struct BudgetContentsResponse {
    #[serde(rename = "budgetContents")]
    pub budget_contents: String,
}

#[derive(Serialize)]
pub struct SwapBudgetResponse {
    #[serde(rename = "newBudgetContents")]
    pub new_budget_contents: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn decode_contents(encoded: &str, field: &str) -> Result<Vec<u8>, ApiError> {
    B64.decode(encoded)
        .map_err(|e| ApiError::Format(format!("Invalid base64 in {field}: {e}")))
}

/// `GET /api/get-all-budget-ids`
pub async fn list_ids(State(state): State<AppState>) -> Result<Json<BudgetIdsResponse>, ApiError> {
    let budget_ids = state.db.list_budget_ids().await?;
    Ok(Json(BudgetIdsResponse { budget_ids }))
}

/// `POST /api/create-budget`
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<CreateBudgetResponse>, ApiError> {
    require_fields(&body, &["budgetContents"])?;

    let encoded = string_field(&body, "budgetContents", None)?;
    if encoded.is_empty() {
        return Err(ApiError::Validation(
            "Field must not be empty: budgetContents".to_string(),
        ));
    }

    let contents = decode_contents(&encoded, "budgetContents")?;
    let new_budget_id = state.db.insert_budget(&contents).await?;
    log::info!("created budget {new_budget_id} ({} bytes)", contents.len());

    Ok(Json(CreateBudgetResponse { new_budget_id }))
}

/// `POST /api/save-budget` — full overwrite of an existing record.
pub async fn save(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    require_fields(&body, &["budgetID", "budgetContents"])?;

    let id = id_field(&body, "budgetID")?;
    let encoded = string_field(&body, "budgetContents", None)?;
    let contents = decode_contents(&encoded, "budgetContents")?;

    state.db.save_budget(id, &contents).await?;
    Ok(Json(serde_json::json!({})))
}

/// `POST /api/swap-budget`
///
/// Not an atomic two-way exchange: the old record is overwritten with the
/// caller-supplied contents, then the new record's stored contents are read
/// back and returned. A concurrent save between the write and the read can be
/// observed by the caller; the store layer does not guard against it.
pub async fn swap(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SwapBudgetResponse>, ApiError> {
    require_fields(&body, &["oldBudgetID", "newBudgetID", "oldBudgetContents"])?;

    let old_id = id_field(&body, "oldBudgetID")?;
    let new_id = id_field(&body, "newBudgetID")?;
    let encoded = string_field(&body, "oldBudgetContents", None)?;
    let old_contents = decode_contents(&encoded, "oldBudgetContents")?;

    // Old id checked first, then new, before anything is written
    if state.db.get_budget(old_id).await?.is_none() {
        return Err(ApiError::NotFound(format!("No budget with id {old_id}")));
    }
    if state.db.get_budget(new_id).await?.is_none() {
        return Err(ApiError::NotFound(format!("No budget with id {new_id}")));
    }

    state.db.save_budget(old_id, &old_contents).await?;

    let new_record = state
        .db
        .get_budget(new_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("No budget with id {new_id}")))?;

    Ok(Json(SwapBudgetResponse {
        new_budget_contents: B64.encode(new_record.contents),
    }))
}

/// `GET /api/load-budget/{id}`
pub async fn load(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BudgetContentsResponse>, ApiError> {
    match state.db.get_budget(id).await? {
        Some(record) => Ok(Json(BudgetContentsResponse {
            budget_contents: B64.encode(record.contents),
        })),
        None => Err(ApiError::NotFound(format!("No budget with id {id}"))),
    }
}

/// `DELETE /api/delete-budget/{id}`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    match state.db.delete_budget(id).await {
        Ok(()) => Ok(Json(MessageResponse {
            message: format!("Budget {id} deleted successfully"),
        })),
        Err(tally_core::Error::NotFound(_)) => {
            Err(ApiError::NotFound(format!("No budget with id {id}")))
        }
        Err(e) => Err(e.into()),
    }
}
