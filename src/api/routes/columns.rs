//! Column Routes
//!
//! - GET /api/v1/columns - Dataset schema, the dropdown choices

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{ColumnDto, ColumnsResponse};
use crate::api::state::AppState;

/// GET /api/v1/columns
pub async fn list_columns(State(state): State<Arc<AppState>>) -> Json<ColumnsResponse> {
    let columns = state
        .dataset
        .columns()
        .iter()
        .map(|c| ColumnDto {
            name: c.name.clone(),
            kind: c.kind,
        })
        .collect();

    Json(ColumnsResponse {
        columns,
        rows: state.dataset.row_count(),
    })
}
