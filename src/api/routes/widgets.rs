//! Widget Routes
//!
//! Stateless counterpart of the page session: the request carries a
//! widget's whole selection and gets that widget's chart back.
//!
//! - GET /api/v1/widgets - Widgets with default selections and figures
//! - POST /api/v1/widgets/:widget - Chart for a selection

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{FigureResponse, UpdateWidgetRequest, WidgetListResponse, WidgetResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::layout::Dashboard;
use crate::widget::{render, AxisRole, SelectionState, WidgetKind};

/// GET /api/v1/widgets
pub async fn list_widgets(State(state): State<Arc<AppState>>) -> Json<WidgetListResponse> {
    let dashboard = Dashboard::new(Arc::clone(&state.dataset));

    Json(WidgetListResponse {
        widgets: dashboard.widgets().map(WidgetResponse::from).collect(),
    })
}

/// POST /api/v1/widgets/:widget
///
/// Unknown widget: 404. Role of another widget, unknown role or a body
/// that is not a selection: 400. Incomplete selection or unknown column:
/// 200 with the empty figure.
pub async fn update_widget(
    State(state): State<Arc<AppState>>,
    Path(widget): Path<String>,
    payload: Result<Json<UpdateWidgetRequest>, JsonRejection>,
) -> ApiResult<Json<FigureResponse>> {
    let kind: WidgetKind = widget.parse()?;
    let Json(req) = payload?;

    let mut selection = SelectionState::new(kind);
    for (role, column) in req.selection {
        let role: AxisRole = role.parse()?;
        selection.update(role, column)?;
    }

    let output = render(&selection, &state.dataset);

    tracing::debug!(widget = %kind, state = output.state_name(), "Widget recomputed");

    Ok(Json(FigureResponse::new(kind, &output)))
}
