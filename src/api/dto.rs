//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use std::collections::{BTreeMap, HashMap};

use crate::dataset::ColumnKind;
use crate::widget::{AxisRole, ChartOutput, WidgetController, WidgetKind};

// ============================================
// COLUMN DTOs
// ============================================

/// Dataset schema response
#[derive(Debug, Serialize)]
pub struct ColumnsResponse {
    /// Columns in schema order (the dropdown choices)
    pub columns: Vec<ColumnDto>,
    /// Number of rows in the dataset
    pub rows: usize,
}

/// A single schema column
#[derive(Debug, Serialize)]
pub struct ColumnDto {
    /// Column name
    pub name: String,
    /// numeric or categorical
    pub kind: ColumnKind,
}

// ============================================
// WIDGET DTOs
// ============================================

/// Widget update request
///
/// Carries the widget's whole selection. Roles left out are unset.
#[derive(Debug, Deserialize)]
pub struct UpdateWidgetRequest {
    /// Column per axis role, keyed by role name (e.g. "line-x")
    #[serde(default)]
    pub selection: HashMap<String, Option<String>>,
}

/// Chart payload for one widget
#[derive(Debug, Serialize)]
pub struct FigureResponse {
    /// Widget name
    pub widget: WidgetKind,
    /// "empty" or "rendered"
    pub state: String,
    /// Plotly figure, `{}` when empty
    pub figure: Json,
}

impl FigureResponse {
    pub fn new(widget: WidgetKind, output: &ChartOutput) -> Self {
        Self {
            widget,
            state: output.state_name().to_string(),
            figure: output.to_figure(),
        }
    }
}

/// Widget description with its default selection
#[derive(Debug, Serialize)]
pub struct WidgetResponse {
    /// Widget name
    pub widget: WidgetKind,
    /// Axis roles driving the widget
    pub roles: Vec<AxisRole>,
    /// Default column per role
    pub selection: BTreeMap<AxisRole, Option<String>>,
    /// Initial state: "empty" or "rendered"
    pub state: String,
    /// Initial figure
    pub figure: Json,
}

impl From<&WidgetController> for WidgetResponse {
    fn from(controller: &WidgetController) -> Self {
        let output = controller.output();
        Self {
            widget: controller.kind(),
            roles: controller.kind().roles().to_vec(),
            selection: controller
                .selection()
                .iter()
                .map(|(role, column)| (role, column.map(str::to_string)))
                .collect(),
            state: output.state_name().to_string(),
            figure: output.to_figure(),
        }
    }
}

/// List widgets response
#[derive(Debug, Serialize)]
pub struct WidgetListResponse {
    /// Widgets in page order
    pub widgets: Vec<WidgetResponse>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, unhealthy
    pub status: String,
    /// Dataset status
    pub dataset: String,
    /// Open page sessions
    pub sessions: usize,
    /// Page sessions opened since startup
    pub sessions_opened: u64,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
