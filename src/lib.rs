//! # Envdash
//!
//! Environmental Dashboard - a single-page interactive dashboard that plots
//! a fixed table of environmental statistics as four chart widgets.
//!
//! ## Modules
//!
//! - [`dataset`]: The immutable in-memory table
//! - [`widget`]: Selections, widget controllers and chart descriptions
//! - [`layout`]: The four-widget dashboard and the HTML page shell
//! - [`session`]: Per-page WebSocket sessions
//! - [`api`]: HTTP server with Axum
//!
//! ## Quick Start
//!
//! ```rust
//! use envdash::dataset::{Dataset, CO2_EMISSIONS};
//! use envdash::layout::Dashboard;
//! use envdash::widget::{AxisRole, WidgetKind};
//! use std::sync::Arc;
//!
//! let dataset = Arc::new(Dataset::environmental().unwrap());
//! let mut dashboard = Dashboard::new(dataset);
//!
//! let output = dashboard
//!     .update(WidgetKind::Line, AxisRole::LineY, Some(CO2_EMISSIONS.to_string()))
//!     .unwrap();
//!
//! assert_eq!(
//!     output.spec().unwrap().title,
//!     "Line Plot of CO2 Emissions (Metric Tons) vs Year"
//! );
//! ```

pub mod api;
pub mod config;
pub mod dataset;
pub mod layout;
pub mod logging;
pub mod session;
pub mod widget;

// Re-export top-level types for convenience
pub use dataset::{Column, ColumnKind, Dataset, DatasetError, DatasetResult, Value};

pub use widget::{
    render, AxisRole, ChartOutput, ChartSpec, SelectionError, SelectionState, Series, Slice,
    WidgetController, WidgetError, WidgetKind,
};

pub use layout::{Dashboard, Page};

pub use session::{ClientMessage, ServerMessage, SessionRegistry};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig, ServerConfig};
