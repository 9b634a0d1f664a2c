//! Envdash Widgets
//!
//! Each chart on the page is a widget: one or two dropdowns bound to one
//! chart area.
//!
//! - **kind**: the four widgets and their axis roles
//! - **selection**: the columns currently chosen for a widget
//! - **controller**: the update rule and the stateful controller
//! - **chart**: chart descriptions and the empty/rendered display state
//! - **figure**: encoding for the browser's plotly renderer
//! - **error**: selection and widget errors
//!
//! # Update model
//!
//! ```text
//! dropdown change → SelectionState::update → render(selection, dataset)
//!                                               ├─ ChartOutput::Rendered(spec)
//!                                               └─ ChartOutput::Empty
//! ```
//!
//! Widgets share nothing but the read-only dataset; a change to one never
//! touches another.

mod chart;
mod controller;
mod error;
mod figure;
mod kind;
mod selection;

pub use chart::{ChartOutput, ChartSpec, Series, Slice};
pub use controller::{render, WidgetController};
pub use error::{SelectionError, WidgetError};
pub use kind::{AxisRole, WidgetKind};
pub use selection::SelectionState;
