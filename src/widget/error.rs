//! Widget error types
//!
//! `SelectionError` is returned to callers that address a widget or role
//! that does not exist. `WidgetError` never leaves the controller: both of
//! its variants collapse into the empty chart.

use thiserror::Error;

use super::kind::{AxisRole, WidgetKind};

/// Errors raised when routing a dropdown change
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    /// No widget by this name
    #[error("Unknown widget: {0}")]
    UnknownWidget(String),

    /// No axis role by this name
    #[error("Unknown axis role: {0}")]
    UnknownRole(String),

    /// The role exists but drives a different widget
    #[error("Role '{role}' does not belong to the {widget} widget")]
    ForeignRole { role: AxisRole, widget: WidgetKind },
}

/// Reasons a widget cannot build a chart from its selection
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WidgetError {
    /// A required axis column is unset or blank
    #[error("No column selected for {role}")]
    MissingSelection { role: AxisRole },

    /// The selected name is not a column of the dataset
    #[error("Column '{column}' selected for {role} is not in the dataset")]
    InvalidColumn { role: AxisRole, column: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SelectionError::ForeignRole {
            role: AxisRole::PieColumn,
            widget: WidgetKind::Bar,
        };
        assert_eq!(
            err.to_string(),
            "Role 'pie-column' does not belong to the bar widget"
        );

        let err = WidgetError::MissingSelection {
            role: AxisRole::LineX,
        };
        assert_eq!(err.to_string(), "No column selected for line-x");
    }
}
