//! Per-widget selection state
//!
//! Holds the column name chosen for each of a widget's axis roles. Names are
//! kept as plain strings: the page only ever offers schema columns, and a
//! name outside the schema is dealt with when the chart is built.

use std::collections::BTreeMap;

use super::error::SelectionError;
use super::kind::{AxisRole, WidgetKind};
use crate::dataset::Dataset;

/// Current column choice per role for one widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    widget: WidgetKind,
    columns: BTreeMap<AxisRole, Option<String>>,
}

impl SelectionState {
    /// A selection with every role unset
    pub fn new(widget: WidgetKind) -> Self {
        Self {
            widget,
            columns: widget.roles().iter().map(|r| (*r, None)).collect(),
        }
    }

    /// Seed the selection from defaults
    ///
    /// Never fails; defaults naming a role of another widget are skipped.
    pub fn initialize(
        widget: WidgetKind,
        defaults: impl IntoIterator<Item = (AxisRole, Option<String>)>,
    ) -> Self {
        let mut state = Self::new(widget);
        for (role, column) in defaults {
            if let Err(e) = state.update(role, column) {
                tracing::warn!(widget = %widget, error = %e, "Ignoring default selection");
            }
        }
        state
    }

    /// The page-load selection for a widget
    pub fn defaults(widget: WidgetKind, dataset: &Dataset) -> Self {
        Self::initialize(widget, widget.default_columns(dataset))
    }

    /// Replace the column for one role
    pub fn update(&mut self, role: AxisRole, column: Option<String>) -> Result<(), SelectionError> {
        if role.widget() != self.widget {
            return Err(SelectionError::ForeignRole {
                role,
                widget: self.widget,
            });
        }
        self.columns.insert(role, column);
        Ok(())
    }

    /// Selected column for a role; blank names count as unset
    pub fn get(&self, role: AxisRole) -> Option<&str> {
        self.columns
            .get(&role)
            .and_then(|c| c.as_deref())
            .filter(|c| !c.trim().is_empty())
    }

    pub fn widget(&self) -> WidgetKind {
        self.widget
    }

    /// Roles with their raw selections, in role order
    pub fn iter(&self) -> impl Iterator<Item = (AxisRole, Option<&str>)> {
        self.columns.iter().map(|(r, c)| (*r, c.as_deref()))
    }
}
