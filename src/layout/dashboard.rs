//! The four widgets of one page session

use std::sync::Arc;

use crate::dataset::Dataset;
use crate::widget::{AxisRole, ChartOutput, SelectionError, WidgetController, WidgetKind};

/// Bar, line, scatter and pie controllers over a shared dataset
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
    widgets: Vec<WidgetController>,
}

impl Dashboard {
    /// Every widget with its default selection
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let widgets = WidgetKind::ALL
            .into_iter()
            .map(|kind| WidgetController::new(kind, Arc::clone(&dataset)))
            .collect();

        Self { dataset, widgets }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn widget(&self, kind: WidgetKind) -> &WidgetController {
        &self.widgets[slot(kind)]
    }

    /// Widgets in page order
    pub fn widgets(&self) -> impl Iterator<Item = &WidgetController> {
        self.widgets.iter()
    }

    /// Route one dropdown change to its widget; other widgets are untouched
    pub fn update(
        &mut self,
        kind: WidgetKind,
        role: AxisRole,
        column: Option<String>,
    ) -> Result<&ChartOutput, SelectionError> {
        self.widgets[slot(kind)].on_change(role, column)
    }
}

fn slot(kind: WidgetKind) -> usize {
    match kind {
        WidgetKind::Bar => 0,
        WidgetKind::Line => 1,
        WidgetKind::Scatter => 2,
        WidgetKind::Pie => 3,
    }
}
