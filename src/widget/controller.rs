//! Widget controllers
//!
//! `render` is the whole update rule: a pure function from a selection and
//! the dataset to a chart output. `WidgetController` wraps it with the
//! widget's selection and the output currently on display.

use std::sync::Arc;

use super::chart::{ChartOutput, ChartSpec, Series, Slice};
use super::error::{SelectionError, WidgetError};
use super::kind::{AxisRole, WidgetKind};
use super::selection::SelectionState;
use crate::dataset::{Column, Dataset, Value};

/// Build the chart for a selection, or the empty chart if it is incomplete
///
/// Missing and unknown columns never propagate: both yield `ChartOutput::Empty`.
pub fn render(selection: &SelectionState, dataset: &Dataset) -> ChartOutput {
    match build(selection, dataset) {
        Ok(spec) => ChartOutput::Rendered(spec),
        Err(e @ WidgetError::MissingSelection { .. }) => {
            tracing::debug!(widget = %selection.widget(), reason = %e, "Rendering empty chart");
            ChartOutput::Empty
        }
        Err(e @ WidgetError::InvalidColumn { .. }) => {
            tracing::warn!(widget = %selection.widget(), reason = %e, "Rendering empty chart");
            ChartOutput::Empty
        }
    }
}

fn build(selection: &SelectionState, dataset: &Dataset) -> Result<ChartSpec, WidgetError> {
    let kind = selection.widget();
    match kind {
        WidgetKind::Bar => {
            let column = resolve(selection, dataset, AxisRole::BarColumn)?;
            Ok(ChartSpec {
                kind,
                title: format!("Bar Plot of {}", column.name),
                series: Series::Xy {
                    x_label: "index".to_string(),
                    y_label: column.name.clone(),
                    x: dataset.row_indices().map(|i| Value::Int(i as i64)).collect(),
                    y: column.values.clone(),
                },
            })
        }
        WidgetKind::Line | WidgetKind::Scatter => {
            let (x_role, y_role, noun) = match kind {
                WidgetKind::Line => (AxisRole::LineX, AxisRole::LineY, "Line"),
                _ => (AxisRole::ScatterX, AxisRole::ScatterY, "Scatter"),
            };
            let x = resolve(selection, dataset, x_role)?;
            let y = resolve(selection, dataset, y_role)?;
            Ok(ChartSpec {
                kind,
                title: format!("{} Plot of {} vs {}", noun, y.name, x.name),
                series: Series::Xy {
                    x_label: x.name.clone(),
                    y_label: y.name.clone(),
                    x: x.values.clone(),
                    y: y.values.clone(),
                },
            })
        }
        WidgetKind::Pie => {
            let column = resolve(selection, dataset, AxisRole::PieColumn)?;
            let slices = column
                .distinct_counts()
                .into_iter()
                .map(|(label, count)| Slice { label, count })
                .collect();
            Ok(ChartSpec {
                kind,
                title: format!("Pie Chart of {}", column.name),
                series: Series::Slices {
                    label: column.name.clone(),
                    slices,
                },
            })
        }
    }
}

fn resolve<'a>(
    selection: &SelectionState,
    dataset: &'a Dataset,
    role: AxisRole,
) -> Result<&'a Column, WidgetError> {
    let name = selection
        .get(role)
        .ok_or(WidgetError::MissingSelection { role })?;
    dataset.column(name).ok_or_else(|| WidgetError::InvalidColumn {
        role,
        column: name.to_string(),
    })
}

/// One chart widget: its selection and what it currently displays
#[derive(Debug, Clone)]
pub struct WidgetController {
    selection: SelectionState,
    dataset: Arc<Dataset>,
    output: ChartOutput,
}

impl WidgetController {
    /// Controller with default selections and its initial chart
    pub fn new(kind: WidgetKind, dataset: Arc<Dataset>) -> Self {
        let selection = SelectionState::defaults(kind, &dataset);
        Self::with_selection(selection, dataset)
    }

    /// Controller starting from an explicit selection
    pub fn with_selection(selection: SelectionState, dataset: Arc<Dataset>) -> Self {
        let output = render(&selection, &dataset);
        Self {
            selection,
            dataset,
            output,
        }
    }

    /// Apply one dropdown change and recompute the chart from scratch
    pub fn on_change(
        &mut self,
        role: AxisRole,
        column: Option<String>,
    ) -> Result<&ChartOutput, SelectionError> {
        self.selection.update(role, column)?;

        let next = render(&self.selection, &self.dataset);
        tracing::debug!(
            widget = %self.kind(),
            role = %role,
            from = self.output.state_name(),
            to = next.state_name(),
            title = ?next.spec().map(|spec| spec.title.as_str()),
            "Widget updated"
        );
        self.output = next;

        Ok(&self.output)
    }

    pub fn kind(&self) -> WidgetKind {
        self.selection.widget()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn output(&self) -> &ChartOutput {
        &self.output
    }
}
