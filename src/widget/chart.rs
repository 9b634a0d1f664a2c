//! Chart descriptions produced by widget controllers
//!
//! A `ChartSpec` is derived from a selection and the dataset and is thrown
//! away on the next change. `ChartOutput` is the widget's display state:
//! either nothing to draw or the last spec built.

use super::kind::WidgetKind;
use crate::dataset::Value;

/// Data carried by a chart
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    /// Index-aligned X/Y sequences (bar, line, scatter)
    Xy {
        x_label: String,
        y_label: String,
        x: Vec<Value>,
        y: Vec<Value>,
    },
    /// Grouped categories (pie)
    Slices { label: String, slices: Vec<Slice> },
}

/// One pie slice: a distinct column value and the rows carrying it
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: Value,
    pub count: usize,
}

/// Complete description of one chart, ready for the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: WidgetKind,
    pub title: String,
    pub series: Series,
}

/// What a widget currently displays
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ChartOutput {
    /// Nothing to draw: the selection is incomplete
    #[default]
    Empty,
    /// The latest valid chart
    Rendered(ChartSpec),
}

impl ChartOutput {
    pub fn spec(&self) -> Option<&ChartSpec> {
        match self {
            ChartOutput::Empty => None,
            ChartOutput::Rendered(spec) => Some(spec),
        }
    }

    /// State name used on the wire and in logs
    pub fn state_name(&self) -> &'static str {
        match self {
            ChartOutput::Empty => "empty",
            ChartOutput::Rendered(_) => "rendered",
        }
    }
}
