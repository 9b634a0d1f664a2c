//! Widget kinds and the axis roles each one owns

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::SelectionError;
use crate::dataset::Dataset;

/// The four chart widgets, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Bar,
    Line,
    Scatter,
    Pie,
}

impl WidgetKind {
    /// Page order: bar, line, scatter, pie
    pub const ALL: [WidgetKind; 4] = [
        WidgetKind::Bar,
        WidgetKind::Line,
        WidgetKind::Scatter,
        WidgetKind::Pie,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetKind::Bar => "bar",
            WidgetKind::Line => "line",
            WidgetKind::Scatter => "scatter",
            WidgetKind::Pie => "pie",
        }
    }

    /// Dropdown roles bound to this widget, X before Y
    pub fn roles(&self) -> &'static [AxisRole] {
        match self {
            WidgetKind::Bar => &[AxisRole::BarColumn],
            WidgetKind::Line => &[AxisRole::LineX, AxisRole::LineY],
            WidgetKind::Scatter => &[AxisRole::ScatterX, AxisRole::ScatterY],
            WidgetKind::Pie => &[AxisRole::PieColumn],
        }
    }

    /// Section label shown above the dropdowns
    pub fn heading(&self) -> &'static str {
        match self {
            WidgetKind::Bar => "Bar Plot:",
            WidgetKind::Line => "Line Plot:",
            WidgetKind::Scatter => "Scatter Plot:",
            WidgetKind::Pie => "Pie Chart:",
        }
    }

    /// DOM id of the chart display area
    pub fn graph_id(&self) -> &'static str {
        match self {
            WidgetKind::Bar => "bar-plot",
            WidgetKind::Line => "line-plot",
            WidgetKind::Scatter => "scatter-plot",
            WidgetKind::Pie => "pie-chart",
        }
    }

    /// Default column for each role, by schema position
    ///
    /// Bar defaults to the third column, pie to the second, and the
    /// two-axis widgets plot the third column against the first.
    pub fn default_columns(&self, dataset: &Dataset) -> Vec<(AxisRole, Option<String>)> {
        let at = |position: usize| dataset.column_name_at(position).map(str::to_string);
        match self {
            WidgetKind::Bar => vec![(AxisRole::BarColumn, at(2))],
            WidgetKind::Line => vec![(AxisRole::LineX, at(0)), (AxisRole::LineY, at(2))],
            WidgetKind::Scatter => vec![(AxisRole::ScatterX, at(0)), (AxisRole::ScatterY, at(2))],
            WidgetKind::Pie => vec![(AxisRole::PieColumn, at(1))],
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetKind {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WidgetKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| SelectionError::UnknownWidget(s.to_string()))
    }
}

/// A named dropdown slot feeding one axis of one widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AxisRole {
    BarColumn,
    LineX,
    LineY,
    ScatterX,
    ScatterY,
    PieColumn,
}

impl AxisRole {
    const ALL: [AxisRole; 6] = [
        AxisRole::BarColumn,
        AxisRole::LineX,
        AxisRole::LineY,
        AxisRole::ScatterX,
        AxisRole::ScatterY,
        AxisRole::PieColumn,
    ];

    /// Wire name, also the dropdown's DOM id
    pub fn as_str(&self) -> &'static str {
        match self {
            AxisRole::BarColumn => "bar-column",
            AxisRole::LineX => "line-x",
            AxisRole::LineY => "line-y",
            AxisRole::ScatterX => "scatter-x",
            AxisRole::ScatterY => "scatter-y",
            AxisRole::PieColumn => "pie-column",
        }
    }

    /// Widget that owns this role
    pub fn widget(&self) -> WidgetKind {
        match self {
            AxisRole::BarColumn => WidgetKind::Bar,
            AxisRole::LineX | AxisRole::LineY => WidgetKind::Line,
            AxisRole::ScatterX | AxisRole::ScatterY => WidgetKind::Scatter,
            AxisRole::PieColumn => WidgetKind::Pie,
        }
    }

    /// Label above the dropdown, for two-axis widgets only
    pub fn label(&self) -> Option<&'static str> {
        match self {
            AxisRole::LineX | AxisRole::ScatterX => Some("Select X-axis Column:"),
            AxisRole::LineY | AxisRole::ScatterY => Some("Select Y-axis Column:"),
            AxisRole::BarColumn | AxisRole::PieColumn => None,
        }
    }
}

impl fmt::Display for AxisRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AxisRole {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AxisRole::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| SelectionError::UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_belong_to_their_widget() {
        for kind in WidgetKind::ALL {
            for role in kind.roles() {
                assert_eq!(role.widget(), kind);
            }
        }
    }

    #[test]
    fn test_parse_round_trip_names() {
        assert_eq!("scatter".parse::<WidgetKind>().unwrap(), WidgetKind::Scatter);
        assert_eq!("line-y".parse::<AxisRole>().unwrap(), AxisRole::LineY);
        assert!(matches!(
            "donut".parse::<WidgetKind>(),
            Err(SelectionError::UnknownWidget(_))
        ));
        assert!(matches!(
            "line-z".parse::<AxisRole>(),
            Err(SelectionError::UnknownRole(_))
        ));
    }

    #[test]
    fn test_serde_names_match_wire_names() {
        let json = serde_json::to_string(&AxisRole::PieColumn).unwrap();
        assert_eq!(json, r#""pie-column""#);
        let json = serde_json::to_string(&WidgetKind::Bar).unwrap();
        assert_eq!(json, r#""bar""#);
    }

    #[test]
    fn test_default_columns() {
        let ds = Dataset::environmental().unwrap();

        let bar = WidgetKind::Bar.default_columns(&ds);
        assert_eq!(
            bar,
            vec![(AxisRole::BarColumn, Some("Air Quality Index (AQI)".to_string()))]
        );

        let line = WidgetKind::Line.default_columns(&ds);
        assert_eq!(line[0], (AxisRole::LineX, Some("Year".to_string())));
        assert_eq!(
            line[1],
            (AxisRole::LineY, Some("Air Quality Index (AQI)".to_string()))
        );

        let pie = WidgetKind::Pie.default_columns(&ds);
        assert_eq!(pie, vec![(AxisRole::PieColumn, Some("Country".to_string()))]);
    }
}
