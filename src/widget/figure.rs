//! Plotly figure encoding
//!
//! Charts are drawn in the browser by plotly.js; this module turns a
//! `ChartOutput` into the `{data, layout}` object it consumes. The empty
//! chart encodes as `{}`, which plotly renders as a blank plot area.

use serde_json::{json, Map, Value as Json};

use super::chart::{ChartOutput, ChartSpec, Series};
use super::kind::WidgetKind;

impl ChartOutput {
    /// Figure payload for the browser renderer
    pub fn to_figure(&self) -> Json {
        match self {
            ChartOutput::Empty => Json::Object(Map::new()),
            ChartOutput::Rendered(spec) => spec.to_figure(),
        }
    }
}

impl ChartSpec {
    pub fn to_figure(&self) -> Json {
        match &self.series {
            Series::Xy {
                x_label,
                y_label,
                x,
                y,
            } => {
                let trace = match self.kind {
                    WidgetKind::Bar => json!({ "type": "bar", "x": x, "y": y }),
                    WidgetKind::Scatter => {
                        json!({ "type": "scatter", "mode": "markers", "x": x, "y": y })
                    }
                    _ => json!({ "type": "scatter", "mode": "lines", "x": x, "y": y }),
                };
                json!({
                    "data": [trace],
                    "layout": {
                        "title": { "text": self.title },
                        "xaxis": { "title": { "text": x_label } },
                        "yaxis": { "title": { "text": y_label } },
                    },
                })
            }
            Series::Slices { label, slices } => {
                let labels: Vec<String> = slices.iter().map(|s| s.label.to_string()).collect();
                let values: Vec<usize> = slices.iter().map(|s| s.count).collect();
                json!({
                    "data": [{
                        "type": "pie",
                        "name": label,
                        "labels": labels,
                        "values": values,
                    }],
                    "layout": {
                        "title": { "text": self.title },
                    },
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Value;
    use crate::widget::chart::Slice;

    #[test]
    fn test_empty_is_empty_object() {
        assert_eq!(ChartOutput::Empty.to_figure(), json!({}));
    }

    #[test]
    fn test_bar_figure() {
        let spec = ChartSpec {
            kind: WidgetKind::Bar,
            title: "Bar Plot of n".into(),
            series: Series::Xy {
                x_label: "index".into(),
                y_label: "n".into(),
                x: vec![Value::Int(0), Value::Int(1)],
                y: vec![Value::Float(1.5), Value::Float(2.5)],
            },
        };
        let fig = ChartOutput::Rendered(spec).to_figure();

        assert_eq!(fig["data"][0]["type"], "bar");
        assert_eq!(fig["data"][0]["x"], json!([0, 1]));
        assert_eq!(fig["data"][0]["y"], json!([1.5, 2.5]));
        assert_eq!(fig["layout"]["title"]["text"], "Bar Plot of n");
        assert_eq!(fig["layout"]["xaxis"]["title"]["text"], "index");
    }

    #[test]
    fn test_line_and_scatter_modes() {
        let series = Series::Xy {
            x_label: "a".into(),
            y_label: "b".into(),
            x: vec![Value::Int(1)],
            y: vec![Value::Int(2)],
        };
        let line = ChartSpec {
            kind: WidgetKind::Line,
            title: "t".into(),
            series: series.clone(),
        };
        let scatter = ChartSpec {
            kind: WidgetKind::Scatter,
            title: "t".into(),
            series,
        };

        assert_eq!(line.to_figure()["data"][0]["mode"], "lines");
        assert_eq!(scatter.to_figure()["data"][0]["mode"], "markers");
        assert_eq!(scatter.to_figure()["data"][0]["type"], "scatter");
    }

    #[test]
    fn test_pie_figure() {
        let spec = ChartSpec {
            kind: WidgetKind::Pie,
            title: "Pie Chart of c".into(),
            series: Series::Slices {
                label: "c".into(),
                slices: vec![
                    Slice {
                        label: Value::from("x"),
                        count: 2,
                    },
                    Slice {
                        label: Value::Int(7),
                        count: 1,
                    },
                ],
            },
        };
        let fig = spec.to_figure();

        assert_eq!(fig["data"][0]["type"], "pie");
        assert_eq!(fig["data"][0]["labels"], json!(["x", "7"]));
        assert_eq!(fig["data"][0]["values"], json!([2, 1]));
    }
}
