//! Page shell
//!
//! Lays the four widgets out in a fixed two-column grid and renders the
//! HTML document server-side with Leptos. The page carries its initial
//! figures inline so charts appear before the session socket connects;
//! plotly.js draws them in the browser.

use leptos::*;
use serde_json::{json, Map, Value as Json};

use super::dashboard::Dashboard;
use crate::widget::{AxisRole, WidgetController, WidgetKind};

/// Browser tab title
pub const PAGE_TITLE: &str = "Interactive Dashboard";
/// Heading above the widget grid
pub const HEADING: &str = "Environmental Dashboard";

const PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
const PAGE_STYLE: &str =
    ".widget{width:48%;display:inline-block;vertical-align:top}.widget label{display:block}";
const PAGE_SCRIPT: &str = include_str!("page.js");

/// A column dropdown inside a widget section
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownSpec {
    pub role: AxisRole,
    pub label: Option<&'static str>,
    pub value: Option<String>,
}

/// One widget's section of the grid
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpec {
    pub widget: WidgetKind,
    pub heading: &'static str,
    pub dropdowns: Vec<DropdownSpec>,
    pub graph_id: &'static str,
    pub figure: Json,
}

impl SectionSpec {
    fn from_controller(controller: &WidgetController) -> Self {
        let widget = controller.kind();
        let dropdowns = controller
            .selection()
            .iter()
            .map(|(role, value)| DropdownSpec {
                role,
                label: role.label(),
                value: value.map(str::to_string),
            })
            .collect();

        Self {
            widget,
            heading: widget.heading(),
            dropdowns,
            graph_id: widget.graph_id(),
            figure: controller.output().to_figure(),
        }
    }
}

/// The whole dashboard page
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub sections: Vec<SectionSpec>,
    /// Dropdown choices: every column name in schema order
    pub options: Vec<String>,
    pub dev_mode: bool,
    pub server_id: String,
}

impl Page {
    pub fn build(dashboard: &Dashboard, dev_mode: bool, server_id: impl Into<String>) -> Self {
        Self {
            sections: dashboard.widgets().map(SectionSpec::from_controller).collect(),
            options: dashboard
                .dataset()
                .column_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            dev_mode,
            server_id: server_id.into(),
        }
    }

    /// Data the page script starts from
    fn script_config(&self) -> Json {
        let mut figures = Map::new();
        let mut graphs = Map::new();
        for section in &self.sections {
            figures.insert(section.widget.to_string(), section.figure.clone());
            graphs.insert(section.widget.to_string(), json!(section.graph_id));
        }

        json!({
            "figures": figures,
            "graphs": graphs,
            "dev_mode": self.dev_mode,
            "server_id": self.server_id,
        })
    }

    pub fn render_html(&self) -> String {
        let page = self.clone();
        let document = leptos::ssr::render_to_string(move || view! { <Document page=page/> });
        format!("<!DOCTYPE html>\n{}", document)
    }
}

/// JSON safe to inline in a script element
fn script_json(value: &Json) -> String {
    value.to_string().replace('<', "\\u003c")
}

/// The HTML document around the widget grid
#[component]
fn Document(page: Page) -> impl IntoView {
    let config = script_json(&page.script_config());
    let options = page.options;

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <title>{PAGE_TITLE}</title>
                <script src=PLOTLY_SRC charset="utf-8"></script>
                <style inner_html=PAGE_STYLE></style>
            </head>
            <body>
                <div id="app">
                    <h1 style="text-align:center">{HEADING}</h1>
                    {page
                        .sections
                        .into_iter()
                        .map(|section| view! { <Section section=section options=options.clone()/> })
                        .collect_view()}
                </div>
                <script id="envdash-config" type="application/json" inner_html=config></script>
                <script inner_html=PAGE_SCRIPT></script>
            </body>
        </html>
    }
}

/// One widget: heading, its dropdowns, then the graph container
#[component]
fn Section(section: SectionSpec, options: Vec<String>) -> impl IntoView {
    let widget = section.widget;

    view! {
        <div class="widget" data-widget={widget.as_str()}>
            <label>{section.heading}</label>
            {section
                .dropdowns
                .into_iter()
                .map(|dropdown| {
                    view! { <Dropdown widget=widget dropdown=dropdown options=options.clone()/> }
                })
                .collect_view()}
            <div id={section.graph_id} class="graph"></div>
        </div>
    }
}

/// Column dropdown; an unset role shows a blank placeholder that cannot be
/// picked again, so the control is never clearable from the page
#[component]
fn Dropdown(widget: WidgetKind, dropdown: DropdownSpec, options: Vec<String>) -> impl IntoView {
    let role = dropdown.role.as_str();
    let value = dropdown.value;
    let label = dropdown
        .label
        .map(|text| view! { <label for={role}>{text}</label> });
    let placeholder = value
        .is_none()
        .then(|| view! { <option value="" selected=true disabled=true></option> });

    view! {
        <>
            {label}
            <select id={role} data-role={role} data-widget={widget.as_str()}>
                {placeholder}
                {options
                    .into_iter()
                    .map(|option| {
                        let selected = value.as_deref() == Some(option.as_str());
                        view! { <option value={option.clone()} selected=selected>{option}</option> }
                    })
                    .collect_view()}
            </select>
        </>
    }
}
