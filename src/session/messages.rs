//! Page Session Message Types
//!
//! JSON messages exchanged over `/ws` between the page script and its
//! session.

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use std::collections::HashMap;

use crate::widget::{WidgetController, WidgetKind};

/// Messages sent from the page to the server
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// A dropdown changed
    Select {
        /// Widget name (bar, line, scatter, pie)
        widget: String,
        /// Axis role (e.g. "line-x")
        role: String,
        /// New column name; null or absent clears the role
        #[serde(default)]
        column: Option<String>,
    },
    /// The page's dropdowns, role to column; answered with every figure
    Sync {
        #[serde(default)]
        selection: HashMap<String, Option<String>>,
    },
    /// Keepalive
    Ping,
}

/// Messages sent from the server to the page
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Session established
    Connected {
        /// Unique session identifier
        session_id: String,
        /// Identifier of this server process, changes on restart
        server_id: String,
    },
    /// New chart for one widget
    Figure {
        widget: WidgetKind,
        /// "empty" or "rendered"
        state: String,
        /// Plotly figure, `{}` when empty
        figure: Json,
    },
    /// Pong response to ping
    Pong,
    /// Error message
    Error {
        /// Error description
        message: String,
    },
}

impl ServerMessage {
    /// The current chart of a widget
    pub fn figure(controller: &WidgetController) -> Self {
        let output = controller.output();
        ServerMessage::Figure {
            widget: controller.kind(),
            state: output.state_name().to_string(),
            figure: output.to_figure(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ServerMessage::Error {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_message_deserialize_select() {
        let json = r#"{"type": "select", "widget": "line", "role": "line-x", "column": "Year"}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        match msg {
            ClientMessage::Select {
                widget,
                role,
                column,
            } => {
                assert_eq!(widget, "line");
                assert_eq!(role, "line-x");
                assert_eq!(column.as_deref(), Some("Year"));
            }
            _ => panic!("Expected Select"),
        }
    }

    #[test]
    fn test_client_message_select_without_column() {
        let json = r#"{"type": "select", "widget": "bar", "role": "bar-column"}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        assert!(matches!(msg, ClientMessage::Select { column: None, .. }));
    }

    #[test]
    fn test_client_message_deserialize_sync() {
        let json = r#"{"type": "sync", "selection": {"bar-column": "Year", "pie-column": null}}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        match msg {
            ClientMessage::Sync { selection } => {
                assert_eq!(selection.len(), 2);
                assert_eq!(selection["bar-column"].as_deref(), Some("Year"));
                assert_eq!(selection["pie-column"], None);
            }
            _ => panic!("Expected Sync"),
        }

        let msg: ClientMessage = serde_json::from_str(r#"{"type": "sync"}"#).unwrap();
        assert!(matches!(msg, ClientMessage::Sync { selection } if selection.is_empty()));
    }

    #[test]
    fn test_client_message_deserialize_ping() {
        let json = r#"{"type": "ping"}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        assert!(matches!(msg, ClientMessage::Ping));
    }

    #[test]
    fn test_server_message_serialize_connected() {
        let msg = ServerMessage::Connected {
            session_id: "abc-123".to_string(),
            server_id: "srv".to_string(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"connected\""));
        assert!(json.contains("\"session_id\":\"abc-123\""));
        assert!(json.contains("\"server_id\":\"srv\""));
    }

    #[test]
    fn test_server_message_serialize_figure() {
        let msg = ServerMessage::Figure {
            widget: WidgetKind::Pie,
            state: "empty".to_string(),
            figure: serde_json::json!({}),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(
            json,
            r#"{"type":"figure","widget":"pie","state":"empty","figure":{}}"#
        );
    }
}
