//! Page Session Handler
//!
//! Upgrades `/ws` to a WebSocket and runs one page session on it. The
//! session owns a `Dashboard` and handles messages strictly in arrival
//! order: each `select` recomputes one widget and answers with its figure.
//!
//! The session stays silent until the page speaks. The page opens with a
//! `sync` of its dropdowns, and the greeting (`connected`, then one figure
//! per widget) is computed from that selection.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::{IntoResponse, Response},
};
use futures_util::{stream::SplitSink, SinkExt, StreamExt};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::messages::{ClientMessage, ServerMessage};
use super::registry::SessionGuard;
use crate::api::{ApiError, AppState};
use crate::dataset::Dataset;
use crate::layout::Dashboard;
use crate::widget::{AxisRole, WidgetKind};

/// WebSocket upgrade handler
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    let guard = match state.sessions.try_open() {
        Ok(guard) => guard,
        Err(e) => return ApiError::ServiceUnavailable(e.to_string()).into_response(),
    };

    let dataset = Arc::clone(&state.dataset);
    let server_id = state.server_id.clone();
    ws.on_upgrade(move |socket| handle_socket(socket, dataset, server_id, guard))
}

/// Run an established page session until the page goes away
async fn handle_socket(
    socket: WebSocket,
    dataset: Arc<Dataset>,
    server_id: String,
    _guard: SessionGuard,
) {
    let session_id = Uuid::new_v4().to_string();
    let (mut sender, mut receiver) = socket.split();
    let mut dashboard = Dashboard::new(dataset);
    let mut greeted = false;

    tracing::info!(session_id = %session_id, "Page session opened");

    'session: while let Some(result) = receiver.next().await {
        let message = match result {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!(session_id = %session_id, error = %e, "WebSocket receive error");
                break;
            }
        };

        let replies = match message {
            Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                Ok(client_msg) if greeted => apply(&mut dashboard, client_msg),
                Ok(client_msg) => {
                    greeted = true;
                    open(&mut dashboard, client_msg, &session_id, &server_id)
                }
                Err(e) => {
                    tracing::debug!(
                        session_id = %session_id,
                        error = %e,
                        text = %text,
                        "Invalid client message"
                    );
                    vec![ServerMessage::error(format!("Invalid message format: {}", e))]
                }
            },
            Message::Binary(_) => vec![ServerMessage::error("Binary messages not supported")],
            // Axum answers pings itself
            Message::Ping(_) | Message::Pong(_) => Vec::new(),
            Message::Close(_) => {
                tracing::debug!(session_id = %session_id, "Page requested close");
                break;
            }
        };

        for reply in &replies {
            if let Err(e) = send(&mut sender, reply).await {
                tracing::debug!(session_id = %session_id, error = %e, "WebSocket send failed");
                break 'session;
            }
        }
    }

    tracing::info!(session_id = %session_id, "Page session closed");
}

/// `connected`, then every widget's current figure in page order
pub fn greeting(dashboard: &Dashboard, session_id: &str, server_id: &str) -> Vec<ServerMessage> {
    let mut messages = vec![ServerMessage::Connected {
        session_id: session_id.to_string(),
        server_id: server_id.to_string(),
    }];
    messages.extend(dashboard.widgets().map(ServerMessage::figure));
    messages
}

/// Answer the first message of a session
///
/// A `sync` is applied before the greeting, so the first figures already
/// match the page's dropdowns. Any other message is answered after a
/// greeting with the default figures.
pub fn open(
    dashboard: &mut Dashboard,
    first: ClientMessage,
    session_id: &str,
    server_id: &str,
) -> Vec<ServerMessage> {
    match first {
        ClientMessage::Sync { selection } => {
            let errors = restore(dashboard, selection);
            let mut replies = greeting(dashboard, session_id, server_id);
            replies.extend(errors);
            replies
        }
        other => {
            let mut replies = greeting(dashboard, session_id, server_id);
            replies.extend(apply(dashboard, other));
            replies
        }
    }
}

/// Apply one client message to the session's dashboard
///
/// A `select` answers with exactly one message: the widget's new figure, or
/// an error if the widget or role does not exist. A `sync` answers with
/// every figure, preceded by one error per role it could not apply.
pub fn apply(dashboard: &mut Dashboard, message: ClientMessage) -> Vec<ServerMessage> {
    match message {
        ClientMessage::Select {
            widget,
            role,
            column,
        } => {
            let parsed = widget
                .parse::<WidgetKind>()
                .and_then(|kind| role.parse::<AxisRole>().map(|role| (kind, role)));

            let result = parsed.and_then(|(kind, role)| {
                dashboard.update(kind, role, column)?;
                Ok(kind)
            });

            let reply = match result {
                Ok(kind) => ServerMessage::figure(dashboard.widget(kind)),
                Err(e) => {
                    tracing::debug!(error = %e, "Rejected selection");
                    ServerMessage::error(e.to_string())
                }
            };
            vec![reply]
        }
        ClientMessage::Sync { selection } => {
            let mut replies = restore(dashboard, selection);
            replies.extend(dashboard.widgets().map(ServerMessage::figure));
            replies
        }
        ClientMessage::Ping => vec![ServerMessage::Pong],
    }
}

/// Set every role the page reports; unknown roles become error messages
fn restore(
    dashboard: &mut Dashboard,
    selection: HashMap<String, Option<String>>,
) -> Vec<ServerMessage> {
    selection
        .into_iter()
        .filter_map(|(role, column)| {
            let result = role
                .parse::<AxisRole>()
                .and_then(|role| dashboard.update(role.widget(), role, column).map(|_| ()));

            result.err().map(|e| {
                tracing::debug!(error = %e, "Rejected synced selection");
                ServerMessage::error(e.to_string())
            })
        })
        .collect()
}

async fn send(
    sender: &mut SplitSink<WebSocket, Message>,
    message: &ServerMessage,
) -> Result<(), axum::Error> {
    let text = serde_json::to_string(message).map_err(axum::Error::new)?;
    sender.send(Message::Text(text)).await
}
