//! Page Route
//!
//! - GET / - The dashboard page

use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::layout::{Dashboard, Page};

/// GET /
///
/// Renders the page with every widget at its default selection.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let dashboard = Dashboard::new(Arc::clone(&state.dataset));
    let page = Page::build(&dashboard, state.dev_mode(), state.server_id.clone());
    Html(page.render_html())
}
