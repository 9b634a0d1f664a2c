//! Page Sessions
//!
//! Each open page holds a WebSocket to `/ws`. The connection task owns the
//! page's `Dashboard`, so selections live exactly as long as the page and
//! are never shared between pages.
//!
//! ## Protocol
//!
//! ```javascript
//! const ws = new WebSocket('ws://localhost:8050/ws');
//! ws.send(JSON.stringify({type: 'sync', selection: {'bar-column': 'Year'}}));
//! // ← {"type":"connected","session_id":"…","server_id":"…"}
//! // ← {"type":"figure","widget":"bar","state":"rendered","figure":{…}}  (one per widget)
//! ws.send(JSON.stringify({type: 'select', widget: 'pie', role: 'pie-column', column: 'Country'}));
//! // ← {"type":"figure","widget":"pie","state":"rendered","figure":{…}}
//! ```

mod handler;
mod messages;
mod registry;

pub use handler::{apply, greeting, open, websocket_handler};
pub use messages::{ClientMessage, ServerMessage};
pub use registry::{SessionError, SessionGuard, SessionRegistry};
