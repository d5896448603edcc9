//! Development server with live reload for the StyleKit docs.
//!
//! Serves the documentation page, recomposed on every request, and pushes
//! reload messages over a WebSocket when watched files change.

pub mod server;
pub mod watcher;
pub mod websocket;

pub use server::{DevServer, DevServerConfig, ServerError};
pub use watcher::{FileWatcher, WatchEvent};
pub use websocket::{HmrHub, HmrMessage};
