//! Forwarding endpoint: route logic plus a minimal HTTP front.

pub mod http;
pub mod invoke;

pub use http::HttpServer;
pub use invoke::{InvokeService, Reply};
