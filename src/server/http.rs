//! Minimal HTTP/1.1 front for the invoke route.
//!
//! The relay serves exactly one route, so the front stays a small hand-rolled
//! HTTP/1.1 reader over [`tokio::net::TcpListener`]: one connection per task,
//! one request per connection (`Connection: close`). All route semantics live
//! in [`InvokeService`]; this module only parses the request head, reads the
//! body, and writes the reply.

use std::net::SocketAddr;
use std::sync::Arc;

use serde_json::json;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

use super::invoke::{InvokeService, Reply};
use crate::error::RelayError;

/// The single route the relay serves.
pub const INVOKE_PATH: &str = "/api/agent/invoke";

/// Request bodies beyond this are rejected with 413.
const MAX_BODY_BYTES: usize = 1 << 20;

/// HTTP front serving [`InvokeService`] on a TCP listener.
pub struct HttpServer {
    listener: TcpListener,
    service: Arc<InvokeService>,
}

impl HttpServer {
    /// Bind the listener.
    pub async fn bind(addr: SocketAddr, service: Arc<InvokeService>) -> Result<Self, RelayError> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self { listener, service })
    }

    /// The bound address (useful with port 0).
    pub fn local_addr(&self) -> Result<SocketAddr, RelayError> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections until the task is dropped or the listener fails.
    pub async fn serve(self) -> Result<(), RelayError> {
        loop {
            let (stream, peer) = self.listener.accept().await?;
            let service = self.service.clone();
            tokio::spawn(async move {
                if let Err(err) = handle_connection(stream, service).await {
                    tracing::debug!(peer = %peer, error = %err, "connection error");
                }
            });
        }
    }
}

async fn handle_connection(
    stream: TcpStream,
    service: Arc<InvokeService>,
) -> Result<(), RelayError> {
    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).await? == 0 {
        return Ok(()); // closed before sending anything
    }
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let target = parts.next().unwrap_or_default().to_string();
    let path = target.split('?').next().unwrap_or_default().to_string();

    let mut authorization: Option<String> = None;
    let mut content_length: usize = 0;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).await? == 0 {
            break;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            let value = value.trim();
            if name.eq_ignore_ascii_case("authorization") {
                authorization = Some(value.to_string());
            } else if name.eq_ignore_ascii_case("content-length") {
                content_length = value.parse().unwrap_or(0);
            }
        }
    }

    let reply = if content_length > MAX_BODY_BYTES {
        Reply::json(413, json!({ "error": "Request body too large." }))
    } else {
        let mut body = vec![0u8; content_length];
        reader.read_exact(&mut body).await?;
        route(&method, &path, authorization.as_deref(), &body, &service).await
    };

    write_reply(&mut write_half, &reply).await
}

async fn route(
    method: &str,
    path: &str,
    authorization: Option<&str>,
    body: &[u8],
    service: &InvokeService,
) -> Reply {
    match (method, path) {
        ("POST", INVOKE_PATH) => service.invoke(authorization, body).await,
        (_, INVOKE_PATH) => Reply::json(405, json!({ "error": "Method not allowed." })),
        _ => Reply::json(404, json!({ "error": "Not found." })),
    }
}

async fn write_reply<W>(write: &mut W, reply: &Reply) -> Result<(), RelayError>
where
    W: AsyncWriteExt + Unpin,
{
    let body = serde_json::to_vec(&reply.body)?;
    let head = format!(
        "HTTP/1.1 {} {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
        reply.status,
        reason_phrase(reply.status),
        body.len(),
    );
    write.write_all(head.as_bytes()).await?;
    write.write_all(&body).await?;
    write.flush().await?;
    Ok(())
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        405 => "Method Not Allowed",
        413 => "Payload Too Large",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Error",
    }
}
