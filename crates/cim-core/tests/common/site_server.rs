//! Minimal HTTP/1.1 server serving a fixed path→response map for
//! integration tests.
//!
//! The crawl under test runs against fixture listing pages instead of the
//! live site; unknown paths get a 404 and individual pages can be seeded
//! with error statuses to simulate partial outages.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

/// A canned response: status code and body.
#[derive(Debug, Clone)]
pub struct Page {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Page {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }
}

/// Starts a server on an ephemeral port. `build` receives the server's base
/// URL (e.g. "http://127.0.0.1:12345", no trailing slash) so fixture pages
/// can embed absolute URLs, and returns the path→response map to serve.
/// The server runs until the process exits; the base URL is returned.
pub fn start<F>(build: F) -> String
where
    F: FnOnce(&str) -> HashMap<String, Page>,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let base = format!("http://127.0.0.1:{port}");
    let pages = Arc::new(build(&base));
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let pages = Arc::clone(&pages);
            thread::spawn(move || handle(stream, &pages));
        }
    });
    base
}

fn handle(mut stream: std::net::TcpStream, pages: &HashMap<String, Page>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = match request_path(request) {
        Some(p) => p,
        None => return,
    };

    let page = pages.get(path).cloned().unwrap_or_else(|| Page::error(404));
    let reason = match page.status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Error",
    };
    let header = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        page.status,
        reason,
        page.body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(&page.body);
}

/// Returns the path of the request line ("GET /x HTTP/1.1" → "/x").
fn request_path(request: &str) -> Option<&str> {
    let line = request.lines().next()?;
    let mut parts = line.split_whitespace();
    let _method = parts.next()?;
    parts.next()
}
