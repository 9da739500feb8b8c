//! Minimal HTTP/1.1 server that enforces Basic auth for integration tests.
//!
//! Serves a fixed body on any GET path. When an expected `Authorization`
//! value is configured, requests without it get 401. The body switches to
//! the JSON variant when the client sends `Accept: application/json`.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone)]
pub struct ManagerServerOptions {
    /// Expected `Authorization` header value; None disables the auth check.
    pub expect_authorization: Option<String>,
    /// Body served by default (the manager's XML-ish format).
    pub body_default: Vec<u8>,
    /// Body served when the client asks for JSON.
    pub body_json: Vec<u8>,
}

impl Default for ManagerServerOptions {
    fn default() -> Self {
        Self {
            expect_authorization: None,
            body_default: b"<uptime>5 days</uptime>".to_vec(),
            body_json: b"{\"uptime\":\"5 days\"}".to_vec(),
        }
    }
}

/// Starts a server in a background thread. Returns the base URL
/// (e.g. "http://127.0.0.1:12345"). The server runs until the process exits.
pub fn start(opts: ManagerServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let opts = Arc::new(opts);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let opts = Arc::clone(&opts);
            thread::spawn(move || handle(stream, &opts));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, opts: &ManagerServerOptions) {
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
    let (method, authorization, wants_json) = parse_request(request);

    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }

    if let Some(expected) = &opts.expect_authorization {
        if authorization.as_deref() != Some(expected.as_str()) {
            let _ = stream.write_all(
                b"HTTP/1.1 401 Unauthorized\r\nWWW-Authenticate: Basic realm=\"manager\"\r\nContent-Length: 0\r\n\r\n",
            );
            return;
        }
    }

    let (body, content_type) = if wants_json {
        (&opts.body_json, "application/json")
    } else {
        (&opts.body_default, "application/xml")
    };
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        content_type,
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}

/// Returns (method, Authorization value if present, Accept prefers JSON).
fn parse_request(request: &str) -> (&str, Option<String>, bool) {
    let mut method = "";
    let mut authorization = None;
    let mut wants_json = false;
    for line in request.lines() {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if method.is_empty() {
            method = line.split_whitespace().next().unwrap_or("");
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("authorization") {
                authorization = Some(value.to_string());
            }
            if name.eq_ignore_ascii_case("accept") && value.contains("application/json") {
                wants_json = true;
            }
        }
    }
    (method, authorization, wants_json)
}
