//! Minimal HTTP/1.1 server that supports HEAD and GET for integration tests.
//!
//! Serves a single static body under any path. HEAD advertises the
//! configured Content-Type and Content-Length; GET streams the body.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy)]
pub struct ImageServerOptions {
    /// `Content-Type` sent on HEAD and GET; `None` omits the header.
    pub content_type: Option<&'static str>,
    /// Override the `Content-Length` advertised on HEAD (GET still serves
    /// the real body). Used to fake an oversized file without allocating it.
    pub declared_length: Option<u64>,
}

impl Default for ImageServerOptions {
    fn default() -> Self {
        Self {
            content_type: Some("image/png"),
            declared_length: None,
        }
    }
}

/// Starts a server in a background thread serving `body`. Returns the base
/// URL (e.g. "http://127.0.0.1:12345/"). The server runs until the process
/// exits.
pub fn start(body: Vec<u8>) -> String {
    start_with_options(body, ImageServerOptions::default())
}

/// Like `start` but allows customizing the advertised metadata.
pub fn start_with_options(body: Vec<u8>, opts: ImageServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, &body, opts));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: std::net::TcpStream, body: &[u8], opts: ImageServerOptions) {
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
    let method = request.split_whitespace().next().unwrap_or("");

    let content_type_header = match opts.content_type {
        Some(ct) => format!("Content-Type: {}\r\n", ct),
        None => String::new(),
    };

    if method.eq_ignore_ascii_case("HEAD") {
        let declared = opts.declared_length.unwrap_or(body.len() as u64);
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\n{}\r\n",
            declared, content_type_header
        );
        let _ = stream.write_all(response.as_bytes());
        return;
    }
    if method.eq_ignore_ascii_case("GET") {
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\n{}\r\n",
            body.len(),
            content_type_header
        );
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.write_all(body);
        return;
    }
    let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\n\r\n");
}
