//! Minimal HTTP/1.1 server for download integration tests.
//!
//! Serves a single static body to every GET. Can lie about Content-Length
//! to simulate a connection dropped mid-transfer, or answer with an error
//! status.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy)]
pub struct ServerOptions {
    /// Status line code for every response.
    pub status: u32,
    /// If set, advertise this Content-Length instead of the body length
    /// (larger value simulates a truncated transfer).
    pub advertised_len: Option<u64>,
    /// If non-zero, send the body in chunks of this size with
    /// `trickle_delay_ms` between them, keeping the transfer in flight long
    /// enough for a client to be interrupted mid-stream.
    pub trickle_chunk: usize,
    pub trickle_delay_ms: u64,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            status: 200,
            advertised_len: None,
            trickle_chunk: 0,
            trickle_delay_ms: 0,
        }
    }
}

/// Starts a server in a background thread serving `body`. Returns the base
/// URL (e.g. "http://127.0.0.1:12345/"). Runs until the process exits.
pub fn start(body: Vec<u8>) -> String {
    start_with_options(body, ServerOptions::default())
}

pub fn start_with_options(body: Vec<u8>, opts: ServerOptions) -> String {
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

fn handle(mut stream: std::net::TcpStream, body: &[u8], opts: ServerOptions) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));

    // Drain the request head; the path is irrelevant.
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }

    if opts.status != 200 {
        let head = format!(
            "HTTP/1.1 {} Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            opts.status
        );
        let _ = stream.write_all(head.as_bytes());
        return;
    }

    let advertised = opts.advertised_len.unwrap_or(body.len() as u64);
    let head = format!(
        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        advertised
    );
    let _ = stream.write_all(head.as_bytes());
    if opts.trickle_chunk > 0 {
        for chunk in body.chunks(opts.trickle_chunk) {
            if stream.write_all(chunk).is_err() {
                return; // client hung up (e.g. aborted transfer)
            }
            let _ = stream.flush();
            thread::sleep(std::time::Duration::from_millis(opts.trickle_delay_ms));
        }
    } else {
        let _ = stream.write_all(body);
    }
    // Closing with fewer bytes than advertised makes curl report a partial
    // transfer, which is exactly what the truncation tests want.
}
