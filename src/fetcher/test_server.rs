// src/fetcher/test_server.rs
// =============================================================================
// Minimal HTTP/1.1 server for tests.
//
// Serves canned (status, body) pairs by request path and records every
// request it sees, so tests can assert which URLs were (not) fetched.
// Unknown paths get a 404. One connection per request (Connection: close).
// =============================================================================

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

type Routes = Arc<Mutex<HashMap<String, (u16, Vec<u8>)>>>;
type Log = Arc<Mutex<Vec<RecordedRequest>>>;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub user_agent: Option<String>,
}

pub struct TestServer {
    base_url: String,
    routes: Routes,
    log: Log,
}

impl TestServer {
    /// Binds to a random local port and serves until the test process exits
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().expect("local addr").port();

        let routes: Routes = Arc::default();
        let log: Log = Arc::default();

        let (thread_routes, thread_log) = (Arc::clone(&routes), Arc::clone(&log));
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&thread_routes);
                let log = Arc::clone(&thread_log);
                thread::spawn(move || handle(stream, &routes, &log));
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            routes,
            log,
        }
    }

    /// Full URL for a path on this server, e.g. url("/a.json")
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Registers (or replaces) the response for a path
    pub fn route(&self, path: &str, status: u16, body: impl Into<Vec<u8>>) {
        self.routes
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.into()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.log.lock().unwrap().clone()
    }

    pub fn requested_paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }
}

fn handle(mut stream: TcpStream, routes: &Routes, log: &Log) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut head = Vec::new();
    let mut buf = [0u8; 4096];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }

    let request = String::from_utf8_lossy(&head);
    let mut lines = request.lines();
    let path = lines
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    let user_agent = lines.find_map(|line| {
        let (name, value) = line.split_once(':')?;
        name.eq_ignore_ascii_case("user-agent")
            .then(|| value.trim().to_string())
    });

    // Logged before responding so the client never sees a response whose
    // request is missing from the log.
    log.lock().unwrap().push(RecordedRequest {
        path: path.clone(),
        user_agent,
    });

    let (status, body) = routes
        .lock()
        .unwrap()
        .get(&path)
        .cloned()
        .unwrap_or_else(|| (404, b"Not Found".to_vec()));

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason(status),
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(&body);
    let _ = stream.flush();
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
