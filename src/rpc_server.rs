//! RPC server — JSON over stdin/stdout for desktop-shell integration.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"bookmark.create", "params":{"url":"...","title":"..."}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":{"kind":"...","message":"..."}}
//!
//! Logs go to stderr so stdout stays a clean protocol stream.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;
use std::time::Instant;

use linkstash::app::App;
use linkstash::rpc_handler::handle_method;

use serde_json::{json, Value};

/// Simple rate limiter: max requests per second across all methods.
struct RateLimiter {
    window_start: Instant,
    request_count: u32,
    max_per_second: u32,
}

impl RateLimiter {
    fn new(max_per_second: u32) -> Self {
        Self {
            window_start: Instant::now(),
            request_count: 0,
            max_per_second,
        }
    }

    /// Returns true if the request is allowed, false if rate-limited.
    fn check(&mut self) -> bool {
        if self.window_start.elapsed().as_secs() >= 1 {
            self.window_start = Instant::now();
            self.request_count = 0;
        }
        self.request_count += 1;
        self.request_count <= self.max_per_second
    }
}

fn main() {
    linkstash::logging::init();

    // Absolute DB path: prefer LINKSTASH_DATA_DIR, fall back to the
    // executable's directory.
    let db_path = if let Ok(dir) = std::env::var("LINKSTASH_DATA_DIR") {
        std::path::PathBuf::from(dir).join("linkstash.db")
    } else if let Ok(exe) = std::env::current_exe() {
        exe.parent()
            .unwrap_or(std::path::Path::new("."))
            .join("linkstash.db")
    } else {
        std::path::PathBuf::from("linkstash.db")
    };

    let app = Mutex::new(
        App::new(db_path.to_str().unwrap_or("linkstash.db"))
            .expect("Failed to initialize linkstash"),
    );
    tracing::info!(path = %db_path.display(), "database opened");

    // Signal ready to the host process
    let ready = json!({"event":"ready","version":env!("CARGO_PKG_VERSION")});
    println!("{}", ready);
    io::stdout().flush().unwrap();

    let mut rate_limiter = RateLimiter::new(200);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                let err = json!({"id":null,"error":{"kind":"validation","message":format!("parse error: {}", e)}});
                println!("{}", err);
                io::stdout().flush().unwrap();
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);

        if !rate_limiter.check() {
            let response =
                json!({"id": id, "error": {"kind":"validation","message":"rate limit exceeded"}});
            println!("{}", response);
            io::stdout().flush().unwrap();
            continue;
        }

        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        let response = match handle_method(&app, method, &params) {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => {
                tracing::debug!(method, kind = err.kind(), "request failed: {}", err);
                json!({"id": id, "error": {"kind": err.kind(), "message": err.to_string()}})
            }
        };
        println!("{}", response);
        io::stdout().flush().unwrap();
    }
}
