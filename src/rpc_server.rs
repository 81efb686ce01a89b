//! NexNav RPC Server — JSON-RPC over stdin/stdout for the web frontend bridge.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"site.create", "params":{"url":"...","token":"..."}}
//! Response: {"id":1, "result":{"success":true,...}}
//!           or {"id":1, "result":{"success":false,"message":"...","status":409}}

use std::io::{self, BufRead, Write};
use std::sync::Mutex;
use std::time::Instant;

use nexnav::app::{App, DEFAULT_ADMIN_PASSWORD};
use nexnav::rpc_handler::dispatch;

use serde_json::{json, Value};

/// Simple rate limiter: max requests per second.
struct RateLimiter {
    window_start: Instant,
    request_count: u32,
    max_per_second: u32,
}

impl RateLimiter {
    fn new(max_per_second: u32) -> Self {
        Self { window_start: Instant::now(), request_count: 0, max_per_second }
    }

    /// Returns true if the request is allowed, false if rate-limited.
    fn check(&mut self) -> bool {
        let elapsed = self.window_start.elapsed();
        if elapsed.as_secs() >= 1 {
            self.window_start = Instant::now();
            self.request_count = 0;
        }
        self.request_count += 1;
        self.request_count <= self.max_per_second
    }
}

fn main() {
    let db_path = if let Ok(dir) = std::env::var("NEXNAV_DATA_DIR") {
        std::path::PathBuf::from(dir).join("nexnav.db")
    } else if let Ok(exe) = std::env::current_exe() {
        exe.parent().unwrap_or(std::path::Path::new(".")).join("nexnav.db")
    } else {
        std::path::PathBuf::from("nexnav.db")
    };
    let admin_password =
        std::env::var("NEXNAV_ADMIN_PASSWORD").unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string());

    let app = Mutex::new(
        App::new(db_path.to_str().unwrap_or("nexnav.db"), &admin_password)
            .expect("Failed to initialize NexNav"),
    );

    // Signal ready
    let ready = json!({"event":"ready","version":env!("CARGO_PKG_VERSION")});
    println!("{}", ready);
    io::stdout().flush().unwrap();

    // Max 200 RPC requests per second to keep a runaway frontend in check
    let mut rate_limiter = RateLimiter::new(200);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() { continue; }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                let err = json!({"id":null,"error":format!("parse error: {}",e)});
                println!("{}", err);
                io::stdout().flush().unwrap();
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);

        if !rate_limiter.check() {
            let response = json!({"id": id, "error": "rate limit exceeded"});
            println!("{}", response);
            io::stdout().flush().unwrap();
            continue;
        }

        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        let result = dispatch(&app, method, &params);

        let response = json!({"id": id, "result": result});
        println!("{}", response);
        io::stdout().flush().unwrap();
    }
}
