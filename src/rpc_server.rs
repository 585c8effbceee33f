//! CozyTab RPC Server: JSON-RPC over stdin/stdout for a UI shell.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"tab.search", "params":{"query":"github.com"}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! Requests and clock ticks are handled one at a time on a single task.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info, warn};

use cozytab::app::App;
use cozytab::logging;
use cozytab::platform;
use cozytab::rpc_handler::handle_method;
use cozytab::services::clock::{ClockSnapshot, TICK_INTERVAL_MS};

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
        if self.window_start.elapsed().as_secs() >= 1 {
            self.window_start = Instant::now();
            self.request_count = 0;
        }
        self.request_count += 1;
        self.request_count <= self.max_per_second
    }
}

fn emit(value: &Value) {
    let mut stdout = io::stdout().lock();
    if writeln!(stdout, "{}", value).and_then(|_| stdout.flush()).is_err() {
        warn!("failed to write to stdout");
    }
}

fn open_app() -> App {
    let db_path = platform::resolve_db_path();
    if let Some(parent) = db_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            warn!(path = %parent.display(), error = %e, "failed to create data directory");
        }
    }
    match App::open(&db_path) {
        Ok(app) => app,
        Err(e) => {
            error!(path = %db_path.display(), error = %e, "failed to open database, state will not be saved");
            App::in_memory()
        }
    }
}

fn handle_line(app: &mut App, rate_limiter: &mut RateLimiter, line: &str) -> Value {
    let req: Value = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => return json!({"id": null, "error": format!("parse error: {}", e)}),
    };

    let id = req.get("id").cloned().unwrap_or(Value::Null);

    if !rate_limiter.check() {
        return json!({"id": id, "error": "rate limit exceeded"});
    }

    let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
    let params = req.get("params").cloned().unwrap_or(json!({}));

    match handle_method(app, method, &params) {
        Ok(val) => json!({"id": id, "result": val}),
        Err(err) => json!({"id": id, "error": err}),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init();

    let mut app = open_app();
    emit(&json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")}));
    info!("rpc server ready");

    let mut rate_limiter = RateLimiter::new(200);
    let mut ticker = interval(Duration::from_millis(TICK_INTERVAL_MS));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = ticker.tick() => app.tick(ClockSnapshot::now()),
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(l)) => l,
                    Ok(None) => break,
                    Err(e) => {
                        warn!(error = %e, "stdin read failed");
                        break;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }
                let response = handle_line(&mut app, &mut rate_limiter, &line);
                emit(&response);
            }
        }
    }

    info!("stdin closed, shutting down");
}
