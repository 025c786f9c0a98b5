use std::future::Future;
use std::time::Instant;

use axum::http::{Method, StatusCode};
use tracing::{error, info};

use crate::observability;

/// A failure the observer can report on: an optional HTTP status and an
/// optional human-readable message. Absent values fall back to 500 and
/// "Unknown error" in the log line.
pub trait ObservedFailure {
    fn status(&self) -> Option<StatusCode> {
        None
    }

    fn message(&self) -> Option<String> {
        None
    }
}

/// Wraps one inbound operation with symmetric entry/exit instrumentation.
///
/// Entry emits `--> METHOD PATH`, with a ` Body: {...}` fragment only when
/// the payload is a non-empty JSON object. Exit emits
/// `<-- METHOD PATH STATUS Nms`, at error severity with the failure message
/// appended when the operation fails. The wrapped result or failure passes
/// through unchanged; the observer never transforms either channel.
pub struct RequestObserver {
    method: Method,
    path: String,
    started: Instant,
}

impl RequestObserver {
    pub fn start(method: Method, path: impl Into<String>, payload: Option<&serde_json::Value>) -> Self {
        let path = path.into();
        let body = payload
            .filter(|v| v.as_object().is_some_and(|m| !m.is_empty()))
            .map(|v| format!(" Body: {v}"))
            .unwrap_or_default();
        info!(target: "http", "--> {method} {path}{body}");
        observability::REQUESTS_TOTAL.inc();
        Self { method, path, started: Instant::now() }
    }

    pub async fn observe<T, E, F>(self, success_status: StatusCode, op: F) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
        E: ObservedFailure,
    {
        let result = op.await;
        let elapsed = self.started.elapsed();
        observability::REQUEST_DURATION.observe(elapsed.as_secs_f64());
        let elapsed_ms = elapsed.as_millis();
        match &result {
            Ok(_) => {
                info!(
                    target: "http",
                    "<-- {} {} {} {}ms",
                    self.method,
                    self.path,
                    success_status.as_u16(),
                    elapsed_ms
                );
            }
            Err(e) => {
                let status = e.status().map(|s| s.as_u16()).unwrap_or(500);
                let message = e.message().unwrap_or_else(|| "Unknown error".to_string());
                error!(
                    target: "http",
                    "<-- {} {} {} {}ms - {}",
                    self.method,
                    self.path,
                    status,
                    elapsed_ms,
                    message
                );
            }
        }
        result
    }
}
