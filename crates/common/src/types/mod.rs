use chrono::{DateTime, Utc};
use serde::Serialize;

/// Liveness payload returned by `GET /health`.
#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

impl Health {
    pub fn ok() -> Self {
        Self { status: "ok", timestamp: Utc::now() }
    }
}
