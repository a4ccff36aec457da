//! Liveness handlers

pub async fn health() -> &'static str {
    "OK"
}

pub async fn ready() -> &'static str {
    "READY"
}
