//! catfact-relay: a small HTTP relay for cat facts.
//!
//! `GET /fact` fetches one fact from an upstream API and wraps it in a JSON
//! envelope with static identity fields and a fresh timestamp. Upstream
//! failures degrade the `fact` field to a fixed fallback; they never change the
//! HTTP status. `GET /health` is a liveness probe.

pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod upstream;

pub use config::AppConfig;
pub use envelope::ResponseEnvelope;
pub use error::UpstreamError;
pub use routes::create_router;
pub use state::AppState;
pub use upstream::{CatFactClient, FactPayload, FactSource};
