//! Handler for the fact endpoint.
//!
//! Asks the fact source for one fact under the configured deadline and wraps
//! the result in a [`ResponseEnvelope`]. Upstream failures are logged and
//! replaced with [`FALLBACK_FACT`]; the response is 200 either way.

use axum::{extract::State, Extension, Json};
use tracing::instrument;

use crate::config::FALLBACK_FACT;
use crate::envelope::{ResponseEnvelope, UserInfo};
use crate::middleware::RequestId;
use crate::state::AppState;

/// Resolve the fact for one request, absorbing any upstream failure.
pub async fn resolve_fact(state: &AppState, request_id: &RequestId) -> String {
    let deadline = state.config.upstream.timeout();

    match state.facts.fetch_fact(deadline).await {
        Ok(payload) => payload.fact,
        Err(e) => {
            tracing::warn!(
                request_id = %request_id.0,
                error = %e,
                kind = %e.kind(),
                "Error fetching cat fact, serving fallback"
            );
            FALLBACK_FACT.to_string()
        }
    }
}

/// `GET /fact` (and its `/me` alias).
#[instrument(name = "fact::show", skip(state, request_id))]
pub async fn show(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Json<ResponseEnvelope> {
    let fact = resolve_fact(&state, &request_id).await;

    // Stamp after the upstream call so the timestamp reflects response construction
    let envelope = ResponseEnvelope::new(UserInfo::from(&state.config.user), fact);
    Json(envelope)
}
