use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tracing::info;

use crate::config::FixtureConfig;
use crate::report::{self, VerificationResponse};
use crate::responder::FixtureVariant;

/// Shared state for the fixture's single handler.
#[derive(Clone)]
pub struct FixtureState {
    variant: Arc<FixtureVariant>,
    config: Arc<FixtureConfig>,
}

impl FixtureState {
    pub fn new(variant: FixtureVariant, config: FixtureConfig) -> Self {
        Self {
            variant: Arc::new(variant),
            config: Arc::new(config),
        }
    }
}

/// Build the Axum router: one catch-all endpoint, any method.
pub fn build_router(state: FixtureState) -> Router {
    Router::new().fallback(respond).with_state(state)
}

/// Run the fixture server loop until the listener is torn down.
pub async fn run_fixture_server(state: FixtureState, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("binding fixture HTTP listener")?;
    info!("fixture server listening on {}", addr);
    let router = build_router(state);
    axum::serve(listener, router)
        .await
        .context("serving fixture HTTP router")?;
    Ok(())
}

/// Single-request handler: verify once, always answer.
pub async fn respond(State(state): State<FixtureState>) -> Response {
    let result = state.variant.respond(&state.config);
    into_http(report::finalize(result))
}

fn into_http(verification: VerificationResponse) -> Response {
    // Success and failure are both 200 with distinguishable bodies;
    // the verifier compares text, not status codes.
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, verification.content_type)],
        verification.body,
    )
        .into_response()
}
