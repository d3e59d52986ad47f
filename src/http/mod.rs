//! HTTP hosting layer for deployed fixtures.
//!
//! Each fixture is one Axum server exposing a single endpoint that
//! accepts any method and any path, in keeping with the verification
//! contract: the verifier only cares about the response body, not the
//! route shape.

mod routes;

pub use routes::{build_router, run_fixture_server, FixtureState};
