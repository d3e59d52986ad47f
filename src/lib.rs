// Deployment-fidelity fixture corpus.
//
// Minimal HTTP-serving fixtures that prove a deployment pipeline
// preserved files, local module graphs, pinned dependencies, and the
// runtime environment. The reusable core is the Fixture Responder:
// gather one verifiable fact about the deployed artifact and answer
// with it, or with a precise failure description, exactly once per
// request.

pub mod calc;
pub mod config;
pub mod env_snapshot;
pub mod error;
pub mod http;
pub mod inventory;
pub mod render;
pub mod report;
pub mod responder;

pub use config::FixtureConfig;
pub use error::FixtureError;
pub use report::{Outcome, VerificationResponse};
pub use responder::{FixtureVariant, SnapshotMode};
