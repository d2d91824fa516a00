//! Test-support helpers
//!
//! Fluent assertions over built nodes plus deterministic identifier sources,
//! used by this crate's integration tests and exported for downstream test
//! code.

pub mod id_fixtures;
pub mod node_assertions;

pub use id_fixtures::SequentialIdSource;
pub use node_assertions::{assert_node, NodeAssertion};
