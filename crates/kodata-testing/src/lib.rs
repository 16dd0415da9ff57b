//! Testing infrastructure for kodata integration tests.
//!
//! - `TestWorld`: an isolated site directory plus a configured CLI command
//! - `fixtures`: snapshot documents to publish into the site
//! - `assertions`: checks over the JSON output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
