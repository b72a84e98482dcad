//! Shared building blocks for the directory workspace: wire types used by
//! more than one crate and process-level utilities such as logging setup.

pub mod types;
pub mod utils;
