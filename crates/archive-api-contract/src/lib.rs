//! Argo archived-workflows REST API contract types
//!
//! This crate defines the wire types returned by the workflow archive
//! endpoints together with the filter shapes used to query them. These
//! types are shared between the REST client, the mock client and the CLI.

pub mod error;
pub mod filter;
pub mod types;

pub use error::*;
pub use filter::*;
pub use types::*;
