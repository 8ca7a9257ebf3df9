//! Shared primitives for the islet insulin-processing toolkit.
//!
//! `islet-core` provides the foundation the other islet crates build on:
//!
//! - **Error types** — [`IsletError`] and [`Result`] for structured error handling

pub mod error;

pub use error::{IsletError, Result};
