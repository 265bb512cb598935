//! Shared utilities for the ratification client.

pub mod logging;

pub use logging::init_tracing;
