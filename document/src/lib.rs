//! Charter document viewer.
//!
//! Fetches the charter from its content-addressed gateway URL and tracks
//! load completion, so a front end can show a loading indicator until the
//! first successful load and a completion hook can fire exactly once.

pub mod error;
pub mod viewer;

pub use error::DocumentError;
pub use viewer::{DocumentViewer, LoadedDocument};
