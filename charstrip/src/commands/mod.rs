//! Commands module - CLI command implementations.

mod strip;

pub use strip::{run_strip, StripOptions};
