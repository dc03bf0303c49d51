//! Prelude module for monthcal crate.
//!
//! Re-exports the derive_more macros and tracing macros used across modules.

#[allow(unused_imports)]
pub use derive_more::Display;
#[allow(unused_imports)]
pub use tracing::{debug, trace};
