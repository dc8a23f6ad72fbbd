//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! For example, reducing a slice of floats to its minimum and maximum is
//! useful everywhere, and the primitives do not implement `Ord`.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod error;
mod slice_ext;

// Flatten
pub use error::{Error, Result};
pub use slice_ext::SliceExt;
