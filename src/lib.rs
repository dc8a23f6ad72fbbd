//! `mdtools` is a semi-modular toolkit of libraries for slicing
//! multidimensional reciprocal-space data
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use mdtools_utils as utils;

#[cfg(feature = "slice")]
#[cfg_attr(docsrs, doc(cfg(feature = "slice")))]
#[doc(inline)]
pub use mdtools_slice as slice;
