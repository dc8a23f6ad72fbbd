//! Projection-based slicing of multidimensional reciprocal-space data
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod binning;
mod error;
mod extents;
mod labels;
mod projection;
mod rebin;
mod slicer;
mod workspace;

#[doc(inline)]
pub use slicer::CutMd;

#[doc(inline)]
pub use workspace::{CoordinateSystem, MdDataset, MdDimension};

#[doc(inline)]
pub use binning::{BinSpec, Binning};

#[doc(inline)]
pub use projection::{read_projection_file, Basis, ProjectionTable};

#[doc(inline)]
pub use extents::{calculate_extents, Extent};

#[doc(inline)]
pub use labels::{axis_label, component_label, projection_labels, AXIS_NAMES};

#[doc(inline)]
pub use rebin::{BasisVector, Rebin, RebinMode, RebinRequest};

#[doc(inline)]
pub use error::{Error, Result};
