//! Delegation seam for downstream rebinning services
//!
//! The slicer computes metadata; the actual re-sampling of the data is the
//! host framework's job. Everything the binner needs is collected into a
//! [RebinRequest] and handed through the [Rebin] trait as a single blocking
//! call. No cancellation or partial-progress contract is defined here, that
//! belongs to the service behind the trait.

use mdtools_utils::f;

use crate::error::Result;
use crate::extents::Extent;

/// Output mode for the downstream rebin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebinMode {
    /// Histogrammed output with no pixel data (DND in Horace terminology)
    Histogram,
    /// Full event output retaining pixel data
    Event,
}

impl RebinMode {
    /// True for the no-pixel-data histogrammed mode
    pub fn is_histogram(&self) -> bool {
        *self == RebinMode::Histogram
    }
}

impl std::fmt::Display for RebinMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RebinMode::Histogram => write!(f, "histogram"),
            RebinMode::Event => write!(f, "event"),
        }
    }
}

/// One output axis of a rebin request
#[derive(Debug, Clone, PartialEq)]
pub struct BasisVector {
    /// Crystallographic display label
    pub label: String,
    /// Unit label carried over from the input dimension
    pub unit: String,
    /// Numeric direction in the original H, K, L frame
    pub direction: [f64; 3],
}

impl BasisVector {
    /// The `"{label}, {unit}, {x},{y},{z}"` description string binners expect
    ///
    /// ```rust
    /// # use mdtools_slice::BasisVector;
    /// let axis = BasisVector {
    ///     label: "zeta".to_string(),
    ///     unit: "r.l.u.".to_string(),
    ///     direction: [1.0, 0.0, 0.0],
    /// };
    /// assert_eq!(axis.description(), "zeta, r.l.u., 1,0,0");
    /// ```
    pub fn description(&self) -> String {
        let [x, y, z] = self.direction;
        f!("{}, {}, {},{},{}", self.label, self.unit, x, y, z)
    }
}

/// A fully resolved request for the downstream binner
///
/// All validation has already happened by the time one of these exists; the
/// extents, bins, and basis vectors are consistent with each other and with
/// the input dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct RebinRequest {
    /// Histogrammed or event output
    pub mode: RebinMode,
    /// One entry per crystallographic output axis
    pub basis_vectors: Vec<BasisVector>,
    /// `[min, max]` per output dimension
    pub extents: Vec<Extent>,
    /// Integer bin counts, fractional counts truncated toward zero
    pub bins: Vec<usize>,
    /// Basis vectors are handed over unnormalised
    pub normalize_basis_vectors: bool,
    /// The cut is never axis aligned, the basis vectors carry the geometry
    pub axis_aligned: bool,
}

impl RebinRequest {
    /// Extents as the flat `min0, max0, min1, max1, ...` sequence binners take
    pub fn flat_extents(&self) -> Vec<f64> {
        self.extents
            .iter()
            .flat_map(|extent| [extent.min, extent.max])
            .collect()
    }
}

/// A downstream rebinning service
///
/// Implemented over whatever binner the host framework provides, either
/// histogramming (BinMD-style) or event-preserving (SliceMD-style). The
/// request is one opaque blocking call returning exactly one output
/// workspace handle.
pub trait Rebin {
    /// Handle to the output workspace
    type Output;

    /// Perform the rebin described by `request`
    fn rebin(&mut self, request: RebinRequest) -> Result<Self::Output>;
}
