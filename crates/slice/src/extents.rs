//! Rotated bounding extents for projected datasets
//!
//! Transforming an axis-aligned HKL box into an oblique basis rotates it out
//! of alignment, so the output grid needs the axis-aligned bounding box of
//! the transformed corners. That over-approximates the true rotated hull,
//! which is exactly the conservative extent a rectangular rebin grid needs.

use itertools::iproduct;
use nalgebra::RowVector3;

use mdtools_utils::SliceExt;

use crate::error::{Error, Result};
use crate::projection::Basis;
use crate::workspace::MdDataset;

/// An inclusive `[min, max]` pair along one output dimension
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl Extent {
    /// Full width of the extent
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// True when `other` lies entirely within this extent
    pub fn contains(&self, other: &Extent) -> bool {
        self.min <= other.min && other.max <= self.max
    }
}

/// Bounding extents of a dataset in the projection frame
///
/// Builds the basis matrix `M = [u; v; w]`, inverts it, and pushes all 8
/// corners of the dataset's H, K, L bounding box through the inverse. Each
/// output axis takes the min/max of the transformed corner coordinates.
/// Dimensions beyond the first three are not part of the projection and
/// their extents pass through unchanged.
///
/// Operates on metadata only, so cost is independent of dataset size.
///
/// ```rust
/// # use mdtools_slice::{calculate_extents, Basis, MdDataset, MdDimension};
/// let dataset = MdDataset::hkl(vec![
///     MdDimension::new("H", "r.l.u.", -5.0, 5.0),
///     MdDimension::new("K", "r.l.u.", -3.0, 3.0),
///     MdDimension::new("L", "r.l.u.", -1.0, 1.0),
/// ]);
///
/// // The identity basis reproduces the dataset's own extents
/// let extents = calculate_extents(&Basis::identity(), &dataset).unwrap();
/// assert_eq!((extents[1].min, extents[1].max), (-3.0, 3.0));
/// ```
///
/// Fails with [Error::SingularProjection] when the basis vectors are not
/// linearly independent, and [Error::UnsupportedDimensionality] when the
/// dataset has fewer than the 3 crystallographic dimensions.
pub fn calculate_extents(basis: &Basis, dataset: &MdDataset) -> Result<Vec<Extent>> {
    if dataset.ndims() < 3 {
        return Err(Error::UnsupportedDimensionality(dataset.ndims()));
    }

    let minv = basis
        .matrix()
        .try_inverse()
        .ok_or(Error::SingularProjection)?;

    // corners transform as row vectors: c' = c * M^-1
    let corners: Vec<RowVector3<f64>> = iproduct!(
        [dataset.dimensions[0].min, dataset.dimensions[0].max],
        [dataset.dimensions[1].min, dataset.dimensions[1].max],
        [dataset.dimensions[2].min, dataset.dimensions[2].max]
    )
    .map(|(h, k, l)| RowVector3::new(h, k, l) * minv)
    .collect();

    let mut extents = Vec::with_capacity(dataset.ndims());
    for axis in 0..3 {
        let coordinates = corners.iter().map(|c| c[axis]).collect::<Vec<f64>>();
        let (min, max) = coordinates.try_min_max()?;
        extents.push(Extent { min, max });
    }

    // non-crystallographic dimensions pass through
    for dimension in &dataset.dimensions[3..] {
        extents.push(Extent {
            min: dimension.min,
            max: dimension.max,
        });
    }

    Ok(extents)
}
