//! Dataset metadata for multidimensional workspaces
//!
//! The host framework owns the data containers themselves. Slicing only ever
//! needs the shape of a dataset, so this module models the metadata surface:
//! the special coordinate system tag and the per-dimension extents.

use serde::{Deserialize, Serialize};

/// Special coordinate systems a dataset may be expressed in
///
/// Slicing requires [CoordinateSystem::Hkl]; the remaining variants exist so
/// that a dataset handed over in the wrong frame can be reported precisely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordinateSystem {
    /// No special frame defined
    None,
    /// Momentum transfer in the laboratory frame
    QLab,
    /// Momentum transfer in the sample frame
    QSample,
    /// Reciprocal lattice units
    Hkl,
}

impl CoordinateSystem {
    /// Full name i.e. 'Reciprocal lattice'
    pub fn long_name(&self) -> &str {
        match self {
            CoordinateSystem::None => "None",
            CoordinateSystem::QLab => "Q (lab frame)",
            CoordinateSystem::QSample => "Q (sample frame)",
            CoordinateSystem::Hkl => "Reciprocal lattice",
        }
    }

    /// Axis based name i.e. 'HKL'
    pub fn short_name(&self) -> &str {
        match self {
            CoordinateSystem::None => "none",
            CoordinateSystem::QLab => "QLab",
            CoordinateSystem::QSample => "QSample",
            CoordinateSystem::Hkl => "HKL",
        }
    }
}

impl std::fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// A single dimension of a multidimensional dataset
///
/// Extents are fixed for the duration of an operation; the slicer reads them
/// and never writes them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MdDimension {
    /// Dimension name, e.g. "H"
    pub name: String,
    /// Unit label, e.g. "r.l.u."
    pub unit: String,
    /// Lower extent
    pub min: f64,
    /// Upper extent
    pub max: f64,
}

impl MdDimension {
    /// Convenience constructor taking anything string-like for the names
    ///
    /// ```rust
    /// # use mdtools_slice::MdDimension;
    /// let h = MdDimension::new("H", "r.l.u.", -5.0, 5.0);
    /// assert_eq!(h.width(), 10.0);
    /// ```
    pub fn new<S: Into<String>>(name: S, unit: S, min: f64, max: f64) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            min,
            max,
        }
    }

    /// Full width of the dimension
    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// Metadata of an N-dimensional axis-aligned dataset
///
/// The first three dimensions are the crystallographic H, K, L axes in that
/// order. Any further dimensions (energy transfer, temperature, ...) are
/// carried through slicing operations untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MdDataset {
    /// Coordinate system the dataset is expressed in
    pub coordinate_system: CoordinateSystem,
    /// Ordered dimension metadata, H, K, L first
    pub dimensions: Vec<MdDimension>,
}

impl MdDataset {
    /// Initialise a dataset in an arbitrary coordinate system
    pub fn new(coordinate_system: CoordinateSystem, dimensions: Vec<MdDimension>) -> Self {
        Self {
            coordinate_system,
            dimensions,
        }
    }

    /// Initialise a reciprocal-lattice dataset
    ///
    /// ```rust
    /// # use mdtools_slice::{CoordinateSystem, MdDataset, MdDimension};
    /// let dataset = MdDataset::hkl(vec![
    ///     MdDimension::new("H", "r.l.u.", -5.0, 5.0),
    ///     MdDimension::new("K", "r.l.u.", -5.0, 5.0),
    ///     MdDimension::new("L", "r.l.u.", -5.0, 5.0),
    /// ]);
    ///
    /// assert_eq!(dataset.coordinate_system, CoordinateSystem::Hkl);
    /// assert_eq!(dataset.ndims(), 3);
    /// ```
    pub fn hkl(dimensions: Vec<MdDimension>) -> Self {
        Self::new(CoordinateSystem::Hkl, dimensions)
    }

    /// Number of dimensions in the dataset
    pub fn ndims(&self) -> usize {
        self.dimensions.len()
    }

    /// Dimension metadata by index, `None` when out of range
    pub fn dimension(&self, index: usize) -> Option<&MdDimension> {
        self.dimensions.get(index)
    }
}
