//! Compact per-axis binning specifications
//!
//! Binning along each projection axis is given as a short sequence of floats
//! in the Horace style:
//!
//! | Values              | Interpretation                                   |
//! | ------------------- | ------------------------------------------------ |
//! | `[step]`            | keep the axis extent, bin with the given step    |
//! | `[min, max]`        | integrate the range into a single bin            |
//! | `[min, step, max]`  | explicit range and step                          |
//!
//! Specs are resolved independently per axis against that axis's natural
//! extent and never read each other.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An unresolved per-axis binning specification
///
/// Holds the raw 0-3 float values as supplied by the user. Nothing is
/// validated until [BinSpec::resolve] is called with the axis extent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BinSpec(Vec<f64>);

impl BinSpec {
    /// An empty specification, resolving to [Error::InvalidBinSpec]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// The raw values as supplied
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Resolve the specification against an axis extent
    ///
    /// ```rust
    /// # use mdtools_slice::BinSpec;
    /// // A 0.5 step over [-5, 5] gives 20 bins over the full extent
    /// let binning = BinSpec::from(vec![0.5]).resolve(-5.0, 5.0).unwrap();
    /// assert_eq!((binning.min, binning.max), (-5.0, 5.0));
    /// assert_eq!(binning.bin_count(), 20);
    ///
    /// // A [min, max] pair integrates the range into one bin
    /// let binning = BinSpec::from(vec![-1.0, 1.0]).resolve(-5.0, 5.0).unwrap();
    /// assert_eq!((binning.min, binning.max), (-1.0, 1.0));
    /// assert_eq!(binning.bin_count(), 1);
    /// ```
    ///
    /// Empty or over-long specs, degenerate ranges, and bin counts below one
    /// are all hard errors; a resolved [Binning] always satisfies
    /// `min < max` and `bins >= 1`.
    pub fn resolve(&self, axis_min: f64, axis_max: f64) -> Result<Binning> {
        let mut min = axis_min;
        let mut max = axis_max;

        let bins = match *self.0.as_slice() {
            [step] => (max - min) / step,
            [lo, hi] => {
                min = lo;
                max = hi;
                1.0
            }
            // note: the step is applied over the axis extent, not [lo, hi]
            [lo, step, hi] => {
                let bins = (max - min) / step;
                min = lo;
                max = hi;
                bins
            }
            _ => return Err(Error::InvalidBinSpec(self.0.len())),
        };

        if min >= max {
            return Err(Error::DegenerateRange { min, max });
        }
        if bins < 1.0 {
            return Err(Error::TooFewBins(bins));
        }

        Ok(Binning { min, max, bins })
    }
}

impl From<Vec<f64>> for BinSpec {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl From<&[f64]> for BinSpec {
    fn from(values: &[f64]) -> Self {
        Self(values.to_vec())
    }
}

/// A resolved binning for one output axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Binning {
    /// Lower edge of the binned range
    pub min: f64,
    /// Upper edge of the binned range
    pub max: f64,
    /// Number of bins as the raw step division result
    ///
    /// Deliberately not rounded. A step that does not divide the extent
    /// evenly produces a fractional count here, which downstream consumers
    /// truncate toward zero via [Binning::bin_count]. This matches the
    /// historical behaviour, so a 0.3 step over a [0, 1] axis gives 3 bins,
    /// not 4.
    pub bins: f64,
}

impl Binning {
    /// Integer bin count, truncated toward zero
    pub fn bin_count(&self) -> usize {
        self.bins as usize
    }
}
