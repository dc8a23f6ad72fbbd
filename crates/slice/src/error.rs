//! Result and Error types for mdtools-slice

use crate::workspace::CoordinateSystem;

/// Type alias for Result<T, slice::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `mdtools-slice` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("failed serde JSON operation")]
    JSONError(#[from] serde_json::Error),

    #[error("failure in float slice reduction")]
    UtilsError(#[from] mdtools_utils::Error),

    #[error("binning parameter expects 1 to 3 values (found {0})")]
    InvalidBinSpec(usize),

    #[error("dimension min >= max (min {min:.2}, max {max:.2})")]
    DegenerateRange { min: f64, max: f64 },

    #[error("number of bins calculated to be < 1 (found {0})")]
    TooFewBins(f64),

    #[error("projection vectors u, v, w are not linearly independent")]
    SingularProjection,

    #[error("projection table schema is wrong ({0})")]
    MalformedProjection(String),

    #[error("dataset must be in reciprocal lattice dimensions (HKL), found {0}")]
    WrongCoordinateSystem(CoordinateSystem),

    #[error("basis vector generation requires the 3 crystallographic dimensions (dataset has {0})")]
    UnsupportedDimensionality(usize),
}
