//! User projection tables and basis derivation
//!
//! A projection defines the new `(u, v, w)` frame a dataset is cut along. It
//! arrives either as a saved projection table or not at all, in which case
//! the standard crystallographic axes are used.
//!
//! Tables mirror the host framework's saved projections: a three-row table
//! (one row per axis) whose column set must be exactly one of
//!
//! - `u, v, type`
//! - `u, v, offsets, type`
//! - `u, v, w, offsets, type`
//!
//! A vector is read down a column, so row `i` holds the `i`-th coordinate of
//! every vector. When no `w` column is given, `w = v x u`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use mdtools_utils::f;

use crate::error::{Error, Result};

/// A three-row user projection table
///
/// The typed columns enforce most of the schema; [ProjectionTable::validate]
/// checks the rest. Serialisable so saved projections can be written and
/// read back as JSON, see [read_projection_file].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectionTable {
    /// Coordinates of `u`, one per row
    pub u: Vec<f64>,
    /// Coordinates of `v`, one per row
    pub v: Vec<f64>,
    /// Coordinates of `w`, omitted to auto-generate `w = v x u`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<Vec<f64>>,
    /// Per-axis offsets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offsets: Option<Vec<f64>>,
    /// Per-axis unit type, e.g. "r" for reciprocal lattice units
    #[serde(rename = "type")]
    pub types: Vec<String>,
}

impl ProjectionTable {
    /// Names of the columns present, in schema order
    pub fn column_names(&self) -> Vec<&'static str> {
        let mut names = vec!["u", "v"];
        if self.w.is_some() {
            names.push("w");
        }
        if self.offsets.is_some() {
            names.push("offsets");
        }
        names.push("type");
        names
    }

    /// Check the row count and column set
    ///
    /// Every column must hold exactly 3 rows, and the column set must be one
    /// of the accepted schemas. In practice the typed struct leaves a single
    /// off-schema combination to reject, a `w` column without `offsets`.
    pub fn validate(&self) -> Result<()> {
        if self.w.is_some() && self.offsets.is_none() {
            return Err(Error::MalformedProjection(f!(
                "column names received: {}",
                self.column_names().join(", ")
            )));
        }

        let mut row_counts = vec![self.u.len(), self.v.len(), self.types.len()];
        if let Some(w) = &self.w {
            row_counts.push(w.len());
        }
        if let Some(offsets) = &self.offsets {
            row_counts.push(offsets.len());
        }

        if let Some(&found) = row_counts.iter().find(|&&n| n != 3) {
            return Err(Error::MalformedProjection(f!(
                "expects 3 rows, found {found}"
            )));
        }

        Ok(())
    }
}

/// Read a saved projection table from a JSON file
///
/// Returns a validated [ProjectionTable], so a table from file is always
/// safe to hand to [Basis::from_table].
///
/// Schema problems report as [Error::MalformedProjection] whether the column
/// set fails deserialisation or the row-count check, so the file path raises
/// the same taxonomy as an in-memory table. [Error::JSONError] is reserved
/// for files that are not well-formed JSON at all.
///
/// ```rust, no_run
/// # use mdtools_slice::read_projection_file;
/// let table = read_projection_file("./data/projection_110.json").unwrap();
/// ```
pub fn read_projection_file<P: AsRef<Path>>(path: P) -> Result<ProjectionTable> {
    let file = File::open(path)?;
    let table: ProjectionTable = match serde_json::from_reader(BufReader::new(file)) {
        Ok(table) => table,
        // well-formed JSON with off-schema columns is a projection problem,
        // not a JSON problem
        Err(e) if e.classify() == serde_json::error::Category::Data => {
            return Err(Error::MalformedProjection(f!("{e}")));
        }
        Err(e) => return Err(e.into()),
    };
    table.validate()?;
    Ok(table)
}

/// The `(u, v, w)` projection basis over the H, K, L axes
///
/// The basis may be oblique but the three vectors must remain linearly
/// independent for the extent transform to exist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    /// First projection axis
    pub u: Vector3<f64>,
    /// Second projection axis
    pub v: Vector3<f64>,
    /// Third projection axis
    pub w: Vector3<f64>,
}

impl Basis {
    /// The standard crystallographic axes
    pub fn identity() -> Self {
        Self {
            u: Vector3::x(),
            v: Vector3::y(),
            w: Vector3::z(),
        }
    }

    /// Derive the basis from an optional projection table
    ///
    /// An absent table is the designed default and gives the identity basis.
    /// A present table is validated, `u` and `v` are read from their
    /// columns, and `w` is read or generated as `v x u`.
    ///
    /// ```rust
    /// # use mdtools_slice::Basis;
    /// # use nalgebra::Vector3;
    /// let basis = Basis::from_table(None).unwrap();
    /// assert_eq!(basis.w, Vector3::new(0.0, 0.0, 1.0));
    /// ```
    pub fn from_table(table: Option<&ProjectionTable>) -> Result<Self> {
        let Some(table) = table else {
            return Ok(Self::identity());
        };
        table.validate()?;

        let u = Vector3::from_column_slice(&table.u);
        let v = Vector3::from_column_slice(&table.v);
        let w = match &table.w {
            Some(w) => Vector3::from_column_slice(w),
            None => v.cross(&u),
        };

        Ok(Self { u, v, w })
    }

    /// The basis vectors in axis order
    pub fn vectors(&self) -> [Vector3<f64>; 3] {
        [self.u, self.v, self.w]
    }

    /// The 3x3 basis matrix with `u`, `v`, `w` as rows
    pub fn matrix(&self) -> Matrix3<f64> {
        Matrix3::from_rows(&[self.u.transpose(), self.v.transpose(), self.w.transpose()])
    }
}
