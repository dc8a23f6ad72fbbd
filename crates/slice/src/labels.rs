//! Crystallographic axis labels for projected dimensions
//!
//! Each projection axis is described in terms of a fixed crystallographic
//! name: `zeta` for the first axis, `eta` for the second, `xi` for the
//! third. Components of the basis vector are rendered against that name, so
//! `u = (0.5, 0, 0)` labels as "0.50zeta".

use nalgebra::Vector3;

use mdtools_utils::f;

use crate::projection::Basis;

/// Fixed crystallographic names for the three projection axes
pub const AXIS_NAMES: [&str; 3] = ["zeta", "eta", "xi"];

/// Display label for a single basis vector component
///
/// Unit components render as the bare axis name, negated with a leading `-`
/// where needed. Zero components render as plain "0", and anything else as
/// the value to two decimal places followed by the name.
///
/// ```rust
/// # use mdtools_slice::component_label;
/// assert_eq!(component_label(1.0, "zeta"), "zeta");
/// assert_eq!(component_label(-1.0, "zeta"), "-zeta");
/// assert_eq!(component_label(0.5, "zeta"), "0.50zeta");
/// assert_eq!(component_label(0.0, "zeta"), "0");
/// ```
pub fn component_label(value: f64, name: &str) -> String {
    if value.abs() == 1.0 {
        if value > 0.0 {
            name.to_string()
        } else {
            f!("-{name}")
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        f!("{value:.2}{name}")
    }
}

/// Display label for one projection axis
///
/// Joins the non-zero component labels of the basis vector, or "0" for a
/// vector with no non-zero components. The identity basis therefore labels
/// its axes as plain "zeta", "eta", "xi".
pub fn axis_label(vector: &Vector3<f64>, name: &str) -> String {
    let parts = vector
        .iter()
        .filter(|value| **value != 0.0)
        .map(|value| component_label(*value, name))
        .collect::<Vec<String>>();

    if parts.is_empty() {
        "0".to_string()
    } else {
        parts.join(", ")
    }
}

/// Labels for all three projection axes in order
///
/// ```rust
/// # use mdtools_slice::{projection_labels, Basis};
/// let labels = projection_labels(&Basis::identity());
/// assert_eq!(labels, ["zeta", "eta", "xi"]);
/// ```
pub fn projection_labels(basis: &Basis) -> [String; 3] {
    let [u, v, w] = basis.vectors();
    [
        axis_label(&u, AXIS_NAMES[0]),
        axis_label(&v, AXIS_NAMES[1]),
        axis_label(&w, AXIS_NAMES[2]),
    ]
}
