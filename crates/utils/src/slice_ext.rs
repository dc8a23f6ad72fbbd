use crate::error::{Error, Result};

/// Extends functionality for slices of float arrays
pub trait SliceExt<T> {
    /// Find the minimum value in float arrays
    ///
    /// Only provides the minimum value from a collection of valid numbers.
    /// Any NAN values, infinite values, or empty slices will return an error.
    ///
    /// ```rust
    /// # use mdtools_utils::SliceExt;
    /// # use mdtools_utils::Error;
    /// // Successful cases
    /// assert_eq!([1.1, 0.5, 2.2].try_min(), Ok(0.5));
    /// assert_eq!([1.1, f64::MIN, 2.2].try_min(), Ok(f64::MIN));
    ///
    /// // Error cases
    /// assert_eq!([1.1, f64::NAN, 2.2].try_min(), Err(Error::SliceContainsUndefinedValues));
    /// assert_eq!(Vec::<f64>::new().try_min(), Err(Error::SliceContainsNoValues));
    /// ```
    ///
    /// The float primitives do not implement `Ord` due to `NaN` being
    /// incomparable, so `min()` on a collection of floats is not implemented
    /// in the standard library.
    ///
    /// This extension uses `total_cmp` to always produce an ordering in
    /// accordance to the totalOrder predicate as defined in the IEEE 754
    /// (2008 revision) floating point standard.
    fn try_min(&self) -> Result<T>;

    /// Find the maximum value in float arrays
    ///
    /// Only provides the maximum value from a collection of valid numbers.
    /// Any NAN values, infinite values, or empty slices will return an error.
    ///
    /// ```rust
    /// # use mdtools_utils::SliceExt;
    /// # use mdtools_utils::Error;
    /// // Successful cases
    /// assert_eq!([1.1, 0.5, 2.2].try_max(), Ok(2.2));
    /// assert_eq!([1.1, f64::MAX, 2.2].try_max(), Ok(f64::MAX));
    ///
    /// // Error cases
    /// assert_eq!([1.1, f64::NAN, 2.2].try_max(), Err(Error::SliceContainsUndefinedValues));
    /// assert_eq!(Vec::<f64>::new().try_max(), Err(Error::SliceContainsNoValues));
    /// ```
    fn try_max(&self) -> Result<T>;

    /// Find both extremes of a float array in one pass
    ///
    /// ```rust
    /// # use mdtools_utils::SliceExt;
    /// assert_eq!([1.1, 0.5, 2.2].try_min_max(), Ok((0.5, 2.2)));
    /// ```
    fn try_min_max(&self) -> Result<(T, T)>;
}

impl SliceExt<f64> for [f64] {
    fn try_min(&self) -> Result<f64> {
        if self.iter().any(|v| !v.is_finite()) {
            return Err(Error::SliceContainsUndefinedValues);
        };

        self.iter()
            .min_by(|a, b| a.total_cmp(b))
            .copied()
            .ok_or(Error::SliceContainsNoValues)
    }

    fn try_max(&self) -> Result<f64> {
        if self.iter().any(|v| !v.is_finite()) {
            return Err(Error::SliceContainsUndefinedValues);
        };

        self.iter()
            .max_by(|a, b| a.total_cmp(b))
            .copied()
            .ok_or(Error::SliceContainsNoValues)
    }

    fn try_min_max(&self) -> Result<(f64, f64)> {
        Ok((self.try_min()?, self.try_max()?))
    }
}
