//! A single bicubic patch over the unit square.
//!
//! ```rust
//! use bicubic::{CellInterpolator, Interp2D, Transform};
//!
//! // values[x][y], where values[0][0] is the sample at (-1, -1)
//! let values = [
//!     [1.0_f64, 2.0, 4.0, 8.0],
//!     [2.0, 4.0, 8.0, 16.0],
//!     [3.0, 6.0, 12.0, 24.0],
//!     [4.0, 8.0, 16.0, 32.0],
//! ];
//! let cell = CellInterpolator::new(values, Transform::identity());
//!
//! assert_eq!(cell.eval_one(0.0, 0.0).unwrap(), 4.0); // values[1][1]
//! assert!(cell.eval_one(0.5, 0.5).is_ok());
//! assert!(cell.eval_one(-0.1, 0.5).is_err());
//! ```
use num_traits::Float;

use crate::coefficients::{
    bicubic_coefficients, eval_coefficients, eval_coefficients_gradient, Coefficients,
};
use crate::error::BicubicError;
use crate::options::Transform;
use crate::{to_f64, Interp2D};

/// A bicubic patch fitted to a 4x4 neighborhood, valid where the transformed
/// query point lies in `[0, 1] x [0, 1]` (bounds inclusive).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellInterpolator<T> {
    coefs: Coefficients<T>,
    transform: Transform<T>,
}

impl<T: Float> CellInterpolator<T> {
    /// Fit a patch to `values[x][y]`, where `values[1][1]` lands on the local
    /// origin and `values[2][2]` on `(1, 1)`.
    pub fn new(values: [[T; 4]; 4], transform: Transform<T>) -> Self {
        Self {
            coefs: bicubic_coefficients(&values),
            transform,
        }
    }

    /// Fit a patch to a row-of-rows neighborhood, checking that it is 4x4.
    ///
    /// # Errors
    /// * If there are not exactly four rows of four samples
    pub fn try_from_rows<R: AsRef<[T]>>(
        rows: &[R],
        transform: Transform<T>,
    ) -> Result<Self, BicubicError> {
        let mut values = [[T::zero(); 4]; 4];
        if rows.len() != 4 {
            let width = rows.first().map_or(0, |r| r.as_ref().len());
            return Err(BicubicError::ShapeMismatch {
                actual: (rows.len(), width),
            });
        }
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != 4 {
                return Err(BicubicError::ShapeMismatch {
                    actual: (rows.len(), row.len()),
                });
            }
            values[i].copy_from_slice(row);
        }

        Ok(Self::new(values, transform))
    }

    pub fn coefficients(&self) -> &Coefficients<T> {
        &self.coefs
    }

    pub fn transform(&self) -> &Transform<T> {
        &self.transform
    }

    /// Value and partial derivatives `[f, df/dx, df/dy]` at a point, with
    /// derivatives taken with respect to the caller's coordinates.
    ///
    /// # Errors
    /// * If the transformed point is outside the unit square
    pub fn eval_gradient(&self, x: T, y: T) -> Result<[T; 3], BicubicError> {
        let (x, y) = self.local(x, y)?;
        let [f, dfdx, dfdy] = eval_coefficients_gradient(&self.coefs, x, y);
        Ok([
            f,
            dfdx * self.transform.scale_x,
            dfdy * self.transform.scale_y,
        ])
    }

    /// Transform a point and check it against the unit square.
    #[inline]
    fn local(&self, x: T, y: T) -> Result<(T, T), BicubicError> {
        let (x, y) = self.transform.apply(x, y);
        let (zero, one) = (T::zero(), T::one());

        // Written so that NaN fails the check
        let inside = zero <= x && x <= one && zero <= y && y <= one;
        if !inside {
            return Err(BicubicError::OutOfDomain {
                x: to_f64(x),
                y: to_f64(y),
                x_min: 0.0,
                x_max: 1.0,
                y_min: 0.0,
                y_max: 1.0,
                hint: "",
            });
        }

        Ok((x, y))
    }
}

impl<T: Float> Interp2D<T> for CellInterpolator<T> {
    #[inline]
    fn eval_one(&self, x: T, y: T) -> Result<T, BicubicError> {
        let (x, y) = self.local(x, y)?;
        Ok(eval_coefficients(&self.coefs, x, y))
    }
}
