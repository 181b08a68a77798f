//! Bicubic interpolation over 2D sample grids, no-std compatible (with `alloc`).
//!
//! Values between samples come from local bicubic patches, each fitted in closed
//! form to a 4x4 neighborhood of samples with centered-difference slopes. Adjacent
//! patches share edge values and first derivatives, so the interpolant is C1
//! across cell boundaries. Second derivatives are not continuous.
//!
//! | Interpolator                     | Domain                                   |
//! |----------------------------------|------------------------------------------|
//! | [`CellInterpolator`]             | `[0, 1] x [0, 1]`                        |
//! | [`GridInterpolator`]             | `[1, m-2] x [1, n-2]`                    |
//! | [`GridInterpolator`], extrapolate| `[-1, m] x [-1, n]`                      |
//! | [`MultiInterpolator`]            | same as the wrapped single-channel type  |
//!
//! Every domain is checked after the interpolator's affine [`Transform`] is applied.
//!
//! # Example: Grid
//! ```rust
//! use bicubic::{GridInterpolator, Interp2D, Options};
//!
//! // Samples indexed values[x][y]
//! let values = vec![
//!     vec![1.0_f64, 2.0, 4.0, 8.0, 16.0],
//!     vec![2.0, 4.0, 8.0, 16.0, 32.0],
//!     vec![3.0, 6.0, 12.0, 24.0, 48.0],
//!     vec![4.0, 8.0, 16.0, 32.0, 64.0],
//!     vec![5.0, 10.0, 20.0, 40.0, 80.0],
//!     vec![6.0, 12.0, 24.0, 48.0, 96.0],
//! ];
//!
//! let grid = GridInterpolator::new(&values, Options::default()).unwrap();
//! assert_eq!(grid.eval_one(1.0, 1.0).unwrap(), 4.0);
//! assert!(grid.eval_one(0.9, 3.1).is_err());
//!
//! // With a linearly extrapolated border the domain widens to [-1, m] x [-1, n]
//! let extrap = GridInterpolator::new(&values, Options::default().with_extrapolation(true)).unwrap();
//! assert!(extrap.eval_one(0.9, 3.1).is_ok());
//! assert!(extrap.eval_one(6.0, 5.0).is_ok());
//! ```
//!
//! # Example: Multiple channels
//! ```rust
//! use bicubic::{MultiInterpolator, Transform};
//!
//! // values[x][y][channel]
//! let values = vec![
//!     vec![vec![1.0_f64, 32.0], vec![2.0, 24.0], vec![4.0, 16.0], vec![8.0, 8.0]],
//!     vec![vec![2.0, 16.0], vec![4.0, 12.0], vec![8.0, 8.0], vec![16.0, 4.0]],
//!     vec![vec![3.0, 8.0], vec![6.0, 6.0], vec![12.0, 4.0], vec![24.0, 2.0]],
//!     vec![vec![4.0, 4.0], vec![8.0, 3.0], vec![16.0, 2.0], vec![32.0, 1.0]],
//! ];
//!
//! let multi = MultiInterpolator::cells(&values, Transform::identity()).unwrap();
//! assert_eq!(multi.eval_one(0.0, 0.0).unwrap(), vec![4.0, 12.0]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

extern crate alloc;

pub mod cell;
pub mod coefficients;
pub mod error;
pub mod grid;
pub mod multi;
pub mod options;

pub use cell::CellInterpolator;
pub use error::BicubicError;
pub use grid::GridInterpolator;
pub use multi::MultiInterpolator;
pub use options::{Options, Transform};

#[cfg(feature = "std")]
pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;

/// A scalar interpolant over a 2D domain.
pub trait Interp2D<T: num_traits::Float> {
    /// Evaluate the interpolant at an observation point.
    ///
    /// It is highly recommended to inline implementations of this function.
    fn eval_one(&self, x: T, y: T) -> Result<T, BicubicError>;

    /// Evaluate the interpolant at a set of observation points,
    /// stopping at the first point outside the domain.
    ///
    /// # Errors
    /// * If `xs`, `ys`, and `out` are not all the same length
    /// * If any point is outside the domain
    #[inline]
    fn eval(&self, xs: &[T], ys: &[T], out: &mut [T]) -> Result<(), BicubicError> {
        if xs.len() != out.len() || ys.len() != out.len() {
            return Err(BicubicError::LengthMismatch);
        }

        for i in 0..out.len() {
            out[i] = self.eval_one(xs[i], ys[i])?;
        }

        Ok(())
    }

    /// Evaluate the interpolant at a set of observation points, allocating
    /// for the output values for convenience.
    #[cfg(feature = "std")]
    #[inline]
    fn eval_alloc(&self, xs: &[T], ys: &[T]) -> Result<Vec<T>, BicubicError> {
        let mut out = vec![T::zero(); xs.len()];
        self.eval(xs, ys, &mut out)?;
        Ok(out)
    }
}

/// Lossy conversion for error reporting.
#[inline]
pub(crate) fn to_f64<T: num_traits::Float>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}
