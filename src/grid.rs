//! Bicubic interpolation over an arbitrary-size sample grid.
//!
//! The grid is split into unit cells between integer sample indices. Each cell is
//! covered by one [`CellInterpolator`] fitted to the 4x4 neighborhood around it,
//! built the first time a query lands in that cell and cached for the lifetime
//! of the grid interpolator.
//!
//! A cell needs one sample beyond each of its edges, so without extrapolation the
//! outermost ring of samples is only used for slopes and the domain is
//! `[1, m-2] x [1, n-2]`. With extrapolation enabled, two extra rings of samples
//! are synthesized on each side by continuing the slope between the last two
//! samples, which widens the domain to `[-1, m] x [-1, n]`.
//!
//! # Thread safety
//! The cell cache is filled lazily through a [`RefCell`], so a
//! [`GridInterpolator`] is `Send` but not `Sync`. To share one instance between
//! threads, put it behind a lock such as `std::sync::Mutex`; otherwise give each
//! thread its own instance.
use alloc::collections::BTreeMap;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;

use num_traits::{Float, NumCast};

use crate::cell::CellInterpolator;
use crate::error::{BicubicError, HINT_ENABLE_EXTRAPOLATION, HINT_EVEN_EXTRAPOLATING};
use crate::options::{Options, Transform};
use crate::{to_f64, Interp2D};

/// Width of the synthesized border on each side when extrapolating
const GHOST: usize = 2;

/// Key of a cell: the sample index of its lower-left corner, which may be
/// negative when extrapolating
type Origin = (isize, isize);

/// A bicubic interpolator over an `m x n` grid of samples indexed `values[x][y]`.
///
/// Sample `values[i][j]` sits at interpolator coordinates `(i, j)`, after the
/// configured [`Transform`] is applied to the query point.
///
/// Operation Complexity
/// * O(1) per evaluation; the first evaluation in a cell also fits its
///   16 coefficients.
///
/// Memory Complexity
/// * O(m * n) for the owned samples (O((m + 4) * (n + 4)) with extrapolation)
///   plus one cached patch per distinct cell visited, at most
///   (m - 3) * (n - 3) patches, or (m + 1) * (n + 1) with extrapolation.
#[derive(Clone, Debug)]
pub struct GridInterpolator<T> {
    /// Size of the caller's grid along x
    m: usize,

    /// Size of the caller's grid along y
    n: usize,

    /// Offset from logical sample index to storage index
    pad: isize,

    /// Distance between consecutive x rows in `samples`
    stride: usize,

    /// Samples, including the synthesized border if any
    samples: Vec<T>,

    options: Options<T>,

    /// Valid rectangle in transformed coordinates, like [x_min, x_max, y_min, y_max]
    bounds: [T; 4],

    /// Fitted patches, keyed by cell origin
    cells: RefCell<BTreeMap<Origin, CellInterpolator<T>>>,
}

impl<T: Float> GridInterpolator<T> {
    /// Build a new interpolator, copying the samples.
    ///
    /// When `options.extrapolate` is set, the copy is extended with the
    /// extrapolated border here, once; the caller's data is never modified.
    ///
    /// # Errors
    /// * If there are fewer than 4 samples along either axis
    /// * If the rows are not all the same length
    /// * If the domain bounds are not representable in `T`
    pub fn new<R: AsRef<[T]>>(rows: &[R], options: Options<T>) -> Result<Self, BicubicError> {
        let m = rows.len();
        let n = rows.first().map_or(0, |r| r.as_ref().len());

        if m < 4 || n < 4 {
            return Err(BicubicError::GridTooSmall { m, n });
        }
        let ragged = rows
            .iter()
            .map(|r| r.as_ref().len())
            .enumerate()
            .find(|&(_, len)| len != n);
        if let Some((row, len)) = ragged {
            return Err(BicubicError::RaggedGrid {
                row,
                len,
                expected: n,
            });
        }

        let pad = if options.extrapolate { GHOST } else { 0 };
        let stride = n + 2 * pad;
        let mut samples = vec![T::zero(); (m + 2 * pad) * stride];
        for (i, row) in rows.iter().enumerate() {
            let start = (i + pad) * stride + pad;
            samples[start..start + n].copy_from_slice(row.as_ref());
        }

        let as_t = |v: isize| <T as NumCast>::from(v).ok_or(BicubicError::Unrepresentable);
        let (mi, ni) = (m as isize, n as isize);
        let bounds = if options.extrapolate {
            extend_border(&mut samples, m, n);
            log::debug!("Extrapolated a {GHOST}-sample border around a {m}x{n} grid");
            [as_t(-1)?, as_t(mi)?, as_t(-1)?, as_t(ni)?]
        } else {
            [as_t(1)?, as_t(mi - 2)?, as_t(1)?, as_t(ni - 2)?]
        };

        log::debug!(
            "Built {m}x{n} grid interpolator (extrapolate: {})",
            options.extrapolate
        );

        Ok(Self {
            m,
            n,
            pad: pad as isize,
            stride,
            samples,
            options,
            bounds,
            cells: RefCell::new(BTreeMap::new()),
        })
    }

    /// Size of the caller's grid like (m, n).
    pub fn dims(&self) -> (usize, usize) {
        (self.m, self.n)
    }

    /// Valid rectangle in transformed coordinates like `[x_min, x_max, y_min, y_max]`.
    pub fn domain(&self) -> [T; 4] {
        self.bounds
    }

    pub fn options(&self) -> &Options<T> {
        &self.options
    }

    /// Number of cell patches fitted so far.
    pub fn cell_count(&self) -> usize {
        self.cells.borrow().len()
    }

    /// Value and partial derivatives `[f, df/dx, df/dy]` at a point, with
    /// derivatives taken with respect to the caller's coordinates.
    ///
    /// # Errors
    /// * If the transformed point is outside the domain
    pub fn eval_gradient(&self, x: T, y: T) -> Result<[T; 3], BicubicError> {
        let (x, y, origin) = self.locate(x, y)?;
        let [f, dfdx, dfdy] = self.with_cell(origin, |cell| cell.eval_gradient(x, y))?;
        let Transform {
            scale_x, scale_y, ..
        } = self.options.transform;
        Ok([f, dfdx * scale_x, dfdy * scale_y])
    }

    /// Transform a point, check it against the domain, and find its cell.
    ///
    /// Returned value like (x, y, (key, (x0, y0))), where (x0, y0) is the
    /// cell origin as a float.
    #[inline]
    fn locate(&self, x: T, y: T) -> Result<(T, T, (Origin, (T, T))), BicubicError> {
        let (x, y) = self.options.transform.apply(x, y);
        let [x_min, x_max, y_min, y_max] = self.bounds;

        // Written so that NaN fails the check
        let inside = x_min <= x && x <= x_max && y_min <= y && y <= y_max;
        if !inside {
            return Err(BicubicError::OutOfDomain {
                x: to_f64(x),
                y: to_f64(y),
                x_min: to_f64(x_min),
                x_max: to_f64(x_max),
                y_min: to_f64(y_min),
                y_max: to_f64(y_max),
                hint: if self.options.extrapolate {
                    HINT_EVEN_EXTRAPOLATING
                } else {
                    HINT_ENABLE_EXTRAPOLATION
                },
            });
        }

        // On the upper edge of the domain there is no cell above,
        // so use the one below, which includes its upper edge
        let mut x0 = x.floor();
        let mut y0 = y.floor();
        if x == x_max {
            x0 = x0 - T::one();
        }
        if y == y_max {
            y0 = y0 - T::one();
        }

        let ix = <isize as NumCast>::from(x0).ok_or(BicubicError::Unrepresentable)?;
        let iy = <isize as NumCast>::from(y0).ok_or(BicubicError::Unrepresentable)?;

        Ok((x, y, ((ix, iy), (x0, y0))))
    }

    /// Run `f` on the patch for a cell, fitting and caching it first if needed.
    #[inline]
    fn with_cell<U>(
        &self,
        (key, (x0, y0)): (Origin, (T, T)),
        f: impl FnOnce(&CellInterpolator<T>) -> U,
    ) -> U {
        let mut cells = self.cells.borrow_mut();
        let cell = cells
            .entry(key)
            .or_insert_with(|| self.fit_cell(key, x0, y0));
        f(cell)
    }

    /// Fit the patch whose local unit square starts at sample `(ix, iy)`.
    fn fit_cell(&self, (ix, iy): Origin, x0: T, y0: T) -> CellInterpolator<T> {
        log::trace!("Fitting cell at ({ix}, {iy})");

        let mut values = [[T::zero(); 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                values[i][j] = self.sample(ix - 1 + i as isize, iy - 1 + j as isize);
            }
        }

        CellInterpolator::new(values, Transform::translated(-x0, -y0))
    }

    /// Sample at a logical index, which may fall in the synthesized border
    #[inline]
    fn sample(&self, ix: isize, iy: isize) -> T {
        let i = (ix + self.pad) as usize;
        let j = (iy + self.pad) as usize;
        self.samples[i * self.stride + j]
    }
}

impl<T: Float> Interp2D<T> for GridInterpolator<T> {
    #[inline]
    fn eval_one(&self, x: T, y: T) -> Result<T, BicubicError> {
        let (x, y, origin) = self.locate(x, y)?;
        self.with_cell(origin, |cell| cell.eval_one(x, y))
    }
}

/// Fill the two-sample border around an `m x n` grid stored with
/// [`GHOST`] padding, first along x for the original rows of y,
/// then along y for every row including the new ones.
///
/// Each border sample continues the difference between the edge sample and
/// its inward neighbor, so data that is linear near the edge stays linear.
fn extend_border<T: Float>(samples: &mut [T], m: usize, n: usize) {
    let stride = n + 2 * GHOST;
    let at = |x: isize, y: isize| (x + GHOST as isize) as usize * stride + (y + GHOST as isize) as usize;
    let (m, n) = (m as isize, n as isize);
    let two = T::one() + T::one();

    // Extend along x
    for y in 0..n {
        let left = samples[at(0, y)] - samples[at(1, y)];
        let right = samples[at(m - 1, y)] - samples[at(m - 2, y)];
        samples[at(-2, y)] = samples[at(0, y)] + two * left;
        samples[at(-1, y)] = samples[at(0, y)] + left;
        samples[at(m, y)] = samples[at(m - 1, y)] + right;
        samples[at(m + 1, y)] = samples[at(m - 1, y)] + two * right;
    }

    // Extend along y, including the rows added above
    for x in -2..m + 2 {
        let bottom = samples[at(x, 0)] - samples[at(x, 1)];
        let top = samples[at(x, n - 1)] - samples[at(x, n - 2)];
        samples[at(x, -2)] = samples[at(x, 0)] + two * bottom;
        samples[at(x, -1)] = samples[at(x, 0)] + bottom;
        samples[at(x, n)] = samples[at(x, n - 1)] + top;
        samples[at(x, n + 1)] = samples[at(x, n - 1)] + two * top;
    }
}
