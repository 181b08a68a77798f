//! Closed-form bicubic patch coefficients from a 4x4 sample neighborhood.
//!
//! Each axis is treated as a cubic Hermite segment on the unit interval
//! between the two middle samples, with the slope at each end taken from
//! a centered difference of its neighbors. Two adjacent patches built from
//! overlapping neighborhoods therefore share values and slopes along their
//! common edge, giving an interpolant with continuous first derivatives
//! without solving any linear system.
//!
//! The 2D coefficients are the tensor product of the 1D rule: fit along `y`
//! for each of the four `x` rows, then fit along `x` for each power of `y`.
//! Because the 1D rule is linear in the samples, the order does not matter.
use num_traits::Float;

/// Coefficients `a[i][j]` of `f(x, y) = sum_i sum_j a[i][j] * x^i * y^j`
/// on the unit square.
pub type Coefficients<T> = [[T; 4]; 4];

/// Power-basis coefficients `[c0, c1, c2, c3]` of a cubic Hermite segment
/// on `t` in `[0, 1]` with start value `y0`, rise `dy` across the segment,
/// and imposed slopes `k0` and `k1` at the endpoints.
#[inline]
pub fn hermite_coefficients<T: Float>(y0: T, dy: T, k0: T, k1: T) -> [T; 4] {
    // `a` and `b` are the difference between this function and a linear one going
    // forward or backward with the imposed slopes.
    let a = k0 - dy;
    let b = -k1 + dy;

    let c1 = dy + a;
    let c2 = b - (a + a);
    let c3 = a - b;

    [y0, c1, c2, c3]
}

/// 1D cubic through samples at relative positions `-1, 0, 1, 2`,
/// spanning `p[1]` at `t = 0` to `p[2]` at `t = 1`, with centered-difference
/// slopes at both ends.
#[inline]
pub fn catmull_rom<T: Float>(p: [T; 4]) -> [T; 4] {
    let two = T::one() + T::one();

    let y0 = p[1];
    let dy = p[2] - p[1];

    // Take slopes from centered difference
    let k0 = (p[2] - p[0]) / two;
    let k1 = (p[3] - p[1]) / two;

    hermite_coefficients(y0, dy, k0, k1)
}

/// Fit the 16 coefficients of one patch.
///
/// `values[i][j]` is the sample at relative position `(i - 1, j - 1)`, so the
/// patch's unit square spans `values[1][1]` at `(0, 0)` to `values[2][2]`
/// at `(1, 1)`.
pub fn bicubic_coefficients<T: Float>(values: &[[T; 4]; 4]) -> Coefficients<T> {
    // Along y, for each x row: rows[i][j] is the y^j coefficient at x offset i
    let mut rows = [[T::zero(); 4]; 4];
    for i in 0..4 {
        rows[i] = catmull_rom(values[i]);
    }

    // Along x, for each power of y
    let mut a = [[T::zero(); 4]; 4];
    for j in 0..4 {
        let c = catmull_rom([rows[0][j], rows[1][j], rows[2][j], rows[3][j]]);
        for i in 0..4 {
            a[i][j] = c[i];
        }
    }

    a
}

/// Evaluate a patch at local coordinates, as
/// `sum_i x^i * (sum_j a[i][j] * y^j)`.
#[inline]
pub fn eval_coefficients<T: Float>(a: &Coefficients<T>, x: T, y: T) -> T {
    let mut acc = T::zero();
    for i in (0..4).rev() {
        let row = ((a[i][3] * y + a[i][2]) * y + a[i][1]) * y + a[i][0];
        acc = acc * x + row;
    }
    acc
}

/// Evaluate a patch and its partial derivatives at local coordinates,
/// returned like `[f, df/dx, df/dy]`.
#[inline]
pub fn eval_coefficients_gradient<T: Float>(a: &Coefficients<T>, x: T, y: T) -> [T; 3] {
    let two = T::one() + T::one();
    let three = two + T::one();

    let mut f = T::zero();
    let mut dfdx = T::zero();
    let mut dfdy = T::zero();
    for i in (0..4).rev() {
        let row = ((a[i][3] * y + a[i][2]) * y + a[i][1]) * y + a[i][0];
        let drow = (three * a[i][3] * y + two * a[i][2]) * y + a[i][1];

        // Horner on x for the value and its x-derivative together
        dfdx = dfdx * x + f;
        f = f * x + row;
        dfdy = dfdy * x + drow;
    }

    [f, dfdx, dfdy]
}
