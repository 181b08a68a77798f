//! Coordinate transform and construction options.
use num_traits::Float;

/// Affine scale-then-translate mapping from caller coordinates into
/// interpolator coordinates: `x' = x * scale_x + translate_x`, likewise for `y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform<T> {
    pub scale_x: T,
    pub scale_y: T,
    pub translate_x: T,
    pub translate_y: T,
}

impl<T: Float> Transform<T> {
    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            scale_x: T::one(),
            scale_y: T::one(),
            translate_x: T::zero(),
            translate_y: T::zero(),
        }
    }

    /// Unit scale with the given offsets.
    pub fn translated(translate_x: T, translate_y: T) -> Self {
        Self {
            translate_x,
            translate_y,
            ..Self::identity()
        }
    }

    /// Map a caller-space point into interpolator space.
    #[inline]
    pub fn apply(&self, x: T, y: T) -> (T, T) {
        (
            x * self.scale_x + self.translate_x,
            y * self.scale_y + self.translate_y,
        )
    }
}

impl<T: Float> Default for Transform<T> {
    fn default() -> Self {
        Self::identity()
    }
}

/// Options for grid (and multi-channel grid) interpolators.
///
/// Defaults to no extrapolation and the identity transform.
///
/// ```rust
/// use bicubic::Options;
///
/// let opts = Options::<f64>::default()
///     .with_extrapolation(true)
///     .with_scale(0.5, 1.0 / 3.0)
///     .with_translation(-4.0, 0.2);
/// assert!(opts.extrapolate);
/// assert_eq!(opts.transform.translate_x, -4.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Options<T> {
    /// Synthesize a linearly extrapolated two-sample border around the grid,
    /// widening the domain from `[1, m-2] x [1, n-2]` to `[-1, m] x [-1, n]`.
    pub extrapolate: bool,
    pub transform: Transform<T>,
}

impl<T: Float> Options<T> {
    pub fn with_extrapolation(mut self, extrapolate: bool) -> Self {
        self.extrapolate = extrapolate;
        self
    }

    pub fn with_scale(mut self, scale_x: T, scale_y: T) -> Self {
        self.transform.scale_x = scale_x;
        self.transform.scale_y = scale_y;
        self
    }

    pub fn with_translation(mut self, translate_x: T, translate_y: T) -> Self {
        self.transform.translate_x = translate_x;
        self.transform.translate_y = translate_y;
        self
    }
}

impl<T: Float> Default for Options<T> {
    fn default() -> Self {
        Self {
            extrapolate: false,
            transform: Transform::identity(),
        }
    }
}
