//! Error type shared by every interpolator in the crate.

/// Errors raised while constructing or evaluating an interpolator.
///
/// Coordinates in [`BicubicError::OutOfDomain`] are the query point *after*
/// the interpolator's affine transform has been applied, reported as `f64`
/// regardless of the interpolator's value type.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BicubicError {
    /// The transformed query point lies outside the valid rectangle.
    #[error(
        "cannot interpolate outside the rectangle from ({x_min}, {y_min}) to ({x_max}, {y_max}){hint}: ({x}, {y})"
    )]
    OutOfDomain {
        x: f64,
        y: f64,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        hint: &'static str,
    },

    /// Grids need at least four samples along each axis to fit one patch.
    #[error("grid must have at least 4x4 samples, got {m}x{n}")]
    GridTooSmall { m: usize, n: usize },

    /// A row of the sample grid has a different length than the first row.
    #[error("row {row} has {len} samples, expected {expected}")]
    RaggedGrid {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A single patch needs exactly a 4x4 neighborhood.
    #[error("expected a 4x4 neighborhood, got {actual:?}")]
    ShapeMismatch { actual: (usize, usize) },

    /// A sample holds a different number of channels than the first sample.
    #[error("sample ({x}, {y}) has {len} channels, expected {expected}")]
    ChannelMismatch {
        x: usize,
        y: usize,
        len: usize,
        expected: usize,
    },

    /// Multi-channel samples must carry at least one channel.
    #[error("samples have no channels")]
    NoChannels,

    /// Batch evaluation inputs and output are not the same length.
    #[error("length mismatch")]
    LengthMismatch,

    /// A coordinate could not be converted to a cell index.
    #[error("unrepresentable coordinate value")]
    Unrepresentable,
}

/// Hint appended to grid domain errors when extrapolation is disabled.
pub(crate) const HINT_ENABLE_EXTRAPOLATION: &str = ", you might want to enable extrapolating";

/// Hint appended to grid domain errors when extrapolation is already enabled.
pub(crate) const HINT_EVEN_EXTRAPOLATING: &str = " even when extrapolating";

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_domain_message_names_point_and_rectangle() {
        let err = BicubicError::OutOfDomain {
            x: 0.9,
            y: 3.1,
            x_min: 1.0,
            x_max: 4.0,
            y_min: 1.0,
            y_max: 3.0,
            hint: HINT_ENABLE_EXTRAPOLATION,
        };
        let msg = err.to_string();
        assert!(msg.contains("(0.9, 3.1)"));
        assert!(msg.contains("from (1, 1) to (4, 3)"));
        assert!(msg.contains("enable extrapolating"));
    }
}
