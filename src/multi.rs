//! Fan-out over several independent single-channel interpolators that share
//! one transform, for data with multiple values per sample (e.g. color channels).
//!
//! Samples are given as `values[x][y][channel]`. Each channel gets its own
//! interpolator, and for grids its own cell cache.
use alloc::vec;
use alloc::vec::Vec;

use num_traits::Float;

use crate::cell::CellInterpolator;
use crate::error::BicubicError;
use crate::grid::GridInterpolator;
use crate::options::{Options, Transform};
use crate::Interp2D;

/// One interpolator per channel, evaluated together.
#[derive(Clone, Debug)]
pub struct MultiInterpolator<I> {
    channels: Vec<I>,
}

impl<T: Float> MultiInterpolator<CellInterpolator<T>> {
    /// Fit one patch per channel to a 4x4 neighborhood of multi-channel samples.
    ///
    /// # Errors
    /// * If the samples do not all have the same, nonzero number of channels
    /// * If the neighborhood is not 4x4
    pub fn cells<R, C>(values: &[R], transform: Transform<T>) -> Result<Self, BicubicError>
    where
        R: AsRef<[C]>,
        C: AsRef<[T]>,
    {
        let channels = split_channels(values)?
            .iter()
            .map(|rows| CellInterpolator::try_from_rows(rows, transform))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { channels })
    }
}

impl<T: Float> MultiInterpolator<GridInterpolator<T>> {
    /// Build one grid interpolator per channel, all with the same options.
    ///
    /// # Errors
    /// * If the samples do not all have the same, nonzero number of channels
    /// * Any error from [`GridInterpolator::new`]
    pub fn grids<R, C>(values: &[R], options: Options<T>) -> Result<Self, BicubicError>
    where
        R: AsRef<[C]>,
        C: AsRef<[T]>,
    {
        let channels = split_channels(values)?
            .iter()
            .map(|rows| GridInterpolator::new(rows, options))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { channels })
    }
}

impl<I> MultiInterpolator<I> {
    /// Wrap interpolators that were built separately.
    pub fn from_channels(channels: Vec<I>) -> Self {
        Self { channels }
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        self.channels.len()
    }

    pub fn channel(&self, i: usize) -> Option<&I> {
        self.channels.get(i)
    }

    /// Evaluate every channel at one point, in channel order.
    ///
    /// # Errors
    /// * If the point is outside the domain of any channel
    pub fn eval_one<T>(&self, x: T, y: T) -> Result<Vec<T>, BicubicError>
    where
        T: Float,
        I: Interp2D<T>,
    {
        let mut out = vec![T::zero(); self.channels.len()];
        self.eval_into(x, y, &mut out)?;
        Ok(out)
    }

    /// Evaluate every channel at one point into preallocated storage.
    ///
    /// # Errors
    /// * If `out` does not have one entry per channel
    /// * If the point is outside the domain of any channel
    pub fn eval_into<T>(&self, x: T, y: T, out: &mut [T]) -> Result<(), BicubicError>
    where
        T: Float,
        I: Interp2D<T>,
    {
        if out.len() != self.channels.len() {
            return Err(BicubicError::LengthMismatch);
        }

        for (o, interpolator) in out.iter_mut().zip(&self.channels) {
            *o = interpolator.eval_one(x, y)?;
        }

        Ok(())
    }
}

/// Transpose `values[x][y][channel]` into one `values[x][y]` grid per channel.
///
/// The channel count is taken from the first sample; a grid with no samples
/// has no channels.
fn split_channels<T, R, C>(values: &[R]) -> Result<Vec<Vec<Vec<T>>>, BicubicError>
where
    T: Float,
    R: AsRef<[C]>,
    C: AsRef<[T]>,
{
    let s = values
        .first()
        .and_then(|row| row.as_ref().first())
        .map_or(0, |sample| sample.as_ref().len());
    if s == 0 {
        return Err(BicubicError::NoChannels);
    }

    for (x, row) in values.iter().enumerate() {
        for (y, sample) in row.as_ref().iter().enumerate() {
            let len = sample.as_ref().len();
            if len != s {
                return Err(BicubicError::ChannelMismatch {
                    x,
                    y,
                    len,
                    expected: s,
                });
            }
        }
    }

    let grids = (0..s)
        .map(|ch| {
            values
                .iter()
                .map(|row| row.as_ref().iter().map(|sample| sample.as_ref()[ch]).collect())
                .collect()
        })
        .collect();

    Ok(grids)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::{randn, rng_fixed_seed};
    use crate::utils::{linspace, meshgrid};

    fn two_channel_cell() -> Vec<Vec<Vec<f64>>> {
        vec![
            vec![vec![1.0, 32.0], vec![2.0, 24.0], vec![4.0, 16.0], vec![8.0, 8.0]],
            vec![vec![2.0, 16.0], vec![4.0, 12.0], vec![8.0, 8.0], vec![16.0, 4.0]],
            vec![vec![3.0, 8.0], vec![6.0, 6.0], vec![12.0, 4.0], vec![24.0, 2.0]],
            vec![vec![4.0, 4.0], vec![8.0, 3.0], vec![16.0, 2.0], vec![32.0, 1.0]],
        ]
    }

    #[test]
    fn test_cells() {
        let multi = MultiInterpolator::cells(&two_channel_cell(), Transform::identity()).unwrap();
        assert_eq!(multi.channels(), 2);

        assert_eq!(multi.eval_one(0.0, 0.0).unwrap(), vec![4.0, 12.0]);
        let v = multi.eval_one(1.0, 1.0).unwrap();
        assert!((v[0] - 12.0).abs() < 1e-12);
        assert!((v[1] - 4.0).abs() < 1e-12);

        // Each channel is exactly the single-channel patch of its slice
        let x = std::f64::consts::FRAC_PI_4;
        let y = std::f64::consts::E / 3.0;
        let v = multi.eval_one(x, y).unwrap();
        for ch in 0..2 {
            let rows: Vec<Vec<f64>> = two_channel_cell()
                .iter()
                .map(|r| r.iter().map(|s| s[ch]).collect())
                .collect();
            let single = CellInterpolator::try_from_rows(&rows, Transform::identity()).unwrap();
            assert_eq!(v[ch], single.eval_one(x, y).unwrap());
        }

        assert!(matches!(
            multi.eval_one(-0.1, 2.0),
            Err(BicubicError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn test_grids() {
        let rng = &mut rng_fixed_seed();
        let (m, n, s) = (6, 5, 3);
        let values: Vec<Vec<Vec<f64>>> = (0..m)
            .map(|_| (0..n).map(|_| randn::<f64>(rng, s)).collect())
            .collect();
        let opts = Options::default().with_extrapolation(true).with_scale(2.0, 2.0);

        let multi = MultiInterpolator::grids(&values, opts).unwrap();
        assert_eq!(multi.channels(), s);

        let singles: Vec<GridInterpolator<f64>> = (0..s)
            .map(|ch| {
                let rows: Vec<Vec<f64>> = values
                    .iter()
                    .map(|r| r.iter().map(|v| v[ch]).collect())
                    .collect();
                GridInterpolator::new(&rows, opts).unwrap()
            })
            .collect();

        let xs = linspace(-0.5, 3.0, 8);
        let ys = linspace(-0.5, 2.5, 7);
        let mut out = vec![0.0; s];
        for (x, y) in meshgrid(&xs, &ys) {
            multi.eval_into(x, y, &mut out).unwrap();
            for ch in 0..s {
                assert_eq!(out[ch], singles[ch].eval_one(x, y).unwrap());
            }
        }

        // Caches are per channel
        let visited = multi.channel(0).unwrap().cell_count();
        assert!(visited > 0);
        assert!((0..s).all(|ch| multi.channel(ch).unwrap().cell_count() == visited));
        assert!(multi.channel(s).is_none());

        assert_eq!(
            multi.eval_into(1.0, 1.0, &mut [0.0; 2]),
            Err(BicubicError::LengthMismatch)
        );
    }

    #[test]
    fn test_channel_errors() {
        let mut values = two_channel_cell();
        values[2][3].push(0.0);
        assert_eq!(
            MultiInterpolator::cells(&values, Transform::identity()).unwrap_err(),
            BicubicError::ChannelMismatch {
                x: 2,
                y: 3,
                len: 3,
                expected: 2
            }
        );

        let empty: Vec<Vec<Vec<f64>>> = vec![vec![vec![]; 4]; 4];
        assert_eq!(
            MultiInterpolator::cells(&empty, Transform::identity()).unwrap_err(),
            BicubicError::NoChannels
        );

        let small: Vec<Vec<Vec<f64>>> = vec![vec![vec![1.0]; 4]; 3];
        assert_eq!(
            MultiInterpolator::grids(&small, Options::default()).unwrap_err(),
            BicubicError::GridTooSmall { m: 3, n: 4 }
        );
    }
}
