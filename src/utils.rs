//! Convenience methods for building sample grids and observation points.
use itertools::Itertools;
use num_traits::Float;

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    let dx: T = (stop - start) / T::from(n - 1).unwrap();
    (0..n).map(|i| start + T::from(i).unwrap() * dx).collect()
}

/// Every `(x, y)` pair of the two axes, with `y` varying fastest.
pub fn meshgrid<T>(xs: &[T], ys: &[T]) -> Vec<(T, T)>
where
    T: Float,
{
    xs.iter()
        .cartesian_product(ys.iter())
        .map(|(&x, &y)| (x, y))
        .collect()
}

/// Tabulate `f` at integer sample indices into an `m x n` grid indexed `values[x][y]`,
/// the layout expected by [`GridInterpolator::new`](crate::GridInterpolator::new).
pub fn sample_grid<T, F>(m: usize, n: usize, f: F) -> Vec<Vec<T>>
where
    T: Float,
    F: Fn(T, T) -> T,
{
    (0..m)
        .map(|i| {
            (0..n)
                .map(|j| f(T::from(i).unwrap(), T::from(j).unwrap()))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_meshgrid_order() {
        let pts = meshgrid(&[0.0, 1.0], &[10.0, 20.0, 30.0]);
        assert_eq!(
            pts,
            vec![
                (0.0, 10.0),
                (0.0, 20.0),
                (0.0, 30.0),
                (1.0, 10.0),
                (1.0, 20.0),
                (1.0, 30.0)
            ]
        );
    }

    #[test]
    fn test_sample_grid() {
        let g = sample_grid(3, 2, |x: f64, y: f64| 10.0 * x + y);
        assert_eq!(g, vec![vec![0.0, 1.0], vec![10.0, 11.0], vec![20.0, 21.0]]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }
}
