use rand::Rng;
use rand::SeedableRng;
use rand::distr::StandardUniform;
use rand::rngs::StdRng;

/// Fixed random seed to support repeatable testing
const SEED: [u8; 32] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6,
    5, 4, 3, 2, 1,
];

/// Get a random number generator with a const seed for repeatable testing
pub fn rng_fixed_seed() -> StdRng {
    StdRng::from_seed(SEED)
}

/// Generate `n` random numbers using provided generator
pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
where
    StandardUniform: rand::distr::Distribution<T>,
{
    std::iter::repeat_with(|| rng.random::<T>())
        .take(n)
        .collect()
}

/// A random 4x4 neighborhood with samples in `[-scale, scale)`
pub fn random_neighborhood(rng: &mut StdRng, scale: f64) -> [[f64; 4]; 4] {
    let mut v = [[0.0; 4]; 4];
    for row in v.iter_mut() {
        for x in row.iter_mut() {
            *x = (rng.random::<f64>() * 2.0 - 1.0) * scale;
        }
    }
    v
}
