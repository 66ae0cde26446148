use rand::Rng;
use rand_chacha::ChaChaRng;

/// Dole's eccentricity coefficient
pub const ECCENTRICITY_COEFF: f64 = 0.077;

/// Source of uniform draws for every stochastic step of system generation
///
/// Implementors supply `unit`; the interval, jitter, and eccentricity samplers
/// are derived from it so that a fixed seed always yields the same draw order.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use stellar::sampling::RandomSource;
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let a = rng.uniform(0.3, 50.0);
/// assert!((0.3..=50.0).contains(&a));
///
/// let e = rng.eccentricity();
/// assert!((0.0..1.0).contains(&e));
/// ```
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`
    fn unit(&mut self) -> f64;

    /// Uniform draw between two bounds, in either order
    ///
    /// Equal bounds return that bound without consuming a draw.
    fn uniform(&mut self, bound1: f64, bound2: f64) -> f64 {
        let (low, range) = if bound1 > bound2 {
            (bound2, bound1 - bound2)
        } else if bound2 > bound1 {
            (bound1, bound2 - bound1)
        } else {
            return bound1;
        };
        self.unit() * range + low
    }

    /// `value` jittered by up to `±variation` of itself
    fn about(&mut self, value: f64, variation: f64) -> f64 {
        value + value * self.uniform(-variation, variation)
    }

    /// Orbital eccentricity biased toward circular orbits
    ///
    /// Always in `[0, 1)`; with the 0.077 exponent the draw never exceeds ~0.51.
    fn eccentricity(&mut self) -> f64 {
        1.0 - self.uniform(0.0001, 1.0).powf(ECCENTRICITY_COEFF)
    }
}

impl RandomSource for ChaChaRng {
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Integer percentile draw used by the stellar tables, in `0..100`
pub fn percentile<R: RandomSource + ?Sized>(rng: &mut R, low: f64) -> i32 {
    rng.uniform(low, 100.0) as i32
}
