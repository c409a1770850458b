//! Shared random-draw helpers used by the date synthesizer and row builders.

use rand::Rng;

/// Uniform integer draw over the closed range `[min, max]`.
pub fn int_in<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.random_range(min..=max)
}

/// Uniform float draw over `[min, max]`.
pub fn float_in<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.random_range(min..=max)
}

/// Uniform pick from a fixed lookup table. `values` must be non-empty.
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, values: &'a [T]) -> &'a T {
    &values[rng.random_range(0..values.len())]
}

/// Round to `scale` decimal places.
pub fn round_to(value: f64, scale: u32) -> f64 {
    let factor = 10f64.powi(scale as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn int_in_is_inclusive() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let value = int_in(&mut rng, 1, 3);
            assert!((1..=3).contains(&value));
        }
    }

    #[test]
    fn round_to_two_places() {
        assert_eq!(round_to(12.346, 2), 12.35);
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(10.04, 1), 10.0);
    }

    #[test]
    fn pick_stays_in_table() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let table = [30_i64, 35, 40];
        for _ in 0..100 {
            assert!(table.contains(pick(&mut rng, &table)));
        }
    }
}
