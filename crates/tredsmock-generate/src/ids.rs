use rand::Rng;

/// Opaque identifier of the form `{prefix}-{millis}-{suffix}` with a random
/// four-digit suffix.
///
/// Uniqueness is best-effort only: collision resistance comes from the
/// millisecond clock plus the random suffix, so two draws within the same
/// millisecond can collide. Acceptable for test data; do not rely on these
/// ids being unique or unguessable.
pub fn next_id<R: Rng + ?Sized>(prefix: &str, clock_millis: i64, rng: &mut R) -> String {
    format!("{prefix}-{clock_millis}-{}", rng.random_range(0..10_000))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn id_carries_prefix_and_clock() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let id = next_id("SAPREF", 1_700_000_000_123, &mut rng);
        let mut parts = id.split('-');
        assert_eq!(parts.next(), Some("SAPREF"));
        assert_eq!(parts.next(), Some("1700000000123"));
        let suffix: u32 = parts.next().expect("suffix").parse().expect("numeric");
        assert!(suffix < 10_000);
        assert_eq!(parts.next(), None);
    }
}
