//! Seeded random stream for density simulation.
//!
//! The UI re-renders freely, so the simulated neighbor count for a given
//! option must be a pure function of its identity. The seed is derived
//! from a stable string key and fed to a `StdRng`; identical keys produce
//! identical sequences for the lifetime of the process.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Stable key identifying one displayed option. `extra_guests` is
/// deliberately excluded so added guests shift the count without
/// reshuffling the baseline.
pub fn seed_key(meal_id: &str, vendor_name: &str, day: &str, slot_index: usize) -> String {
    format!("{}|{}|{}|{}", meal_id, vendor_name, day, slot_index)
}

/// Rolling string hash: `h = h * 31 + char`, wrapped to the 32-bit signed
/// range, then taken absolute.
pub fn hash_key(key: &str) -> u64 {
    let mut h: i32 = 0;
    for c in key.chars() {
        h = h.wrapping_mul(31).wrapping_add(c as i32);
    }
    u64::from(h.unsigned_abs())
}

/// A deterministic stream for one option's density draw.
pub fn density_stream(meal_id: &str, vendor_name: &str, day: &str, slot_index: usize) -> StdRng {
    let key = seed_key(meal_id, vendor_name, day, slot_index);
    StdRng::seed_from_u64(hash_key(&key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_hash_is_stable() {
        let a = hash_key("m-001|Sushi Go|Monday|0");
        let b = hash_key("m-001|Sushi Go|Monday|0");
        assert_eq!(a, b);
    }

    #[test]
    fn test_hash_differs_across_keys() {
        assert_ne!(
            hash_key("m-001|Sushi Go|Monday|0"),
            hash_key("m-001|Sushi Go|Monday|1")
        );
        assert_ne!(
            hash_key("m-001|Sushi Go|Monday|0"),
            hash_key("m-001|Sushi Go|Tuesday|0")
        );
    }

    #[test]
    fn test_hash_fits_signed_32_bit_range() {
        // Long keys must wrap, not grow unbounded
        let long_key = "x".repeat(10_000);
        assert!(hash_key(&long_key) <= i32::MAX as u64 + 1);
    }

    #[test]
    fn test_empty_key_hashes_to_zero() {
        assert_eq!(hash_key(""), 0);
    }

    #[test]
    fn test_stream_repeats_for_same_key() {
        let mut a = density_stream("m-001", "Sushi Go", "Monday", 3);
        let mut b = density_stream("m-001", "Sushi Go", "Monday", 3);
        let vals_a: Vec<u32> = (0..10).map(|_| a.gen_range(0..100)).collect();
        let vals_b: Vec<u32> = (0..10).map(|_| b.gen_range(0..100)).collect();
        assert_eq!(vals_a, vals_b);
    }

    #[test]
    fn test_stream_differs_for_different_slot() {
        let mut a = density_stream("m-001", "Sushi Go", "Monday", 0);
        let mut b = density_stream("m-001", "Sushi Go", "Monday", 1);
        let vals_a: Vec<u32> = (0..10).map(|_| a.gen_range(0..1000)).collect();
        let vals_b: Vec<u32> = (0..10).map(|_| b.gen_range(0..1000)).collect();
        assert_ne!(vals_a, vals_b);
    }
}
