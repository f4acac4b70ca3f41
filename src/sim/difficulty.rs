//! Difficulty curve
//!
//! Flat through the easy zone, a linear ramp to 1.0 across the medium zone,
//! then slow unbounded growth.

use crate::consts::{DIFFICULTY_INCREASE_RATE, EASY_ZONE, MEDIUM_ZONE};

/// Map cumulative climb height to a difficulty scalar (>= 0)
pub fn difficulty(height: f32) -> f32 {
    if height < EASY_ZONE {
        0.0
    } else if height < MEDIUM_ZONE {
        (height - EASY_ZONE) / (MEDIUM_ZONE - EASY_ZONE)
    } else {
        1.0 + (height - MEDIUM_ZONE) * DIFFICULTY_INCREASE_RATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zone_boundaries() {
        assert_eq!(difficulty(0.0), 0.0);
        assert_eq!(difficulty(4999.0), 0.0);
        assert_eq!(difficulty(5000.0), 0.0);
        assert!((difficulty(10000.0) - 0.5).abs() < 1e-6);
        assert!((difficulty(14999.0) - 0.9999).abs() < 1e-4);
        assert_eq!(difficulty(15000.0), 1.0);
        assert!((difficulty(25000.0) - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_negative_height_is_easy() {
        assert_eq!(difficulty(-300.0), 0.0);
    }

    proptest! {
        #[test]
        fn easy_zone_is_flat(h in 0.0f32..5000.0) {
            prop_assert_eq!(difficulty(h), 0.0);
        }

        #[test]
        fn medium_zone_is_linear(h in 5000.0f32..15000.0) {
            let expected = (h - 5000.0) / 10000.0;
            prop_assert!((difficulty(h) - expected).abs() < 1e-5);
            prop_assert!((0.0..1.0).contains(&difficulty(h)));
        }

        #[test]
        fn hard_zone_grows(h in 15000.0f32..1.0e6) {
            let expected = 1.0 + (h - 15000.0) * 0.0001;
            prop_assert!((difficulty(h) - expected).abs() < 1e-3);
        }

        #[test]
        fn never_decreases(a in 0.0f32..1.0e6, b in 0.0f32..1.0e6) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(difficulty(lo) <= difficulty(hi));
        }
    }
}
