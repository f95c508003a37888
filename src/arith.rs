//==============================================================================
// Arithmetic helper
//==============================================================================

/// Sum of three integers. Widened to `i64`, so every `i32` triple has an
/// exact result.
pub fn add(a: i32, b: i32, c: i32) -> i64 {
    a as i64 + b as i64 + c as i64
}

/// A sum used as a condition: non-zero is true.
pub fn is_truthy(value: i64) -> bool {
    value != 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_add_basic() {
        assert_eq!(add(0, 0, 0), 0);
        assert_eq!(add(0, 2, 0), 2);
        assert_eq!(add(1, 2, 3), 6);
        assert_eq!(add(-1, -2, 3), 0);
    }

    #[test]
    fn test_add_bounds_do_not_overflow() {
        assert_eq!(add(i32::MAX, i32::MAX, i32::MAX), 3 * i32::MAX as i64);
        assert_eq!(add(i32::MIN, i32::MIN, i32::MIN), 3 * i32::MIN as i64);
        assert_eq!(add(i32::MAX, i32::MIN, 0), -1);
        assert_eq!(add(i32::MAX, 1, 0), i32::MAX as i64 + 1);
    }

    #[test]
    fn test_is_truthy() {
        assert!(!is_truthy(0));
        assert!(is_truthy(1));
        assert!(is_truthy(-1));
    }

    proptest! {
        #[test]
        fn prop_add_is_exact(a: i32, b: i32, c: i32) {
            let expected = a as i128 + b as i128 + c as i128;
            prop_assert_eq!(add(a, b, c) as i128, expected);
        }

        #[test]
        fn prop_add_is_commutative(a: i32, b: i32, c: i32) {
            prop_assert_eq!(add(a, b, c), add(c, a, b));
            prop_assert_eq!(add(a, b, c), add(b, c, a));
        }
    }
}
