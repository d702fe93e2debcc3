//! Sanitizing helpers for raw text coming out of the duration inputs.

/// Clamp `value` into `[min, max]`. Callers must pass `min <= max`.
pub fn clamp(value: u32, min: u32, max: u32) -> u32 {
    debug_assert!(min <= max, "clamp called with min > max");
    value.max(min).min(max)
}

/// Parse free-form text from a seconds input into a bounded integer.
///
/// Strips every non-digit character, reads the rest as base-10, and clamps
/// into `[min, max]`. Empty or fully non-numeric input degrades to 0 rather
/// than failing; a digit run too long for the type saturates so it still
/// clamps to `max` instead of wrapping.
pub fn parse_seconds(input: &str, min: u32, max: u32) -> u32 {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let numeric = if digits.is_empty() {
        0
    } else {
        digits.parse::<u64>().unwrap_or(u64::MAX)
    };
    clamp(numeric.min(u32::MAX as u64) as u32, min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_non_digits() {
        assert_eq!(parse_seconds("7a", 0, 60), 7);
        assert_eq!(parse_seconds(" 1 2 ", 0, 60), 12);
    }

    #[test]
    fn test_empty_and_garbage_degrade_to_zero() {
        assert_eq!(parse_seconds("", 0, 60), 0);
        assert_eq!(parse_seconds("abc", 0, 60), 0);
    }

    #[test]
    fn test_clamps_into_range() {
        assert_eq!(parse_seconds("999", 0, 60), 60);
        assert_eq!(parse_seconds("3", 5, 60), 5);
    }

    #[test]
    fn test_sign_is_stripped_not_applied() {
        // "-5" loses the sign during digit filtering; the result is 5.
        assert_eq!(parse_seconds("-5", 0, 60), 5);
    }

    #[test]
    fn test_overlong_digit_runs_saturate() {
        assert_eq!(parse_seconds("99999999999999999999999", 0, 60), 60);
    }

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(clamp(10, 0, 60), 10);
        assert_eq!(clamp(61, 0, 60), 60);
        assert_eq!(clamp(0, 1, 60), 1);
    }
}
