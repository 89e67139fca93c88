use chrono::Local;

/// Run identifier shared by all artifacts of one scan: local time at minute
/// granularity, `MMDD-HHMM`. Runs started within the same minute reuse the
/// same suffix and overwrite each other's artifacts.
pub fn run_suffix() -> String {
    Local::now().format("%m%d-%H%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_shape() {
        let suffix = run_suffix();
        assert_eq!(suffix.len(), 9);
        assert_eq!(suffix.as_bytes()[4], b'-');
        for (i, c) in suffix.chars().enumerate() {
            if i != 4 {
                assert!(c.is_ascii_digit(), "unexpected char {:?} in {}", c, suffix);
            }
        }
    }

    #[test]
    fn test_suffix_stable_within_a_minute() {
        // two calls in the same minute must produce the same identifier;
        // retry once in case the test straddles a minute boundary
        let a = run_suffix();
        let b = run_suffix();
        if a != b {
            let c = run_suffix();
            let d = run_suffix();
            assert_eq!(c, d);
        }
    }
}
