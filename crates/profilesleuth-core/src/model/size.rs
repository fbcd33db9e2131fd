/// Size helpers — byte counts to megabytes.
///
/// All internal sizes are `u64` bytes. Floating point is only used
/// for threshold comparison and at the display-formatting boundary.

/// Binary megabyte: 1024 × 1024 bytes.
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Sizes strictly above this many MB (1 GiB) are highlighted in text output.
pub const LARGE_SIZE_MB: f64 = 1024.0;

/// Convert a byte count to binary megabytes.
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Format a byte count as megabytes with two decimals, e.g. `"100.00 MB"`.
pub fn format_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes_to_mb(bytes))
}

/// `true` when `bytes` is at or above `min_size_mb`. The boundary is inclusive.
pub fn meets_threshold(bytes: u64, min_size_mb: f64) -> bool {
    bytes_to_mb(bytes) >= min_size_mb
}

/// `true` when `bytes` should be highlighted as unusually large.
pub fn is_large(bytes: u64) -> bool {
    bytes_to_mb(bytes) > LARGE_SIZE_MB
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: u64 = 1024 * 1024;

    #[test]
    fn test_bytes_to_mb() {
        assert_eq!(bytes_to_mb(0), 0.0);
        assert_eq!(bytes_to_mb(MIB), 1.0);
        assert_eq!(bytes_to_mb(MIB / 2), 0.5);
    }

    #[test]
    fn test_format_mb() {
        assert_eq!(format_mb(0), "0.00 MB");
        assert_eq!(format_mb(100 * MIB), "100.00 MB");
        assert_eq!(format_mb(MIB + MIB / 4), "1.25 MB");
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        assert!(meets_threshold(50 * MIB, 50.0));
        assert!(!meets_threshold(50 * MIB - 1, 50.0));
        assert!(meets_threshold(0, 0.0));
    }

    #[test]
    fn test_is_large() {
        assert!(!is_large(1024 * MIB));
        assert!(is_large(1024 * MIB + 1));
    }
}
