//! Human-readable byte sizes

const KB: u64 = 1 << 10;
const MB: u64 = KB << 10;
const GB: u64 = MB << 10;
const TB: u64 = GB << 10;
const PB: u64 = TB << 10;

/// Format a byte count with 1024-based units
///
/// A unit is used only when the size is strictly greater than it, so exactly
/// 1024 bytes stays `1024B`.
///
/// # Examples
/// ```ignore
/// assert_eq!(human_size(1023), "1023B");
/// assert_eq!(human_size(2048), "2.000KB");
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn human_size(size: u64) -> String {
    if size > PB {
        format!("{:.3}PB", (size >> 40) as f64 / 1024.0)
    } else if size > TB {
        format!("{:.3}TB", (size >> 30) as f64 / 1024.0)
    } else if size > GB {
        format!("{:.3}GB", (size >> 20) as f64 / 1024.0)
    } else if size > MB {
        format!("{:.3}MB", (size >> 10) as f64 / 1024.0)
    } else if size > KB {
        format!("{:.3}KB", size as f64 / 1024.0)
    } else {
        format!("{size}B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes() {
        assert_eq!(human_size(0), "0B");
        assert_eq!(human_size(1023), "1023B");
        // Strict threshold: exactly one unit is not promoted
        assert_eq!(human_size(1024), "1024B");
    }

    #[test]
    fn test_kilobytes() {
        assert_eq!(human_size(1025), "1.001KB");
        assert_eq!(human_size(2048), "2.000KB");
        assert_eq!(human_size(1536), "1.500KB");
    }

    #[test]
    fn test_larger_units() {
        assert_eq!(human_size(MB + 1), "1.000MB");
        assert_eq!(human_size(GB), "1024.000MB");
        assert_eq!(human_size(GB + 1), "1.000GB");
        assert_eq!(human_size(5 * GB / 2), "2.500GB");
        assert_eq!(human_size(3 * TB), "3.000TB");
        assert_eq!(human_size(2 * PB), "2.000PB");
    }

    #[test]
    fn test_lower_bits_are_truncated() {
        // MB and above shift off whole kilobytes first
        assert_eq!(human_size(MB + 1023), "1.000MB");
    }
}
