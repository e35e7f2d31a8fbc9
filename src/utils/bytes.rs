//! Human-scaled byte formatting
//!
//! Binary-multiple thresholds with a single-letter magnitude suffix,
//! matching the report's size columns and summary lines.

const KIB: f64 = 1024.0;
const MIB: f64 = 1_048_576.0;
const GIB: f64 = 1_073_741_824.0;
const TIB: f64 = 1_099_511_627_776.0;

/// Convert a byte count to a human-scaled string with exactly two
/// decimal digits and a magnitude suffix (`T`, `G`, `M`, `K`, or `b`).
///
/// The magnitude test uses the absolute value, so negative inputs (e.g.
/// a negative headroom estimate) scale by the same thresholds and keep
/// their sign in the numeric part.
///
/// # Examples
/// ```
/// use mongo_index_audit::utils::bytes::format_byte_size;
///
/// assert_eq!(format_byte_size(1023.0), "1023.00b");
/// assert_eq!(format_byte_size(1024.0), "1.00K");
/// assert_eq!(format_byte_size(1536.0), "1.50K");
/// ```
pub fn format_byte_size(bytes: f64) -> String {
    let magnitude = bytes.abs();
    if magnitude >= TIB {
        format!("{:.2}T", bytes / TIB)
    } else if magnitude >= GIB {
        format!("{:.2}G", bytes / GIB)
    } else if magnitude >= MIB {
        format!("{:.2}M", bytes / MIB)
    } else if magnitude >= KIB {
        format!("{:.2}K", bytes / KIB)
    } else {
        format!("{:.2}b", bytes)
    }
}
