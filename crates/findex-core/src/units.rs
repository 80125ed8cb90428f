//! Byte-magnitude conversion.
//!
//! Sizes are stored and compared as raw byte counts; floating point only
//! appears at the display boundary and when scaling a suffixed input.

use crate::error::{FindexError, Result};

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count as a human-readable magnitude string.
///
/// Divides by 1024 while the value is at least 1024, stepping through
/// B/KB/MB/GB/TB and falling through to PB. Always two decimal places:
/// `1536` becomes `"1.50 KB"`.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{:.2} {}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.2} PB", size)
}

/// Parse a size string with an optional unit suffix into a byte count.
///
/// The string must start with a decimal number (optionally fractional).
/// The remainder is checked case-insensitively for the substrings `kb`,
/// `mb`, `gb`, `tb` — in that order, first match wins. Without a suffix
/// the number is taken to already be a byte count. Fractional products
/// truncate toward zero.
pub fn parse_size(input: &str) -> Result<u64> {
    let lowered = input.trim().to_lowercase();
    let bytes = lowered.as_bytes();

    let mut end = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == 0 {
        return Err(FindexError::InvalidFormat(input.to_string()));
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac = end + 1;
        while frac < bytes.len() && bytes[frac].is_ascii_digit() {
            frac += 1;
        }
        if frac > end + 1 {
            end = frac;
        }
    }

    let value: f64 = lowered[..end]
        .parse()
        .map_err(|_| FindexError::InvalidFormat(input.to_string()))?;

    let multiplier: u64 = if lowered.contains("kb") {
        1024
    } else if lowered.contains("mb") {
        1024 * 1024
    } else if lowered.contains("gb") {
        1024 * 1024 * 1024
    } else if lowered.contains("tb") {
        1024u64.pow(4)
    } else {
        1
    };

    Ok((value * multiplier as f64) as u64)
}
