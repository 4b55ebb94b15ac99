//! SKU-style labels for product variants.
//!
//! The suffix comes from the wall clock, so two calls within the same few
//! milliseconds (or on machines with skewed clocks) can produce the same
//! label. Treat the result as a display label, not a storage key.

use chrono::{DateTime, Utc};

use crate::format::format_size;

const SUFFIX_LEN: usize = 4;

/// Builds `<style[..4]>_<color[..2]>_<size>_<time>` using the current time.
#[must_use]
pub fn generate_sku_code(style: &str, color: &str, size: f64) -> String {
    generate_sku_code_at(style, color, size, Utc::now())
}

/// Same as [`generate_sku_code`] with an explicit timestamp.
///
/// Prefixes are counted in characters. The size keeps its fractional part
/// with `.` replaced by `_`. The time part is the last four base-36 digits of
/// the millisecond timestamp, uppercase.
#[must_use]
pub fn generate_sku_code_at(style: &str, color: &str, size: f64, at: DateTime<Utc>) -> String {
    let style: String = style.chars().take(4).collect();
    let color: String = color.chars().take(2).collect();
    let size = format_size(Some(size)).replacen('.', "_", 1);
    let stamp = to_base36(at.timestamp_millis());
    let suffix = &stamp[stamp.len().saturating_sub(SUFFIX_LEN)..];
    format!("{style}_{color}_{size}_{suffix}")
}

fn to_base36(value: i64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    let mut n = value.unsigned_abs();
    let mut out = Vec::new();
    loop {
        #[allow(clippy::cast_possible_truncation)]
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
        if n == 0 {
            break;
        }
    }
    if value < 0 {
        out.push(b'-');
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}
