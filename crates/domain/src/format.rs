//! Rendering sizes for display.

use crate::parsing::number::parse_leading_number;

/// Renders a single size. `None` renders as an empty string; whole values
/// drop the decimal point and fractional values keep it (`37.5`).
#[must_use]
pub fn format_size(size: Option<f64>) -> String {
    size.map(format_number).unwrap_or_default()
}

/// Renders a size stored as text. Input without a leading number is returned
/// unchanged.
#[must_use]
pub fn format_raw_size(raw: &str) -> String {
    parse_leading_number(raw).map_or_else(|| raw.to_string(), format_number)
}

/// Renders sizes compactly.
///
/// Contiguous runs (every neighbour exactly one apart after sorting) become
/// `first-last`; anything else is listed ascending and comma separated.
#[must_use]
pub fn format_size_range(sizes: &[f64]) -> String {
    match sizes {
        [] => String::new(),
        [only] => format_number(*only),
        _ => {
            let mut sorted = sizes.to_vec();
            sorted.sort_by(f64::total_cmp);

            let contiguous = sorted.windows(2).all(|pair| pair[1] - pair[0] == 1.0);
            if let (true, Some(first), Some(last)) = (contiguous, sorted.first(), sorted.last()) {
                return format!("{}-{}", format_number(*first), format_number(*last));
            }

            sorted.iter().map(|s| format_number(*s)).collect::<Vec<_>>().join(",")
        }
    }
}

// Number-to-text the way a browser prints numbers: whole values drop `.0`,
// very large or very small magnitudes switch to `1e+21` / `1e-7` notation.
fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }
    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}
