//! Leading-number scanning for bare size tokens.
//!
//! A bare token is read the way a lenient form field reads a number: leading
//! whitespace is skipped, then the longest decimal literal at the front of the
//! string is taken and anything after it is ignored (`"40abc"` reads as `40`,
//! `"39-"` as `39`). Tokens with no leading literal read as nothing.

/// Whitespace accepted around tokens, including the byte-order mark.
/// NEL (U+0085) is not blank.
#[inline]
pub fn is_blank(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Trims [`is_blank`] characters from both ends.
#[inline]
pub fn trim_blank(s: &str) -> &str {
    s.trim_matches(is_blank)
}

/// Parses the longest decimal literal at the start of `input`.
///
/// Accepts an optional sign, `Infinity`, digits with an optional fraction, a
/// fraction-only literal (`.5`), and an exponent when at least one exponent
/// digit follows the marker.
#[must_use]
pub fn parse_leading_number(input: &str) -> Option<f64> {
    let s = input.trim_start_matches(is_blank);
    let bytes = s.as_bytes();
    let mut end = 0;

    let negative = match bytes.first() {
        Some(b'+') => {
            end = 1;
            false
        }
        Some(b'-') => {
            end = 1;
            true
        }
        _ => false,
    };

    if s[end..].starts_with("Infinity") {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_plain_numbers() {
        assert_eq!(parse_leading_number("40"), Some(40.0));
        assert_eq!(parse_leading_number("  37.5"), Some(37.5));
        assert_eq!(parse_leading_number(".5"), Some(0.5));
        assert_eq!(parse_leading_number("40."), Some(40.0));
    }

    #[test]
    fn stops_at_trailing_garbage() {
        assert_eq!(parse_leading_number("40abc"), Some(40.0));
        assert_eq!(parse_leading_number("39-"), Some(39.0));
        assert_eq!(parse_leading_number("39 - 42 - 44"), Some(39.0));
        assert_eq!(parse_leading_number("4e"), Some(4.0));
    }

    #[test]
    fn handles_sign_and_exponent() {
        assert_eq!(parse_leading_number("-40"), Some(-40.0));
        assert_eq!(parse_leading_number("+41"), Some(41.0));
        assert_eq!(parse_leading_number("4e1"), Some(40.0));
        assert_eq!(parse_leading_number("4.2E+1x"), Some(42.0));
        assert_eq!(parse_leading_number("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(parse_leading_number(""), None);
        assert_eq!(parse_leading_number("abc"), None);
        assert_eq!(parse_leading_number("-"), None);
        assert_eq!(parse_leading_number("."), None);
        assert_eq!(parse_leading_number("e5"), None);
    }

    #[test]
    fn trims_byte_order_mark() {
        assert_eq!(trim_blank("\u{feff} 40 "), "40");
    }

    #[test]
    fn next_line_is_not_blank() {
        assert!(!is_blank('\u{85}'));
        assert_eq!(trim_blank("\u{85}40"), "\u{85}40");
        assert_eq!(parse_leading_number("\u{85}40"), None);
    }
}
