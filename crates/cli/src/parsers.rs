use std::{fmt::Display, str::FromStr};

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .trim()
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a finite, non-negative price.
///
/// # Errors
/// Returns an error if the input is not a number, is negative, or is not finite.
pub fn parse_price(s: &str) -> Result<f64, String> {
    let value: f64 = parse_bounded_number(s, 0.0, None)?;
    if !value.is_finite() {
        return Err(format!("price must be finite: {s}"));
    }
    Ok(value)
}

/// Parse a stock alert threshold.
///
/// # Errors
/// Returns an error if the input is not a non-negative integer.
pub fn parse_stock_alert(s: &str) -> Result<u32, String> {
    parse_bounded_number(s, 0, None)
}

/// Parse a numeric size for labels. Half sizes are allowed here.
///
/// # Errors
/// Returns an error if the input is not a finite number.
pub fn parse_size_value(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|err| format!("invalid size '{s}': {err}"))?;
    if !value.is_finite() {
        return Err(format!("size must be finite: {s}"));
    }
    Ok(value)
}
