// crates/shared-kernel/src/value_objects/shoe_size.rs
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DomainError;

/// Whole shoe size within the supported range `22..=45`.
///
/// Half sizes are never representable: the validity predicate only admits
/// integral values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct ShoeSize(u8);

impl ShoeSize {
    pub const MIN: Self = Self(22);
    pub const MAX: Self = Self(45);

    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 { Some(Self(value)) } else { None }
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Integral and inside `22..=45`.
    #[inline]
    #[must_use]
    pub fn is_valid(value: f64) -> bool {
        value >= f64::from(Self::MIN.0) && value <= f64::from(Self::MAX.0) && value.fract() == 0.0
    }

    #[inline]
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl TryFrom<f64> for ShoeSize {
    type Error = DomainError;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if Self::is_valid(value) {
            // Guarded by `is_valid`: integral and within u8 range.
            Ok(Self(value as u8))
        } else {
            Err(out_of_range(value))
        }
    }
}

impl TryFrom<u8> for ShoeSize {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| out_of_range(f64::from(value)))
    }
}

impl From<ShoeSize> for u8 {
    fn from(size: ShoeSize) -> Self {
        size.0
    }
}

impl From<ShoeSize> for f64 {
    fn from(size: ShoeSize) -> Self {
        f64::from(size.0)
    }
}

impl fmt::Display for ShoeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for ShoeSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}

fn out_of_range(value: f64) -> DomainError {
    DomainError::SizeOutOfRange {
        value: value.to_string(),
        min: ShoeSize::MIN.0,
        max: ShoeSize::MAX.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(ShoeSize::new(22), Some(ShoeSize::MIN));
        assert_eq!(ShoeSize::new(45), Some(ShoeSize::MAX));
        assert!(ShoeSize::new(21).is_none());
        assert!(ShoeSize::new(46).is_none());
    }

    #[test]
    fn half_sizes_are_rejected() {
        assert!(!ShoeSize::is_valid(37.5));
        assert!(ShoeSize::try_from(37.5).is_err());
        assert!(ShoeSize::is_valid(38.0));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(!ShoeSize::is_valid(f64::NAN));
        assert!(!ShoeSize::is_valid(f64::INFINITY));
    }

    #[test]
    fn out_of_range_error_names_bounds() {
        let err = ShoeSize::try_from(50_u8).unwrap_err();
        assert_eq!(err.to_string(), "Size 50 is outside the supported range 22-45");
    }
}
