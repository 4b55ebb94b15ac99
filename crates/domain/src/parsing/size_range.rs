use std::str::FromStr;

use shoe_sizes_shared_kernel::ShoeSize;

use super::number::{is_blank, parse_leading_number, trim_blank};
use crate::model::SizeSet;

/// A `low-high` token such as `39-42` or `42 - 39`.
///
/// Each endpoint is one or more ASCII digits with an optional `.5` suffix.
/// Endpoints are kept in input order; [`RangeToken::sizes`] normalizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeToken {
    pub start: f64,
    pub end: f64,
}

impl RangeToken {
    /// Whole sizes covered by the token.
    ///
    /// Walks from `floor(min)` up to `max` in steps of one, so a `.5` upper
    /// endpoint is never reached and a `.5` lower endpoint rounds down
    /// (`37.5-39` covers 37, 38 and 39). Only
    /// members inside `22..=45` are yielded; the walk is clamped to that window.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sizes(&self) -> impl Iterator<Item = ShoeSize> + use<> {
        let lo = self.start.min(self.end).floor().max(ShoeSize::MIN.as_f64());
        let hi = self.start.max(self.end).min(ShoeSize::MAX.as_f64()).floor();
        let (lo, hi) = if lo <= hi { (lo as u8, hi as u8) } else { (1, 0) };
        (lo..=hi).filter_map(ShoeSize::new)
    }
}

impl FromStr for RangeToken {
    type Err = ();

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (left, right) = token.split_once('-').ok_or(())?;
        let left = left.trim_end_matches(is_blank);
        let right = right.trim_start_matches(is_blank);
        Ok(Self { start: parse_endpoint(left).ok_or(())?, end: parse_endpoint(right).ok_or(())? })
    }
}

/// `\d+(\.5)?`, nothing else.
fn parse_endpoint(s: &str) -> Option<f64> {
    let digits = s.strip_suffix(".5").unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parses a size specification such as `35-37,39,40-42` into a [`SizeSet`].
///
/// Tokens are separated by commas. A token is either a range (see
/// [`RangeToken`]) or a bare number. Anything that does not yield a whole size
/// in `22..=45` is dropped without error.
#[must_use]
pub fn parse_size_range(text: &str) -> SizeSet {
    let mut found = Vec::new();

    for token in text.split(',').map(trim_blank).filter(|t| !t.is_empty()) {
        if let Ok(range) = token.parse::<RangeToken>() {
            found.extend(range.sizes());
            continue;
        }

        match parse_leading_number(token).map(ShoeSize::try_from) {
            Some(Ok(size)) => found.push(size),
            _ => log::trace!("dropping size token {token:?}"),
        }
    }

    found.into_iter().collect()
}

/// `true` when [`parse_size_range`] yields at least one size.
#[must_use]
pub fn is_valid_size_range(text: &str) -> bool {
    !parse_size_range(text).is_empty()
}
