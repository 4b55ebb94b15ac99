use std::{collections::BTreeSet, fmt, ops::Deref};

use serde::{Deserialize, Deserializer, Serialize};
use shoe_sizes_shared_kernel::ShoeSize;

use crate::format::format_size_range;

/// Deduplicated, ascending collection of shoe sizes.
///
/// Every constructor normalizes its input, so the ordering and uniqueness
/// invariants hold for any value of this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SizeSet(Vec<ShoeSize>);

impl SizeSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ShoeSize] {
        &self.0
    }

    #[must_use]
    pub fn first(&self) -> Option<ShoeSize> {
        self.0.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<ShoeSize> {
        self.0.last().copied()
    }

    /// Sizes as plain numbers, ascending.
    #[must_use]
    pub fn values(&self) -> Vec<u8> {
        self.0.iter().map(|s| s.value()).collect()
    }

    /// Compact rendering: `39-42` when contiguous, `36,38,40` otherwise.
    #[must_use]
    pub fn to_range_string(&self) -> String {
        let values: Vec<f64> = self.0.iter().map(|s| s.as_f64()).collect();
        format_size_range(&values)
    }
}

impl Deref for SizeSet {
    type Target = [ShoeSize];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<ShoeSize> for SizeSet {
    fn from_iter<I: IntoIterator<Item = ShoeSize>>(iter: I) -> Self {
        let unique: BTreeSet<ShoeSize> = iter.into_iter().collect();
        Self(unique.into_iter().collect())
    }
}

impl Extend<ShoeSize> for SizeSet {
    fn extend<I: IntoIterator<Item = ShoeSize>>(&mut self, iter: I) {
        let merged: BTreeSet<ShoeSize> = self.0.drain(..).chain(iter).collect();
        self.0 = merged.into_iter().collect();
    }
}

impl From<&[ShoeSize]> for SizeSet {
    fn from(sizes: &[ShoeSize]) -> Self {
        sizes.iter().copied().collect()
    }
}

impl IntoIterator for SizeSet {
    type Item = ShoeSize;
    type IntoIter = std::vec::IntoIter<ShoeSize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SizeSet {
    type Item = &'a ShoeSize;
    type IntoIter = std::slice::Iter<'a, ShoeSize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for SizeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_range_string())
    }
}

impl<'de> Deserialize<'de> for SizeSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let sizes = Vec::<ShoeSize>::deserialize(deserializer)?;
        Ok(sizes.into_iter().collect())
    }
}
