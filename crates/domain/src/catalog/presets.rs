use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use shoe_sizes_shared_kernel::{DomainError, ShoeSize};

const fn span<const N: usize>(first: u8) -> [ShoeSize; N] {
    let mut out = [ShoeSize::MIN; N];
    let mut i = 0;
    while i < N {
        #[allow(clippy::cast_possible_truncation)]
        let value = first + i as u8;
        out[i] = match ShoeSize::new(value) {
            Some(size) => size,
            None => panic!("preset size outside 22..=45"),
        };
        i += 1;
    }
    out
}

static CHILDREN: [ShoeSize; 16] = span(22);
static FEMALE: [ShoeSize; 6] = span(35);
static MALE: [ShoeSize; 7] = span(39);
static ALL: [ShoeSize; 24] = span(22);

/// Demographic key for the quick-select size lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetCategory {
    Children,
    Female,
    Male,
    #[default]
    All,
}

impl PresetCategory {
    pub const ALL: [Self; 4] = [Self::Children, Self::Female, Self::Male, Self::All];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Children => "children",
            Self::Female => "female",
            Self::Male => "male",
            Self::All => "all",
        }
    }

    #[must_use]
    pub fn sizes(self) -> &'static [ShoeSize] {
        match self {
            Self::Children => &CHILDREN,
            Self::Female => &FEMALE,
            Self::Male => &MALE,
            Self::All => &ALL,
        }
    }

    /// Like [`FromStr`], but unknown names fall back to [`PresetCategory::All`].
    #[must_use]
    pub fn lookup(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::debug!("unknown preset category {name:?}, using all");
            Self::All
        })
    }
}

impl FromStr for PresetCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::UnknownPresetCategory { name: s.to_string() })
    }
}

impl fmt::Display for PresetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preset sizes for `category`; unknown categories yield the full range.
#[must_use]
pub fn preset_sizes(category: &str) -> &'static [ShoeSize] {
    PresetCategory::lookup(category).sizes()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetKind {
    Preset,
}

/// Labeled range string offered by size pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommonSizePreset {
    pub label: &'static str,
    pub value: &'static str,
    #[serde(rename = "type")]
    pub kind: PresetKind,
}

pub static COMMON_SIZES: [CommonSizePreset; 4] = [
    CommonSizePreset { label: "Children's common (22-37)", value: "22-37", kind: PresetKind::Preset },
    CommonSizePreset { label: "Women's common (35-40)", value: "35-40", kind: PresetKind::Preset },
    CommonSizePreset { label: "Men's common (39-43)", value: "39-43", kind: PresetKind::Preset },
    CommonSizePreset { label: "Full range (22-45)", value: "22-45", kind: PresetKind::Preset },
];

#[must_use]
pub fn common_sizes() -> &'static [CommonSizePreset] {
    &COMMON_SIZES
}
