use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use shoe_sizes_shared_kernel::DomainError;

use super::presets::PresetCategory;

/// Target wearer recorded on a product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderType {
    AdultMale,
    AdultFemale,
    Boy,
    Girl,
    #[default]
    Unisex,
}

impl GenderType {
    pub const ALL: [Self; 5] = [Self::AdultMale, Self::AdultFemale, Self::Boy, Self::Girl, Self::Unisex];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AdultMale => "adult_male",
            Self::AdultFemale => "adult_female",
            Self::Boy => "boy",
            Self::Girl => "girl",
            Self::Unisex => "unisex",
        }
    }

    /// Preset list a size picker should offer for this wearer.
    #[must_use]
    pub const fn preset_category(self) -> PresetCategory {
        match self {
            Self::AdultMale => PresetCategory::Male,
            Self::AdultFemale => PresetCategory::Female,
            Self::Boy | Self::Girl => PresetCategory::Children,
            Self::Unisex => PresetCategory::All,
        }
    }
}

impl FromStr for GenderType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| DomainError::UnknownGenderType { name: s.to_string() })
    }
}

impl fmt::Display for GenderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
