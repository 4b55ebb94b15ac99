pub mod gender;
pub mod presets;

pub use gender::GenderType;
pub use presets::{COMMON_SIZES, CommonSizePreset, PresetCategory, common_sizes, preset_sizes};
