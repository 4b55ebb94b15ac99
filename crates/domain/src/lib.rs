#![allow(clippy::multiple_crate_versions)]

pub mod batch;
pub mod catalog;
pub mod format;
pub mod model;
pub mod parsing;
pub mod sku;

pub use batch::{BatchSizeError, MAX_BATCH_SIZES, expand_batch, expand_batch_at, parse_batch_size_input};
pub use catalog::{COMMON_SIZES, CommonSizePreset, GenderType, PresetCategory, common_sizes, preset_sizes};
pub use format::{format_raw_size, format_size, format_size_range};
pub use model::{BatchEntry, BatchParseResult, ProductDraft, SizeSet};
pub use parsing::{is_valid_size_range, parse_size_range};
pub use sku::{generate_sku_code, generate_sku_code_at};
