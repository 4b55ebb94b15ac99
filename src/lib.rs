//! Shoe size range engine.
//!
//! Parses size specifications entered during batch product entry
//! (`39-42`, `36,38,40`, `35-37,39,40-42`) into normalized [`SizeSet`]s,
//! renders them back compactly, and expands a batch entry into one product
//! draft per size.
//!
//! ```
//! use shoe_sizes::{format_size_range, parse_batch_size_input, parse_size_range};
//!
//! assert_eq!(parse_size_range("42-39").values(), vec![39, 40, 41, 42]);
//! assert_eq!(format_size_range(&[36.0, 38.0, 40.0]), "36,38,40");
//!
//! let result = parse_batch_size_input("22-45");
//! assert!(!result.valid);
//! ```
#![allow(clippy::multiple_crate_versions)]

pub use shoe_sizes_domain::{
    BatchEntry, BatchParseResult, BatchSizeError, COMMON_SIZES, CommonSizePreset, GenderType,
    MAX_BATCH_SIZES, PresetCategory, ProductDraft, SizeSet, common_sizes, expand_batch,
    expand_batch_at, format_raw_size, format_size, format_size_range, generate_sku_code,
    generate_sku_code_at, is_valid_size_range, parse_batch_size_input, parse_size_range,
    preset_sizes,
};
pub use shoe_sizes_shared_kernel::{
    DomainError, DomainResult, ErrorContext, Result, ShoeSize, ShoeSizesError,
};

pub mod domain {
    pub use shoe_sizes_domain::*;
}

pub mod shared {
    pub use shoe_sizes_shared_kernel::*;
}
