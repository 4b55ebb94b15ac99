pub mod number;
pub mod size_range;

pub use size_range::{RangeToken, is_valid_size_range, parse_size_range};
