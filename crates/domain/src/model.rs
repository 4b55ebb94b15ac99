pub mod batch_result;
pub mod product_draft;
pub mod size_set;

pub use batch_result::BatchParseResult;
pub use product_draft::{BatchEntry, ProductDraft};
pub use size_set::SizeSet;
