// crates/shared-kernel/src/value_objects/mod.rs
pub mod shoe_size;

pub use shoe_size::ShoeSize;
