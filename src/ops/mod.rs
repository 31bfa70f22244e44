//! The four iteration primitives, as free functions over [`Value`]
//!
//! [`Value`]: crate::value::Value

pub mod mapping;
pub mod sequence;

pub use mapping::keys_of;
pub use sequence::{for_each, includes, map};
