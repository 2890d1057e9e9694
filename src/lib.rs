#![doc = include_str!("../README.md")]

mod error;
pub mod kdtree;
mod r#type;

pub use error::KdIndexError;
pub use kdtree::{Bounds, KdTree};
pub use r#type::Coordinate;

#[cfg(test)]
pub(crate) mod test;
