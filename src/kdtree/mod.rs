//! A dynamic, pointer-based K-D Tree supporting insertion, exact search, region search and
//! deletion.
//!
//! The core operations are free functions over a root [`Link`], so they compose with any owner
//! of a tree. [`KdTree`] is the owner most callers want.

#![warn(missing_docs)]

mod bounds;
mod delete;
mod index;
mod node;
mod region;
mod traversal;

pub use bounds::{Bounds, Coord};
pub use delete::{delete, delete_checked, find_extreme, remove, Extreme};
pub use index::{Iter, KdTree};
pub use node::{height, insert, search, Link, Node};
pub use region::{region_search, RegionIter};
pub use traversal::Cursor;
