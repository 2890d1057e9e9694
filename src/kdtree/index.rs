use geo_traits::RectTrait;
use num_traits::{Num, NumCast};

use crate::kdtree::bounds::Bounds;
use crate::kdtree::delete::{delete, remove};
use crate::kdtree::node::{height, insert, search, Link, Node};
use crate::kdtree::region::{region_search, RegionIter};
use crate::kdtree::traversal::Cursor;
use crate::r#type::Coordinate;

/// An owned, mutable k-d tree of `K`-dimensional points.
///
/// This is a thin owner around the root [`Link`] that also tracks the number of stored points.
/// Every operation forwards to the free functions in [`crate::kdtree`], which work on any root
/// link directly.
///
/// Trees are not comparable with `==`: the same points inserted in a different order give a
/// different shape. Compare the sorted output of [`iter`][KdTree::iter] instead.
#[derive(Debug, Clone)]
pub struct KdTree<N: Coordinate, const K: usize> {
    root: Link<N, K>,
    len: usize,
}

impl<N: Coordinate, const K: usize> Default for KdTree<N, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Coordinate, const K: usize> KdTree<N, K> {
    /// Create an empty tree.
    pub fn new() -> Self {
        assert!(K > 0, "a KdTree needs at least one dimension");
        Self { root: None, len: 0 }
    }

    /// The number of points in this tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if this tree holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Remove every point.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// The root node, or `None` for an empty tree.
    #[inline]
    pub fn root(&self) -> Option<&Node<N, K>> {
        self.root.as_deref()
    }

    /// A cursor on the root node for manual traversal.
    pub fn cursor(&self) -> Option<Cursor<'_, N, K>> {
        self.root().map(Cursor::from_root)
    }

    /// Consume this tree and return its root link.
    pub fn into_root(self) -> Link<N, K> {
        self.root
    }

    /// The number of levels in this tree. No balancing is done, so inserting points in sorted
    /// order yields a height equal to the number of points.
    pub fn height(&self) -> usize {
        height(self.root())
    }

    /// Insert a point.
    ///
    /// Returns `None` if the point was added, or the node already holding an equal point.
    pub fn insert(&mut self, value: [N; K]) -> Option<&Node<N, K>> {
        let existing = insert(&mut self.root, value);
        if existing.is_none() {
            self.len += 1;
        }
        existing
    }

    /// Find the node holding exactly `value`.
    pub fn search(&self, value: &[N; K]) -> Option<&Node<N, K>> {
        search(self.root(), value)
    }

    /// Returns `true` if `value` is stored in this tree.
    pub fn contains(&self, value: &[N; K]) -> bool {
        self.search(value).is_some()
    }

    /// Search the tree for points within a given box.
    ///
    /// Returns the matching nodes in no particular order.
    pub fn range(&self, bounds: &Bounds<N, K>) -> Vec<&Node<N, K>> {
        region_search(self.root(), bounds)
    }

    /// Lazily search the tree for points within a given box.
    pub fn range_iter(&self, bounds: Bounds<N, K>) -> RegionIter<'_, N, K> {
        RegionIter::new(self.root(), bounds)
    }

    /// Remove the point equal to `value`. Returns `true` if it was present.
    pub fn remove(&mut self, value: &[N; K]) -> bool {
        let removed = remove(&mut self.root, value);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Delete the root node and return its point, or `None` for an empty tree.
    pub fn delete_root(&mut self) -> Option<[N; K]> {
        let root = self.root.take()?;
        let value = root.value;
        self.root = delete(root, 0);
        self.len -= 1;
        Some(value)
    }

    /// An iterator over every stored point, in pre-order.
    pub fn iter(&self) -> Iter<'_, N, K> {
        Iter {
            stack: self.root().into_iter().collect(),
        }
    }
}

impl<N: Coordinate + Num + NumCast> KdTree<N, 2> {
    /// Search the tree for points within a given geo-traits rectangle.
    pub fn range_rect(&self, rect: &impl RectTrait<T = N>) -> Vec<&Node<N, 2>> {
        self.range(&Bounds::from_rect(rect))
    }
}

/// A pre-order iterator over the points of a [`KdTree`].
#[derive(Debug, Clone)]
pub struct Iter<'a, N: Coordinate, const K: usize> {
    stack: Vec<&'a Node<N, K>>,
}

impl<'a, N: Coordinate, const K: usize> Iterator for Iter<'a, N, K> {
    type Item = &'a [N; K];

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.hi());
        self.stack.extend(node.lo());
        Some(node.value())
    }
}

impl<'a, N: Coordinate, const K: usize> IntoIterator for &'a KdTree<N, K> {
    type Item = &'a [N; K];
    type IntoIter = Iter<'a, N, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: Coordinate, const K: usize> Extend<[N; K]> for KdTree<N, K> {
    fn extend<I: IntoIterator<Item = [N; K]>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<N: Coordinate, const K: usize> FromIterator<[N; K]> for KdTree<N, K> {
    fn from_iter<I: IntoIterator<Item = [N; K]>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
