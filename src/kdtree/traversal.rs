//! Utilities to traverse the KdTree structure.

use geo_traits::RectTrait;
use num_traits::{Num, NumCast};

use crate::kdtree::bounds::{impl_rect_geometry, Bounds, Coord};
use crate::kdtree::node::Node;
use crate::r#type::{next_axis, Coordinate};

/// A position in a KdTree, for manual traversal.
///
/// Alongside the node it keeps what a traversal from the root has learned: the discriminator of
/// the node and the box of coordinates reachable below it.
#[derive(Debug, Clone)]
pub struct Cursor<'a, N: Coordinate, const K: usize> {
    node: &'a Node<N, K>,

    /// The axis this node splits its children over.
    axis: usize,

    /// Every coordinate in this subtree lies inside this box.
    reach: Bounds<N, K>,
}

impl<'a, N: Coordinate, const K: usize> Cursor<'a, N, K> {
    pub(crate) fn new(node: &'a Node<N, K>, axis: usize, reach: Bounds<N, K>) -> Self {
        Self { node, axis, reach }
    }

    pub(crate) fn from_root(root: &'a Node<N, K>) -> Self {
        Self::new(root, 0, Bounds::everything())
    }

    /// The node under this cursor.
    #[inline]
    pub fn node(&self) -> &'a Node<N, K> {
        self.node
    }

    /// The coordinates of the node under this cursor.
    #[inline]
    pub fn value(&self) -> &'a [N; K] {
        &self.node.value
    }

    /// The discriminator of the node under this cursor.
    #[inline]
    pub fn axis(&self) -> usize {
        self.axis
    }

    /// The box that bounds every coordinate in this subtree.
    #[inline]
    pub fn reach(&self) -> &Bounds<N, K> {
        &self.reach
    }

    /// Both children, each with its narrowed reachable box. A missing child is `None`.
    pub fn children(&self) -> (Option<Cursor<'a, N, K>>, Option<Cursor<'a, N, K>>) {
        let (lo_reach, hi_reach) = self.reach.split(self.axis, self.node.value[self.axis]);
        let axis = next_axis::<K>(self.axis);
        (
            self.node.lo().map(|lo| Cursor::new(lo, axis, lo_reach)),
            self.node.hi().map(|hi| Cursor::new(hi, axis, hi_reach)),
        )
    }

    /// The child holding coordinates less than or equal to this node on its discriminator.
    pub fn lo(&self) -> Option<Cursor<'a, N, K>> {
        self.children().0
    }

    /// The child holding coordinates greater than this node on its discriminator.
    pub fn hi(&self) -> Option<Cursor<'a, N, K>> {
        self.children().1
    }

    /// Returns `true` if this is a leaf node without children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }

    /// Returns `true` if this is an intermediate node with children.
    #[inline]
    pub fn is_parent(&self) -> bool {
        !self.is_leaf()
    }
}

impl_rect_geometry!(Cursor<'_, N, 2>);

impl<N: Coordinate + Num + NumCast> RectTrait for Cursor<'_, N, 2> {
    type CoordType<'b>
        = Coord<N>
    where
        Self: 'b;

    fn min(&self) -> Self::CoordType<'_> {
        (*self.reach.min()).into()
    }

    fn max(&self) -> Self::CoordType<'_> {
        (*self.reach.max()).into()
    }
}
