use tinyvec::TinyVec;

use crate::kdtree::bounds::Bounds;
use crate::kdtree::node::Node;
use crate::kdtree::traversal::Cursor;
use crate::r#type::Coordinate;

/// A lazy region search over a KdTree.
///
/// Yields every node whose value lies inside the query box, in pre-order. Subtrees whose
/// reachable box does not intersect the query are never visited.
#[derive(Debug, Clone)]
pub struct RegionIter<'a, N: Coordinate, const K: usize> {
    target: Bounds<N, K>,
    // Use TinyVec to avoid heap allocations for shallow trees
    stack: TinyVec<[Option<Cursor<'a, N, K>>; 32]>,
}

impl<'a, N: Coordinate, const K: usize> RegionIter<'a, N, K> {
    /// Start a region search for `target` below `root`.
    pub fn new(root: Option<&'a Node<N, K>>, target: Bounds<N, K>) -> Self {
        let mut stack = TinyVec::new();
        if let Some(root) = root {
            let cursor = Cursor::from_root(root);
            if cursor.reach().intersects(&target) {
                stack.push(Some(cursor));
            }
        }
        Self { target, stack }
    }
}

impl<'a, N: Coordinate, const K: usize> Iterator for RegionIter<'a, N, K> {
    type Item = &'a Node<N, K>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(cursor) = self.stack.pop() {
            let Some(cursor) = cursor else {
                continue;
            };

            // queue the halves whose narrowed box intersects the query
            // Note: hi is pushed first so that lo is popped first
            let (lo, hi) = cursor.children();
            if let Some(hi) = hi.filter(|hi| hi.reach().intersects(&self.target)) {
                self.stack.push(Some(hi));
            }
            if let Some(lo) = lo.filter(|lo| lo.reach().intersects(&self.target)) {
                self.stack.push(Some(lo));
            }

            if self.target.contains(cursor.value()) {
                return Some(cursor.node());
            }
        }
        None
    }
}

/// Collect every node below `root` whose value lies inside `target`.
///
/// The result is unordered and empty, never absent, when nothing matches.
pub fn region_search<'a, N: Coordinate, const K: usize>(
    root: Option<&'a Node<N, K>>,
    target: &Bounds<N, K>,
) -> Vec<&'a Node<N, K>> {
    RegionIter::new(root, *target).collect()
}
