//! Node deletion that keeps the discriminator invariant without rebuilding the tree.
//!
//! A deleted node is replaced by the node holding the extreme value of the deleted node's
//! discriminator in one of its subtrees: the minimum of `hi` when `hi` exists, otherwise the
//! maximum of `lo`. The replacement is itself deleted from its old position, recursively.
//!
//! Preferring `hi` means repeated deletions drain the `hi` side first, which can leave the tree
//! lopsided over time. Nothing here rebalances.

use crate::error::{KdIndexError, Result};
use crate::kdtree::node::{insert_at, Link, Node};
use crate::r#type::{next_axis, Coordinate};

/// Which end of an axis [`find_extreme`] looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    /// The smallest coordinate on the axis.
    Min,
    /// The largest coordinate on the axis.
    Max,
}

impl Extreme {
    /// Whether `candidate` beats `current` on `axis`. Ties keep `current`.
    #[inline]
    fn beats<N: Coordinate, const K: usize>(
        self,
        candidate: &[N; K],
        current: &[N; K],
        axis: usize,
    ) -> bool {
        match self {
            Extreme::Min => candidate[axis] < current[axis],
            Extreme::Max => candidate[axis] > current[axis],
        }
    }
}

/// Find the node below `node` holding the smallest or largest coordinate on `target_axis`.
///
/// `axis` is the discriminator of `node` itself. Returns the extreme node together with its own
/// discriminator. When `axis == target_axis` only one child can hold a better value, otherwise
/// both are searched.
pub fn find_extreme<N: Coordinate, const K: usize>(
    node: &Node<N, K>,
    axis: usize,
    target_axis: usize,
    extreme: Extreme,
) -> (&Node<N, K>, usize) {
    let child_axis = next_axis::<K>(axis);
    let (search_lo, search_hi) = if axis == target_axis {
        (extreme == Extreme::Min, extreme == Extreme::Max)
    } else {
        (true, true)
    };

    let mut best = (node, axis);
    let candidates = [
        node.lo().filter(|_| search_lo),
        node.hi().filter(|_| search_hi),
    ];
    for child in candidates.into_iter().flatten() {
        let found = find_extreme(child, child_axis, target_axis, extreme);
        if extreme.beats(&found.0.value, &best.0.value, target_axis) {
            best = found;
        }
    }
    best
}

/// Delete `node`, which sits at discriminator `axis`, and return the subtree that takes its
/// place.
///
/// A leaf leaves nothing behind. Otherwise a replacement value is pulled up from a child subtree
/// and the returned subtree holds every other point that was below `node`.
pub fn delete<N: Coordinate, const K: usize>(
    mut node: Box<Node<N, K>>,
    axis: usize,
) -> Link<N, K> {
    debug_assert!(axis < K, "axis {axis} out of range for dimension {K}");
    let child_axis = next_axis::<K>(axis);

    if let Some(hi) = node.hi.take() {
        let (value, mut hi) = take_extreme(hi, child_axis, axis, Extreme::Min);
        log::trace!("promoting {value:?} from hi on axis {axis}");
        node.value = value;

        // Anything left in hi that ties the promoted value on this axis now belongs in lo
        let mut ties = Vec::new();
        while let Some(root) = hi.as_deref() {
            let (candidate, _) = find_extreme(root, child_axis, axis, Extreme::Min);
            if candidate.value[axis] > value[axis] {
                break;
            }
            let candidate = candidate.value;
            remove_at(&mut hi, &candidate, child_axis);
            ties.push(candidate);
        }
        if !ties.is_empty() {
            log::debug!(
                "moving {} node(s) tied with {value:?} on axis {axis} to lo",
                ties.len()
            );
        }
        for tied in ties {
            insert_at(&mut node.lo, tied, child_axis);
        }
        node.hi = hi;
        Some(node)
    } else if let Some(lo) = node.lo.take() {
        let (value, lo) = take_extreme(lo, child_axis, axis, Extreme::Max);
        log::trace!("promoting {value:?} from lo on axis {axis}");
        node.value = value;
        node.lo = lo;
        Some(node)
    } else {
        None
    }
}

/// Like [`delete`], but rejecting a discriminator that does not exist in `K` dimensions.
pub fn delete_checked<N: Coordinate, const K: usize>(
    node: Box<Node<N, K>>,
    axis: usize,
) -> Result<Link<N, K>> {
    if axis >= K {
        return Err(KdIndexError::AxisOutOfRange { axis, dims: K });
    }
    Ok(delete(node, axis))
}

/// Remove the node holding exactly `value` from the tree rooted at `root`.
///
/// Returns `true` if such a node was found and removed.
pub fn remove<N: Coordinate, const K: usize>(root: &mut Link<N, K>, value: &[N; K]) -> bool {
    remove_at(root, value, 0)
}

fn remove_at<N: Coordinate, const K: usize>(
    slot: &mut Link<N, K>,
    value: &[N; K],
    axis: usize,
) -> bool {
    let Some(node) = slot else {
        return false;
    };
    if node.value != *value {
        let child = if node.goes_hi(value, axis) {
            &mut node.hi
        } else {
            &mut node.lo
        };
        return remove_at(child, value, next_axis::<K>(axis));
    }
    if let Some(node) = slot.take() {
        *slot = delete(node, axis);
    }
    true
}

/// Remove the extreme node of `subtree` on `target_axis` and return its value along with what
/// remains of the subtree. `axis` is the discriminator of the subtree root.
fn take_extreme<N: Coordinate, const K: usize>(
    subtree: Box<Node<N, K>>,
    axis: usize,
    target_axis: usize,
    extreme: Extreme,
) -> ([N; K], Link<N, K>) {
    let value = find_extreme(&subtree, axis, target_axis, extreme).0.value;
    let mut subtree = Some(subtree);
    remove_at(&mut subtree, &value, axis);
    (value, subtree)
}
