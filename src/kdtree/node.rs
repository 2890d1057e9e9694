use crate::r#type::{next_axis, Coordinate};

/// An owning link to a subtree. `None` is the empty tree.
pub type Link<N, const K: usize> = Option<Box<Node<N, K>>>;

/// A single stored point and the two subtrees split on it.
///
/// The discriminator of a node is not stored: it is `depth % K`, where the root has depth 0.
/// Every coordinate reachable through [`lo`][Node::lo] is `<=` this node's value on the
/// discriminator axis, every coordinate reachable through [`hi`][Node::hi] is strictly `>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<N: Coordinate, const K: usize> {
    pub(crate) value: [N; K],
    pub(crate) lo: Link<N, K>,
    pub(crate) hi: Link<N, K>,
}

impl<N: Coordinate, const K: usize> Node<N, K> {
    pub(crate) fn new(value: [N; K]) -> Self {
        Self {
            value,
            lo: None,
            hi: None,
        }
    }

    /// The coordinates held by this node.
    #[inline]
    pub fn value(&self) -> &[N; K] {
        &self.value
    }

    /// The subtree of points that are less than or equal to this node on its discriminator.
    #[inline]
    pub fn lo(&self) -> Option<&Node<N, K>> {
        self.lo.as_deref()
    }

    /// The subtree of points that are greater than this node on its discriminator.
    #[inline]
    pub fn hi(&self) -> Option<&Node<N, K>> {
        self.hi.as_deref()
    }

    /// Returns `true` if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.lo.is_none() && self.hi.is_none()
    }

    /// Whether `value` descends into `hi` when compared against this node on `axis`.
    #[inline]
    pub(crate) fn goes_hi(&self, value: &[N; K], axis: usize) -> bool {
        value[axis] > self.value[axis]
    }
}

/// Insert `value` below `root`.
///
/// Returns `None` when a new node was attached, including when `root` was empty and now holds
/// the new root. Returns the existing node, without touching the tree, when a node with an equal
/// value is already stored.
pub fn insert<N: Coordinate, const K: usize>(
    root: &mut Link<N, K>,
    value: [N; K],
) -> Option<&Node<N, K>> {
    insert_at(root, value, 0)
}

/// Insert into the subtree in `slot`, whose root sits at discriminator `axis`.
pub(crate) fn insert_at<N: Coordinate, const K: usize>(
    slot: &mut Link<N, K>,
    value: [N; K],
    axis: usize,
) -> Option<&Node<N, K>> {
    match slot {
        None => {
            *slot = Some(Box::new(Node::new(value)));
            None
        }
        Some(node) => {
            if node.value == value {
                return Some(&**node);
            }
            let child = if node.goes_hi(&value, axis) {
                &mut node.hi
            } else {
                &mut node.lo
            };
            insert_at(child, value, next_axis::<K>(axis))
        }
    }
}

/// Find the node holding exactly `value`.
pub fn search<'a, N: Coordinate, const K: usize>(
    root: Option<&'a Node<N, K>>,
    value: &[N; K],
) -> Option<&'a Node<N, K>> {
    let mut current = root;
    let mut axis = 0;
    while let Some(node) = current {
        if node.value == *value {
            return Some(node);
        }
        current = if node.goes_hi(value, axis) {
            node.hi()
        } else {
            node.lo()
        };
        axis = next_axis::<K>(axis);
    }
    None
}

/// The number of levels below and including `root`. The empty tree has height 0.
pub fn height<N: Coordinate, const K: usize>(root: Option<&Node<N, K>>) -> usize {
    match root {
        None => 0,
        Some(node) => 1 + height(node.lo()).max(height(node.hi())),
    }
}
