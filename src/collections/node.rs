use std::cmp::Ordering;

use crate::interval::Interval;

/// A node of the augmented AVL tree.
///
/// `max` is the maximum interval high endpoint across this node and both of
/// its subtrees; it is recomputed bottom-up after every structural change and
/// lets queries prune subtrees that end before the query begins. `height` is
/// the AVL balance metadata (leaf = 1).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_derive", derive(serde::Deserialize, serde::Serialize))]
pub(crate) struct Node<N: Ord + Clone, D> {
    pub(crate) interval: Interval<N>,
    pub(crate) data: D,
    pub(crate) max: N,
    pub(crate) height: u32,
    pub(crate) left: Option<Box<Node<N, D>>>,
    pub(crate) right: Option<Box<Node<N, D>>>,
}

impl<N: Ord + Clone, D> Node<N, D> {
    pub(crate) fn new(interval: Interval<N>, data: D) -> Self {
        let max = interval.end().clone();
        Node {
            interval,
            data,
            max,
            height: 1,
            left: None,
            right: None,
        }
    }
}

pub(crate) fn height<N: Ord + Clone, D>(node: Option<&Node<N, D>>) -> u32 {
    node.map_or(0, |n| n.height)
}

/// Insert `(interval, data)` below `root` and return the rebalanced subtree.
///
/// Entries are ordered by interval low endpoint; an entry whose low endpoint
/// equals the current node's descends right, so in-order traversal yields
/// equal-low entries oldest first (rotations preserve the in-order sequence).
pub(crate) fn insert<N, D>(
    root: Option<Box<Node<N, D>>>,
    interval: Interval<N>,
    data: D,
) -> Box<Node<N, D>>
where
    N: Ord + Clone,
{
    let mut node = match root {
        Some(node) => node,
        None => return Box::new(Node::new(interval, data)),
    };

    if interval.start() < node.interval.start() {
        node.left = Some(insert(node.left.take(), interval, data));
    } else {
        node.right = Some(insert(node.right.take(), interval, data));
    }

    update(&mut node);
    rebalance(node)
}

/// Remove one entry whose interval equals `[start, end]` exactly, preferring
/// the in-order first among duplicates. Returns the rebalanced subtree and
/// the removed payload, if any.
pub(crate) fn remove<N, D>(
    root: Option<Box<Node<N, D>>>,
    start: &N,
    end: &N,
) -> (Option<Box<Node<N, D>>>, Option<D>)
where
    N: Ord + Clone,
{
    let mut node = match root {
        Some(node) => node,
        None => return (None, None),
    };

    let removed = match start.cmp(node.interval.start()) {
        Ordering::Less => {
            let (left, removed) = remove(node.left.take(), start, end);
            node.left = left;
            removed
        }
        Ordering::Greater => {
            let (right, removed) = remove(node.right.take(), start, end);
            node.right = right;
            removed
        }
        Ordering::Equal => {
            // Rotations may have moved an equal-low duplicate into the left
            // subtree; the in-order first match lives there if anywhere. The
            // left subtree cannot hold a match when its max high endpoint is
            // below `start`, since every low is bounded by its high.
            let descend_left = node
                .left
                .as_deref()
                .map(|left| left.max >= *start)
                .unwrap_or(false);

            let removed = if descend_left {
                let (left, removed) = remove(node.left.take(), start, end);
                node.left = left;
                removed
            } else {
                None
            };

            match removed {
                Some(data) => Some(data),
                None if node.interval.start() == start && node.interval.end() == end => {
                    return detach(node);
                }
                None => {
                    let (right, removed) = remove(node.right.take(), start, end);
                    node.right = right;
                    removed
                }
            }
        }
    };

    update(&mut node);
    (Some(rebalance(node)), removed)
}

/// Unlink `node` from the tree, splicing in its in-order successor when both
/// children are present.
fn detach<N, D>(mut node: Box<Node<N, D>>) -> (Option<Box<Node<N, D>>>, Option<D>)
where
    N: Ord + Clone,
{
    let replacement = match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => Some(child),
        (Some(left), Some(right)) => {
            let (right, mut successor) = take_leftmost(right);
            successor.left = Some(left);
            successor.right = right;
            update(&mut successor);
            Some(rebalance(successor))
        }
    };
    (replacement, Some(node.data))
}

/// Detach the in-order first node of `subtree`, returning the rebalanced
/// remainder and the detached node.
fn take_leftmost<N, D>(mut subtree: Box<Node<N, D>>) -> (Option<Box<Node<N, D>>>, Box<Node<N, D>>)
where
    N: Ord + Clone,
{
    match subtree.left.take() {
        None => {
            let right = subtree.right.take();
            (right, subtree)
        }
        Some(left) => {
            let (left, leftmost) = take_leftmost(left);
            subtree.left = left;
            update(&mut subtree);
            (Some(rebalance(subtree)), leftmost)
        }
    }
}

/// Recompute `height` and `max` from the children. Must run on every node
/// whose child set changed, children first.
fn update<N: Ord + Clone, D>(node: &mut Node<N, D>) {
    node.height = height(node.left.as_deref())
        .max(height(node.right.as_deref()))
        + 1;

    node.max = node.interval.end().clone();
    if let Some(ref left) = node.left {
        if left.max > node.max {
            node.max = left.max.clone();
        }
    }
    if let Some(ref right) = node.right {
        if right.max > node.max {
            node.max = right.max.clone();
        }
    }
}

fn balance_factor<N: Ord + Clone, D>(node: &Node<N, D>) -> i32 {
    height(node.left.as_deref()) as i32 - height(node.right.as_deref()) as i32
}

/// Restore the AVL balance invariant at `node`, assuming both subtrees are
/// themselves balanced and at most one level apart from each other.
fn rebalance<N, D>(mut node: Box<Node<N, D>>) -> Box<Node<N, D>>
where
    N: Ord + Clone,
{
    match balance_factor(&node) {
        2 => {
            let left = node.left.take().expect("left-heavy node has a left child");
            if height(left.left.as_deref()) < height(left.right.as_deref()) {
                node.left = Some(rotate_left(left));
            } else {
                node.left = Some(left);
            }
            update(&mut node);
            rotate_right(node)
        }
        -2 => {
            let right = node
                .right
                .take()
                .expect("right-heavy node has a right child");
            if height(right.right.as_deref()) < height(right.left.as_deref()) {
                node.right = Some(rotate_right(right));
            } else {
                node.right = Some(right);
            }
            update(&mut node);
            rotate_left(node)
        }
        _ => node,
    }
}

/// Promote the right child. The demoted node is updated before the promoted
/// one so `height`/`max` propagate bottom-up.
fn rotate_left<N, D>(mut node: Box<Node<N, D>>) -> Box<Node<N, D>>
where
    N: Ord + Clone,
{
    let mut pivot = node.right.take().expect("rotation requires a right child");

    node.right = pivot.left.take();
    update(&mut node);

    pivot.left = Some(node);
    update(&mut pivot);

    pivot
}

/// Promote the left child.
fn rotate_right<N, D>(mut node: Box<Node<N, D>>) -> Box<Node<N, D>>
where
    N: Ord + Clone,
{
    let mut pivot = node.left.take().expect("rotation requires a left child");

    node.left = pivot.right.take();
    update(&mut node);

    pivot.right = Some(node);
    update(&mut pivot);

    pivot
}
