use std::cmp::Ordering;

/// Boundary used by a split.
///
/// `Key(k)` sends every node whose key is `<= k` to the left result.
/// `Rank(p)` sends positions `0..=p` to the left result; `p` may be negative
/// (empty prefix) or past the end (empty suffix).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pivot {
    Key(i64),
    Rank(i64),
}

pub(crate) type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) key: i64,
    pub(crate) value: T,
    pub(crate) prio: u32,
    pub(crate) size: u32,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(key: i64, value: T, prio: u32) -> Self {
        Self {
            key,
            value,
            prio,
            size: 1,
            left: None,
            right: None,
        }
    }

    pub(crate) fn size(node: &Link<T>) -> u32 {
        node.as_ref().map(|n| n.size).unwrap_or(0)
    }

    pub(crate) fn height(node: &Link<T>) -> usize {
        match node.as_deref() {
            Some(n) => 1 + Self::height(&n.left).max(Self::height(&n.right)),
            None => 0,
        }
    }

    fn recalc(&mut self) {
        self.size = 1 + Self::size(&self.left) + Self::size(&self.right);
    }

    /// Joins two sequence-adjacent trees; every node of `left` precedes every
    /// node of `right`. The left root stays on top only when its priority is
    /// strictly greater.
    pub(crate) fn merge(left: Link<T>, right: Link<T>) -> Link<T> {
        match (left, right) {
            (None, right) => right,
            (left, None) => left,
            (Some(mut left), Some(mut right)) => {
                if left.prio > right.prio {
                    left.right = Self::merge(left.right.take(), Some(right));
                    left.recalc();
                    Some(left)
                } else {
                    right.left = Self::merge(Some(left), right.left.take());
                    right.recalc();
                    Some(right)
                }
            }
        }
    }

    pub(crate) fn split(root: Link<T>, pivot: Pivot) -> (Link<T>, Link<T>) {
        Self::split_from(root, pivot, 0)
    }

    /// `offset` is the rank, within the tree the split started from, of the
    /// leftmost node under `root`.
    fn split_from(root: Link<T>, pivot: Pivot, offset: i64) -> (Link<T>, Link<T>) {
        let Some(mut node) = root else {
            return (None, None);
        };
        let position = offset + Self::size(&node.left) as i64;
        let goes_left = match pivot {
            Pivot::Key(key) => node.key <= key,
            Pivot::Rank(rank) => position <= rank,
        };

        if goes_left {
            let (left, right) = Self::split_from(node.right.take(), pivot, position + 1);
            node.right = left;
            node.recalc();
            (Some(node), right)
        } else {
            let (left, right) = Self::split_from(node.left.take(), pivot, offset);
            node.left = right;
            node.recalc();
            (left, Some(node))
        }
    }

    /// Places `node` after every existing node with a key `<=` its own.
    /// Equal keys are kept side by side, never overwritten.
    pub(crate) fn insert_by_key(root: Link<T>, node: Box<Self>) -> Link<T> {
        let (left, right) = Self::split(root, Pivot::Key(node.key));
        Self::merge(Self::merge(left, Some(node)), right)
    }

    pub(crate) fn get_by_rank(node: &Link<T>, index: usize) -> Option<&Self> {
        let node_ref = node.as_deref()?;
        let left_size = Self::size(&node_ref.left) as usize;
        match index.cmp(&left_size) {
            Ordering::Less => Self::get_by_rank(&node_ref.left, index),
            Ordering::Equal => Some(node_ref),
            Ordering::Greater => Self::get_by_rank(&node_ref.right, index - left_size - 1),
        }
    }

    pub(crate) fn get_by_key(node: &Link<T>, key: i64) -> Option<&Self> {
        let mut cur = node.as_deref();
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return Some(node),
            }
        }
        None
    }

    /// Promotes the right child over `node`.
    fn rotate_left(mut node: Box<Self>) -> Box<Self> {
        let Some(mut top) = node.right.take() else {
            return node;
        };
        node.right = top.left.take();
        node.recalc();
        top.left = Some(node);
        top.recalc();
        top
    }

    /// Promotes the left child over `node`.
    fn rotate_right(mut node: Box<Self>) -> Box<Self> {
        let Some(mut top) = node.left.take() else {
            return node;
        };
        node.left = top.right.take();
        node.recalc();
        top.right = Some(node);
        top.recalc();
        top
    }

    /// Removes the first node found with `key`. Absent keys leave the tree
    /// as it was.
    pub(crate) fn remove_by_key(root: Link<T>, key: i64) -> (Link<T>, Option<T>) {
        let Some(mut node) = root else {
            return (None, None);
        };
        match key.cmp(&node.key) {
            Ordering::Less => {
                let (left, removed) = Self::remove_by_key(node.left.take(), key);
                node.left = left;
                node.recalc();
                (Some(node), removed)
            }
            Ordering::Greater => {
                let (right, removed) = Self::remove_by_key(node.right.take(), key);
                node.right = right;
                node.recalc();
                (Some(node), removed)
            }
            Ordering::Equal => Self::sink_and_remove(node),
        }
    }

    /// Rotates `node` down until it is a leaf, then drops it. The child with
    /// the higher priority is promoted at each step, so the heap order of the
    /// remaining nodes is untouched.
    fn sink_and_remove(node: Box<Self>) -> (Link<T>, Option<T>) {
        let promote_left = match (&node.left, &node.right) {
            (None, None) => return (None, Some(node.value)),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (Some(left), Some(right)) => left.prio > right.prio,
        };

        if promote_left {
            let mut top = Self::rotate_right(node);
            let (right, removed) = match top.right.take() {
                Some(sunk) => Self::sink_and_remove(sunk),
                None => (None, None),
            };
            top.right = right;
            top.recalc();
            (Some(top), removed)
        } else {
            let mut top = Self::rotate_left(node);
            let (left, removed) = match top.left.take() {
                Some(sunk) => Self::sink_and_remove(sunk),
                None => (None, None),
            };
            top.left = left;
            top.recalc();
            (Some(top), removed)
        }
    }
}

/// Panics unless every node satisfies the size and heap invariants.
#[cfg(test)]
pub(crate) fn assert_invariants<T>(node: &Link<T>) {
    fn walk<T>(node: &Link<T>) -> u32 {
        let Some(n) = node.as_deref() else {
            return 0;
        };
        for child in [&n.left, &n.right].into_iter().flatten() {
            assert!(n.prio >= child.prio, "heap order broken at key {}", n.key);
        }
        let size = walk(&n.left) + walk(&n.right) + 1;
        assert_eq!(n.size, size, "stale size at key {}", n.key);
        size
    }
    walk(node);
}
