use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Bound, RangeBounds};

use crate::node::{Link, Node, Pivot};
use crate::priority::{PrioritySource, XorShift64};
use crate::traits::{SequenceBase, SequenceSplitMerge};
use crate::view::NodeRef;

/// Handle owning one treap.
///
/// The same tree answers keyed queries (`insert`, `get`, `remove`) and
/// positional ones (`get_index`, `split` by rank, `insert_at`, ...). Keys only
/// stay sorted while the tree is used through the keyed API; once positional
/// splits and merges reorder the sequence, keyed lookups are unreliable and
/// only ranks are meaningful.
///
/// Splits and merges take their inputs by value, so a handle that has been
/// split or merged cannot be observed again.
pub struct Treap<T, S = XorShift64> {
    root: Link<T>,
    source: S,
}

impl<T> Treap<T> {
    pub fn new() -> Self {
        Self::with_source(XorShift64::default())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_source(XorShift64::new(seed))
    }
}

impl<T, S: PrioritySource> Treap<T, S> {
    pub fn with_source(source: S) -> Self {
        Self { root: None, source }
    }

    fn from_parts(root: Link<T>, source: S) -> Self {
        Self { root, source }
    }

    pub fn len(&self) -> usize {
        Node::size(&self.root) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
    }

    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.as_deref().map(NodeRef::new)
    }

    pub fn height(&self) -> usize {
        Node::height(&self.root)
    }

    fn new_node(&mut self, key: i64, value: T) -> Box<Node<T>> {
        Box::new(Node::new(key, value, self.source.next_priority()))
    }

    /// Inserts `value` under `key`.
    ///
    /// Existing entries are never replaced: inserting a key twice stores two
    /// nodes, the newer one ordered after the older.
    pub fn insert(&mut self, key: i64, value: T) {
        let node = self.new_node(key, value);
        self.root = Node::insert_by_key(self.root.take(), node);
    }

    pub fn get(&self, key: i64) -> Option<&T> {
        Node::get_by_key(&self.root, key).map(|node| &node.value)
    }

    pub fn get_node(&self, key: i64) -> Option<NodeRef<'_, T>> {
        Node::get_by_key(&self.root, key).map(NodeRef::new)
    }

    pub fn contains_key(&self, key: i64) -> bool {
        Node::get_by_key(&self.root, key).is_some()
    }

    /// Removes one node stored under `key` and returns its value.
    pub fn remove(&mut self, key: i64) -> Option<T> {
        let (root, removed) = Node::remove_by_key(self.root.take(), key);
        self.root = root;
        removed
    }

    /// Node at 0-based position `index`, or `None` when out of range.
    pub fn get_index(&self, index: usize) -> Option<NodeRef<'_, T>> {
        Node::get_by_rank(&self.root, index).map(NodeRef::new)
    }

    pub fn first(&self) -> Option<NodeRef<'_, T>> {
        self.get_index(0)
    }

    pub fn last(&self) -> Option<NodeRef<'_, T>> {
        self.len().checked_sub(1).and_then(|index| self.get_index(index))
    }

    /// Inserts at position `index`, shifting later elements right. The node's
    /// key is its position at insertion time. Out of range indices are
    /// ignored.
    pub fn insert_at(&mut self, index: usize, value: T) {
        if index > self.len() {
            return;
        }
        let node = self.new_node(index as i64, value);
        let (left, right) = Node::split(self.root.take(), Pivot::Rank(index as i64 - 1));
        self.root = Node::merge(Node::merge(left, Some(node)), right);
    }

    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.len() {
            return None;
        }
        let index = index as i64;
        let (left, rest) = Node::split(self.root.take(), Pivot::Rank(index - 1));
        let (target, right) = Node::split(rest, Pivot::Rank(0));
        self.root = Node::merge(left, right);
        target.map(|node| node.value)
    }

    /// Splits into the nodes on the left of `pivot` and the rest. An empty
    /// handle stands for a side with no nodes.
    pub fn split(mut self, pivot: Pivot) -> (Self, Self) {
        let right_source = self.source.fork();
        let (left, right) = Node::split(self.root, pivot);
        (
            Self::from_parts(left, self.source),
            Self::from_parts(right, right_source),
        )
    }

    /// Keeps the first `len` elements and returns the remainder.
    pub fn split_at(&mut self, len: usize) -> Self {
        let (left, right) = Node::split(self.root.take(), Pivot::Rank(len as i64 - 1));
        self.root = left;
        Self::from_parts(right, self.source.fork())
    }

    /// Concatenates two sequences; `left` supplies the priority source.
    pub fn merge(left: Self, right: Self) -> Self {
        Self::from_parts(Node::merge(left.root, right.root), left.source)
    }

    pub fn append(&mut self, right: Self) {
        self.root = Node::merge(self.root.take(), right.root);
    }

    pub fn prepend(&mut self, left: Self) {
        self.root = Node::merge(left.root, self.root.take());
    }

    /// Cuts out `range` and splices it before everything else. Returns
    /// `false`, leaving the sequence untouched, when the range is invalid.
    pub fn move_to_front<R: RangeBounds<usize>>(&mut self, range: R) -> bool {
        self.move_range(range, true)
    }

    /// Cuts out `range` and splices it after everything else.
    pub fn move_to_back<R: RangeBounds<usize>>(&mut self, range: R) -> bool {
        self.move_range(range, false)
    }

    fn move_range<R: RangeBounds<usize>>(&mut self, range: R, to_front: bool) -> bool {
        let Some((start, end)) = normalize_range(range, self.len()) else {
            return false;
        };
        if start == end {
            return true;
        }

        let (prefix, rest) = Node::split(self.root.take(), Pivot::Rank(start as i64 - 1));
        let (middle, suffix) = Node::split(rest, Pivot::Rank((end - start) as i64 - 1));
        let rest = Node::merge(prefix, suffix);
        self.root = if to_front {
            Node::merge(middle, rest)
        } else {
            Node::merge(rest, middle)
        };
        true
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root)
    }
}

fn normalize_range<R: RangeBounds<usize>>(range: R, len: usize) -> Option<(usize, usize)> {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.checked_add(1)?,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.checked_add(1)?,
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };

    if start > end || end > len {
        return None;
    }

    Some((start, end))
}

/// In-order iterator over the values of a [`Treap`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: &'a Link<T>) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: Node::size(root) as usize,
        };
        iter.push_left_spine(root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut cur: Option<&'a Node<T>>) {
        while let Some(node) = cur {
            self.stack.push(node);
            cur = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T, S: PrioritySource> IntoIterator for &'a Treap<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S: PrioritySource> Extend<T> for Treap<T, S> {
    /// Appends each value at the end; its key is its position.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            let key = self.len() as i64;
            let node = self.new_node(key, value);
            self.root = Node::merge(self.root.take(), Some(node));
        }
    }
}

impl<T> FromIterator<T> for Treap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut treap = Self::new();
        treap.extend(iter);
        treap
    }
}

impl<T> Default for Treap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, S: Clone> Clone for Treap<T, S> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            source: self.source.clone(),
        }
    }
}

impl<T: fmt::Debug, S: PrioritySource> fmt::Debug for Treap<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, S: PrioritySource> SequenceBase for Treap<T, S> {
    type Value = T;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn get_at(&self, index: usize) -> Option<&T> {
        Node::get_by_rank(&self.root, index).map(|node| &node.value)
    }

    fn insert_at(&mut self, index: usize, value: T) {
        Self::insert_at(self, index, value);
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        Self::remove_at(self, index)
    }
}

impl<T, S: PrioritySource> SequenceSplitMerge for Treap<T, S> {
    fn split_at(&mut self, index: usize) -> Self {
        Self::split_at(self, index)
    }

    fn append(&mut self, right: Self) {
        Self::append(self, right);
    }
}
