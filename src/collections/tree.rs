use std::borrow::Borrow;

use crate::Interval;

use super::entry::Entry;
use super::node::{self, Node};
use super::query::{IntoIter, Iter, Query, ValuesMut};

/// An ordered, self-balancing interval tree.
///
/// Entries are `(interval, data)` pairs over closed intervals, kept in an
/// AVL tree ordered by interval low endpoint and augmented with each node's
/// subtree maximum high endpoint. Insertion is `O(log n)`; an overlap query
/// visits `O(log n + k)` nodes for `k` reported entries.
///
/// The tree is a multiset: duplicate and overlapping intervals are all kept,
/// and entries whose low endpoints are equal are yielded in insertion order.
///
/// Mutation requires `&mut self` while queries borrow `&self`, so a query
/// traversal can never observe a tree mid-mutation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_derive", derive(serde::Deserialize, serde::Serialize))]
pub struct IntervalTree<N: Ord + Clone, D> {
    root: Option<Box<Node<N, D>>>,
    len: usize,
}

impl<N: Ord + Clone, D> Default for IntervalTree<N, D> {
    fn default() -> Self {
        IntervalTree { root: None, len: 0 }
    }
}

impl<N, D, V> FromIterator<(V, D)> for IntervalTree<N, D>
where
    V: Into<Interval<N>>,
    N: Ord + Clone,
{
    fn from_iter<T: IntoIterator<Item = (V, D)>>(iter: T) -> Self {
        let mut tree = Self::new();
        iter.into_iter()
            .for_each(|(interval, data)| tree.insert(interval, data));
        tree
    }
}

impl<N: Ord + Clone, D> IntervalTree<N, D> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Insert `(interval, data)`, keeping any existing entries with the same
    /// interval. Entries with equal low endpoints are ordered by insertion.
    pub fn insert<K: Into<Interval<N>>, V: Into<D>>(&mut self, interval: K, data: V) {
        let interval = interval.into();
        let data = data.into();

        self.root = Some(node::insert(self.root.take(), interval, data));
        self.len += 1;
    }

    pub fn extend<I, K, V>(&mut self, intervals: I)
    where K: Into<Interval<N>>,
          V: Into<D>,
          I: IntoIterator<Item=(K, V)> {
        for (interval, data) in intervals {
            self.insert(interval, data);
        }
    }

    /// Lazily yield every entry whose interval overlaps `interval`, in order
    /// of low endpoint. The iterator may be dropped part-way through at no
    /// cost; it performs no mutation.
    pub fn query<'a, M: Borrow<N>, K: Into<Interval<M>>>(
        &'a self,
        interval: K,
    ) -> Query<'a, N, D, M> {
        Query::new(self.root.as_deref(), interval.into())
    }

    /// Stabbing query: every entry whose interval contains `point`.
    ///
    /// Equivalent to `query(point..=point)`.
    pub fn query_point(&self, point: N) -> Query<'_, N, D> {
        self.query(Interval::point(point))
    }

    /// First overlapping entry in query order, if any.
    pub fn find<M: Borrow<N>, K: Into<Interval<M>>>(&self, interval: K) -> Option<Entry<N, D>> {
        self.query(interval).next()
    }

    /// All overlapping entries, eagerly collected.
    pub fn find_all<M: Borrow<N>, K: Into<Interval<M>>>(&self, interval: K) -> Vec<Entry<N, D>> {
        self.query(interval).collect()
    }

    pub fn find_point<'b, 'a: 'b, M: Borrow<N>>(
        &'a self,
        point: M,
    ) -> Option<Entry<'a, N, D>> {
        let point = point.borrow();
        self.find(point..=point)
    }

    pub fn contains_point<'b, 'a: 'b, M: Borrow<N>>(
        &'a self,
        point: M,
    ) -> bool {
        self.find_point(point).is_some()
    }

    pub fn overlaps<M: Borrow<N>, K: Into<Interval<M>>>(&self, interval: K) -> bool {
        self.find(interval).is_some()
    }

    /// Remove one entry whose interval equals `interval` exactly, returning
    /// its payload. Among duplicates the entry yielded first by queries (the
    /// oldest) is removed. Returns `None` if no entry matches exactly.
    pub fn remove_exact<M: Borrow<N>, K: Into<Interval<M>>>(&mut self, interval: K) -> Option<D> {
        let interval = interval.into();
        let (start, end) = (interval.start().borrow(), interval.end().borrow());

        let (root, removed) = node::remove(self.root.take(), start, end);
        self.root = root;
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels in the tree; zero when empty. Bounded by
    /// `1.44 * log2(len + 2)` under the AVL balance invariant.
    pub fn height(&self) -> usize {
        node::height(self.root.as_deref()) as usize
    }

    /// In-order iterator over every `(interval, data)` entry.
    pub fn iter(&self) -> Iter<'_, N, D> {
        Iter::new(self.root.as_deref())
    }

    pub fn intervals(&self) -> impl Iterator<Item=&Interval<N>> {
        self.iter().map(|(interval, _)| interval)
    }

    pub fn values(&self) -> impl Iterator<Item=&D> {
        self.iter().map(|(_, data)| data)
    }

    /// Mutable access to the payloads only; intervals stay fixed.
    pub fn values_mut(&mut self) -> ValuesMut<'_, N, D> {
        ValuesMut::new(self.root.as_deref_mut())
    }
}

impl<N: Ord + Clone, D> IntoIterator for IntervalTree<N, D> {
    type Item = (Interval<N>, D);
    type IntoIter = IntoIter<N, D>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root)
    }
}
