use crate::interval::Interval;

/// A read-only view of one stored entry, as yielded by queries.
///
/// Only shared references are exposed: a stored interval can never be
/// mutated through a query result, which would silently break the tree's
/// ordering and max-endpoint invariants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry<'a, N: Ord + Clone, D> {
    pub(crate) interval: &'a Interval<N>,
    pub(crate) data: &'a D,
}

impl<'a, N: Ord + Clone + 'a, D: 'a> Entry<'a, N, D> {
    pub fn interval(&self) -> &'a Interval<N> {
        self.interval
    }

    pub fn value(&self) -> &'a D {
        self.data
    }
}
