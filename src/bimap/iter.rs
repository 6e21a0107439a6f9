//! Borrowing iterators in left or right order.

use std::iter::FusedIterator;

use slab::Slab;

use crate::bimap::record::{Left, PairRecord, Right};
use crate::tree::{next, prev, NodeId, NodeStore, Position};

/// Double-ended walk over one index, bounded by a remaining count
#[derive(Debug, Clone)]
struct Walk {
    front: Position,
    back: Position,
    remaining: usize,
}

impl Walk {
    fn step_front<Tag, S>(&mut self, store: &S) -> Option<NodeId>
    where
        S: NodeStore<Tag> + ?Sized,
    {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front.node()?;
        self.remaining -= 1;
        self.front = next::<Tag, S>(store, id);
        Some(id)
    }

    fn step_back<Tag, S>(&mut self, store: &S) -> Option<NodeId>
    where
        S: NodeStore<Tag> + ?Sized,
    {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back.node()?;
        self.remaining -= 1;
        self.back = prev::<Tag, S>(store, id);
        Some(id)
    }
}

/// Pairs in ascending left order, as `(left, right)`
#[derive(Debug)]
pub struct LeftIter<'a, L, R> {
    records: &'a Slab<PairRecord<L, R>>,
    walk: Walk,
}

impl<'a, L, R> LeftIter<'a, L, R> {
    pub(crate) fn new(
        records: &'a Slab<PairRecord<L, R>>,
        first: Position,
        last: Position,
        len: usize,
    ) -> Self {
        Self {
            records,
            walk: Walk {
                front: first,
                back: last,
                remaining: len,
            },
        }
    }
}

impl<'a, L, R> Iterator for LeftIter<'a, L, R> {
    type Item = (&'a L, &'a R);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.walk.step_front::<Left, _>(self.records)?;
        let record = &self.records[id];
        Some((&record.left, &record.right))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.walk.remaining, Some(self.walk.remaining))
    }
}

impl<L, R> DoubleEndedIterator for LeftIter<'_, L, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let id = self.walk.step_back::<Left, _>(self.records)?;
        let record = &self.records[id];
        Some((&record.left, &record.right))
    }
}

impl<L, R> ExactSizeIterator for LeftIter<'_, L, R> {}

impl<L, R> FusedIterator for LeftIter<'_, L, R> {}

impl<L, R> Clone for LeftIter<'_, L, R> {
    fn clone(&self) -> Self {
        Self {
            records: self.records,
            walk: self.walk.clone(),
        }
    }
}

/// Pairs in ascending right order, as `(right, left)`
#[derive(Debug)]
pub struct RightIter<'a, L, R> {
    records: &'a Slab<PairRecord<L, R>>,
    walk: Walk,
}

impl<'a, L, R> RightIter<'a, L, R> {
    pub(crate) fn new(
        records: &'a Slab<PairRecord<L, R>>,
        first: Position,
        last: Position,
        len: usize,
    ) -> Self {
        Self {
            records,
            walk: Walk {
                front: first,
                back: last,
                remaining: len,
            },
        }
    }
}

impl<'a, L, R> Iterator for RightIter<'a, L, R> {
    type Item = (&'a R, &'a L);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.walk.step_front::<Right, _>(self.records)?;
        let record = &self.records[id];
        Some((&record.right, &record.left))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.walk.remaining, Some(self.walk.remaining))
    }
}

impl<L, R> DoubleEndedIterator for RightIter<'_, L, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let id = self.walk.step_back::<Right, _>(self.records)?;
        let record = &self.records[id];
        Some((&record.right, &record.left))
    }
}

impl<L, R> ExactSizeIterator for RightIter<'_, L, R> {}

impl<L, R> FusedIterator for RightIter<'_, L, R> {}

impl<L, R> Clone for RightIter<'_, L, R> {
    fn clone(&self) -> Self {
        Self {
            records: self.records,
            walk: self.walk.clone(),
        }
    }
}
