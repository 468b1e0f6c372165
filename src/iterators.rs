use crate::deque::Deque;
use crate::error::{Error, Result};
use std::vec;

/// An iterator over the deque from front to back. It is constructed
/// from the [`iter`] method on `Deque`.
///
/// [`iter`]: struct.Deque.html#method.iter
pub struct Iter<'l, T> {
    target: &'l Deque<T>,
    next_index: usize,
    remaining: usize,
}

impl<'l, T> Iter<'l, T> {
    pub(crate) fn new(target: &'l Deque<T>, next_index: usize, remaining: usize) -> Self {
        Self {
            target,
            next_index,
            remaining,
        }
    }

    /// Iterators only read. This always fails with
    /// `Error::UnsupportedOperation`.
    pub fn remove(&mut self) -> Result<()> {
        Err(Error::UnsupportedOperation)
    }
}

impl<'l, T> Iterator for Iter<'l, T> {
    type Item = &'l T;

    fn next(&mut self) -> Option<Self::Item> {
        if usize::MAX != self.next_index {
            let n = self.target.slots[self.next_index]
                .node()
                .expect("self.target.slots[self.next_index] is expected to be a node");
            self.next_index = n.next();
            self.remaining -= 1;
            Some(n.payload())
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'l, T> ExactSizeIterator for Iter<'l, T> {}

/// An iterator over the deque from back to front. It is constructed
/// from the [`iter_back`] method on `Deque`.
///
/// [`iter_back`]: struct.Deque.html#method.iter_back
pub struct IterBack<'l, T> {
    target: &'l Deque<T>,
    next_index: usize,
    remaining: usize,
}

impl<'l, T> IterBack<'l, T> {
    pub(crate) fn new(target: &'l Deque<T>, next_index: usize, remaining: usize) -> Self {
        Self {
            target,
            next_index,
            remaining,
        }
    }

    /// Iterators only read. This always fails with
    /// `Error::UnsupportedOperation`.
    pub fn remove(&mut self) -> Result<()> {
        Err(Error::UnsupportedOperation)
    }
}

impl<'l, T> Iterator for IterBack<'l, T> {
    type Item = &'l T;

    fn next(&mut self) -> Option<Self::Item> {
        if usize::MAX != self.next_index {
            let n = self.target.slots[self.next_index]
                .node()
                .expect("self.target.slots[self.next_index] is expected to be a node");
            self.next_index = n.prev();
            self.remaining -= 1;
            Some(n.payload())
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'l, T> ExactSizeIterator for IterBack<'l, T> {}

/// A draining iterator over the deque from front to back. It is
/// constructed from the [`drain`] method on `Deque`. Dropping it
/// empties the deque.
///
/// [`drain`]: struct.Deque.html#method.drain
pub struct Drain<'l, T> {
    target: &'l mut Deque<T>,
}

impl<'l, T> Drain<'l, T> {
    pub(crate) fn new(target: &'l mut Deque<T>) -> Self {
        Self { target }
    }
}

impl<'l, T> Iterator for Drain<'l, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.target.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.target.len(), Some(self.target.len()))
    }
}

impl<'l, T> Drop for Drain<'l, T> {
    fn drop(&mut self) {
        self.target.clear();
    }
}

/// A consuming iterator over the deque from front to back.
pub struct IntoIter<T> {
    target: Deque<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(target: Deque<T>) -> Self {
        Self { target }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.target.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.target.len(), Some(self.target.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.target.pop_last()
    }
}

/// An iterator over a `RandomizedQueue` in shuffled order. It is
/// constructed from the [`iter`] method on `RandomizedQueue`, which
/// shuffles a fresh order for every iterator.
///
/// [`iter`]: struct.RandomizedQueue.html#method.iter
pub struct ShuffledIter<'l, T> {
    order: vec::IntoIter<&'l T>,
}

impl<'l, T> ShuffledIter<'l, T> {
    pub(crate) fn new(order: Vec<&'l T>) -> Self {
        Self {
            order: order.into_iter(),
        }
    }

    /// Iterators only read. This always fails with
    /// `Error::UnsupportedOperation`.
    pub fn remove(&mut self) -> Result<()> {
        Err(Error::UnsupportedOperation)
    }
}

impl<'l, T> Iterator for ShuffledIter<'l, T> {
    type Item = &'l T;

    fn next(&mut self) -> Option<Self::Item> {
        self.order.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<'l, T> ExactSizeIterator for ShuffledIter<'l, T> {}

/// An owned, shuffled copy of a `RandomizedQueue`. It is constructed
/// from the [`snapshot`] method, or by consuming the queue.
///
/// [`snapshot`]: struct.RandomizedQueue.html#method.snapshot
pub struct ShuffledIntoIter<T> {
    order: vec::IntoIter<T>,
}

impl<T> ShuffledIntoIter<T> {
    pub(crate) fn new(order: Vec<T>) -> Self {
        Self {
            order: order.into_iter(),
        }
    }

    /// Iterators only read. This always fails with
    /// `Error::UnsupportedOperation`.
    pub fn remove(&mut self) -> Result<()> {
        Err(Error::UnsupportedOperation)
    }
}

impl<T> Iterator for ShuffledIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.order.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<T> ExactSizeIterator for ShuffledIntoIter<T> {}
