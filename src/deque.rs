use crate::error::{Error, Result};
use crate::iterators::{Drain, IntoIter, Iter, IterBack};
use crate::slot::{Node, Slot};
use log::debug;
use std::fmt;
use std::iter::FromIterator;

/// A double-ended queue built as a doubly-linked list. Items can be
/// added and removed at either end in constant time.
///
/// Nodes live in a `Vec` and refer to their neighbours by index, so
/// a node's link to the node before it never owns that node.
pub struct Deque<T> {
    // Index of the first element on the free list. MAX when the
    // free-list is empty.
    free_list: usize,
    // The index of the head node. MAX when the deque is empty.
    pub(crate) head: usize,
    // The index of the tail node. MAX when the deque is empty.
    pub(crate) tail: usize,
    // The number of slots currently holding nodes.
    len_used: usize,
    // The number of slots currently on the free list.
    len_free: usize,
    // The memory backing the nodes.
    pub(crate) slots: Vec<Slot<T>>,
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Deque<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Deque<T> {
    /// Creates an empty `Deque`. No allocations are performed until
    /// values are added.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand_deque::Deque;
    ///
    /// let deque: Deque<u32> = Deque::new();
    /// assert!(deque.is_empty());
    /// ```
    pub fn new() -> Deque<T> {
        Deque {
            free_list: usize::MAX,
            head: usize::MAX,
            tail: usize::MAX,
            len_used: 0,
            len_free: 0,
            slots: Vec::new(),
        }
    }

    /// Create a new `Deque` with room for at least `capacity` nodes
    /// before the backing storage has to grow.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand_deque::Deque;
    ///
    /// let deque: Deque<u32> = Deque::with_capacity(16);
    /// assert!(deque.capacity() >= 16);
    /// ```
    pub fn with_capacity(capacity: usize) -> Deque<T> {
        Deque {
            slots: Vec::with_capacity(capacity),
            ..Deque::new()
        }
    }

    /// Reserves capacity for at least `additional` more nodes.
    pub fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional)
    }

    /// Returns how many nodes could be held without growing the
    /// backing storage.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// The number of items in the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand_deque::Deque;
    ///
    /// let mut d: Deque<u8> = Deque::new();
    ///
    /// d.add_first(1);
    /// d.add_last(2);
    /// assert_eq!(2, d.len());
    ///
    /// d.remove_first().unwrap();
    /// assert_eq!(1, d.len());
    /// ```
    pub fn len(&self) -> usize {
        self.len_used
    }

    /// True when the deque holds no items.
    pub fn is_empty(&self) -> bool {
        0 == self.len_used
    }

    /// The number of vacated slots waiting to be reused by the next
    /// insertions. Emptying the deque releases all of them.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand_deque::Deque;
    ///
    /// let mut d: Deque<u8> = Deque::new();
    ///
    /// d.add_last(1);
    /// d.add_last(2);
    /// d.remove_first().unwrap();
    /// assert_eq!(1, d.len_freelist());
    ///
    /// d.remove_first().unwrap();
    /// assert_eq!(0, d.len_freelist());
    /// ```
    pub fn len_freelist(&self) -> usize {
        self.len_free
    }

    /// Insert `item` at the front of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand_deque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.add_first("String 1");
    /// d.add_first("String 2");
    ///
    /// assert_eq!(vec![&"String 2", &"String 1"], d.iter().collect::<Vec<_>>());
    /// ```
    pub fn add_first(&mut self, item: T) {
        let new_ix = self.allocate(usize::MAX, self.head, item);

        // Point the old head back at the node we just inserted.
        if usize::MAX != self.head {
            self.node_mut(self.head).set_prev(new_ix);
        }
        self.head = new_ix;

        // A node added to an empty deque is also its tail.
        if usize::MAX == self.tail {
            self.tail = new_ix;
        }
    }

    /// Insert `item` at the back of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand_deque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.add_last(1);
    /// d.add_last(2);
    ///
    /// assert_eq!(vec![&1, &2], d.iter().collect::<Vec<_>>());
    /// ```
    pub fn add_last(&mut self, item: T) {
        let new_ix = self.allocate(self.tail, usize::MAX, item);

        // Point the old tail forward at the node we just inserted.
        if usize::MAX != self.tail {
            self.node_mut(self.tail).set_next(new_ix);
        }
        self.tail = new_ix;

        // A node added to an empty deque is also its head.
        if usize::MAX == self.head {
            self.head = new_ix;
        }
    }

    /// Insert a possibly absent `item` at the front of the deque. An
    /// absent item is rejected with `Error::InvalidArgument` and the
    /// deque is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand_deque::{Deque, Error};
    ///
    /// let mut d = Deque::new();
    /// assert_eq!(Ok(()), d.try_add_first(Some(1)));
    /// assert_eq!(Err(Error::InvalidArgument), d.try_add_first(None));
    /// assert_eq!(1, d.len());
    /// ```
    pub fn try_add_first(&mut self, item: Option<T>) -> Result<()> {
        let item = item.ok_or(Error::InvalidArgument)?;
        self.add_first(item);
        Ok(())
    }

    /// Insert a possibly absent `item` at the back of the deque. An
    /// absent item is rejected with `Error::InvalidArgument` and the
    /// deque is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand_deque::{Deque, Error};
    ///
    /// let mut d: Deque<u8> = Deque::new();
    /// assert_eq!(Err(Error::InvalidArgument), d.try_add_last(None));
    /// assert!(d.is_empty());
    /// ```
    pub fn try_add_last(&mut self, item: Option<T>) -> Result<()> {
        let item = item.ok_or(Error::InvalidArgument)?;
        self.add_last(item);
        Ok(())
    }

    /// Remove and return the item at the front of the deque. Fails
    /// with `Error::EmptyCollection` if there is nothing to remove.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand_deque::{Deque, Error};
    ///
    /// let mut d = Deque::new();
    /// d.add_last(10);
    /// d.add_last(20);
    ///
    /// assert_eq!(Ok(10), d.remove_first());
    /// assert_eq!(Ok(20), d.remove_first());
    /// assert_eq!(Err(Error::EmptyCollection), d.remove_first());
    /// ```
    pub fn remove_first(&mut self) -> Result<T> {
        self.pop_first().ok_or(Error::EmptyCollection)
    }

    /// Remove and return the item at the back of the deque. Fails
    /// with `Error::EmptyCollection` if there is nothing to remove.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand_deque::{Deque, Error};
    ///
    /// let mut d = Deque::new();
    /// d.add_first(10);
    /// d.add_first(20);
    ///
    /// assert_eq!(Ok(10), d.remove_last());
    /// assert_eq!(Ok(20), d.remove_last());
    /// assert_eq!(Err(Error::EmptyCollection), d.remove_last());
    /// ```
    pub fn remove_last(&mut self) -> Result<T> {
        self.pop_last().ok_or(Error::EmptyCollection)
    }

    /// Remove the front of the deque and return it, or `None` if the
    /// deque is empty.
    pub fn pop_first(&mut self) -> Option<T> {
        if usize::MAX == self.head {
            return None;
        }

        let (prev, payload, next) = self.unlink(self.head);
        debug_assert_eq!(usize::MAX, prev);

        // Promote the second node. It no longer has anything in front
        // of it.
        self.head = next;
        if usize::MAX != next {
            self.node_mut(next).set_prev(usize::MAX);
        } else {
            self.tail = usize::MAX;
        }

        Some(payload)
    }

    /// Remove the back of the deque and return it, or `None` if the
    /// deque is empty.
    pub fn pop_last(&mut self) -> Option<T> {
        if usize::MAX == self.tail {
            return None;
        }

        let (prev, payload, next) = self.unlink(self.tail);
        debug_assert_eq!(usize::MAX, next);

        // Promote the second to last node. It no longer has anything
        // behind it.
        self.tail = prev;
        if usize::MAX != prev {
            self.node_mut(prev).set_next(usize::MAX);
        } else {
            self.head = usize::MAX;
        }

        Some(payload)
    }

    /// The item at the front of the deque, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand_deque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.add_last(10);
    /// d.add_last(20);
    ///
    /// assert_eq!(Some(&10), d.peek_first());
    /// ```
    pub fn peek_first(&self) -> Option<&T> {
        self.slots
            .get(self.head)
            .and_then(|s| s.node())
            .map(|n| n.payload())
    }

    /// The item at the front of the deque as a mutable reference.
    pub fn peek_first_mut(&mut self) -> Option<&mut T> {
        self.slots
            .get_mut(self.head)
            .and_then(|s| s.node_mut())
            .map(|n| n.payload_mut())
    }

    /// The item at the back of the deque, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand_deque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.add_last(10);
    /// d.add_last(20);
    ///
    /// d.peek_last_mut().map(|i| *i += 1);
    /// assert_eq!(Some(&21), d.peek_last());
    /// ```
    pub fn peek_last(&self) -> Option<&T> {
        self.slots
            .get(self.tail)
            .and_then(|s| s.node())
            .map(|n| n.payload())
    }

    /// The item at the back of the deque as a mutable reference.
    pub fn peek_last_mut(&mut self) -> Option<&mut T> {
        self.slots
            .get_mut(self.tail)
            .and_then(|s| s.node_mut())
            .map(|n| n.payload_mut())
    }

    /// Create an iterator over the deque from front to back. Every
    /// call starts a fresh walk from the current head.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand_deque::Deque;
    ///
    /// let mut d: Deque<u8> = Deque::new();
    ///
    /// d.add_last(2);
    /// d.add_last(3);
    /// d.add_first(1);
    ///
    /// let v: Vec<&u8> = d.iter().collect();
    /// assert_eq!(vec![&1, &2, &3], v);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self, self.head, self.len_used)
    }

    /// Create an iterator over the deque from back to front.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand_deque::Deque;
    ///
    /// let d: Deque<u8> = (1..=3).collect();
    ///
    /// let v: Vec<&u8> = d.iter_back().collect();
    /// assert_eq!(vec![&3, &2, &1], v);
    /// ```
    pub fn iter_back(&self) -> IterBack<'_, T> {
        IterBack::new(self, self.tail, self.len_used)
    }

    /// Remove every item from front to back. Items not consumed by
    /// the time the iterator is dropped are dropped with it.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand_deque::Deque;
    ///
    /// let mut d: Deque<u8> = (1..=3).collect();
    ///
    /// let v: Vec<u8> = d.drain().collect();
    /// assert_eq!(vec![1, 2, 3], v);
    /// assert!(d.is_empty());
    /// ```
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self)
    }

    /// Remove every item, returning the deque to its freshly
    /// constructed state. The backing allocation is kept.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list = usize::MAX;
        self.head = usize::MAX;
        self.tail = usize::MAX;
        self.len_used = 0;
        self.len_free = 0;
    }

    fn node_mut(&mut self, ix: usize) -> &mut Node<T> {
        self.slots[ix]
            .node_mut()
            .expect("linked index is expected to hold a node")
    }

    // Detach the node at `ix` from the arena, returning its links and
    // payload. Linking the neighbours back together is up to the
    // caller.
    fn unlink(&mut self, ix: usize) -> (usize, T, usize) {
        debug_assert!(self.slots[ix].node().is_some());

        self.len_used -= 1;

        let mut v = Slot::new_free(self.free_list);
        std::mem::swap(&mut v, &mut self.slots[ix]);
        self.free_list = ix;
        self.len_free += 1;

        let taken = v
            .into_node()
            .expect("linked index is expected to hold a node")
            .take();

        if 0 == self.len_used {
            debug!("deque emptied, releasing {} arena slots", self.slots.len());
            self.clear();
        }

        taken
    }

    fn allocate(&mut self, prev: usize, next: usize, payload: T) -> usize {
        self.len_used += 1;

        let s = Slot::new_node(prev, next, payload);

        if usize::MAX == self.free_list {
            self.slots.push(s);
            self.slots.len() - 1
        } else {
            let ix = self.free_list;
            self.free_list = self.slots[ix]
                .free()
                .expect("free list index is expected to be free")
                .next();
            self.slots[ix] = s;
            self.len_free -= 1;
            ix
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut l = Self::new();
        l.extend(iter);
        l
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for i in iter {
            self.add_last(i);
        }
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'l, T> IntoIterator for &'l Deque<T> {
    type Item = &'l T;
    type IntoIter = Iter<'l, T>;

    fn into_iter(self) -> Iter<'l, T> {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // Walk the links in both directions and check they agree with the
    // recorded head, tail and length.
    fn assert_linked<T>(l: &Deque<T>) {
        let mut count = 0;
        let mut prev = usize::MAX;
        let mut ix = l.head;
        while usize::MAX != ix {
            let n = l.slots[ix].node().unwrap();
            assert_eq!(prev, n.prev());
            prev = ix;
            ix = n.next();
            count += 1;
        }
        assert_eq!(prev, l.tail);
        assert_eq!(count, l.len());
        assert_eq!(usize::MAX == l.head, l.is_empty());
        assert_eq!(usize::MAX == l.tail, l.is_empty());
    }

    #[test]
    fn add_first_reverses_order() {
        let mut l = Deque::new();
        l.add_first(1u8);
        l.add_first(2u8);
        l.add_first(3u8);

        assert_linked(&l);
        assert_eq!(vec![&3, &2, &1], l.iter().collect::<Vec<&u8>>());
    }

    #[test]
    fn add_last_preserves_order() {
        let mut l = Deque::new();
        l.add_last(1u8);
        l.add_last(2u8);
        l.add_last(3u8);

        assert_linked(&l);
        assert_eq!(vec![&1, &2, &3], l.iter().collect::<Vec<&u8>>());
    }

    #[test]
    fn mixed_scenario() {
        let mut l = Deque::new();
        l.add_first("String 1");
        assert_eq!(vec![&"String 1"], l.iter().collect::<Vec<_>>());

        l.add_first("String 2");
        assert_eq!(
            vec![&"String 2", &"String 1"],
            l.iter().collect::<Vec<_>>()
        );

        l.add_last("String 3");
        assert_eq!(
            vec![&"String 2", &"String 1", &"String 3"],
            l.iter().collect::<Vec<_>>()
        );
        assert_eq!(3, l.len());

        assert_eq!(Ok("String 2"), l.remove_first());
        assert_eq!(Ok("String 3"), l.remove_last());

        assert_linked(&l);
        assert_eq!(vec![&"String 1"], l.iter().collect::<Vec<_>>());
        assert_eq!(1, l.len());
        assert!(!l.is_empty());

        assert_eq!(Ok("String 1"), l.remove_first());
        assert!(l.is_empty());

        l.add_first("String 4");
        assert_eq!(1, l.len());
        assert_eq!(Ok("String 4"), l.remove_last());
        assert!(l.is_empty());
    }

    #[test]
    fn removing_from_empty_fails() {
        let mut l: Deque<u8> = Deque::new();

        assert_eq!(Err(Error::EmptyCollection), l.remove_first());
        assert_eq!(Err(Error::EmptyCollection), l.remove_last());
        assert_eq!(None, l.pop_first());
        assert_eq!(None, l.pop_last());
        assert_linked(&l);
    }

    #[test]
    fn absent_items_are_rejected() {
        let mut l = Deque::new();
        l.add_last(1u8);

        assert_eq!(Err(Error::InvalidArgument), l.try_add_last(None));
        assert_eq!(Err(Error::InvalidArgument), l.try_add_first(None));
        assert_eq!(1, l.len());
        assert_linked(&l);

        assert_eq!(Ok(()), l.try_add_first(Some(0)));
        assert_eq!(Ok(()), l.try_add_last(Some(2)));
        assert_eq!(vec![&0, &1, &2], l.iter().collect::<Vec<&u8>>());
    }

    #[test]
    fn removing_the_last_item_resets_the_deque() {
        for remove_front in [true, false].iter() {
            let mut l = Deque::new();
            l.add_last(1u8);
            l.add_last(2u8);
            l.remove_first().unwrap();
            assert_eq!(1, l.len_freelist());

            let r = if *remove_front {
                l.remove_first()
            } else {
                l.remove_last()
            };
            assert_eq!(Ok(2), r);

            assert_eq!(usize::MAX, l.head);
            assert_eq!(usize::MAX, l.tail);
            assert_eq!(usize::MAX, l.free_list);
            assert_eq!(0, l.len());
            assert_eq!(0, l.len_freelist());
            assert!(l.slots.is_empty());

            l.add_last(3u8);
            assert_linked(&l);
            assert_eq!(0, l.head);
            assert_eq!(vec![&3], l.iter().collect::<Vec<&u8>>());
        }
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut l = Deque::new();
        l.add_last(1u8);
        l.add_last(2u8);
        l.add_last(3u8);

        l.remove_last().unwrap();
        l.remove_first().unwrap();
        assert_eq!(2, l.len_freelist());

        l.add_first(0u8);
        l.add_last(4u8);
        assert_eq!(0, l.len_freelist());
        assert_eq!(3, l.slots.len());

        assert_linked(&l);
        assert_eq!(vec![&0, &2, &4], l.iter().collect::<Vec<&u8>>());
    }

    #[test]
    fn counts_work_as_expected() {
        let mut l = Deque::new();
        l.add_first(10u8);
        l.add_first(11u8);
        assert_eq!(2, l.len());
        assert_eq!(0, l.len_freelist());

        l.remove_last().unwrap();
        assert_eq!(1, l.len());
        assert_eq!(1, l.len_freelist());

        l.remove_last().unwrap();
        assert_eq!(0, l.len());
        assert_eq!(0, l.len_freelist());
        assert!(l.is_empty());
    }

    #[test]
    fn peeks_see_the_ends() {
        let mut l: Deque<u8> = Deque::new();
        assert_eq!(None, l.peek_first());
        assert_eq!(None, l.peek_last());
        assert_eq!(None, l.peek_first_mut());
        assert_eq!(None, l.peek_last_mut());

        l.add_last(10);
        l.add_last(20);

        l.peek_first_mut().map(|r| *r = 100);
        assert_eq!(Some(&100), l.peek_first());
        assert_eq!(Some(&20), l.peek_last());
    }

    #[test]
    fn can_be_created_from_iterator() {
        let mut l = Deque::from_iter(0..5);

        for i in 0..5 {
            assert_eq!(Ok(i), l.remove_first());
        }
        assert!(l.is_empty());
    }

    #[test]
    fn into_iter_consumes_from_the_front() {
        let mut l: Deque<u8> = Deque::new();
        l.add_last(2);
        l.add_first(1);
        l.add_last(3);

        let borrowed: Vec<&u8> = (&l).into_iter().collect();
        assert_eq!(vec![&1, &2, &3], borrowed);

        assert_eq!(vec![1, 2, 3], l.into_iter().collect::<Vec<u8>>());
    }

    #[test]
    fn clear_empties_the_deque() {
        let mut l: Deque<u8> = (0..10).collect();
        l.clear();

        assert!(l.is_empty());
        assert_linked(&l);
        assert_eq!(None, l.iter().next());
    }

    #[test]
    fn with_capacity_preallocates() {
        let mut l = Deque::with_capacity(3);
        assert!(3 <= l.capacity());
        assert_eq!(0, l.len_freelist());

        l.add_first(());
        l.reserve(16);
        assert!(17 <= l.capacity());
    }

    #[test]
    fn default_is_empty() {
        let mut l: Deque<u8> = Deque::default();
        assert!(l.is_empty());
        assert_linked(&l);

        l.add_last(1);
        assert_eq!(Some(&1), l.peek_first());
    }

    #[test]
    fn debug_string() {
        let mut l: Deque<u8> = Deque::new();

        l.add_last(2);
        l.add_last(3);
        l.add_first(1);

        assert_eq!("[1, 2, 3]", format!("{:?}", l));
    }
}
