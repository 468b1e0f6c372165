use crate::error::{Error, Result};
use crate::iterators::{ShuffledIntoIter, ShuffledIter};
use crate::uniform::{shuffle, UniformSource};
use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::iter::FromIterator;

/// A queue whose removals pick uniformly at random among the items it
/// holds.
///
/// Items sit in a power-of-two sized array. The array doubles when it
/// is full and halves once it is at most a quarter occupied, so both
/// `enqueue` and `dequeue` run in amortized constant time. A removal
/// moves the last occupied item into the vacated slot instead of
/// shifting anything.
pub struct RandomizedQueue<T, R = StdRng> {
    // The slots of the array; its length is the capacity. Slots
    // [0, len) are occupied, the rest are cleared.
    items: Vec<Option<T>>,
    len: usize,
    rng: R,
}

impl<T> RandomizedQueue<T> {
    /// Creates an empty queue drawing from a generator seeded by the
    /// operating system.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand_deque::RandomizedQueue;
    ///
    /// let q: RandomizedQueue<u32> = RandomizedQueue::new();
    /// assert!(q.is_empty());
    /// assert_eq!(1, q.capacity());
    /// ```
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates an empty queue whose random choices are reproducible
    /// from `seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand_deque::RandomizedQueue;
    ///
    /// let mut a = RandomizedQueue::with_seed(5);
    /// let mut b = RandomizedQueue::with_seed(5);
    /// for i in 0..10 {
    ///     a.enqueue(i);
    ///     b.enqueue(i);
    /// }
    ///
    /// assert_eq!(a.dequeue(), b.dequeue());
    /// ```
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<T> Default for RandomizedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> RandomizedQueue<T, R>
where
    R: Rng,
{
    /// Creates an empty queue that draws its random indexes from
    /// `rng`.
    pub fn with_rng(rng: R) -> Self {
        RandomizedQueue {
            items: cleared(1),
            len: 0,
            rng,
        }
    }

    /// The number of items in the queue.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the queue holds no items.
    pub fn is_empty(&self) -> bool {
        0 == self.len
    }

    /// The number of slots in the backing array. Always a power of
    /// two, and never less than `len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand_deque::RandomizedQueue;
    ///
    /// let mut q = RandomizedQueue::new();
    /// for i in 0..5 {
    ///     q.enqueue(i);
    /// }
    /// assert_eq!(8, q.capacity());
    /// ```
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Add `item` to the queue, doubling the backing array first if
    /// it is full.
    pub fn enqueue(&mut self, item: T) {
        if self.len == self.items.len() {
            self.resize(2 * self.items.len());
        }
        self.items[self.len] = Some(item);
        self.len += 1;
    }

    /// Add a possibly absent `item` to the queue. An absent item is
    /// rejected with `Error::InvalidArgument` and the queue is left
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand_deque::{Error, RandomizedQueue};
    ///
    /// let mut q = RandomizedQueue::new();
    /// assert_eq!(Ok(()), q.try_enqueue(Some(1.0)));
    /// assert_eq!(Err(Error::InvalidArgument), q.try_enqueue(None));
    /// assert_eq!(1, q.len());
    /// ```
    pub fn try_enqueue(&mut self, item: Option<T>) -> Result<()> {
        let item = item.ok_or(Error::InvalidArgument)?;
        self.enqueue(item);
        Ok(())
    }

    /// Remove and return an item chosen uniformly at random. Fails
    /// with `Error::EmptyCollection` if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand_deque::{Error, RandomizedQueue};
    ///
    /// let mut q = RandomizedQueue::new();
    /// q.enqueue(1);
    /// q.enqueue(2);
    ///
    /// let a = q.dequeue().unwrap();
    /// let b = q.dequeue().unwrap();
    /// assert_eq!(3, a + b);
    /// assert_eq!(Err(Error::EmptyCollection), q.dequeue());
    /// ```
    pub fn dequeue(&mut self) -> Result<T> {
        if 0 == self.len {
            return Err(Error::EmptyCollection);
        }

        let last = self.len - 1;
        let ix = self.rng.uniform(self.len);

        // Move the last item into the hole, leaving the last slot
        // cleared.
        let item = self.items[ix]
            .take()
            .expect("occupied slot is expected to hold an item");
        self.items.swap(ix, last);
        self.len = last;

        let capacity = self.items.len();
        if self.len <= capacity / 4 && 1 <= capacity / 2 {
            self.resize(capacity / 2);
        }

        Ok(item)
    }

    /// Return an item chosen uniformly at random without removing it.
    /// Fails with `Error::EmptyCollection` if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand_deque::RandomizedQueue;
    ///
    /// let mut q = RandomizedQueue::new();
    /// q.enqueue("only");
    ///
    /// assert_eq!(Ok(&"only"), q.sample());
    /// assert_eq!(1, q.len());
    /// ```
    pub fn sample(&mut self) -> Result<&T> {
        if 0 == self.len {
            return Err(Error::EmptyCollection);
        }

        let ix = self.rng.uniform(self.len);
        Ok(self.items[ix]
            .as_ref()
            .expect("occupied slot is expected to hold an item"))
    }

    /// Create an iterator over the items in a freshly shuffled order.
    /// Each call shuffles independently of every other iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand_deque::RandomizedQueue;
    ///
    /// let mut q: RandomizedQueue<u8> = (1..=3).collect();
    ///
    /// let mut v: Vec<u8> = q.iter().copied().collect();
    /// v.sort();
    /// assert_eq!(vec![1, 2, 3], v);
    /// ```
    pub fn iter(&mut self) -> ShuffledIter<'_, T> {
        let mut order: Vec<&T> = self.items[..self.len]
            .iter()
            .map(|s| s.as_ref().expect("occupied slot is expected to hold an item"))
            .collect();
        shuffle(&mut order, &mut self.rng);
        ShuffledIter::new(order)
    }

    /// Copy the items into a shuffled, owned sequence. The copy is
    /// unaffected by anything later done to the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand_deque::RandomizedQueue;
    ///
    /// let mut q: RandomizedQueue<u8> = (1..=3).collect();
    /// let snapshot = q.snapshot();
    ///
    /// q.dequeue().unwrap();
    /// assert_eq!(3, snapshot.count());
    /// ```
    pub fn snapshot(&mut self) -> ShuffledIntoIter<T>
    where
        T: Clone,
    {
        let mut order: Vec<T> = self.items[..self.len]
            .iter()
            .map(|s| {
                s.clone()
                    .expect("occupied slot is expected to hold an item")
            })
            .collect();
        shuffle(&mut order, &mut self.rng);
        ShuffledIntoIter::new(order)
    }

    /// Remove every item and shrink the backing array back to a
    /// single slot.
    pub fn clear(&mut self) {
        trace!(
            "clearing randomized queue of {} items, {} -> 1 slots",
            self.len,
            self.items.len()
        );
        self.items = cleared(1);
        self.len = 0;
    }

    fn resize(&mut self, capacity: usize) {
        debug_assert!(self.len <= capacity);
        debug_assert!(capacity.is_power_of_two());
        trace!(
            "resizing randomized queue holding {} items, {} -> {} slots",
            self.len,
            self.items.len(),
            capacity
        );

        let mut items = Vec::with_capacity(capacity);
        items.extend(self.items.drain(..self.len));
        items.resize_with(capacity, || None);
        self.items = items;
    }
}

fn cleared<T>(capacity: usize) -> Vec<Option<T>> {
    let mut items = Vec::with_capacity(capacity);
    items.resize_with(capacity, || None);
    items
}

impl<T, R> fmt::Debug for RandomizedQueue<T, R>
where
    T: fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list()
            .entries(self.items[..self.len].iter().flatten())
            .finish()
    }
}

impl<T> FromIterator<T> for RandomizedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut q = Self::new();
        q.extend(iter);
        q
    }
}

impl<T, R> Extend<T> for RandomizedQueue<T, R>
where
    R: Rng,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for i in iter {
            self.enqueue(i);
        }
    }
}

impl<T, R> IntoIterator for RandomizedQueue<T, R>
where
    R: Rng,
{
    type Item = T;
    type IntoIter = ShuffledIntoIter<T>;

    fn into_iter(self) -> ShuffledIntoIter<T> {
        let RandomizedQueue {
            mut items,
            len,
            mut rng,
        } = self;
        items.truncate(len);
        let mut order: Vec<T> = items.into_iter().flatten().collect();
        shuffle(&mut order, &mut rng);
        ShuffledIntoIter::new(order)
    }
}
