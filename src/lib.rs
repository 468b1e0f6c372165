//! Two queues.
//!
//! [`Deque`] is a double-ended queue that allows items to be added and
//! removed at either end in constant time. Internally it is a
//! doubly-linked list whose nodes live in a `Vec` and track their
//! neighbours, and the front and back of the list, by index. Slots
//! vacated by removals are put on an internal free list and reused by
//! later insertions before the `Vec` is expanded.
//!
//! [`RandomizedQueue`] removes and samples items uniformly at random.
//! It keeps its items in a power-of-two sized array that doubles when
//! full and halves when a quarter full, and fills the hole left by a
//! removal with the last item. Each of its iterators walks its own
//! freshly shuffled order.
//!
//! Neither queue is synchronized. Resizes of the randomized queue and
//! resets of the deque are reported through the `log` facade at
//! `trace` and `debug` level.

mod deque;
mod error;
mod iterators;
mod randomized;
mod slot;
mod uniform;

pub use crate::deque::Deque;
pub use crate::error::{Error, Result};
pub use crate::iterators::{Drain, IntoIter, Iter, IterBack, ShuffledIntoIter, ShuffledIter};
pub use crate::randomized::RandomizedQueue;
pub use crate::uniform::UniformSource;
