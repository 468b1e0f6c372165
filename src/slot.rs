pub(crate) struct Free {
    // The next free slot. MAX at the end of the free list.
    next: usize,
}

impl Free {
    pub(crate) fn next(&self) -> usize {
        self.next
    }
}

/// A linked node. `prev` and `next` are plain indexes into the arena;
/// neither owns the slot it names.
pub(crate) struct Node<T> {
    // The index of the node nearer the front. MAX at the head.
    prev: usize,
    // The index of the node nearer the back. MAX at the tail.
    next: usize,
    payload: T,
}

impl<T> Node<T> {
    pub(crate) fn prev(&self) -> usize {
        self.prev
    }

    pub(crate) fn set_prev(&mut self, prev: usize) {
        self.prev = prev;
    }

    pub(crate) fn next(&self) -> usize {
        self.next
    }

    pub(crate) fn set_next(&mut self, next: usize) {
        self.next = next;
    }

    pub(crate) fn payload(&self) -> &T {
        &self.payload
    }

    pub(crate) fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }

    pub(crate) fn take(self) -> (usize, T, usize) {
        let Node {
            prev,
            payload,
            next,
        } = self;
        (prev, payload, next)
    }
}

pub(crate) enum Slot<T> {
    Free(Free),
    Node(Node<T>),
}

impl<T> Slot<T> {
    pub(crate) fn new_free(next: usize) -> Slot<T> {
        Slot::Free(Free { next })
    }

    pub(crate) fn new_node(prev: usize, next: usize, payload: T) -> Slot<T> {
        Slot::Node(Node {
            prev,
            next,
            payload,
        })
    }

    pub(crate) fn node(&self) -> Option<&Node<T>> {
        if let Slot::Node(node) = self {
            Some(node)
        } else {
            None
        }
    }

    pub(crate) fn node_mut(&mut self) -> Option<&mut Node<T>> {
        if let Slot::Node(node) = self {
            Some(node)
        } else {
            None
        }
    }

    pub(crate) fn free(&self) -> Option<&Free> {
        if let Slot::Free(free) = self {
            Some(free)
        } else {
            None
        }
    }

    pub(crate) fn into_node(self) -> Option<Node<T>> {
        if let Slot::Node(node) = self {
            Some(node)
        } else {
            None
        }
    }
}
