use std::ops::{Index, IndexMut};

/// A stable handle to a node stored in an [`Arena`].
///
/// Handles stay valid until the node is removed. A removed handle may be
/// handed out again by a later insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

/// A node of the doubly linked list. The links are handles into the same
/// arena; `None` marks the boundary of the list.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) prev: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
    pub(crate) element: T,
}

#[derive(Debug)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<NodeId> },
}

/// Slot storage for list nodes.
///
/// Vacant slots are chained into a free list and reused before the backing
/// vector grows, so a list that keeps inserting and removing does not leak
/// slots.
#[derive(Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Option<NodeId>,
    occupied: usize,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            occupied: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: None,
            occupied: 0,
        }
    }

    /// Number of occupied slots.
    pub(crate) fn occupied(&self) -> usize {
        self.occupied
    }

    pub(crate) fn insert(&mut self, node: Node<T>) -> NodeId {
        self.occupied += 1;
        match self.free {
            Some(id) => {
                let slot = std::mem::replace(&mut self.slots[id.0], Slot::Occupied(node));
                match slot {
                    Slot::Vacant { next_free } => self.free = next_free,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                }
                id
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Vacate the slot of `id` and return the node it held.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to an occupied slot.
    pub(crate) fn remove(&mut self, id: NodeId) -> Node<T> {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match std::mem::replace(&mut self.slots[id.0], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(id);
                self.occupied -= 1;
                node
            }
            Slot::Vacant { next_free } => {
                // put the slot back untouched before reporting the misuse
                self.slots[id.0] = Slot::Vacant { next_free };
                panic!("removing a vacant slot {:?}", id)
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.occupied = 0;
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Node<T> {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("dangling node handle {:?}", id),
        }
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("dangling node handle {:?}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Arena, Node};

    fn node(element: i32) -> Node<i32> {
        Node {
            prev: None,
            next: None,
            element,
        }
    }

    #[test]
    fn arena_reuses_vacant_slots() {
        let mut arena = Arena::new();
        let a = arena.insert(node(1));
        let b = arena.insert(node(2));
        assert_eq!(arena.occupied(), 2);

        assert_eq!(arena.remove(a).element, 1);
        assert_eq!(arena.occupied(), 1);

        // the freed slot is handed out again before the vector grows
        let c = arena.insert(node(3));
        assert_eq!(c, a);
        assert_eq!(arena[c].element, 3);
        assert_eq!(arena[b].element, 2);
        assert_eq!(arena.slots.len(), 2);
    }

    #[test]
    fn arena_free_list_is_lifo() {
        let mut arena = Arena::new();
        let ids: Vec<_> = (0..4).map(|i| arena.insert(node(i))).collect();
        arena.remove(ids[1]);
        arena.remove(ids[3]);
        assert_eq!(arena.insert(node(10)), ids[3]);
        assert_eq!(arena.insert(node(11)), ids[1]);
        assert_eq!(arena.insert(node(12)).0, 4);
    }

    #[test]
    #[should_panic(expected = "dangling node handle")]
    fn arena_rejects_dangling_handle() {
        let mut arena = Arena::new();
        let a = arena.insert(node(1));
        arena.remove(a);
        let _ = &arena[a];
    }
}
