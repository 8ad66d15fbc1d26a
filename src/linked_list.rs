use crate::{errors::ListError, node::Node};
use core::fmt;
use std::collections::HashMap;

/// An indexable doubly linked list with O(1) access at both ends.
///
/// Nodes live in an id-keyed arena; `prev`/`next` are ids rather than owning
/// pointers, so the chain never forms an ownership cycle.
#[derive(Debug)]
pub struct LinkedList<T> {
    nodes: HashMap<usize, Node<T>>,
    next_id: usize,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

/// Iterator over values from head to tail.
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            next_id: 0,
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is the list empty?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First element, or `Empty` if there is none. O(1).
    pub fn front(&self) -> Result<&T, ListError> {
        match self.head {
            Some(id) => Ok(&self.nodes[&id].value),
            None => Err(ListError::Empty),
        }
    }

    /// Last element, or `Empty` if there is none. O(1).
    pub fn back(&self) -> Result<&T, ListError> {
        match self.tail {
            Some(id) => Ok(&self.nodes[&id].value),
            None => Err(ListError::Empty),
        }
    }

    /// Element at `index`. O(n), walking from the nearer end.
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        let id = self.node_at(index)?;
        Ok(&self.nodes[&id].value)
    }

    /// Mutable element at `index`. O(n), walking from the nearer end.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let id = self.node_at(index)?;
        Ok(&mut self.nodes.get_mut(&id).expect("node exists").value)
    }

    /// Push a value to the front. O(1).
    pub fn push_front(&mut self, value: T) {
        let id = self.alloc_id();
        self.nodes.insert(id, Node::new(None, value, self.head));
        match self.head {
            Some(old) => self.nodes.get_mut(&old).expect("head exists").prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
    }

    /// Push a value to the back. O(1).
    pub fn push_back(&mut self, value: T) {
        let id = self.alloc_id();
        self.nodes.insert(id, Node::new(self.tail, value, None));
        match self.tail {
            Some(old) => self.nodes.get_mut(&old).expect("tail exists").next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
    }

    /// Insert a value at `index`, shifting later elements toward the tail.
    ///
    /// `index == len` appends; anything larger is `OutOfBounds`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        if index == self.len {
            self.push_back(value);
            return Ok(());
        }
        let at = self.node_at(index)?;
        self.link_before(at, value);
        Ok(())
    }

    /// Replace the value at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        let id = self.node_at(index)?;
        let node = self.nodes.get_mut(&id).expect("node exists");
        Ok(core::mem::replace(&mut node.value, value))
    }

    /// Remove and return the first element. O(1).
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        let id = self.head.ok_or(ListError::Empty)?;
        Ok(self.unlink(id))
    }

    /// Remove and return the last element. O(1).
    pub fn pop_back(&mut self) -> Result<T, ListError> {
        let id = self.tail.ok_or(ListError::Empty)?;
        Ok(self.unlink(id))
    }

    /// Remove and return the element at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        let id = self.node_at(index)?;
        Ok(self.unlink(id))
    }

    /// Drop every element and reset the list to empty.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.next_id = 0;
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterate values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    fn alloc_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Resolve `index` to a node id, walking from whichever end is nearer.
    fn node_at(&self, index: usize) -> Result<usize, ListError> {
        if index >= self.len {
            return Err(ListError::OutOfBounds {
                index,
                len: self.len,
            });
        }
        if index < self.len / 2 {
            let mut id = self.head.expect("non-empty list has head");
            for _ in 0..index {
                id = self.nodes[&id].next.expect("in-bounds node has next");
            }
            Ok(id)
        } else {
            let mut id = self.tail.expect("non-empty list has tail");
            for _ in index + 1..self.len {
                id = self.nodes[&id].prev.expect("in-bounds node has prev");
            }
            Ok(id)
        }
    }

    /// Detach `id` from the chain, re-splicing its neighbors, and return its
    /// value. The node is removed from the arena so the value's ownership is
    /// released immediately.
    fn unlink(&mut self, id: usize) -> T {
        let node = self.nodes.remove(&id).expect("node exists");
        match node.prev {
            Some(p) => self.nodes.get_mut(&p).expect("prev exists").next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.nodes.get_mut(&n).expect("next exists").prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;
        node.value
    }

    /// Insert a new node carrying `value` immediately before `id`.
    fn link_before(&mut self, id: usize, value: T) {
        let prev = self.nodes[&id].prev;
        let new_id = self.alloc_id();
        self.nodes.insert(new_id, Node::new(prev, value, Some(id)));
        match prev {
            Some(p) => self.nodes.get_mut(&p).expect("prev exists").next = Some(new_id),
            None => self.head = Some(new_id),
        }
        self.nodes.get_mut(&id).expect("node exists").prev = Some(new_id);
        self.len += 1;
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Position of the first element equal to `value`, scanning from head.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        let mut cursor = self.head;
        let mut index = 0;
        while let Some(id) = cursor {
            let node = &self.nodes[&id];
            if node.value == *value {
                return Some(index);
            }
            cursor = node.next;
            index += 1;
        }
        None
    }

    /// Does the list contain an element equal to `value`?
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Unlink the first element equal to `value`. Returns whether one was
    /// found and removed.
    pub fn remove_item(&mut self, value: &T) -> bool {
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = &self.nodes[&id];
            if node.value == *value {
                self.unlink(id);
                return true;
            }
            cursor = node.next;
        }
        false
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    /// Renders as `[a, b, c]` in head-to-tail order; the empty list is `[]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = &self.nodes[&id];
            write!(f, "{}", node.value)?;
            if node.next.is_some() {
                f.write_str(", ")?;
            }
            cursor = node.next;
        }
        f.write_str("]")
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = &self.list.nodes[&id];
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
