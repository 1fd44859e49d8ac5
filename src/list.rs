//! A doubly linked list whose nodes live in a fixed-capacity arena.
//!
//! Nodes are addressed by [`Handle`]s instead of pointers. A handle carries the
//! generation of the slot it was issued for, so a handle to a removed node
//! never resolves to whatever value later reuses the slot.
//!
//! # Examples
//! ```
//! use tinker_bits::LinkedList;
//!
//! let mut list = LinkedList::<u32, 4>::new();
//! list.insert_sorted(3, true).unwrap();
//! let one = list.insert_sorted(1, true).unwrap();
//! list.insert_sorted(2, true).unwrap();
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//! assert_eq!(list.remove(one), Some(1));
//! assert_eq!(list.remove(one), None);
//! assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [3, 2]);
//! ```

use core::array::from_fn;
use core::fmt::{Debug, Formatter};
use core::iter::FusedIterator;
use core::mem;

/// Addresses one node of a [`LinkedList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    index: usize,
    generation: u32,
}

struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

struct Entry<T> {
    generation: u32,
    slot: Slot<T>,
}

/// A doubly linked list of at most `CAPACITY` elements.
///
/// Usable as a queue ([`enqueue`]/[`dequeue`]), a stack ([`push`]/[`pop`]) or
/// a sorted list ([`insert_by`]/[`insert_sorted`]). Every operation except the
/// sorted insertion and [`first`] runs in O(1).
///
/// [`enqueue`]: LinkedList::enqueue
/// [`dequeue`]: LinkedList::dequeue
/// [`push`]: LinkedList::push
/// [`pop`]: LinkedList::pop
/// [`insert_by`]: LinkedList::insert_by
/// [`insert_sorted`]: LinkedList::insert_sorted
/// [`first`]: LinkedList::first
pub struct LinkedList<T, const CAPACITY: usize> {
    entries: [Entry<T>; CAPACITY],
    head: Option<usize>,
    tail: Option<usize>,
    free: Option<usize>,
    count: usize,
}

impl<T, const CAPACITY: usize> LinkedList<T, CAPACITY> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            entries: from_fn(|index| Entry {
                generation: 0,
                slot: Slot::Vacant {
                    next_free: (index + 1 < CAPACITY).then_some(index + 1),
                },
            }),
            head: None,
            tail: None,
            free: (CAPACITY > 0).then_some(0),
            count: 0,
        }
    }

    /// Maximum number of elements.
    #[inline]
    pub const fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Current number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the list holds no element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns `true` if no further element fits.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == CAPACITY
    }

    /// Appends `value` to the end of the list.
    ///
    /// Returns the value back if the list is full.
    pub fn enqueue(&mut self, value: T) -> Result<Handle, T> {
        let index = self.allocate(value)?;
        self.link_back(index);
        Ok(self.handle(index))
    }

    /// Removes and returns the first element.
    pub fn dequeue(&mut self) -> Option<T> {
        let index = self.head?;
        self.unlink(index);
        Some(self.release(index))
    }

    /// Prepends `value` to the front of the list.
    ///
    /// Returns the value back if the list is full.
    pub fn push(&mut self, value: T) -> Result<Handle, T> {
        let index = self.allocate(value)?;
        self.link_front(index);
        Ok(self.handle(index))
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Option<T> {
        let index = self.tail?;
        self.unlink(index);
        Some(self.release(index))
    }

    /// Inserts `value` before the first element `current` for which
    /// `less(&value, current)` holds, or at the end if there is none.
    ///
    /// Keeping the same `less` across insertions keeps the list sorted, with
    /// equal elements in insertion order.
    ///
    /// Returns the value back if the list is full.
    pub fn insert_by<F>(&mut self, value: T, mut less: F) -> Result<Handle, T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let node = self.node(index);
            if less(&value, &node.value) {
                break;
            }
            cursor = node.next;
        }

        let index = self.allocate(value)?;
        match cursor {
            Some(before) => self.link_before(index, before),
            None => self.link_back(index),
        }
        Ok(self.handle(index))
    }

    /// Inserts `value` in ascending or descending order.
    ///
    /// Returns the value back if the list is full.
    pub fn insert_sorted(&mut self, value: T, ascending: bool) -> Result<Handle, T>
    where
        T: Ord,
    {
        if ascending {
            self.insert_by(value, |new, current| new < current)
        } else {
            self.insert_by(value, |new, current| new > current)
        }
    }

    /// Removes the node addressed by `handle` and returns its value.
    ///
    /// Returns `None` if the handle is stale.
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        let index = self.resolve(handle)?;
        self.unlink(index);
        Some(self.release(index))
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        while self.dequeue().is_some() {}
    }

    /// Returns the first element.
    #[inline]
    pub fn peek_head(&self) -> Option<&T> {
        self.head.map(|index| &self.node(index).value)
    }

    /// Returns the last element.
    #[inline]
    pub fn peek_tail(&self) -> Option<&T> {
        self.tail.map(|index| &self.node(index).value)
    }

    /// Returns the value addressed by `handle`, or `None` if it is stale.
    #[inline]
    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.resolve(handle).map(|index| &self.node(index).value)
    }

    /// Returns the value addressed by `handle` mutably, or `None` if it is
    /// stale.
    #[inline]
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        let index = self.resolve(handle)?;
        Some(&mut self.node_mut(index).value)
    }

    /// Returns the handle of the first element satisfying `predicate`.
    ///
    /// The element stays in the list.
    pub fn first<P>(&self, mut predicate: P) -> Option<Handle>
    where
        P: FnMut(&T) -> bool,
    {
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let node = self.node(index);
            if predicate(&node.value) {
                return Some(self.handle(index));
            }
            cursor = node.next;
        }
        None
    }

    /// Returns an iterator from head to tail. Use `.rev()` to walk from tail
    /// to head.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, CAPACITY> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.count,
        }
    }

    fn allocate(&mut self, value: T) -> Result<usize, T> {
        let Some(index) = self.free else {
            return Err(value);
        };
        self.free = match self.entries[index].slot {
            Slot::Vacant { next_free } => next_free,
            Slot::Occupied(_) => unreachable!("free list points at occupied slot {index}"),
        };
        self.entries[index].slot = Slot::Occupied(Node {
            value,
            prev: None,
            next: None,
        });
        Ok(index)
    }

    fn release(&mut self, index: usize) -> T {
        let entry = &mut self.entries[index];
        let slot = mem::replace(
            &mut entry.slot,
            Slot::Vacant {
                next_free: self.free,
            },
        );
        entry.generation = entry.generation.wrapping_add(1);
        self.free = Some(index);
        match slot {
            Slot::Occupied(node) => node.value,
            Slot::Vacant { .. } => unreachable!("released vacant slot {index}"),
        }
    }

    #[inline]
    fn handle(&self, index: usize) -> Handle {
        Handle {
            index,
            generation: self.entries[index].generation,
        }
    }

    fn resolve(&self, handle: Handle) -> Option<usize> {
        let entry = self.entries.get(handle.index)?;
        match entry.slot {
            Slot::Occupied(_) if entry.generation == handle.generation => Some(handle.index),
            _ => None,
        }
    }

    #[inline]
    fn node(&self, index: usize) -> &Node<T> {
        match &self.entries[index].slot {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("linked index {index} is vacant"),
        }
    }

    #[inline]
    fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        match &mut self.entries[index].slot {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("linked index {index} is vacant"),
        }
    }

    fn link_back(&mut self, index: usize) {
        let tail = self.tail;
        let node = self.node_mut(index);
        node.prev = tail;
        node.next = None;
        match tail {
            Some(tail) => self.node_mut(tail).next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.count += 1;
    }

    fn link_front(&mut self, index: usize) {
        let head = self.head;
        let node = self.node_mut(index);
        node.prev = None;
        node.next = head;
        match head {
            Some(head) => self.node_mut(head).prev = Some(index),
            None => self.tail = Some(index),
        }
        self.head = Some(index);
        self.count += 1;
    }

    fn link_before(&mut self, index: usize, before: usize) {
        let prev = self.node(before).prev;
        let node = self.node_mut(index);
        node.prev = prev;
        node.next = Some(before);
        self.node_mut(before).prev = Some(index);
        match prev {
            Some(prev) => self.node_mut(prev).next = Some(index),
            None => self.head = Some(index),
        }
        self.count += 1;
    }

    fn unlink(&mut self, index: usize) {
        let node = self.node_mut(index);
        let (prev, next) = (node.prev.take(), node.next.take());
        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.tail = prev,
        }
        self.count -= 1;
    }
}

impl<T, const CAPACITY: usize> Default for LinkedList<T, CAPACITY> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug, const CAPACITY: usize> Debug for LinkedList<T, CAPACITY> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'list, T, const CAPACITY: usize> IntoIterator for &'list LinkedList<T, CAPACITY> {
    type Item = &'list T;
    type IntoIter = Iter<'list, T, CAPACITY>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of a [`LinkedList`].
///
/// Returned by [`LinkedList::iter()`].
pub struct Iter<'list, T, const CAPACITY: usize> {
    list: &'list LinkedList<T, CAPACITY>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'list, T, const CAPACITY: usize> Iterator for Iter<'list, T, CAPACITY> {
    type Item = &'list T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let node = list.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, const CAPACITY: usize> DoubleEndedIterator for Iter<'_, T, CAPACITY> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let node = list.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T, const CAPACITY: usize> ExactSizeIterator for Iter<'_, T, CAPACITY> {}

impl<T, const CAPACITY: usize> FusedIterator for Iter<'_, T, CAPACITY> {}
