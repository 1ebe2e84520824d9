extern crate alloc;

use alloc::fmt;
use alloc::vec::Vec;
use core::num::NonZeroUsize;

/// Stable handle to an entry slot inside a [`List`].
///
/// Handles stay valid until the entry is removed. A removed slot goes onto
/// the free list and may be handed out again by a later insert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct EntryId(usize);

/// Slot of the head sentinel.
const HEAD: EntryId = EntryId(0);
/// Slot of the tail sentinel.
const TAIL: EntryId = EntryId(1);

/// A node in the doubly linked list.
///
/// Contains a value and the slots of the previous and next entries.
struct Entry<T> {
    /// The value stored in this entry. `None` for sentinels and free slots.
    val: Option<T>,
    /// Slot of the previous entry in the list.
    prev: EntryId,
    /// Slot of the next entry in the list.
    next: EntryId,
}

impl<T> Entry<T> {
    fn new(val: T) -> Self {
        Entry {
            val: Some(val),
            prev: HEAD,
            next: TAIL,
        }
    }

    /// Creates a sentinel entry. Sentinels never carry a value.
    fn new_sigil() -> Self {
        Entry {
            val: None,
            prev: HEAD,
            next: TAIL,
        }
    }
}

/// A doubly linked list backed by an arena of slots.
///
/// Entries live in a `Vec` and link to each other by slot index, so the
/// list owns every entry while callers hold plain [`EntryId`] handles.
/// Two sentinel slots bound the list: walking from the head sentinel to
/// the tail sentinel visits the live entries front to back. The front is
/// the most recently attached entry.
///
/// # Examples
///
/// ```ignore
/// let mut list = List::new(NonZeroUsize::new(3).unwrap());
///
/// let a = list.add(10).unwrap();
/// let _b = list.add(20).unwrap();
///
/// list.move_to_front(a);
/// assert_eq!(list.remove_last(), Some(20));
/// ```
pub(crate) struct List<T> {
    /// Maximum number of items the list can hold.
    cap: NonZeroUsize,
    /// Current number of items in the list.
    len: usize,
    /// Slot arena. Slots 0 and 1 are the head and tail sentinels.
    entries: Vec<Entry<T>>,
    /// Vacated slots available for reuse.
    free: Vec<EntryId>,
}

impl<T> List<T> {
    /// Creates a new list that holds at most `cap` items.
    pub(crate) fn new(cap: NonZeroUsize) -> List<T> {
        let mut entries = Vec::with_capacity(cap.get().saturating_add(2));
        entries.push(Entry::new_sigil());
        entries.push(Entry::new_sigil());
        entries[HEAD.0].next = TAIL;
        entries[TAIL.0].prev = HEAD;

        List {
            cap,
            len: 0,
            entries,
            free: Vec::new(),
        }
    }

    /// Returns the maximum number of items the list can hold.
    pub(crate) fn cap(&self) -> NonZeroUsize {
        self.cap
    }

    /// Returns the current number of items in the list.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no items.
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the list is at capacity.
    pub(crate) fn is_full(&self) -> bool {
        self.len == self.cap.get()
    }

    #[inline]
    fn is_sigil(id: EntryId) -> bool {
        id == HEAD || id == TAIL
    }

    /// Returns true if `id` names a slot that currently holds a value.
    fn is_live(&self, id: EntryId) -> bool {
        !Self::is_sigil(id)
            && self
                .entries
                .get(id.0)
                .is_some_and(|entry| entry.val.is_some())
    }

    /// Places `v` into a free slot, or grows the arena by one slot.
    ///
    /// The returned slot is not linked into the list.
    fn allocate(&mut self, v: T) -> EntryId {
        match self.free.pop() {
            Some(id) => {
                self.entries[id.0] = Entry::new(v);
                id
            }
            None => {
                self.entries.push(Entry::new(v));
                EntryId(self.entries.len() - 1)
            }
        }
    }

    /// Unlinks a node from its neighbours without vacating its slot.
    fn detach(&mut self, id: EntryId) {
        let Entry { prev, next, .. } = self.entries[id.0];
        self.entries[prev.0].next = next;
        self.entries[next.0].prev = prev;
    }

    /// Links a detached node immediately after the head sentinel.
    fn attach(&mut self, id: EntryId) {
        let first = self.entries[HEAD.0].next;
        self.entries[id.0].prev = HEAD;
        self.entries[id.0].next = first;
        self.entries[HEAD.0].next = id;
        self.entries[first.0].prev = id;
    }

    /// Adds a value to the front of the list.
    ///
    /// Returns the handle of the new entry, or `None` if the list is full.
    pub(crate) fn add(&mut self, v: T) -> Option<EntryId> {
        if self.is_full() {
            return None;
        }
        let id = self.allocate(v);
        self.attach(id);
        self.len += 1;
        Some(id)
    }

    /// Moves a node to the front of the list (after the head sentinel).
    ///
    /// Unlink and relink happen in one call, so the node is never observed
    /// missing from the list.
    pub(crate) fn move_to_front(&mut self, id: EntryId) {
        if !self.is_live(id) || self.entries[HEAD.0].next == id {
            return;
        }
        self.detach(id);
        self.attach(id);
    }

    /// Removes the entry at `id` and returns its value.
    ///
    /// Returns `None` for sentinels and vacated slots.
    pub(crate) fn remove(&mut self, id: EntryId) -> Option<T> {
        if !self.is_live(id) {
            return None;
        }
        self.detach(id);
        let val = self.entries[id.0].val.take();
        self.free.push(id);
        self.len -= 1;
        val
    }

    /// Returns the handle of the last (least recently attached) entry.
    pub(crate) fn last(&self) -> Option<EntryId> {
        let prev = self.entries[TAIL.0].prev;
        if prev == HEAD {
            None
        } else {
            Some(prev)
        }
    }

    /// Removes the last entry and returns its value.
    pub(crate) fn remove_last(&mut self) -> Option<T> {
        let id = self.last()?;
        self.remove(id)
    }

    /// Replaces the value at `id`, returning the previous one.
    ///
    /// Returns `None` and leaves the list untouched if `id` is not live.
    pub(crate) fn update(&mut self, id: EntryId, v: T) -> Option<T> {
        if !self.is_live(id) {
            return None;
        }
        self.entries[id.0].val.replace(v)
    }

    /// Gets a reference to the value stored at `id`.
    pub(crate) fn get(&self, id: EntryId) -> Option<&T> {
        if Self::is_sigil(id) {
            return None;
        }
        self.entries.get(id.0).and_then(|entry| entry.val.as_ref())
    }

    /// Gets a mutable reference to the value stored at `id`.
    pub(crate) fn get_mut(&mut self, id: EntryId) -> Option<&mut T> {
        if Self::is_sigil(id) {
            return None;
        }
        self.entries.get_mut(id.0).and_then(|entry| entry.val.as_mut())
    }

    /// Iterates over values from front to back.
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.entries[HEAD.0].next,
            remaining: self.len,
        }
    }

    /// Clears the list, removing all entries and releasing every slot.
    pub(crate) fn clear(&mut self) {
        self.entries.truncate(2);
        self.entries[HEAD.0].next = TAIL;
        self.entries[TAIL.0].prev = HEAD;
        self.free.clear();
        self.len = 0;
    }

    /// Number of slots in the arena, sentinels included.
    #[cfg(test)]
    fn slots(&self) -> usize {
        self.entries.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("capacity", &self.cap)
            .field("length", &self.len)
            .finish()
    }
}

/// Front-to-back iterator over the values of a [`List`].
pub(crate) struct Iter<'a, T> {
    list: &'a List<T>,
    cursor: EntryId,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == TAIL {
            return None;
        }
        let entry = &self.list.entries[self.cursor.0];
        self.cursor = entry.next;
        self.remaining = self.remaining.saturating_sub(1);
        entry.val.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
