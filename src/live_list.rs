use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use tracing::trace;

use crate::cursor::CursorPosition;
use crate::error::{check_index, check_position, CursorError};
use crate::live_cursor::LiveCursor;
use crate::registry::{CursorId, CursorRegistry};
use crate::sequence::Sequence;
use crate::state::Mutation;

pub(crate) struct Shared<T, S> {
    pub(crate) items: RefCell<S>,
    pub(crate) cursors: RefCell<CursorRegistry>,
    marker: PhantomData<fn() -> T>,
}

/// An ordered list whose cursors stay valid while it is edited.
///
/// `LiveList` is a handle: clones share the same elements, and every
/// structural edit made through any handle or any cursor is reported to all
/// other cursors open on the list before the editing call returns. Edits take
/// `&self` for that reason.
///
/// The list is single-threaded; it is neither `Send` nor `Sync`.
pub struct LiveList<T, S = Vec<T>> {
    pub(crate) shared: Rc<Shared<T, S>>,
}

impl<T, S> Clone for LiveList<T, S> {
    fn clone(&self) -> Self {
        LiveList {
            shared: self.shared.clone(),
        }
    }
}

impl<T> LiveList<T> {
    pub fn new() -> Self {
        Self::from_storage(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_storage(Vec::with_capacity(capacity))
    }
}

impl<T> Default for LiveList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for LiveList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_storage(items)
    }
}

impl<T> FromIterator<T> for LiveList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_storage(iter.into_iter().collect())
    }
}

impl<T, S: Sequence<T>> LiveList<T, S> {
    pub fn from_storage(storage: S) -> Self {
        LiveList {
            shared: Rc::new(Shared {
                items: RefCell::new(storage),
                cursors: RefCell::new(CursorRegistry::default()),
                marker: PhantomData,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.shared.items.borrow().size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Result<T, CursorError>
    where
        T: Clone,
    {
        let items = self.shared.items.borrow();
        items
            .get(index)
            .cloned()
            .ok_or(CursorError::IndexOutOfRange {
                index,
                len: items.size(),
            })
    }

    /// Replace the element at `index`, returning the old one. Not a
    /// structural change, so cursors are left as they are.
    pub fn set(&self, index: usize, item: T) -> Result<T, CursorError> {
        let mut items = self.shared.items.borrow_mut();
        check_index(index, items.size())?;
        Ok(items.set(index, item))
    }

    pub fn insert(&self, index: usize, item: T) -> Result<(), CursorError> {
        check_position(index, self.len())?;
        self.insert_from(index, item, None);
        Ok(())
    }

    pub fn push(&self, item: T) {
        self.insert_from(self.len(), item, None);
    }

    pub fn remove(&self, index: usize) -> Result<T, CursorError> {
        check_index(index, self.len())?;
        Ok(self.remove_from(index, None))
    }

    /// Remove every element. Cursors see this as a run of removals from the
    /// front, so all of them end up at position 0 tracking nothing.
    pub fn clear(&self) {
        while !self.is_empty() {
            self.remove_from(0, None);
        }
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let items = self.shared.items.borrow();
        (0..items.size()).any(|i| items.get(i) == Some(item))
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let items = self.shared.items.borrow();
        (0..items.size())
            .filter_map(|i| items.get(i).cloned())
            .collect()
    }

    pub fn cursor(&self, pos: CursorPosition) -> Result<LiveCursor<T, S>, CursorError> {
        let next = pos.resolve(self.len())?;
        Ok(LiveCursor::new(self.clone(), next))
    }

    /// Open a cursor positioned before the element at `index`.
    pub fn cursor_at(&self, index: usize) -> Result<LiveCursor<T, S>, CursorError> {
        self.cursor(CursorPosition::Pos(index))
    }

    pub fn cursor_count(&self) -> usize {
        self.shared.cursors.borrow().len()
    }

    /// Whether both handles refer to the same list.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }

    // Bounds are the caller's responsibility from here on.

    pub(crate) fn insert_from(&self, index: usize, item: T, origin: Option<CursorId>) {
        debug_assert!(index <= self.len());
        self.shared.items.borrow_mut().insert_at(index, item);
        trace!(index, "insert");
        self.shared
            .cursors
            .borrow_mut()
            .broadcast(Mutation::Insert(index), origin);
    }

    pub(crate) fn remove_from(&self, index: usize, origin: Option<CursorId>) -> T {
        debug_assert!(index < self.len());
        let item = self.shared.items.borrow_mut().remove_at(index);
        trace!(index, "remove");
        self.shared
            .cursors
            .borrow_mut()
            .broadcast(Mutation::Remove(index), origin);
        item
    }
}

impl<T: fmt::Debug, S: Sequence<T>> fmt::Debug for LiveList<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = self.shared.items.borrow();
        f.debug_list()
            .entries((0..items.size()).filter_map(|i| items.get(i)))
            .finish()
    }
}
