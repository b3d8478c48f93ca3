use std::cell::Cell;
use std::cmp::min;
use std::fmt;
use std::num::NonZeroUsize;
use std::rc::Rc;

use tracing::trace;

use crate::cursor::{Cursor, CursorMut, CursorPosition};
use crate::error::CursorError;
use crate::live_list::LiveList;
use crate::registry::CursorId;
use crate::sequence::Sequence;
use crate::state::{CursorState, Direction};

/// A bidirectional cursor over a [`LiveList`] that survives edits to the list.
///
/// The cursor rests between two elements. Inserting or removing elements,
/// whether through this cursor, another cursor or the list itself, moves the
/// cursor along with the elements around it, so traversal carries on from
/// where it logically was. The element most recently returned by a step is
/// tracked for [`remove`](Self::remove) and [`set`](Self::set) until it is
/// removed, the cursor edits the list, or the cursor is repositioned.
///
/// The cursor is registered with its list for as long as it lives.
pub struct LiveCursor<T, S = Vec<T>> {
    list: LiveList<T, S>,
    state: Rc<Cell<CursorState>>,
    id: CursorId,
}

impl<T, S> LiveCursor<T, S> {
    fn state(&self) -> CursorState {
        self.state.get()
    }

    fn update(&self, f: impl FnOnce(&mut CursorState)) {
        let mut state = self.state.get();
        f(&mut state);
        self.state.set(state);
    }

    pub fn list(&self) -> &LiveList<T, S> {
        &self.list
    }

    pub fn next_index(&self) -> usize {
        self.state().next
    }

    pub fn prev_index(&self) -> Option<usize> {
        self.state().next.checked_sub(1)
    }

    /// The direction of the step that produced the tracked element, or `None`
    /// if no element is tracked.
    pub fn last_direction(&self) -> Option<Direction> {
        self.state().last.map(|returned| returned.direction)
    }
}

impl<T, S: Sequence<T>> LiveCursor<T, S> {
    pub(crate) fn new(list: LiveList<T, S>, next: usize) -> Self {
        Self::with_state(list, CursorState::at(next))
    }

    fn with_state(list: LiveList<T, S>, state: CursorState) -> Self {
        let state = Rc::new(Cell::new(state));
        let id = list.shared.cursors.borrow_mut().register(&state);
        LiveCursor { list, state, id }
    }

    pub fn has_next(&self) -> bool {
        self.state().next < self.list.len()
    }

    pub fn has_prev(&self) -> bool {
        self.state().next > 0
    }

    pub fn try_next(&mut self) -> Result<T, CursorError>
    where
        T: Clone,
    {
        let item = self.peek_next().ok_or(CursorError::NoSuchElement)?;
        self.update(|state| {
            state.step_forward();
        });
        Ok(item)
    }

    pub fn try_prev(&mut self) -> Result<T, CursorError>
    where
        T: Clone,
    {
        let item = self.peek_prev().ok_or(CursorError::NoSuchElement)?;
        self.update(|state| {
            state.step_backward();
        });
        Ok(item)
    }

    pub fn prev(&mut self) -> Option<T>
    where
        T: Clone,
    {
        self.try_prev().ok()
    }

    pub fn peek_next(&self) -> Option<T>
    where
        T: Clone,
    {
        let items = self.list.shared.items.borrow();
        items.get(self.state().next).cloned()
    }

    pub fn peek_prev(&self) -> Option<T>
    where
        T: Clone,
    {
        let index = self.prev_index()?;
        let items = self.list.shared.items.borrow();
        items.get(index).cloned()
    }

    /// The element `remove` and `set` would act on.
    pub fn current(&self) -> Option<T>
    where
        T: Clone,
    {
        let index = self.state().tracked().ok()?;
        let items = self.list.shared.items.borrow();
        items.get(index).cloned()
    }

    /// Step forward `n` times. If the end is reached first, returns the
    /// number of steps that could not be taken.
    pub fn advance_by(&mut self, n: usize) -> Result<(), NonZeroUsize> {
        let remaining = self.list.len() - self.state().next;
        let advance = min(n, remaining);
        if advance > 0 {
            self.update(|state| {
                state.next += advance - 1;
                state.step_forward();
            });
        }
        NonZeroUsize::new(n - advance).map_or(Ok(()), Err)
    }

    /// Step backward `n` times, the mirror of [`advance_by`](Self::advance_by).
    pub fn revert_by(&mut self, n: usize) -> Result<(), NonZeroUsize> {
        let remaining = self.state().next;
        let revert = min(n, remaining);
        if revert > 0 {
            self.update(|state| {
                state.next -= revert - 1;
                state.step_backward();
            });
        }
        NonZeroUsize::new(n - revert).map_or(Ok(()), Err)
    }

    /// Move to `pos`, forgetting the tracked element.
    pub fn seek(&mut self, pos: CursorPosition) -> Result<(), CursorError> {
        let next = pos.resolve(self.list.len())?;
        self.update(|state| state.reposition(next));
        Ok(())
    }

    /// Remove the element returned by the last `next` or `prev`.
    pub fn remove(&mut self) -> Result<T, CursorError> {
        let returned = self.state().last.ok_or(CursorError::IllegalState)?;
        let item = self.list.remove_from(returned.index, Some(self.id));
        self.update(|state| state.removed_own(returned));
        trace!(index = returned.index, "cursor remove");
        Ok(item)
    }

    /// Replace the element returned by the last `next` or `prev`, returning
    /// the old value. The element stays tracked.
    pub fn set(&mut self, item: T) -> Result<T, CursorError> {
        let index = self.state().tracked()?;
        self.list.set(index, item)
    }

    /// Insert before the element `next` would return. The new element ends
    /// up behind the cursor, and nothing is tracked afterwards.
    pub fn add(&mut self, item: T) {
        let index = self.state().next;
        self.list.insert_from(index, item, Some(self.id));
        self.update(|state| state.inserted_own());
        trace!(index, "cursor add");
    }
}

impl<T, S: Sequence<T>> Clone for LiveCursor<T, S> {
    /// The clone is a separate cursor, registered on its own, starting from
    /// the same state.
    fn clone(&self) -> Self {
        Self::with_state(self.list.clone(), self.state())
    }
}

impl<T, S> PartialEq for LiveCursor<T, S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.list.shared, &other.list.shared) && self.state() == other.state()
    }
}

impl<T, S> fmt::Debug for LiveCursor<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state();
        f.debug_struct("LiveCursor")
            .field("next_index", &state.next)
            .field("last_returned", &state.last.map(|returned| returned.index))
            .field("last_direction", &state.last.map(|returned| returned.direction))
            .finish()
    }
}

impl<T, S> Drop for LiveCursor<T, S> {
    fn drop(&mut self) {
        self.list.shared.cursors.borrow_mut().unregister(self.id);
    }
}

impl<T: Clone, S: Sequence<T>> Iterator for LiveCursor<T, S> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }
}

impl<T: Clone, S: Sequence<T>> Cursor for LiveCursor<T, S> {
    fn try_next(&mut self) -> Result<T, CursorError> {
        LiveCursor::try_next(self)
    }

    fn try_prev(&mut self) -> Result<T, CursorError> {
        LiveCursor::try_prev(self)
    }

    fn has_next(&self) -> bool {
        LiveCursor::has_next(self)
    }

    fn has_prev(&self) -> bool {
        LiveCursor::has_prev(self)
    }

    fn next_index(&self) -> usize {
        LiveCursor::next_index(self)
    }

    fn peek_next(&self) -> Option<T> {
        LiveCursor::peek_next(self)
    }

    fn peek_prev(&self) -> Option<T> {
        LiveCursor::peek_prev(self)
    }

    fn advance_by(&mut self, n: usize) -> Result<(), NonZeroUsize> {
        LiveCursor::advance_by(self, n)
    }

    fn revert_by(&mut self, n: usize) -> Result<(), NonZeroUsize> {
        LiveCursor::revert_by(self, n)
    }
}

impl<T: Clone, S: Sequence<T>> CursorMut for LiveCursor<T, S> {
    type Value = T;

    fn remove(&mut self) -> Result<T, CursorError> {
        LiveCursor::remove(self)
    }

    fn set(&mut self, item: T) -> Result<T, CursorError> {
        LiveCursor::set(self, item)
    }

    fn add(&mut self, item: T) {
        LiveCursor::add(self, item)
    }
}
