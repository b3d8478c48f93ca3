//! Position bookkeeping for a single cursor.
//!
//! Everything here is plain index arithmetic with no access to the list, so
//! the rules for how a cursor follows structural edits can be checked in
//! isolation from storage and registration.

use crate::error::CursorError;

/// Which traversal step produced the tracked element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

/// The element a cursor may `remove` or `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Returned {
    pub index: usize,
    pub direction: Direction,
}

/// A structural edit to the list, broadcast to every cursor that did not
/// issue it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mutation {
    /// An element was inserted so that it now sits at this index.
    Insert(usize),
    /// The element at this index was removed.
    Remove(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CursorState {
    // Always within [0, len] of the current list.
    pub next: usize,
    // None means nothing may be removed or set.
    pub last: Option<Returned>,
}

impl CursorState {
    pub fn at(next: usize) -> Self {
        CursorState { next, last: None }
    }

    /// Move over the element at `next`, returning its index. The caller has
    /// checked that such an element exists.
    pub fn step_forward(&mut self) -> usize {
        let index = self.next;
        self.next += 1;
        self.last = Some(Returned {
            index,
            direction: Direction::Forward,
        });
        index
    }

    /// Move back over the element before `next`, returning its index. The
    /// caller has checked that `next > 0`.
    pub fn step_backward(&mut self) -> usize {
        self.next -= 1;
        self.last = Some(Returned {
            index: self.next,
            direction: Direction::Backward,
        });
        self.next
    }

    pub fn tracked(&self) -> Result<usize, CursorError> {
        self.last
            .map(|returned| returned.index)
            .ok_or(CursorError::IllegalState)
    }

    /// Account for this cursor having removed its tracked element.
    pub fn removed_own(&mut self, returned: Returned) {
        if returned.direction == Direction::Forward {
            // The removed element sat at next - 1.
            self.next -= 1;
        }
        self.last = None;
    }

    /// Account for this cursor having inserted at `next`.
    pub fn inserted_own(&mut self) {
        self.next += 1;
        self.last = None;
    }

    pub fn reposition(&mut self, next: usize) {
        self.next = next;
        self.last = None;
    }

    /// Follow an edit made by someone else so that `next` and the tracked
    /// element keep referring to the same elements as before.
    pub fn reconcile(&mut self, mutation: Mutation) {
        match mutation {
            Mutation::Insert(k) => {
                if k <= self.next {
                    self.next += 1;
                }
                // An insert at the tracked slot lands before the tracked
                // element, pushing it one place further.
                if let Some(returned) = self.last.as_mut() {
                    if k <= returned.index {
                        returned.index += 1;
                    }
                }
            }
            Mutation::Remove(k) => {
                if k < self.next {
                    self.next -= 1;
                }
                if let Some(returned) = self.last {
                    if returned.index == k {
                        // The tracked element is gone.
                        self.last = None;
                    } else if k < returned.index {
                        self.last = Some(Returned {
                            index: returned.index - 1,
                            ..returned
                        });
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward_at(next: usize) -> CursorState {
        let mut state = CursorState::at(next - 1);
        state.step_forward();
        state
    }

    fn backward_at(next: usize) -> CursorState {
        let mut state = CursorState::at(next + 1);
        state.step_backward();
        state
    }

    #[test]
    fn stepping() {
        let mut state = CursorState::at(0);
        assert_eq!(state.tracked(), Err(CursorError::IllegalState));
        assert_eq!(state.step_forward(), 0);
        assert_eq!(state.step_forward(), 1);
        assert_eq!(state.next, 2);
        assert_eq!(state.tracked(), Ok(1));
        assert_eq!(state.step_backward(), 1);
        assert_eq!(state.next, 1);
        assert_eq!(
            state.last,
            Some(Returned {
                index: 1,
                direction: Direction::Backward
            })
        );
    }

    #[test]
    fn own_remove() {
        let mut state = forward_at(3);
        let returned = state.last.unwrap();
        state.removed_own(returned);
        assert_eq!(state, CursorState::at(2));

        let mut state = backward_at(3);
        let returned = state.last.unwrap();
        state.removed_own(returned);
        assert_eq!(state, CursorState::at(3));
    }

    #[test]
    fn own_insert() {
        let mut state = forward_at(3);
        state.inserted_own();
        assert_eq!(state, CursorState::at(4));
    }

    #[test]
    fn insert_before_cursor() {
        let mut state = forward_at(3);
        state.reconcile(Mutation::Insert(0));
        assert_eq!(state.next, 4);
        assert_eq!(state.tracked(), Ok(3));
    }

    #[test]
    fn insert_at_tracked_slot() {
        // Forward: tracked element is at next - 1.
        let mut state = forward_at(1);
        state.reconcile(Mutation::Insert(0));
        assert_eq!(state.next, 2);
        assert_eq!(state.tracked(), Ok(1));

        // Backward: tracked element is at next.
        let mut state = backward_at(1);
        state.reconcile(Mutation::Insert(1));
        assert_eq!(state.next, 2);
        assert_eq!(state.tracked(), Ok(2));
    }

    #[test]
    fn insert_between_tracked_and_next() {
        let mut state = forward_at(1);
        state.reconcile(Mutation::Insert(1));
        assert_eq!(state.next, 2);
        assert_eq!(state.tracked(), Ok(0));
    }

    #[test]
    fn insert_after_cursor() {
        let mut state = forward_at(2);
        state.reconcile(Mutation::Insert(5));
        assert_eq!(state.next, 2);
        assert_eq!(state.tracked(), Ok(1));
        assert_eq!(state.last.unwrap().direction, Direction::Forward);
    }

    #[test]
    fn insert_into_empty_list() {
        let mut state = CursorState::at(0);
        state.reconcile(Mutation::Insert(0));
        assert_eq!(state, CursorState::at(1));
    }

    #[test]
    fn remove_before_cursor() {
        let mut state = forward_at(5);
        state.reconcile(Mutation::Remove(1));
        assert_eq!(state.next, 4);
        assert_eq!(state.tracked(), Ok(3));
    }

    #[test]
    fn remove_tracked_element() {
        let mut state = forward_at(5);
        state.reconcile(Mutation::Remove(4));
        assert_eq!(state, CursorState::at(4));

        let mut state = backward_at(5);
        state.reconcile(Mutation::Remove(5));
        assert_eq!(state, CursorState::at(5));
    }

    #[test]
    fn remove_at_next() {
        let mut state = forward_at(2);
        state.reconcile(Mutation::Remove(2));
        assert_eq!(state.next, 2);
        assert_eq!(state.tracked(), Ok(1));
    }

    #[test]
    fn remove_untracked_cursor() {
        let mut state = CursorState::at(3);
        state.reconcile(Mutation::Remove(0));
        state.reconcile(Mutation::Remove(2));
        assert_eq!(state, CursorState::at(2));
    }
}
