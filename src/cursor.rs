use std::num::NonZeroUsize;

use crate::error::CursorError;

/// Bidirectional traversal. A cursor always rests between two elements (or
/// before the first/after the last), so `next` and `prev` called in
/// alternation return the same element.
pub trait Cursor: Iterator {
    fn try_next(&mut self) -> Result<Self::Item, CursorError>;
    fn try_prev(&mut self) -> Result<Self::Item, CursorError>;

    fn prev(&mut self) -> Option<Self::Item> {
        self.try_prev().ok()
    }

    fn has_next(&self) -> bool;
    fn has_prev(&self) -> bool;

    /// Index of the element `next` would return.
    fn next_index(&self) -> usize;

    /// Index of the element `prev` would return, `None` at the start.
    fn prev_index(&self) -> Option<usize> {
        self.next_index().checked_sub(1)
    }

    fn peek_next(&self) -> Option<Self::Item>;
    fn peek_prev(&self) -> Option<Self::Item>;

    fn advance_by(&mut self, n: usize) -> Result<(), NonZeroUsize>;
    fn revert_by(&mut self, n: usize) -> Result<(), NonZeroUsize>;

    fn at_start(&self) -> bool {
        !self.has_prev()
    }

    fn at_end(&self) -> bool {
        !self.has_next()
    }
}

/// Edits through a cursor. `remove` and `set` act on the element last
/// returned by a traversal step; `add` inserts at the cursor.
pub trait CursorMut: Cursor {
    type Value;

    fn remove(&mut self) -> Result<Self::Value, CursorError>;
    fn set(&mut self, item: Self::Value) -> Result<Self::Value, CursorError>;
    fn add(&mut self, item: Self::Value);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorPosition {
    Start,
    /// Before the element at this index. `Pos(len)` is the same as `End`.
    Pos(usize),
    End,
}

impl CursorPosition {
    pub(crate) fn resolve(self, len: usize) -> Result<usize, CursorError> {
        match self {
            CursorPosition::Start => Ok(0),
            CursorPosition::End => Ok(len),
            CursorPosition::Pos(pos) => {
                crate::error::check_position(pos, len)?;
                Ok(pos)
            }
        }
    }
}
