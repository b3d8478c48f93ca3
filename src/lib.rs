//! Cursors that stay valid while the list underneath them changes.
//!
//! A [`LiveList`] tracks every [`LiveCursor`] opened on it. Inserting or
//! removing an element, through the list or through any cursor, shifts every
//! other cursor so that it keeps pointing between the same two elements and
//! keeps tracking the same last-returned element, or stops tracking it if
//! that element was the one removed.
//!
//! ```
//! use livelist::{CursorPosition, LiveList};
//!
//! let list: LiveList<u32> = (0..6).collect();
//! let mut cursor = list.cursor(CursorPosition::Start).unwrap();
//! assert_eq!(cursor.next(), Some(0));
//! assert_eq!(cursor.next(), Some(1));
//!
//! // Removing elements behind the cursor does not disturb traversal.
//! list.remove(0).unwrap();
//! assert_eq!(cursor.next(), Some(2));
//!
//! cursor.remove().unwrap();
//! assert_eq!(list.to_vec(), vec![1, 3, 4, 5]);
//! ```

pub use cursor::{Cursor, CursorMut, CursorPosition};
pub use error::CursorError;
pub use live_cursor::LiveCursor;
pub use live_list::LiveList;
pub use sequence::Sequence;
pub use state::Direction;

mod cursor;
mod error;
mod live_cursor;
mod live_list;
mod registry;
mod sequence;
mod state;
