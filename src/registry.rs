use std::cell::Cell;
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use crate::state::{CursorState, Mutation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct CursorId(u64);

#[derive(Debug)]
struct Entry {
    id: CursorId,
    state: Weak<Cell<CursorState>>,
}

/// The cursors currently open on one list.
///
/// Only weak handles are kept: a cursor owns its state and the list never
/// keeps a cursor alive. Cursors unregister when dropped; entries whose state
/// has gone away without unregistering are pruned on the next broadcast.
#[derive(Debug, Default)]
pub(crate) struct CursorRegistry {
    next_id: u64,
    entries: Vec<Entry>,
}

impl CursorRegistry {
    pub fn register(&mut self, state: &Rc<Cell<CursorState>>) -> CursorId {
        let id = CursorId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            state: Rc::downgrade(state),
        });
        debug!(cursor = id.0, open = self.entries.len(), "cursor registered");
        id
    }

    pub fn unregister(&mut self, id: CursorId) {
        self.entries.retain(|entry| entry.id != id);
        debug!(cursor = id.0, open = self.entries.len(), "cursor unregistered");
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Apply `mutation` to every registered cursor except `origin`, which has
    /// already accounted for its own edit.
    pub fn broadcast(&mut self, mutation: Mutation, origin: Option<CursorId>) {
        self.entries.retain(|entry| {
            let Some(state) = entry.state.upgrade() else {
                return false;
            };
            if Some(entry.id) != origin {
                let mut current = state.get();
                current.reconcile(mutation);
                trace!(cursor = entry.id.0, ?mutation, next = current.next, "cursor reconciled");
                state.set(current);
            }
            true
        });
    }
}
