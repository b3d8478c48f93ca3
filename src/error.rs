use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A traversal step was requested past either end of the list.
    #[error("no element in that direction")]
    NoSuchElement,

    /// `remove` or `set` was called while the cursor tracks no element, i.e.
    /// before any step, after `add`/`remove`, or after the tracked element
    /// was removed by someone else.
    #[error("no element is currently tracked by the cursor")]
    IllegalState,
}

pub(crate) fn check_index(index: usize, len: usize) -> Result<(), CursorError> {
    if index < len {
        Ok(())
    } else {
        Err(CursorError::IndexOutOfRange { index, len })
    }
}

// Insertion points range over [0, len] rather than [0, len).
pub(crate) fn check_position(index: usize, len: usize) -> Result<(), CursorError> {
    if index <= len {
        Ok(())
    } else {
        Err(CursorError::IndexOutOfRange { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert_eq!(check_index(0, 1), Ok(()));
        assert_eq!(
            check_index(1, 1),
            Err(CursorError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(check_position(1, 1), Ok(()));
        assert_eq!(
            check_position(2, 1),
            Err(CursorError::IndexOutOfRange { index: 2, len: 1 })
        );
    }

    #[test]
    fn messages() {
        let err = CursorError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of range for length 3");
        assert_eq!(
            CursorError::NoSuchElement.to_string(),
            "no element in that direction"
        );
    }
}
