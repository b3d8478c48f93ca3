use std::collections::VecDeque;

/// The storage a [`LiveList`](crate::LiveList) keeps its elements in.
///
/// Implementations only need to be an ordered, 0-indexed collection. Bounds
/// are checked by the list before any of these methods are called, so
/// implementations may panic on an out-of-range index the same way `Vec`
/// does.
pub trait Sequence<T> {
    fn size(&self) -> usize;
    fn get(&self, index: usize) -> Option<&T>;
    /// Replace the element at `index`, returning the previous one.
    fn set(&mut self, index: usize, item: T) -> T;
    /// Insert before the element currently at `index`. `index == size()`
    /// appends.
    fn insert_at(&mut self, index: usize, item: T);
    fn remove_at(&mut self, index: usize) -> T;
}

impl<T> Sequence<T> for Vec<T> {
    #[inline]
    fn size(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    fn set(&mut self, index: usize, item: T) -> T {
        std::mem::replace(&mut self[index], item)
    }

    #[inline]
    fn insert_at(&mut self, index: usize, item: T) {
        Vec::insert(self, index, item)
    }

    #[inline]
    fn remove_at(&mut self, index: usize) -> T {
        Vec::remove(self, index)
    }
}

impl<T> Sequence<T> for VecDeque<T> {
    #[inline]
    fn size(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    #[inline]
    fn set(&mut self, index: usize, item: T) -> T {
        std::mem::replace(&mut self[index], item)
    }

    #[inline]
    fn insert_at(&mut self, index: usize, item: T) {
        VecDeque::insert(self, index, item)
    }

    fn remove_at(&mut self, index: usize) -> T {
        VecDeque::remove(self, index).expect("removal index out of bounds")
    }
}
