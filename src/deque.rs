//! Double-ended queue with constant-time operations at both ends.

use std::collections::vec_deque::{self, VecDeque};

#[derive(Debug, Clone, Default)]
pub struct Deque<T> {
    items: VecDeque<T>,
}

impl<T> Deque<T> {
    pub fn new() -> Deque<T> {
        Deque { items: VecDeque::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn push_front(&mut self, item: T) {
        self.items.push_front(item);
    }

    pub fn push_back(&mut self, item: T) {
        self.items.push_back(item);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// Front to back. Each call starts over.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
