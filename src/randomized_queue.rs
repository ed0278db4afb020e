//! Queue whose removals pick a uniformly random item.

use rand::rngs::StdRng;
use rand::Rng;

use crate::error::{Error, Result};
use crate::random;

#[derive(Debug, Clone)]
pub struct RandomizedQueue<T, R = StdRng> {
    items: Vec<T>,
    rng: R,
}

impl<T> RandomizedQueue<T> {
    pub fn new() -> RandomizedQueue<T> {
        RandomizedQueue::with_rng(random::entropy_rng())
    }
}

impl<T> Default for RandomizedQueue<T> {
    fn default() -> Self {
        RandomizedQueue::new()
    }
}

impl<T, R: Rng> RandomizedQueue<T, R> {
    pub fn with_rng(rng: R) -> RandomizedQueue<T, R> {
        RandomizedQueue { items: Vec::new(), rng }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn enqueue(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns a uniformly random item.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let i = random::uniform(&mut self.rng, 0, self.items.len());
        Some(self.items.swap_remove(i))
    }

    /// Returns, without removing, a uniformly random item.
    pub fn sample(&mut self) -> Option<&T> {
        if self.items.is_empty() {
            return None;
        }
        let i = random::uniform(&mut self.rng, 0, self.items.len());
        self.items.get(i)
    }

    /// Visits every item once, in an order drawn independently for each call.
    pub fn iter(&mut self) -> Iter<'_, T> {
        let order = random::shuffled_indices(self.items.len(), &mut self.rng);
        Iter { items: &self.items, order: order.into_iter() }
    }
}

pub struct Iter<'a, T> {
    items: &'a [T],
    order: std::vec::IntoIter<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let i = self.order.next()?;
        Some(&self.items[i])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// Picks `k` of `items` uniformly at random, in random order.
pub fn subset<T, R: Rng>(items: impl IntoIterator<Item = T>, k: usize, rng: R) -> Result<Vec<T>> {
    let mut queue = RandomizedQueue::with_rng(rng);
    for item in items {
        queue.enqueue(item);
    }
    debug!("choosing {} of {} items", k, queue.len());
    if k > queue.len() {
        return Err(Error::InvalidArgument(
            format!("asked for {} items but only {} were given", k, queue.len())));
    }
    Ok((0..k).filter_map(|_| queue.dequeue()).collect())
}
