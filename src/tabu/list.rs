//! Bounded FIFO tabu memory.

use std::collections::{HashSet, VecDeque};

use crate::airplane::AirplaneId;

/// Recently seen schedule keys with O(1) membership.
///
/// Keys are evicted oldest-first once the list holds more than `capacity`.
#[derive(Debug, Clone)]
pub struct TabuList {
    queue: VecDeque<Vec<AirplaneId>>,
    set: HashSet<Vec<AirplaneId>>,
    capacity: usize,
}

impl TabuList {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity + 1),
            set: HashSet::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn contains(&self, key: &[AirplaneId]) -> bool {
        self.set.contains(key)
    }

    /// Inserts `key` unless already present.
    pub fn insert(&mut self, key: Vec<AirplaneId>) {
        if !self.set.insert(key.clone()) {
            return;
        }
        self.queue.push_back(key);
        while self.queue.len() > self.capacity {
            if let Some(old) = self.queue.pop_front() {
                self.set.remove(&old);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_eviction() {
        let mut list = TabuList::new(2);
        list.insert(vec![1, 2]);
        list.insert(vec![2, 1]);
        list.insert(vec![3, 1]);

        assert_eq!(list.len(), 2);
        assert!(!list.contains(&[1, 2]));
        assert!(list.contains(&[2, 1]));
        assert!(list.contains(&[3, 1]));
    }

    #[test]
    fn test_duplicate_insert_ignored() {
        let mut list = TabuList::new(3);
        list.insert(vec![1, 2]);
        list.insert(vec![1, 2]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_zero_capacity_holds_nothing() {
        let mut list = TabuList::new(0);
        list.insert(vec![1]);
        assert!(list.is_empty());
        assert!(!list.contains(&[1]));
    }
}
