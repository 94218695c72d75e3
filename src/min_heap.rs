/*
Binary min-heap of (node, distance) pairs.

The same node may be present several times with different distances. There is no decrease-key:
callers push a fresh entry when a distance improves and skip stale entries when they come out.
Ties on equal distances come out in no particular order.
*/

use crate::graph::Cost;

#[derive(Copy, Clone, Debug, PartialEq)]
struct HeapEntry<N> {
    node: N,
    dist: Cost,
}

#[derive(Clone, Debug)]
pub struct MinHeap<N> {
    entries: Vec<HeapEntry<N>>,
}

impl<N> Default for MinHeap<N> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<N> MinHeap<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn peek(&self) -> Option<(&N, Cost)> {
        self.entries.first().map(|e| (&e.node, e.dist))
    }

    pub fn insert(&mut self, node: N, dist: Cost) {
        self.entries.push(HeapEntry { node, dist });
        self.bubble_up(self.entries.len() - 1);
    }

    /// Removes the pair with the smallest distance, `None` when empty.
    pub fn extract_min(&mut self) -> Option<(N, Cost)> {
        if self.entries.is_empty() {
            return None;
        }
        // Move the last entry to the root, then sink it.
        let min = self.entries.swap_remove(0);
        if self.entries.len() > 1 {
            self.sink_down(0);
        }
        Some((min.node, min.dist))
    }

    fn bubble_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.entries[parent].dist <= self.entries[idx].dist {
                break;
            }
            self.entries.swap(parent, idx);
            idx = parent;
        }
    }

    fn sink_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;
            if left < len && self.entries[left].dist < self.entries[smallest].dist {
                smallest = left;
            }
            if right < len && self.entries[right].dist < self.entries[smallest].dist {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.entries.swap(smallest, idx);
            idx = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn it_works() {
        let mut heap = MinHeap::new();
        heap.insert("X", 5.0);
        heap.insert("Y", 2.0);
        heap.insert("Z", 8.0);
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.extract_min(), Some(("Y", 2.0)));
        assert_eq!(heap.extract_min(), Some(("X", 5.0)));
        assert_eq!(heap.extract_min(), Some(("Z", 8.0)));
        assert!(heap.is_empty());
    }

    #[test]
    fn extract_from_empty_is_none() {
        let mut heap: MinHeap<u32> = MinHeap::new();
        assert_eq!(heap.extract_min(), None);
        assert_eq!(heap.peek(), None);
    }

    #[test]
    fn duplicate_nodes_coexist() {
        let mut heap = MinHeap::new();
        heap.insert(4, 8.0);
        heap.insert(4, 2.5);
        heap.insert(0, 10.0);
        assert_eq!(heap.peek(), Some((&4, 2.5)));
        assert_eq!(heap.extract_min(), Some((4, 2.5)));
        assert_eq!(heap.extract_min(), Some((4, 8.0)));
        assert_eq!(heap.extract_min(), Some((0, 10.0)));
    }

    #[test]
    fn handles_infinity() {
        let mut heap = MinHeap::new();
        heap.insert(1, f64::INFINITY);
        heap.insert(2, 0.0);
        assert_eq!(heap.extract_min(), Some((2, 0.0)));
        assert_eq!(heap.extract_min(), Some((1, f64::INFINITY)));
    }

    #[test]
    fn random_insertions_come_out_sorted() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let n = rng.gen_range(0..200);
            let mut heap = MinHeap::new();
            let mut expected = Vec::with_capacity(n);
            for i in 0..n {
                // Small range so ties show up.
                let d = rng.gen_range(0..50) as f64;
                heap.insert(i, d);
                expected.push(d);
            }
            expected.sort_by(|a, b| a.partial_cmp(b).unwrap());

            let mut out = Vec::with_capacity(n);
            while let Some((_, d)) = heap.extract_min() {
                out.push(d);
            }
            assert_eq!(out, expected);
        }
    }

    #[test]
    fn interleaved_inserts_and_extracts() {
        let mut heap = MinHeap::new();
        heap.insert('a', 3.0);
        heap.insert('b', 1.0);
        assert_eq!(heap.extract_min(), Some(('b', 1.0)));
        heap.insert('c', 0.5);
        heap.insert('d', 7.0);
        assert_eq!(heap.extract_min(), Some(('c', 0.5)));
        assert_eq!(heap.extract_min(), Some(('a', 3.0)));
        assert_eq!(heap.extract_min(), Some(('d', 7.0)));
        assert_eq!(heap.extract_min(), None);
    }
}
