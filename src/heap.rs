use crate::errors::HeapError;

/// Ordering discipline for a heap. Chosen once at construction; mixing
/// polarities on a live heap would silently break the heap-order invariant,
/// so there is no way to change it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Polarity {
    /// Largest value at the root.
    Max,
    /// Smallest value at the root.
    Min,
}

impl Polarity {
    /// True if `a` should sit above `b` in a heap of this polarity.
    fn wins(&self, a: i64, b: i64) -> bool {
        match self {
            Polarity::Max => a > b,
            Polarity::Min => a < b,
        }
    }
}

/// An array-backed binary heap of `i64` values.
///
/// The elements form a complete binary tree stored breadth-first: the node at
/// index `i` has children at `2i+1` and `2i+2` and its parent at `(i-1)/2`.
/// The heap-order property (each node beats its children under the heap's
/// polarity) holds after every public operation.
pub struct Heap {
    elements: Vec<i64>,
    polarity: Polarity,
}

impl Heap {
    pub fn new(polarity: Polarity) -> Heap {
        Heap {
            elements: Vec::new(),
            polarity,
        }
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of levels below the root: ⌊log2(size)⌋, and 0 for an empty
    /// heap (log2(0) is undefined, so the degenerate case is pinned to 0).
    pub fn height(&self) -> usize {
        if self.elements.is_empty() {
            0
        } else {
            self.elements.len().ilog2() as usize
        }
    }

    /// The element at `index` in the breadth-first sequence.
    pub fn at(&self, index: usize) -> Result<i64, HeapError> {
        if index < self.elements.len() {
            Ok(self.elements[index])
        } else {
            Err(HeapError::OutOfBounds(index, self.elements.len()))
        }
    }

    /// Snapshot iterator over the breadth-first sequence.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.elements.iter().copied()
    }

    /// Add `value` as a new leaf and sift it up until heap order is restored.
    pub fn insert(&mut self, value: i64) {
        self.elements.push(value);
        self.sift_up(self.elements.len() - 1);
    }

    /// Remove and return the root. The last leaf takes the root's place and
    /// is sifted down. Fails on an empty heap, before any mutation.
    pub fn pop_root(&mut self) -> Result<i64, HeapError> {
        let n = self.elements.len();
        if n == 0 {
            return Err(HeapError::EmptyHeap);
        }
        if n > 1 {
            self.elements.swap(0, n - 1);
        }
        let root = self.elements.pop().ok_or(HeapError::EmptyHeap)?;
        self.sift_down(0);
        Ok(root)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.polarity.wins(self.elements[i], self.elements[parent]) {
                self.elements.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.elements.len();
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut winner = i;
            if left < n && self.polarity.wins(self.elements[left], self.elements[winner]) {
                winner = left;
            }
            if right < n && self.polarity.wins(self.elements[right], self.elements[winner]) {
                winner = right;
            }
            if winner == i {
                break;
            }
            self.elements.swap(i, winner);
            i = winner;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;

    fn heap_ordered(h: &Heap) -> bool {
        let values: Vec<i64> = h.iter().collect();
        for i in 1..values.len() {
            let parent = (i - 1) / 2;
            if h.polarity().wins(values[i], values[parent]) {
                return false;
            }
        }
        true
    }

    #[test]
    fn empty_heap() {
        let mut h = Heap::new(Polarity::Max);
        assert_eq!(h.size(), 0);
        assert!(h.is_empty());
        assert_eq!(h.height(), 0);
        assert_eq!(h.pop_root(), Err(HeapError::EmptyHeap));
    }

    #[test]
    fn at_out_of_bounds() {
        let mut h = Heap::new(Polarity::Max);
        h.insert(7);
        h.insert(3);
        assert_eq!(h.at(0), Ok(7));
        assert_eq!(h.at(1), Ok(3));
        assert_eq!(h.at(2), Err(HeapError::OutOfBounds(2, 2)));
    }

    #[test]
    fn insert_pop_round_trip() {
        let mut h = Heap::new(Polarity::Max);
        h.insert(42);
        assert_eq!(h.pop_root(), Ok(42));
        assert!(h.is_empty());
    }

    #[test]
    fn repeated_reads_are_stable() {
        let mut h = Heap::new(Polarity::Min);
        for x in [9, 2, 5] {
            h.insert(x);
        }
        assert_eq!(h.size(), h.size());
        assert_eq!(h.height(), h.height());
        assert_eq!(h.at(0), h.at(0));
    }

    #[test]
    fn heights() {
        let mut h = Heap::new(Polarity::Max);
        for n in 1..=7usize {
            h.insert(n as i64);
            let expected = match n {
                1 => 0,
                2 | 3 => 1,
                _ => 2,
            };
            assert_eq!(h.height(), expected, "height with {} elements", n);
        }
    }

    #[test]
    fn max_drain_order() {
        let mut h = Heap::new(Polarity::Max);
        for x in [2, 4, 10, 7, 8, 10, 5, 12, 4] {
            h.insert(x);
        }
        let mut drained = Vec::new();
        while let Ok(x) = h.pop_root() {
            drained.push(x);
        }
        assert_eq!(drained, vec![12, 10, 10, 8, 7, 5, 4, 4, 2]);
    }

    #[test]
    fn min_drain_order() {
        let mut h = Heap::new(Polarity::Min);
        for x in [2, 4, 10, 7, 8, 10, 5, 12, 4] {
            h.insert(x);
        }
        let mut drained = Vec::new();
        while let Ok(x) = h.pop_root() {
            drained.push(x);
        }
        assert_eq!(drained, vec![2, 4, 4, 5, 7, 8, 10, 10, 12]);
    }

    #[test]
    fn order_holds_after_every_operation() {
        let s = 23;
        let mut rng = StdRng::seed_from_u64(s);
        for polarity in [Polarity::Max, Polarity::Min] {
            let mut h = Heap::new(polarity);
            for _ in 0..500 {
                let before = h.size();
                if h.is_empty() || rng.random_range(0..3) > 0 {
                    h.insert(rng.random_range(0..=99));
                    assert_eq!(h.size(), before + 1);
                } else {
                    h.pop_root().unwrap();
                    assert_eq!(h.size(), before - 1);
                }
                assert!(heap_ordered(&h));
            }
        }
    }

    #[test]
    fn pop_always_returns_current_extreme() {
        let s = 5;
        let mut rng = StdRng::seed_from_u64(s);
        let mut h = Heap::new(Polarity::Max);
        let mut values: Vec<i64> = (0..100).map(|_| rng.random_range(0..=99)).collect();
        for x in values.iter() {
            h.insert(*x);
        }
        values.sort();
        while let Some(expected) = values.pop() {
            assert_eq!(h.pop_root(), Ok(expected));
        }
        assert!(h.is_empty());
    }
}
