/*!
# Indexed Min-Heap

An array-based binary min-heap over `(node, key)` pairs supporting `build`, `extract_min` and
`decrease_key`. The heap is a complete binary tree laid out in a dense array where the children
of slot `i` are `2i + 1` and `2i + 2`.

In contrast to [`std::collections::BinaryHeap`], entries can be addressed by their current
*position* in the array: a driver that scans the slots (as Dijkstra and Prim do during
relaxation) can lower the key of the entry it is looking at in `O(log n)`.

# Tie-Breaking

Whenever two children of a slot carry equal keys, the **right** child is preferred as swap
target. This rule decides which of several equal-weight paths or trees is reported and must not
be changed.

`heapify` and `extract_min` do not stop sifting at the first slot that already satisfies the
heap order. Instead they move a *hole* from the starting slot down to a leaf, always following
the smaller child (right on ties), and then let the displaced entry climb back up while its
parent is strictly larger. On equal keys this yields a different slot layout than a classic
early-exit sift-down, and the layout determines both the relaxation scan order and which of
several equal keys is extracted first.
*/

use crate::prelude::*;

/// A single heap entry: a node together with its current key
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HeapEntry<W> {
    pub node: Node,
    pub key: W,
}

/// Binary min-heap over [`HeapEntry`]s with position-based `decrease_key`.
///
/// ```
/// use wgraphs::{prelude::*, utils::IndexedMinHeap};
///
/// let mut heap = IndexedMinHeap::build(4, 2, WeightBounds::<u32>::default());
/// assert_eq!(heap.extract_min().map(|e| e.node), Some(2));
///
/// let pos = (0..heap.len()).find(|&p| heap.entry(p).node == 3).unwrap();
/// heap.decrease_key(pos, 7);
/// assert_eq!(heap.extract_min().map(|e| (e.node, e.key)), Some((3, 7)));
/// ```
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<W> {
    slots: Vec<HeapEntry<W>>,
}

impl<W: Weight> IndexedMinHeap<W> {
    /// Builds a heap over the nodes `0..n` where every key is `bounds.max_value()`
    /// except for `source` which gets `bounds.min_value()`.
    ///
    /// # Panics
    /// Panics if `source >= n`.
    pub fn build(n: NumNodes, source: Node, bounds: WeightBounds<W>) -> Self {
        assert!(source < n);

        let mut slots: Vec<HeapEntry<W>> = (0..n)
            .map(|node| HeapEntry {
                node,
                key: bounds.max_value(),
            })
            .collect();
        slots[source as usize].key = bounds.min_value();

        Self::heapify(slots)
    }

    /// Restores the heap property on an arbitrary array of entries in `O(n)`
    pub fn heapify(slots: Vec<HeapEntry<W>>) -> Self {
        let mut heap = Self { slots };
        if heap.slots.len() >= 2 {
            for pos in (0..=(heap.slots.len() - 2) / 2).rev() {
                let entry = heap.slots[pos];
                heap.sift_hole(pos, entry);
            }
        }
        heap
    }

    /// Returns the number of entries still in the heap
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns *true* if the heap has no entries left
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the entry currently stored at `position`.
    /// ** Panics if `position >= len` **
    #[inline]
    pub fn entry(&self, position: usize) -> HeapEntry<W> {
        self.slots[position]
    }

    /// Returns the entry with the smallest key without removing it
    pub fn peek(&self) -> Option<HeapEntry<W>> {
        self.slots.first().copied()
    }

    /// Removes and returns the entry with the smallest key, or `None` if the heap is empty
    pub fn extract_min(&mut self) -> Option<HeapEntry<W>> {
        let last = self.slots.pop()?;
        if self.slots.is_empty() {
            return Some(last);
        }

        let min = self.slots[0];
        self.sift_hole(0, last);
        Some(min)
    }

    /// Lowers the key of the entry at `position` to `new_key` and restores heap order by
    /// moving it towards the root.
    ///
    /// At every step the smaller child of the parent is compared against the parent; with
    /// equal children the right one is chosen. Returns the final position of the entry.
    ///
    /// ** Requires `new_key` to be strictly smaller than the current key (checked in debug) **
    /// ** Panics if `position >= len` **
    pub fn decrease_key(&mut self, position: usize, new_key: W) -> usize {
        debug_assert!(new_key < self.slots[position].key);
        self.slots[position].key = new_key;

        let mut current = position;
        while current != 0 {
            let parent = (current - 1) / 2;
            let child = self.smaller_child_of(parent);

            if self.slots[child].key < self.slots[parent].key {
                self.slots.swap(parent, child);
                current = parent;
            } else {
                break;
            }
        }
        current
    }

    /// Returns the child of `parent` with the smaller key, preferring the right child on ties.
    /// ** Requires `parent` to have at least one child **
    #[inline]
    fn smaller_child_of(&self, parent: usize) -> usize {
        let left = 2 * parent + 1;
        let right = left + 1;

        if right >= self.slots.len() || self.slots[left].key < self.slots[right].key {
            left
        } else {
            right
        }
    }

    /// Treats slot `hole` as empty, moves the hole down to a leaf along the smaller children
    /// (right on ties) and then places `entry` on the path from that leaf back up to `hole`,
    /// below the first ancestor whose key is not larger.
    fn sift_hole(&mut self, mut hole: usize, entry: HeapEntry<W>) {
        let len = self.slots.len();
        let top = hole;

        // both children exist
        while 2 * hole + 2 < len {
            let right = 2 * hole + 2;
            let child = if self.slots[right].key > self.slots[right - 1].key {
                right - 1
            } else {
                right
            };
            self.slots[hole] = self.slots[child];
            hole = child;
        }

        // only a left child exists
        if 2 * hole + 1 < len {
            self.slots[hole] = self.slots[2 * hole + 1];
            hole = 2 * hole + 1;
        }

        while hole > top {
            let parent = (hole - 1) / 2;
            if !(self.slots[parent].key > entry.key) {
                break;
            }
            self.slots[hole] = self.slots[parent];
            hole = parent;
        }
        self.slots[hole] = entry;
    }

    #[cfg(test)]
    fn is_heap(&self) -> bool {
        (1..self.slots.len()).all(|i| !(self.slots[i].key < self.slots[(i - 1) / 2].key))
    }
}
