/*!
# Utilities

Helper data structures shared by the algorithms in [`crate::algo`].
Currently this is the [`IndexedMinHeap`] driving both Dijkstra and Prim; you probably do not
need to interact with this module directly.
*/

pub mod indexed_heap;

pub use indexed_heap::{HeapEntry, IndexedMinHeap};
