/*!
# Node Representation

Vertices are addressed by their position in the vertex store. We choose `Node = u32` as the
dense `O(n^2)` edge matrix makes graphs with more than `2^32` vertices impractical anyway.
*/

use std::num::NonZero;
use stream_bitset::bitset::BitSetImpl;

/// Index of a vertex in its graph: any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` vertices in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// As `Option<Node>` uses additional bytes for padding, predecessor arenas of type
/// `Vec<Option<Node>>` are twice as large as needed. This instead uses the
/// `NonZero`-Wrapper so that `Option<OptionalNodeImpl<N>>` fits into a single `Node`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// `INVALID_NODE` is never a valid vertex index and thus safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_node_round_trip() {
        assert_eq!(std::mem::size_of::<Option<OptionalNode>>(), std::mem::size_of::<Node>());

        for u in [0, 1, 17, INVALID_NODE - 1] {
            assert_eq!(OptionalNode::new(u).map(|x| x.get()), Some(u));
        }
        assert!(OptionalNode::new(INVALID_NODE).is_none());
    }
}
