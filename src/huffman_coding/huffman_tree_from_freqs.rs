//! Greedy construction of a huffman tree from a frequency table.
//!
//! Every symbol with a positive count becomes a leaf on a min-priority queue. The two
//! cheapest nodes are pulled off, joined, and the join goes back on the queue until a
//! single root is left.
//!
//! Ties are broken by the order in which nodes were pushed. Leaves go on in ascending
//! symbol order and every join gets the next sequence number, so identical input always
//! yields the identical tree.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use log::{debug, trace};

use super::node::Node;
use crate::error::{HuffError, Result};

/// Queue entry: a node plus the sequence number used to break frequency ties.
struct Pending {
    seq: usize,
    node: Node,
}

impl Pending {
    fn key(&self) -> (u64, usize) {
        (self.node.freq(), self.seq)
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}
impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Build the root node of a huffman tree from (symbol, frequency) pairs.
/// Pairs with a zero frequency are ignored. Returns EmptyAlphabet if nothing is left.
pub fn tree_from_freqs<I>(freqs: I) -> Result<Node>
where
    I: IntoIterator<Item = (u32, u64)>,
{
    let mut pairs: Vec<(u32, u64)> = freqs.into_iter().filter(|&(_, f)| f > 0).collect();
    // Insertion order is part of the tie-break, so fix it by symbol.
    pairs.sort_unstable_by_key(|&(sym, _)| sym);
    // Repeated symbols count once, with their counts added.
    let mut leaves: Vec<(u32, u64)> = Vec::with_capacity(pairs.len());
    for (sym, freq) in pairs {
        match leaves.last_mut() {
            Some((last, total)) if *last == sym => *total = total.saturating_add(freq),
            _ => leaves.push((sym, freq)),
        }
    }

    if leaves.is_empty() {
        return Err(HuffError::EmptyAlphabet);
    }
    debug!("Building huffman tree from {} symbols.", leaves.len());

    let mut seq = 0;
    let mut queue: BinaryHeap<Reverse<Pending>> = leaves
        .into_iter()
        .map(|(symbol, freq)| {
            seq += 1;
            Reverse(Pending {
                seq,
                node: Node::leaf(symbol, freq),
            })
        })
        .collect();

    // Pare the queue down to one node. A single symbol never joins anything.
    while let Some(Reverse(first)) = queue.pop() {
        let Some(Reverse(second)) = queue.pop() else {
            return Ok(first.node);
        };
        trace!(
            "Joining nodes {} (freq {}) and {} (freq {}).",
            first.seq,
            first.node.freq(),
            second.seq,
            second.node.freq()
        );
        seq += 1;
        queue.push(Reverse(Pending {
            seq,
            node: Node::internal(first.node, second.node),
        }));
    }
    Err(HuffError::EmptyAlphabet)
}

#[cfg(test)]
mod test {
    use super::tree_from_freqs;
    use crate::error::HuffError;
    use crate::huffman_coding::node::Node;

    #[test]
    fn empty_alphabet_test() {
        let result = tree_from_freqs(vec![(1, 0), (2, 0)]);
        assert!(matches!(result, Err(HuffError::EmptyAlphabet)));
        assert!(matches!(
            tree_from_freqs(Vec::new()),
            Err(HuffError::EmptyAlphabet)
        ));
    }

    #[test]
    fn single_symbol_test() {
        let root = tree_from_freqs(vec![(65, 5), (66, 0)]).unwrap();
        assert_eq!(root, Node::leaf(65, 5));
    }

    #[test]
    fn abc_test() {
        // A and B tie at 1 and join first. That join ties with C at 2, and C was queued
        // earlier so it is popped first and becomes the left child.
        let root = tree_from_freqs(vec![(65, 1), (66, 1), (67, 2)]).unwrap();
        let expected = Node::internal(
            Node::leaf(67, 2),
            Node::internal(Node::leaf(65, 1), Node::leaf(66, 1)),
        );
        assert_eq!(root, expected);
        assert_eq!(root.freq(), 4);
    }

    #[test]
    fn repeated_symbol_counts_add_test() {
        let root = tree_from_freqs(vec![(9, 2), (9, 3)]).unwrap();
        assert_eq!(root, Node::leaf(9, 5));
    }

    #[test]
    fn input_order_does_not_matter_test() {
        let a = tree_from_freqs(vec![(3, 7), (1, 7), (2, 7), (0, 7)]).unwrap();
        let b = tree_from_freqs(vec![(0, 7), (1, 7), (2, 7), (3, 7)]).unwrap();
        assert_eq!(a, b);
    }
}
