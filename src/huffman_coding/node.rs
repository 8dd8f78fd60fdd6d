//! Tree nodes for the huffman coder.
//!
//! A node is either a leaf carrying a symbol, or an internal node that owns exactly two
//! children. The frequency is only meaningful while the tree is being built; the build
//! queue orders on it (see huffman_tree_from_freqs).
//!
//! A tree read from a table can be as deep as its longest code, so every walk here keeps
//! its own stack instead of recursing, dropping included.

use std::mem;

#[derive(Debug)]
pub enum Node {
    Leaf { symbol: u32, freq: u64 },
    Internal {
        freq: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Create a new leaf
    pub fn leaf(symbol: u32, freq: u64) -> Node {
        Node::Leaf { symbol, freq }
    }

    /// Join two nodes. The new node's frequency is the sum of the children's.
    pub fn internal(left: Node, right: Node) -> Node {
        Node::Internal {
            freq: left.freq().saturating_add(right.freq()),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } | Node::Internal { freq, .. } => *freq,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { .. } => count += 1,
                Node::Internal { left, right, .. } => {
                    stack.push(&**right);
                    stack.push(&**left);
                }
            }
        }
        count
    }

    /// Depth of the deepest leaf, which is also the longest code length.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                Node::Leaf { .. } => deepest = deepest.max(depth),
                Node::Internal { left, right, .. } => {
                    stack.push((&**right, depth + 1));
                    stack.push((&**left, depth + 1));
                }
            }
        }
        deepest
    }
}

/// Same shape, same symbols, same frequencies.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            match (a, b) {
                (
                    Node::Leaf { symbol, freq },
                    Node::Leaf {
                        symbol: other_symbol,
                        freq: other_freq,
                    },
                ) => {
                    if symbol != other_symbol || freq != other_freq {
                        return false;
                    }
                }
                (
                    Node::Internal { freq, left, right },
                    Node::Internal {
                        freq: other_freq,
                        left: other_left,
                        right: other_right,
                    },
                ) => {
                    if freq != other_freq {
                        return false;
                    }
                    stack.push((&**right, &**other_right));
                    stack.push((&**left, &**other_left));
                }
                _ => return false,
            }
        }
        true
    }
}
impl Eq for Node {}

impl Drop for Node {
    fn drop(&mut self) {
        // Detach the children so each box is dropped with leaf-only children.
        let mut stack: Vec<Node> = Vec::new();
        if let Node::Internal { left, right, .. } = self {
            stack.push(mem::replace(&mut **left, Node::leaf(0, 0)));
            stack.push(mem::replace(&mut **right, Node::leaf(0, 0)));
        }
        while let Some(mut node) = stack.pop() {
            if let Node::Internal { left, right, .. } = &mut node {
                stack.push(mem::replace(&mut **left, Node::leaf(0, 0)));
                stack.push(mem::replace(&mut **right, Node::leaf(0, 0)));
            }
        }
    }
}
