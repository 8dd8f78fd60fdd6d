//! Saving and restoring a huffman tree as a plain text code table.
//!
//! The table is one record per leaf, in pre-order (leftmost leaf first):
//!
//! ```text
//! <symbol as base 10>
//! <code as 0/1 characters, empty for a single-symbol alphabet>
//! ```
//!
//! There is no header or record count. Restoring walks each code from the root, making
//! branch nodes as needed, and drops the symbol's leaf where the code ends.

use std::io::{BufRead, Write};
use std::mem;

use log::{debug, trace};

use super::huffman::HuffmanTree;
use super::node::Node;
use crate::error::{HuffError, Result};

impl HuffmanTree {
    /// Every (symbol, code) pair in pre-order. 0 is a left branch, 1 a right branch.
    pub fn pairs(&self) -> Vec<(u32, String)> {
        let mut out = Vec::with_capacity(self.symbol_count());
        collect_pairs(self.root(), &mut out);
        out
    }

    /// Write the code table to any output sink.
    pub fn save<W: Write>(&self, out: &mut W) -> Result<()> {
        for (symbol, code) in self.pairs() {
            writeln!(out, "{}", symbol)?;
            writeln!(out, "{}", code)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Rebuild a tree from (symbol, code) pairs, in any order.
    pub fn from_code_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, S)>,
        S: AsRef<str>,
    {
        let mut builder = TableBuilder::new();
        for (idx, (symbol, code)) in pairs.into_iter().enumerate() {
            // Report the line the record would start on in a saved table.
            builder.insert(symbol, code.as_ref(), idx * 2 + 1)?;
        }
        builder.finish()
    }

    /// Read a saved code table, two lines per record, until the source runs out.
    pub fn load<R: BufRead>(source: R) -> Result<Self> {
        let mut builder = TableBuilder::new();
        let mut lines = source.lines().enumerate();
        while let Some((idx, line)) = lines.next() {
            let line_no = idx + 1;
            let line = line?;
            let symbol = line.trim().parse::<u32>().map_err(|_| {
                HuffError::malformed(line_no, format!("'{}' is not a symbol value", line.trim()))
            })?;
            let code = match lines.next() {
                Some((_, code)) => code?,
                None => {
                    return Err(HuffError::malformed(
                        line_no,
                        format!("symbol {} has no code line", symbol),
                    ))
                }
            };
            builder.insert(symbol, code.trim_end(), line_no)?;
        }
        builder.finish()
    }
}

/// Pre-order walk. Each stack entry remembers how long the path was at its parent.
fn collect_pairs(root: &Node, out: &mut Vec<(u32, String)>) {
    let mut path = String::new();
    let mut stack = vec![(root, 0, None)];
    while let Some((node, parent_len, bit)) = stack.pop() {
        path.truncate(parent_len);
        if let Some(bit) = bit {
            path.push(bit);
        }
        match node {
            Node::Leaf { symbol, .. } => out.push((*symbol, path.clone())),
            Node::Internal { left, right, .. } => {
                let here = path.len();
                stack.push((&**right, here, Some('1')));
                stack.push((&**left, here, Some('0')));
            }
        }
    }
}

/// Partially built tree. Unlike `Node`, a branch may still be missing a child here.
#[derive(Debug, Default)]
enum Slot {
    #[default]
    Vacant,
    Leaf(u32),
    Branch(Box<Slot>, Box<Slot>),
}

impl Slot {
    /// Step into a child, turning a vacant slot into a branch first. None if this is a leaf.
    fn child(&mut self, right: bool) -> Option<&mut Slot> {
        if let Slot::Vacant = self {
            *self = Slot::Branch(Box::default(), Box::default());
        }
        match self {
            Slot::Branch(_, right_child) if right => Some(&mut **right_child),
            Slot::Branch(left_child, _) => Some(&mut **left_child),
            _ => None,
        }
    }
}

impl Drop for Slot {
    fn drop(&mut self) {
        // Unlink the subtree into a list so no box drops a deep child chain.
        let mut stack = Vec::new();
        if let Slot::Branch(left, right) = self {
            stack.push(mem::take(&mut **left));
            stack.push(mem::take(&mut **right));
        }
        while let Some(mut slot) = stack.pop() {
            if let Slot::Branch(left, right) = &mut slot {
                stack.push(mem::take(&mut **left));
                stack.push(mem::take(&mut **right));
            }
        }
    }
}

/// Grows a tree one code path at a time.
struct TableBuilder {
    root: Slot,
    records: usize,
    last_line: usize,
}

impl TableBuilder {
    fn new() -> Self {
        TableBuilder {
            root: Slot::Vacant,
            records: 0,
            last_line: 0,
        }
    }

    fn insert(&mut self, symbol: u32, code: &str, line: usize) -> Result<()> {
        trace!("Inserting symbol {} with code '{}'.", symbol, code);
        let mut cur = &mut self.root;
        for (depth, bit) in code.chars().enumerate() {
            let right = match bit {
                '0' => false,
                '1' => true,
                other => {
                    return Err(HuffError::malformed(
                        line,
                        format!("code '{}' holds '{}', only 0 and 1 are allowed", code, other),
                    ))
                }
            };
            cur = match cur.child(right) {
                Some(next) => next,
                None => {
                    return Err(HuffError::malformed(
                        line,
                        format!(
                            "code '{}' for symbol {} runs through the leaf at '{}'",
                            code,
                            symbol,
                            &code[..depth]
                        ),
                    ))
                }
            };
        }
        match cur {
            Slot::Vacant => *cur = Slot::Leaf(symbol),
            Slot::Leaf(other) => {
                return Err(HuffError::malformed(
                    line,
                    format!("code '{}' is already used by symbol {}", code, other),
                ))
            }
            Slot::Branch(..) => {
                return Err(HuffError::malformed(
                    line,
                    format!(
                        "code '{}' for symbol {} is a prefix of an earlier code",
                        code, symbol
                    ),
                ))
            }
        }
        self.records += 1;
        self.last_line = line;
        Ok(())
    }

    /// Turn the partial tree into a complete one. Every branch must have both children.
    fn finish(mut self) -> Result<HuffmanTree> {
        if self.records == 0 {
            return Err(HuffError::EmptyAlphabet);
        }
        let root = complete(mem::take(&mut self.root), self.last_line)?;
        debug!("Restored code table with {} symbols.", self.records);
        Ok(HuffmanTree::from_root(root))
    }
}

/// Work list for `complete`: visit a slot, or join the last two finished nodes.
enum Step {
    Visit(Slot, usize, Option<char>),
    Join,
}

fn complete(root: Slot, line: usize) -> Result<Node> {
    let mut path = String::new();
    let mut steps = vec![Step::Visit(root, 0, None)];
    let mut built: Vec<Node> = Vec::new();
    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(mut slot, parent_len, bit) => {
                path.truncate(parent_len);
                if let Some(bit) = bit {
                    path.push(bit);
                }
                match &mut slot {
                    Slot::Leaf(symbol) => built.push(Node::leaf(*symbol, 0)),
                    Slot::Branch(left, right) => {
                        let here = path.len();
                        steps.push(Step::Join);
                        steps.push(Step::Visit(mem::take(&mut **right), here, Some('1')));
                        steps.push(Step::Visit(mem::take(&mut **left), here, Some('0')));
                    }
                    Slot::Vacant => {
                        return Err(HuffError::malformed(
                            line,
                            format!("no symbol has a code starting with '{}'", path),
                        ))
                    }
                }
            }
            Step::Join => {
                if let (Some(right), Some(left)) = (built.pop(), built.pop()) {
                    built.push(Node::internal(left, right));
                }
            }
        }
    }
    built.pop().ok_or(HuffError::EmptyAlphabet)
}
