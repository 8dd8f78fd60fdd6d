use log::{debug, info};
use rustc_hash::FxHashMap;

use super::huffman_tree_from_freqs::tree_from_freqs;
use super::node::Node;
use crate::error::Result;

/// A complete prefix-code tree. Created once (from frequencies or from a saved table)
/// and read-only after that.
#[derive(Debug)]
pub struct HuffmanTree {
    root: Node,
}

/// Two trees are equal when they give every symbol the same code. Frequencies are not
/// compared, a tree restored from a table has none.
impl PartialEq for HuffmanTree {
    fn eq(&self, other: &Self) -> bool {
        self.pairs() == other.pairs()
    }
}
impl Eq for HuffmanTree {}

impl HuffmanTree {
    /// Build a tree from a frequency slice indexed by symbol (e.g. 256 byte counts).
    pub fn from_freqs(freqs: &[u64]) -> Result<Self> {
        Self::from_freq_iter(freqs.iter().enumerate().map(|(sym, &f)| (sym as u32, f)))
    }

    /// Build a tree from a sparse symbol -> frequency map.
    pub fn from_map(freqs: &FxHashMap<u32, u64>) -> Result<Self> {
        Self::from_freq_iter(freqs.iter().map(|(&sym, &f)| (sym, f)))
    }

    fn from_freq_iter<I: IntoIterator<Item = (u32, u64)>>(freqs: I) -> Result<Self> {
        let root = tree_from_freqs(freqs)?;
        info!(
            "Built huffman tree: {} symbols, {} bits deepest code.",
            root.leaf_count(),
            root.depth()
        );
        Ok(HuffmanTree { root })
    }

    /// Wrap an already complete node.
    pub(crate) fn from_root(root: Node) -> Self {
        HuffmanTree { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// True when the whole alphabet is one symbol (and its code is empty).
    pub fn is_single_leaf(&self) -> bool {
        self.root.is_leaf()
    }

    pub fn symbol_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Symbol -> code lookup for every leaf.
    pub fn code_table(&self) -> CodeTable {
        let mut codes = FxHashMap::default();
        for (sym, code) in self.pairs() {
            codes.insert(sym, code);
        }
        debug!("Code table holds {} codes.", codes.len());
        CodeTable { codes }
    }
}

/// Lookup table from symbol to its code string, derived from a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: FxHashMap<u32, String>,
}

impl CodeTable {
    pub fn get(&self, symbol: u32) -> Option<&str> {
        self.codes.get(&symbol).map(|c| c.as_str())
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Sum of frequency * code length over the symbols given. Symbols without a code add nothing.
    pub fn weighted_len(&self, freqs: &[u64]) -> u64 {
        freqs
            .iter()
            .enumerate()
            .filter_map(|(sym, &f)| self.get(sym as u32).map(|c| f * c.len() as u64))
            .sum()
    }

    /// Average bits per symbol for the given frequencies.
    pub fn average_len(&self, freqs: &[u64]) -> f64 {
        let total: u64 = freqs.iter().sum();
        if total == 0 {
            return 0.0;
        }
        self.weighted_len(freqs) as f64 / total as f64
    }
}

#[cfg(test)]
mod test {
    use super::HuffmanTree;
    use rustc_hash::FxHashMap;

    /// Weighted length of an optimal code, computed the long way: the sum of all joins.
    fn optimal_cost(freqs: &[u64]) -> u64 {
        let mut w: Vec<u64> = freqs.iter().copied().filter(|&f| f > 0).collect();
        let mut cost = 0;
        while w.len() > 1 {
            w.sort_unstable_by(|a, b| b.cmp(a));
            let a = w.pop().unwrap();
            let b = w.pop().unwrap();
            cost += a + b;
            w.push(a + b);
        }
        cost
    }

    fn is_prefix_free(codes: &[String]) -> bool {
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j && b.starts_with(a.as_str()) {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn abc_codes_test() {
        let mut freqs = vec![0_u64; 68];
        freqs[65] = 1;
        freqs[66] = 1;
        freqs[67] = 2;
        let tree = HuffmanTree::from_freqs(&freqs).unwrap();
        let table = tree.code_table();
        assert_eq!(table.get(67), Some("0"));
        assert_eq!(table.get(65), Some("10"));
        assert_eq!(table.get(66), Some("11"));
        assert_eq!(table.weighted_len(&freqs), 6);
    }

    #[test]
    fn from_map_matches_slice_test() {
        let mut map = FxHashMap::default();
        map.insert(65, 1);
        map.insert(66, 1);
        map.insert(67, 2);
        let mut freqs = vec![0_u64; 68];
        freqs[65] = 1;
        freqs[66] = 1;
        freqs[67] = 2;
        assert_eq!(
            HuffmanTree::from_map(&map).unwrap(),
            HuffmanTree::from_freqs(&freqs).unwrap()
        );
    }

    #[test]
    fn optimal_and_prefix_free_test() {
        let samples: Vec<Vec<u64>> = vec![
            vec![5, 9, 12, 13, 16, 45],
            vec![1, 1, 1, 1, 1, 1, 1, 1],
            vec![1, 2, 4, 8, 16, 32, 64, 128],
            vec![0, 3, 0, 3, 7, 0, 1, 1, 20],
            "the quick brown fox jumps over the lazy dog"
                .bytes()
                .fold(vec![0_u64; 256], |mut f, b| {
                    f[b as usize] += 1;
                    f
                }),
        ];
        for freqs in samples {
            let tree = HuffmanTree::from_freqs(&freqs).unwrap();
            let table = tree.code_table();
            assert_eq!(table.weighted_len(&freqs), optimal_cost(&freqs));
            let codes: Vec<String> = tree.pairs().into_iter().map(|(_, c)| c).collect();
            assert!(is_prefix_free(&codes));
            assert_eq!(codes.len(), freqs.iter().filter(|&&f| f > 0).count());
        }
    }

    #[test]
    fn single_leaf_test() {
        let mut freqs = vec![0_u64; 66];
        freqs[65] = 5;
        let tree = HuffmanTree::from_freqs(&freqs).unwrap();
        assert!(tree.is_single_leaf());
        assert_eq!(tree.code_table().get(65), Some(""));
        assert_eq!(tree.code_table().average_len(&freqs), 0.0);
    }
}
