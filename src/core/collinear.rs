//! Collinear chaining of anchor blocks
//!
//! Reduces a loosely collinear block to its best strictly monotonic
//! sub-chain, in a procedure similar to DAGchainer:
//! 1. Sort anchors by query rank (stable)
//! 2. Forward dynamic programming over a bounded look-ahead window
//! 3. Pick the best chain end and trace predecessors back to a root
//!
//! Both orientations are tried and the higher scoring chain is kept.

use crate::core::anchor::{Anchor, Orientation};

/// Default look-ahead window of the dynamic program
pub const DEFAULT_WINDOW: usize = 50;

/// Chaining parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainConfig {
    /// Anchor `i` only considers successors `j` with `i < j < i + window`
    /// in query order. Larger windows find better chains on dense blocks at
    /// O(n * window) cost.
    pub window: usize,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
        }
    }
}

impl ChainConfig {
    pub fn with_window(window: usize) -> Self {
        Self { window }
    }
}

/// A strictly collinear chain extracted from one block
#[derive(Debug, Clone, PartialEq)]
pub struct CollinearChain {
    /// Sum of dampened anchor scores along the chain
    pub score: u64,
    /// Orientation the chain was built under
    pub orientation: Orientation,
    /// Chain anchors in increasing query order, original coordinates
    pub anchors: Vec<Anchor>,
}

impl CollinearChain {
    fn empty(orientation: Orientation) -> Self {
        Self {
            score: 0,
            orientation,
            anchors: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// (query, subject) rank pairs, the input expected by the interleaver
    pub fn rank_pairs(&self) -> Vec<(usize, usize)> {
        self.anchors.iter().map(|a| (a.query, a.subject)).collect()
    }
}

/// Windowed dynamic-programming chainer
///
/// # Example
/// ```
/// use fast_synteny::core::{Anchor, Chainer, ChainConfig};
///
/// let block = vec![
///     Anchor::new(0, 5, 16.0),
///     Anchor::new(1, 6, 16.0),
///     Anchor::new(2, 3, 16.0),
///     Anchor::new(3, 7, 16.0),
/// ];
/// let chain = Chainer::new(ChainConfig::default()).best_chain(&block);
/// assert_eq!(chain.score, 12);
/// assert_eq!(chain.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Chainer {
    config: ChainConfig,
}

impl Chainer {
    pub fn new(config: ChainConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Best chain of `block` under a fixed orientation
    ///
    /// The chain ends at the anchor with the maximal accumulated score;
    /// among equal maxima the one earliest in sorted query order wins.
    pub fn chain(&self, block: &[Anchor], orientation: Orientation) -> CollinearChain {
        if block.is_empty() {
            return CollinearChain::empty(orientation);
        }

        let mut order: Vec<usize> = (0..block.len()).collect();
        order.sort_by_key(|&i| block[i].query);
        let sorted: Vec<Anchor> = order.iter().map(|&i| block[i]).collect();

        let n = sorted.len();
        let mut best: Vec<u64> = sorted.iter().map(Anchor::dampened_score).collect();
        let mut predecessor: Vec<Option<usize>> = vec![None; n];

        for i in 0..n {
            let a = sorted[i];
            let stop = i.saturating_add(self.config.window).min(n);
            for j in (i + 1)..stop {
                let b = sorted[j];
                if b.query == a.query || !orientation.is_successor(a.subject, b.subject) {
                    continue;
                }
                // saturate: huge weights clamp at u64::MAX
                let candidate = best[i].saturating_add(b.dampened_score());
                if candidate > best[j] {
                    best[j] = candidate;
                    predecessor[j] = Some(i);
                }
            }
        }

        // max_by_key keeps the last maximum; iterate in reverse to keep the first
        let (end, &score) = best
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|&(_, s)| *s)
            .unwrap_or((0, &0));

        let mut anchors = Vec::new();
        let mut cursor = Some(end);
        while let Some(idx) = cursor {
            anchors.push(sorted[idx]);
            cursor = predecessor[idx];
        }
        anchors.reverse();

        CollinearChain {
            score,
            orientation,
            anchors,
        }
    }

    /// Best chain of `block` over both orientations
    ///
    /// Scores are compared strictly; a tie keeps the ascending chain.
    pub fn best_chain(&self, block: &[Anchor]) -> CollinearChain {
        let ascending = self.chain(block, Orientation::Ascending);
        let descending = self.chain(block, Orientation::Descending);
        if descending.score > ascending.score {
            descending
        } else {
            ascending
        }
    }
}
