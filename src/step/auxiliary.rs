//! Per-family side state shown next to the primary collection
//!
//! Each algorithm family records its extra state in one closed variant so a
//! renderer can match on it instead of probing a free-form map.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Auxiliary {
    /// Indices already in their final position; only ever grows
    Sorting { sorted: BTreeSet<usize> },
    /// Inclusive search bounds, `None` once the range is empty
    Search {
        target: i64,
        low: Option<usize>,
        high: Option<usize>,
    },
    /// Fixed-size window `start..=end`
    SlidingWindow {
        start: usize,
        end: usize,
        window_sum: i64,
        max_sum: i64,
    },
    TwoPointer {
        left: usize,
        right: usize,
        sum: Option<i64>,
        target: i64,
    },
    /// `prefix_sums` maps each running sum seen so far to its frequency
    PrefixSum {
        current_sum: i64,
        target_sum: i64,
        prefix_sums: BTreeMap<i64, usize>,
        count: usize,
    },
    Frequency {
        freq_map: BTreeMap<i64, usize>,
        duplicates: Vec<i64>,
    },
    /// Window `left..=right` holding at most `k` distinct symbols
    VariableWindow {
        left: usize,
        right: usize,
        k: usize,
        counts: BTreeMap<String, usize>,
        best: Option<(usize, usize)>,
    },
    Subsets {
        path: Vec<i64>,
        subsets: Vec<Vec<i64>>,
    },
    /// Memo table keyed by argument plus the live call stack
    Memo {
        memo: BTreeMap<usize, u64>,
        call_stack: Vec<usize>,
    },
    Greedy {
        amount: i64,
        remaining: i64,
        used: Vec<i64>,
    },
    /// Pending frontier (queue or stack) and the visit order so far
    Traversal {
        frontier: Vec<String>,
        order: Vec<String>,
    },
    Dijkstra {
        distances: BTreeMap<String, Option<u32>>,
        finalized: Vec<String>,
        path: Vec<String>,
        total: Option<u32>,
    },
    TopoSort {
        in_degree: BTreeMap<String, usize>,
        queue: Vec<String>,
        order: Vec<String>,
    },
    UnionFind {
        parent: Vec<usize>,
        rank: Vec<usize>,
        components: usize,
    },
    Bits {
        acc: i64,
        operand: Option<i64>,
    },
    /// Row-major grid shape of the primary collection
    Islands {
        rows: usize,
        cols: usize,
        islands: usize,
    },
}

impl Auxiliary {
    /// Check every index this variant holds against a collection of `len` elements
    pub(crate) fn validate(&self, len: usize) -> Result<(), String> {
        let check = |what: &str, idx: usize| {
            if idx < len {
                Ok(())
            } else {
                Err(format!("{what} index {idx} outside collection of {len}"))
            }
        };

        match self {
            Auxiliary::Sorting { sorted } => {
                sorted.iter().try_for_each(|&i| check("sorted", i))
            }
            Auxiliary::Search { low, high, .. } => {
                low.iter().try_for_each(|&i| check("search low", i))?;
                high.iter().try_for_each(|&i| check("search high", i))
            }
            Auxiliary::SlidingWindow { start, end, .. } => {
                check("window start", *start)?;
                check("window end", *end)?;
                if start > end {
                    return Err(format!("window start {start} after end {end}"));
                }
                Ok(())
            }
            Auxiliary::TwoPointer { left, right, .. } => {
                check("left pointer", *left)?;
                check("right pointer", *right)
            }
            Auxiliary::VariableWindow {
                left, right, best, ..
            } => {
                check("window left", *left)?;
                check("window right", *right)?;
                if let Some((from, to)) = best {
                    check("best window start", *from)?;
                    check("best window end", *to)?;
                }
                Ok(())
            }
            Auxiliary::UnionFind { parent, rank, .. } => {
                if parent.len() != len || rank.len() != len {
                    return Err(format!(
                        "union-find tables sized {}/{} for {len} elements",
                        parent.len(),
                        rank.len()
                    ));
                }
                parent.iter().try_for_each(|&p| check("parent", p))
            }
            Auxiliary::Islands { rows, cols, .. } => {
                if rows * cols != len {
                    return Err(format!("grid {rows}x{cols} does not cover {len} cells"));
                }
                Ok(())
            }
            Auxiliary::Memo { memo, .. } => memo.keys().try_for_each(|&n| check("memo", n)),
            Auxiliary::PrefixSum { .. }
            | Auxiliary::Frequency { .. }
            | Auxiliary::Subsets { .. }
            | Auxiliary::Greedy { .. }
            | Auxiliary::Traversal { .. }
            | Auxiliary::Dijkstra { .. }
            | Auxiliary::TopoSort { .. }
            | Auxiliary::Bits { .. } => Ok(()),
        }
    }

    /// Sorted indices, for the bar renderer's "settled" colouring
    pub fn sorted_indices(&self) -> Option<&BTreeSet<usize>> {
        match self {
            Auxiliary::Sorting { sorted } => Some(sorted),
            _ => None,
        }
    }
}
