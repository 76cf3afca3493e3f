//! Linked-list snapshot carried by pointer-walk steps

use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListNode {
    pub id: u32,
    pub value: i64,
    pub next_id: Option<u32>,
}

/// Nodes in display order plus the two walker positions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkedListState {
    pub nodes: Vec<ListNode>,
    /// Index into `nodes`
    pub slow: Option<usize>,
    /// Index into `nodes`
    pub fast: Option<usize>,
    pub cycle_detected: bool,
    pub cycle_node_ids: BTreeSet<u32>,
}

impl LinkedListState {
    pub fn position(&self, id: u32) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        let len = self.nodes.len();
        for (name, pointer) in [("slow", self.slow), ("fast", self.fast)] {
            if let Some(idx) = pointer {
                if idx >= len {
                    return Err(format!("{name} pointer {idx} outside list of {len}"));
                }
            }
        }
        let known = |id: u32| self.nodes.iter().any(|n| n.id == id);
        for node in &self.nodes {
            if let Some(next) = node.next_id {
                if !known(next) {
                    return Err(format!("node {} points at unknown node {next}", node.id));
                }
            }
        }
        if let Some(id) = self.cycle_node_ids.iter().find(|id| !known(**id)) {
            return Err(format!("cycle names unknown node {id}"));
        }
        Ok(())
    }
}
