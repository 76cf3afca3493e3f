//! Node-link snapshot carried by graph steps

use serde::Serialize;

/// Highlight flags for a graph node or edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct GraphFlags {
    pub is_start: bool,
    pub is_end: bool,
    pub is_current: bool,
    pub is_visited: bool,
    pub in_path: bool,
    pub is_comparing: bool,
    pub part_of_result: bool,
}

/// The flag a renderer should display for a graph element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphRole {
    Current,
    Comparing,
    InPath,
    PartOfResult,
    Visited,
    Start,
    End,
}

impl GraphFlags {
    /// Resolve the flags with the order current > comparing > in-path >
    /// part-of-result > visited > start > end.
    pub fn dominant(&self) -> Option<GraphRole> {
        [
            (self.is_current, GraphRole::Current),
            (self.is_comparing, GraphRole::Comparing),
            (self.in_path, GraphRole::InPath),
            (self.part_of_result, GraphRole::PartOfResult),
            (self.is_visited, GraphRole::Visited),
            (self.is_start, GraphRole::Start),
            (self.is_end, GraphRole::End),
        ]
        .into_iter()
        .find_map(|(set, role)| set.then_some(role))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: String,
    /// Layout hint in a 0..=500 by 0..=250 plane
    pub position: (f64, f64),
    /// Tentative distance, shown by shortest-path walkthroughs
    pub distance: Option<u32>,
    pub flags: GraphFlags,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub weight: Option<u32>,
    pub flags: GraphFlags,
}

impl GraphEdge {
    /// Whether this edge joins `a` and `b`, in either direction unless `directed`
    pub fn joins(&self, a: &str, b: &str, directed: bool) -> bool {
        (self.from == a && self.to == b) || (!directed && self.from == b && self.to == a)
    }
}

/// Nodes and edges of one graph step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphState {
    pub directed: bool,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphState {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut GraphNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn edge_mut(&mut self, a: &str, b: &str) -> Option<&mut GraphEdge> {
        let directed = self.directed;
        self.edges.iter_mut().find(|e| e.joins(a, b, directed))
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        let mut seen = rustc_hash::FxHashSet::default();
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(format!("duplicate graph node id {:?}", node.id));
            }
        }
        for edge in &self.edges {
            for end in [&edge.from, &edge.to] {
                if !seen.contains(end.as_str()) {
                    return Err(format!(
                        "edge {} -> {} names unknown node {:?}",
                        edge.from, edge.to, end
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_precedence() {
        let flags = GraphFlags {
            is_start: true,
            is_visited: true,
            in_path: true,
            ..Default::default()
        };
        assert_eq!(flags.dominant(), Some(GraphRole::InPath));

        let flags = GraphFlags {
            is_current: true,
            is_comparing: true,
            ..Default::default()
        };
        assert_eq!(flags.dominant(), Some(GraphRole::Current));
        assert_eq!(GraphFlags::default().dominant(), None);
    }

    #[test]
    fn test_undirected_edge_matches_both_ways() {
        let edge = GraphEdge {
            from: "A".into(),
            to: "B".into(),
            weight: Some(3),
            flags: GraphFlags::default(),
        };
        assert!(edge.joins("B", "A", false));
        assert!(!edge.joins("B", "A", true));
    }
}
