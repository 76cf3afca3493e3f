//! Canned demonstration datasets
//!
//! Graph, list, grid and pattern walkthroughs run over one of these values
//! rather than caller input. Each fixture is a plain value handed to its
//! generator, so tests can swap in their own data. Hand-built fixtures go
//! through `new` or `validate`; generators refuse a fixture that fails
//! validation with a single explanatory step.

use crate::errors::{VizError, VizResult};
use crate::step::{GraphEdge, GraphFlags, GraphNode, GraphState, ListNode};
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct NodeSpec {
    pub id: String,
    pub position: (f64, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: Option<u32>,
}

/// A small graph with a designated start and optional end node
#[derive(Debug, Clone, PartialEq)]
pub struct GraphFixture {
    pub directed: bool,
    pub nodes: Vec<NodeSpec>,
    pub edges: Vec<EdgeSpec>,
    pub start: String,
    pub end: Option<String>,
}

fn invalid(reason: String) -> VizError {
    VizError::InvalidFixture(reason)
}

fn node(id: &str, x: f64, y: f64) -> NodeSpec {
    NodeSpec {
        id: id.to_string(),
        position: (x, y),
    }
}

fn edge(from: &str, to: &str, weight: Option<u32>) -> EdgeSpec {
    EdgeSpec {
        from: from.to_string(),
        to: to.to_string(),
        weight,
    }
}

impl GraphFixture {
    pub fn new(
        directed: bool,
        nodes: Vec<NodeSpec>,
        edges: Vec<EdgeSpec>,
        start: impl Into<String>,
        end: Option<String>,
    ) -> VizResult<Self> {
        let fixture = GraphFixture {
            directed,
            nodes,
            edges,
            start: start.into(),
            end,
        };
        fixture.validate()?;
        Ok(fixture)
    }

    /// Node ids are unique, and every edge endpoint, the start and the end
    /// name a node
    pub fn validate(&self) -> VizResult<()> {
        let mut seen = FxHashSet::default();
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(invalid(format!("duplicate node id {:?}", node.id)));
            }
        }
        for edge in &self.edges {
            for end in [&edge.from, &edge.to] {
                if !seen.contains(end.as_str()) {
                    return Err(invalid(format!(
                        "edge {} -> {} names unknown node {:?}",
                        edge.from, edge.to, end
                    )));
                }
            }
        }
        if !seen.contains(self.start.as_str()) {
            return Err(invalid(format!("start node {:?} is not in the graph", self.start)));
        }
        match &self.end {
            Some(end) if !seen.contains(end.as_str()) => {
                Err(invalid(format!("end node {:?} is not in the graph", end)))
            }
            _ => Ok(()),
        }
    }

    /// Six-node weighted graph, A to F, shortest path A C D F of weight 5
    pub fn weighted() -> Self {
        GraphFixture {
            directed: false,
            nodes: vec![
                node("A", 50.0, 100.0),
                node("B", 200.0, 50.0),
                node("C", 200.0, 150.0),
                node("D", 350.0, 100.0),
                node("E", 350.0, 200.0),
                node("F", 500.0, 150.0),
            ],
            edges: vec![
                edge("A", "B", Some(4)),
                edge("A", "C", Some(2)),
                edge("B", "D", Some(5)),
                edge("C", "D", Some(1)),
                edge("C", "E", Some(3)),
                edge("D", "F", Some(2)),
                edge("E", "F", Some(2)),
            ],
            start: "A".to_string(),
            end: Some("F".to_string()),
        }
    }

    /// Binary-ish tree rooted at A used by the traversal walkthroughs
    pub fn tree() -> Self {
        GraphFixture {
            directed: false,
            nodes: vec![
                node("A", 250.0, 25.0),
                node("B", 150.0, 90.0),
                node("C", 350.0, 90.0),
                node("D", 150.0, 155.0),
                node("E", 350.0, 155.0),
                node("F", 350.0, 220.0),
            ],
            edges: vec![
                edge("A", "B", None),
                edge("A", "C", None),
                edge("B", "D", None),
                edge("C", "E", None),
                edge("E", "F", None),
            ],
            start: "A".to_string(),
            end: None,
        }
    }

    /// Five-node undirected graph with cycles
    pub fn cyclic() -> Self {
        GraphFixture {
            directed: false,
            nodes: vec![
                node("A", 100.0, 100.0),
                node("B", 200.0, 50.0),
                node("C", 300.0, 100.0),
                node("D", 250.0, 200.0),
                node("E", 150.0, 200.0),
            ],
            edges: vec![
                edge("A", "B", None),
                edge("A", "E", None),
                edge("B", "C", None),
                edge("C", "D", None),
                edge("D", "E", None),
                edge("B", "E", None),
            ],
            start: "A".to_string(),
            end: None,
        }
    }

    /// Task dependency DAG for topological ordering
    pub fn dag() -> Self {
        GraphFixture {
            directed: true,
            nodes: vec![
                node("A", 100.0, 100.0),
                node("B", 200.0, 50.0),
                node("C", 300.0, 100.0),
                node("D", 250.0, 200.0),
                node("E", 150.0, 200.0),
            ],
            edges: vec![
                edge("A", "B", None),
                edge("A", "C", None),
                edge("B", "D", None),
                edge("C", "D", None),
                edge("C", "E", None),
                edge("D", "E", None),
            ],
            start: "A".to_string(),
            end: None,
        }
    }

    /// Neighbours of `id` in edge order, with edge weights
    pub fn neighbors(&self, id: &str) -> Vec<(&str, Option<u32>)> {
        self.edges
            .iter()
            .filter_map(|e| {
                if e.from == id {
                    Some((e.to.as_str(), e.weight))
                } else if !self.directed && e.to == id {
                    Some((e.from.as_str(), e.weight))
                } else {
                    None
                }
            })
            .collect()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    /// Fresh unflagged snapshot with start and end marked
    pub fn to_state(&self) -> GraphState {
        GraphState {
            directed: self.directed,
            nodes: self
                .nodes
                .iter()
                .map(|n| GraphNode {
                    id: n.id.clone(),
                    position: n.position,
                    distance: None,
                    flags: GraphFlags {
                        is_start: n.id == self.start,
                        is_end: self.end.as_deref() == Some(n.id.as_str()),
                        ..Default::default()
                    },
                })
                .collect(),
            edges: self
                .edges
                .iter()
                .map(|e| GraphEdge {
                    from: e.from.clone(),
                    to: e.to.clone(),
                    weight: e.weight,
                    flags: GraphFlags::default(),
                })
                .collect(),
        }
    }
}

impl Default for GraphFixture {
    fn default() -> Self {
        Self::weighted()
    }
}

/// Singly linked list given in display order; the head is the first node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFixture {
    pub nodes: Vec<ListNode>,
}

impl ListFixture {
    pub fn new(nodes: Vec<ListNode>) -> VizResult<Self> {
        let fixture = ListFixture { nodes };
        fixture.validate()?;
        Ok(fixture)
    }

    /// Ids are unique and every `next_id` names a node
    pub fn validate(&self) -> VizResult<()> {
        let mut seen = FxHashSet::default();
        for node in &self.nodes {
            if !seen.insert(node.id) {
                return Err(invalid(format!("duplicate node id {}", node.id)));
            }
        }
        match self
            .nodes
            .iter()
            .find(|n| n.next_id.is_some_and(|next| !seen.contains(&next)))
        {
            Some(node) => Err(invalid(format!(
                "node {} points at unknown node {}",
                node.id,
                node.next_id.unwrap_or_default()
            ))),
            None => Ok(()),
        }
    }

    /// Nodes `1..=len` in a chain, with the tail linking back to `cycle_to`
    pub fn chain(len: u32, cycle_to: Option<u32>) -> Self {
        let nodes = (1..=len)
            .map(|id| ListNode {
                id,
                value: i64::from(id),
                next_id: if id < len { Some(id + 1) } else { cycle_to },
            })
            .collect();
        ListFixture { nodes }
    }

    pub fn head(&self) -> Option<u32> {
        self.nodes.first().map(|n| n.id)
    }

    pub fn next(&self, id: u32) -> Option<u32> {
        self.nodes.iter().find(|n| n.id == id)?.next_id
    }

    pub fn position(&self, id: u32) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }
}

impl Default for ListFixture {
    /// Seven nodes with node 7 pointing back to node 3
    fn default() -> Self {
        Self::chain(7, Some(3))
    }
}

/// Land (1) and water (0) cells, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridFixture {
    pub cells: Vec<Vec<u8>>,
}

impl GridFixture {
    pub fn new(cells: Vec<Vec<u8>>) -> VizResult<Self> {
        let fixture = GridFixture { cells };
        fixture.validate()?;
        Ok(fixture)
    }

    /// Rows share one width and every cell is 0 or 1
    pub fn validate(&self) -> VizResult<()> {
        let cols = self.cols();
        for (r, row) in self.cells.iter().enumerate() {
            if row.len() != cols {
                return Err(invalid(format!(
                    "row {r} has {} cells, expected {cols}",
                    row.len()
                )));
            }
            if let Some((c, cell)) = row.iter().enumerate().find(|(_, v)| **v > 1) {
                return Err(invalid(format!("cell ({r}, {c}) is {cell}, expected 0 or 1")));
            }
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }
}

impl Default for GridFixture {
    fn default() -> Self {
        GridFixture {
            cells: vec![
                vec![1, 1, 0, 0, 0],
                vec![1, 1, 0, 0, 0],
                vec![0, 0, 1, 0, 0],
                vec![0, 0, 0, 1, 1],
            ],
        }
    }
}

/// Array plus a target, shared by the array-walk patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayFixture {
    pub values: Vec<i64>,
    pub target: i64,
}

impl ArrayFixture {
    fn of(values: &[i64], target: i64) -> Self {
        ArrayFixture {
            values: values.to_vec(),
            target,
        }
    }

    /// Sorted array with a pair summing to 11
    pub fn pair_sum() -> Self {
        Self::of(&[1, 3, 4, 5, 7, 10, 11, 13], 11)
    }

    /// Subarrays summing to 10
    pub fn subarray_sum() -> Self {
        Self::of(&[3, 1, 4, 1, 5, 9, 2, 6], 10)
    }

    /// Array with two repeated values
    pub fn duplicates() -> Self {
        Self::of(&[1, 2, 3, 2, 4, 5, 3, 6], 0)
    }

    /// Every value paired except one
    pub fn single_number() -> Self {
        Self::of(&[4, 1, 2, 1, 2], 0)
    }

    pub fn subsets() -> Self {
        Self::of(&[1, 2, 3], 0)
    }

    pub fn sorted_search() -> Self {
        Self::of(&[1, 3, 5, 7, 9, 11, 13, 15, 17], 11)
    }
}

/// Fixed-size window over numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowFixture {
    pub values: Vec<i64>,
    pub k: usize,
}

impl Default for WindowFixture {
    fn default() -> Self {
        WindowFixture {
            values: vec![1, 3, 2, 6, 1, 4, 2, 8, 9],
            k: 3,
        }
    }
}

/// Longest window of `text` holding at most `k` distinct characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextWindowFixture {
    pub text: String,
    pub k: usize,
}

impl Default for TextWindowFixture {
    fn default() -> Self {
        TextWindowFixture {
            text: "aabacbebebc".to_string(),
            k: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinFixture {
    /// Largest first
    pub coins: Vec<i64>,
    pub amount: i64,
}

impl Default for CoinFixture {
    fn default() -> Self {
        CoinFixture {
            coins: vec![25, 10, 5, 1],
            amount: 63,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionFixture {
    pub size: usize,
    pub unions: Vec<(usize, usize)>,
}

impl Default for UnionFixture {
    fn default() -> Self {
        UnionFixture {
            size: 8,
            unions: vec![(0, 1), (2, 3), (4, 5), (6, 7), (0, 2), (4, 6), (0, 4)],
        }
    }
}

/// Argument of the Fibonacci walkthroughs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FibFixture {
    pub n: usize,
}

impl Default for FibFixture {
    fn default() -> Self {
        FibFixture { n: 6 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_list_has_back_edge() {
        let list = ListFixture::default();
        assert_eq!(list.nodes.len(), 7);
        assert_eq!(list.head(), Some(1));
        assert_eq!(list.next(7), Some(3));
    }

    #[test]
    fn test_undirected_neighbors() {
        let graph = GraphFixture::weighted();
        let n: Vec<_> = graph.neighbors("C").into_iter().map(|(id, _)| id).collect();
        assert_eq!(n, vec!["A", "D", "E"]);
    }

    #[test]
    fn test_directed_neighbors() {
        let graph = GraphFixture::dag();
        assert!(graph.neighbors("E").is_empty());
        assert_eq!(graph.neighbors("C").len(), 2);
    }

    #[test]
    fn test_canned_fixtures_validate() {
        for graph in [
            GraphFixture::weighted(),
            GraphFixture::tree(),
            GraphFixture::cyclic(),
            GraphFixture::dag(),
        ] {
            assert_eq!(graph.validate(), Ok(()));
        }
        assert_eq!(ListFixture::default().validate(), Ok(()));
        assert_eq!(GridFixture::default().validate(), Ok(()));
    }

    #[test]
    fn test_graph_rejects_dangling_edge() {
        let tree = GraphFixture::tree();
        let mut edges = tree.edges.clone();
        edges.push(edge("A", "Z", None));
        let err = GraphFixture::new(false, tree.nodes, edges, "A", None).unwrap_err();
        assert_eq!(
            err,
            VizError::InvalidFixture("edge A -> Z names unknown node \"Z\"".to_string())
        );
    }

    #[test]
    fn test_graph_rejects_unknown_start_and_end() {
        let tree = GraphFixture::tree();
        let err = GraphFixture::new(false, tree.nodes.clone(), Vec::new(), "Q", None).unwrap_err();
        assert!(err.to_string().contains("start node \"Q\""));

        let err = GraphFixture::new(false, tree.nodes, Vec::new(), "A", Some("Q".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("end node \"Q\""));
    }

    #[test]
    fn test_graph_rejects_duplicate_ids() {
        let nodes = vec![node("A", 0.0, 0.0), node("A", 1.0, 1.0)];
        let err = GraphFixture::new(true, nodes, Vec::new(), "A", None).unwrap_err();
        assert!(matches!(err, VizError::InvalidFixture(_)));
    }

    #[test]
    fn test_list_rejects_dangling_next() {
        let nodes = vec![ListNode {
            id: 1,
            value: 1,
            next_id: Some(9),
        }];
        let err = ListFixture::new(nodes).unwrap_err();
        assert_eq!(
            err,
            VizError::InvalidFixture("node 1 points at unknown node 9".to_string())
        );
        assert!(ListFixture::chain(3, Some(4)).validate().is_err());
        assert!(ListFixture::new(ListFixture::chain(3, Some(1)).nodes).is_ok());
    }

    #[test]
    fn test_grid_rejects_ragged_rows() {
        let err = GridFixture::new(vec![vec![1, 0, 1], vec![1]]).unwrap_err();
        assert_eq!(
            err,
            VizError::InvalidFixture("row 1 has 1 cells, expected 3".to_string())
        );
        assert!(GridFixture::new(vec![vec![0, 2]]).is_err());
        assert!(GridFixture::new(Vec::new()).is_ok());
    }

    #[test]
    fn test_grid_shape() {
        let grid = GridFixture::default();
        assert_eq!((grid.rows(), grid.cols()), (4, 5));
    }
}
