//! Graph walkthroughs over a [`GraphFixture`]: Dijkstra, BFS, DFS and
//! Kahn's topological sort.
//!
//! Each step is drawn from a fresh [`GraphState`] built by [`Frame`], so
//! flags set for one step never leak into another.

use super::{rejected, Trace};
use crate::errors::VizError;
use crate::fixtures::GraphFixture;
use crate::step::{Auxiliary, GraphState, StepBuilder, StepSequence};
use rustc_hash::FxHashSet;
use std::collections::{BTreeMap, VecDeque};

/// Flag overlay for one snapshot
#[derive(Default)]
struct Frame<'a> {
    current: Option<&'a str>,
    comparing: Option<&'a str>,
    visited: Vec<&'a str>,
    /// Tree or relaxation edges discovered so far
    result_edges: Vec<(&'a str, &'a str)>,
    active_edge: Option<(&'a str, &'a str)>,
    path: Vec<&'a str>,
    distances: Option<&'a [Option<u32>]>,
}

impl<'a> Frame<'a> {
    fn render(&self, fixture: &GraphFixture) -> GraphState {
        let mut state = fixture.to_state();
        let directed = state.directed;
        for (idx, node) in state.nodes.iter_mut().enumerate() {
            let id = node.id.as_str();
            node.flags.is_current = self.current == Some(id);
            node.flags.is_comparing = self.comparing == Some(id);
            node.flags.is_visited = self.visited.contains(&id);
            node.flags.in_path = self.path.contains(&id);
            node.distance = self.distances.and_then(|d| d.get(idx).copied().flatten());
        }
        for edge in state.edges.iter_mut() {
            let (comparing, result, path) = {
                let e = &*edge;
                let joins = |(a, b): (&str, &str)| e.joins(a, b, directed);
                (
                    self.active_edge.is_some_and(joins),
                    self.result_edges.iter().copied().any(joins),
                    self.path.windows(2).any(|w| joins((w[0], w[1]))),
                )
            };
            edge.flags.is_comparing = comparing;
            edge.flags.part_of_result = result;
            edge.flags.in_path = path;
        }
        state
    }
}

fn graph_step(fixture: &GraphFixture, frame: &Frame<'_>, description: String) -> StepBuilder {
    StepBuilder::new(description).graph(frame.render(fixture))
}

fn ids<'a>(fixture: &'a GraphFixture, indices: &[usize]) -> Vec<&'a str> {
    indices.iter().map(|&i| fixture.nodes[i].id.as_str()).collect()
}

/// Predecessor links as `(parent, child)` edges
fn tree_edges<'f>(fixture: &'f GraphFixture, prev: &[Option<usize>]) -> Vec<(&'f str, &'f str)> {
    prev.iter()
        .enumerate()
        .filter_map(|(v, p)| p.map(|u| (fixture.nodes[u].id.as_str(), fixture.nodes[v].id.as_str())))
        .collect()
}

fn owned(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

mod dijkstra_line {
    pub const INIT: usize = 3;
    pub const SELECT: usize = 9;
    pub const RELAX: usize = 15;
    pub const UPDATE: usize = 16;
}

/// Shortest paths from the fixture's start node.
///
/// Each round finalizes the closest unfinished node, ties going to the node
/// listed first. With an end node the walk stops once that node is final.
pub fn dijkstra(fixture: &GraphFixture) -> StepSequence {
    use dijkstra_line as line;

    let start = match fixture.validate().map(|()| fixture.index_of(&fixture.start)) {
        Ok(Some(start)) => start,
        Ok(None) => {
            let reason = format!("start node {:?} is not in the graph", fixture.start);
            return rejected(&VizError::InvalidFixture(reason));
        }
        Err(e) => return rejected(&e),
    };

    let mut trace = Trace::new();
    let n = fixture.nodes.len();
    let end = fixture.end.as_deref().and_then(|id| fixture.index_of(id));

    let mut dist: Vec<Option<u32>> = vec![None; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut done = vec![false; n];
    let mut finalized: Vec<usize> = Vec::new();
    dist[start] = Some(0);

    let aux = |dist: &[Option<u32>], finalized: &[usize], path: &[&str], total| {
        Auxiliary::Dijkstra {
            distances: fixture
                .nodes
                .iter()
                .zip(dist)
                .map(|(node, d)| (node.id.clone(), *d))
                .collect(),
            finalized: owned(&ids(fixture, finalized)),
            path: owned(path),
            total,
        }
    };

    let frame = Frame {
        distances: Some(&dist),
        ..Default::default()
    };
    trace.push(
        graph_step(
            fixture,
            &frame,
            format!(
                "Set distance of {} to 0 and every other node to infinity",
                fixture.start
            ),
        )
        .auxiliary(aux(&dist, &finalized, &[], None))
        .line(line::INIT),
    );

    let mut reached_end = None;
    while let Some(u) = (0..n)
        .filter(|&v| !done[v] && dist[v].is_some())
        .min_by_key(|&v| dist[v])
    {
        done[u] = true;
        finalized.push(u);
        let du = dist[u].unwrap_or(0);
        let uid = fixture.nodes[u].id.as_str();
        let frame = Frame {
            current: Some(uid),
            visited: ids(fixture, &finalized),
            result_edges: tree_edges(fixture, &prev),
            distances: Some(&dist),
            ..Default::default()
        };
        trace.push(
            graph_step(
                fixture,
                &frame,
                format!("Visit {uid}: the closest unfinished node, at distance {du}"),
            )
            .auxiliary(aux(&dist, &finalized, &[], None))
            .line(line::SELECT),
        );

        if Some(u) == end {
            reached_end = Some(u);
            break;
        }

        for (vid, weight) in fixture.neighbors(uid) {
            let Some(v) = fixture.index_of(vid) else {
                continue;
            };
            if done[v] {
                continue;
            }
            let alt = du + weight.unwrap_or(1);
            let improves = dist[v].map_or(true, |d| alt < d);
            let old = dist[v].map_or("infinity".to_string(), |d| d.to_string());
            let (description, code) = if improves {
                dist[v] = Some(alt);
                prev[v] = Some(u);
                (
                    format!("Edge {uid}-{vid}: {du} + {} = {alt} < {old}, update {vid} to {alt}", weight.unwrap_or(1)),
                    line::UPDATE,
                )
            } else {
                (
                    format!("Edge {uid}-{vid}: {du} + {} = {alt} >= {old}, keep {old}", weight.unwrap_or(1)),
                    line::RELAX,
                )
            };
            let frame = Frame {
                current: Some(uid),
                comparing: Some(vid),
                visited: ids(fixture, &finalized),
                result_edges: tree_edges(fixture, &prev),
                active_edge: Some((uid, vid)),
                distances: Some(&dist),
                ..Default::default()
            };
            trace.push(
                graph_step(fixture, &frame, description)
                    .auxiliary(aux(&dist, &finalized, &[], None))
                    .line(code),
            );
        }
    }

    let description;
    let mut path_ids: Vec<&str> = Vec::new();
    let mut total = None;
    match (end, reached_end) {
        (Some(_), Some(target)) => {
            let mut cursor = Some(target);
            while let Some(v) = cursor {
                path_ids.push(fixture.nodes[v].id.as_str());
                cursor = prev[v];
            }
            path_ids.reverse();
            total = dist[target];
            description = format!(
                "Shortest path {} with total weight {}",
                path_ids.join(" → "),
                total.unwrap_or(0)
            );
        }
        (Some(target), None) => {
            description = format!(
                "{} is unreachable from {}",
                fixture.nodes[target].id, fixture.start
            );
        }
        (None, _) => {
            let listed: Vec<String> = fixture
                .nodes
                .iter()
                .zip(&dist)
                .map(|(node, d)| match d {
                    Some(d) => format!("{}={d}", node.id),
                    None => format!("{}=unreachable", node.id),
                })
                .collect();
            description = format!("Final distances: {}", listed.join(", "));
        }
    }

    let frame = Frame {
        visited: ids(fixture, &finalized),
        result_edges: tree_edges(fixture, &prev),
        path: path_ids.clone(),
        distances: Some(&dist),
        ..Default::default()
    };
    trace.push(
        graph_step(fixture, &frame, description).auxiliary(aux(&dist, &finalized, &path_ids, total)),
    );
    trace.finish()
}

mod bfs_line {
    pub const INIT: usize = 4;
    pub const DEQUEUE: usize = 6;
    pub const SKIP: usize = 8;
    pub const ENQUEUE: usize = 10;
}

/// Breadth-first traversal from the fixture's start node
pub fn bfs(fixture: &GraphFixture) -> StepSequence {
    use bfs_line as line;

    if let Err(e) = fixture.validate() {
        return rejected(&e);
    }

    let mut trace = Trace::new();
    let start = fixture.start.as_str();
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut queue: VecDeque<&str> = VecDeque::new();
    let mut order: Vec<&str> = Vec::new();
    let mut tree: Vec<(&str, &str)> = Vec::new();

    if fixture.index_of(start).is_some() {
        seen.insert(start);
        queue.push_back(start);
    }

    let aux = |queue: &VecDeque<&str>, order: &[&str]| Auxiliary::Traversal {
        frontier: queue.iter().map(|s| s.to_string()).collect(),
        order: owned(order),
    };

    trace.push(
        graph_step(
            fixture,
            &Frame::default(),
            format!("Start BFS at {start}: mark it seen and enqueue it"),
        )
        .auxiliary(aux(&queue, &order))
        .line(line::INIT),
    );

    while let Some(u) = queue.pop_front() {
        order.push(u);
        let frame = Frame {
            current: Some(u),
            visited: order.clone(),
            result_edges: tree.clone(),
            ..Default::default()
        };
        trace.push(
            graph_step(fixture, &frame, format!("Dequeue {u} and visit it"))
                .auxiliary(aux(&queue, &order))
                .line(line::DEQUEUE),
        );

        for (v, _) in fixture.neighbors(u) {
            let fresh = seen.insert(v);
            let (description, code) = if fresh {
                queue.push_back(v);
                tree.push((u, v));
                (format!("Discover {v} from {u} and enqueue it"), line::ENQUEUE)
            } else {
                (format!("{v} was already seen, skip it"), line::SKIP)
            };
            let frame = Frame {
                current: Some(u),
                comparing: Some(v),
                visited: order.clone(),
                result_edges: tree.clone(),
                active_edge: Some((u, v)),
                ..Default::default()
            };
            trace.push(
                graph_step(fixture, &frame, description)
                    .auxiliary(aux(&queue, &order))
                    .line(code),
            );
        }
    }

    finish_traversal(&mut trace, fixture, "BFS", &order, &tree);
    trace.finish()
}

mod dfs_line {
    pub const INIT: usize = 3;
    pub const VISIT: usize = 9;
    pub const SKIP: usize = 11;
    pub const DESCEND: usize = 12;
    pub const BACKTRACK: usize = 10;
}

/// Recursive depth-first traversal from the fixture's start node
pub fn dfs(fixture: &GraphFixture) -> StepSequence {
    if let Err(e) = fixture.validate() {
        return rejected(&e);
    }
    let mut walk = DepthWalk {
        fixture,
        trace: Trace::new(),
        seen: FxHashSet::default(),
        stack: Vec::new(),
        order: Vec::new(),
        tree: Vec::new(),
    };
    let start = fixture.start.as_str();

    walk.push(
        &Frame::default(),
        format!("Start DFS at {start}"),
        dfs_line::INIT,
    );
    if fixture.index_of(start).is_some() {
        walk.visit(start);
    }

    let DepthWalk {
        mut trace,
        order,
        tree,
        ..
    } = walk;
    finish_traversal(&mut trace, fixture, "DFS", &order, &tree);
    trace.finish()
}

struct DepthWalk<'a> {
    fixture: &'a GraphFixture,
    trace: Trace,
    seen: FxHashSet<&'a str>,
    /// Recursion stack, deepest last
    stack: Vec<&'a str>,
    order: Vec<&'a str>,
    tree: Vec<(&'a str, &'a str)>,
}

impl<'a> DepthWalk<'a> {
    fn push(&mut self, frame: &Frame<'_>, description: String, line: usize) {
        let step = graph_step(self.fixture, frame, description)
            .auxiliary(Auxiliary::Traversal {
                frontier: owned(&self.stack),
                order: owned(&self.order),
            })
            .line(line);
        self.trace.push(step);
    }

    fn frame(&self, current: &'a str) -> Frame<'a> {
        Frame {
            current: Some(current),
            visited: self.order.clone(),
            result_edges: self.tree.clone(),
            ..Default::default()
        }
    }

    fn visit(&mut self, u: &'a str) {
        use dfs_line as line;

        self.seen.insert(u);
        self.stack.push(u);
        self.order.push(u);
        let frame = self.frame(u);
        self.push(&frame, format!("Visit {u}"), line::VISIT);

        let fixture = self.fixture;
        for (v, _) in fixture.neighbors(u) {
            let mut frame = self.frame(u);
            frame.comparing = Some(v);
            frame.active_edge = Some((u, v));
            if self.seen.contains(v) {
                self.push(&frame, format!("{v} was already visited, skip it"), line::SKIP);
                continue;
            }
            self.tree.push((u, v));
            frame.result_edges = self.tree.clone();
            self.push(&frame, format!("Go deeper: {u} → {v}"), line::DESCEND);
            self.visit(v);
            let frame = self.frame(u);
            self.push(&frame, format!("Back at {u} after finishing {v}"), line::BACKTRACK);
        }

        self.stack.pop();
    }
}

fn finish_traversal(
    trace: &mut Trace,
    fixture: &GraphFixture,
    name: &str,
    order: &[&str],
    tree: &[(&str, &str)],
) {
    let mut state = Frame {
        visited: order.to_vec(),
        result_edges: tree.to_vec(),
        ..Default::default()
    }
    .render(fixture);
    for node in state.nodes.iter_mut() {
        node.flags.part_of_result = order.contains(&node.id.as_str());
    }
    let description = if order.is_empty() {
        format!("{name} visited nothing: start node {} is missing", fixture.start)
    } else {
        format!("{name} order: {}", order.join(", "))
    };
    trace.push(
        StepBuilder::new(description)
            .graph(state)
            .auxiliary(Auxiliary::Traversal {
                frontier: Vec::new(),
                order: owned(order),
            }),
    );
}

mod topo_line {
    pub const COUNT: usize = 4;
    pub const SEED: usize = 7;
    pub const TAKE: usize = 10;
    pub const RELEASE: usize = 12;
    pub const ENQUEUE: usize = 14;
}

/// Kahn's algorithm over a directed fixture
pub fn topological_sort(fixture: &GraphFixture) -> StepSequence {
    use topo_line as line;

    if let Err(e) = fixture.validate() {
        return rejected(&e);
    }

    let mut trace = Trace::new();
    let mut in_degree: BTreeMap<&str, usize> =
        fixture.nodes.iter().map(|n| (n.id.as_str(), 0)).collect();
    for edge in &fixture.edges {
        if let Some(d) = in_degree.get_mut(edge.to.as_str()) {
            *d += 1;
        }
    }

    let aux = |in_degree: &BTreeMap<&str, usize>, queue: &VecDeque<&str>, order: &[&str]| {
        Auxiliary::TopoSort {
            in_degree: in_degree.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            queue: queue.iter().map(|s| s.to_string()).collect(),
            order: owned(order),
        }
    };

    let mut queue: VecDeque<&str> = VecDeque::new();
    let mut order: Vec<&str> = Vec::new();
    let mut used: Vec<(&str, &str)> = Vec::new();

    let degrees: Vec<String> = fixture
        .nodes
        .iter()
        .map(|n| format!("{}:{}", n.id, in_degree[n.id.as_str()]))
        .collect();
    trace.push(
        graph_step(
            fixture,
            &Frame::default(),
            format!("Count incoming edges: {}", degrees.join(", ")),
        )
        .auxiliary(aux(&in_degree, &queue, &order))
        .line(line::COUNT),
    );

    // Seeds in fixture order
    queue.extend(
        fixture
            .nodes
            .iter()
            .map(|n| n.id.as_str())
            .filter(|id| in_degree[id] == 0),
    );
    let seeds: Vec<&str> = queue.iter().copied().collect();
    trace.push(
        graph_step(
            fixture,
            &Frame::default(),
            format!("Queue the nodes with no incoming edges: {}", seeds.join(", ")),
        )
        .auxiliary(aux(&in_degree, &queue, &order))
        .line(line::SEED),
    );

    while let Some(u) = queue.pop_front() {
        order.push(u);
        let frame = Frame {
            current: Some(u),
            visited: order.clone(),
            result_edges: used.clone(),
            ..Default::default()
        };
        trace.push(
            graph_step(fixture, &frame, format!("Take {u} and append it to the order"))
                .auxiliary(aux(&in_degree, &queue, &order))
                .line(line::TAKE),
        );

        for (v, _) in fixture.neighbors(u) {
            let Some(d) = in_degree.get_mut(v) else {
                continue;
            };
            *d = d.saturating_sub(1);
            let ready = *d == 0;
            let remaining = *d;
            used.push((u, v));
            let (description, code) = if ready {
                queue.push_back(v);
                (
                    format!("Remove edge {u} → {v}; {v} has no remaining inputs, enqueue it"),
                    line::ENQUEUE,
                )
            } else {
                (
                    format!("Remove edge {u} → {v}; {v} still waits on {remaining} edge(s)"),
                    line::RELEASE,
                )
            };
            let frame = Frame {
                current: Some(u),
                comparing: Some(v),
                visited: order.clone(),
                result_edges: used.clone(),
                active_edge: Some((u, v)),
                ..Default::default()
            };
            trace.push(
                graph_step(fixture, &frame, description)
                    .auxiliary(aux(&in_degree, &queue, &order))
                    .line(code),
            );
        }
    }

    let description = if order.len() == fixture.nodes.len() {
        format!("Topological order: {}", order.join(", "))
    } else {
        format!(
            "Cycle detected: only {} of {} nodes could be ordered",
            order.len(),
            fixture.nodes.len()
        )
    };
    let mut state = Frame {
        visited: order.clone(),
        result_edges: used.clone(),
        ..Default::default()
    }
    .render(fixture);
    for node in state.nodes.iter_mut() {
        node.flags.part_of_result = order.contains(&node.id.as_str());
    }
    trace.push(
        StepBuilder::new(description)
            .graph(state)
            .auxiliary(aux(&in_degree, &queue, &order)),
    );
    trace.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{EdgeSpec, NodeSpec};

    fn last_order(seq: &StepSequence) -> Vec<String> {
        match seq.last().unwrap().auxiliary() {
            Some(Auxiliary::Traversal { order, .. }) | Some(Auxiliary::TopoSort { order, .. }) => {
                order.clone()
            }
            other => panic!("unexpected auxiliary {:?}", other),
        }
    }

    #[test]
    fn test_dijkstra_shortest_path() {
        let seq = dijkstra(&GraphFixture::weighted());
        let last = seq.last().unwrap();
        assert_eq!(last.description(), "Shortest path A → C → D → F with total weight 5");
        match last.auxiliary() {
            Some(Auxiliary::Dijkstra { path, total, .. }) => {
                assert_eq!(path, &["A", "C", "D", "F"]);
                assert_eq!(*total, Some(5));
            }
            other => panic!("unexpected auxiliary {:?}", other),
        }
        let graph = last.graph().unwrap();
        let on_path: Vec<&str> = graph
            .nodes
            .iter()
            .filter(|n| n.flags.in_path)
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(on_path, vec!["A", "C", "D", "F"]);
    }

    #[test]
    fn test_dijkstra_finalizes_in_distance_order() {
        let seq = dijkstra(&GraphFixture::weighted());
        match seq.last().unwrap().auxiliary() {
            Some(Auxiliary::Dijkstra { finalized, .. }) => {
                // E and F tie at 5; E comes first in node order
                assert_eq!(finalized, &["A", "C", "D", "B", "E", "F"]);
            }
            other => panic!("unexpected auxiliary {:?}", other),
        }
    }

    #[test]
    fn test_dijkstra_unreachable_end() {
        let mut fixture = GraphFixture::weighted();
        fixture.nodes.push(NodeSpec {
            id: "Z".to_string(),
            position: (0.0, 0.0),
        });
        fixture.end = Some("Z".to_string());
        let seq = dijkstra(&fixture);
        assert!(seq.last().unwrap().description().contains("unreachable"));
    }

    #[test]
    fn test_dijkstra_without_end_lists_every_distance() {
        let mut fixture = GraphFixture::weighted();
        fixture.end = None;
        let seq = dijkstra(&fixture);
        let last = seq.last().unwrap();
        assert_eq!(
            last.description(),
            "Final distances: A=0, B=4, C=2, D=3, E=5, F=5"
        );
        match last.auxiliary() {
            Some(Auxiliary::Dijkstra { finalized, path, total, .. }) => {
                assert_eq!(finalized.len(), 6);
                assert!(path.is_empty());
                assert_eq!(*total, None);
            }
            other => panic!("unexpected auxiliary {:?}", other),
        }
    }

    #[test]
    fn test_dangling_edge_is_refused() {
        let mut fixture = GraphFixture::tree();
        fixture.edges.push(EdgeSpec {
            from: "A".to_string(),
            to: "Z".to_string(),
            weight: None,
        });
        for seq in [
            bfs(&fixture),
            dfs(&fixture),
            dijkstra(&fixture),
            topological_sort(&fixture),
        ] {
            assert_eq!(seq.len(), 1);
            assert_eq!(
                seq.last().unwrap().description(),
                "Cannot run: invalid fixture: edge A -> Z names unknown node \"Z\""
            );
        }
    }

    #[test]
    fn test_bfs_order() {
        let seq = bfs(&GraphFixture::tree());
        assert_eq!(last_order(&seq), vec!["A", "B", "C", "D", "E", "F"]);
    }

    #[test]
    fn test_dfs_order() {
        let seq = dfs(&GraphFixture::tree());
        assert_eq!(last_order(&seq), vec!["A", "B", "D", "C", "E", "F"]);
        assert!(seq.iter().any(|s| s.description().starts_with("Back at")));
    }

    #[test]
    fn test_topological_order() {
        let seq = topological_sort(&GraphFixture::dag());
        assert_eq!(last_order(&seq), vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_topological_sort_reports_cycle() {
        let mut fixture = GraphFixture::dag();
        fixture.edges.push(EdgeSpec {
            from: "E".to_string(),
            to: "C".to_string(),
            weight: None,
        });
        let seq = topological_sort(&fixture);
        assert!(seq.last().unwrap().description().starts_with("Cycle detected"));
    }

    #[test]
    fn test_steps_do_not_share_flags() {
        let seq = bfs(&GraphFixture::tree());
        let first = seq.first().unwrap().graph().unwrap();
        assert!(first.nodes.iter().all(|n| !n.flags.is_visited));
        assert!(seq.last().unwrap().graph().unwrap().nodes.iter().all(|n| n.flags.is_visited));
    }
}
