//! The step model: immutable snapshots of an algorithm run
//!
//! A [`Step`] captures everything a renderer needs at one decision point:
//! narration, the listing line to highlight, the primary collection with its
//! role flags, and optionally a graph, a linked list and family-specific
//! [`Auxiliary`] state.
//!
//! Steps are only built through [`StepBuilder::build`], which validates every
//! index the step carries. Once built a step exposes read-only accessors, so
//! an emitted step can never change under a later one.

mod auxiliary;
mod graph;
mod list;
mod roles;

pub use auxiliary::Auxiliary;
pub use graph::{GraphEdge, GraphFlags, GraphNode, GraphRole, GraphState};
pub use list::{LinkedListState, ListNode};
pub use roles::{Role, RoleSet};

use crate::errors::{VizError, VizResult};
use serde::Serialize;
use std::fmt;

/// Numeric or symbolic element value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Value {
    Number(i64),
    Symbol(String),
}

impl Value {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Symbol(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Symbol(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Symbol(s.to_string())
    }
}

/// One entry of the primary collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub value: Value,
    pub roles: RoleSet,
}

impl Element {
    pub fn new(value: impl Into<Value>) -> Self {
        Element {
            value: value.into(),
            roles: RoleSet::empty(),
        }
    }
}

/// An immutable snapshot of algorithm state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    description: String,
    code_line: Option<usize>,
    elements: Vec<Element>,
    #[serde(skip_serializing_if = "Option::is_none")]
    graph: Option<GraphState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    linked_list: Option<LinkedListState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auxiliary: Option<Auxiliary>,
}

impl Step {
    pub fn description(&self) -> &str {
        &self.description
    }

    /// 0-based line of the algorithm's listing, if any
    pub fn code_line(&self) -> Option<usize> {
        self.code_line
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn graph(&self) -> Option<&GraphState> {
        self.graph.as_ref()
    }

    pub fn linked_list(&self) -> Option<&LinkedListState> {
        self.linked_list.as_ref()
    }

    pub fn auxiliary(&self) -> Option<&Auxiliary> {
        self.auxiliary.as_ref()
    }

    /// Numeric element values, skipping symbols
    pub fn values(&self) -> Vec<i64> {
        self.elements
            .iter()
            .filter_map(|e| e.value.as_number())
            .collect()
    }

    /// Indices of elements carrying `role`
    pub fn indices_with(&self, role: Role) -> Vec<usize> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.roles.contains(role))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.elements.iter().any(|e| e.roles.contains(role))
    }

    /// Check every index the step references
    pub fn validate(&self) -> VizResult<()> {
        if self.description.trim().is_empty() {
            return Err(VizError::malformed("step has no description"));
        }
        let len = self.elements.len();
        if let Some(aux) = &self.auxiliary {
            aux.validate(len).map_err(VizError::malformed)?;
        }
        if let Some(graph) = &self.graph {
            graph.validate().map_err(VizError::malformed)?;
        }
        if let Some(list) = &self.linked_list {
            list.validate().map_err(VizError::malformed)?;
        }
        Ok(())
    }
}

/// Collects the parts of a [`Step`] and validates them on [`build`](StepBuilder::build)
#[derive(Debug, Clone)]
pub struct StepBuilder {
    step: Step,
    /// Role marks that named an index outside the collection
    stray_marks: Vec<(Role, usize)>,
}

impl StepBuilder {
    pub fn new(description: impl Into<String>) -> Self {
        StepBuilder {
            step: Step {
                description: description.into(),
                code_line: None,
                elements: Vec::new(),
                graph: None,
                linked_list: None,
                auxiliary: None,
            },
            stray_marks: Vec::new(),
        }
    }

    pub fn line(mut self, line: usize) -> Self {
        self.step.code_line = Some(line);
        self
    }

    pub fn code_line(mut self, line: Option<usize>) -> Self {
        self.step.code_line = line;
        self
    }

    /// Numeric primary collection with no roles
    pub fn numbers(mut self, values: &[i64]) -> Self {
        self.step.elements = values.iter().map(|&v| Element::new(v)).collect();
        self
    }

    pub fn elements(mut self, elements: Vec<Element>) -> Self {
        self.step.elements = elements;
        self
    }

    /// Attach `role` to the element at `index`
    pub fn mark(mut self, role: Role, index: usize) -> Self {
        match self.step.elements.get_mut(index) {
            Some(element) => element.roles.insert(role),
            None => self.stray_marks.push((role, index)),
        }
        self
    }

    pub fn mark_all(self, role: Role, indices: impl IntoIterator<Item = usize>) -> Self {
        indices.into_iter().fold(self, |b, i| b.mark(role, i))
    }

    pub fn graph(mut self, graph: GraphState) -> Self {
        self.step.graph = Some(graph);
        self
    }

    pub fn linked_list(mut self, list: LinkedListState) -> Self {
        self.step.linked_list = Some(list);
        self
    }

    pub fn auxiliary(mut self, aux: Auxiliary) -> Self {
        self.step.auxiliary = Some(aux);
        self
    }

    pub fn build(self) -> VizResult<Step> {
        if let Some((role, index)) = self.stray_marks.first() {
            return Err(VizError::malformed(format!(
                "{} mark at index {} outside collection of {}",
                role.label(),
                index,
                self.step.elements.len()
            )));
        }
        self.step.validate()?;
        Ok(self.step)
    }
}

/// The full, ordered output of one generator run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StepSequence {
    steps: Vec<Step>,
}

impl StepSequence {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

impl From<Vec<Step>> for StepSequence {
    fn from(steps: Vec<Step>) -> Self {
        StepSequence { steps }
    }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_builder_marks_roles() {
        let step = StepBuilder::new("compare")
            .numbers(&[3, 1, 2])
            .mark(Role::Comparing, 0)
            .mark(Role::Comparing, 1)
            .line(4)
            .build()
            .unwrap();
        assert_eq!(step.indices_with(Role::Comparing), vec![0, 1]);
        assert_eq!(step.code_line(), Some(4));
        assert_eq!(step.values(), vec![3, 1, 2]);
    }

    #[test]
    fn test_out_of_range_mark_rejected() {
        let err = StepBuilder::new("bad")
            .numbers(&[1, 2])
            .mark(Role::Found, 2)
            .build()
            .unwrap_err();
        assert!(matches!(err, VizError::MalformedStep { .. }));
    }

    #[test]
    fn test_out_of_range_sorted_index_rejected() {
        let err = StepBuilder::new("bad")
            .numbers(&[1, 2])
            .auxiliary(Auxiliary::Sorting {
                sorted: BTreeSet::from([0, 5]),
            })
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("sorted index 5"));
    }

    #[test]
    fn test_empty_description_rejected() {
        assert!(StepBuilder::new("  ").build().is_err());
    }

    #[test]
    fn test_edge_to_unknown_node_rejected() {
        let graph = GraphState {
            directed: false,
            nodes: vec![GraphNode {
                id: "A".into(),
                position: (0.0, 0.0),
                distance: None,
                flags: GraphFlags::default(),
            }],
            edges: vec![GraphEdge {
                from: "A".into(),
                to: "Z".into(),
                weight: None,
                flags: GraphFlags::default(),
            }],
        };
        assert!(StepBuilder::new("g").graph(graph).build().is_err());
    }

    #[test]
    fn test_list_pointer_out_of_range_rejected() {
        let list = LinkedListState {
            nodes: vec![ListNode {
                id: 1,
                value: 1,
                next_id: None,
            }],
            slow: Some(0),
            fast: Some(3),
            cycle_detected: false,
            cycle_node_ids: BTreeSet::new(),
        };
        assert!(StepBuilder::new("l").linked_list(list).build().is_err());
    }

    #[test]
    fn test_step_json_shape() {
        let step = StepBuilder::new("init")
            .numbers(&[2])
            .build()
            .unwrap();
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["description"], "init");
        assert_eq!(json["elements"][0]["value"], 2);
        assert!(json.get("graph").is_none());
    }
}
