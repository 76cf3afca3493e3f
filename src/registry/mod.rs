//! Algorithm catalog and generator dispatch.
//!
//! The [`Registry`] is built once from the per-family lists in [`catalog`]
//! and is read-only afterwards. Each [`AlgorithmDescriptor`] carries a closed
//! [`AlgorithmKind`] so dispatch is an exhaustive match rather than a string
//! comparison.
//!
//! ```rust
//! use algotrace::registry::{AlgorithmInput, Category, Registry};
//!
//! let registry = Registry::new();
//! let quick = registry.lookup("quick").unwrap();
//! assert_eq!(quick.category, Category::Sorting);
//!
//! let steps = registry
//!     .generate("quick", &AlgorithmInput::new(vec![3, 1, 2]))
//!     .unwrap();
//! assert!(!steps.is_empty());
//! ```

mod catalog;
pub mod listings;

use crate::errors::{VizError, VizResult};
use crate::step::StepSequence;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;

/// Family an algorithm belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Sorting,
    Searching,
    Graph,
    LinkedList,
    Grid,
    Pattern,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Sorting,
        Category::Searching,
        Category::Graph,
        Category::LinkedList,
        Category::Grid,
        Category::Pattern,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Sorting => "sorting",
            Category::Searching => "searching",
            Category::Graph => "graph",
            Category::LinkedList => "linked-list",
            Category::Grid => "grid",
            Category::Pattern => "pattern",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How to run an algorithm.
///
/// Sorting and searching generators consume caller input. Demos replay a
/// canned walkthrough over a default fixture and ignore it.
#[derive(Clone, Copy)]
pub enum AlgorithmKind {
    Sorting(fn(&[i64]) -> StepSequence),
    Searching(fn(&[i64], i64) -> StepSequence),
    Demo(fn() -> StepSequence),
}

impl AlgorithmKind {
    /// Whether the generator reads [`AlgorithmInput`]
    pub fn takes_input(&self) -> bool {
        !matches!(self, AlgorithmKind::Demo(_))
    }
}

impl fmt::Debug for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AlgorithmKind::Sorting(_) => "Sorting",
            AlgorithmKind::Searching(_) => "Searching",
            AlgorithmKind::Demo(_) => "Demo",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When and how to reach for a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatternGuide {
    pub when_to_use: &'static str,
    pub difficulty: Difficulty,
    pub approach: &'static str,
    /// Well-known problems the pattern solves
    pub common_problems: &'static [&'static str],
    pub key_points: &'static [&'static str],
}

/// Static metadata for one algorithm
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmDescriptor {
    /// Unique lowercase key, e.g. `quick` or `sliding-window`
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub category: Category,
    #[serde(skip)]
    pub kind: AlgorithmKind,
    /// Listing shown in the code pane; step code lines index into it
    #[serde(skip)]
    pub code: &'static str,
    /// Study notes, present on patterns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guide: Option<PatternGuide>,
}

impl AlgorithmDescriptor {
    /// Case-insensitive match of `query` against the name, the description
    /// and any common problems. A blank query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let problems = self.guide.iter().flat_map(|g| g.common_problems.iter());
        [self.name, self.description]
            .iter()
            .chain(problems)
            .any(|text| text.to_lowercase().contains(&needle))
    }

    /// Run the generator.
    pub fn generate(&self, input: &AlgorithmInput) -> StepSequence {
        match self.kind {
            AlgorithmKind::Sorting(run) => run(&input.values),
            AlgorithmKind::Searching(run) => run(&input.values, input.target),
            AlgorithmKind::Demo(run) => run(),
        }
    }
}

/// Caller-supplied data for sorting and searching generators
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlgorithmInput {
    pub values: Vec<i64>,
    pub target: i64,
}

impl AlgorithmInput {
    pub fn new(values: Vec<i64>) -> Self {
        AlgorithmInput { values, target: 0 }
    }

    pub fn with_target(mut self, target: i64) -> Self {
        self.target = target;
        self
    }
}

/// Read-only mapping from id to [`AlgorithmDescriptor`]
pub struct Registry {
    entries: Vec<AlgorithmDescriptor>,
    index: FxHashMap<&'static str, usize>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Build the registry with every built-in algorithm.
    pub fn new() -> Self {
        let mut registry = Registry {
            entries: Vec::with_capacity(32),
            index: FxHashMap::default(),
        };
        for descriptor in catalog::builtin() {
            registry.register(descriptor);
        }
        log::debug!("registry built with {} algorithms", registry.entries.len());
        registry
    }

    fn register(&mut self, descriptor: AlgorithmDescriptor) {
        let id = descriptor.id;
        if self.index.insert(id, self.entries.len()).is_some() {
            // Catalog ids are static; a clash is a bug in the catalog
            panic!("duplicate algorithm id: {id}");
        }
        self.entries.push(descriptor);
    }

    pub fn lookup(&self, id: &str) -> VizResult<&AlgorithmDescriptor> {
        match self.index.get(id) {
            Some(&i) => Ok(&self.entries[i]),
            None => {
                log::warn!("unknown algorithm id: {id}");
                Err(VizError::UnknownAlgorithmId(id.to_string()))
            }
        }
    }

    /// Descriptors of one category, in registration order
    pub fn list_by_category(&self, category: Category) -> Vec<&AlgorithmDescriptor> {
        self.entries
            .iter()
            .filter(|d| d.category == category)
            .collect()
    }

    pub fn all(&self) -> &[AlgorithmDescriptor] {
        &self.entries
    }

    /// Categories that have at least one algorithm, in [`Category::ALL`] order
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.entries.iter().any(|d| d.category == *c))
            .collect()
    }

    /// Descriptors whose name, description or common problems mention
    /// `query`, in registration order
    pub fn search(&self, query: &str) -> Vec<&AlgorithmDescriptor> {
        let hits: Vec<_> = self.entries.iter().filter(|d| d.matches(query)).collect();
        log::debug!("search {query:?} matched {} algorithms", hits.len());
        hits
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up `id` and run its generator.
    ///
    /// Unknown ids return [`VizError::UnknownAlgorithmId`] without running
    /// anything.
    pub fn generate(&self, id: &str, input: &AlgorithmInput) -> VizResult<StepSequence> {
        let descriptor = self.lookup(id)?;
        let steps = descriptor.generate(input);
        log::debug!("generated {} steps for {id}", steps.len());
        Ok(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::ArrayFixture;

    fn input() -> AlgorithmInput {
        let fixture = ArrayFixture::sorted_search();
        AlgorithmInput::new(fixture.values).with_target(fixture.target)
    }

    #[test]
    fn test_lookup_quick() {
        let registry = Registry::new();
        let quick = registry.lookup("quick").unwrap();
        assert_eq!(quick.category, Category::Sorting);
        assert_eq!(quick.category.as_str(), "sorting");
    }

    #[test]
    fn test_lookup_unknown() {
        let registry = Registry::new();
        let err = registry.lookup("not-a-real-id").unwrap_err();
        assert_eq!(err, VizError::UnknownAlgorithmId("not-a-real-id".to_string()));
        assert!(registry.generate("not-a-real-id", &input()).is_err());
    }

    #[test]
    fn test_catalog_size_and_families() {
        let registry = Registry::new();
        assert_eq!(registry.len(), 29);
        assert_eq!(registry.list_by_category(Category::Sorting).len(), 4);
        assert_eq!(registry.list_by_category(Category::Searching).len(), 5);
        assert_eq!(registry.list_by_category(Category::Graph).len(), 3);
        assert_eq!(registry.list_by_category(Category::LinkedList).len(), 1);
        assert_eq!(registry.list_by_category(Category::Grid).len(), 1);
        assert_eq!(registry.list_by_category(Category::Pattern).len(), 15);
        assert_eq!(registry.categories(), Category::ALL.to_vec());
    }

    #[test]
    fn test_list_keeps_registration_order() {
        let registry = Registry::new();
        let ids: Vec<&str> = registry
            .list_by_category(Category::Sorting)
            .iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec!["bubble", "insertion", "quick", "merge"]);
    }

    #[test]
    fn test_patterns_carry_guidance() {
        let registry = Registry::new();
        for d in registry.list_by_category(Category::Pattern) {
            let guide = d.guide.unwrap_or_else(|| panic!("{} has no guide", d.id));
            assert!(!guide.common_problems.is_empty(), "{} lists no problems", d.id);
            assert!(!guide.key_points.is_empty(), "{} lists no key points", d.id);
            assert!(!guide.approach.is_empty());
        }
        assert_eq!(registry.all().iter().filter(|d| d.guide.is_some()).count(), 15);
        assert_eq!(
            registry.lookup("backtracking").unwrap().guide.map(|g| g.difficulty),
            Some(Difficulty::Hard)
        );
    }

    #[test]
    fn test_bubble_description_has_no_early_exit() {
        let bubble = Registry::new().lookup("bubble").unwrap().description;
        assert!(bubble.contains("each pass"));
        assert!(!bubble.contains("no swaps"));
    }

    #[test]
    fn test_search_by_name_and_problem() {
        let registry = Registry::new();
        let ids = |query: &str| -> Vec<&'static str> {
            registry.search(query).iter().map(|d| d.id).collect()
        };

        assert_eq!(ids("BUBBLE"), vec!["bubble"]);
        // Only listed as a common problem of the pattern
        assert_eq!(ids("n-queens"), vec!["backtracking"]);
        assert!(ids("course schedule").contains(&"topological-sort"));
        assert!(ids("no such thing anywhere").is_empty());
        assert_eq!(registry.search("  ").len(), registry.len());
    }

    #[test]
    fn code_lines_stay_inside_listings() {
        let registry = Registry::new();
        for descriptor in registry.all() {
            let lines = descriptor.code.lines().count();
            let steps = descriptor.generate(&input());
            for (i, step) in steps.iter().enumerate() {
                if let Some(line) = step.code_line() {
                    assert!(
                        line < lines,
                        "{} step {i} highlights line {line} of a {lines}-line listing",
                        descriptor.id
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_generator_runs_on_empty_input() {
        let registry = Registry::new();
        for descriptor in registry.all() {
            let steps = descriptor.generate(&AlgorithmInput::default());
            assert!(!steps.is_empty(), "{} produced no steps", descriptor.id);
        }
    }
}
