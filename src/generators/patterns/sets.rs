//! Union-find with union by rank.

use crate::fixtures::UnionFixture;
use crate::generators::Trace;
use crate::step::{Auxiliary, Element, Role, StepBuilder, StepSequence};

mod line {
    pub const FIND: usize = 8;
    pub const SAME: usize = 10;
    pub const LINK_LOW: usize = 13;
    pub const LINK_HIGH: usize = 15;
    pub const LINK_EQUAL: usize = 17;
}

struct Forest {
    parent: Vec<usize>,
    rank: Vec<usize>,
    components: usize,
    trace: Trace,
}

impl Forest {
    fn find(&self, mut x: usize) -> usize {
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    /// Elements show each slot's parent pointer
    fn step(&self, description: String) -> StepBuilder {
        let elements = self
            .parent
            .iter()
            .map(|&p| Element::new(p as i64))
            .collect();
        StepBuilder::new(description)
            .elements(elements)
            .auxiliary(Auxiliary::UnionFind {
                parent: self.parent.clone(),
                rank: self.rank.clone(),
                components: self.components,
            })
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        let step = self
            .step(format!("union({a}, {b}): find({a}) = {ra}, find({b}) = {rb}"))
            .mark(Role::Comparing, a)
            .mark(Role::Comparing, b)
            .mark(Role::Current, ra)
            .mark(Role::Current, rb)
            .line(line::FIND);
        self.trace.push(step);

        if ra == rb {
            let step = self
                .step(format!("{a} and {b} already share root {ra}"))
                .mark(Role::Found, ra)
                .line(line::SAME);
            self.trace.push(step);
            return;
        }

        let (child, root, code) = match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => (ra, rb, line::LINK_LOW),
            std::cmp::Ordering::Greater => (rb, ra, line::LINK_HIGH),
            std::cmp::Ordering::Equal => {
                self.rank[ra] += 1;
                (rb, ra, line::LINK_EQUAL)
            }
        };
        self.parent[child] = root;
        self.components -= 1;

        let step = self
            .step(format!(
                "Attach root {child} under {root} (rank {}); {} component(s) left",
                self.rank[root], self.components
            ))
            .mark(Role::Swapping, child)
            .mark(Role::Current, root)
            .line(code);
        self.trace.push(step);
    }
}

/// Apply each union of the fixture, then report the components
pub fn union_find(fixture: &UnionFixture) -> StepSequence {
    let size = fixture.size;
    let mut forest = Forest {
        parent: (0..size).collect(),
        rank: vec![0; size],
        components: size,
        trace: Trace::new(),
    };

    let step = forest.step(format!(
        "{size} singleton sets: every element is its own parent"
    ));
    forest.trace.push(step);

    for &(a, b) in &fixture.unions {
        if a >= size || b >= size {
            let step = forest.step(format!(
                "Skip union({a}, {b}): elements run from 0 to {}",
                size.saturating_sub(1)
            ));
            forest.trace.push(step);
            continue;
        }
        forest.union(a, b);
    }

    let mut roots: Vec<usize> = (0..size).map(|x| forest.find(x)).collect();
    roots.sort_unstable();
    roots.dedup();
    let listed: Vec<String> = roots.iter().map(|r| r.to_string()).collect();
    let step = forest
        .step(format!(
            "{} component(s) with root(s) {}",
            forest.components,
            listed.join(", ")
        ))
        .mark_all(Role::Found, roots.iter().copied());
    forest.trace.push(step);
    forest.trace.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_unions_join_everything() {
        let seq = union_find(&UnionFixture::default());
        let last = seq.last().unwrap();
        assert_eq!(last.description(), "1 component(s) with root(s) 0");
        match last.auxiliary() {
            Some(Auxiliary::UnionFind { parent, rank, components }) => {
                assert_eq!(parent, &vec![0, 0, 0, 2, 0, 4, 4, 6]);
                assert_eq!(rank[0], 3);
                assert_eq!(*components, 1);
            }
            other => panic!("unexpected auxiliary {:?}", other),
        }
    }

    #[test]
    fn test_repeated_union_is_noop() {
        let fixture = UnionFixture {
            size: 3,
            unions: vec![(0, 1), (1, 0)],
        };
        let seq = union_find(&fixture);
        assert!(seq
            .iter()
            .any(|s| s.description() == "1 and 0 already share root 0"));
        assert_eq!(
            seq.last().unwrap().description(),
            "2 component(s) with root(s) 0, 2"
        );
    }

    #[test]
    fn test_out_of_range_union_is_skipped() {
        let fixture = UnionFixture {
            size: 2,
            unions: vec![(0, 5)],
        };
        let seq = union_find(&fixture);
        assert!(seq.iter().any(|s| s.description().starts_with("Skip union(0, 5)")));
    }
}
