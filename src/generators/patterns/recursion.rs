//! Recursive patterns: subset backtracking, memoized Fibonacci and its
//! bottom-up table.

use crate::fixtures::{ArrayFixture, FibFixture};
use crate::generators::{fmt_list, Trace};
use crate::step::{Auxiliary, Element, Role, StepBuilder, StepSequence};
use std::collections::BTreeMap;

mod subset_line {
    pub const START: usize = 2;
    pub const RECORD: usize = 7;
    pub const CHOOSE: usize = 9;
    pub const UNDO: usize = 11;
}

struct Subsets<'a> {
    nums: &'a [i64],
    trace: Trace,
    /// Indices of the chosen values
    chosen: Vec<usize>,
    out: Vec<Vec<i64>>,
}

impl Subsets<'_> {
    fn path(&self) -> Vec<i64> {
        self.chosen.iter().map(|&i| self.nums[i]).collect()
    }

    fn push(&mut self, description: String, line: usize) {
        let step = StepBuilder::new(description)
            .numbers(self.nums)
            .mark_all(Role::Current, self.chosen.iter().copied())
            .auxiliary(Auxiliary::Subsets {
                path: self.path(),
                subsets: self.out.clone(),
            })
            .line(line);
        self.trace.push(step);
    }

    fn explore(&mut self, start: usize) {
        use subset_line as line;

        let path = self.path();
        self.out.push(path.clone());
        self.push(format!("Record subset {}", fmt_list(&path)), line::RECORD);

        for i in start..self.nums.len() {
            let value = self.nums[i];
            self.chosen.push(i);
            self.push(format!("Choose {value}"), line::CHOOSE);
            self.explore(i + 1);
            self.chosen.pop();
            self.push(format!("Undo {value} and backtrack"), line::UNDO);
        }
    }
}

/// Enumerate every subset by choosing, exploring and undoing
pub fn backtracking(fixture: &ArrayFixture) -> StepSequence {
    let mut walk = Subsets {
        nums: &fixture.values,
        trace: Trace::new(),
        chosen: Vec::new(),
        out: Vec::new(),
    };
    walk.push(
        format!("Generate every subset of {}", fmt_list(&fixture.values)),
        subset_line::START,
    );
    walk.explore(0);

    let total = walk.out.len();
    let step = StepBuilder::new(format!("Generated {total} subsets"))
        .numbers(walk.nums)
        .auxiliary(Auxiliary::Subsets {
            path: Vec::new(),
            subsets: walk.out.clone(),
        });
    walk.trace.push(step);
    walk.trace.finish()
}

mod memo_line {
    pub const CALL: usize = 0;
    pub const BASE: usize = 2;
    pub const HIT: usize = 5;
    pub const STORE: usize = 8;
}

struct Memo {
    n: usize,
    trace: Trace,
    memo: BTreeMap<usize, u64>,
    stack: Vec<usize>,
    calls: usize,
}

impl Memo {
    /// One slot per argument 0..=n, unknown slots shown as `?`
    fn slots(&self) -> Vec<Element> {
        (0..=self.n)
            .map(|i| match self.memo.get(&i) {
                Some(&v) => Element::new(v as i64),
                None if i < 2 => Element::new(i as i64),
                None => Element::new("?"),
            })
            .collect()
    }

    fn push(&mut self, description: String, current: usize, role: Role, line: usize) {
        let step = StepBuilder::new(description)
            .elements(self.slots())
            .mark(role, current)
            .mark_all(Role::Visited, self.stack.iter().copied())
            .auxiliary(Auxiliary::Memo {
                memo: self.memo.clone(),
                call_stack: self.stack.clone(),
            })
            .line(line);
        self.trace.push(step);
    }

    fn fib(&mut self, k: usize) -> u64 {
        use memo_line as line;

        self.calls += 1;
        self.stack.push(k);
        self.push(format!("Call fib({k})"), k, Role::Current, line::CALL);

        let value = if k < 2 {
            self.push(format!("Base case: fib({k}) = {k}"), k, Role::Found, line::BASE);
            k as u64
        } else if let Some(&cached) = self.memo.get(&k) {
            self.push(
                format!("Memo hit: fib({k}) = {cached}, no recursion needed"),
                k,
                Role::Found,
                line::HIT,
            );
            cached
        } else {
            let a = self.fib(k - 1);
            let b = self.fib(k - 2);
            let value = a + b;
            self.memo.insert(k, value);
            self.push(
                format!("fib({k}) = {a} + {b} = {value}; store it in the memo"),
                k,
                Role::Found,
                line::STORE,
            );
            value
        };

        self.stack.pop();
        value
    }
}

/// Top-down Fibonacci with a memo table
pub fn recursion_memoization(fixture: &FibFixture) -> StepSequence {
    let mut memo = Memo {
        n: fixture.n,
        trace: Trace::new(),
        memo: BTreeMap::new(),
        stack: Vec::new(),
        calls: 0,
    };
    let value = memo.fib(fixture.n);
    let naive = naive_calls(fixture.n);
    let step = StepBuilder::new(format!(
        "fib({}) = {value} using {} calls instead of {naive} without a memo",
        fixture.n, memo.calls
    ))
    .elements(memo.slots())
    .mark(Role::Found, fixture.n)
    .auxiliary(Auxiliary::Memo {
        memo: memo.memo.clone(),
        call_stack: Vec::new(),
    });
    memo.trace.push(step);
    memo.trace.finish()
}

/// Calls made by the plain recursive version
fn naive_calls(n: usize) -> u64 {
    let (mut a, mut b) = (1_u64, 1_u64);
    for _ in 1..n {
        (a, b) = (b, a + b + 1);
    }
    if n == 0 {
        a
    } else {
        b
    }
}

mod table_line {
    pub const INIT: usize = 1;
    pub const FILL: usize = 4;
    pub const RESULT: usize = 6;
}

/// Bottom-up Fibonacci table
pub fn dynamic_programming(fixture: &FibFixture) -> StepSequence {
    use table_line as line;

    let n = fixture.n;
    let len = (n + 1).max(2);
    let mut table: Vec<Option<u64>> = vec![None; len];
    table[0] = Some(0);
    table[1] = Some(1);
    let mut trace = Trace::new();

    let snapshot = |table: &[Option<u64>], description: String| {
        let elements = table
            .iter()
            .map(|slot| match slot {
                Some(v) => Element::new(*v as i64),
                None => Element::new("?"),
            })
            .collect();
        let memo = table
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|v| (i, v)))
            .collect();
        StepBuilder::new(description)
            .elements(elements)
            .auxiliary(Auxiliary::Memo {
                memo,
                call_stack: Vec::new(),
            })
    };

    trace.push(
        snapshot(&table, format!("Seed the table for fib({n}) with fib(0) = 0 and fib(1) = 1"))
            .mark(Role::Found, 0)
            .mark(Role::Found, 1)
            .line(line::INIT),
    );

    for i in 2..=n {
        let a = table[i - 1].unwrap_or(0);
        let b = table[i - 2].unwrap_or(0);
        table[i] = Some(a + b);
        trace.push(
            snapshot(&table, format!("table[{i}] = table[{}] + table[{}] = {a} + {b} = {}", i - 1, i - 2, a + b))
                .mark(Role::Current, i)
                .mark(Role::Comparing, i - 1)
                .mark(Role::Comparing, i - 2)
                .line(line::FILL),
        );
    }

    let value = table[n].unwrap_or(0);
    trace.push(
        snapshot(&table, format!("fib({n}) = {value}"))
            .mark(Role::Found, n)
            .line(line::RESULT),
    );
    trace.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsets_in_backtracking_order() {
        let seq = backtracking(&ArrayFixture::subsets());
        match seq.last().unwrap().auxiliary() {
            Some(Auxiliary::Subsets { subsets, .. }) => {
                let expected: Vec<Vec<i64>> = vec![
                    vec![],
                    vec![1],
                    vec![1, 2],
                    vec![1, 2, 3],
                    vec![1, 3],
                    vec![2],
                    vec![2, 3],
                    vec![3],
                ];
                assert_eq!(subsets, &expected);
            }
            other => panic!("unexpected auxiliary {:?}", other),
        }
    }

    #[test]
    fn test_memoized_fib() {
        let seq = recursion_memoization(&FibFixture::default());
        let last = seq.last().unwrap();
        // 11 calls with a memo against 25 without
        assert_eq!(
            last.description(),
            "fib(6) = 8 using 11 calls instead of 25 without a memo"
        );
        assert!(seq.iter().any(|s| s.description().starts_with("Memo hit")));
    }

    #[test]
    fn test_table_fib() {
        let seq = dynamic_programming(&FibFixture::default());
        assert_eq!(seq.last().unwrap().description(), "fib(6) = 8");
        assert_eq!(seq.last().unwrap().values(), vec![0, 1, 1, 2, 3, 5, 8]);
    }

    #[test]
    fn test_table_fib_small() {
        let seq = dynamic_programming(&FibFixture { n: 0 });
        assert_eq!(seq.last().unwrap().description(), "fib(0) = 0");
    }
}
