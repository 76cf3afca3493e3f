//! Sorting walkthroughs: bubble, insertion, quick (Lomuto) and merge
//!
//! Every step carries [`Auxiliary::Sorting`]. Its index set only grows and
//! the terminal step always holds every index.

use super::{fmt_list, Trace};
use crate::step::{Auxiliary, Role, StepBuilder, StepSequence};
use std::collections::BTreeSet;

/// Working state shared by the four sorts
struct Sorter {
    arr: Vec<i64>,
    sorted: BTreeSet<usize>,
    trace: Trace,
}

impl Sorter {
    fn new(input: &[i64]) -> Self {
        Sorter {
            arr: input.to_vec(),
            sorted: BTreeSet::new(),
            trace: Trace::new(),
        }
    }

    fn step(&self, description: impl Into<String>) -> StepBuilder {
        StepBuilder::new(description)
            .numbers(&self.arr)
            .auxiliary(Auxiliary::Sorting {
                sorted: self.sorted.clone(),
            })
    }

    fn push(&mut self, builder: StepBuilder) {
        self.trace.push(builder);
    }

    fn start(&mut self, name: &str, line: usize) {
        let description = if self.arr.is_empty() {
            format!("Starting {name} on an empty array")
        } else {
            format!("Starting {name} on {}", fmt_list(&self.arr))
        };
        let step = self.step(description).line(line);
        self.push(step);
    }

    fn finish(mut self) -> StepSequence {
        self.sorted.extend(0..self.arr.len());
        let description = if self.arr.is_empty() {
            "Nothing to sort: the array is empty".to_string()
        } else {
            format!("Array sorted: {}", fmt_list(&self.arr))
        };
        let step = self.step(description);
        self.push(step);
        self.trace.finish()
    }
}

mod bubble_line {
    pub const START: usize = 1;
    pub const PASS: usize = 2;
    pub const COMPARE: usize = 5;
    pub const SWAP: usize = 6;
    pub const PASS_DONE: usize = 3;
}

pub fn bubble_sort(input: &[i64]) -> StepSequence {
    use bubble_line as line;

    let mut s = Sorter::new(input);
    let n = s.arr.len();
    s.start("bubble sort", line::START);

    for i in 0..n.saturating_sub(1) {
        let step = s
            .step(format!(
                "Pass {}: bubble the largest remaining value to index {}",
                i + 1,
                n - 1 - i
            ))
            .line(line::PASS);
        s.push(step);

        for j in 0..n - i - 1 {
            let (a, b) = (s.arr[j], s.arr[j + 1]);
            let verdict = if a > b {
                format!("{a} > {b}, swap them")
            } else {
                format!("{a} <= {b}, no swap")
            };
            let step = s
                .step(format!("Compare index {j} and {}: {verdict}", j + 1))
                .mark(Role::Comparing, j)
                .mark(Role::Comparing, j + 1)
                .line(line::COMPARE);
            s.push(step);

            if a > b {
                s.arr.swap(j, j + 1);
                let step = s
                    .step(format!("Swapped {a} and {b}"))
                    .mark(Role::Swapping, j)
                    .mark(Role::Swapping, j + 1)
                    .line(line::SWAP);
                s.push(step);
            }
        }

        s.sorted.insert(n - 1 - i);
        let step = s
            .step(format!(
                "Pass {} done: {} is in its final position",
                i + 1,
                s.arr[n - 1 - i]
            ))
            .line(line::PASS_DONE);
        s.push(step);
    }

    s.finish()
}

mod insertion_line {
    pub const START: usize = 1;
    pub const KEY: usize = 2;
    pub const COMPARE: usize = 5;
    pub const SHIFT: usize = 6;
    pub const INSERT: usize = 9;
}

pub fn insertion_sort(input: &[i64]) -> StepSequence {
    use insertion_line as line;

    let mut s = Sorter::new(input);
    let n = s.arr.len();
    if n > 0 {
        s.sorted.insert(0);
    }
    s.start("insertion sort", line::START);

    for i in 1..n {
        let key = s.arr[i];
        let step = s
            .step(format!("Take key {key} from index {i}"))
            .mark(Role::Current, i)
            .line(line::KEY);
        s.push(step);

        let mut j = i;
        while j > 0 {
            let left = s.arr[j - 1];
            let shifts = left > key;
            let verdict = if shifts {
                format!("{left} > {key}, shift {left} right")
            } else {
                format!("{left} <= {key}, stop")
            };
            let step = s
                .step(format!("Compare {left} with key {key}: {verdict}"))
                .mark(Role::Comparing, j - 1)
                .mark(Role::Current, j)
                .line(line::COMPARE);
            s.push(step);

            if !shifts {
                break;
            }
            s.arr.swap(j - 1, j);
            let step = s
                .step(format!("Shifted {left} to index {j}"))
                .mark(Role::Swapping, j)
                .mark(Role::Current, j - 1)
                .line(line::SHIFT);
            s.push(step);
            j -= 1;
        }

        s.sorted.extend(0..=i);
        let step = s
            .step(format!(
                "Insert {key} at index {j}; indices 0..={i} are now in order"
            ))
            .mark(Role::Current, j)
            .line(line::INSERT);
        s.push(step);
    }

    s.finish()
}

mod quick_line {
    pub const START: usize = 0;
    pub const SINGLE: usize = 1;
    pub const PIVOT: usize = 9;
    pub const COMPARE: usize = 12;
    pub const SWAP: usize = 14;
    pub const PLACE: usize = 17;
}

pub fn quick_sort(input: &[i64]) -> StepSequence {
    let mut s = Sorter::new(input);
    s.start("quick sort", quick_line::START);
    let high = s.arr.len() as isize - 1;
    quick_range(&mut s, 0, high);
    s.finish()
}

fn quick_range(s: &mut Sorter, low: isize, high: isize) {
    use quick_line as line;

    if low > high {
        return;
    }
    if low == high {
        let idx = low as usize;
        s.sorted.insert(idx);
        let step = s
            .step(format!(
                "Range [{idx}..={idx}] holds the single value {}; it is in place",
                s.arr[idx]
            ))
            .mark(Role::Current, idx)
            .line(line::SINGLE);
        s.push(step);
        return;
    }

    let (lo, hi) = (low as usize, high as usize);
    let pivot = s.arr[hi];
    let step = s
        .step(format!("Partition [{lo}..={hi}] around pivot {pivot}"))
        .mark(Role::Pivot, hi)
        .line(line::PIVOT);
    s.push(step);

    // Next slot of the "less than pivot" side
    let mut store = lo;
    for j in lo..hi {
        let value = s.arr[j];
        let less = value < pivot;
        let verdict = if less {
            format!("{value} < {pivot}, move it to the left side")
        } else {
            format!("{value} >= {pivot}, it stays on the right side")
        };
        let step = s
            .step(format!("Compare {value} with pivot {pivot}: {verdict}"))
            .mark(Role::Comparing, j)
            .mark(Role::Pivot, hi)
            .line(line::COMPARE);
        s.push(step);

        if less {
            s.arr.swap(store, j);
            let description = if store == j {
                format!("{value} is already at index {store} of the left side")
            } else {
                format!("Swapped index {store} and {j}")
            };
            let step = s
                .step(description)
                .mark(Role::Swapping, store)
                .mark(Role::Swapping, j)
                .mark(Role::Pivot, hi)
                .line(line::SWAP);
            s.push(step);
            store += 1;
        }
    }

    s.arr.swap(store, hi);
    s.sorted.insert(store);
    let step = s
        .step(format!(
            "Place pivot {pivot} at index {store}; it is in its final position"
        ))
        .mark(Role::Swapping, store)
        .mark(Role::Swapping, hi)
        .line(line::PLACE);
    s.push(step);

    quick_range(s, low, store as isize - 1);
    quick_range(s, store as isize + 1, high);
}

mod merge_line {
    pub const START: usize = 0;
    pub const DIVIDE: usize = 2;
    pub const MERGE: usize = 10;
    pub const COMPARE: usize = 14;
    pub const TAKE_LEFT: usize = 15;
    pub const TAKE_RIGHT: usize = 18;
    pub const REST_LEFT: usize = 24;
    pub const REST_RIGHT: usize = 29;
    pub const MERGED: usize = 5;
}

pub fn merge_sort(input: &[i64]) -> StepSequence {
    let mut s = Sorter::new(input);
    s.start("merge sort", merge_line::START);
    if !s.arr.is_empty() {
        let right = s.arr.len() - 1;
        merge_range(&mut s, 0, right);
    }
    s.finish()
}

fn merge_range(s: &mut Sorter, left: usize, right: usize) {
    if left >= right {
        return;
    }
    let mid = (left + right) / 2;
    let step = s
        .step(format!(
            "Split [{left}..={right}] into [{left}..={mid}] and [{}..={right}]",
            mid + 1
        ))
        .mark_all(Role::Current, left..=right)
        .line(merge_line::DIVIDE);
    s.push(step);

    merge_range(s, left, mid);
    merge_range(s, mid + 1, right);
    merge_runs(s, left, mid, right);
}

fn merge_runs(s: &mut Sorter, left: usize, mid: usize, right: usize) {
    use merge_line as line;

    let l = s.arr[left..=mid].to_vec();
    let r = s.arr[mid + 1..=right].to_vec();
    let step = s
        .step(format!("Merge {} and {}", fmt_list(&l), fmt_list(&r)))
        .mark_all(Role::Visited, left..=right)
        .line(line::MERGE);
    s.push(step);

    // Unmerged values stay visible: merged prefix, then the rest of the
    // left run, then the rest of the right run
    let mut merged: Vec<i64> = Vec::with_capacity(l.len() + r.len());
    let (mut i, mut j) = (0, 0);
    while i < l.len() && j < r.len() {
        let k = left + merged.len();
        let take_left = l[i] <= r[j];
        let verdict = if take_left {
            format!("{} <= {}, take {} from the left run", l[i], r[j], l[i])
        } else {
            format!("{} > {}, take {} from the right run", l[i], r[j], r[j])
        };
        let step = s
            .step(format!("Compare {} and {}: {verdict}", l[i], r[j]))
            .mark(Role::Current, k)
            .mark(Role::Comparing, k + l.len() - i)
            .mark_all(Role::Visited, left..=right)
            .line(line::COMPARE);
        s.push(step);

        let (value, code) = if take_left {
            i += 1;
            (l[i - 1], line::TAKE_LEFT)
        } else {
            j += 1;
            (r[j - 1], line::TAKE_RIGHT)
        };
        merged.push(value);
        lay_out(&mut s.arr[left..=right], [merged.as_slice(), &l[i..], &r[j..]]);
        let step = s
            .step(format!("Write {value} to index {k}"))
            .mark(Role::Swapping, k)
            .mark_all(Role::Visited, left..=right)
            .line(code);
        s.push(step);
    }

    for (rest, code) in [(&l[i..], line::REST_LEFT), (&r[j..], line::REST_RIGHT)] {
        for &value in rest {
            let k = left + merged.len();
            merged.push(value);
            s.arr[k] = value;
            let step = s
                .step(format!("Copy remaining {value} to index {k}"))
                .mark(Role::Swapping, k)
                .mark_all(Role::Visited, left..=right)
                .line(code);
            s.push(step);
        }
    }

    s.sorted.extend(left..=right);
    let step = s
        .step(format!(
            "Merged [{left}..={right}]: {}",
            fmt_list(&s.arr[left..=right])
        ))
        .line(line::MERGED);
    s.push(step);
}

fn lay_out(slots: &mut [i64], parts: [&[i64]; 3]) {
    for (slot, &value) in slots.iter_mut().zip(parts.into_iter().flatten()) {
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn final_values(seq: &StepSequence) -> Vec<i64> {
        seq.last().unwrap().values()
    }

    #[test]
    fn test_bubble_sort_scenario() {
        let seq = bubble_sort(&[5, 3, 4, 1, 2]);
        assert_eq!(final_values(&seq), vec![1, 2, 3, 4, 5]);
        let last = seq.last().unwrap();
        let sorted = last.auxiliary().unwrap().sorted_indices().unwrap();
        assert_eq!(sorted.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
        assert_eq!(seq.first().unwrap().values(), vec![5, 3, 4, 1, 2]);
    }

    #[test]
    fn test_bubble_sort_compare_count() {
        // n(n-1)/2 comparisons without the early-exit shortcut
        let seq = bubble_sort(&[5, 3, 4, 1, 2]);
        let compares = seq
            .iter()
            .filter(|s| s.indices_with(Role::Comparing).len() == 2)
            .count();
        assert_eq!(compares, 10);
    }

    #[test]
    fn test_bubble_sort_makes_every_pass_on_sorted_input() {
        let seq = bubble_sort(&[1, 2, 3, 4, 5]);
        let compares = seq
            .iter()
            .filter(|s| s.indices_with(Role::Comparing).len() == 2)
            .count();
        assert_eq!(compares, 10);
    }

    #[test]
    fn test_each_sort_orders_input() {
        let input = [9, -2, 7, 7, 0, 3, 11, -5];
        let mut expected = input.to_vec();
        expected.sort();
        for generate in [bubble_sort, insertion_sort, quick_sort, merge_sort] {
            assert_eq!(final_values(&generate(&input)), expected);
        }
    }

    #[test]
    fn test_sorted_set_only_grows() {
        for generate in [bubble_sort, insertion_sort, quick_sort, merge_sort] {
            let seq = generate(&[4, 1, 3, 9, 2, 8]);
            let mut prev = BTreeSet::new();
            for step in &seq {
                let sorted = step.auxiliary().unwrap().sorted_indices().unwrap();
                assert!(prev.is_subset(sorted));
                prev = sorted.clone();
            }
            assert_eq!(prev.len(), 6);
        }
    }

    #[test]
    fn test_empty_and_single() {
        for generate in [bubble_sort, insertion_sort, quick_sort, merge_sort] {
            let empty = generate(&[]);
            assert_eq!(empty.len(), 2);
            assert!(empty.last().unwrap().description().contains("empty"));

            let single = generate(&[42]);
            assert_eq!(final_values(&single), vec![42]);
        }
    }

    #[test]
    fn test_quick_sort_marks_pivot() {
        let seq = quick_sort(&[3, 1, 2]);
        assert!(seq.iter().any(|s| s.indices_with(Role::Pivot) == vec![2]));
    }

    #[test]
    fn test_merge_compare_marks_both_run_heads() {
        let seq = merge_sort(&[2, 5, 1, 3]);
        let step = seq
            .iter()
            .find(|s| s.description().starts_with("Compare 2 and 3"))
            .unwrap();
        assert_eq!(step.values(), vec![1, 2, 5, 3]);
        assert_eq!(step.indices_with(Role::Current), vec![1]);
        assert_eq!(step.indices_with(Role::Comparing), vec![3]);
    }

    #[test]
    fn test_merge_steps_never_lose_values() {
        let input = [7, 3, 9, 1, 4, 4, 8, 2];
        let mut expected = input.to_vec();
        expected.sort_unstable();
        for step in merge_sort(&input).iter() {
            let mut values = step.values();
            values.sort_unstable();
            assert_eq!(values, expected, "at {:?}", step.description());
        }
    }

    #[test]
    fn test_merge_sort_has_divide_steps() {
        let seq = merge_sort(&[4, 3, 2, 1]);
        let splits = seq
            .iter()
            .filter(|s| s.description().starts_with("Split"))
            .count();
        assert_eq!(splits, 3);
    }
}
