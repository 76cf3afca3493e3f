//! Search walkthroughs: linear, binary, jump, interpolation and exponential
//!
//! Probe steps mark the probed index `Comparing` and carry the live inclusive
//! bounds in [`Auxiliary::Search`]. A match ends the sequence with a `Found`
//! step; otherwise the last step reports the miss and no step marks `Found`.

use super::{fmt_list, Trace};
use crate::step::{Auxiliary, Role, StepBuilder, StepSequence};

struct Searcher {
    arr: Vec<i64>,
    target: i64,
    trace: Trace,
}

impl Searcher {
    fn new(arr: Vec<i64>, target: i64) -> Self {
        Searcher {
            arr,
            target,
            trace: Trace::new(),
        }
    }

    /// Sorted private copy of `input`
    fn sorted(input: &[i64], target: i64) -> Self {
        let mut arr = input.to_vec();
        arr.sort_unstable();
        Self::new(arr, target)
    }

    fn bounds(&self, low: isize, high: isize) -> (Option<usize>, Option<usize>) {
        if low <= high && low >= 0 && (high as usize) < self.arr.len() {
            (Some(low as usize), Some(high as usize))
        } else {
            (None, None)
        }
    }

    fn step(&self, description: impl Into<String>, low: isize, high: isize) -> StepBuilder {
        let (low, high) = self.bounds(low, high);
        StepBuilder::new(description)
            .numbers(&self.arr)
            .auxiliary(Auxiliary::Search {
                target: self.target,
                low,
                high,
            })
    }

    fn full_range(&self) -> (isize, isize) {
        (0, self.arr.len() as isize - 1)
    }

    fn found(mut self, index: usize, line: usize) -> StepSequence {
        let step = self
            .step(
                format!("Found {} at index {index}", self.target),
                index as isize,
                index as isize,
            )
            .mark(Role::Found, index)
            .line(line);
        self.trace.push(step);
        self.trace.finish()
    }

    fn not_found(mut self, line: usize) -> StepSequence {
        let description = if self.arr.is_empty() {
            format!("The array is empty: {} not found", self.target)
        } else {
            format!("{} not found in the array", self.target)
        };
        let step = self.step(description, 0, -1).line(line);
        self.trace.push(step);
        self.trace.finish()
    }

    fn push(&mut self, builder: StepBuilder) {
        self.trace.push(builder);
    }
}

/// Line numbers for one halving loop
struct HalvingLines {
    probe: usize,
    go_right: usize,
    go_left: usize,
}

/// Classic halving loop over `left..=right`; returns the match index
fn halving(s: &mut Searcher, mut left: isize, mut right: isize, lines: &HalvingLines) -> Option<usize> {
    let target = s.target;
    while left <= right {
        let mid = left + (right - left) / 2;
        let m = mid as usize;
        let value = s.arr[m];
        let verdict = if value == target {
            "match".to_string()
        } else if value < target {
            format!("{value} < {target}")
        } else {
            format!("{value} > {target}")
        };
        let step = s
            .step(
                format!("Probe middle index {m} in [{left}..={right}]: {verdict}"),
                left,
                right,
            )
            .mark(Role::Comparing, m)
            .line(lines.probe);
        s.push(step);

        if value == target {
            return Some(m);
        }
        let (description, line) = if value < target {
            left = mid + 1;
            (format!("Discard the left half; search [{left}..={right}]"), lines.go_right)
        } else {
            right = mid - 1;
            (format!("Discard the right half; search [{left}..={right}]"), lines.go_left)
        };
        let step = s.step(description, left, right).line(line);
        s.push(step);
    }
    None
}

mod linear_line {
    pub const START: usize = 1;
    pub const COMPARE: usize = 3;
    pub const FOUND: usize = 4;
    pub const NOT_FOUND: usize = 7;
}

pub fn linear_search(input: &[i64], target: i64) -> StepSequence {
    use linear_line as line;

    let mut s = Searcher::new(input.to_vec(), target);
    let (low, high) = s.full_range();
    let step = s
        .step(
            format!("Search for {target} in {} one element at a time", fmt_list(&s.arr)),
            low,
            high,
        )
        .line(line::START);
    s.push(step);

    for i in 0..s.arr.len() {
        let value = s.arr[i];
        let verdict = if value == target {
            format!("{value} == {target}")
        } else {
            format!("{value} != {target}, move on")
        };
        let step = s
            .step(format!("Check index {i}: {verdict}"), i as isize, high)
            .mark(Role::Comparing, i)
            .mark_all(Role::Visited, 0..i)
            .line(line::COMPARE);
        s.push(step);
        if value == target {
            return s.found(i, line::FOUND);
        }
    }

    s.not_found(line::NOT_FOUND)
}

mod binary_line {
    pub const START: usize = 1;
    pub const PROBE: usize = 5;
    pub const FOUND: usize = 6;
    pub const GO_RIGHT: usize = 8;
    pub const GO_LEFT: usize = 10;
    pub const NOT_FOUND: usize = 13;
}

const BINARY_LINES: HalvingLines = HalvingLines {
    probe: binary_line::PROBE,
    go_right: binary_line::GO_RIGHT,
    go_left: binary_line::GO_LEFT,
};

pub fn binary_search(input: &[i64], target: i64) -> StepSequence {
    let mut s = Searcher::sorted(input, target);
    let (low, high) = s.full_range();
    let step = s
        .step(
            format!(
                "Binary search needs sorted input; searching the sorted copy {} for {target}",
                fmt_list(&s.arr)
            ),
            low,
            high,
        )
        .line(binary_line::START);
    s.push(step);

    match halving(&mut s, low, high, &BINARY_LINES) {
        Some(index) => s.found(index, binary_line::FOUND),
        None => s.not_found(binary_line::NOT_FOUND),
    }
}

mod jump_line {
    pub const BLOCK: usize = 2;
    pub const PROBE: usize = 6;
    pub const SCAN: usize = 12;
    pub const FOUND: usize = 13;
    pub const NOT_FOUND: usize = 16;
}

pub fn jump_search(input: &[i64], target: i64) -> StepSequence {
    use jump_line as line;

    let mut s = Searcher::sorted(input, target);
    let n = s.arr.len();
    let block = ((n as f64).sqrt() as usize).max(1);
    let (low, high) = s.full_range();
    let step = s
        .step(
            format!(
                "Jump search needs sorted input; searching the sorted copy {} for {target} in blocks of {block}",
                fmt_list(&s.arr)
            ),
            low,
            high,
        )
        .line(line::BLOCK);
    s.push(step);

    let (mut prev, mut next) = (0, block);
    while next < n {
        let value = s.arr[next];
        let ahead = value <= target;
        let verdict = if ahead {
            format!("{value} <= {target}, jump to index {}", next)
        } else {
            format!("{value} > {target}, the target lies in this block")
        };
        let step = s
            .step(
                format!("Probe block end at index {next}: {verdict}"),
                prev as isize,
                next as isize,
            )
            .mark(Role::Comparing, next)
            .line(line::PROBE);
        s.push(step);
        if !ahead {
            break;
        }
        prev = next;
        next += block;
    }

    let end = next.min(n);
    for i in prev..end {
        let value = s.arr[i];
        let verdict = if value == target {
            format!("{value} == {target}")
        } else {
            format!("{value} != {target}")
        };
        let step = s
            .step(
                format!("Scan index {i} of block [{prev}..{end}): {verdict}"),
                i as isize,
                end as isize - 1,
            )
            .mark(Role::Comparing, i)
            .line(line::SCAN);
        s.push(step);
        if value == target {
            return s.found(i, line::FOUND);
        }
    }

    s.not_found(line::NOT_FOUND)
}

mod interpolation_line {
    pub const START: usize = 1;
    pub const PROBE: usize = 7;
    pub const FOUND: usize = 11;
    pub const GO_RIGHT: usize = 13;
    pub const GO_LEFT: usize = 15;
    pub const NOT_FOUND: usize = 18;
}

pub fn interpolation_search(input: &[i64], target: i64) -> StepSequence {
    use interpolation_line as line;

    let mut s = Searcher::sorted(input, target);
    let (mut low, mut high) = s.full_range();
    let step = s
        .step(
            format!(
                "Interpolation search needs sorted input; searching the sorted copy {} for {target}",
                fmt_list(&s.arr)
            ),
            low,
            high,
        )
        .line(line::START);
    s.push(step);

    while low <= high && target >= s.arr[low as usize] && target <= s.arr[high as usize] {
        let (lo, hi) = (s.arr[low as usize], s.arr[high as usize]);
        let pos = if hi == lo {
            low
        } else {
            // Widened so large gaps cannot overflow
            let offset = (i128::from(target) - i128::from(lo)) * i128::from((high - low) as i64)
                / (i128::from(hi) - i128::from(lo));
            low + offset as isize
        };
        let p = pos as usize;
        let value = s.arr[p];
        let verdict = if value == target {
            "match".to_string()
        } else if value < target {
            format!("{value} < {target}")
        } else {
            format!("{value} > {target}")
        };
        let step = s
            .step(
                format!("Estimate position {p} from values {lo}..{hi}: {verdict}"),
                low,
                high,
            )
            .mark(Role::Comparing, p)
            .line(line::PROBE);
        s.push(step);

        if value == target {
            return s.found(p, line::FOUND);
        }
        let (description, code) = if value < target {
            low = pos + 1;
            (format!("Move low to {low}"), line::GO_RIGHT)
        } else {
            high = pos - 1;
            (format!("Move high to {high}"), line::GO_LEFT)
        };
        let step = s.step(description, low, high).line(code);
        s.push(step);
    }

    s.not_found(line::NOT_FOUND)
}

mod exponential_line {
    pub const START: usize = 0;
    pub const FIRST: usize = 1;
    pub const FIRST_FOUND: usize = 2;
    pub const DOUBLE: usize = 6;
    pub const RANGE: usize = 10;
    pub const PROBE: usize = 14;
    pub const FOUND: usize = 15;
    pub const GO_RIGHT: usize = 17;
    pub const GO_LEFT: usize = 19;
    pub const NOT_FOUND: usize = 22;
}

pub fn exponential_search(input: &[i64], target: i64) -> StepSequence {
    use exponential_line as line;

    let mut s = Searcher::sorted(input, target);
    let n = s.arr.len();
    let (low, high) = s.full_range();
    let step = s
        .step(
            format!(
                "Exponential search needs sorted input; searching the sorted copy {} for {target}",
                fmt_list(&s.arr)
            ),
            low,
            high,
        )
        .line(line::START);
    s.push(step);

    if n == 0 {
        return s.not_found(line::NOT_FOUND);
    }

    let first = s.arr[0];
    let verdict = if first == target {
        format!("{first} == {target}")
    } else {
        format!("{first} != {target}")
    };
    let step = s
        .step(format!("Check the first element: {verdict}"), low, high)
        .mark(Role::Comparing, 0)
        .line(line::FIRST);
    s.push(step);
    if first == target {
        return s.found(0, line::FIRST_FOUND);
    }

    let mut bound = 1;
    while bound < n {
        let value = s.arr[bound];
        let grow = value <= target;
        let verdict = if grow {
            format!("{value} <= {target}, double the bound to {}", bound * 2)
        } else {
            format!("{value} > {target}, stop doubling")
        };
        let step = s
            .step(
                format!("Probe bound {bound}: {verdict}"),
                (bound / 2) as isize,
                bound as isize,
            )
            .mark(Role::Comparing, bound)
            .line(line::DOUBLE);
        s.push(step);
        if !grow {
            break;
        }
        bound *= 2;
    }

    let left = (bound / 2) as isize;
    let right = bound.min(n) as isize - 1;
    let step = s
        .step(format!("Binary search inside [{left}..={right}]"), left, right)
        .line(line::RANGE);
    s.push(step);

    let lines = HalvingLines {
        probe: line::PROBE,
        go_right: line::GO_RIGHT,
        go_left: line::GO_LEFT,
    };
    match halving(&mut s, left, right, &lines) {
        Some(index) => s.found(index, line::FOUND),
        None => s.not_found(line::NOT_FOUND),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [fn(&[i64], i64) -> StepSequence; 5] = [
        linear_search,
        binary_search,
        jump_search,
        interpolation_search,
        exponential_search,
    ];

    fn found_at(seq: &StepSequence) -> Option<usize> {
        seq.iter()
            .find_map(|s| s.indices_with(Role::Found).first().copied())
    }

    #[test]
    fn test_binary_search_scenario() {
        let seq = binary_search(&[1, 3, 5, 7, 9, 11, 13, 15, 17], 11);
        assert_eq!(found_at(&seq), Some(5));
        assert_eq!(seq.last().unwrap().values()[5], 11);
    }

    #[test]
    fn test_linear_search_miss_scenario() {
        let seq = linear_search(&[4, 2, 9], 7);
        let probes: Vec<usize> = seq
            .iter()
            .flat_map(|s| s.indices_with(Role::Comparing))
            .collect();
        assert_eq!(probes, vec![0, 1, 2]);
        assert!(seq.last().unwrap().description().contains("not found"));
        assert_eq!(found_at(&seq), None);
    }

    #[test]
    fn test_every_search_finds_present_targets() {
        let input = [21, 4, 17, 8, 1, 13, 30, 2, 9];
        let mut sorted = input.to_vec();
        sorted.sort();
        for search in ALL {
            for &target in &input {
                let seq = search(&input, target);
                let idx = found_at(&seq).expect("target should be found");
                assert_eq!(seq.last().unwrap().values()[idx], target);
                assert!(seq.last().unwrap().has_role(Role::Found));
            }
        }
    }

    #[test]
    fn test_every_search_reports_misses() {
        for search in ALL {
            for target in [-3, 5, 100] {
                let seq = search(&[1, 2, 4, 8, 16], target);
                assert_eq!(found_at(&seq), None);
                assert!(seq.last().unwrap().description().contains("not found"));
            }
        }
    }

    #[test]
    fn test_empty_input() {
        for search in ALL {
            let seq = search(&[], 3);
            assert!(seq.len() >= 2);
            assert!(seq.last().unwrap().description().contains("empty"));
        }
    }

    #[test]
    fn test_sorting_precondition_documented() {
        let seq = jump_search(&[5, 1, 3], 3);
        let first = seq.first().unwrap();
        assert!(first.description().contains("sorted"));
        assert_eq!(first.values(), vec![1, 3, 5]);
    }

    #[test]
    fn test_interpolation_handles_equal_endpoints() {
        let seq = interpolation_search(&[7, 7, 7], 7);
        assert!(found_at(&seq).is_some());
    }
}
