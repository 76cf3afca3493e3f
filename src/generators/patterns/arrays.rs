//! Array-walk patterns: windows, pointers, running sums, counting, greedy
//! choice and bit tricks.

use crate::fixtures::{ArrayFixture, CoinFixture, TextWindowFixture, WindowFixture};
use crate::generators::{fmt_list, Trace};
use crate::step::{Auxiliary, Element, Role, StepBuilder, StepSequence};
use std::collections::BTreeMap;

fn bars(values: &[i64], description: String) -> StepBuilder {
    StepBuilder::new(description).numbers(values)
}

mod window_line {
    pub const INIT: usize = 1;
    pub const SLIDE: usize = 5;
    pub const BEST: usize = 6;
}

/// Maximum sum over every window of `k` consecutive values
pub fn sliding_window(fixture: &WindowFixture) -> StepSequence {
    use window_line as line;

    let WindowFixture { values, k } = fixture;
    let (n, k) = (values.len(), *k);
    let mut trace = Trace::new();

    if k == 0 || k > n {
        trace.push(bars(values, format!("Find the largest sum of {k} consecutive values in {}", fmt_list(values))));
        trace.push(bars(values, format!("A window of {k} does not fit in {n} value(s)")));
        return trace.finish();
    }

    let aux = |start: usize, window_sum: i64, max_sum: i64| Auxiliary::SlidingWindow {
        start,
        end: start + k - 1,
        window_sum,
        max_sum,
    };

    let mut window_sum: i64 = values[..k].iter().sum();
    let mut max_sum = window_sum;
    let mut best = 0;
    trace.push(
        bars(values, format!("First window [0..={}] sums to {window_sum}", k - 1))
            .mark_all(Role::Current, 0..k)
            .auxiliary(aux(0, window_sum, max_sum))
            .line(line::INIT),
    );

    for i in k..n {
        let start = i + 1 - k;
        window_sum += values[i] - values[i - k];
        let improved = window_sum > max_sum;
        let verdict = if improved {
            max_sum = window_sum;
            best = start;
            format!("new max {max_sum}")
        } else {
            format!("max stays {max_sum}")
        };
        trace.push(
            bars(
                values,
                format!(
                    "Slide: drop {}, add {}; window sum {window_sum}, {verdict}",
                    values[i - k],
                    values[i]
                ),
            )
            .mark_all(Role::Current, start..=i)
            .mark(Role::Comparing, i)
            .mark(Role::Visited, i - k)
            .auxiliary(aux(start, window_sum, max_sum))
            .line(if improved { line::BEST } else { line::SLIDE }),
        );
    }

    trace.push(
        bars(
            values,
            format!(
                "Maximum sum of {k} consecutive values is {max_sum}, window [{best}..={}]",
                best + k - 1
            ),
        )
        .mark_all(Role::Found, best..best + k)
        .auxiliary(aux(best, max_sum, max_sum)),
    );
    trace.finish()
}

mod pair_line {
    pub const INIT: usize = 1;
    pub const SUM: usize = 3;
    pub const FOUND: usize = 5;
    pub const LEFT: usize = 7;
    pub const RIGHT: usize = 9;
    pub const NONE: usize = 12;
}

/// Pair summing to the target in a sorted array, pointers closing inward
pub fn two_pointers(fixture: &ArrayFixture) -> StepSequence {
    use pair_line as line;

    let ArrayFixture { values, target } = fixture;
    let target = *target;
    let mut trace = Trace::new();
    let n = values.len();

    if n < 2 {
        trace.push(bars(values, format!("Find a pair summing to {target} in {}", fmt_list(values))));
        trace.push(bars(values, "Fewer than two values: no pair exists".to_string()));
        return trace.finish();
    }

    let aux = |left: usize, right: usize, sum: Option<i64>| Auxiliary::TwoPointer {
        left,
        right,
        sum,
        target,
    };

    let (mut left, mut right) = (0, n - 1);
    trace.push(
        bars(
            values,
            format!("Find a pair summing to {target}: left starts at 0, right at {right}"),
        )
        .mark(Role::Current, left)
        .mark(Role::Current, right)
        .auxiliary(aux(left, right, None))
        .line(line::INIT),
    );

    while left < right {
        let sum = values[left] + values[right];
        trace.push(
            bars(
                values,
                format!("{} + {} = {sum}", values[left], values[right]),
            )
            .mark(Role::Comparing, left)
            .mark(Role::Comparing, right)
            .auxiliary(aux(left, right, Some(sum)))
            .line(line::SUM),
        );

        if sum == target {
            trace.push(
                bars(
                    values,
                    format!("Found {} + {} = {target} at indices {left} and {right}", values[left], values[right]),
                )
                .mark(Role::Found, left)
                .mark(Role::Found, right)
                .auxiliary(aux(left, right, Some(sum))),
            );
            return trace.finish();
        }
        let (description, code) = if sum < target {
            left += 1;
            (format!("{sum} < {target}: move left to index {left}"), line::LEFT)
        } else {
            right -= 1;
            (format!("{sum} > {target}: move right to index {right}"), line::RIGHT)
        };
        trace.push(
            bars(values, description)
                .mark(Role::Current, left)
                .mark(Role::Current, right)
                .auxiliary(aux(left, right, Some(sum)))
                .line(code),
        );
    }

    trace.push(
        bars(values, format!("The pointers met: no pair sums to {target}"))
            .auxiliary(aux(left, right, None))
            .line(line::NONE),
    );
    trace.finish()
}

mod prefix_line {
    pub const INIT: usize = 1;
    pub const ADD: usize = 4;
    pub const LOOKUP: usize = 6;
    pub const MATCH: usize = 7;
}

/// Count subarrays summing to the target using running prefix sums
pub fn prefix_sum(fixture: &ArrayFixture) -> StepSequence {
    use prefix_line as line;

    let ArrayFixture { values, target } = fixture;
    let target = *target;
    let mut trace = Trace::new();

    let mut seen: BTreeMap<i64, usize> = BTreeMap::from([(0, 1)]);
    // history[j] is the prefix sum of values[..j]
    let mut history: Vec<i64> = vec![0];
    let (mut sum, mut count) = (0_i64, 0_usize);

    let aux = |sum: i64, seen: &BTreeMap<i64, usize>, count: usize| Auxiliary::PrefixSum {
        current_sum: sum,
        target_sum: target,
        prefix_sums: seen.clone(),
        count,
    };

    trace.push(
        bars(
            values,
            format!("Count subarrays of {} summing to {target}; prefix 0 seen once", fmt_list(values)),
        )
        .auxiliary(aux(sum, &seen, count))
        .line(line::INIT),
    );

    for (i, &value) in values.iter().enumerate() {
        sum += value;
        trace.push(
            bars(values, format!("Add {value}: running sum is {sum}"))
                .mark(Role::Current, i)
                .auxiliary(aux(sum, &seen, count))
                .line(line::ADD),
        );

        let need = sum - target;
        let hits = seen.get(&need).copied().unwrap_or(0);
        count += hits;
        *seen.entry(sum).or_insert(0) += 1;
        let starts: Vec<usize> = history
            .iter()
            .enumerate()
            .filter(|(_, p)| **p == need)
            .map(|(j, _)| j)
            .collect();
        history.push(sum);

        let mut step = match starts.as_slice() {
            [] => bars(
                values,
                format!("No earlier prefix equals {sum} - {target} = {need}; record prefix {sum}"),
            )
            .mark(Role::Comparing, i)
            .line(line::LOOKUP),
            [j] => bars(
                values,
                format!(
                    "Prefix {need} seen once: subarray [{j}..={i}] sums to {target}; count is {count}"
                ),
            )
            .mark_all(Role::Found, *j..=i)
            .line(line::MATCH),
            [first, ..] => {
                let ranges: Vec<String> = starts.iter().map(|j| format!("[{j}..={i}]")).collect();
                bars(
                    values,
                    format!(
                        "Prefix {need} seen {hits} times: subarrays {} sum to {target}; count is {count}",
                        ranges.join(", ")
                    ),
                )
                .mark_all(Role::Found, *first..=i)
                .mark_all(Role::Current, starts.iter().copied())
                .line(line::MATCH)
            }
        };
        step = step.auxiliary(aux(sum, &seen, count));
        trace.push(step);
    }

    trace.push(
        bars(values, format!("{count} subarray(s) sum to {target}")).auxiliary(aux(sum, &seen, count)),
    );
    trace.finish()
}

mod freq_line {
    pub const INIT: usize = 1;
    pub const COUNT: usize = 8;
    pub const DUPLICATE: usize = 6;
}

/// Find repeated values with a frequency map
pub fn hash_map(fixture: &ArrayFixture) -> StepSequence {
    use freq_line as line;

    let values = &fixture.values;
    let mut trace = Trace::new();
    let mut freq: BTreeMap<i64, usize> = BTreeMap::new();
    let mut duplicates: Vec<i64> = Vec::new();
    let mut repeats: Vec<usize> = Vec::new();

    let aux = |freq: &BTreeMap<i64, usize>, duplicates: &[i64]| Auxiliary::Frequency {
        freq_map: freq.clone(),
        duplicates: duplicates.to_vec(),
    };

    trace.push(
        bars(values, format!("Count each value of {} in a hash map", fmt_list(values)))
            .auxiliary(aux(&freq, &duplicates))
            .line(line::INIT),
    );

    for (i, &value) in values.iter().enumerate() {
        let seen = freq.entry(value).or_insert(0);
        let before = *seen;
        *seen += 1;
        let (description, code) = if before == 1 {
            duplicates.push(value);
            repeats.push(i);
            (
                format!("{value} was seen once before: it is a duplicate"),
                line::DUPLICATE,
            )
        } else {
            (
                format!("{value} now seen {} time(s)", before + 1),
                line::COUNT,
            )
        };
        trace.push(
            bars(values, description)
                .mark(Role::Current, i)
                .mark_all(Role::Found, repeats.iter().copied())
                .auxiliary(aux(&freq, &duplicates))
                .line(code),
        );
    }

    let description = if duplicates.is_empty() {
        "No value repeats".to_string()
    } else {
        format!("Duplicates: {}", fmt_list(&duplicates))
    };
    trace.push(
        bars(values, description)
            .mark_all(Role::Found, repeats.iter().copied())
            .auxiliary(aux(&freq, &duplicates)),
    );
    trace.finish()
}

mod distinct_line {
    pub const INIT: usize = 2;
    pub const EXPAND: usize = 4;
    pub const SHRINK: usize = 12;
    pub const BEST: usize = 14;
}

/// Longest window of the text holding at most `k` distinct characters
pub fn variable_sliding_window(fixture: &TextWindowFixture) -> StepSequence {
    use distinct_line as line;

    let chars: Vec<String> = fixture.text.chars().map(|c| c.to_string()).collect();
    let k = fixture.k;
    let n = chars.len();
    let elements: Vec<Element> = chars.iter().map(|c| Element::new(c.as_str())).collect();
    let cells = |description: String| StepBuilder::new(description).elements(elements.clone());
    let mut trace = Trace::new();

    if n == 0 || k == 0 {
        trace.push(cells(format!(
            "Find the longest window of {:?} with at most {k} distinct characters",
            fixture.text
        )));
        trace.push(cells("No window can qualify: the text is empty or k is 0".to_string()));
        return trace.finish();
    }

    let aux = |left: usize, right: usize, counts: &BTreeMap<String, usize>, best| Auxiliary::VariableWindow {
        left,
        right,
        k,
        counts: counts.clone(),
        best,
    };

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut left = 0;
    let mut best: Option<(usize, usize)> = None;

    trace.push(
        cells(format!(
            "Find the longest window of {:?} with at most {k} distinct characters",
            fixture.text
        ))
        .auxiliary(aux(0, 0, &counts, best))
        .line(line::INIT),
    );

    for right in 0..n {
        *counts.entry(chars[right].clone()).or_insert(0) += 1;
        trace.push(
            cells(format!(
                "Add {:?} at index {right}: {} distinct",
                chars[right],
                counts.len()
            ))
            .mark_all(Role::Current, left..=right)
            .mark(Role::Comparing, right)
            .auxiliary(aux(left, right, &counts, best))
            .line(line::EXPAND),
        );

        while counts.len() > k {
            let dropped = chars[left].clone();
            if let Some(c) = counts.get_mut(&dropped) {
                *c -= 1;
                if *c == 0 {
                    counts.remove(&dropped);
                }
            }
            left += 1;
            trace.push(
                cells(format!(
                    "More than {k} distinct: drop {dropped:?} from the left, window starts at {left}"
                ))
                .mark_all(Role::Current, left..=right)
                .mark(Role::Visited, left - 1)
                .auxiliary(aux(left, right, &counts, best))
                .line(line::SHRINK),
            );
        }

        let longer = best.map_or(true, |(a, b)| right - left > b - a);
        if longer {
            best = Some((left, right));
            trace.push(
                cells(format!(
                    "New longest window [{left}..={right}] {:?}, length {}",
                    chars[left..=right].concat(),
                    right - left + 1
                ))
                .mark_all(Role::Found, left..=right)
                .auxiliary(aux(left, right, &counts, best))
                .line(line::BEST),
            );
        }
    }

    let (a, b) = best.unwrap_or((0, 0));
    trace.push(
        cells(format!(
            "Longest window with at most {k} distinct characters: {:?}, length {}",
            chars[a..=b].concat(),
            b - a + 1
        ))
        .mark_all(Role::Found, a..=b)
        .auxiliary(aux(left, n - 1, &counts, best)),
    );
    trace.finish()
}

mod greedy_line {
    pub const INIT: usize = 1;
    pub const CHECK: usize = 5;
    pub const TAKE: usize = 7;
}

/// Make change by always taking the largest coin that fits
pub fn greedy(fixture: &CoinFixture) -> StepSequence {
    use greedy_line as line;

    let CoinFixture { coins, amount } = fixture;
    let amount = *amount;
    let mut trace = Trace::new();
    let mut remaining = amount;
    let mut used: Vec<i64> = Vec::new();

    let aux = |remaining: i64, used: &[i64]| Auxiliary::Greedy {
        amount,
        remaining,
        used: used.to_vec(),
    };

    trace.push(
        bars(coins, format!("Make change for {amount} with coins {}", fmt_list(coins)))
            .auxiliary(aux(remaining, &used))
            .line(line::INIT),
    );

    for (i, &coin) in coins.iter().enumerate() {
        loop {
            // Non-positive coins never make progress
            let fits = coin > 0 && remaining >= coin;
            let verdict = if fits { "take it" } else { "move to the next coin" };
            trace.push(
                bars(coins, format!("Remaining {remaining}, coin {coin}: {verdict}"))
                    .mark(Role::Comparing, i)
                    .auxiliary(aux(remaining, &used))
                    .line(line::CHECK),
            );
            if !fits {
                break;
            }
            remaining -= coin;
            used.push(coin);
            trace.push(
                bars(coins, format!("Take {coin}; {remaining} left"))
                    .mark(Role::Current, i)
                    .auxiliary(aux(remaining, &used))
                    .line(line::TAKE),
            );
        }
    }

    let parts: Vec<String> = used.iter().map(|c| c.to_string()).collect();
    let description = if remaining == 0 {
        format!("{amount} = {} ({} coins)", parts.join(" + "), used.len())
    } else {
        format!("Exact change is impossible: {remaining} left over")
    };
    trace.push(bars(coins, description).auxiliary(aux(remaining, &used)));
    trace.finish()
}

mod bits_line {
    pub const INIT: usize = 1;
    pub const XOR: usize = 4;
}

/// XOR every value so that paired values cancel, leaving the single one
pub fn bit_manipulation(fixture: &ArrayFixture) -> StepSequence {
    use bits_line as line;

    let values = &fixture.values;
    let width = values
        .iter()
        .map(|v| 64 - v.leading_zeros() as usize)
        .max()
        .unwrap_or(1)
        .clamp(4, 64);
    let bin = |v: i64| format!("{:0width$b}", v, width = width);
    let mut trace = Trace::new();
    let mut acc = 0_i64;

    trace.push(
        bars(values, format!("XOR every value of {} into acc = 0", fmt_list(values)))
            .auxiliary(Auxiliary::Bits { acc, operand: None })
            .line(line::INIT),
    );

    for (i, &value) in values.iter().enumerate() {
        let next = acc ^ value;
        trace.push(
            bars(
                values,
                format!("{} ^ {} = {} ({next})", bin(acc), bin(value), bin(next)),
            )
            .mark(Role::Current, i)
            .auxiliary(Auxiliary::Bits {
                acc: next,
                operand: Some(value),
            })
            .line(line::XOR),
        );
        acc = next;
    }

    let matches: Vec<usize> = values
        .iter()
        .enumerate()
        .filter(|(_, v)| **v == acc)
        .map(|(i, _)| i)
        .collect();
    trace.push(
        bars(values, format!("Pairs cancel out: the single number is {acc}"))
            .mark_all(Role::Found, matches)
            .auxiliary(Auxiliary::Bits { acc, operand: None }),
    );
    trace.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sliding_window_max() {
        let seq = sliding_window(&WindowFixture::default());
        let last = seq.last().unwrap();
        assert!(last.description().contains("is 19"));
        assert_eq!(last.indices_with(Role::Found), vec![6, 7, 8]);
    }

    #[test]
    fn test_window_larger_than_input() {
        let seq = sliding_window(&WindowFixture {
            values: vec![1, 2],
            k: 3,
        });
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn test_two_pointers_pair() {
        let seq = two_pointers(&ArrayFixture::pair_sum());
        assert_eq!(seq.last().unwrap().indices_with(Role::Found), vec![0, 5]);
    }

    #[test]
    fn test_two_pointers_miss() {
        let seq = two_pointers(&ArrayFixture {
            values: vec![1, 2, 3],
            target: 100,
        });
        assert!(seq.last().unwrap().description().contains("no pair"));
    }

    #[test]
    fn test_prefix_sum_count() {
        let seq = prefix_sum(&ArrayFixture::subarray_sum());
        assert_eq!(seq.last().unwrap().description(), "1 subarray(s) sum to 10");
        assert!(seq
            .iter()
            .any(|s| s.indices_with(Role::Found) == vec![2, 3, 4]));
    }

    #[test]
    fn test_prefix_sum_marks_every_matching_start() {
        let fixture = ArrayFixture {
            values: vec![1, -1, 2],
            target: 2,
        };
        let seq = prefix_sum(&fixture);
        let step = seq
            .iter()
            .find(|s| s.description().starts_with("Prefix 0 seen"))
            .unwrap();
        assert_eq!(
            step.description(),
            "Prefix 0 seen 2 times: subarrays [0..=2], [2..=2] sum to 2; count is 2"
        );
        assert_eq!(step.indices_with(Role::Found), vec![0, 1, 2]);
        assert_eq!(step.indices_with(Role::Current), vec![0, 2]);
        assert_eq!(seq.last().unwrap().description(), "2 subarray(s) sum to 2");
    }

    #[test]
    fn test_hash_map_duplicates() {
        let seq = hash_map(&ArrayFixture::duplicates());
        assert_eq!(seq.last().unwrap().description(), "Duplicates: [2, 3]");
    }

    #[test]
    fn test_variable_window_best() {
        let seq = variable_sliding_window(&TextWindowFixture::default());
        let last = seq.last().unwrap();
        assert!(last.description().contains("\"cbebebc\", length 7"));
        assert_eq!(last.indices_with(Role::Found), (4..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_greedy_change() {
        let seq = greedy(&CoinFixture::default());
        assert_eq!(
            seq.last().unwrap().description(),
            "63 = 25 + 25 + 10 + 1 + 1 + 1 (6 coins)"
        );
    }

    #[test]
    fn test_single_number() {
        let seq = bit_manipulation(&ArrayFixture::single_number());
        let last = seq.last().unwrap();
        assert!(last.description().ends_with("is 4"));
        assert_eq!(last.indices_with(Role::Found), vec![0]);
    }
}
