//! Built-in descriptors, one list per family

use super::listings;
use super::{AlgorithmDescriptor, AlgorithmKind, Category, Difficulty, PatternGuide};
use crate::fixtures::{
    ArrayFixture, CoinFixture, FibFixture, GraphFixture, GridFixture, ListFixture,
    TextWindowFixture, UnionFixture, WindowFixture,
};
use crate::generators::{graph, grid, linked_list, patterns, searching, sorting};
use crate::step::StepSequence;

pub(super) fn builtin() -> Vec<AlgorithmDescriptor> {
    let mut all = sorting_family();
    all.extend(searching_family());
    all.extend(graph_family());
    all.extend(structure_family());
    all.extend(pattern_family());
    all
}

fn sorting_family() -> Vec<AlgorithmDescriptor> {
    vec![
        sort(
            "bubble",
            "Bubble Sort",
            "Sweeps the array repeatedly, swapping adjacent elements that are out of order; each pass settles the largest remaining value at the end.",
            "O(n²)",
            "O(1)",
            sorting::bubble_sort,
            listings::BUBBLE_SORT,
        ),
        sort(
            "insertion",
            "Insertion Sort",
            "Grows a sorted prefix by shifting each new element left into place.",
            "O(n²) average and worst, O(n) best",
            "O(1)",
            sorting::insertion_sort,
            listings::INSERTION_SORT,
        ),
        sort(
            "quick",
            "Quick Sort",
            "Partitions around a pivot, then sorts each side recursively.",
            "O(n log n) average, O(n²) worst",
            "O(log n)",
            sorting::quick_sort,
            listings::QUICK_SORT,
        ),
        sort(
            "merge",
            "Merge Sort",
            "Splits the array in halves, sorts each half and merges the sorted runs.",
            "O(n log n)",
            "O(n)",
            sorting::merge_sort,
            listings::MERGE_SORT,
        ),
    ]
}

fn searching_family() -> Vec<AlgorithmDescriptor> {
    vec![
        search(
            "linear",
            "Linear Search",
            "Checks every element in turn until the target turns up.",
            "O(n)",
            "O(1)",
            searching::linear_search,
            listings::LINEAR_SEARCH,
        ),
        search(
            "binary",
            "Binary Search",
            "Halves a sorted range around its middle element until the target is found or the range is empty.",
            "O(log n)",
            "O(1)",
            searching::binary_search,
            listings::BINARY_SEARCH,
        ),
        search(
            "jump",
            "Jump Search",
            "Jumps ahead in blocks of √n over a sorted array, then scans the block that may hold the target.",
            "O(√n)",
            "O(1)",
            searching::jump_search,
            listings::JUMP_SEARCH,
        ),
        search(
            "interpolation",
            "Interpolation Search",
            "Estimates the target's position from the values at the range ends of a sorted array.",
            "O(log log n)",
            "O(1)",
            searching::interpolation_search,
            listings::INTERPOLATION_SEARCH,
        ),
        search(
            "exponential",
            "Exponential Search",
            "Doubles a bound until it passes the target, then binary searches the last range.",
            "O(log n)",
            "O(1)",
            searching::exponential_search,
            listings::EXPONENTIAL_SEARCH,
        ),
    ]
}

fn graph_family() -> Vec<AlgorithmDescriptor> {
    vec![
        AlgorithmDescriptor {
            id: "dijkstra",
            name: "Dijkstra's Algorithm",
            description: "Finalizes the closest unfinished node each round and relaxes its edges to find shortest paths.",
            time_complexity: "O(V² + E)",
            space_complexity: "O(V)",
            category: Category::Graph,
            kind: AlgorithmKind::Demo(|| graph::dijkstra(&GraphFixture::weighted())),
            code: listings::DIJKSTRA,
            guide: None,
        },
        AlgorithmDescriptor {
            id: "bfs",
            name: "Breadth-First Search",
            description: "Visits nodes level by level from the start using a queue.",
            time_complexity: "O(V + E)",
            space_complexity: "O(V)",
            category: Category::Graph,
            kind: AlgorithmKind::Demo(|| graph::bfs(&GraphFixture::tree())),
            code: listings::BFS,
            guide: None,
        },
        AlgorithmDescriptor {
            id: "dfs",
            name: "Depth-First Search",
            description: "Follows each branch as deep as it goes before backtracking.",
            time_complexity: "O(V + E)",
            space_complexity: "O(V)",
            category: Category::Graph,
            kind: AlgorithmKind::Demo(|| graph::dfs(&GraphFixture::tree())),
            code: listings::DFS,
            guide: None,
        },
    ]
}

fn structure_family() -> Vec<AlgorithmDescriptor> {
    vec![
        AlgorithmDescriptor {
            id: "cycle-detection",
            name: "Cycle Detection",
            description: "Floyd's tortoise and hare: a slow and a fast pointer meet only if the list loops.",
            time_complexity: "O(n)",
            space_complexity: "O(1)",
            category: Category::LinkedList,
            kind: AlgorithmKind::Demo(|| linked_list::cycle_detection(&ListFixture::default())),
            code: listings::CYCLE_DETECTION,
            guide: None,
        },
        AlgorithmDescriptor {
            id: "number-of-islands",
            name: "Number of Islands",
            description: "Counts groups of connected land cells by flooding each island once it is found.",
            time_complexity: "O(M×N)",
            space_complexity: "O(M×N)",
            category: Category::Grid,
            kind: AlgorithmKind::Demo(|| grid::number_of_islands(&GridFixture::default())),
            code: listings::NUMBER_OF_ISLANDS,
            guide: None,
        },
    ]
}

fn pattern_family() -> Vec<AlgorithmDescriptor> {
    vec![
        pattern(
            "sliding-window",
            "Sliding Window",
            "Moves a fixed-size window across the array, updating its sum as one value leaves and one enters.",
            "O(n)",
            "O(1)",
            || patterns::sliding_window(&WindowFixture::default()),
            listings::SLIDING_WINDOW,
            PatternGuide {
                when_to_use: "Processing subarrays or substrings of a fixed size.",
                difficulty: Difficulty::Medium,
                approach: "Sum the first k values, then slide: subtract the value that leaves and add the one that enters, keeping the best sum seen. Each window costs O(1) instead of O(k).",
                common_problems: &[
                    "Maximum sum subarray of size k",
                    "Longest substring without repeating characters",
                    "Minimum size subarray sum",
                ],
                key_points: &[
                    "Overlapping elements are never summed twice",
                    "Windows are either fixed-size or variable-size",
                    "Pairs well with a hash map for string problems",
                ],
            },
        ),
        pattern(
            "two-pointers",
            "Two Pointers",
            "Walks two indices toward each other over a sorted array to find a pair with a target sum.",
            "O(n)",
            "O(1)",
            || patterns::two_pointers(&ArrayFixture::pair_sum()),
            listings::TWO_POINTERS,
            PatternGuide {
                when_to_use: "Sorted arrays, or finding pairs that meet a condition.",
                difficulty: Difficulty::Easy,
                approach: "Start one index at each end and move whichever side brings the pair closer to the goal, until the indices meet. One pass replaces the nested loop.",
                common_problems: &[
                    "Two Sum on a sorted array",
                    "Remove duplicates from a sorted array",
                    "Container with most water",
                ],
                key_points: &["Relies on sorted input", "Constant extra space", "Works in place"],
            },
        ),
        pattern(
            "fast-slow-pointers",
            "Fast & Slow Pointers",
            "Two pointers moving at different speeds; they meet only when the structure has a cycle.",
            "O(n)",
            "O(1)",
            || linked_list::cycle_detection(&ListFixture::default()),
            listings::CYCLE_DETECTION,
            PatternGuide {
                when_to_use: "Detecting cycles, especially in linked lists.",
                difficulty: Difficulty::Medium,
                approach: "Advance one pointer by one node and the other by two. On a cycle the fast pointer laps the slow one; restarting one pointer at the head and walking both by one finds the cycle entry.",
                common_problems: &[
                    "Linked list cycle",
                    "Find the start of a cycle",
                    "Happy number",
                    "Middle of a linked list",
                ],
                key_points: &[
                    "Floyd's tortoise and hare",
                    "Constant extra space",
                    "A second walk locates where the cycle begins",
                ],
            },
        ),
        pattern(
            "prefix-sum",
            "Prefix Sum",
            "Keeps running sums so any subarray sum is the difference of two prefixes.",
            "O(n)",
            "O(n)",
            || patterns::prefix_sum(&ArrayFixture::subarray_sum()),
            listings::PREFIX_SUM,
            PatternGuide {
                when_to_use: "Range sum queries or counting subarrays with a given sum.",
                difficulty: Difficulty::Medium,
                approach: "Keep a running sum. A subarray (i, j] sums to k exactly when prefix[j] - prefix[i] = k, so a map of prefixes already seen answers each position in O(1).",
                common_problems: &[
                    "Subarray sum equals k",
                    "Range sum queries",
                    "Equilibrium index",
                ],
                key_points: &[
                    "Range sums drop from O(n) to O(1)",
                    "Extends to 2D for matrix sums",
                    "Usually paired with a map of earlier prefixes",
                ],
            },
        ),
        pattern(
            "variable-sliding-window",
            "Variable Sliding Window",
            "Grows the window on the right and shrinks it on the left whenever a constraint breaks.",
            "O(n)",
            "O(k)",
            || patterns::variable_sliding_window(&TextWindowFixture::default()),
            listings::VARIABLE_SLIDING_WINDOW,
            PatternGuide {
                when_to_use: "The window size depends on a condition, often over strings.",
                difficulty: Difficulty::Medium,
                approach: "Grow the window on the right; whenever the constraint breaks, shrink it from the left until it holds again. Track the window contents in a count map.",
                common_problems: &[
                    "Longest substring with k distinct characters",
                    "Permutation in string",
                    "Minimum window substring",
                ],
                key_points: &[
                    "Window size adapts to the constraint",
                    "Each index enters and leaves once",
                    "Counts live in a hash map",
                ],
            },
        ),
        pattern(
            "hash-map",
            "Hash Map / Frequency Counter",
            "Counts occurrences in a map to spot repeats in one pass.",
            "O(n)",
            "O(n)",
            || patterns::hash_map(&ArrayFixture::duplicates()),
            listings::HASH_MAP,
            PatternGuide {
                when_to_use: "Counting occurrences or tracking relationships between elements.",
                difficulty: Difficulty::Easy,
                approach: "Walk the input once, recording each value in a map. Constant-time lookups replace the inner loop of a pairwise comparison.",
                common_problems: &[
                    "Find duplicates",
                    "Group anagrams",
                    "Top k frequent elements",
                    "Subarrays with sum divisible by k",
                ],
                key_points: &[
                    "O(1) average insert and lookup",
                    "Turns O(n²) comparisons into one pass",
                    "Combines with sliding windows",
                ],
            },
        ),
        pattern(
            "binary-search",
            "Binary Search",
            "Finds a target in a sorted array by halving the search range.",
            "O(log n)",
            "O(1)",
            || {
                let fixture = ArrayFixture::sorted_search();
                searching::binary_search(&fixture.values, fixture.target)
            },
            listings::BINARY_SEARCH,
            PatternGuide {
                when_to_use: "Searching a sorted structure, or the smallest value meeting a condition.",
                difficulty: Difficulty::Medium,
                approach: "Compare the middle of the range with the target and discard the half that cannot hold it. The range halves every probe.",
                common_problems: &[
                    "Find peak element",
                    "Minimum in rotated sorted array",
                    "Koko eating bananas",
                ],
                key_points: &[
                    "Needs sorted input or a monotonic predicate",
                    "O(log n) probes",
                    "Lower bound, upper bound and search on the answer are variants",
                ],
            },
        ),
        pattern(
            "backtracking",
            "Backtracking",
            "Builds candidates one choice at a time and undoes each choice after exploring it.",
            "O(2^n)",
            "O(n)",
            || patterns::backtracking(&ArrayFixture::subsets()),
            listings::BACKTRACKING,
            PatternGuide {
                when_to_use: "Exploring every possibility, especially under constraints.",
                difficulty: Difficulty::Hard,
                approach: "Extend a partial solution one choice at a time, recurse, then undo the choice and try the next. Prune branches that cannot lead to a valid answer.",
                common_problems: &[
                    "N-Queens",
                    "Sudoku solver",
                    "Subsets, permutations and combinations",
                ],
                key_points: &[
                    "Depth-first search over a decision tree",
                    "Every choice is undone after exploring it",
                    "Pruning keeps the search tractable",
                ],
            },
        ),
        pattern(
            "recursion-memoization",
            "Recursion + Memoization",
            "Caches the result of each recursive call so every subproblem is solved once.",
            "O(n)",
            "O(n)",
            || patterns::recursion_memoization(&FibFixture::default()),
            listings::MEMOIZATION,
            PatternGuide {
                when_to_use: "Recursive problems with overlapping subproblems.",
                difficulty: Difficulty::Medium,
                approach: "Write the plain recursion, then cache each result by its arguments and check the cache before recursing. Each subproblem is solved once.",
                common_problems: &["Fibonacci", "Climbing stairs", "Word break", "Edit distance"],
                key_points: &[
                    "Top-down dynamic programming",
                    "Exponential recursion becomes polynomial",
                    "The call stack grows with the recursion depth",
                ],
            },
        ),
        pattern(
            "dynamic-programming",
            "Dynamic Programming",
            "Fills a table bottom-up so each entry is built from entries already computed.",
            "O(n)",
            "O(n)",
            || patterns::dynamic_programming(&FibFixture::default()),
            listings::DYNAMIC_PROGRAMMING,
            PatternGuide {
                when_to_use: "Optimal substructure with overlapping subproblems.",
                difficulty: Difficulty::Hard,
                approach: "Define a table of subproblem answers and a recurrence between them, then fill it from the base cases upward so every entry reads only entries already filled.",
                common_problems: &[
                    "0/1 knapsack",
                    "Longest common subsequence",
                    "House robber",
                    "Partition equal subset sum",
                ],
                key_points: &[
                    "Bottom-up, no recursion",
                    "The recurrence is the hard part",
                    "Rolling rows can cut the table's memory",
                ],
            },
        ),
        pattern(
            "greedy",
            "Greedy Algorithm",
            "Takes the locally best choice at every step, here the largest coin that fits.",
            "O(n)",
            "O(1)",
            || patterns::greedy(&CoinFixture::default()),
            listings::GREEDY,
            PatternGuide {
                when_to_use: "A locally optimal choice at each step leads to a global optimum.",
                difficulty: Difficulty::Medium,
                approach: "At every step take the option that looks best right now and never revisit it. Correctness needs the greedy-choice property, which holds for canonical coin systems.",
                common_problems: &[
                    "Coin change with canonical coins",
                    "Activity selection",
                    "Jump game",
                    "Gas station",
                ],
                key_points: &[
                    "Choices are never reconsidered",
                    "Much faster than exhaustive search",
                    "Needs a proof that local choices are safe",
                ],
            },
        ),
        pattern(
            "graph-traversal",
            "DFS / BFS",
            "Explores a graph from a start node, skipping nodes already visited.",
            "O(V + E)",
            "O(V)",
            || graph::bfs(&GraphFixture::cyclic()),
            listings::BFS,
            PatternGuide {
                when_to_use: "Traversing graphs or trees, connected components, shortest unweighted paths.",
                difficulty: Difficulty::Medium,
                approach: "Breadth-first search takes nodes from a queue level by level; depth-first search follows one branch as deep as it goes before backing up. Both mark nodes visited so cycles are walked once.",
                common_problems: &[
                    "Number of islands",
                    "Clone graph",
                    "Word ladder",
                    "Rotting oranges",
                ],
                key_points: &[
                    "BFS uses a queue, DFS a stack or recursion",
                    "BFS finds shortest paths in unweighted graphs",
                    "Marking visited nodes stops cycles",
                ],
            },
        ),
        pattern(
            "topological-sort",
            "Topological Sort",
            "Orders a directed acyclic graph so every edge points forward, removing nodes with no incoming edges.",
            "O(V + E)",
            "O(V)",
            || graph::topological_sort(&GraphFixture::dag()),
            listings::TOPOLOGICAL_SORT,
            PatternGuide {
                when_to_use: "Dependency problems on directed acyclic graphs.",
                difficulty: Difficulty::Medium,
                approach: "Count incoming edges per node, queue the nodes with none, and repeatedly remove a queued node while decrementing its successors. Nodes left over mean a cycle.",
                common_problems: &["Course schedule", "Build order", "Alien dictionary"],
                key_points: &[
                    "Only defined for directed acyclic graphs",
                    "Detects cycles as a side effect",
                    "Kahn's algorithm or DFS post-order",
                ],
            },
        ),
        pattern(
            "union-find",
            "Union Find",
            "Tracks disjoint sets with parent pointers and merges them by rank.",
            "O(n + m·α(n))",
            "O(n)",
            || patterns::union_find(&UnionFixture::default()),
            listings::UNION_FIND,
            PatternGuide {
                when_to_use: "Connected components or merging sets efficiently.",
                difficulty: Difficulty::Medium,
                approach: "Give every element a parent pointer. find follows parents to the root; union links one root under the other, the lower rank under the higher.",
                common_problems: &[
                    "Number of connected components",
                    "Redundant connection",
                    "Accounts merge",
                ],
                key_points: &[
                    "Two operations: find and union",
                    "Union by rank keeps trees shallow",
                    "Path compression brings operations near O(1)",
                ],
            },
        ),
        pattern(
            "bit-manipulation",
            "Bit Manipulation",
            "XORs every value together so paired values cancel and the single one remains.",
            "O(n)",
            "O(1)",
            || patterns::bit_manipulation(&ArrayFixture::single_number()),
            listings::BIT_MANIPULATION,
            PatternGuide {
                when_to_use: "Working with binary representations or toggling flags.",
                difficulty: Difficulty::Medium,
                approach: "Use AND, OR, XOR and shifts on whole words. XOR cancels equal values, x & (x - 1) clears the lowest set bit, and a mask can stand for a set.",
                common_problems: &[
                    "Single number",
                    "Subsets by bitmask",
                    "Power of two",
                    "Counting bits",
                ],
                key_points: &[
                    "XOR finds the unpaired element",
                    "Masks represent small sets compactly",
                    "Set, clear, toggle and test bits in O(1)",
                ],
            },
        ),
    ]
}

fn sort(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    time_complexity: &'static str,
    space_complexity: &'static str,
    run: fn(&[i64]) -> StepSequence,
    code: &'static str,
) -> AlgorithmDescriptor {
    AlgorithmDescriptor {
        id,
        name,
        description,
        time_complexity,
        space_complexity,
        category: Category::Sorting,
        kind: AlgorithmKind::Sorting(run),
        code,
        guide: None,
    }
}

fn search(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    time_complexity: &'static str,
    space_complexity: &'static str,
    run: fn(&[i64], i64) -> StepSequence,
    code: &'static str,
) -> AlgorithmDescriptor {
    AlgorithmDescriptor {
        id,
        name,
        description,
        time_complexity,
        space_complexity,
        category: Category::Searching,
        kind: AlgorithmKind::Searching(run),
        code,
        guide: None,
    }
}

#[allow(clippy::too_many_arguments)]
fn pattern(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    time_complexity: &'static str,
    space_complexity: &'static str,
    run: fn() -> StepSequence,
    code: &'static str,
    guide: PatternGuide,
) -> AlgorithmDescriptor {
    AlgorithmDescriptor {
        id,
        name,
        description,
        time_complexity,
        space_complexity,
        category: Category::Pattern,
        kind: AlgorithmKind::Demo(run),
        code,
        guide: Some(guide),
    }
}
