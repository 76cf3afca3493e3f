//! Interview-style patterns, each a canned walkthrough over a fixture

pub mod arrays;
pub mod recursion;
pub mod sets;

pub use arrays::{
    bit_manipulation, greedy, hash_map, prefix_sum, sliding_window, two_pointers,
    variable_sliding_window,
};
pub use recursion::{backtracking, dynamic_programming, recursion_memoization};
pub use sets::union_find;
