// Property tests over random inputs

use algotrace::generators::{searching, sorting};
use algotrace::playback::{Direction, ManualClock, PlaybackEngine};
use algotrace::registry::{AlgorithmInput, Registry};
use algotrace::step::{Auxiliary, Role, StepSequence};
use proptest::prelude::*;

type Sort = fn(&[i64]) -> StepSequence;
type Search = fn(&[i64], i64) -> StepSequence;

const SORTS: [Sort; 4] = [
    sorting::bubble_sort,
    sorting::insertion_sort,
    sorting::quick_sort,
    sorting::merge_sort,
];

const SEARCHES: [Search; 5] = [
    searching::linear_search,
    searching::binary_search,
    searching::jump_search,
    searching::interpolation_search,
    searching::exponential_search,
];

fn small_array() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-50i64..50, 0..24)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generation_is_deterministic(values in small_array(), target in -50i64..50) {
        let registry = Registry::new();
        let input = AlgorithmInput::new(values).with_target(target);
        for descriptor in registry.all() {
            let a = descriptor.generate(&input);
            let b = descriptor.generate(&input);
            prop_assert_eq!(a, b, "{} is not deterministic", descriptor.id);
        }
    }

    #[test]
    fn sorts_end_sorted(values in small_array()) {
        let mut expected = values.clone();
        expected.sort_unstable();
        for sort in SORTS {
            let seq = sort(&values);
            let last = seq.last().unwrap();
            prop_assert_eq!(last.values(), expected.clone());
            let sorted = last.auxiliary().and_then(Auxiliary::sorted_indices).unwrap();
            prop_assert_eq!(sorted.len(), values.len());
        }
    }

    #[test]
    fn sorted_set_only_grows(values in small_array()) {
        for sort in SORTS {
            let seq = sort(&values);
            let sets: Vec<_> = seq
                .iter()
                .map(|s| s.auxiliary().and_then(Auxiliary::sorted_indices).cloned().unwrap())
                .collect();
            for pair in sets.windows(2) {
                prop_assert!(pair[0].is_subset(&pair[1]));
            }
        }
    }

    #[test]
    fn searches_report_presence(values in small_array(), target in -50i64..50) {
        let present = values.contains(&target);
        for search in SEARCHES {
            let seq = search(&values, target);
            let found: Vec<(usize, i64)> = seq
                .iter()
                .flat_map(|s| {
                    let vals = s.values();
                    s.indices_with(Role::Found)
                        .into_iter()
                        .map(move |i| (i, vals[i]))
                })
                .collect();
            if present {
                prop_assert!(!found.is_empty());
                prop_assert!(found.iter().all(|&(_, v)| v == target));
            } else {
                prop_assert!(found.is_empty());
                prop_assert!(seq.last().unwrap().description().contains("not found"));
            }
        }
    }

    #[test]
    fn playback_stays_in_bounds(values in small_array(), moves in prop::collection::vec(0u8..4, 0..40)) {
        let mut engine = PlaybackEngine::with_clock(ManualClock::new());
        engine.load(sorting::bubble_sort(&values));
        let len = engine.len();
        for m in moves {
            match m {
                0 => { engine.step(Direction::Forward); }
                1 => { engine.step(Direction::Backward); }
                2 => engine.go_to_end(),
                _ => engine.go_to_start(),
            }
            prop_assert!(engine.current_index() < len);
        }
    }
}
