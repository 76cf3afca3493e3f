// Integration tests for the generators and the registry

use algotrace::fixtures::{GraphFixture, ListFixture};
use algotrace::generators::{graph, linked_list, searching, sorting};
use algotrace::registry::{AlgorithmInput, Category, Registry};
use algotrace::step::{Auxiliary, GraphRole, Role};
use algotrace::VizError;

#[test]
fn test_bubble_sort_scenario() {
    let seq = sorting::bubble_sort(&[5, 3, 4, 1, 2]);
    let last = seq.last().expect("sequence is never empty");

    assert_eq!(last.values(), vec![1, 2, 3, 4, 5]);
    let sorted: Vec<usize> = last
        .auxiliary()
        .and_then(Auxiliary::sorted_indices)
        .expect("sorting steps carry the sorted set")
        .iter()
        .copied()
        .collect();
    assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_binary_search_scenario() {
    let input = [1, 3, 5, 7, 9, 11, 13, 15, 17];
    let seq = searching::binary_search(&input, 11);

    let found: Vec<usize> = seq
        .iter()
        .flat_map(|s| s.indices_with(Role::Found))
        .collect();
    assert_eq!(found, vec![5]);

    // Every probe stays inside the bounds in force when it was made
    for step in &seq {
        let Some(Auxiliary::Search { low, high, .. }) = step.auxiliary() else {
            panic!("search step without search state: {}", step.description());
        };
        for probe in step.indices_with(Role::Comparing) {
            let (low, high) = (low.expect("probe with bounds"), high.expect("probe with bounds"));
            assert!(low <= probe && probe <= high, "probe {probe} outside [{low}, {high}]");
        }
    }
}

#[test]
fn test_binary_search_bounds_shrink() {
    let input = [1, 3, 5, 7, 9, 11, 13, 15, 17];
    let seq = searching::binary_search(&input, 4);
    let widths: Vec<usize> = seq
        .iter()
        .filter_map(|s| match s.auxiliary() {
            Some(Auxiliary::Search {
                low: Some(l),
                high: Some(h),
                ..
            }) => Some(h - l),
            _ => None,
        })
        .collect();
    assert!(widths.windows(2).all(|w| w[1] <= w[0]));
    assert!(seq.last().unwrap().description().contains("not found"));
}

#[test]
fn test_linear_search_scenario() {
    let seq = searching::linear_search(&[4, 2, 9], 7);

    let probes: Vec<usize> = seq
        .iter()
        .flat_map(|s| s.indices_with(Role::Comparing))
        .collect();
    assert_eq!(probes, vec![0, 1, 2]);
    assert!(seq.iter().all(|s| !s.has_role(Role::Found)));
    assert_eq!(
        seq.last().unwrap().description(),
        "7 not found in the array"
    );
}

#[test]
fn test_cycle_detection_scenario() {
    let first = linked_list::cycle_detection(&ListFixture::default());
    let second = linked_list::cycle_detection(&ListFixture::default());
    assert_eq!(first, second);

    let detected = first
        .iter()
        .filter_map(|s| s.linked_list())
        .find(|l| l.cycle_detected)
        .expect("the default list has a cycle");
    let ids: Vec<u32> = detected.cycle_node_ids.iter().copied().collect();
    assert_eq!(ids, vec![3, 4, 5, 6, 7]);
}

#[test]
fn test_registry_scenario() {
    let registry = Registry::new();
    assert_eq!(registry.lookup("quick").unwrap().category, Category::Sorting);
    assert!(matches!(
        registry.lookup("not-a-real-id"),
        Err(VizError::UnknownAlgorithmId(id)) if id == "not-a-real-id"
    ));
}

#[test]
fn test_demos_ignore_input() {
    let registry = Registry::new();
    let a = registry
        .generate("sliding-window", &AlgorithmInput::new(vec![1, 2, 3]))
        .unwrap();
    let b = registry
        .generate("sliding-window", &AlgorithmInput::new(vec![9, 9]).with_target(4))
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_sorting_input_is_not_mutated() {
    let input = vec![3, 1, 2];
    let registry = Registry::new();
    let request = AlgorithmInput::new(input.clone());
    registry.generate("merge", &request).unwrap();
    assert_eq!(request.values, input);
}

#[test]
fn test_graph_steps_are_independent() {
    let seq = graph::dijkstra(&GraphFixture::weighted());

    // The opening step shows no progress even though later steps finalize nodes
    let first = seq.first().unwrap().graph().unwrap();
    assert!(first.nodes.iter().all(|n| !n.flags.is_visited));

    let last = seq.last().unwrap().graph().unwrap();
    let end = last.node("F").unwrap();
    assert_eq!(end.flags.dominant(), Some(GraphRole::InPath));
    assert_eq!(end.distance, Some(5));
}

#[test]
fn test_json_export() {
    let registry = Registry::new();
    let seq = registry
        .generate("bubble", &AlgorithmInput::new(vec![2, 1]))
        .unwrap();
    let json = serde_json::to_value(&seq).unwrap();
    let steps = json.as_array().expect("a sequence serializes as an array");
    assert_eq!(steps.len(), seq.len());
    assert_eq!(steps[0]["elements"][0]["value"], 2);
    assert_eq!(steps[0]["auxiliary"]["kind"], "sorting");
}
