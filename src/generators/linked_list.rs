//! Floyd's tortoise-and-hare over a [`ListFixture`]

use super::{rejected, Trace};
use crate::fixtures::ListFixture;
use crate::step::{LinkedListState, StepBuilder, StepSequence};
use std::collections::BTreeSet;

mod line {
    pub const INIT: usize = 1;
    pub const FAST_END: usize = 5;
    pub const ADVANCE: usize = 6;
    pub const MEET: usize = 7;
    pub const RESET: usize = 12;
    pub const WALK: usize = 14;
}

struct Walk<'a> {
    list: &'a ListFixture,
    trace: Trace,
    cycle: BTreeSet<u32>,
}

impl Walk<'_> {
    fn push(&mut self, description: String, slow: Option<u32>, fast: Option<u32>, line: Option<usize>) {
        let state = LinkedListState {
            nodes: self.list.nodes.clone(),
            slow: slow.and_then(|id| self.list.position(id)),
            fast: fast.and_then(|id| self.list.position(id)),
            cycle_detected: !self.cycle.is_empty(),
            cycle_node_ids: self.cycle.clone(),
        };
        self.trace
            .push(StepBuilder::new(description).linked_list(state).code_line(line));
    }

    /// Ids on the loop through `start`, which must lie on a cycle
    fn loop_through(&self, start: u32) -> BTreeSet<u32> {
        let mut ids = BTreeSet::from([start]);
        let mut cursor = self.list.next(start);
        while let Some(id) = cursor {
            if !ids.insert(id) {
                break;
            }
            cursor = self.list.next(id);
        }
        ids
    }
}

/// Detect a cycle, then locate the node where it begins
pub fn cycle_detection(list: &ListFixture) -> StepSequence {
    if let Err(e) = list.validate() {
        return rejected(&e);
    }
    let mut walk = Walk {
        list,
        trace: Trace::new(),
        cycle: BTreeSet::new(),
    };

    let Some(head) = list.head() else {
        walk.push(
            "The list is empty, so it has no cycle".to_string(),
            None,
            None,
            None,
        );
        return walk.trace.finish();
    };

    walk.push(
        format!("Start slow and fast at the head, node {head}"),
        Some(head),
        Some(head),
        Some(line::INIT),
    );

    let (mut slow, mut fast) = (head, head);
    let meeting = loop {
        let Some(ahead) = list.next(fast).and_then(|n| list.next(n)) else {
            walk.push(
                format!("Fast cannot move two nodes past node {fast}: the list ends, no cycle"),
                Some(slow),
                None,
                Some(line::FAST_END),
            );
            walk.push(
                "No cycle: fast reached the end of the list".to_string(),
                Some(slow),
                None,
                None,
            );
            return walk.trace.finish();
        };
        // A list whose fast walker can always move two nodes always moves slow too
        let Some(next_slow) = list.next(slow) else {
            return walk.trace.finish();
        };
        fast = ahead;
        slow = next_slow;
        if slow == fast {
            break slow;
        }
        walk.push(
            format!("Slow moves to node {slow}, fast moves to node {fast}; they differ"),
            Some(slow),
            Some(fast),
            Some(line::ADVANCE),
        );
    };

    walk.cycle = walk.loop_through(meeting);
    let members: Vec<String> = walk.cycle.iter().map(|id| id.to_string()).collect();
    walk.push(
        format!(
            "Slow and fast meet at node {meeting}: cycle detected through nodes {}",
            members.join(", ")
        ),
        Some(slow),
        Some(fast),
        Some(line::MEET),
    );

    slow = head;
    walk.push(
        format!("Reset slow to the head, node {head}; fast stays at node {fast}"),
        Some(slow),
        Some(fast),
        Some(line::RESET),
    );

    while slow != fast {
        let (Some(s), Some(f)) = (list.next(slow), list.next(fast)) else {
            break;
        };
        slow = s;
        fast = f;
        walk.push(
            format!("Both move one node: slow at {slow}, fast at {fast}"),
            Some(slow),
            Some(fast),
            Some(line::WALK),
        );
    }

    walk.push(
        format!("Cycle detected; it begins at node {slow}"),
        Some(slow),
        Some(fast),
        None,
    );
    walk.trace.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::ListNode;

    #[test]
    fn test_default_list_cycle_members() {
        let seq = cycle_detection(&ListFixture::default());
        let detected = seq
            .iter()
            .find(|s| s.linked_list().is_some_and(|l| l.cycle_detected))
            .unwrap();
        let ids: Vec<u32> = detected
            .linked_list()
            .unwrap()
            .cycle_node_ids
            .iter()
            .copied()
            .collect();
        assert_eq!(ids, vec![3, 4, 5, 6, 7]);
        assert!(detected.description().contains("meet at node 6"));
    }

    #[test]
    fn test_default_list_cycle_entry() {
        let seq = cycle_detection(&ListFixture::default());
        assert_eq!(
            seq.last().unwrap().description(),
            "Cycle detected; it begins at node 3"
        );
    }

    #[test]
    fn test_acyclic_list() {
        let seq = cycle_detection(&ListFixture::chain(5, None));
        assert!(seq.last().unwrap().description().starts_with("No cycle"));
        assert!(seq
            .iter()
            .all(|s| !s.linked_list().unwrap().cycle_detected));
    }

    #[test]
    fn test_self_loop_on_head() {
        let seq = cycle_detection(&ListFixture::chain(1, Some(1)));
        assert_eq!(
            seq.last().unwrap().description(),
            "Cycle detected; it begins at node 1"
        );
    }

    #[test]
    fn test_dangling_next_is_refused() {
        let list = ListFixture {
            nodes: vec![ListNode {
                id: 1,
                value: 1,
                next_id: Some(9),
            }],
        };
        let seq = cycle_detection(&list);
        assert_eq!(seq.len(), 1);
        assert_eq!(
            seq.last().unwrap().description(),
            "Cannot run: invalid fixture: node 1 points at unknown node 9"
        );
    }

    #[test]
    fn test_empty_list() {
        let seq = cycle_detection(&ListFixture { nodes: Vec::new() });
        assert_eq!(seq.len(), 1);
    }
}
