//! Error cases: unresolvable positions, missing root, condition failures, not started.

use std::sync::Arc;

use dialog_nav::{
    ConditionError, Conversation, ConversationData, DialogGraph, DialogGraphBuilder,
    DialogGraphProvider, FnEvaluator, InMemoryStateStore, NavigationError, Navigator, Node,
};

use crate::common::Harness;

fn small_graph() -> DialogGraph {
    let mut b = DialogGraphBuilder::new();
    b.add_node("root")
        .add_node("child")
        .add_step("root", "child")
        .set_root("root");
    b.build().unwrap()
}

/// **Scenario**: A corrupted stored id makes both operations fail with NodeResolution.
///
/// Given: the stored position is overwritten with an id not in the graph
/// When: current_node and next_node are called
/// Then: both return NodeResolution and the position is not reset to root
#[test]
fn corrupted_position_is_node_resolution_error() {
    let h = Harness::new(small_graph());
    h.nav.current_node(&h.conv).unwrap();
    h.force_position("deleted_node");

    match h.nav.current_node(&h.conv) {
        Err(NavigationError::NodeResolution(id)) => assert_eq!(id, "deleted_node"),
        other => panic!("expected NodeResolution, got {:?}", other),
    }
    match h.nav.next_node(&h.conv) {
        Err(NavigationError::NodeResolution(id)) => assert_eq!(id, "deleted_node"),
        other => panic!("expected NodeResolution, got {:?}", other),
    }
    assert_eq!(h.stored().as_deref(), Some("deleted_node"));
}

/// **Scenario**: A graph without a root fails at first access and stores nothing.
#[test]
fn missing_root_is_graph_configuration_error() {
    let graph = DialogGraph::from_nodes(None, vec![Node::new("orphan")]).unwrap();
    let h = Harness::new(graph);
    assert!(matches!(
        h.nav.current_node(&h.conv),
        Err(NavigationError::GraphConfiguration(_))
    ));
    assert_eq!(h.stored(), None);
    assert_eq!(h.store.writes(), 0);
}

/// **Scenario**: next_node before any current_node reports NotStarted.
#[test]
fn next_node_without_position_is_not_started() {
    let h = Harness::new(small_graph());
    match h.nav.next_node(&h.conv) {
        Err(NavigationError::NotStarted(id)) => assert_eq!(id, crate::common::CONVERSATION_ID),
        other => panic!("expected NotStarted, got {:?}", other),
    }
}

/// **Scenario**: A failing condition stops traversal; no fall-through, position unchanged.
///
/// Given: root has a broken scenario and a first step
/// When: next_node is called
/// Then: ConditionEvaluation is returned and the position stays at root
#[test]
fn condition_failure_stops_traversal() {
    let mut b = DialogGraphBuilder::new();
    b.add_node("root")
        .add_node("fallback")
        .add_node("branch")
        .add_step("root", "fallback")
        .add_scenario_node("root", "((", "branch")
        .set_root("root");
    let eval = FnEvaluator::new(|_: &ConversationData, expr: &str| {
        Err(ConditionError::Malformed(format!("cannot parse {}", expr)))
    });
    let store = Arc::new(InMemoryStateStore::new());
    let conv = Conversation::new("c", store.clone());
    let nav = Navigator::new(Arc::new(b.build().unwrap()), Arc::new(eval));

    nav.current_node(&conv).unwrap();
    match nav.next_node(&conv) {
        Err(NavigationError::ConditionEvaluation {
            node_id,
            condition,
            source: ConditionError::Malformed(msg),
        }) => {
            assert_eq!(node_id, "root");
            assert_eq!(condition, "((");
            assert!(msg.contains("(("), "{}", msg);
        }
        other => panic!("expected ConditionEvaluation, got {:?}", other),
    }
    assert_eq!(nav.current_node(&conv).unwrap().id(), "root");
}

/// Provider that hides one node of an otherwise valid graph, as a stale host cache would.
struct HidingProvider {
    graph: DialogGraph,
    hidden: &'static str,
}

impl DialogGraphProvider for HidingProvider {
    fn node_by_id(&self, id: &str) -> Option<&Node> {
        if id == self.hidden {
            None
        } else {
            self.graph.node_by_id(id)
        }
    }

    fn root(&self) -> Option<&Node> {
        self.graph.root()
    }
}

/// **Scenario**: A computed next id that does not resolve is an error and is never stored.
#[test]
fn unresolvable_next_is_not_persisted() {
    let h = Harness::new(HidingProvider {
        graph: small_graph(),
        hidden: "child",
    });
    h.nav.current_node(&h.conv).unwrap();
    match h.nav.next_node(&h.conv) {
        Err(NavigationError::NodeResolution(id)) => assert_eq!(id, "child"),
        other => panic!("expected NodeResolution, got {:?}", other),
    }
    assert_eq!(h.stored().as_deref(), Some("root"));
}

/// **Scenario**: A parent that does not resolve during the ancestor walk is a NodeResolution error.
#[test]
fn unresolvable_parent_during_ancestor_walk() {
    let mut b = DialogGraphBuilder::new();
    b.add_node("top")
        .add_node("leaf")
        .add_node("root")
        .add_step("top", "leaf")
        .set_root("root");
    let h = Harness::new(HidingProvider {
        graph: b.build().unwrap(),
        hidden: "top",
    });
    h.force_position("leaf");
    match h.nav.next_node(&h.conv) {
        Err(NavigationError::NodeResolution(id)) => assert_eq!(id, "top"),
        other => panic!("expected NodeResolution, got {:?}", other),
    }
}

/// **Scenario**: reset is the host's way out of a corrupted position.
#[test]
fn reset_recovers_from_corrupted_position() {
    let h = Harness::new(small_graph());
    h.force_position("gone");
    assert!(h.nav.current_node(&h.conv).is_err());
    h.nav.reset(&h.conv).unwrap();
    assert_eq!(h.nav.current_node(&h.conv).unwrap().id(), "root");
}

/// **Scenario**: The evaluator is never called for a node without scenarios.
#[test]
fn evaluator_not_called_without_scenarios() {
    let eval = FnEvaluator::new(|_: &ConversationData, _: &str| -> Result<bool, ConditionError> {
        panic!("no scenario should be evaluated")
    });
    let nav = Navigator::new(Arc::new(small_graph()), Arc::new(eval));
    let conv = Conversation::new("c", Arc::new(InMemoryStateStore::new()));
    nav.current_node(&conv).unwrap();
    assert_eq!(nav.next_node(&conv).unwrap().map(Node::id), Some("child"));
}
