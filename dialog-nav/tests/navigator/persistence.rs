//! Positions that outlive a navigator, and conversations navigated in parallel.

use std::sync::Arc;

use dialog_nav::{
    Conversation, DialogGraph, DialogGraphBuilder, InMemoryStateStore, Navigator, StateStore,
};

use crate::common::{flag_evaluator, init_tracing};

fn chain_graph() -> DialogGraph {
    let mut b = DialogGraphBuilder::new();
    b.add_node("root")
        .add_node("one")
        .add_node("two")
        .add_node("three")
        .add_step("root", "one")
        .set_next("one", "two")
        .set_next("two", "three")
        .set_root("root");
    b.build().unwrap()
}

/// **Scenario**: A position stored in SQLite is picked up by a new navigator and store instance.
///
/// Given: a conversation advanced to "one" with one navigator over a SQLite file
/// When: a new store and navigator are opened on the same file
/// Then: current_node returns "one" and next_node continues to "two"
#[cfg(feature = "sqlite")]
#[test]
fn sqlite_position_survives_restart() {
    use dialog_nav::SqliteStateStore;

    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conversations.db");
    {
        let store = Arc::new(SqliteStateStore::new(&path).unwrap());
        let conv = Conversation::new("user-42", store);
        let nav = Navigator::new(Arc::new(chain_graph()), flag_evaluator());
        nav.current_node(&conv).unwrap();
        assert_eq!(nav.next_node(&conv).unwrap().unwrap().id(), "one");
    }

    let store = Arc::new(SqliteStateStore::new(&path).unwrap());
    let conv = Conversation::new("user-42", store);
    let nav = Navigator::new(Arc::new(chain_graph()), flag_evaluator());
    assert_eq!(nav.current_node(&conv).unwrap().id(), "one");
    assert_eq!(nav.next_node(&conv).unwrap().unwrap().id(), "two");
}

/// **Scenario**: Exhausting the graph deletes the SQLite row.
#[cfg(feature = "sqlite")]
#[test]
fn sqlite_exhaustion_deletes_position() {
    use dialog_nav::config::DEFAULT_STATE_SLOT;
    use dialog_nav::SqliteStateStore;

    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(SqliteStateStore::new(dir.path().join("c.db")).unwrap());
    let conv = Conversation::new("c", store.clone());
    let nav = Navigator::new(Arc::new(chain_graph()), flag_evaluator());
    nav.current_node(&conv).unwrap();
    while nav.next_node(&conv).unwrap().is_some() {}
    assert_eq!(store.get("c", DEFAULT_STATE_SLOT).unwrap(), None);
}

/// **Scenario**: One navigator and one store serve conversations on several threads independently.
#[test]
fn conversations_are_independent_across_threads() {
    init_tracing();
    let nav = Navigator::new(Arc::new(chain_graph()), flag_evaluator());
    let store: Arc<dyn StateStore> = Arc::new(InMemoryStateStore::new());

    std::thread::scope(|s| {
        for (i, steps) in [1usize, 2, 3].into_iter().enumerate() {
            let nav = &nav;
            let conv = Conversation::new(format!("conv-{}", i), store.clone());
            s.spawn(move || {
                nav.current_node(&conv).unwrap();
                for _ in 0..steps {
                    nav.next_node(&conv).unwrap();
                }
            });
        }
    });

    let at = |id: &str| {
        let conv = Conversation::new(id, store.clone());
        nav.current_node(&conv).unwrap().id().to_string()
    };
    assert_eq!(at("conv-0"), "one");
    assert_eq!(at("conv-1"), "two");
    assert_eq!(at("conv-2"), "three");
}
