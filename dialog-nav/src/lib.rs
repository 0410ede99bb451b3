//! # dialog-nav
//!
//! Dialog-graph navigation for conversational hosts. Given a conversation's stored position
//! in a graph of dialog nodes, the [`Navigator`] returns the current node and computes the
//! next one: branching into scenarios whose condition holds, entering steps, or falling
//! back to the `next` of the node or its ancestors.
//!
//! ## Design Principles
//!
//! - **Stateless navigator**: the only mutable state is the current-node id of each
//!   conversation, kept in a [`StateStore`] passed in through a [`Conversation`].
//! - **Arena graph**: nodes are addressed by id; `parent` and `next` are id lookups, so the
//!   graph can have cycles without ownership cycles.
//! - **Opaque conditions**: scenario conditions go to a [`ConditionEvaluator`]; the
//!   expression language belongs to the host.
//! - **Last true scenario wins**: every scenario is evaluated, later matches override
//!   earlier ones.
//!
//! ## Main Modules
//!
//! - [`graph`]: `Node`, `Scenario`, `DialogGraphProvider`, `DialogGraph`, `DialogGraphBuilder`.
//! - [`navigator`]: `Navigator` — `current_node`, `next_node`, `reset`.
//! - [`condition`]: `ConditionEvaluator` trait and the closure-backed `FnEvaluator`.
//! - [`state`]: `StateStore` trait, `InMemoryStateStore`, optional `SqliteStateStore`.
//! - [`conversation`]: `Conversation` handle and `ConversationData`.
//! - [`config`]: `NavigatorConfig`.
//!
//! ## Features
//!
//! - `sqlite` (default): `SqliteStateStore` for positions that survive restarts.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use dialog_nav::{
//!     Conversation, ConversationData, DialogGraphBuilder, FnEvaluator, InMemoryStateStore,
//!     Navigator,
//! };
//!
//! let mut b = DialogGraphBuilder::new();
//! b.add_node("root")
//!     .add_node("ask_age")
//!     .add_node("adult")
//!     .add_node("bye")
//!     .add_step("root", "ask_age")
//!     .add_scenario_node("ask_age", "adult", "adult")
//!     .set_next("ask_age", "bye")
//!     .set_root("root");
//! let graph = b.build().unwrap();
//!
//! let eval = FnEvaluator::new(|data: &ConversationData, expr: &str| {
//!     Ok(data.get(expr).and_then(|v| v.as_bool()).unwrap_or(false))
//! });
//! let nav = Navigator::new(Arc::new(graph), Arc::new(eval));
//! let mut conv = Conversation::new("conv-1", Arc::new(InMemoryStateStore::new()));
//!
//! assert_eq!(nav.current_node(&conv).unwrap().id(), "root");
//! assert_eq!(nav.next_node(&conv).unwrap().unwrap().id(), "ask_age");
//! conv.data_mut().insert("adult".into(), true.into());
//! assert_eq!(nav.next_node(&conv).unwrap().unwrap().id(), "adult");
//! ```

pub mod condition;
pub mod config;
pub mod conversation;
pub mod error;
pub mod graph;
pub mod navigator;
pub mod state;

pub use condition::{ConditionError, ConditionEvaluator, FnEvaluator};
pub use config::NavigatorConfig;
pub use conversation::{Conversation, ConversationData};
pub use error::NavigationError;
pub use graph::{
    DialogGraph, DialogGraphBuilder, DialogGraphProvider, GraphBuildError, Node, Scenario,
    ScenarioTarget,
};
pub use navigator::Navigator;
#[cfg(feature = "sqlite")]
pub use state::SqliteStateStore;
pub use state::{InMemoryStateStore, StateStore, StateStoreError};
