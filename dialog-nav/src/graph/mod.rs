//! Dialog graph: nodes, scenarios and the provider seam the navigator reads through.
//!
//! Nodes live in an arena keyed by id. `steps` and `scenarios` are forward edges owned by
//! a node; `next` and `parent` are plain id references resolved on demand, so the graph
//! may contain cycles without any ownership cycles.

mod build_error;
mod builder;
mod dialog_graph;
pub(crate) mod logging;
mod node;
mod provider;
mod scenario;

pub use build_error::GraphBuildError;
pub use builder::DialogGraphBuilder;
pub use dialog_graph::DialogGraph;
pub use node::Node;
pub use provider::DialogGraphProvider;
pub use scenario::{Scenario, ScenarioTarget};
