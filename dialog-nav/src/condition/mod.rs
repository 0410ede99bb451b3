//! Condition evaluation: the seam between traversal and the host's expression language.
//!
//! The navigator never interprets a scenario condition. It hands the conversation data and
//! the raw expression to a [`ConditionEvaluator`] and acts on the boolean. Use
//! [`FnEvaluator`] to plug in a closure.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::conversation::ConversationData;

/// Error returned by a [`ConditionEvaluator`].
#[derive(Debug, Clone, Error)]
pub enum ConditionError {
    /// The expression could not be parsed.
    #[error("malformed expression: {0}")]
    Malformed(String),

    /// The expression parsed but could not be evaluated against the data.
    #[error("evaluation failed: {0}")]
    Evaluation(String),
}

/// Evaluates a scenario condition against conversation data.
///
/// Implementations are expected to be pure: same data and expression, same answer.
///
/// **Interaction**: Held by `Navigator` as `Arc<dyn ConditionEvaluator>`; called once per
/// scenario of the current node in `Navigator::next_node`.
pub trait ConditionEvaluator: Send + Sync {
    fn evaluate(&self, data: &ConversationData, expression: &str) -> Result<bool, ConditionError>;
}

/// Evaluator closure: `(data, expression) -> Result<bool, ConditionError>`.
pub type ConditionFn =
    Arc<dyn Fn(&ConversationData, &str) -> Result<bool, ConditionError> + Send + Sync>;

/// [`ConditionEvaluator`] backed by a closure.
///
/// ```rust
/// use dialog_nav::condition::{ConditionEvaluator, FnEvaluator};
/// use dialog_nav::ConversationData;
///
/// // Treat the expression as a key and test it for `true`.
/// let eval = FnEvaluator::new(|data: &ConversationData, expr: &str| {
///     Ok(data.get(expr).and_then(|v| v.as_bool()).unwrap_or(false))
/// });
/// let mut data = ConversationData::new();
/// data.insert("vip".into(), true.into());
/// assert!(eval.evaluate(&data, "vip").unwrap());
/// ```
#[derive(Clone)]
pub struct FnEvaluator {
    f: ConditionFn,
}

impl FnEvaluator {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&ConversationData, &str) -> Result<bool, ConditionError> + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }
}

impl fmt::Debug for FnEvaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnEvaluator").finish_non_exhaustive()
    }
}

impl ConditionEvaluator for FnEvaluator {
    fn evaluate(&self, data: &ConversationData, expression: &str) -> Result<bool, ConditionError> {
        (self.f)(data, expression)
    }
}
