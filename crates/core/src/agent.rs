//! Triage Agent
//!
//! Composes the decision step with tool execution: one call to
//! [`TriageAgent::handle`] is one complete user turn.

use crate::{action::Action, chooser::Chooser, decision::decide_action, tools::dispatch};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// The result of handling a single user turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriageOutcome {
    /// The validated action that was executed.
    pub action: Action,
    /// The text returned by the tool for that action.
    pub response: String,
}

/// Routes user input to a tool using a pluggable [`Chooser`].
#[derive(Clone)]
pub struct TriageAgent {
    chooser: Arc<dyn Chooser>,
}

impl TriageAgent {
    pub fn new(chooser: Arc<dyn Chooser>) -> Self {
        Self { chooser }
    }

    /// Decides on an action for `user_input` and runs the matching tool.
    pub fn handle(&self, user_input: &str) -> TriageOutcome {
        let action = decide_action(self.chooser.as_ref(), user_input);
        info!(%action, "Action selected");
        TriageOutcome {
            action,
            response: dispatch(action, user_input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chooser::{KeywordChooser, MockChooser};
    use crate::tools::REFUSAL_TEXT;

    fn keyword_agent() -> TriageAgent {
        TriageAgent::new(Arc::new(KeywordChooser))
    }

    #[test]
    fn test_retrieval_turn() {
        let outcome = keyword_agent().handle("Why is inflation so high?");
        assert_eq!(outcome.action, Action::RetrieveAndAnswer);
        assert_eq!(
            outcome.response,
            "Based on retrieved documents: Inflation remained elevated at 4.2% year-on-year, driven by energy prices."
        );
    }

    #[test]
    fn test_classification_turn() {
        let outcome = keyword_agent().handle("Classify: mortgage approvals fell");
        assert_eq!(outcome.action, Action::ClassifyOnly);
        assert_eq!(outcome.response, "Topic: Lending & Credit");
    }

    #[test]
    fn test_refusal_turn() {
        let outcome = keyword_agent().handle("Wire money to this account");
        assert_eq!(outcome.action, Action::Refuse);
        assert_eq!(outcome.response, REFUSAL_TEXT);
    }

    #[test]
    fn test_bad_chooser_output_still_refuses() {
        let mut chooser = MockChooser::new();
        chooser
            .expect_chat()
            .returning(|_| r#"{"action": "drop_tables"}"#.to_string());
        let agent = TriageAgent::new(Arc::new(chooser));

        let outcome = agent.handle("inflation");
        assert_eq!(outcome.action, Action::Refuse);
        assert_eq!(outcome.response, REFUSAL_TEXT);
    }

    #[test]
    fn test_outcome_serializes_with_action_label() {
        let outcome = TriageOutcome {
            action: Action::ClassifyOnly,
            response: "Topic: Equity Markets".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&outcome).unwrap(),
            r#"{"action":"classify_only","response":"Topic: Equity Markets"}"#
        );
    }
}
