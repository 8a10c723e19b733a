use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The labels a chooser is allowed to pick from.
pub const ALLOWED_ACTIONS: [&str; 3] = ["retrieve_and_answer", "classify_only", "refuse"];

/// One of the fixed operations the agent can perform for a user turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Look up information and produce a grounded answer.
    RetrieveAndAnswer,
    /// Label the topic without generating an answer.
    ClassifyOnly,
    /// Decline to act on the request.
    Refuse,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::RetrieveAndAnswer => "retrieve_and_answer",
            Action::ClassifyOnly => "classify_only",
            Action::Refuse => "refuse",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a label is not in [`ALLOWED_ACTIONS`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not an allowed action")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "retrieve_and_answer" => Ok(Action::RetrieveAndAnswer),
            "classify_only" => Ok(Action::ClassifyOnly),
            "refuse" => Ok(Action::Refuse),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

/// The single-field JSON object exchanged with a chooser: `{"action": "<label>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionChoice {
    pub action: Action,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_allow_list() {
        let labels: Vec<&str> = [Action::RetrieveAndAnswer, Action::ClassifyOnly, Action::Refuse]
            .iter()
            .map(Action::as_str)
            .collect();
        assert_eq!(labels, ALLOWED_ACTIONS);
    }

    #[test]
    fn test_from_str_rejects_unknown_labels() {
        assert_eq!("classify_only".parse::<Action>(), Ok(Action::ClassifyOnly));
        let err = "delete_everything".parse::<Action>().unwrap_err();
        assert_eq!(format!("{}", err), "'delete_everything' is not an allowed action");
        // Labels are case-sensitive.
        assert!("Refuse".parse::<Action>().is_err());
    }

    #[test]
    fn test_action_choice_serializes_as_single_field_object() {
        let choice = ActionChoice {
            action: Action::RetrieveAndAnswer,
        };
        assert_eq!(
            serde_json::to_string(&choice).unwrap(),
            r#"{"action":"retrieve_and_answer"}"#
        );
    }
}
