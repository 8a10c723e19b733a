//! Action Decision
//!
//! Asks a [`Chooser`] for an action and validates the answer. Anything that
//! cannot be turned into an allowed action becomes [`Action::Refuse`].

use crate::{
    action::{ALLOWED_ACTIONS, Action},
    chooser::{Chooser, USER_INPUT_MARKER},
};
use serde_json::Value;
use tracing::{debug, warn};

/// Why a raw chooser response could not be turned into an action.
#[derive(Debug, thiserror::Error)]
pub enum DecisionError {
    #[error("chooser response is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("chooser response is not a JSON object")]
    NotAnObject,
    #[error("action {0} is not in the allow-list")]
    UnknownAction(Value),
}

/// Builds the fixed decision prompt around `user_input`.
pub fn build_prompt(user_input: &str) -> String {
    format!(
        "Choose exactly one action: {}\nReturn ONLY valid JSON: {{\"action\": \"<action>\"}}\n{}{}",
        ALLOWED_ACTIONS.join(", "),
        USER_INPUT_MARKER,
        user_input
    )
}

/// Parses a raw chooser response into an allowed action.
///
/// A JSON object without an `action` field resolves to [`Action::Refuse`].
pub fn resolve_action(raw: &str) -> Result<Action, DecisionError> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Object(mut fields) = value else {
        return Err(DecisionError::NotAnObject);
    };

    match fields.remove("action") {
        None => Ok(Action::Refuse),
        Some(Value::String(label)) => label
            .parse::<Action>()
            .map_err(|_| DecisionError::UnknownAction(Value::String(label))),
        Some(other) => Err(DecisionError::UnknownAction(other)),
    }
}

/// Asks `chooser` which action to take for `user_input`.
///
/// Never fails: a malformed response or an action outside
/// [`ALLOWED_ACTIONS`] is logged and mapped to [`Action::Refuse`].
pub fn decide_action(chooser: &dyn Chooser, user_input: &str) -> Action {
    let raw = chooser.chat(&build_prompt(user_input));
    debug!(raw = %raw, "Chooser responded");

    resolve_action(&raw).unwrap_or_else(|error| {
        warn!(%error, "Could not determine a valid action, refusing");
        Action::Refuse
    })
}
