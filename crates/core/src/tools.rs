//! Agent Tools
//!
//! One tool per [`Action`]. Every tool is a pure function of its input.

use crate::{action::Action, classifier::classify_only, knowledge::retrieve_and_answer};
use tracing::info;

pub const REFUSAL_TEXT: &str = "Refused: I am not authorised to act on this request.";

/// Returns the standard refusal message.
///
/// Refusal is a terminal outcome in its own right, not a failure.
pub fn refuse() -> &'static str {
    REFUSAL_TEXT
}

/// Runs the tool matching `action` on `input` and returns its response.
pub fn dispatch(action: Action, input: &str) -> String {
    info!(%action, "Executing tool");
    match action {
        Action::RetrieveAndAnswer => retrieve_and_answer(input),
        Action::ClassifyOnly => classify_only(input),
        Action::Refuse => refuse().to_string(),
    }
}
