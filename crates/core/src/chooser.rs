//! Decision Sources
//!
//! A chooser maps a prompt to a raw decision string, the same contract as a
//! chat-style LLM client. The agent never trusts that string: it is parsed and
//! validated by [`crate::decision::decide_action`].

use crate::action::Action;
use tracing::debug;

/// Marks where the user's text begins inside a decision prompt.
pub const USER_INPUT_MARKER: &str = "User input: ";

const RETRIEVE_KEYWORDS: [&str; 3] = ["rate", "inflation", "monetary"];
const CLASSIFY_KEYWORDS: [&str; 3] = ["classify", "label", "topic"];

/// Defines the contract for any component that can pick an action.
///
/// Implementations receive the full decision prompt and return whatever text
/// the underlying source produced. A model-backed implementation can be
/// dropped in without touching the decision logic.
#[cfg_attr(test, mockall::automock)]
pub trait Chooser: Send + Sync {
    /// Returns the raw response to `prompt`, expected to be `{"action": "<label>"}`.
    fn chat(&self, prompt: &str) -> String;
}

/// A keyword-based `Chooser` for development and testing.
///
/// Deterministic and free of external dependencies, so the same input always
/// produces the same decision.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordChooser;

impl KeywordChooser {
    /// Picks an action from the lower-cased user portion of `prompt`.
    pub fn choose(&self, prompt: &str) -> Action {
        // Only the text after the last marker counts; the template itself
        // mentions every action name.
        let user_part = prompt
            .rsplit_once(USER_INPUT_MARKER)
            .map_or(prompt, |(_, tail)| tail)
            .to_lowercase();

        if RETRIEVE_KEYWORDS.iter().any(|kw| user_part.contains(kw)) {
            Action::RetrieveAndAnswer
        } else if CLASSIFY_KEYWORDS.iter().any(|kw| user_part.contains(kw)) {
            Action::ClassifyOnly
        } else {
            Action::Refuse
        }
    }
}

impl Chooser for KeywordChooser {
    fn chat(&self, prompt: &str) -> String {
        let action = self.choose(prompt);
        debug!(%action, "Keyword chooser picked an action");
        format!(r#"{{"action": "{}"}}"#, action.as_str())
    }
}
