//! Triage Core
//!
//! Keyword-driven building blocks for an agent that picks one of a fixed set
//! of actions for free-text input and runs the matching tool. Every component
//! is a stand-in meant to be swapped for a real one (a model-backed
//! [`chooser::Chooser`], a real retrieval pipeline) without changing the
//! decision logic.

pub mod action;
pub mod agent;
pub mod chooser;
pub mod classifier;
pub mod decision;
pub mod knowledge;
pub mod tools;

pub use action::{ALLOWED_ACTIONS, Action};
pub use agent::{TriageAgent, TriageOutcome};
pub use chooser::{Chooser, KeywordChooser};
pub use classifier::classify_only;
pub use decision::decide_action;
pub use knowledge::retrieve_and_answer;
pub use tools::{REFUSAL_TEXT, refuse};
