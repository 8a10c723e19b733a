//! Static Knowledge Base
//!
//! Simulates document retrieval with a keyword lookup table. Entries are
//! searched in the order listed, so earlier keywords win when a question
//! matches several.

use tracing::debug;

/// Prefix attached to every grounded answer.
pub const ANSWER_PREFIX: &str = "Based on retrieved documents: ";

/// Answer used when no keyword matches.
pub const NO_MATCH_ANSWER: &str = "No relevant information found.";

/// Keyword → answer sentence, in lookup order.
pub const KNOWLEDGE_BASE: [(&str, &str); 5] = [
    (
        "rate",
        "The central bank raised interest rates by 25 basis points to combat persistent inflation.",
    ),
    (
        "inflation",
        "Inflation remained elevated at 4.2% year-on-year, driven by energy prices.",
    ),
    (
        "mortgage",
        "Mortgage rates reached a two-decade high, causing home sales to decline 15%.",
    ),
    (
        "loan",
        "Lending standards tightened as banks responded to higher funding costs.",
    ),
    (
        "monetary",
        "The dual mandate requires balancing maximum employment with price stability.",
    ),
];

/// Returns the answer of the first entry whose keyword appears in `question`.
pub fn lookup(question: &str) -> Option<&'static str> {
    let question = question.to_lowercase();
    KNOWLEDGE_BASE
        .iter()
        .find(|(keyword, _)| question.contains(keyword))
        .map(|(keyword, answer)| {
            debug!(keyword, "Knowledge base hit");
            *answer
        })
}

/// Returns a grounded answer from the knowledge base.
pub fn retrieve_and_answer(question: &str) -> String {
    format!("{}{}", ANSWER_PREFIX, lookup(question).unwrap_or(NO_MATCH_ANSWER))
}
