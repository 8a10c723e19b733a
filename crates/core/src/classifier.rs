use serde::Serialize;

/// Keyword groups checked in priority order.
const TOPIC_KEYWORDS: [(Topic, &[&str]); 3] = [
    (
        Topic::InterestRates,
        &["rate", "inflation", "monetary", "central bank"],
    ),
    (Topic::Lending, &["loan", "mortgage", "lending", "credit"]),
    (Topic::Equities, &["stock", "equity", "market", "earning"]),
];

/// A finance topic recognised by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    InterestRates,
    Lending,
    Equities,
    OutOfDomain,
}

impl Topic {
    /// Classifies `text` by the first keyword group with a case-insensitive match.
    pub fn classify(text: &str) -> Self {
        let text = text.to_lowercase();
        TOPIC_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| text.contains(kw)))
            .map_or(Topic::OutOfDomain, |(topic, _)| *topic)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Topic::InterestRates => "Topic: Interest Rates & Monetary Policy",
            Topic::Lending => "Topic: Lending & Credit",
            Topic::Equities => "Topic: Equity Markets",
            Topic::OutOfDomain => "Topic: Out of Domain",
        }
    }
}

/// Classifies the topic of `text` and returns its label.
///
/// Unrecognised inputs yield `"Topic: Out of Domain"`. No side effects.
pub fn classify_only(text: &str) -> String {
    Topic::classify(text).label().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_group_maps_to_its_label() {
        assert_eq!(
            classify_only("Inflation is sticky"),
            "Topic: Interest Rates & Monetary Policy"
        );
        assert_eq!(classify_only("I need a LOAN"), "Topic: Lending & Credit");
        assert_eq!(classify_only("Tech stocks rallied"), "Topic: Equity Markets");
        assert_eq!(classify_only("Quarterly earnings beat"), "Topic: Equity Markets");
        assert_eq!(classify_only("What's for lunch?"), "Topic: Out of Domain");
    }

    #[test]
    fn test_earlier_group_takes_priority() {
        assert_eq!(
            classify_only("central bank raised rates"),
            "Topic: Interest Rates & Monetary Policy"
        );
        // "rates" also hits the first group.
        assert_eq!(
            classify_only("Tell me about mortgage rates"),
            "Topic: Interest Rates & Monetary Policy"
        );
        assert_eq!(classify_only("credit market stress"), "Topic: Lending & Credit");
    }

    #[test]
    fn test_multi_word_keyword() {
        assert_eq!(Topic::classify("The Central Bank met today"), Topic::InterestRates);
        assert_eq!(Topic::classify("the central  bank"), Topic::OutOfDomain);
    }

    #[test]
    fn test_empty_text_is_out_of_domain() {
        assert_eq!(Topic::classify(""), Topic::OutOfDomain);
    }
}
