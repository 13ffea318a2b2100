//! Fixed scoring lexicons.
//!
//! These are presence-based signals: each entry contributes at most once per
//! window, no matter how often it repeats. Matching is done against the
//! lower-cased window text, so every entry must be lower-case.

/// Phrases that historically correlate with short-form engagement. Each match
/// adds 2 to the hook score.
pub const VIRAL_PHRASES: &[&str] = &[
    "you won't believe",
    "shocked",
    "amazing",
    "incredible",
    "secret",
    "truth about",
    "exposed",
    "revealed",
    "changed my life",
    "blew my mind",
    "game changer",
    "nobody tells you",
    "wish i knew",
    "biggest mistake",
    "life hack",
    "pro tip",
    "controversial",
    "unpopular opinion",
];

/// Emotionally charged words. Each match adds 1 to the emotional score.
pub const EMOTIONAL_WORDS: &[&str] = &[
    "love",
    "hate",
    "fear",
    "angry",
    "excited",
    "surprised",
    "shocked",
    "devastated",
    "thrilled",
    "terrified",
    "furious",
    "passionate",
];

/// Question openers. Each one found in the window's first three tokens adds 1
/// to the hook score.
pub const QUESTION_WORDS: &[&str] = &["why", "how", "what", "when", "where", "who"];

/// Words too common to make useful hashtag keywords.
pub const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicons_are_lowercase() {
        for entry in VIRAL_PHRASES
            .iter()
            .chain(EMOTIONAL_WORDS)
            .chain(QUESTION_WORDS)
            .chain(STOPWORDS)
        {
            assert_eq!(*entry, entry.to_lowercase(), "lexicon entry must be lowercase");
        }
    }

    #[test]
    fn test_lexicon_sizes() {
        assert_eq!(VIRAL_PHRASES.len(), 18);
        assert_eq!(EMOTIONAL_WORDS.len(), 12);
        assert_eq!(QUESTION_WORDS.len(), 6);
    }
}
