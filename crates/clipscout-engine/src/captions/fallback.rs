//! Deterministic local caption generation.
//!
//! Always succeeds; used when no remote provider is configured or every
//! remote attempt fails. Pure function of the transcript text.

use clipscout_models::{ClipCaptions, MAX_HASHTAGS};

use crate::lexicon;

/// Seed hashtags that take priority over keyword-derived tags.
const SEED_TAGS: [&str; 3] = ["#Shorts", "#Viral", "#Podcast"];

/// Trailing tag appended after keyword tags; dropped by the final truncation
/// when enough keywords exist.
const TRAILING_TAG: &str = "#Trending";

/// Maximum keyword-derived tags.
const MAX_KEYWORD_TAGS: usize = 3;

/// Generate captions locally from the transcript text.
pub fn local_captions(transcript: &str) -> ClipCaptions {
    let words: Vec<&str> = transcript.split(' ').collect();

    let first_words = words.iter().take(8).copied().collect::<Vec<_>>().join(" ");
    let title = if first_words.chars().count() > 80 {
        format!("{}...", first_words.chars().take(77).collect::<String>())
    } else {
        format!("{}!", first_words)
    };

    let description = if transcript.chars().count() > 450 {
        format!("{}...", transcript.chars().take(447).collect::<String>())
    } else {
        transcript.to_string()
    };

    let keywords = words
        .iter()
        .map(|w| normalize_word(w))
        .filter(|w| w.len() > 4 && !lexicon::STOPWORDS.contains(&w.as_str()))
        .take(MAX_KEYWORD_TAGS);

    let mut hashtags: Vec<String> = SEED_TAGS.iter().map(|t| t.to_string()).collect();
    hashtags.extend(keywords.map(|k| keyword_tag(&k)));
    hashtags.push(TRAILING_TAG.to_string());
    hashtags.truncate(MAX_HASHTAGS);

    ClipCaptions {
        title,
        description,
        hashtags,
    }
}

/// Lowercase and strip everything outside `[a-z0-9]`.
fn normalize_word(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Capitalize a normalized keyword and prefix it with `#`.
fn keyword_tag(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => format!("#{}{}", first.to_ascii_uppercase(), chars.as_str()),
        None => String::from("#"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_title_gets_exclamation() {
        let captions = local_captions("the quick brown fox jumps over the lazy dog again");
        assert_eq!(captions.title, "the quick brown fox jumps over the lazy!");
    }

    #[test]
    fn test_long_title_truncated_with_ellipsis() {
        // Eight long words exceeding 80 chars
        let transcript = "extraordinarily overcomplicated deliberations notwithstanding considerable misunderstandings throughout interminable proceedings";
        let captions = local_captions(transcript);
        assert!(captions.title.ends_with("..."));
        assert_eq!(captions.title.chars().count(), 80);
    }

    #[test]
    fn test_long_description_truncated() {
        let transcript = "word ".repeat(120); // 600 chars
        let captions = local_captions(&transcript);
        assert!(captions.description.ends_with("..."));
        assert_eq!(captions.description.chars().count(), 450);
    }

    #[test]
    fn test_short_description_passes_through() {
        let captions = local_captions("short transcript text");
        assert_eq!(captions.description, "short transcript text");
    }

    #[test]
    fn test_hashtags_with_enough_keywords() {
        // Three qualifying keywords fill the budget; #Trending is dropped
        let captions = local_captions("nobody expected these results during testing");
        assert_eq!(
            captions.hashtags,
            vec!["#Shorts", "#Viral", "#Podcast", "#Nobody", "#Expected"]
        );
        assert_eq!(captions.hashtags.len(), 5);
    }

    #[test]
    fn test_hashtags_with_few_keywords_keep_trending() {
        // No word longer than 4 chars: seed tags plus #Trending
        let captions = local_captions("a b c d e");
        assert_eq!(
            captions.hashtags,
            vec!["#Shorts", "#Viral", "#Podcast", "#Trending"]
        );
    }

    #[test]
    fn test_keywords_not_deduplicated() {
        let captions = local_captions("thunder thunder thunder");
        assert_eq!(
            captions.hashtags,
            vec!["#Shorts", "#Viral", "#Podcast", "#Thunder", "#Thunder"]
        );
    }

    #[test]
    fn test_keyword_punctuation_stripped() {
        let captions = local_captions("\"Thunder!\" rolled");
        assert!(captions.hashtags.contains(&"#Thunder".to_string()));
    }

    #[test]
    fn test_stopwords_excluded() {
        // "with" is a stopword but also only 4 chars; "within" qualifies
        let captions = local_captions("within reach of it");
        assert!(captions.hashtags.contains(&"#Within".to_string()));
        assert!(!captions.hashtags.iter().any(|h| h == "#With"));
    }

    #[test]
    fn test_deterministic() {
        let transcript = "this incredible moment changed everything for everyone watching";
        assert_eq!(local_captions(transcript), local_captions(transcript));
    }
}
