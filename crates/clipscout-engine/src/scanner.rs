//! Sliding-window transcript scanner.
//!
//! Pure, synchronous analysis: slides a fixed window across the ordered
//! transcript, scores each window on three independent signals, and keeps the
//! top-ranked candidates.

use std::cmp::Reverse;

use clipscout_models::{ClipCandidate, TranscriptSegment};

use crate::lexicon;

/// Window and acceptance parameters for a scan pass.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Number of consecutive segments per window
    pub window_size: usize,
    /// Segments to advance the window start per step
    pub stride: usize,
    /// Minimum accepted clip duration, seconds
    pub min_clip_seconds: f64,
    /// Maximum accepted clip duration, seconds
    pub max_clip_seconds: f64,
    /// A window is accepted only if its total score exceeds this floor
    pub score_floor: u32,
    /// Number of top candidates to retain
    pub max_candidates: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            window_size: 20,
            stride: 5,
            min_clip_seconds: 15.0,
            max_clip_seconds: 60.0,
            score_floor: 3,
            max_candidates: 5,
        }
    }
}

/// Scan a transcript for clip candidates, best first.
///
/// Returns at most `config.max_candidates` candidates sorted by total score
/// descending; ties keep window order. Transcripts with no room for a full
/// window yield an empty list.
pub fn scan(segments: &[TranscriptSegment], config: &ScanConfig) -> Vec<ClipCandidate> {
    let mut candidates = Vec::new();

    if segments.len() <= config.window_size {
        return candidates;
    }

    let mut i = 0;
    while i < segments.len() - config.window_size {
        let window = &segments[i..i + config.window_size];
        if let Some(candidate) = score_window(window, config) {
            candidates.push(candidate);
        }
        i += config.stride;
    }

    // Stable sort keeps window order among equal totals
    candidates.sort_by_key(|c| Reverse(c.total_score()));
    candidates.truncate(config.max_candidates);
    candidates
}

/// Score one window; `None` if its duration is out of bounds or its total
/// score does not clear the floor.
fn score_window(window: &[TranscriptSegment], config: &ScanConfig) -> Option<ClipCandidate> {
    let first = window.first()?;
    let last = window.last()?;

    let start_seconds = first.start_seconds();
    let end_seconds = last.end_seconds();
    let duration = end_seconds - start_seconds;

    if duration < config.min_clip_seconds || duration > config.max_clip_seconds {
        return None;
    }

    let transcript_text = window
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let text = transcript_text.to_lowercase();

    let hook_score = hook_score(&text);
    let emotional_score = emotional_score(&text);
    let clarity_score = clarity_score(&text);

    if hook_score + emotional_score + clarity_score <= config.score_floor {
        return None;
    }

    Some(ClipCandidate {
        start_seconds,
        end_seconds,
        transcript_text,
        hook_score,
        emotional_score,
        clarity_score,
    })
}

/// Engaging-opening signal: viral phrases anywhere in the window, question
/// words among the first three tokens.
fn hook_score(text: &str) -> u32 {
    let mut score = 0;

    for phrase in lexicon::VIRAL_PHRASES {
        if text.contains(phrase) {
            score += 2;
        }
    }

    let opening = text.split(' ').take(3).collect::<Vec<_>>().join(" ");
    for word in lexicon::QUESTION_WORDS {
        if opening.contains(word) {
            score += 1;
        }
    }

    score
}

/// Emotional-language signal: one point per lexicon word present.
fn emotional_score(text: &str) -> u32 {
    lexicon::EMOTIONAL_WORDS
        .iter()
        .filter(|word| text.contains(*word))
        .count() as u32
}

/// Complete-thought signal: 2..=5 sentence fragments score 2, any terminal
/// punctuation scores 1. Maximum 3.
fn clarity_score(text: &str) -> u32 {
    let fragments = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count();

    let mut score = 0;
    if (2..=5).contains(&fragments) {
        score += 2;
    }
    if text.contains(['.', '!', '?']) {
        score += 1;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build `count` segments of `text`, each `step_ms` long, back to back.
    fn segments(text: &str, count: usize, step_ms: u64) -> Vec<TranscriptSegment> {
        (0..count)
            .map(|i| TranscriptSegment::new(text, i as u64 * step_ms, step_ms))
            .collect()
    }

    #[test]
    fn test_short_transcript_yields_nothing() {
        let config = ScanConfig::default();
        assert!(scan(&[], &config).is_empty());
        assert!(scan(&segments("amazing! truly amazing.", 5, 1000), &config).is_empty());
        // Exactly one window's worth of segments leaves no valid window start
        assert!(scan(&segments("amazing! truly amazing.", 20, 1000), &config).is_empty());
    }

    #[test]
    fn test_duration_bounds_enforced() {
        let config = ScanConfig::default();

        // 20 segments x 100ms = 2s window, below the 15s minimum
        let too_short = segments("amazing! shocked. you won't believe it.", 40, 100);
        assert!(scan(&too_short, &config).is_empty());

        // 20 segments x 5s = 100s window, above the 60s maximum
        let too_long = segments("amazing! shocked. you won't believe it.", 40, 5000);
        assert!(scan(&too_long, &config).is_empty());

        // 20 segments x 1s = 20s window, in range
        let in_range = segments("amazing! shocked. you won't believe it.", 40, 1000);
        let candidates = scan(&in_range, &config);
        assert!(!candidates.is_empty());
        for c in &candidates {
            let d = c.duration_seconds();
            assert!((15.0..=60.0).contains(&d), "duration {} out of range", d);
        }
    }

    #[test]
    fn test_at_most_five_sorted_descending() {
        let config = ScanConfig::default();
        // Long transcript produces many overlapping scoring windows
        let segs = segments("this is amazing and shocked me. truly incredible!", 200, 1000);
        let candidates = scan(&segs, &config);
        assert!(candidates.len() <= 5);
        for pair in candidates.windows(2) {
            assert!(pair[0].total_score() >= pair[1].total_score());
        }
    }

    #[test]
    fn test_single_phrase_hook_score() {
        // One viral phrase, no question-word prefix
        assert_eq!(hook_score("this moment was incredible to watch"), 2);
    }

    #[test]
    fn test_question_word_prefix_scores() {
        // "why" appears within the first three tokens
        assert_eq!(hook_score("why does this matter at all"), 1);
        // Question word beyond the first three tokens does not count
        assert_eq!(hook_score("i will tell you why later"), 0);
    }

    #[test]
    fn test_emotional_presence_not_frequency() {
        // "love" repeated still counts once; "hate" adds a second point
        assert_eq!(emotional_score("love love love love"), 1);
        assert_eq!(emotional_score("love it or hate it"), 2);
        assert_eq!(emotional_score("nothing charged here"), 0);
    }

    #[test]
    fn test_clarity_score_maximum() {
        // Three fragments and terminal punctuation: 2 + 1
        assert_eq!(clarity_score("first thought. second thought! third?"), 3);
        // One long fragment, punctuated: only the punctuation point
        assert_eq!(clarity_score("one endless thought."), 1);
        // No punctuation at all
        assert_eq!(clarity_score("no punctuation here"), 0);
        // Six fragments: too choppy for the fragment bonus
        assert_eq!(clarity_score("a. b. c. d. e. f."), 1);
    }

    #[test]
    fn test_viral_window_scenario() {
        // 20s of repeated hook-heavy text fills one full window
        let segs = segments(
            "this is amazing and shocked me, you won't believe what happened.",
            21,
            1000,
        );
        let candidates = scan(&segs, &ScanConfig::default());
        assert_eq!(candidates.len(), 1);

        let c = &candidates[0];
        // "amazing" and "you won't believe" both match
        assert!(c.hook_score >= 4, "hook_score = {}", c.hook_score);
        assert!(c.emotional_score >= 1, "emotional_score = {}", c.emotional_score);
        assert!(c.clarity_score >= 1, "clarity_score = {}", c.clarity_score);
        assert!(c.total_score() > 3);
        assert_eq!(c.start_seconds, 0.0);
        assert_eq!(c.end_seconds, 20.0);
    }

    #[test]
    fn test_rejects_low_scoring_windows() {
        let segs = segments("plain ordinary words here", 40, 1000);
        assert!(scan(&segs, &ScanConfig::default()).is_empty());
    }

    #[test]
    fn test_candidate_text_keeps_original_casing() {
        let segs = segments("This Is AMAZING and shocked everyone.", 40, 1000);
        let candidates = scan(&segs, &ScanConfig::default());
        assert!(!candidates.is_empty());
        assert!(candidates[0].transcript_text.contains("AMAZING"));
    }
}
