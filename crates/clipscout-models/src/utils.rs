//! YouTube video identifier parsing.
//!
//! Accepts the watch/short/embed URL shapes plus a bare 11-character
//! identifier. Input is untrusted; identifiers are strictly validated
//! (exactly 11 chars, alphanumeric plus `-_`).

/// Errors that can occur during video identifier extraction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VideoIdError {
    /// Input is neither a recognized YouTube URL nor a bare identifier
    #[error("not a recognized YouTube URL or video ID")]
    Unrecognized,

    /// An identifier was found but has an invalid format
    #[error("video ID has invalid format")]
    InvalidVideoId,

    /// URL is a YouTube URL but contains no identifier
    #[error("video ID not found in URL")]
    VideoIdNotFound,
}

/// Result type for video identifier extraction.
pub type VideoIdResult<T> = Result<T, VideoIdError>;

const VIDEO_ID_LEN: usize = 11;

/// Extract a YouTube video identifier from a URL or bare ID.
///
/// Supported inputs:
/// - `https://youtube.com/watch?v=VIDEO_ID`
/// - `https://youtu.be/VIDEO_ID`
/// - `https://youtube.com/embed/VIDEO_ID`
/// - `VIDEO_ID` (bare 11-character identifier)
pub fn extract_video_id(input: &str) -> VideoIdResult<String> {
    let input = input.trim();

    if is_youtube_url(input) {
        if let Some(id) = extract_from_watch_url(input) {
            return validate_video_id(id);
        }
        if let Some(id) = extract_from_short_url(input) {
            return validate_video_id(id);
        }
        if let Some(id) = extract_from_embed_url(input) {
            return validate_video_id(id);
        }
        return Err(VideoIdError::VideoIdNotFound);
    }

    // Bare identifier: must be exactly the ID, nothing else
    if input.len() == VIDEO_ID_LEN && is_valid_id_chars(input) {
        return Ok(input.to_string());
    }

    Err(VideoIdError::Unrecognized)
}

/// Check if the input looks like a YouTube URL.
fn is_youtube_url(input: &str) -> bool {
    let lower = input.to_ascii_lowercase();
    lower.contains("youtube.com") || lower.contains("youtu.be")
}

/// Extract ID from `youtube.com/watch?v=VIDEO_ID`.
fn extract_from_watch_url(url: &str) -> Option<String> {
    let pos = url.find("?v=").or_else(|| url.find("&v="))?;
    extract_id_segment(&url[pos + 3..])
}

/// Extract ID from `youtu.be/VIDEO_ID`.
fn extract_from_short_url(url: &str) -> Option<String> {
    let pos = url.find("youtu.be/")?;
    let start = pos + 9;
    if start >= url.len() {
        return None;
    }
    extract_id_segment(&url[start..])
}

/// Extract ID from `youtube.com/embed/VIDEO_ID`.
fn extract_from_embed_url(url: &str) -> Option<String> {
    let pos = url.find("/embed/")?;
    let start = pos + 7;
    if start >= url.len() {
        return None;
    }
    extract_id_segment(&url[start..])
}

/// Take the segment up to the next URL delimiter.
fn extract_id_segment(segment: &str) -> Option<String> {
    let delimiters = ['&', '#', '?', '/'];
    let end = segment
        .find(|c| delimiters.contains(&c))
        .unwrap_or(segment.len());
    let id = segment[..end].trim();
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

fn is_valid_id_chars(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn validate_video_id(id: String) -> VideoIdResult<String> {
    if id.len() != VIDEO_ID_LEN || !is_valid_id_chars(&id) {
        return Err(VideoIdError::InvalidVideoId);
    }
    Ok(id)
}
