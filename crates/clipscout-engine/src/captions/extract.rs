//! JSON-object extraction from free-text LLM completions.

use clipscout_models::ClipCaptions;

/// Locate the brace-delimited JSON object inside a completion.
///
/// Providers are asked to return only JSON but routinely wrap it in prose or
/// markdown fences; take everything from the first `{` to the last `}`.
pub(crate) fn extract_json_object(text: &str) -> Option<&str> {
    let text = text.trim();
    let text = text.strip_prefix("```json").unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Parse a completion into captions, tolerating surrounding prose.
pub(crate) fn parse_captions(completion: &str) -> Result<ClipCaptions, super::ProviderError> {
    let json = extract_json_object(completion).ok_or(super::ProviderError::MissingJson)?;
    Ok(serde_json::from_str(json)?)
}
