//! WebVTT parsing into timed transcript segments.

use regex::Regex;

use clipscout_models::TranscriptSegment;

/// Parse VTT content into ordered transcript segments.
///
/// Handles optional hour fields, inline styling tags, cue numbers, and the
/// rolling duplicate captions produced by auto-generated subtitles.
pub fn parse_vtt(content: &str) -> Vec<TranscriptSegment> {
    let cue_pattern = Regex::new(
        r"((?:\d{2}:)?\d{2}:\d{2}\.\d{3})\s*-->\s*((?:\d{2}:)?\d{2}:\d{2}\.\d{3})",
    )
    .expect("valid cue regex");
    let tag_pattern = Regex::new(r"<[^>]+>").expect("valid tag regex");

    let mut segments: Vec<TranscriptSegment> = Vec::new();
    let mut current: Option<(u64, u64)> = None;
    let mut buffer: Vec<String> = Vec::new();
    let mut last_text = String::new();

    for raw_line in content.lines().chain(std::iter::once("")) {
        let line = tag_pattern.replace_all(raw_line.trim(), "").to_string();

        if let Some(caps) = cue_pattern.captures(&line) {
            flush(&mut segments, current.take(), &mut buffer, &mut last_text);
            let start = parse_timestamp_ms(&caps[1]);
            let end = parse_timestamp_ms(&caps[2]);
            current = Some((start, end));
            continue;
        }

        if line.is_empty() {
            flush(&mut segments, current.take(), &mut buffer, &mut last_text);
            continue;
        }

        if line == "WEBVTT" || line.starts_with("NOTE") || line.starts_with("Kind:") || line.starts_with("Language:") {
            continue;
        }

        // Cue numbers sit between cues; a digit-only line inside an open cue
        // is caption text
        if current.is_none() && line.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }

        if current.is_some() {
            buffer.push(line);
        }
    }

    segments
}

/// Emit the buffered cue, de-duplicating rolling captions.
fn flush(
    segments: &mut Vec<TranscriptSegment>,
    cue: Option<(u64, u64)>,
    buffer: &mut Vec<String>,
    last_text: &mut String,
) {
    if let Some((start, end)) = cue {
        let text = buffer.join(" ").trim().to_string();
        if !text.is_empty() && text != *last_text {
            segments.push(TranscriptSegment::new(
                text.clone(),
                start,
                end.saturating_sub(start),
            ));
            *last_text = text;
        }
    }
    buffer.clear();
}

/// Parse `HH:MM:SS.mmm` or `MM:SS.mmm` into milliseconds.
fn parse_timestamp_ms(ts: &str) -> u64 {
    let (rest, millis) = match ts.split_once('.') {
        Some((rest, frac)) => (rest, frac.parse::<u64>().unwrap_or(0)),
        None => (ts, 0),
    };

    let parts: Vec<u64> = rest.split(':').map(|p| p.parse().unwrap_or(0)).collect();
    let seconds = match parts.as_slice() {
        [h, m, s] => h * 3600 + m * 60 + s,
        [m, s] => m * 60 + s,
        [s] => *s,
        _ => 0,
    };

    seconds * 1000 + millis
}
