//! Per-request orchestration: scan, then caption the top candidates.

use futures_util::future::join_all;
use tracing::{debug, info};

use clipscout_models::{EnhancedClip, TranscriptSegment};

use crate::captions::CaptionSynthesizer;
use crate::scanner::{scan, ScanConfig};

/// Runs the full analysis for one transcript.
pub struct ClipAnalyzer {
    scan_config: ScanConfig,
    synthesizer: CaptionSynthesizer,
}

impl ClipAnalyzer {
    /// Create an analyzer with default scan parameters.
    pub fn new(synthesizer: CaptionSynthesizer) -> Self {
        Self {
            scan_config: ScanConfig::default(),
            synthesizer,
        }
    }

    /// Override the scan parameters.
    pub fn with_scan_config(mut self, scan_config: ScanConfig) -> Self {
        self.scan_config = scan_config;
        self
    }

    /// Scan the transcript and caption the top candidates.
    ///
    /// Caption synthesis runs concurrently per candidate; results are
    /// collected before assembly so the output always follows scanner rank
    /// order regardless of completion order.
    pub async fn analyze(&self, segments: &[TranscriptSegment]) -> Vec<EnhancedClip> {
        let candidates = scan(segments, &self.scan_config);
        debug!(
            segments = segments.len(),
            candidates = candidates.len(),
            "transcript scan complete"
        );

        let captions = join_all(
            candidates
                .iter()
                .map(|c| self.synthesizer.synthesize(&c.transcript_text)),
        )
        .await;

        let clips: Vec<EnhancedClip> = candidates
            .into_iter()
            .zip(captions)
            .map(|(candidate, captions)| EnhancedClip::from_candidate(candidate, captions))
            .collect();

        info!(clips = clips.len(), "analysis complete");
        clips
    }
}
