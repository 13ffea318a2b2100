//! Application state.

use std::sync::Arc;

use clipscout_engine::{CaptionSynthesizer, ClipAnalyzer};
use clipscout_transcript::YtDlpTranscriptSource;

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub analyzer: Arc<ClipAnalyzer>,
    pub transcripts: Arc<YtDlpTranscriptSource>,
}

impl AppState {
    /// Create new application state.
    pub fn new(config: ApiConfig) -> Self {
        let synthesizer = CaptionSynthesizer::new(config.synthesizer_config());
        let analyzer = ClipAnalyzer::new(synthesizer);

        Self {
            config,
            analyzer: Arc::new(analyzer),
            transcripts: Arc::new(YtDlpTranscriptSource::new()),
        }
    }
}
