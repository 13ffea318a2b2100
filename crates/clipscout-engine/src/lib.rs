//! Transcript scanning and caption synthesis.
//!
//! The two components with real decision logic live here:
//! - [`scanner`]: slides a fixed window over a timed transcript and ranks
//!   candidate clip ranges by heuristic virality signals.
//! - [`captions`]: generates title/description/hashtags for a candidate,
//!   preferring remote LLM providers and falling back to a deterministic
//!   local heuristic.
//!
//! [`analyzer::ClipAnalyzer`] wires the two together per analysis request.

pub mod analyzer;
pub mod captions;
pub mod lexicon;
pub mod scanner;

pub use analyzer::ClipAnalyzer;
pub use captions::{CaptionSynthesizer, SynthesizerConfig};
pub use scanner::{scan, ScanConfig};
