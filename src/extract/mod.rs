//! Text-to-entities extraction for check-in notes.
//!
//! Two paths, one contract: the LLM-backed primary path and the rule-based
//! fallback both produce an [`ExtractionBundle`], so callers never see which
//! one ran. Any primary-path failure selects the fallback; it is never an
//! error.

pub mod fallback;
mod llm;

use crate::config::PulseConfig;
use crate::lexicon::Lexicon;
use crate::model::{CheckinNote, ExtractionBundle};
use llm::LlmClient;
use tracing::{debug, info};

pub struct Extractor {
    lexicon: Lexicon,
    llm: Option<LlmClient>,
}

impl Extractor {
    /// Build an extractor from configuration. The LLM client is only
    /// constructed when an API key is present; its absence is not an error,
    /// it just forces the fallback path for every invocation.
    pub fn new(config: &PulseConfig) -> Self {
        let llm = match config.anthropic_api_key() {
            Some(key) => match LlmClient::new(key, &config.ai) {
                Ok(client) => Some(client),
                Err(err) => {
                    info!("could not build LLM client, using fallback only: {}", err);
                    None
                }
            },
            None => {
                debug!("no API key configured, using fallback extraction");
                None
            }
        };
        Self {
            lexicon: Lexicon::default(),
            llm,
        }
    }

    /// Fallback-only extractor with injected keyword tables. Used by tests
    /// and by hosts that never want network calls.
    pub fn offline(lexicon: Lexicon) -> Self {
        Self { lexicon, llm: None }
    }

    /// Extract a structured bundle from one note.
    ///
    /// Callers must reject too-short notes first (see
    /// [`crate::validation::validate_note`]); this function accepts any
    /// non-empty input and always returns a well-shaped bundle.
    pub fn extract(&self, content: &str, member_name: &str) -> ExtractionBundle {
        if let Some(llm) = &self.llm {
            match llm.extract(content, member_name) {
                Ok(bundle) => return bundle,
                Err(err) => info!("LLM extraction failed, using fallback: {}", err),
            }
        }
        fallback::extract(content, member_name, &self.lexicon)
    }

    /// Convenience wrapper for the host's note shape.
    pub fn extract_note(&self, note: &CheckinNote) -> ExtractionBundle {
        self.extract(&note.content, &note.member_name)
    }
}
