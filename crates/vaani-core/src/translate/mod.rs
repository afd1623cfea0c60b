//! Multi-provider translation relay.
//!
//! Translation is delegated to external HTTP services tried in a fixed
//! order; the first non-empty result that differs from the input wins. When
//! every provider fails the original text comes back, so translation is
//! never a hard dependency of the pipeline that calls it.

mod providers;


use std::time::Duration;

use tracing::{debug, warn};

use crate::settings::settings;

pub use providers::{GoogleGtx, LibreTranslate, MyMemory};

/// One finalized segment to translate. `source_lang` may be `"auto"`;
/// `target_lang` must be a concrete code.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("provider error: {0}")]
    Provider(String),
}

/// A single external translation endpoint.
pub trait TranslationProvider {
    fn name(&self) -> &'static str;

    fn translate(
        &self,
        req: &TranslationRequest,
        timeout: Duration,
    ) -> Result<String, TranslateError>;
}

/// Resolve a provider by its settings name.
pub fn provider_by_name(name: &str) -> Option<Box<dyn TranslationProvider>> {
    match name {
        "mymemory" => Some(Box::new(MyMemory)),
        "libretranslate" => Some(Box::new(LibreTranslate)),
        "google" => Some(Box::new(GoogleGtx)),
        _ => None,
    }
}

pub fn is_known_provider(name: &str) -> bool {
    matches!(name, "mymemory" | "libretranslate" | "google")
}

/// Ordered fallback chain over translation providers.
pub struct TranslationChain {
    providers: Vec<Box<dyn TranslationProvider>>,
    timeout: Duration,
}

impl TranslationChain {
    pub fn new(providers: Vec<Box<dyn TranslationProvider>>, timeout: Duration) -> Self {
        Self { providers, timeout }
    }

    /// Chain over the public providers in settings order.
    pub fn from_settings() -> Self {
        let s = settings();
        let providers = s
            .translation
            .providers
            .iter()
            .filter_map(|name| provider_by_name(name))
            .collect();
        Self::new(providers, Duration::from_secs(s.translation.timeout_secs))
    }

    /// The first acceptable translation, or the original text when every
    /// provider fails or echoes the input.
    pub fn translate(&self, req: &TranslationRequest) -> String {
        for provider in &self.providers {
            match provider.translate(req, self.timeout) {
                Ok(out) if accepted(&out, &req.text) => {
                    debug!(provider = provider.name(), "translation accepted");
                    return out;
                }
                Ok(_) => {
                    debug!(provider = provider.name(), "empty or echoed result, trying next");
                }
                Err(e) => {
                    warn!(provider = provider.name(), error = %e, "translation provider failed");
                }
            }
        }
        req.text.clone()
    }
}

/// A result is acceptable when it is non-empty and not an echo of the
/// input after trimming.
fn accepted(out: &str, input: &str) -> bool {
    let out = out.trim();
    !out.is_empty() && out != input.trim()
}
