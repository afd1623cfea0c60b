//! Script transliteration: strategy selection over injected providers with
//! built-in table fallbacks.
//!
//! Transliteration is best-effort cosmetic formatting, never a hard
//! dependency of the pipeline that calls it: every unsupported input and
//! every provider failure degrades to an empty string, and the caller falls
//! back to displaying the original text.

mod mapper;
mod table;

#[cfg(test)]
mod tests;

use tracing::warn;

use crate::script::Script;

pub use mapper::ScriptMapping;

/// Error raised by an injected transliteration capability. It never escapes
/// the dispatcher.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider failure: {0}")]
    Failed(String),
}

/// General-purpose script-pair transliteration capability (e.g. a binding
/// to a scheme-table library).
pub trait ScriptTransliterator {
    /// Whether a scheme mapping exists for `script`.
    fn supports(&self, script: Script) -> bool;

    fn transliterate(&self, text: &str, from: Script, to: Script)
        -> Result<String, ProviderError>;
}

/// Alternate pluggable capability addressed by language pair instead of
/// script pair. An `Ok` empty string means "no output here" and the
/// dispatcher falls through to the next tier.
pub trait LangTransliterator {
    fn transliterate_by_lang(
        &self,
        text: &str,
        target_lang: &str,
        reader_lang: &str,
    ) -> Result<String, ProviderError>;
}

/// Strategy selector over the optional capabilities and the built-in
/// tables. Absence of a capability is a normal path to the next tier, not
/// an error.
#[derive(Default)]
pub struct Transliterator {
    script_provider: Option<Box<dyn ScriptTransliterator>>,
    lang_provider: Option<Box<dyn LangTransliterator>>,
}

impl Transliterator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_script_provider(mut self, provider: Box<dyn ScriptTransliterator>) -> Self {
        self.script_provider = Some(provider);
        self
    }

    pub fn with_lang_provider(mut self, provider: Box<dyn LangTransliterator>) -> Self {
        self.lang_provider = Some(provider);
        self
    }

    /// Best-effort Latin romanization of `text` written in the script of
    /// `source_lang`. Returns an empty string on any unsupported input.
    pub fn romanize(&self, text: &str, source_lang: &str) -> String {
        if text.is_empty() || source_lang.is_empty() {
            return String::new();
        }
        let Some(from) = Script::for_lang(source_lang) else {
            return String::new();
        };

        if let Some(provider) = &self.script_provider {
            if provider.supports(from) {
                return match provider.transliterate(text, from, Script::Latin) {
                    Ok(out) => out,
                    Err(e) => {
                        warn!(script = from.as_str(), error = %e, "romanization provider failed");
                        String::new()
                    }
                };
            }
        }

        if from == Script::Telugu {
            return ScriptMapping::telugu_to_latin().transliterate(text);
        }

        String::new()
    }

    /// Best-effort rendering of text written in `target_lang`'s script into
    /// the script of `source_lang`'s reader. Returns an empty string on any
    /// unsupported pair.
    pub fn cross_script(&self, text: &str, source_lang: &str, target_lang: &str) -> String {
        if text.is_empty() || source_lang.is_empty() || target_lang.is_empty() {
            return String::new();
        }
        let from = Script::for_lang(target_lang);
        let to = Script::for_lang(source_lang);

        if let (Some(provider), Some(from), Some(to)) = (&self.script_provider, from, to) {
            if provider.supports(from) && provider.supports(to) {
                return match provider.transliterate(text, from, to) {
                    Ok(out) => out,
                    Err(e) => {
                        warn!(
                            from = from.as_str(),
                            to = to.as_str(),
                            error = %e,
                            "cross-script provider failed"
                        );
                        String::new()
                    }
                };
            }
        }

        if let Some(provider) = &self.lang_provider {
            match provider.transliterate_by_lang(text, target_lang, source_lang) {
                Ok(out) if !out.is_empty() => return out,
                Ok(_) => {}
                Err(e) => {
                    warn!(
                        target_lang,
                        reader_lang = source_lang,
                        error = %e,
                        "lang-pair provider failed"
                    );
                    return String::new();
                }
            }
        }

        if target_lang == "hi" && source_lang == "te" {
            return ScriptMapping::devanagari_to_telugu().transliterate(text);
        }

        String::new()
    }
}

/// Provider-free romanization over the built-in tables.
pub fn romanize(text: &str, source_lang: &str) -> String {
    Transliterator::new().romanize(text, source_lang)
}

/// Provider-free cross-script rendering over the built-in tables.
pub fn cross_script_transliterate(text: &str, source_lang: &str, target_lang: &str) -> String {
    Transliterator::new().cross_script(text, source_lang, target_lang)
}
