//! Global settings loaded from TOML, following the same OnceLock pattern as
//! the transliteration tables.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::script::Script;
use crate::translate::is_known_provider;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub translation: TranslationSettings,
    pub languages: LanguageSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationSettings {
    pub timeout_secs: u64,
    pub providers: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageSettings {
    pub default_source: String,
    pub default_target: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.translation.timeout_secs == 0 {
        return Err(SettingsError::InvalidValue {
            field: "translation.timeout_secs".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    if s.translation.providers.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "translation.providers".to_string(),
            reason: "must name at least one provider".to_string(),
        });
    }
    for name in &s.translation.providers {
        if !is_known_provider(name) {
            return Err(SettingsError::InvalidValue {
                field: "translation.providers".to_string(),
                reason: format!("unknown provider '{name}'"),
            });
        }
    }
    if s.languages.default_source != "auto" && Script::for_lang(&s.languages.default_source).is_none()
    {
        return Err(SettingsError::InvalidValue {
            field: "languages.default_source".to_string(),
            reason: format!("unsupported code '{}'", s.languages.default_source),
        });
    }
    if Script::for_lang(&s.languages.default_target).is_none() {
        return Err(SettingsError::InvalidValue {
            field: "languages.default_target".to_string(),
            reason: format!("unsupported code '{}'", s.languages.default_target),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.translation.timeout_secs, 8);
        assert_eq!(
            s.translation.providers,
            vec!["mymemory", "libretranslate", "google"]
        );
        assert_eq!(s.languages.default_source, "auto");
        assert_eq!(s.languages.default_target, "en");
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[translation]
timeout_secs = 3
providers = ["google"]

[languages]
default_source = "te"
default_target = "hi"
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.translation.timeout_secs, 3);
        assert_eq!(s.translation.providers, vec!["google"]);
        assert_eq!(s.languages.default_source, "te");
    }

    #[test]
    fn error_zero_timeout() {
        let toml = r#"
[translation]
timeout_secs = 0
providers = ["google"]

[languages]
default_source = "auto"
default_target = "en"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn error_unknown_provider() {
        let toml = r#"
[translation]
timeout_secs = 8
providers = ["deepl"]

[languages]
default_source = "auto"
default_target = "en"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("deepl"));
    }

    #[test]
    fn error_empty_providers() {
        let toml = r#"
[translation]
timeout_secs = 8
providers = []

[languages]
default_source = "auto"
default_target = "en"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn error_bad_language_codes() {
        let toml = r#"
[translation]
timeout_secs = 8
providers = ["google"]

[languages]
default_source = "xx"
default_target = "en"
"#;
        assert!(parse_settings_toml(toml)
            .unwrap_err()
            .to_string()
            .contains("default_source"));

        let toml = r#"
[translation]
timeout_secs = 8
providers = ["google"]

[languages]
default_source = "auto"
default_target = "zz"
"#;
        assert!(parse_settings_toml(toml)
            .unwrap_err()
            .to_string()
            .contains("default_target"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[translation]
timeout_secs = 8
providers = ["google"]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
