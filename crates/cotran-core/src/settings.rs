//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

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
    pub suggest: SuggestSettings,
    pub tokenize: TokenizeSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestSettings {
    /// Minimum phrase confidence for extending a suggestion; within [0, 1].
    pub confidence_threshold: f64,
    pub break_on_punctuation: bool,
    /// Default suggestion count for callers that do not pass `n` explicitly.
    pub max_results: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenizeSettings {
    /// Words whose trailing period stays attached (stored lowercase).
    #[serde(default)]
    pub abbreviations: Vec<String>,
    #[serde(default)]
    pub treat_apostrophe_as_single_quote: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if !(0.0..=1.0).contains(&s.suggest.confidence_threshold) {
        return Err(SettingsError::InvalidValue {
            field: "suggest.confidence_threshold".to_string(),
            reason: "must be within [0, 1]".to_string(),
        });
    }
    if s.suggest.max_results == 0 {
        return Err(SettingsError::InvalidValue {
            field: "suggest.max_results".to_string(),
            reason: "must be positive".to_string(),
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
        assert_eq!(s.suggest.confidence_threshold, 0.0);
        assert!(s.suggest.break_on_punctuation);
        assert_eq!(s.suggest.max_results, 5);
        assert!(s.tokenize.abbreviations.is_empty());
        assert!(!s.tokenize.treat_apostrophe_as_single_quote);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[suggest]
confidence_threshold = 0.25
break_on_punctuation = false
max_results = 3

[tokenize]
abbreviations = ["mr", "dr"]
treat_apostrophe_as_single_quote = true
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.suggest.confidence_threshold, 0.25);
        assert!(!s.suggest.break_on_punctuation);
        assert_eq!(s.suggest.max_results, 3);
        assert_eq!(s.tokenize.abbreviations, vec!["mr", "dr"]);
        assert!(s.tokenize.treat_apostrophe_as_single_quote);
    }

    #[test]
    fn error_threshold_out_of_range() {
        let toml = r#"
[suggest]
confidence_threshold = 1.5
break_on_punctuation = true
max_results = 5

[tokenize]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("suggest.confidence_threshold"));
    }

    #[test]
    fn error_zero_max_results() {
        let toml = r#"
[suggest]
confidence_threshold = 0.0
break_on_punctuation = true
max_results = 0

[tokenize]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("suggest.max_results"));
    }

    #[test]
    fn tokenize_fields_default_when_omitted() {
        let toml = r#"
[suggest]
confidence_threshold = 0.0
break_on_punctuation = true
max_results = 5

[tokenize]
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert!(s.tokenize.abbreviations.is_empty());
        assert!(!s.tokenize.treat_apostrophe_as_single_quote);
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[suggest]
confidence_threshold = 0.0
break_on_punctuation = true
max_results = 5
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
