//! Parsing declarative sources into validated configurations.
//!
//! Every loader funnels through one raw shape and one validation pass:
//! the raw layer rejects malformed structure ([`ParseError`]) and the
//! validation pass rejects well-formed but invalid data
//! ([`ValidationError`]). No loader can return a partially valid
//! configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config::{DarkMode, RawExtensions, StyleConfig};
use crate::error::{ConfigError, ParseError, ValidationError};

/// The declarative surface as parsed, before validation.
///
/// Fields are camelCase on the wire. Unrecognized fields are rejected at
/// this boundary rather than tolerated at use sites.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct RawConfig {
    dark_mode_strategy: Option<String>,
    content_globs: Option<Vec<String>>,
    theme_extensions: Option<RawExtensions>,
    plugins: Option<Vec<String>>,
}

impl RawConfig {
    fn validate(self) -> Result<StyleConfig, ValidationError> {
        let dark_mode = match self.dark_mode_strategy {
            Some(value) => value.parse::<DarkMode>()?,
            None => DarkMode::default(),
        };
        let content = self.content_globs.ok_or(ValidationError::MissingContent)?;
        let extensions = self.theme_extensions.unwrap_or_default().into_entries();
        let plugins = self.plugins.unwrap_or_default();
        StyleConfig::assemble(dark_mode, content, extensions, plugins)
    }
}

/// Loads a configuration from a JSON object literal.
///
/// This is the front door for the crate; see [`StyleConfig`] for the
/// resulting value and the crate docs for a worked example.
///
/// # Errors
///
/// - [`ConfigError::Parse`] when the source is not a well-formed object
///   of the declared shape.
/// - [`ConfigError::Validation`] when the object is well-formed but
///   semantically invalid (no globs, unknown dark-mode strategy,
///   duplicate extension token).
pub fn load(source: &str) -> Result<StyleConfig, ConfigError> {
    StyleConfig::from_json_str(source)
}

impl StyleConfig {
    /// Loads a configuration from JSON text. Equivalent to [`load`].
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(source).map_err(ParseError::from)?;
        Ok(raw.validate()?)
    }

    /// Loads a configuration from YAML text, under the same contract as
    /// [`load`].
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_yaml::from_str(source).map_err(ParseError::from)?;
        Ok(raw.validate()?)
    }

    /// Loads a configuration from an already-parsed JSON tree.
    ///
    /// A pre-built [`serde_json::Value`] has already collapsed duplicate
    /// map keys, so duplicate-token detection only applies to the textual
    /// loaders; all other validation rules apply unchanged.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_value(value).map_err(ParseError::from)?;
        Ok(raw.validate()?)
    }

    /// Reads and loads a configuration file, dispatching on its
    /// extension (`.json`, `.yaml`, `.yml`).
    ///
    /// # Errors
    ///
    /// In addition to the [`load`] failures, returns
    /// [`ConfigError::Read`] when the file cannot be read and
    /// [`ParseError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&source),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&source),
            _ => Err(ParseError::UnsupportedFormat {
                path: path.to_path_buf(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn load_validation_err(source: &str) -> ValidationError {
        match load(source).unwrap_err() {
            ConfigError::Validation(err) => err,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_minimal() {
        let config = load(r#"{"contentGlobs": ["./src/**/*.rs"]}"#).unwrap();
        assert_eq!(config.dark_mode(), DarkMode::Media);
        assert_eq!(config.content(), ["./src/**/*.rs"]);
        assert!(config.theme_extensions().is_empty());
        assert!(config.plugins().is_empty());
    }

    #[test]
    fn test_load_full_config_verbatim() {
        let config = load(
            r#"{
                "darkModeStrategy": "class",
                "contentGlobs": [
                    "./app/src/**/*.rs",
                    "./app-web/src/**/*.rs",
                    "./app-web/index.html"
                ],
                "themeExtensions": {
                    "gridTemplateColumns": {
                        "fit-keystone": "repeat(auto-fit, minmax(min(25ch, 100%), 1fr))",
                        "fit-mastery": "repeat(auto-fit, minmax(min(40ch, 100%), 1fr))"
                    }
                },
                "plugins": []
            }"#,
        )
        .unwrap();

        assert_eq!(config.dark_mode(), DarkMode::Class);
        assert_eq!(
            config.content(),
            [
                "./app/src/**/*.rs",
                "./app-web/src/**/*.rs",
                "./app-web/index.html"
            ]
        );
        assert_eq!(
            config
                .theme_extensions()
                .token("gridTemplateColumns", "fit-mastery"),
            Some("repeat(auto-fit, minmax(min(40ch, 100%), 1fr))")
        );
        assert!(config.plugins().is_empty());
    }

    #[test]
    fn test_load_ordered_globs() {
        let config = load(
            r#"{"contentGlobs": ["./app/src/**/*.rs", "./app/index.html"], "darkModeStrategy": "class"}"#,
        )
        .unwrap();
        assert_eq!(config.dark_mode(), DarkMode::Class);
        assert_eq!(config.content(), ["./app/src/**/*.rs", "./app/index.html"]);
    }

    #[test]
    fn test_load_missing_content() {
        assert!(load("{}").unwrap_err().to_string().contains("contentGlobs"));
        assert_eq!(
            load_validation_err(r#"{"darkModeStrategy": "media"}"#),
            ValidationError::MissingContent
        );
    }

    #[test]
    fn test_load_empty_content() {
        assert_eq!(
            load_validation_err(r#"{"contentGlobs": []}"#),
            ValidationError::EmptyContent
        );
    }

    #[test]
    fn test_load_blank_glob() {
        assert_eq!(
            load_validation_err(r#"{"contentGlobs": ["./src/**/*.rs", ""]}"#),
            ValidationError::BlankGlob { index: 1 }
        );
    }

    #[test]
    fn test_load_unknown_dark_mode() {
        assert_eq!(
            load_validation_err(r#"{"contentGlobs": ["a"], "darkModeStrategy": "invalid"}"#),
            ValidationError::UnknownDarkMode {
                value: "invalid".to_string()
            }
        );
    }

    #[test]
    fn test_load_duplicate_token() {
        let source = r#"{
            "contentGlobs": ["a"],
            "themeExtensions": {"gridTemplateColumns": {"x": "1fr", "x": "2fr"}}
        }"#;
        assert_eq!(
            load_validation_err(source),
            ValidationError::DuplicateToken {
                category: "gridTemplateColumns".to_string(),
                token: "x".to_string(),
            }
        );
    }

    #[test]
    fn test_load_rejects_unknown_field() {
        let err = load(r#"{"contentGlobs": ["a"], "darkMode": "class"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(ParseError::Json(_))));
    }

    #[test]
    fn test_load_rejects_malformed_source() {
        let err = load("not json at all").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = load(r#"{"contentGlobs": "./src"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_is_idempotent() {
        let source = r#"{"contentGlobs": ["a", "b"], "darkModeStrategy": "class"}"#;
        assert_eq!(load(source).unwrap(), load(source).unwrap());
    }

    #[test]
    fn test_from_yaml_str() {
        let config = StyleConfig::from_yaml_str(
            "darkModeStrategy: class\ncontentGlobs:\n  - ./src/**/*.rs\n",
        )
        .unwrap();
        assert_eq!(config.dark_mode(), DarkMode::Class);
        assert_eq!(config.content(), ["./src/**/*.rs"]);
    }

    #[test]
    fn test_from_yaml_str_validation() {
        let err = StyleConfig::from_yaml_str("contentGlobs: []\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Validation(ValidationError::EmptyContent)
        ));
    }

    #[test]
    fn test_from_value() {
        let config = StyleConfig::from_value(json!({
            "contentGlobs": ["./src/**/*.rs"],
            "themeExtensions": {"gridTemplateColumns": {"wide": "1fr"}}
        }))
        .unwrap();
        assert_eq!(
            config.theme_extensions().token("gridTemplateColumns", "wide"),
            Some("1fr")
        );
    }
}
