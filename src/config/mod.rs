//! The validated style configuration and its builder.
//!
//! This module provides the core configuration types:
//!
//! - [`StyleConfig`]: the immutable, validated configuration value
//! - [`StyleConfigBuilder`]: fluent programmatic construction
//! - [`DarkMode`] / [`ColorScheme`]: dark-mode strategy and resolution
//! - [`ThemeExtensions`]: validated design-token override tables

mod dark_mode;
mod theme_ext;

pub use dark_mode::{set_scheme_detector, ColorScheme, DarkMode};
pub use theme_ext::ThemeExtensions;

pub(crate) use theme_ext::RawExtensions;

use serde::Serialize;

use crate::error::ValidationError;

/// A validated style configuration for a utility-CSS engine.
///
/// Constructed once via [`crate::load`] (or the other loaders) or via
/// [`StyleConfig::builder`], immutable thereafter. Every constructor runs
/// the same validation pass; a `StyleConfig` in hand is always valid.
///
/// The value is plain data with no interior mutability, so it can be
/// shared freely across threads.
///
/// # Example
///
/// ```rust
/// use swatch::DarkMode;
///
/// let config = swatch::load(r#"{
///     "darkModeStrategy": "class",
///     "contentGlobs": ["./app/src/**/*.rs", "./app/index.html"]
/// }"#).unwrap();
///
/// assert_eq!(config.dark_mode(), DarkMode::Class);
/// assert_eq!(config.content(), ["./app/src/**/*.rs", "./app/index.html"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleConfig {
    #[serde(rename = "darkModeStrategy")]
    dark_mode: DarkMode,
    #[serde(rename = "contentGlobs")]
    content: Vec<String>,
    #[serde(rename = "themeExtensions", skip_serializing_if = "ThemeExtensions::is_empty")]
    theme_extensions: ThemeExtensions,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    plugins: Vec<String>,
}

impl StyleConfig {
    /// Starts a fluent builder.
    pub fn builder() -> StyleConfigBuilder {
        StyleConfigBuilder::default()
    }

    /// The dark-mode activation strategy.
    pub fn dark_mode(&self) -> DarkMode {
        self.dark_mode
    }

    /// The glob patterns scanned for class usage, in declaration order.
    pub fn content(&self) -> &[String] {
        &self.content
    }

    /// The validated theme extension tables.
    pub fn theme_extensions(&self) -> &ThemeExtensions {
        &self.theme_extensions
    }

    /// Plugin identifiers, in declaration order.
    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }

    /// Single validation funnel shared by the loaders and the builder.
    pub(crate) fn assemble(
        dark_mode: DarkMode,
        content: Vec<String>,
        extension_entries: Vec<(String, Vec<(String, String)>)>,
        plugins: Vec<String>,
    ) -> Result<Self, ValidationError> {
        if content.is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        for (index, glob) in content.iter().enumerate() {
            if glob.trim().is_empty() {
                return Err(ValidationError::BlankGlob { index });
            }
        }
        let theme_extensions = ThemeExtensions::from_entries(extension_entries)?;
        Ok(Self {
            dark_mode,
            content,
            theme_extensions,
            plugins,
        })
    }
}

/// Fluent builder for [`StyleConfig`].
///
/// # Example
///
/// ```rust
/// use swatch::{DarkMode, StyleConfig};
///
/// let config = StyleConfig::builder()
///     .dark_mode(DarkMode::Class)
///     .content_glob("./app/src/**/*.rs")
///     .content_glob("./app/index.html")
///     .extend_theme("gridTemplateColumns", "fit-keystone", "repeat(auto-fit, minmax(min(25ch, 100%), 1fr))")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.content().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleConfigBuilder {
    dark_mode: DarkMode,
    content: Vec<String>,
    extensions: Vec<(String, Vec<(String, String)>)>,
    plugins: Vec<String>,
}

impl StyleConfigBuilder {
    /// Sets the dark-mode strategy. Defaults to [`DarkMode::Media`].
    pub fn dark_mode(mut self, mode: DarkMode) -> Self {
        self.dark_mode = mode;
        self
    }

    /// Appends a content glob pattern, preserving call order.
    pub fn content_glob(mut self, pattern: impl Into<String>) -> Self {
        self.content.push(pattern.into());
        self
    }

    /// Appends a theme extension token. Registering the same token twice
    /// within a category fails at [`build`](Self::build).
    pub fn extend_theme(
        mut self,
        category: impl Into<String>,
        token: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.extensions
            .push((category.into(), vec![(token.into(), value.into())]));
        self
    }

    /// Appends a plugin identifier.
    pub fn plugin(mut self, handle: impl Into<String>) -> Self {
        self.plugins.push(handle.into());
        self
    }

    /// Validates and produces the configuration.
    ///
    /// # Errors
    ///
    /// Fails under exactly the same rules as the loaders: no globs, a
    /// blank glob, or a duplicate extension token.
    pub fn build(self) -> Result<StyleConfig, ValidationError> {
        StyleConfig::assemble(self.dark_mode, self.content, self.extensions, self.plugins)
    }
}
