//! Typed loading and validation for utility-CSS style configuration.
//!
//! A style-resolution engine is driven by a small declarative
//! configuration: which dark-mode strategy to use, which source files to
//! scan for class usage, and which design-token tables to extend. This
//! crate owns that configuration surface. It parses a declarative source
//! (JSON or YAML text, or an already-parsed tree), validates it once at
//! the boundary, and hands the engine an immutable [`StyleConfig`].
//!
//! Invalid configuration never reaches the engine: a missing or empty
//! glob list, an unrecognized dark-mode strategy, or a duplicate token
//! within an extension category all fail the load with a typed error that
//! names the offending field.
//!
//! # Example
//!
//! ```rust
//! use swatch::DarkMode;
//!
//! let config = swatch::load(r#"{
//!     "darkModeStrategy": "class",
//!     "contentGlobs": ["./app/src/**/*.rs", "./app/index.html"],
//!     "themeExtensions": {
//!         "gridTemplateColumns": {
//!             "fit-keystone": "repeat(auto-fit, minmax(min(25ch, 100%), 1fr))"
//!         }
//!     }
//! }"#).unwrap();
//!
//! assert_eq!(config.dark_mode(), DarkMode::Class);
//! assert_eq!(config.content().len(), 2);
//! ```
//!
//! Programmatic construction goes through the builder, under the same
//! validation rules:
//!
//! ```rust
//! use swatch::StyleConfig;
//!
//! let config = StyleConfig::builder()
//!     .content_glob("./src/**/*.rs")
//!     .build()
//!     .unwrap();
//! assert!(config.plugins().is_empty());
//! ```

mod config;
mod error;
mod loader;

pub use config::{
    set_scheme_detector, ColorScheme, DarkMode, StyleConfig, StyleConfigBuilder, ThemeExtensions,
};
pub use error::{ConfigError, ParseError, ValidationError};
pub use loader::load;
