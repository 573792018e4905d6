//! Load-time errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a configuration source is not a well-formed
/// declarative object of the expected shape.
///
/// Parse errors cover syntax failures, wrongly-typed fields, and
/// unrecognized fields: malformed shapes are rejected at the boundary
/// instead of being tolerated at use sites.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The JSON source failed to parse into the expected shape.
    #[error("malformed JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
    /// The YAML source failed to parse into the expected shape.
    #[error("malformed YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The file extension names no supported configuration syntax.
    #[error("unsupported configuration format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },
}

/// Error returned when a well-formed configuration is semantically invalid.
///
/// Each variant names the offending field or token so the consuming build
/// process can abort startup with an actionable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The configuration has no `contentGlobs` field.
    #[error("configuration is missing the required 'contentGlobs' field")]
    MissingContent,
    /// `contentGlobs` is present but empty; a scanner with no globs
    /// produces no output.
    #[error("'contentGlobs' must list at least one glob pattern")]
    EmptyContent,
    /// A glob pattern is empty or whitespace-only.
    #[error("'contentGlobs[{index}]' is blank")]
    BlankGlob { index: usize },
    /// `darkModeStrategy` holds something other than `media` or `class`.
    #[error("unknown dark-mode strategy '{value}': expected 'media' or 'class'")]
    UnknownDarkMode { value: String },
    /// A token name appears more than once within one extension category.
    #[error("duplicate token '{token}' in theme extension '{category}'")]
    DuplicateToken { category: String, token: String },
}

/// Umbrella error for the loading operations.
///
/// No failure is recovered internally and no partial configuration is ever
/// returned; an invalid configuration must prevent the dependent engine
/// from starting.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Reading the configuration file failed.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
