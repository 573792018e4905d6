//! Dark-mode activation strategy and OS color-scheme detection.

use std::str::FromStr;
use std::sync::Mutex;

use dark_light::{detect as detect_os_scheme, Mode as OsSchemeMode};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::ValidationError;

/// How a consuming style engine activates dark-theme variants.
///
/// `Media` defers to the user's system preference (a media query in CSS
/// terms); `Class` leaves activation to an explicit class toggle owned by
/// the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    /// Follow the system color-scheme preference.
    #[default]
    Media,
    /// Activate via an explicit class set by the application.
    Class,
}

/// A concrete color scheme, once the strategy has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl DarkMode {
    /// Returns the wire name for this strategy.
    pub fn as_str(self) -> &'static str {
        match self {
            DarkMode::Media => "media",
            DarkMode::Class => "class",
        }
    }

    /// Resolves the scheme that currently applies under this strategy.
    ///
    /// For `Media` the OS preference is detected and `explicit` is
    /// ignored. For `Class` the caller's toggle decides; with no toggle
    /// set, light is assumed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use swatch::{ColorScheme, DarkMode};
    ///
    /// let mode = DarkMode::Class;
    /// assert_eq!(mode.active_scheme(Some(ColorScheme::Dark)), ColorScheme::Dark);
    /// assert_eq!(mode.active_scheme(None), ColorScheme::Light);
    /// ```
    pub fn active_scheme(self, explicit: Option<ColorScheme>) -> ColorScheme {
        match self {
            DarkMode::Media => detect_color_scheme(),
            DarkMode::Class => explicit.unwrap_or(ColorScheme::Light),
        }
    }
}

impl FromStr for DarkMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "media" => Ok(DarkMode::Media),
            "class" => Ok(DarkMode::Class),
            other => Err(ValidationError::UnknownDarkMode {
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for DarkMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

type SchemeDetector = fn() -> ColorScheme;

static SCHEME_DETECTOR: Lazy<Mutex<SchemeDetector>> =
    Lazy::new(|| Mutex::new(os_scheme_detector));

/// Overrides the detector used to determine the system color scheme.
///
/// This is useful for testing or when you want to force a specific scheme.
pub fn set_scheme_detector(detector: SchemeDetector) {
    let mut guard = SCHEME_DETECTOR.lock().unwrap();
    *guard = detector;
}

pub(crate) fn detect_color_scheme() -> ColorScheme {
    let detector = SCHEME_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_scheme_detector() -> ColorScheme {
    match detect_os_scheme() {
        OsSchemeMode::Dark => ColorScheme::Dark,
        OsSchemeMode::Light => ColorScheme::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_dark_mode_wire_names() {
        assert_eq!(DarkMode::Media.as_str(), "media");
        assert_eq!(DarkMode::Class.as_str(), "class");
        assert_eq!(DarkMode::Class.to_string(), "class");
    }

    #[test]
    fn test_dark_mode_from_str() {
        assert_eq!("media".parse::<DarkMode>(), Ok(DarkMode::Media));
        assert_eq!("class".parse::<DarkMode>(), Ok(DarkMode::Class));
        assert_eq!(
            "auto".parse::<DarkMode>(),
            Err(ValidationError::UnknownDarkMode {
                value: "auto".to_string()
            })
        );
    }

    #[test]
    fn test_dark_mode_default_is_media() {
        assert_eq!(DarkMode::default(), DarkMode::Media);
    }

    #[test]
    #[serial]
    fn test_media_strategy_uses_detector() {
        set_scheme_detector(|| ColorScheme::Dark);
        assert_eq!(
            DarkMode::Media.active_scheme(None),
            ColorScheme::Dark
        );
        // Media ignores the explicit toggle
        assert_eq!(
            DarkMode::Media.active_scheme(Some(ColorScheme::Light)),
            ColorScheme::Dark
        );

        set_scheme_detector(|| ColorScheme::Light);
        assert_eq!(
            DarkMode::Media.active_scheme(None),
            ColorScheme::Light
        );
    }

    #[test]
    #[serial]
    fn test_class_strategy_ignores_detector() {
        set_scheme_detector(|| ColorScheme::Dark);
        assert_eq!(DarkMode::Class.active_scheme(None), ColorScheme::Light);
        assert_eq!(
            DarkMode::Class.active_scheme(Some(ColorScheme::Dark)),
            ColorScheme::Dark
        );

        set_scheme_detector(|| ColorScheme::Light);
    }
}
