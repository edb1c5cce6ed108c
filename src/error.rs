// SPDX-License-Identifier: MPL-2.0
use crate::i18n::{strings, LocaleText};
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Preview(PreviewError),
    Link(String),
}

/// Specific error types for the preview overlay.
/// Used to pick a user-friendly, localized message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewError {
    /// The preview asset does not exist for this book and locale.
    Missing,

    /// The asset exists but could not be read.
    Unreadable(String),
}

impl PreviewError {
    /// Returns the localized message shown inside the overlay.
    #[must_use]
    pub fn user_text(&self) -> LocaleText {
        // Both failure modes surface the same message to the user; the
        // distinction only matters for the log line.
        match self {
            PreviewError::Missing | PreviewError::Unreadable(_) => strings::PREVIEW_UNAVAILABLE,
        }
    }

    /// Categorizes an I/O failure reported by the asset loader.
    #[must_use]
    pub fn from_io(err: &std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            PreviewError::Missing
        } else {
            PreviewError::Unreadable(err.to_string())
        }
    }
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewError::Missing => write!(f, "Preview asset not found"),
            PreviewError::Unreadable(msg) => write!(f, "Preview asset unreadable: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Preview(e) => write!(f, "Preview Error: {}", e),
            Error::Link(e) => write!(f, "Link Error: {}", e),
        }
    }
}

impl From<PreviewError> for Error {
    fn from(err: PreviewError) -> Self {
        Error::Preview(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn missing_asset_maps_to_missing_variant() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(matches!(
            PreviewError::from_io(&io_error),
            PreviewError::Missing
        ));
    }

    #[test]
    fn other_io_failures_map_to_unreadable() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        assert!(matches!(
            PreviewError::from_io(&io_error),
            PreviewError::Unreadable(_)
        ));
    }

    #[test]
    fn preview_error_user_text_is_localized() {
        let text = PreviewError::Missing.user_text();
        assert_ne!(text.get(Locale::En), text.get(Locale::Ua));
    }
}
