//! Status code classification for display.
//!
//! The bands are narrow (200-220, not all of 2xx). Codes outside every band,
//! such as 226 or 451, print without color.

use std::fmt;

/// ANSI escape that ends a colored span.
pub const RESET: &str = "\x1b[0m";
/// Bright green.
pub const LIME: &str = "\x1b[92m";
/// 256-color orange.
pub const ORANGE: &str = "\x1b[38;5;208m";
/// Bright red.
pub const RED: &str = "\x1b[91m";
/// Bright blue.
pub const BLUE: &str = "\x1b[94m";

/// Display bucket for an HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    /// 200 through 220.
    Success,
    /// 300 through 320.
    Redirect,
    /// 400 through 420.
    ClientError,
    /// 500 through 550.
    ServerError,
    /// Anything else.
    Unclassified,
}

impl StatusCategory {
    /// Classify a status code. Ranges are inclusive.
    pub fn classify(code: u16) -> Self {
        match code {
            200..=220 => Self::Success,
            300..=320 => Self::Redirect,
            400..=420 => Self::ClientError,
            500..=550 => Self::ServerError,
            _ => Self::Unclassified,
        }
    }

    /// ANSI color for this bucket, if it has one.
    pub fn color(self) -> Option<&'static str> {
        match self {
            Self::Success => Some(LIME),
            Self::Redirect => Some(ORANGE),
            Self::ClientError => Some(RED),
            Self::ServerError => Some(BLUE),
            Self::Unclassified => None,
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Redirect => write!(f, "redirect"),
            Self::ClientError => write!(f, "client-error"),
            Self::ServerError => write!(f, "server-error"),
            Self::Unclassified => write!(f, "unclassified"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        let cases = [
            (199, StatusCategory::Unclassified),
            (200, StatusCategory::Success),
            (220, StatusCategory::Success),
            (221, StatusCategory::Unclassified),
            (299, StatusCategory::Unclassified),
            (300, StatusCategory::Redirect),
            (320, StatusCategory::Redirect),
            (321, StatusCategory::Unclassified),
            (399, StatusCategory::Unclassified),
            (400, StatusCategory::ClientError),
            (420, StatusCategory::ClientError),
            (421, StatusCategory::Unclassified),
            (499, StatusCategory::Unclassified),
            (500, StatusCategory::ServerError),
            (550, StatusCategory::ServerError),
            (551, StatusCategory::Unclassified),
            (0, StatusCategory::Unclassified),
            (100, StatusCategory::Unclassified),
            (999, StatusCategory::Unclassified),
        ];
        for (code, expected) in cases {
            assert_eq!(StatusCategory::classify(code), expected, "code {}", code);
        }
    }

    #[test]
    fn test_every_code_in_band() {
        for code in 0..=1000u16 {
            let expected = if (200..=220).contains(&code) {
                StatusCategory::Success
            } else if (300..=320).contains(&code) {
                StatusCategory::Redirect
            } else if (400..=420).contains(&code) {
                StatusCategory::ClientError
            } else if (500..=550).contains(&code) {
                StatusCategory::ServerError
            } else {
                StatusCategory::Unclassified
            };
            assert_eq!(StatusCategory::classify(code), expected);
        }
    }

    #[test]
    fn test_colors() {
        assert_eq!(StatusCategory::Success.color(), Some("\x1b[92m"));
        assert_eq!(StatusCategory::Redirect.color(), Some("\x1b[38;5;208m"));
        assert_eq!(StatusCategory::ClientError.color(), Some("\x1b[91m"));
        assert_eq!(StatusCategory::ServerError.color(), Some("\x1b[94m"));
        assert_eq!(StatusCategory::Unclassified.color(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(StatusCategory::ClientError.to_string(), "client-error");
    }
}
