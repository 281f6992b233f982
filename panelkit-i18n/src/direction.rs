//! Writing-direction classification for locale codes

use crate::locale::LocaleCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Locale codes whose translations are laid out right-to-left.
const RTL_LOCALES: &[&str] = &["ar_SA", "he_IL"];

/// Text layout direction of a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "ltr")]
    LeftToRight,
    #[serde(rename = "rtl")]
    RightToLeft,
}

impl Direction {
    /// Classify a locale code. Codes outside the known right-to-left set
    /// are left-to-right, including unknown ones.
    pub fn of(code: &LocaleCode) -> Self {
        if is_right_to_left(code) {
            Self::RightToLeft
        } else {
            Self::LeftToRight
        }
    }

    /// The value UI layers assign to the document `dir` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LeftToRight => "ltr",
            Self::RightToLeft => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a locale code belongs to the right-to-left set.
///
/// Membership is keyed on the full code, not the language segment, so only
/// the specific shipped variants count.
pub fn is_right_to_left(code: &LocaleCode) -> bool {
    RTL_LOCALES.contains(&code.as_str())
}
