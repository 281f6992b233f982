//! Locale codes and conversions to standard language identifiers

use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A language and region pair in `language_REGION` form, e.g. `en_US`.
///
/// Construction enforces the shape (two lowercase ASCII letters, an
/// underscore, two uppercase ASCII letters). Whether a code is actually
/// supported is a separate question answered by
/// [`I18nConfig`](crate::config::I18nConfig).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocaleCode(String);

impl LocaleCode {
    /// Parse a locale code, rejecting anything without the expected shape.
    pub fn parse(code: &str) -> I18nResult<Self> {
        if Self::has_valid_shape(code) {
            Ok(Self(code.to_string()))
        } else {
            Err(I18nError::InvalidLocaleCode(code.to_string()))
        }
    }

    fn has_valid_shape(code: &str) -> bool {
        let bytes = code.as_bytes();
        bytes.len() == 5
            && bytes[0].is_ascii_lowercase()
            && bytes[1].is_ascii_lowercase()
            && bytes[2] == b'_'
            && bytes[3].is_ascii_uppercase()
            && bytes[4].is_ascii_uppercase()
    }

    /// The full code, e.g. `"en_US"`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The lowercase language segment, e.g. `"en"`.
    pub fn language(&self) -> &str {
        &self.0[..2]
    }

    /// The uppercase region segment, e.g. `"US"`.
    pub fn region(&self) -> &str {
        &self.0[3..]
    }

    /// Build a locale code from a BCP-47 language tag such as `"en-US"`.
    ///
    /// Returns `None` for tags that do not carry both a language and a
    /// region, or whose segments do not fit the `language_REGION` shape.
    pub fn from_language_tag(tag: &str) -> Option<Self> {
        let identifier: LanguageIdentifier = tag.replace('_', "-").parse().ok()?;
        let region = identifier.region?;
        Self::parse(&format!("{}_{}", identifier.language, region)).ok()
    }

    /// Convert to a standard language identifier (`en_US` becomes `en-US`).
    pub fn to_language_identifier(&self) -> I18nResult<LanguageIdentifier> {
        self.0
            .replace('_', "-")
            .parse()
            .map_err(|_| I18nError::InvalidLocaleCode(self.0.clone()))
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LocaleCode {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LocaleCode {
    type Error = I18nError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LocaleCode> for String {
    fn from(code: LocaleCode) -> Self {
        code.0
    }
}

impl AsRef<str> for LocaleCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_codes() {
        for code in ["en_US", "es_ES", "pt_BR", "zh_CN", "sr_SP"] {
            let parsed = LocaleCode::parse(code).unwrap();
            assert_eq!(parsed.as_str(), code);
        }
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        for code in [
            "", "en", "en-US", "EN_US", "en_us", "eng_US", "en_USA", "en_U", " en_US", "en_US ",
        ] {
            assert!(
                matches!(LocaleCode::parse(code), Err(I18nError::InvalidLocaleCode(_))),
                "Expected {code:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_segments() {
        let code = LocaleCode::parse("pt_BR").unwrap();
        assert_eq!(code.language(), "pt");
        assert_eq!(code.region(), "BR");
    }

    #[test]
    fn test_from_language_tag() {
        assert_eq!(
            LocaleCode::from_language_tag("en-US").unwrap().as_str(),
            "en_US"
        );
        assert_eq!(
            LocaleCode::from_language_tag("PT-br").unwrap().as_str(),
            "pt_BR"
        );
        // Language-only tags carry no region to map.
        assert!(LocaleCode::from_language_tag("en").is_none());
        assert!(LocaleCode::from_language_tag("not a tag").is_none());
    }

    #[test]
    fn test_to_language_identifier() {
        let code = LocaleCode::parse("de_DE").unwrap();
        let identifier = code.to_language_identifier().unwrap();
        assert_eq!(identifier.language.as_str(), "de");
        assert_eq!(identifier.region.map(|r| r.to_string()), Some("DE".to_string()));
    }

    #[test]
    fn test_serde_round_trip() {
        let code = LocaleCode::parse("ja_JP").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"ja_JP\"");
        let back: LocaleCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);

        let rejected: Result<LocaleCode, _> = serde_json::from_str("\"japanese\"");
        assert!(rejected.is_err());
    }
}
