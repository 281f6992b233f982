//! Startup locale resolution

use crate::config::I18nConfig;
use crate::locale::LocaleCode;
use tracing::debug;

/// Language tags reported by the host environment, most preferred first.
pub fn system_languages() -> Vec<String> {
    sys_locale::get_locales().collect()
}

/// Pick the locale to activate at startup.
///
/// A persisted preference wins outright when it parses and is supported.
/// Otherwise each environment tag is tried in preference order: first an
/// exact match against the supported set, then a match on the language
/// segment alone, both honoring the declared order of the supported set.
/// A language-segment match on a more preferred tag beats an exact match
/// on a less preferred one. When nothing matches, the configured default
/// is returned.
pub fn resolve_locale<S: AsRef<str>>(
    persisted: Option<&str>,
    env_languages: &[S],
    config: &I18nConfig,
) -> LocaleCode {
    if let Some(saved) = persisted {
        if let Ok(code) = LocaleCode::parse(saved) {
            if config.is_supported(&code) {
                debug!("Using persisted locale preference: {}", code);
                return code;
            }
        }
        debug!("Ignoring persisted locale preference: {:?}", saved);
    }

    for tag in env_languages {
        let normalized = normalize_language_tag(tag.as_ref());
        if normalized.is_empty() {
            continue;
        }
        if let Some(code) = exact_match(&normalized, &config.supported) {
            debug!("Environment tag {:?} matched {} exactly", tag.as_ref(), code);
            return code.clone();
        }
        if let Some(code) = language_match(&normalized, &config.supported) {
            debug!("Environment tag {:?} matched {} by language", tag.as_ref(), code);
            return code.clone();
        }
    }

    config.default_locale.clone()
}

/// Hyphen-to-underscore, lowercased form of an environment language tag.
fn normalize_language_tag(tag: &str) -> String {
    tag.trim().replace('-', "_").to_ascii_lowercase()
}

fn exact_match<'a>(normalized: &str, supported: &'a [LocaleCode]) -> Option<&'a LocaleCode> {
    supported
        .iter()
        .find(|code| code.as_str().eq_ignore_ascii_case(normalized))
}

fn language_match<'a>(normalized: &str, supported: &'a [LocaleCode]) -> Option<&'a LocaleCode> {
    let language = normalized.split('_').next().unwrap_or(normalized);
    supported.iter().find(|code| code.language() == language)
}
