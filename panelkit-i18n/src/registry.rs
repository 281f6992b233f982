//! Locale listing with display labels for selector UIs

use crate::locale::LocaleCode;
use std::collections::HashSet;

/// A supported locale paired with its display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleEntry {
    /// The locale code the UI submits back on selection
    pub code: LocaleCode,
    /// Native-language name shown to the user
    pub label: String,
}

/// Native display names for the locales the console ships, keyed by code.
const NATIVE_NAMES: &[(&str, &str)] = &[
    ("ar_SA", "العربية"),
    ("cs_CZ", "Čeština"),
    ("da_DK", "Dansk"),
    ("de_DE", "Deutsch"),
    ("el_GR", "Ελληνικά"),
    ("en_GB", "English (UK)"),
    ("en_US", "English (US)"),
    ("es_ES", "Español"),
    ("fi_FI", "Suomi"),
    ("fr_FR", "Français"),
    ("he_IL", "עברית"),
    ("hu_HU", "Magyar"),
    ("id_ID", "Bahasa Indonesia"),
    ("it_IT", "Italiano"),
    ("ja_JP", "日本語"),
    ("ko_KR", "한국어"),
    ("nl_NL", "Nederlands"),
    ("no_NO", "Norsk"),
    ("pl_PL", "Polski"),
    ("pt_BR", "Português (Brasil)"),
    ("pt_PT", "Português (Portugal)"),
    ("ro_RO", "Română"),
    ("ru_RU", "Русский"),
    ("sr_RS", "Српски"),
    ("sv_SE", "Svenska"),
    ("th_TH", "ไทย"),
    ("tr_TR", "Türkçe"),
    ("uk_UA", "Українська"),
    ("vi_VN", "Tiếng Việt"),
    ("zh_CN", "简体中文"),
    ("zh_TW", "繁體中文"),
];

/// Best-effort display label for a locale code.
///
/// The translation platform exports Serbian under the obsolete `SP` country
/// code; the label is looked up under `RS` while the code itself stays as
/// shipped. Codes with no known label return `None`.
pub fn display_label(code: &LocaleCode) -> Option<String> {
    let key = match code.as_str() {
        "sr_SP" => "sr_RS",
        other => other,
    };
    NATIVE_NAMES
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, label)| (*label).to_string())
}

/// Build the selector listing for a set of candidate locale codes.
///
/// Codes without the `language_REGION` shape are skipped, duplicates keep
/// their first occurrence, and codes with no derivable label are dropped
/// from the listing (they may still be activated directly).
pub fn locale_listing<I, S>(candidates: I) -> Vec<LocaleEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    for raw in candidates {
        let code = match LocaleCode::parse(raw.as_ref()) {
            Ok(code) => code,
            Err(_) => continue,
        };
        if !seen.insert(code.clone()) {
            continue;
        }
        if let Some(label) = display_label(&code) {
            entries.push(LocaleEntry { code, label });
        }
    }
    entries
}
