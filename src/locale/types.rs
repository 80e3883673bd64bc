//! Locale codes and translation map values.

use std::collections::HashMap;

use serde::{
    Deserialize,
    Serialize,
};

/// The fixed set of display languages supported by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (the fallback language).
    #[default]
    En,
    /// Spanish.
    Es,
    /// French.
    Fr,
    /// Chinese.
    Zh,
}

/// An ad-hoc locale → display-string mapping supplied at the call site.
///
/// Record-level translation overrides (`title_translations` etc.) use the
/// same shape. A map need not cover all locales; resolution falls back.
pub type TranslationMap = HashMap<Locale, String>;

impl Locale {
    /// All supported locales, in display order.
    pub const ALL: [Self; 4] = [Self::En, Self::Es, Self::Fr, Self::Zh];

    /// Parses a language code. Returns `None` for anything outside the
    /// fixed set.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            "fr" => Some(Self::Fr),
            "zh" => Some(Self::Zh),
            _ => None,
        }
    }

    /// The lowercase language code, as stored and as used in wire data.
    #[must_use]
    pub const fn as_code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::Zh => "zh",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::en("en", Some(Locale::En))]
    #[case::es("es", Some(Locale::Es))]
    #[case::fr("fr", Some(Locale::Fr))]
    #[case::zh("zh", Some(Locale::Zh))]
    #[case::unknown("de", None)]
    #[case::empty("", None)]
    #[case::case_sensitive("EN", None)]
    fn test_from_code(#[case] code: &str, #[case] expected: Option<Locale>) {
        assert_that!(Locale::from_code(code), eq(expected));
    }

    #[rstest]
    fn test_code_round_trip() {
        for locale in Locale::ALL {
            assert_that!(Locale::from_code(locale.as_code()), some(eq(locale)));
        }
    }

    #[rstest]
    fn test_default_is_english() {
        assert_that!(Locale::default(), eq(Locale::En));
    }

    #[rstest]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&Locale::Zh).unwrap();
        assert_that!(json, eq("\"zh\""));

        let locale: Locale = serde_json::from_str("\"fr\"").unwrap();
        assert_that!(locale, eq(Locale::Fr));
    }

    #[rstest]
    fn test_translation_map_keyed_by_code() {
        let json = r#"{"en": "Home", "zh": "首页"}"#;
        let map: TranslationMap = serde_json::from_str(json).unwrap();

        assert_that!(map.get(&Locale::En), some(eq("Home")));
        assert_that!(map.get(&Locale::Zh), some(eq("首页")));
        assert_that!(map.get(&Locale::Fr), none());
    }
}
