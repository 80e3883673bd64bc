//! Locale resolution.
//!
//! Maps a translation key (plus an optional inline translation map) to a
//! display string under the currently active locale, and owns the
//! persistence of that locale across sessions.

mod dictionary;
mod resolver;
mod types;

pub use dictionary::MessageKey;
pub use resolver::{
    LOCALE_STORAGE_KEY,
    LocaleResolver,
};
pub use types::{
    Locale,
    TranslationMap,
};
