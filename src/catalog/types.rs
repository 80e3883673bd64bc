//! Record types for the program and artist listings.

use std::collections::HashMap;

use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::locale::{
    Locale,
    TranslationMap,
};

/// The fixed classification of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionCategory {
    /// A talk on the main or secondary stages.
    Talk,
    /// A hands-on workshop with limited capacity.
    Workshop,
    /// A live performance.
    Performance,
    /// A moderated panel.
    Panel,
}

impl SessionCategory {
    /// Every category, in the order the filter chips render them.
    pub const ALL: [Self; 4] = [Self::Talk, Self::Workshop, Self::Performance, Self::Panel];

    /// Parses the lowercase wire name.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "talk" => Some(Self::Talk),
            "workshop" => Some(Self::Workshop),
            "performance" => Some(Self::Performance),
            "panel" => Some(Self::Panel),
            _ => None,
        }
    }

    /// The lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Talk => "talk",
            Self::Workshop => "workshop",
            Self::Performance => "performance",
            Self::Panel => "panel",
        }
    }
}

/// A lightweight reference to the venue a session takes place in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRef {
    /// Venue display name.
    pub name: String,
}

/// A lightweight reference to an artist appearing in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRef {
    /// Artist display name.
    pub name: String,

    /// Avatar URL; may be empty.
    #[serde(default)]
    pub image_url: String,
}

/// One scheduled program item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Record identity, assigned by the data source.
    pub id: String,

    /// Base title, used when no translation covers the active locale.
    pub title: String,

    /// Per-locale title overrides.
    #[serde(default)]
    pub title_translations: TranslationMap,

    /// Short description (untranslated in the source data).
    pub description: String,

    /// Category tag, `session_type` on the wire.
    #[serde(rename = "session_type")]
    pub category: SessionCategory,

    /// Scheduled start.
    pub start_time: DateTime<Utc>,

    /// Scheduled end.
    pub end_time: DateTime<Utc>,

    /// Identity of the venue row this session references.
    pub location_id: String,

    /// Whether the session is broadcast on the live stream.
    #[serde(default)]
    pub is_live_streamed: bool,

    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Resolved venue reference, when the source joined it in.
    #[serde(default)]
    pub location: Option<LocationRef>,

    /// Artists appearing in this session.
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
}

impl SessionRecord {
    /// The title for `locale`, falling back to the base title.
    #[must_use]
    pub fn localized_title(&self, locale: Locale) -> &str {
        self.title_translations.get(&locale).map_or(&self.title, String::as_str)
    }
}

/// One artist in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRecord {
    /// Record identity, assigned by the data source.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Base bio, used when no translation covers the active locale.
    pub bio: String,

    /// Per-locale bio overrides.
    #[serde(default)]
    pub bio_translations: TranslationMap,

    /// Portrait URL; may be empty.
    #[serde(default)]
    pub image_url: String,

    /// Personal website, when published.
    #[serde(default)]
    pub website: Option<String>,

    /// Social links keyed by platform name.
    #[serde(default)]
    pub social_links: HashMap<String, String>,

    /// Free-form tags driving the directory filter.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ArtistRecord {
    /// The bio for `locale`, falling back to the base bio.
    #[must_use]
    pub fn localized_bio(&self, locale: Locale) -> &str {
        self.bio_translations.get(&locale).map_or(&self.bio, String::as_str)
    }
}
