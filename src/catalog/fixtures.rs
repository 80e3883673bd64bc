//! Built-in fixture records.
//!
//! The development data set served by [`FixtureSource`](super::FixtureSource)
//! while the production backing store is unavailable.

use std::collections::HashMap;

use chrono::{
    DateTime,
    TimeZone,
    Utc,
};

use crate::locale::{
    Locale,
    TranslationMap,
};

use super::types::{
    ArtistRecord,
    ArtistRef,
    LocationRef,
    SessionCategory,
    SessionRecord,
};

/// Builds a UTC timestamp from calendar fields.
///
/// Fixture dates are always valid; an out-of-range input degenerates to the
/// UNIX epoch rather than panicking.
fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).single().unwrap_or_default()
}

/// Builds a translation map from `(locale, text)` pairs.
fn translations(entries: &[(Locale, &str)]) -> TranslationMap {
    entries.iter().map(|(locale, text)| (*locale, (*text).to_string())).collect()
}

/// The sample program listing.
#[must_use]
pub fn sample_sessions() -> Vec<SessionRecord> {
    vec![
        SessionRecord {
            id: "1".to_string(),
            title: "The Future of Digital Art".to_string(),
            title_translations: translations(&[
                (Locale::En, "The Future of Digital Art"),
                (Locale::Es, "El Futuro del Arte Digital"),
                (Locale::Fr, "L'Avenir de l'Art Numérique"),
                (Locale::Zh, "数字艺术的未来"),
            ]),
            description: "Exploring the cutting edge of digital creativity".to_string(),
            category: SessionCategory::Talk,
            start_time: utc(2026, 4, 16, 10, 0),
            end_time: utc(2026, 4, 16, 11, 0),
            location_id: "1".to_string(),
            is_live_streamed: true,
            tags: vec!["digital".to_string(), "art".to_string(), "future".to_string()],
            location: Some(LocationRef { name: "Main Stage".to_string() }),
            artists: vec![
                ArtistRef { name: "Alex Chen".to_string(), image_url: String::new() },
                ArtistRef { name: "Maria Santos".to_string(), image_url: String::new() },
            ],
        },
        SessionRecord {
            id: "2".to_string(),
            title: "Interactive Design Workshop".to_string(),
            title_translations: translations(&[
                (Locale::En, "Interactive Design Workshop"),
                (Locale::Es, "Taller de Diseño Interactivo"),
                (Locale::Fr, "Atelier de Design Interactif"),
                (Locale::Zh, "交互设计工作坊"),
            ]),
            description: "Hands-on workshop about interactive design".to_string(),
            category: SessionCategory::Workshop,
            start_time: utc(2026, 4, 16, 14, 0),
            end_time: utc(2026, 4, 16, 16, 0),
            location_id: "2".to_string(),
            is_live_streamed: false,
            tags: vec!["design".to_string(), "interactive".to_string()],
            location: Some(LocationRef { name: "Workshop Room A".to_string() }),
            artists: vec![ArtistRef { name: "John Doe".to_string(), image_url: String::new() }],
        },
        SessionRecord {
            id: "3".to_string(),
            title: "Creative Performance".to_string(),
            title_translations: translations(&[
                (Locale::En, "Creative Performance"),
                (Locale::Es, "Actuación Creativa"),
                (Locale::Fr, "Performance Créative"),
                (Locale::Zh, "创意表演"),
            ]),
            description: "Live creative performance".to_string(),
            category: SessionCategory::Performance,
            start_time: utc(2026, 4, 17, 20, 0),
            end_time: utc(2026, 4, 17, 21, 30),
            location_id: "3".to_string(),
            is_live_streamed: true,
            tags: vec!["performance".to_string(), "live".to_string()],
            location: Some(LocationRef { name: "Performance Hall".to_string() }),
            artists: vec![
                ArtistRef { name: "Luna Rodriguez".to_string(), image_url: String::new() },
                ArtistRef { name: "David Kim".to_string(), image_url: String::new() },
                ArtistRef { name: "Sophie Anderson".to_string(), image_url: String::new() },
            ],
        },
    ]
}

/// Builds one artist record.
fn artist_record(
    id: &str,
    name: &str,
    bio: &str,
    bios: &[(Locale, &str)],
    website: &str,
    socials: &[(&str, &str)],
    tags: &[&str],
) -> ArtistRecord {
    ArtistRecord {
        id: id.to_string(),
        name: name.to_string(),
        bio: bio.to_string(),
        bio_translations: translations(bios),
        image_url: String::new(),
        website: Some(website.to_string()),
        social_links: socials
            .iter()
            .map(|(platform, handle)| ((*platform).to_string(), (*handle).to_string()))
            .collect::<HashMap<_, _>>(),
        tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
    }
}

/// The sample artist directory.
#[must_use]
pub fn sample_artists() -> Vec<ArtistRecord> {
    vec![
        artist_record(
            "1",
            "Alex Chen",
            "Digital artist and creative technologist",
            &[
                (Locale::En, "Digital artist and creative technologist"),
                (Locale::Es, "Artista digital y tecnólogo creativo"),
                (Locale::Fr, "Artiste numérique et technologue créatif"),
                (Locale::Zh, "数字艺术家和创意技术专家"),
            ],
            "https://alexchen.art",
            &[("instagram", "alexchen_art"), ("twitter", "alexchen")],
            &["digital art", "technology", "interactive"],
        ),
        artist_record(
            "3",
            "David Kim",
            "Creative director and brand strategist",
            &[
                (Locale::En, "Creative director and brand strategist"),
                (Locale::Es, "Director creativo y estratega de marca"),
                (Locale::Fr, "Directeur créatif et stratège de marque"),
                (Locale::Zh, "创意总监和品牌策略师"),
            ],
            "https://davidkim.studio",
            &[("instagram", "davidkim_studio"), ("twitter", "davidkimstudio")],
            &["branding", "strategy", "creative direction"],
        ),
        artist_record(
            "4",
            "Luna Rodriguez",
            "Performance artist and multimedia creator",
            &[
                (Locale::En, "Performance artist and multimedia creator"),
                (Locale::Es, "Artista de performance y creadora multimedia"),
                (Locale::Fr, "Artiste de performance et créatrice multimédia"),
                (Locale::Zh, "表演艺术家和多媒体创作者"),
            ],
            "https://lunarodriguez.art",
            &[("instagram", "luna_performs"), ("twitter", "lunarodriguez")],
            &["performance", "multimedia", "experimental"],
        ),
        artist_record(
            "5",
            "Sophie Anderson",
            "UX designer and design systems expert",
            &[
                (Locale::En, "UX designer and design systems expert"),
                (Locale::Es, "Diseñadora UX y experta en sistemas de diseño"),
                (Locale::Fr, "Designer UX et experte en systèmes de design"),
                (Locale::Zh, "UX设计师和设计系统专家"),
            ],
            "https://sophieanderson.design",
            &[("instagram", "sophie_ux"), ("twitter", "sophieanderson")],
            &["UX design", "design systems", "user research"],
        ),
        artist_record(
            "6",
            "João Silva",
            "Creative coder and generative artist",
            &[
                (Locale::En, "Creative coder and generative artist"),
                (Locale::Es, "Programador creativo y artista generativo"),
                (Locale::Fr, "Codeur créatif et artiste génératif"),
                (Locale::Zh, "创意程序员和生成艺术家"),
            ],
            "https://joaosilva.code",
            &[("instagram", "joao_codes"), ("twitter", "joaosilva")],
            &["creative coding", "generative art", "algorithms"],
        ),
    ]
}
