//! The global translation dictionary.
//!
//! Keys are a closed, compile-time-checked set; each key carries one entry
//! per locale in a static table. Ad-hoc strings that only exist at a single
//! call site use an inline [`TranslationMap`](super::TranslationMap)
//! instead of being added here.

use super::types::Locale;

/// A key into the global translation dictionary.
///
/// The wire spelling is the dotted form (e.g. `nav.home`) used by the
/// site's markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// `nav.home`
    NavHome,
    /// `nav.program`
    NavProgram,
    /// `nav.artists`
    NavArtists,
    /// `nav.map`
    NavMap,
    /// `nav.badge`
    NavBadge,
    /// `nav.tickets`
    NavTickets,
    /// `hero.title`
    HeroTitle,
    /// `hero.subtitle`
    HeroSubtitle,
    /// `hero.dates`
    HeroDates,
    /// `cta.getTickets`
    CtaGetTickets,
    /// `cta.exploreProgram`
    CtaExploreProgram,
}

/// One dictionary row: the display string for each locale.
#[derive(Debug, Clone, Copy)]
struct LocaleTable {
    /// English entry.
    en: &'static str,
    /// Spanish entry.
    es: &'static str,
    /// French entry.
    fr: &'static str,
    /// Chinese entry.
    zh: &'static str,
}

impl LocaleTable {
    /// Selects the entry for `locale`.
    const fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Es => self.es,
            Locale::Fr => self.fr,
            Locale::Zh => self.zh,
        }
    }
}

impl MessageKey {
    /// Every key in the dictionary.
    pub const ALL: [Self; 11] = [
        Self::NavHome,
        Self::NavProgram,
        Self::NavArtists,
        Self::NavMap,
        Self::NavBadge,
        Self::NavTickets,
        Self::HeroTitle,
        Self::HeroSubtitle,
        Self::HeroDates,
        Self::CtaGetTickets,
        Self::CtaExploreProgram,
    ];

    /// Parses the dotted wire spelling. Unknown keys return `None` and the
    /// resolver falls back to echoing the raw key.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "nav.home" => Some(Self::NavHome),
            "nav.program" => Some(Self::NavProgram),
            "nav.artists" => Some(Self::NavArtists),
            "nav.map" => Some(Self::NavMap),
            "nav.badge" => Some(Self::NavBadge),
            "nav.tickets" => Some(Self::NavTickets),
            "hero.title" => Some(Self::HeroTitle),
            "hero.subtitle" => Some(Self::HeroSubtitle),
            "hero.dates" => Some(Self::HeroDates),
            "cta.getTickets" => Some(Self::CtaGetTickets),
            "cta.exploreProgram" => Some(Self::CtaExploreProgram),
            _ => None,
        }
    }

    /// The dotted wire spelling of this key.
    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::NavHome => "nav.home",
            Self::NavProgram => "nav.program",
            Self::NavArtists => "nav.artists",
            Self::NavMap => "nav.map",
            Self::NavBadge => "nav.badge",
            Self::NavTickets => "nav.tickets",
            Self::HeroTitle => "hero.title",
            Self::HeroSubtitle => "hero.subtitle",
            Self::HeroDates => "hero.dates",
            Self::CtaGetTickets => "cta.getTickets",
            Self::CtaExploreProgram => "cta.exploreProgram",
        }
    }

    /// The display string for this key under `locale`.
    #[must_use]
    pub const fn text(self, locale: Locale) -> &'static str {
        self.table().get(locale)
    }

    /// The static dictionary row for this key.
    const fn table(self) -> LocaleTable {
        match self {
            Self::NavHome => LocaleTable { en: "Home", es: "Inicio", fr: "Accueil", zh: "首页" },
            Self::NavProgram => {
                LocaleTable { en: "Program", es: "Programa", fr: "Programme", zh: "节目" }
            }
            Self::NavArtists => {
                LocaleTable { en: "Artists", es: "Artistas", fr: "Artistes", zh: "艺术家" }
            }
            Self::NavMap => LocaleTable { en: "Map", es: "Mapa", fr: "Carte", zh: "地图" },
            Self::NavBadge => {
                LocaleTable { en: "My Badge", es: "Mi Insignia", fr: "Mon Badge", zh: "我的徽章" }
            }
            Self::NavTickets => {
                LocaleTable { en: "Tickets", es: "Entradas", fr: "Billets", zh: "门票" }
            }
            Self::HeroTitle => {
                LocaleTable { en: "OFFF 2026", es: "OFFF 2026", fr: "OFFF 2026", zh: "OFFF 2026" }
            }
            Self::HeroSubtitle => LocaleTable {
                en: "Where Creativity Meets Innovation",
                es: "Donde la Creatividad se Encuentra con la Innovación",
                fr: "Où la Créativité Rencontre l'Innovation",
                zh: "创意与创新的交汇之地",
            },
            Self::HeroDates => LocaleTable {
                en: "April 16-18, 2026 • Barcelona",
                es: "16-18 de Abril, 2026 • Barcelona",
                fr: "16-18 Avril, 2026 • Barcelone",
                zh: "2026年4月16-18日 • 巴塞罗那",
            },
            Self::CtaGetTickets => LocaleTable {
                en: "Get Tickets",
                es: "Comprar Entradas",
                fr: "Acheter des Billets",
                zh: "购票",
            },
            Self::CtaExploreProgram => LocaleTable {
                en: "Explore Program",
                es: "Explorar Programa",
                fr: "Explorer le Programme",
                zh: "浏览节目",
            },
        }
    }
}
