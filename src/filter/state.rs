//! Filter state and its reducer.
//!
//! The state is an immutable value owned by the program surface; every
//! user interaction goes through [`SessionFilter::reduce`], which returns
//! the next state and never touches the record collections.

use std::collections::BTreeSet;

use crate::catalog::SessionCategory;

/// The day-bucket selection of the program filter.
///
/// Buckets are 1-indexed in the filter vocabulary (`day1` is the first
/// festival day); the offset arithmetic in [`super::day_offset`] is
/// 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayBucket {
    /// No day restriction.
    #[default]
    All,
    /// A single festival day, 1-indexed.
    Day(u8),
}

impl DayBucket {
    /// Parses the filter vocabulary: `all`, `day1`, `day2`, ...
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        if value == "all" {
            return Some(Self::All);
        }
        let index: u8 = value.strip_prefix("day")?.parse().ok()?;
        (index >= 1).then_some(Self::Day(index))
    }
}

/// The user's transient program-filter selection.
///
/// An empty category set means "no category restriction", not "match
/// nothing". Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionFilter {
    /// Selected category tags; conjunct with the day bucket.
    pub categories: BTreeSet<SessionCategory>,

    /// Selected day bucket.
    pub day: DayBucket,
}

/// A single user interaction with the program filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAction {
    /// Toggles one category chip on or off.
    ToggleCategory(SessionCategory),
    /// Replaces the day-bucket selection.
    SelectDay(DayBucket),
    /// Clears every selection back to the default state.
    Reset,
}

impl SessionFilter {
    /// Applies one action, returning the next state.
    #[must_use]
    pub fn reduce(mut self, action: FilterAction) -> Self {
        match action {
            FilterAction::ToggleCategory(category) => {
                if !self.categories.remove(&category) {
                    self.categories.insert(category);
                }
                self
            }
            FilterAction::SelectDay(day) => Self { day, ..self },
            FilterAction::Reset => Self::default(),
        }
    }
}

/// The artist directory's single-tag selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ArtistTagFilter {
    /// No tag restriction.
    #[default]
    All,
    /// Keep only artists carrying this tag.
    Tag(String),
}
