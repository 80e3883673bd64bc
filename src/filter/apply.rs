//! The pure filter functions.

use chrono::{
    DateTime,
    TimeZone,
    Utc,
};

use crate::catalog::{
    ArtistRecord,
    SessionRecord,
};

use super::state::{
    ArtistTagFilter,
    DayBucket,
    SessionFilter,
};

/// The first festival day at midnight UTC: the zero point for day buckets.
#[must_use]
pub fn festival_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 16, 0, 0, 0).single().unwrap_or_default()
}

/// Whole days between `start` and the festival epoch, truncating toward
/// zero. The first festival day is offset 0.
#[must_use]
pub fn day_offset(start: DateTime<Utc>) -> i64 {
    (start - festival_epoch()).num_days()
}

/// Whether `session` falls in the selected day bucket.
fn matches_day(session: &SessionRecord, day: DayBucket) -> bool {
    match day {
        DayBucket::All => true,
        // 1-indexed vocabulary, 0-indexed offsets
        DayBucket::Day(index) => day_offset(session.start_time) == i64::from(index) - 1,
    }
}

/// Derives the program listing for `filter`.
///
/// Category and day restrictions compose conjunctively. An empty category
/// set applies no category restriction. Never fails; no matches is a valid
/// outcome and yields an empty collection.
#[must_use]
pub fn filter_sessions<'a>(
    sessions: &'a [SessionRecord],
    filter: &SessionFilter,
) -> Vec<&'a SessionRecord> {
    sessions
        .iter()
        .filter(|session| {
            filter.categories.is_empty() || filter.categories.contains(&session.category)
        })
        .filter(|session| matches_day(session, filter.day))
        .collect()
}

/// Derives the artist listing for `filter`.
///
/// Selecting a tag absent from the data yields an empty result.
#[must_use]
pub fn filter_artists<'a>(
    artists: &'a [ArtistRecord],
    filter: &ArtistTagFilter,
) -> Vec<&'a ArtistRecord> {
    artists
        .iter()
        .filter(|artist| match filter {
            ArtistTagFilter::All => true,
            ArtistTagFilter::Tag(tag) => artist.tags.contains(tag),
        })
        .collect()
}

/// The tag vocabulary of the directory: every artist tag, first-seen order,
/// deduplicated. Drives the filter chips above the artist grid.
#[must_use]
pub fn collect_tags(artists: &[ArtistRecord]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for artist in artists {
        for tag in &artist.tags {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::TimeDelta;
    use googletest::prelude::*;
    use rstest::rstest;

    use crate::catalog::SessionCategory;
    use crate::filter::FilterAction;
    use crate::test_utils::{
        artist,
        session,
        session_at,
    };

    use super::*;

    /// Filter with the given categories and day bucket.
    fn filter_of(categories: &[SessionCategory], day: DayBucket) -> SessionFilter {
        SessionFilter { categories: categories.iter().copied().collect::<BTreeSet<_>>(), day }
    }

    #[rstest]
    fn test_no_restriction_returns_all_records() {
        let sessions = vec![
            session("1", SessionCategory::Talk, "2026-04-16T10:00:00Z"),
            session("2", SessionCategory::Workshop, "2026-04-17T14:00:00Z"),
            session("3", SessionCategory::Performance, "2026-04-18T20:00:00Z"),
        ];

        let result = filter_sessions(&sessions, &SessionFilter::default());

        assert_that!(result, len(eq(sessions.len())));
        assert_that!(result, eq(&sessions.iter().collect::<Vec<_>>()));
    }

    /// Category filter: no data loss, no extraneous inclusion.
    #[rstest]
    fn test_single_category_is_exact() {
        let sessions = vec![
            session("1", SessionCategory::Talk, "2026-04-16T10:00:00Z"),
            session("2", SessionCategory::Workshop, "2026-04-16T14:00:00Z"),
            session("3", SessionCategory::Workshop, "2026-04-17T10:00:00Z"),
            session("4", SessionCategory::Panel, "2026-04-17T16:00:00Z"),
        ];

        let result =
            filter_sessions(&sessions, &filter_of(&[SessionCategory::Workshop], DayBucket::All));

        for kept in &result {
            assert_that!(kept.category, eq(SessionCategory::Workshop));
        }
        let kept_ids: Vec<&str> = result.iter().map(|s| s.id.as_str()).collect();
        assert_that!(kept_ids, eq(&vec!["2", "3"]));
    }

    #[rstest]
    fn test_multiple_categories_union() {
        let sessions = vec![
            session("1", SessionCategory::Talk, "2026-04-16T10:00:00Z"),
            session("2", SessionCategory::Workshop, "2026-04-16T14:00:00Z"),
            session("3", SessionCategory::Performance, "2026-04-17T20:00:00Z"),
        ];

        let result = filter_sessions(
            &sessions,
            &filter_of(&[SessionCategory::Talk, SessionCategory::Performance], DayBucket::All),
        );

        let kept_ids: Vec<&str> = result.iter().map(|s| s.id.as_str()).collect();
        assert_that!(kept_ids, eq(&vec!["1", "3"]));
    }

    /// Day buckets: a record exactly at the epoch is day 1; 24h+ε later is
    /// day 2, not day 1.
    #[rstest]
    fn test_day_bucket_boundaries() {
        let at_epoch = session_at("1", SessionCategory::Talk, festival_epoch());
        let next_day =
            session_at("2", SessionCategory::Talk, festival_epoch() + TimeDelta::hours(25));
        let sessions = vec![at_epoch, next_day];

        let day1 = filter_sessions(&sessions, &filter_of(&[], DayBucket::Day(1)));
        let day1_ids: Vec<&str> = day1.iter().map(|s| s.id.as_str()).collect();
        assert_that!(day1_ids, eq(&vec!["1"]));

        let day2 = filter_sessions(&sessions, &filter_of(&[], DayBucket::Day(2)));
        let day2_ids: Vec<&str> = day2.iter().map(|s| s.id.as_str()).collect();
        assert_that!(day2_ids, eq(&vec!["2"]));
    }

    #[rstest]
    #[case::epoch(0, 0)]
    #[case::same_day_evening(23, 0)]
    #[case::next_day(24, 1)]
    #[case::next_day_plus(25, 1)]
    #[case::third_day(49, 2)]
    fn test_day_offset(#[case] hours: i64, #[case] expected: i64) {
        let start = festival_epoch() + TimeDelta::hours(hours);

        assert_that!(day_offset(start), eq(expected));
    }

    /// Scenario from the session listing: category and day restrictions
    /// compose with AND.
    #[rstest]
    fn test_category_and_day_compose() {
        let first = session_at("1", SessionCategory::Talk, festival_epoch());
        let second =
            session_at("2", SessionCategory::Workshop, festival_epoch() + TimeDelta::hours(25));
        let sessions = vec![first, second];

        let talks = filter_sessions(&sessions, &filter_of(&[SessionCategory::Talk], DayBucket::All));
        let talk_ids: Vec<&str> = talks.iter().map(|s| s.id.as_str()).collect();
        assert_that!(talk_ids, eq(&vec!["1"]));

        let day2 = filter_sessions(&sessions, &filter_of(&[], DayBucket::Day(2)));
        let day2_ids: Vec<&str> = day2.iter().map(|s| s.id.as_str()).collect();
        assert_that!(day2_ids, eq(&vec!["2"]));

        let workshop_day1 =
            filter_sessions(&sessions, &filter_of(&[SessionCategory::Workshop], DayBucket::Day(1)));
        assert_that!(workshop_day1, is_empty());
    }

    #[rstest]
    fn test_filter_never_mutates_source() {
        let sessions = vec![session("1", SessionCategory::Talk, "2026-04-16T10:00:00Z")];
        let before = sessions.clone();

        let _ = filter_sessions(&sessions, &filter_of(&[SessionCategory::Panel], DayBucket::Day(3)));

        assert_that!(sessions, eq(&before));
    }

    /// The reducer and the filter function together: the state machine the
    /// program surface drives.
    #[rstest]
    fn test_reduced_state_drives_filtering() {
        let sessions = vec![
            session("1", SessionCategory::Talk, "2026-04-16T10:00:00Z"),
            session("2", SessionCategory::Workshop, "2026-04-16T14:00:00Z"),
        ];

        let state = SessionFilter::default()
            .reduce(FilterAction::ToggleCategory(SessionCategory::Workshop))
            .reduce(FilterAction::SelectDay(DayBucket::Day(1)));

        let result = filter_sessions(&sessions, &state);
        let ids: Vec<&str> = result.iter().map(|s| s.id.as_str()).collect();
        assert_that!(ids, eq(&vec!["2"]));
    }

    #[rstest]
    fn test_artist_filter_all_keeps_everything() {
        let artists =
            vec![artist("1", &["digital art"]), artist("2", &["branding", "strategy"])];

        let result = filter_artists(&artists, &ArtistTagFilter::All);

        assert_that!(result, len(eq(2)));
    }

    #[rstest]
    fn test_artist_filter_by_tag() {
        let artists = vec![
            artist("1", &["digital art", "interactive"]),
            artist("2", &["branding"]),
            artist("3", &["interactive", "performance"]),
        ];

        let result = filter_artists(&artists, &ArtistTagFilter::Tag("interactive".to_string()));

        let ids: Vec<&str> = result.iter().map(|a| a.id.as_str()).collect();
        assert_that!(ids, eq(&vec!["1", "3"]));
    }

    /// Selecting a tag absent from the data is a valid, empty outcome.
    #[rstest]
    fn test_artist_filter_absent_tag_yields_empty() {
        let artists = vec![artist("1", &["digital art"])];

        let result = filter_artists(&artists, &ArtistTagFilter::Tag("sculpture".to_string()));

        assert_that!(result, is_empty());
    }

    #[rstest]
    fn test_collect_tags_first_seen_order_dedup() {
        let artists = vec![
            artist("1", &["digital art", "interactive"]),
            artist("2", &["branding", "interactive"]),
            artist("3", &["digital art"]),
        ];

        let tags = collect_tags(&artists);

        assert_that!(
            tags,
            eq(&vec![
                "digital art".to_string(),
                "interactive".to_string(),
                "branding".to_string()
            ])
        );
    }
}
