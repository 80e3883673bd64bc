//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のレコードビルダーを提供します。
#![allow(clippy::unwrap_used)]

use chrono::{
    DateTime,
    Utc,
};

use crate::catalog::{
    ArtistRecord,
    SessionCategory,
    SessionRecord,
};

/// テスト用の `SessionRecord` を作成する
///
/// # Arguments
/// * `id` - レコード ID
/// * `category` - カテゴリタグ
/// * `start` - 開始時刻（RFC 3339 形式）
pub(crate) fn session(id: &str, category: SessionCategory, start: &str) -> SessionRecord {
    let start_time: DateTime<Utc> = start.parse().unwrap();
    session_at(id, category, start_time)
}

/// 開始時刻を `DateTime` で直接指定して `SessionRecord` を作成する
pub(crate) fn session_at(
    id: &str,
    category: SessionCategory,
    start_time: DateTime<Utc>,
) -> SessionRecord {
    SessionRecord {
        id: id.to_string(),
        title: format!("Session {id}"),
        title_translations: std::collections::HashMap::new(),
        description: String::new(),
        category,
        start_time,
        end_time: start_time + chrono::TimeDelta::hours(1),
        location_id: "1".to_string(),
        is_live_streamed: false,
        tags: Vec::new(),
        location: None,
        artists: Vec::new(),
    }
}

/// テスト用の `ArtistRecord` を作成する
pub(crate) fn artist(id: &str, tags: &[&str]) -> ArtistRecord {
    ArtistRecord {
        id: id.to_string(),
        name: format!("Artist {id}"),
        bio: format!("Bio of artist {id}"),
        bio_translations: std::collections::HashMap::new(),
        image_url: String::new(),
        website: None,
        social_links: std::collections::HashMap::new(),
        tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
    }
}
