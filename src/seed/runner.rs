//! サンプルデータ投入の実行

use thiserror::Error;

use super::fixtures;
use super::store::{
    RowId,
    RowStore,
    StoreError,
};

/// 投入が中断された際のエラー
///
/// 失敗したテーブルと原因を保持する。それ以前に投入済みの行は
/// そのまま残る（ロールバックしない）。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Seeding aborted at table '{table}': {source}")]
pub struct SeedError {
    /// 失敗したテーブル名
    pub table: &'static str,

    /// ストアが報告した原因
    #[source]
    pub source: StoreError,
}

/// 投入された行数のテーブル別サマリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedSummary {
    /// artists テーブルの行数
    pub artists: usize,
    /// locations テーブルの行数
    pub locations: usize,
    /// event_sessions テーブルの行数
    pub sessions: usize,
    /// session_artists テーブルの行数
    pub session_artists: usize,
    /// tickets テーブルの行数
    pub tickets: usize,
}

/// サンプルデータを一括投入する
///
/// 投入順序は依存関係順: artists → locations → event_sessions →
/// session_artists → tickets。セッションと関連付けは、前提となる
/// テーブルが行を返した場合にのみ投入される。
///
/// 冪等性チェックはなく、再実行すると行が重複する。
///
/// # Errors
/// - いずれかの insert が失敗した場合。以降のテーブルは投入されない
pub async fn seed_sample_data<S: RowStore>(store: &mut S) -> Result<SeedSummary, SeedError> {
    let mut summary = SeedSummary::default();

    let artists = insert(store, "artists", fixtures::artist_rows()).await?;
    summary.artists = artists.len();

    let locations = insert(store, "locations", fixtures::location_rows()).await?;
    summary.locations = locations.len();

    // 前提テーブルが空ならセッションと関連付けは投入しない
    if let (Some(&main_stage), Some(&creative_lab)) = (locations.first(), locations.get(1))
        && !artists.is_empty()
    {
        let sessions =
            insert(store, "event_sessions", fixtures::session_rows(main_stage, creative_lab))
                .await?;
        summary.sessions = sessions.len();

        let associations = insert(
            store,
            "session_artists",
            fixtures::session_artist_rows(&sessions, &artists),
        )
        .await?;
        summary.session_artists = associations.len();
    }

    let tickets = insert(store, "tickets", fixtures::ticket_rows()).await?;
    summary.tickets = tickets.len();

    tracing::info!("Sample data seeded successfully: {:?}", summary);
    Ok(summary)
}

/// 1 テーブル分の insert を行い、失敗時にテーブル名を付けて返す
async fn insert<S: RowStore>(
    store: &mut S,
    table: &'static str,
    rows: Vec<serde_json::Value>,
) -> Result<Vec<RowId>, SeedError> {
    store.insert(table, rows).await.map_err(|source| {
        tracing::error!("Error seeding table '{}': {}", table, source);
        SeedError { table, source }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use serde_json::Value;

    use crate::seed::MemoryStore;

    use super::*;

    /// 指定したテーブルで失敗するストア（それ以外は素通し）
    struct FailingStore {
        /// 内部の実ストア
        inner: MemoryStore,
        /// 失敗させるテーブル名
        fail_on: &'static str,
    }

    impl RowStore for FailingStore {
        async fn insert(
            &mut self,
            table: &str,
            rows: Vec<Value>,
        ) -> Result<Vec<RowId>, StoreError> {
            if table == self.fail_on {
                return Err(StoreError::Insert {
                    table: table.to_string(),
                    message: "duplicate key value violates unique constraint".to_string(),
                });
            }
            self.inner.insert(table, rows).await
        }
    }

    /// 正常系: 全テーブルが依存順に投入される
    #[tokio::test]
    async fn seed_inserts_all_tables() {
        let mut store = MemoryStore::default();

        let summary = seed_sample_data(&mut store).await.unwrap();

        assert_that!(
            summary,
            eq(SeedSummary {
                artists: 4,
                locations: 3,
                sessions: 3,
                session_artists: 3,
                tickets: 3
            })
        );
        assert_that!(store.row_count("event_sessions"), eq(3));
    }

    /// セッション行は投入済みロケーションの id を参照する
    #[tokio::test]
    async fn seed_links_sessions_to_inserted_locations() {
        let mut store = MemoryStore::default();

        seed_sample_data(&mut store).await.unwrap();

        // locations は artists (4 行) の後なので id 4..=6
        let sessions = store.rows("event_sessions");
        let location_ids: Vec<&Value> =
            sessions.iter().map(|row| &row["location_id"]).collect();
        assert_that!(
            location_ids,
            eq(&vec![
                &serde_json::json!(4),
                &serde_json::json!(5),
                &serde_json::json!(4)
            ])
        );
    }

    /// 失敗時: そのテーブル以降は投入されず、投入済みの行は残る
    #[tokio::test]
    async fn seed_aborts_on_failure_without_rollback() {
        let mut store = FailingStore { inner: MemoryStore::default(), fail_on: "locations" };

        let error = seed_sample_data(&mut store).await.unwrap_err();

        assert_that!(error.table, eq("locations"));
        assert_that!(
            format!("{error}"),
            contains_substring("duplicate key value violates unique constraint")
        );
        // artists は投入済みのまま、後続テーブルは空
        assert_that!(store.inner.row_count("artists"), eq(4));
        assert_that!(store.inner.row_count("event_sessions"), eq(0));
        assert_that!(store.inner.row_count("tickets"), eq(0));
    }

    /// 冪等性はない: 再実行で全テーブルの行が倍になる
    #[tokio::test]
    async fn seed_duplicates_rows_on_rerun() {
        let mut store = MemoryStore::default();

        seed_sample_data(&mut store).await.unwrap();
        seed_sample_data(&mut store).await.unwrap();

        assert_that!(store.row_count("artists"), eq(8));
        assert_that!(store.row_count("event_sessions"), eq(6));
        assert_that!(store.row_count("tickets"), eq(6));
    }
}
