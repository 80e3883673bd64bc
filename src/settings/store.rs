//! 設定ストアの実装
//!
//! ブラウザの localStorage に相当する、キーと値の永続ストア。

use std::collections::HashMap;
use std::path::PathBuf;

use super::types::SettingsError;

/// キー・値ペアの永続ストア
///
/// 読み込みは失敗しない。存在しない・壊れている値は「未設定」として
/// `None` を返す。書き込みは同期的に行われ、失敗を返しうる。
pub trait SettingsStore {
    /// 保存された値を取得する
    fn get(&self, key: &str) -> Option<String>;

    /// 値を保存する
    ///
    /// # Errors
    /// - ストアへの書き込みエラー
    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError>;
}

/// JSON ファイルひとつに設定を保存するストア
///
/// ファイル全体がひとつの JSON オブジェクトで、キーごとに文字列値を持つ。
/// 読み込み時にファイルが存在しない・パースできない場合は未設定扱い。
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    /// 設定ファイルのパス
    path: PathBuf,
}

impl FileSettingsStore {
    /// 指定したパスのファイルを使うストアを作成する
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// ファイルの内容全体を読み込む
    ///
    /// ファイルがない・JSON として不正な場合は空のマップを返す。
    fn read_all(&self) -> HashMap<String, String> {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            tracing::debug!("Settings file not found: {:?}", self.path);
            return HashMap::new();
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::debug!("Ignoring malformed settings file {:?}: {}", self.path, e);
            HashMap::new()
        })
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        let mut all = self.read_all();
        all.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&all)?;
        std::fs::write(&self.path, content)?;

        tracing::debug!("Persisted setting {:?} to {:?}", key, self.path);
        Ok(())
    }
}

/// メモリ上にのみ保持するストア
///
/// テストや、永続化を必要としない組み込み用途向け。
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    /// 保存された値
    values: HashMap<String, String>,
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
