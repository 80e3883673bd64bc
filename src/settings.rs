//! 設定の永続化を行うモジュール
//!
//! ロケール選択のようなセッションを跨いで保持される値の読み書きを担う。

mod store;
mod types;

pub use store::{
    FileSettingsStore,
    MemorySettings,
    SettingsStore,
};
pub use types::SettingsError;
