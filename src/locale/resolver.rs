//! ロケール解決を行うモジュール
//!
//! アクティブなロケールを保持し、設定ストアへの永続化と文字列解決を担う。

use crate::settings::SettingsStore;

use super::dictionary::MessageKey;
use super::types::{
    Locale,
    TranslationMap,
};

/// アクティブなロケールを永続化する際のストレージキー
pub const LOCALE_STORAGE_KEY: &str = "offf-language";

/// ロケール解決を行う
///
/// 解決の優先順位:
/// 1. 呼び出し側から渡されたインラインマップのアクティブロケールのエントリ
/// 2. グローバル辞書のアクティブロケールのエントリ
/// 3. キーそのもの（フォールバック、失敗しない）
#[derive(Debug, Clone)]
pub struct LocaleResolver<S> {
    /// ロケールの永続化先
    store: S,

    /// 現在アクティブなロケール
    locale: Locale,
}

impl<S: SettingsStore> LocaleResolver<S> {
    /// 永続化された値を読み込んでリゾルバを作成する
    ///
    /// 値が存在しない、または不正な場合は英語にフォールバックする。
    /// 読み込みはプロセスにつき一度だけ、この時点で行われる。
    pub fn new(store: S) -> Self {
        let locale = store
            .get(LOCALE_STORAGE_KEY)
            .and_then(|code| Locale::from_code(&code))
            .unwrap_or_default();
        tracing::debug!("Locale resolver initialized with locale: {}", locale);

        Self { store, locale }
    }

    /// 現在アクティブなロケールを取得
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// アクティブなロケールを変更し、永続化する
    ///
    /// 固定セット外のコードは黙って無視される（エラーにはならない）。
    /// 永続化の失敗はベストエフォート扱いで、警告ログのみ残す。
    pub fn set_locale(&mut self, code: &str) {
        let Some(locale) = Locale::from_code(code) else {
            tracing::debug!("Ignoring unsupported locale code: {:?}", code);
            return;
        };

        self.locale = locale;
        if let Err(e) = self.store.set(LOCALE_STORAGE_KEY, locale.as_code()) {
            tracing::warn!("Failed to persist locale {:?}: {}", locale.as_code(), e);
        }
    }

    /// リゾルバを破棄し、設定ストアを返す
    ///
    /// 同じストアから新しいリゾルバを作ると、直前の選択が復元される。
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// グローバル辞書からキーを解決する
    ///
    /// 辞書に存在しないキーはそのまま返す。
    #[must_use]
    pub fn resolve(&self, key: &str) -> String {
        MessageKey::parse(key)
            .map_or_else(|| key.to_string(), |k| k.text(self.locale).to_string())
    }

    /// インラインマップを優先してキーを解決する
    ///
    /// マップにアクティブロケールのエントリがなければグローバル辞書、
    /// それもなければキーそのものにフォールバックする。
    #[must_use]
    pub fn resolve_with(&self, key: &str, inline: &TranslationMap) -> String {
        inline.get(&self.locale).map_or_else(|| self.resolve(key), Clone::clone)
    }
}
