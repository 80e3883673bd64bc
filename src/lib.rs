//! offf-festival-core
//!
//! OFFF フェスティバルサイトのプレゼンテーション状態エンジン。
//! ロケール解決・プログラムフィルタリング・サンプルデータ投入を提供します。

pub mod catalog;
pub mod filter;
pub mod locale;
pub mod seed;
pub mod settings;

#[cfg(test)]
mod test_utils;

// よく使う型を再エクスポート
pub use locale::{
    Locale,
    LocaleResolver,
};
