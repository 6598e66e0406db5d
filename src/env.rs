//! 環境変数ユーティリティ

use std::path::PathBuf;

pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（前後の空白を除き、空ならNone）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// パスとして取得
    pub fn path(key: &str) -> Option<PathBuf> {
        Self::get(key).map(PathBuf::from)
    }
}
