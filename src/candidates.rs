//! 候補ファイルの読み込み
//!
//! `.toml` または `.json` で、ツールイメージ候補と初期選択を記述する。
//!
//! ```toml
//! selected = ["python"]
//!
//! [[tool_images]]
//! name = "base"
//! status = "local"
//! ```

use crate::env::EnvVar;
use crate::error::{DemError, Result};
use crate::tool_image::ToolImage;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// `--from-file` 未指定時に参照する環境変数
pub const CANDIDATES_FILE_ENV: &str = "DEM_SETTINGS_FILE";

/// 候補ファイルの内容
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatesFile {
    #[serde(default)]
    pub tool_images: Vec<ToolImage>,
    #[serde(default)]
    pub selected: Vec<String>,
}

impl CandidatesFile {
    /// 拡張子に応じてファイルを読み込む
    pub fn load(path: &Path) -> Result<Self> {
        let format = FileFormat::from_path(path)
            .ok_or_else(|| DemError::UnsupportedFileFormat(path.to_path_buf()))?;

        let content = std::fs::read_to_string(path).map_err(|source| DemError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        let file = format.parse(&content)?;
        log::debug!(
            "loaded {} tool image(s) from {}",
            file.tool_images.len(),
            path.display()
        );
        Ok(file)
    }

    /// 引数のパス、なければ環境変数のパスから読み込む
    ///
    /// どちらも無い場合は空の内容を返す。
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| EnvVar::path(CANDIDATES_FILE_ENV));

        match path {
            Some(p) => Self::load(&p),
            None => Ok(Self::default()),
        }
    }

    /// コマンドライン引数で与えた名前を末尾に追加する
    pub fn extend_with(mut self, tool_images: &[String], selected: &[String]) -> Self {
        self.tool_images
            .extend(tool_images.iter().map(|name| ToolImage::new(name.as_str())));
        self.selected.extend(selected.iter().cloned());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Json,
}

impl FileFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(FileFormat::Toml),
            "json" => Some(FileFormat::Json),
            _ => None,
        }
    }

    fn parse(self, content: &str) -> Result<CandidatesFile> {
        match self {
            FileFormat::Toml => Ok(toml::from_str(content)?),
            FileFormat::Json => Ok(serde_json::from_str(content)?),
        }
    }
}

#[cfg(test)]
#[path = "candidates_test.rs"]
mod tests;
