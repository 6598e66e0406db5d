//! ツールイメージ（チェックリストの選択項目）

use crate::error::{DemError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 選択候補のツールイメージ
///
/// `name` は表示名と識別子を兼ねる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolImage {
    pub name: String,
    /// チェックリスト上で名前の横に表示する補足（"local" など）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ToolImage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// 候補リストを検証する
///
/// 空リスト、空白だけの名前、重複した名前をエラーにする。
pub fn validate_candidates(tool_images: &[ToolImage]) -> Result<()> {
    if tool_images.is_empty() {
        return Err(DemError::NoToolImages);
    }

    let mut seen = HashSet::new();
    for (position, image) in tool_images.iter().enumerate() {
        if image.name.trim().is_empty() {
            return Err(DemError::BlankToolImageName { position });
        }
        if !seen.insert(image.name.as_str()) {
            return Err(DemError::DuplicateToolImage(image.name.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "tool_image_test.rs"]
mod tests;
