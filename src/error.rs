//! エラー型
//!
//! - `DemError`: クレート共通のエラー型
//! - `code` / `rich` / `formatter`: CLI 向けのエラーコード付き表示

pub mod code;
pub mod formatter;
pub mod rich;

use std::path::PathBuf;
use thiserror::Error;

pub use code::ErrorCode;
pub use formatter::ErrorFormatter;
pub use rich::{ErrorContext, RichError};

/// dem-settings 統一エラー型
#[derive(Debug, Error)]
pub enum DemError {
    #[error("No tool images to select from")]
    NoToolImages,

    #[error("Tool image name must not be blank (position {position})")]
    BlankToolImageName { position: usize },

    #[error("Duplicate tool image: {0}")]
    DuplicateToolImage(String),

    #[error("Unsupported candidates file format: {}", .0.display())]
    UnsupportedFileFormat(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Terminal error: {0}")]
    Tui(String),
}

pub type Result<T> = std::result::Result<T, DemError>;

impl DemError {
    /// 対応するエラーコード
    pub fn code(&self) -> ErrorCode {
        match self {
            DemError::NoToolImages => ErrorCode::Val001,
            DemError::BlankToolImageName { .. } => ErrorCode::Val002,
            DemError::DuplicateToolImage(_) => ErrorCode::Val003,
            DemError::UnsupportedFileFormat(_) => ErrorCode::Cfg002,
            DemError::ReadFile { source, .. } => io_code(source),
            DemError::Io(e) => io_code(e),
            DemError::Json(_) | DemError::Toml(_) => ErrorCode::Cfg001,
            DemError::Tui(_) => ErrorCode::Tui001,
        }
    }
}

fn io_code(err: &std::io::Error) -> ErrorCode {
    match err.kind() {
        std::io::ErrorKind::PermissionDenied => ErrorCode::Io002,
        _ => ErrorCode::Io001,
    }
}

impl From<DemError> for RichError {
    fn from(err: DemError) -> Self {
        let context = match &err {
            DemError::ReadFile { path, .. } | DemError::UnsupportedFileFormat(path) => {
                ErrorContext::default().with_file_path(path)
            }
            DemError::DuplicateToolImage(name) => ErrorContext::default().with_tool_image(name),
            DemError::BlankToolImageName { position } => {
                ErrorContext::default().with_position(*position)
            }
            _ => ErrorContext::default(),
        };

        let rich = RichError::new(err.code(), err.to_string()).with_context(context);
        match std::error::Error::source(&err) {
            Some(source) => rich.caused_by(source),
            None => rich,
        }
    }
}
