use std::path::PathBuf;

use super::code::ErrorCode;

/// エラーが起きた場所
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    pub file_path: Option<PathBuf>,
    pub tool_image: Option<String>,
    /// 候補リスト内の位置（0 始まり）
    pub position: Option<usize>,
}

impl ErrorContext {
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    pub fn with_tool_image(mut self, name: impl Into<String>) -> Self {
        self.tool_image = Some(name.into());
        self
    }

    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// CLI に表示するエラー
///
/// 原因の連鎖は変換時に文字列として取り出しておく。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichError {
    code: ErrorCode,
    message: String,
    context: ErrorContext,
    causes: Vec<String>,
}

impl RichError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            causes: Vec::new(),
        }
    }

    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = context;
        self
    }

    /// `err` とその source を順に原因として記録
    pub fn caused_by(mut self, err: &(dyn std::error::Error + 'static)) -> Self {
        let mut current = Some(err);
        while let Some(e) = current {
            self.causes.push(e.to_string());
            current = e.source();
        }
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn context(&self) -> &ErrorContext {
        &self.context
    }

    pub fn causes(&self) -> &[String] {
        &self.causes
    }
}

impl std::fmt::Display for RichError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error[{}]: {}", self.code.as_str(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_code_and_message() {
        let error = RichError::new(ErrorCode::Val001, "No tool images to select from");
        assert_eq!(error.to_string(), "error[VAL001]: No tool images to select from");
        assert!(error.context().is_empty());
    }

    #[test]
    fn caused_by_walks_the_source_chain() {
        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let outer = crate::error::DemError::ReadFile {
            path: PathBuf::from("images.toml"),
            source: inner,
        };

        let error = RichError::new(ErrorCode::Io001, "read failed").caused_by(&outer);
        assert_eq!(
            error.causes(),
            ["Failed to read images.toml: missing".to_string(), "missing".to_string()]
        );
    }

    #[test]
    fn context_builder() {
        let context = ErrorContext::default()
            .with_file_path("/path/to/images.toml")
            .with_tool_image("python")
            .with_position(3);

        assert_eq!(context.file_path, Some(PathBuf::from("/path/to/images.toml")));
        assert_eq!(context.tool_image.as_deref(), Some("python"));
        assert_eq!(context.position, Some(3));
        assert!(!context.is_empty());
    }
}
