/// Error codes with category prefix
///
/// Categories:
/// - IO: File system operations
/// - CFG: Candidates file parsing
/// - TUI: Terminal UI errors
/// - VAL: Input validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // I/O errors (IO001-IO099)
    /// File not found
    Io001,
    /// Permission denied
    Io002,

    // Config errors (CFG001-CFG099)
    /// Invalid candidates file format
    Cfg001,
    /// Unsupported candidates file extension
    Cfg002,

    // TUI errors (TUI001-TUI099)
    /// Terminal initialization failed
    Tui001,

    // Validation errors (VAL001-VAL099)
    /// No tool images given
    Val001,
    /// Blank tool image name
    Val002,
    /// Duplicate tool image name
    Val003,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "VAL001")
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Io001 => "IO001",
            ErrorCode::Io002 => "IO002",
            ErrorCode::Cfg001 => "CFG001",
            ErrorCode::Cfg002 => "CFG002",
            ErrorCode::Tui001 => "TUI001",
            ErrorCode::Val001 => "VAL001",
            ErrorCode::Val002 => "VAL002",
            ErrorCode::Val003 => "VAL003",
        }
    }

    /// Returns the general cause description
    pub fn cause(&self) -> &'static str {
        match self {
            ErrorCode::Io001 => "The specified file or directory was not found",
            ErrorCode::Io002 => "Permission denied when accessing the file",
            ErrorCode::Cfg001 => "The candidates file could not be parsed",
            ErrorCode::Cfg002 => "The candidates file extension is not supported",
            ErrorCode::Tui001 => "Failed to initialize the terminal interface",
            ErrorCode::Val001 => "The candidate tool image list is empty",
            ErrorCode::Val002 => "A tool image has an empty name",
            ErrorCode::Val003 => "The same tool image name was given more than once",
        }
    }

    /// Returns remediation steps
    pub fn remediation(&self) -> &'static str {
        match self {
            ErrorCode::Io001 => "1. Verify the file path is correct\n2. Check if the file was moved or deleted",
            ErrorCode::Io002 => "1. Check file permissions\n2. Verify ownership of the file",
            ErrorCode::Cfg001 => "1. Check the file syntax\n2. Each entry needs a `name` field",
            ErrorCode::Cfg002 => "1. Use a .toml or .json file",
            ErrorCode::Tui001 => "1. Run from an interactive terminal\n2. Try a different terminal emulator",
            ErrorCode::Val001 => "1. Pass at least one --tool-image\n2. Or add [[tool_images]] entries to the candidates file",
            ErrorCode::Val002 => "1. Remove the empty entry\n2. Check for stray quotes in the arguments",
            ErrorCode::Val003 => "1. Remove the repeated name\n2. Check names merged from --from-file and --tool-image",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ErrorCode; 8] = [
        ErrorCode::Io001,
        ErrorCode::Io002,
        ErrorCode::Cfg001,
        ErrorCode::Cfg002,
        ErrorCode::Tui001,
        ErrorCode::Val001,
        ErrorCode::Val002,
        ErrorCode::Val003,
    ];

    #[test]
    fn all_error_codes_have_valid_string() {
        for code in ALL {
            let s = code.as_str();
            assert!(
                s.len() >= 5 && s.len() <= 6,
                "Error code string should be 5-6 characters: {}",
                s
            );
        }
    }

    #[test]
    fn all_error_codes_have_cause_and_remediation() {
        for code in ALL {
            assert!(!code.cause().is_empty(), "Cause should not be empty for {:?}", code);
            assert!(
                !code.remediation().is_empty(),
                "Remediation should not be empty for {:?}",
                code
            );
        }
    }

    #[test]
    fn error_code_format_matches_pattern() {
        let codes = [
            (ErrorCode::Io001, "IO0"),
            (ErrorCode::Io002, "IO0"),
            (ErrorCode::Cfg001, "CFG"),
            (ErrorCode::Cfg002, "CFG"),
            (ErrorCode::Tui001, "TUI"),
            (ErrorCode::Val001, "VAL"),
            (ErrorCode::Val002, "VAL"),
            (ErrorCode::Val003, "VAL"),
        ];

        for (code, expected_prefix) in codes {
            assert!(
                code.as_str().starts_with(expected_prefix),
                "Error code {} should start with {}",
                code.as_str(),
                expected_prefix
            );
        }
    }
}
