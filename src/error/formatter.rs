use std::io::IsTerminal;

use owo_colors::{OwoColorize, Style};

use super::rich::{ErrorContext, RichError};

/// RichError を stderr 向けの文字列にする
///
/// ```text
/// error[VAL003]: Duplicate tool image: node
///   --> tool image: node
///   = hint: Remove the repeated name
/// ```
///
/// `verbose` では hint の代わりに原因・対処手順・source の連鎖を出す。
pub struct ErrorFormatter {
    verbose: bool,
    use_color: bool,
}

impl ErrorFormatter {
    /// stderr が端末で `NO_COLOR` が無いときだけ色を付ける
    pub fn new(verbose: bool) -> Self {
        let use_color = std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self::with_color(verbose, use_color)
    }

    pub fn with_color(verbose: bool, use_color: bool) -> Self {
        Self { verbose, use_color }
    }

    pub fn format(&self, error: &RichError) -> String {
        let mut lines = vec![self.headline(error)];

        let location = Style::new().blue();
        for line in context_lines(error.context()) {
            lines.push(self.paint(line, location));
        }

        let code = error.code();
        if self.verbose {
            lines.push(self.paint(format!("  = cause: {}", code.cause()), Style::new().yellow()));
            lines.push(self.paint("  = remediation:".to_string(), Style::new().green()));
            lines.extend(code.remediation().lines().map(|step| format!("      {step}")));
            for cause in error.causes() {
                lines.push(self.paint(format!("  = caused by: {cause}"), Style::new().dimmed()));
            }
        } else {
            let hint = format!("  = hint: {}", first_step(code.remediation()));
            lines.push(self.paint(hint, Style::new().dimmed()));
        }

        lines.join("\n")
    }

    fn headline(&self, error: &RichError) -> String {
        let code = format!("error[{}]", error.code().as_str());
        if self.use_color {
            format!("{}: {}", code.red().bold(), error.message().bold())
        } else {
            format!("{}: {}", code, error.message())
        }
    }

    fn paint(&self, line: String, style: Style) -> String {
        if self.use_color {
            line.style(style).to_string()
        } else {
            line
        }
    }
}

// file_path -> tool_image -> position
fn context_lines(ctx: &ErrorContext) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(path) = &ctx.file_path {
        lines.push(format!("  --> {}", path.display()));
    }
    if let Some(name) = &ctx.tool_image {
        lines.push(format!("  --> tool image: {name}"));
    }
    if let Some(position) = ctx.position {
        lines.push(format!("  --> position: {position}"));
    }
    lines
}

/// 手順の先頭行から番号を外したもの
fn first_step(remediation: &str) -> &str {
    let first = remediation.lines().next().unwrap_or_default();
    first.split_once(". ").map_or(first, |(_, step)| step)
}

#[cfg(test)]
#[path = "formatter_test.rs"]
mod tests;
