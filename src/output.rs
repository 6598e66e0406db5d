//! コマンド出力の整形

use crate::error::Result;
use crate::tui::settings::STATUS_HEADER;
use crate::tui::{ButtonId, SessionOutcome};
use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;

/// 出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Simple,
}

impl OutputFormat {
    /// `--json` / `--simple` フラグから決定
    pub fn from_flags(json: bool, simple: bool) -> Self {
        match (json, simple) {
            (true, _) => OutputFormat::Json,
            (_, true) => OutputFormat::Simple,
            _ => OutputFormat::Table,
        }
    }
}

pub struct OutcomeSummary {
    pub prefix: String,
    pub message: String,
}

impl OutcomeSummary {
    pub fn format(outcome: &SessionOutcome) -> Self {
        match outcome.button {
            Some(ButtonId::Save) => Self {
                prefix: "✓".green().to_string(),
                message: format!("Saved {} tool image(s)", outcome.selected.len().green()),
            },
            Some(ButtonId::Cancel) => Self {
                prefix: "•".yellow().to_string(),
                message: "Cancelled, nothing changed".to_string(),
            },
            None => Self {
                prefix: "✗".red().to_string(),
                message: "Closed without a decision".to_string(),
            },
        }
    }

    pub fn line(&self) -> String {
        format!("{} {}", self.prefix, self.message)
    }
}

/// 選択中のツールイメージを1列の表にする
pub fn selection_table(names: &[String]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![STATUS_HEADER]);
    for name in names {
        table.add_row(vec![name.as_str()]);
    }
    table
}

/// セッション結果を指定形式の文字列にする
pub fn render_outcome(outcome: &SessionOutcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
        OutputFormat::Simple => Ok(outcome.selected.join("\n")),
        OutputFormat::Table => {
            let summary = OutcomeSummary::format(outcome).line();
            if outcome.is_saved() && !outcome.selected.is_empty() {
                Ok(format!("{}\n{}", summary, selection_table(&outcome.selected)))
            } else {
                Ok(summary)
            }
        }
    }
}
