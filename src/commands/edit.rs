//! dem-settings edit コマンド
//!
//! 設定画面を開き、押されたボタンと選択結果を出力する。
//! 画面は stderr、結果は stdout に出す。

use super::input::InputArgs;
use crate::error::Result;
use crate::output::{render_outcome, OutputFormat};
use crate::tui::{ButtonId, DevEnvSettingsWindow, SessionOutcome};
use clap::Parser;
use std::io::{self, Write};

pub const EXIT_SAVED: i32 = 0;
pub const EXIT_CANCELLED: i32 = 2;
pub const EXIT_UNDECIDED: i32 = 3;

#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output the outcome in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only the selected names
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

pub fn run(args: Args) -> Result<i32> {
    let candidates = args.input.load()?;

    // UI 起動前に候補を検証する
    let window = DevEnvSettingsWindow::new(candidates.tool_images, &candidates.selected)?;
    let outcome = window.run()?;

    let format = OutputFormat::from_flags(args.json, args.simple);
    write_outcome(&mut io::stdout().lock(), &outcome, format)?;

    Ok(exit_code(&outcome))
}

/// 結果を書き出す（空なら何も書かない）
fn write_outcome(
    out: &mut impl Write,
    outcome: &SessionOutcome,
    format: OutputFormat,
) -> Result<()> {
    let text = render_outcome(outcome, format)?;
    if !text.is_empty() {
        writeln!(out, "{}", text)?;
    }
    Ok(())
}

/// 結果に対応する終了コード
pub fn exit_code(outcome: &SessionOutcome) -> i32 {
    match outcome.button {
        Some(ButtonId::Save) => EXIT_SAVED,
        Some(ButtonId::Cancel) => EXIT_CANCELLED,
        None => EXIT_UNDECIDED,
    }
}
