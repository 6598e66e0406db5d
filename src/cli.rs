use clap::{Parser, Subcommand};

use crate::commands::{check, edit};

#[derive(Debug, Parser)]
#[command(name = "dem-settings")]
#[command(about = "Development Environment Settings selector", long_about = None)]
pub struct Cli {
    /// エラー時に原因と対処を表示
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// ツールイメージを選択する画面を開く
    #[command(
        long_about = "Open the checklist to choose the tool images of a development environment, then Save or Cancel. The screen is drawn on stderr and the result is printed on stdout.",
        after_help = EXIT_STATUS_HELP
    )]
    Edit(edit::Args),

    /// 候補を検証し、初期選択を表示する
    #[command(
        long_about = "Validate the candidate tool images and print the initial selection without opening the UI."
    )]
    Check(check::Args),
}

const EXIT_STATUS_HELP: &str = "\
EXIT STATUS:
  0  Save was pressed
  1  error
  2  Cancel was pressed
  3  closed without pressing a button (Ctrl-C)";
