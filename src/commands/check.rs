//! dem-settings check コマンド
//!
//! UI を開かずに候補を検証し、初期選択を表示する。

use super::input::InputArgs;
use crate::candidates::CandidatesFile;
use crate::error::Result;
use crate::output::selection_table;
use crate::tui::DevEnvSettingsWindow;
use clap::Parser;
use owo_colors::OwoColorize;

#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output the normalized candidates in JSON format
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: Args) -> Result<i32> {
    let candidates = args.input.load()?;
    let window = DevEnvSettingsWindow::new(candidates.tool_images.clone(), &candidates.selected)?;
    let selected = window.model().selected();

    if args.json {
        // 候補に無い初期選択は落とした形で出力
        let normalized = CandidatesFile {
            tool_images: candidates.tool_images,
            selected,
        };
        println!("{}", serde_json::to_string_pretty(&normalized)?);
    } else {
        println!(
            "{} {} candidate(s), {} pre-selected",
            "✓".green(),
            candidates.tool_images.len(),
            selected.len()
        );
        if !selected.is_empty() {
            println!("{}", selection_table(&selected));
        }
    }

    Ok(0)
}
