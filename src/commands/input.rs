//! 候補入力の共通引数

use crate::candidates::CandidatesFile;
use crate::error::Result;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub struct InputArgs {
    /// Candidate tool image (repeatable)
    #[arg(short = 't', long = "tool-image", value_name = "NAME")]
    pub tool_images: Vec<String>,

    /// Tool image to pre-select (repeatable)
    #[arg(short, long, value_name = "NAME")]
    pub selected: Vec<String>,

    /// Candidates file (.toml or .json); falls back to $DEM_SETTINGS_FILE
    #[arg(short = 'f', long, value_name = "PATH")]
    pub from_file: Option<PathBuf>,
}

impl InputArgs {
    /// ファイルと引数の候補を結合する
    pub fn load(&self) -> Result<CandidatesFile> {
        let file = CandidatesFile::resolve(self.from_file.as_deref())?;
        Ok(file.extend_with(&self.tool_images, &self.selected))
    }
}
