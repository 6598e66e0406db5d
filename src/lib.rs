//! Development Environment Settings 選択画面
//!
//! 開発環境に含めるツールイメージをチェックリストで選び、
//! Save / Cancel で確定する TUI コンポーネントと、その CLI。

pub mod candidates;
pub mod cli;
pub mod commands;
mod env;
pub mod error;
pub mod output;
pub mod tool_image;
pub mod tui;

pub use error::{DemError, Result};
pub use tool_image::ToolImage;
pub use tui::{
    ButtonId, DevEnvSettingsWindow, SessionOutcome, CANCEL_BUTTON_ID, SAVE_BUTTON_ID,
};
