//! TUI (Terminal User Interface) コンポーネント
//!
//! ratatui/crossterm を使用した設定画面を提供する。

mod render;
pub mod settings;
mod terminal;

pub use render::Renderable;
pub use settings::{
    ButtonId, DevEnvSettingsWindow, EventSource, SessionOutcome, CANCEL_BUTTON_ID,
    SAVE_BUTTON_ID,
};
