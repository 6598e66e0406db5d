//! ターミナルのセットアップと復元
//!
//! 画面は stderr に描画する。stdout はコマンドの結果（`--json` など）専用。

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use std::io::{self, stderr};

/// raw モード＋代替スクリーン＋マウス入力を有効にし、drop 時に復元する
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self { _private: () };
        // 以降の失敗は drop で巻き戻す
        stderr().execute(EnterAlternateScreen)?;
        stderr().execute(EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = stderr().execute(DisableMouseCapture);
        let _ = terminal::disable_raw_mode();
        let _ = stderr().execute(LeaveAlternateScreen);
    }
}
