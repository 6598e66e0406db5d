//! ホストウィンドウ
//!
//! 設定画面を1つ表示し、ボタンが押されるまで呼び出し元をブロックする。

use super::model::Model;
use super::outcome::{SessionOutcome, CANCEL_BUTTON_ID, SAVE_BUTTON_ID};
use super::update::update;
use crate::error::{DemError, Result};
use crate::tool_image::ToolImage;
use crate::tui::render::Renderable;
use crate::tui::terminal::TerminalGuard;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::io::{self, stderr, IsTerminal};

/// 入力イベントの供給元
pub trait EventSource {
    /// 次のイベントが来るまでブロックする
    fn next_event(&mut self) -> io::Result<Event>;
}

/// 実ターミナルからイベントを読む
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Development Environment Settings ウィンドウ
#[derive(Debug)]
pub struct DevEnvSettingsWindow {
    model: Model,
}

impl DevEnvSettingsWindow {
    pub const CANCEL_BUTTON_ID: &'static str = CANCEL_BUTTON_ID;
    pub const SAVE_BUTTON_ID: &'static str = SAVE_BUTTON_ID;

    /// 候補と初期選択からウィンドウを作成
    ///
    /// 候補が空・空白名・重複の場合は UI を起動する前にエラーを返す。
    pub fn new(tool_images: Vec<ToolImage>, already_selected: &[String]) -> Result<Self> {
        let model = Model::new(tool_images, already_selected)?;
        log::debug!(
            "settings window created with {} candidate(s), {} pre-selected",
            model.items.len(),
            model.status_rows().len()
        );
        Ok(Self { model })
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// 実ターミナルでセッションを実行
    ///
    /// 画面は stderr に描画するので、stdout をパイプに繋いでも結果だけが残る。
    pub fn run(self) -> Result<SessionOutcome> {
        if !stderr().is_terminal() {
            return Err(DemError::Tui(
                "stderr is not a terminal; the settings screen is drawn there".to_string(),
            ));
        }

        let _guard = TerminalGuard::enter().map_err(tui_error)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stderr())).map_err(tui_error)?;
        self.run_with(&mut terminal, &mut CrosstermEvents)
    }

    /// 任意のバックエンドとイベント供給元でセッションを実行
    pub fn run_with<B, E>(
        mut self,
        terminal: &mut Terminal<B>,
        events: &mut E,
    ) -> Result<SessionOutcome>
    where
        B: Backend,
        E: EventSource,
    {
        loop {
            let mut area = Rect::default();
            terminal
                .draw(|f| {
                    area = f.area();
                    self.model.render(f);
                })
                .map_err(tui_error)?;

            let msg = match events.next_event()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.model.key_to_msg(key),
                Event::Mouse(mouse) => self.model.mouse_to_msg(mouse, area),
                _ => None,
            };

            if let Some(msg) = msg {
                let effect = update(&mut self.model, msg);
                if effect.selection_changed {
                    log::debug!("selection: {:?}", self.model.status_rows());
                }
                if effect.closed {
                    break;
                }
            }
        }

        let outcome = self.model.into_outcome();
        log::debug!("session closed: {:?}", outcome);
        Ok(outcome)
    }
}

fn tui_error(err: impl std::fmt::Display) -> DemError {
    DemError::Tui(err.to_string())
}

#[cfg(test)]
#[path = "window_test.rs"]
mod tests;
