//! 設定画面の Model/Msg 定義

use super::outcome::{ButtonId, SessionOutcome};
use super::view::ScreenLayout;
use crate::error::Result;
use crate::tool_image::{validate_candidates, ToolImage};
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::ListState;

/// ヘッダーに表示するタイトル
pub const TITLE: &str = "Development Environment Settings";
/// ステータスパネルの列見出し
pub const STATUS_HEADER: &str = "Selected Tool Images";

// ============================================================================
// Focus（入力フォーカス）
// ============================================================================

/// 入力フォーカスの位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Checklist,
    Cancel,
    Save,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Focus::Checklist => Focus::Cancel,
            Focus::Cancel => Focus::Save,
            Focus::Save => Focus::Checklist,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Focus::Checklist => Focus::Save,
            Focus::Cancel => Focus::Checklist,
            Focus::Save => Focus::Cancel,
        }
    }

    /// フォーカス中のボタン
    pub fn button(&self) -> Option<ButtonId> {
        match self {
            Focus::Checklist => None,
            Focus::Cancel => Some(ButtonId::Cancel),
            Focus::Save => Some(ButtonId::Save),
        }
    }
}

// ============================================================================
// Phase（セッション状態）
// ============================================================================

/// `Active` から `Closed` への一方向の遷移のみ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Active,
    Closed(SessionOutcome),
}

// ============================================================================
// Msg（メッセージ）
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    CursorUp,
    CursorDown,
    /// 指定位置の項目のチェックを反転
    ItemToggled(usize),
    FocusNext,
    FocusPrev,
    Focus(Focus),
    ButtonPressed(ButtonId),
    /// ボタンを押さずに終了（Ctrl-C）
    Dismissed,
}

// ============================================================================
// Model（画面状態）
// ============================================================================

/// チェックリストの1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub image: ToolImage,
    pub checked: bool,
}

/// 設定画面の状態
#[derive(Debug)]
pub struct Model {
    pub items: Vec<ChecklistItem>,
    pub state: ListState,
    pub focus: Focus,
    pub phase: Phase,
}

impl Model {
    /// 候補と初期選択からモデルを作成
    ///
    /// 候補に無い初期選択は無視する。
    pub fn new(tool_images: Vec<ToolImage>, already_selected: &[String]) -> Result<Self> {
        validate_candidates(&tool_images)?;

        for name in already_selected {
            if !tool_images.iter().any(|image| &image.name == name) {
                log::debug!("ignoring pre-selected tool image not in candidates: {name}");
            }
        }

        let items: Vec<ChecklistItem> = tool_images
            .into_iter()
            .map(|image| {
                let checked = already_selected.contains(&image.name);
                ChecklistItem { image, checked }
            })
            .collect();

        let mut state = ListState::default();
        state.select(Some(0));

        Ok(Self {
            items,
            state,
            focus: Focus::default(),
            phase: Phase::Active,
        })
    }

    /// カーソル位置
    pub fn cursor(&self) -> usize {
        self.state.selected().unwrap_or(0)
    }

    /// チェック済みの名前（チェックリストの順）
    pub fn selected(&self) -> Vec<String> {
        self.status_rows().into_iter().map(str::to_string).collect()
    }

    /// ステータスパネルの行
    ///
    /// 毎回チェックリストから導出する。
    pub fn status_rows(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| item.checked)
            .map(|item| item.image.name.as_str())
            .collect()
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.phase, Phase::Closed(_))
    }

    pub fn outcome(&self) -> Option<&SessionOutcome> {
        match &self.phase {
            Phase::Closed(outcome) => Some(outcome),
            Phase::Active => None,
        }
    }

    /// 結果を取り出す（未終了なら判断なし）
    pub fn into_outcome(self) -> SessionOutcome {
        match self.phase {
            Phase::Closed(outcome) => outcome,
            Phase::Active => SessionOutcome::undecided(),
        }
    }

    /// ステータスパネルの幅（枠線込み）
    pub fn status_width(&self) -> u16 {
        let longest = self
            .items
            .iter()
            .map(|item| Span::raw(item.image.name.as_str()).width())
            .max()
            .unwrap_or(0)
            .max(Span::raw(STATUS_HEADER).width());
        u16::try_from(longest + 2).unwrap_or(u16::MAX)
    }

    /// ステータスパネルの高さ（見出しと枠線込み）
    pub fn status_height(&self) -> u16 {
        u16::try_from(self.items.len() + 3).unwrap_or(u16::MAX)
    }

    /// キー入力をメッセージに変換
    pub fn key_to_msg(&self, key: KeyEvent) -> Option<Msg> {
        if self.is_closed() {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Msg::Dismissed),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Tab => return Some(Msg::FocusNext),
            KeyCode::BackTab => return Some(Msg::FocusPrev),
            KeyCode::Esc => return Some(Msg::ButtonPressed(ButtonId::Cancel)),
            _ => {}
        }

        match self.focus.button() {
            None => match key.code {
                KeyCode::Up | KeyCode::Char('k') => Some(Msg::CursorUp),
                KeyCode::Down | KeyCode::Char('j') => Some(Msg::CursorDown),
                KeyCode::Char(' ') | KeyCode::Enter => Some(Msg::ItemToggled(self.cursor())),
                _ => None,
            },
            Some(button) => match key.code {
                KeyCode::Left => Some(Msg::Focus(Focus::Cancel)),
                KeyCode::Right => Some(Msg::Focus(Focus::Save)),
                KeyCode::Up => Some(Msg::Focus(Focus::Checklist)),
                KeyCode::Char(' ') | KeyCode::Enter => Some(Msg::ButtonPressed(button)),
                _ => None,
            },
        }
    }

    /// マウス入力をメッセージに変換
    ///
    /// `area` は直前に描画した画面全体の領域。左クリックのみ扱う。
    pub fn mouse_to_msg(&self, mouse: MouseEvent, area: Rect) -> Option<Msg> {
        if self.is_closed() || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        ScreenLayout::for_model(self, area).hit_test(self, mouse.column, mouse.row)
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
