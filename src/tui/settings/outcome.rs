//! セッション結果とボタン識別子

use serde::Serialize;

/// Cancel ボタンの識別子
pub const CANCEL_BUTTON_ID: &str = "cancel_button";
/// Save ボタンの識別子
pub const SAVE_BUTTON_ID: &str = "save_button";

/// アクションボタン
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ButtonId {
    #[serde(rename = "cancel_button")]
    Cancel,
    #[serde(rename = "save_button")]
    Save,
}

impl ButtonId {
    /// 表示文言に依存しない識別子
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonId::Cancel => CANCEL_BUTTON_ID,
            ButtonId::Save => SAVE_BUTTON_ID,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ButtonId::Cancel => "Cancel",
            ButtonId::Save => "Save",
        }
    }
}

/// セッションの結果
///
/// `button` が `None` の場合はボタンを押さずに終了した（判断なし）。
/// Cancel と同一視しないこと。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionOutcome {
    pub button: Option<ButtonId>,
    /// 押下時点の選択（候補リストの順）
    pub selected: Vec<String>,
}

impl SessionOutcome {
    /// ボタン押下なしで終了した結果
    pub fn undecided() -> Self {
        Self {
            button: None,
            selected: Vec::new(),
        }
    }

    pub fn pressed(button: ButtonId, selected: Vec<String>) -> Self {
        Self {
            button: Some(button),
            selected,
        }
    }

    pub fn is_saved(&self) -> bool {
        self.button == Some(ButtonId::Save)
    }

    pub fn is_cancelled(&self) -> bool {
        self.button == Some(ButtonId::Cancel)
    }

    pub fn is_undecided(&self) -> bool {
        self.button.is_none()
    }

    /// 押されたボタンの識別子
    pub fn button_id(&self) -> Option<&'static str> {
        self.button.map(|b| b.as_str())
    }
}
