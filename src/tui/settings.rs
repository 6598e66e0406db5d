//! Development Environment Settings 画面
//!
//! ツールイメージのチェックリスト、選択中一覧のステータスパネル、
//! Cancel / Save ボタンからなるモーダル画面。
//!
//! ## モジュール構成
//!
//! - `model`: 画面状態とメッセージ
//! - `update`: 状態遷移（`Active` → `Closed`）
//! - `view`: 描画と領域計算
//! - `window`: ホストウィンドウとイベントループ
//! - `outcome`: ボタン識別子とセッション結果

mod model;
mod outcome;
mod update;
mod view;
mod window;

pub use model::{ChecklistItem, Focus, Model, Msg, Phase, STATUS_HEADER, TITLE};
pub use outcome::{ButtonId, SessionOutcome, CANCEL_BUTTON_ID, SAVE_BUTTON_ID};
pub use update::{update, UpdateEffect};
pub use view::ScreenLayout;
pub use window::{CrosstermEvents, DevEnvSettingsWindow, EventSource};
