//! 設定画面の update（状態遷移）
//!
//! 全ての遷移はこの関数を通る。`Closed` になった後のメッセージは無視する。

use super::model::{Model, Msg, Phase};
use super::outcome::SessionOutcome;

/// update() の戻り値
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateEffect {
    /// チェック状態が変わった
    pub selection_changed: bool,
    /// このメッセージでセッションが終了した
    pub closed: bool,
}

impl UpdateEffect {
    fn none() -> Self {
        Self::default()
    }
}

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg) -> UpdateEffect {
    if model.is_closed() {
        log::debug!("ignoring {msg:?} after close");
        return UpdateEffect::none();
    }

    match msg {
        Msg::CursorUp => {
            let current = model.cursor();
            model.state.select(Some(current.saturating_sub(1)));
            UpdateEffect::none()
        }
        Msg::CursorDown => {
            let last = model.items.len().saturating_sub(1);
            model.state.select(Some((model.cursor() + 1).min(last)));
            UpdateEffect::none()
        }
        Msg::ItemToggled(index) => match model.items.get_mut(index) {
            Some(item) => {
                item.checked = !item.checked;
                model.state.select(Some(index));
                UpdateEffect {
                    selection_changed: true,
                    closed: false,
                }
            }
            None => UpdateEffect::none(),
        },
        Msg::FocusNext => {
            model.focus = model.focus.next();
            UpdateEffect::none()
        }
        Msg::FocusPrev => {
            model.focus = model.focus.prev();
            UpdateEffect::none()
        }
        Msg::Focus(focus) => {
            model.focus = focus;
            UpdateEffect::none()
        }
        Msg::ButtonPressed(button) => {
            let outcome = SessionOutcome::pressed(button, model.selected());
            log::debug!(
                "{} pressed with {} tool image(s) selected",
                button.as_str(),
                outcome.selected.len()
            );
            close(model, outcome)
        }
        Msg::Dismissed => {
            log::debug!("session dismissed without a button press");
            close(model, SessionOutcome::undecided())
        }
    }
}

fn close(model: &mut Model, outcome: SessionOutcome) -> UpdateEffect {
    model.phase = Phase::Closed(outcome);
    UpdateEffect {
        selection_changed: false,
        closed: true,
    }
}

#[cfg(test)]
#[path = "update_test.rs"]
mod tests;
