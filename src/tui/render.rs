//! 描画の共通定義

use ratatui::prelude::*;

/// Frame へ自身を描画できる画面
///
/// イベント処理（update）とは独立しており、状態を変更しない。
pub trait Renderable {
    fn render(&self, f: &mut Frame);
}

/// フォーカス中なら反転＋太字を重ねる
pub(crate) fn focus_style(base: Style, focused: bool) -> Style {
    if focused {
        base.add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        base
    }
}
