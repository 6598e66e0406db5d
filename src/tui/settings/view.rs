//! 設定画面の view（描画）

use super::model::{Focus, Model, Msg, STATUS_HEADER, TITLE};
use super::outcome::ButtonId;
use crate::tui::render::{focus_style, Renderable};
use ratatui::layout::{Margin, Position};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Row, Table};

const BUTTON_WIDTH: u16 = 12;
const HELP: &str = "↑/↓: move  space: toggle  tab: focus  enter: press  esc: cancel";

// ============================================================================
// ScreenLayout（領域の分割）
// ============================================================================

/// 画面の各領域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub checklist: Rect,
    pub status: Rect,
    pub cancel: Rect,
    pub save: Rect,
    pub help: Rect,
}

impl ScreenLayout {
    /// ステータスパネルの大きさを指定して領域を計算
    pub fn compute(area: Rect, status_width: u16, status_height: u16) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // ヘッダー
                Constraint::Min(3),    // チェックリスト + ステータス
                Constraint::Length(3), // ボタン
                Constraint::Length(1), // ヘルプ
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(status_width)])
            .split(rows[1]);

        let status = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(status_height), Constraint::Min(0)])
            .split(body[1])[0];

        let actions = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);

        Self {
            header: rows[0],
            checklist: body[0],
            status,
            cancel: button_rect(actions[0]),
            save: button_rect(actions[1]),
            help: rows[3],
        }
    }

    pub fn for_model(model: &Model, area: Rect) -> Self {
        Self::compute(area, model.status_width(), model.status_height())
    }

    pub fn button(&self, button: ButtonId) -> Rect {
        match button {
            ButtonId::Cancel => self.cancel,
            ButtonId::Save => self.save,
        }
    }

    /// チェックリストの枠線の内側
    pub fn checklist_inner(&self) -> Rect {
        self.checklist.inner(Margin::new(1, 1))
    }

    /// クリック位置をメッセージに変換
    ///
    /// ボタンは押下、チェックリストの行はその項目の反転になる。
    pub fn hit_test(&self, model: &Model, column: u16, row: u16) -> Option<Msg> {
        let position = Position::new(column, row);

        if let Some(button) = [ButtonId::Cancel, ButtonId::Save]
            .into_iter()
            .find(|b| self.button(*b).contains(position))
        {
            return Some(Msg::ButtonPressed(button));
        }

        let inner = self.checklist_inner();
        if !inner.contains(position) {
            return None;
        }
        let offset = checklist_offset(model.cursor(), inner.height);
        let index = offset + usize::from(row - inner.y);
        (index < model.items.len()).then_some(Msg::ItemToggled(index))
    }
}

/// カーソル行が見える最小のスクロール位置
fn checklist_offset(cursor: usize, visible: u16) -> usize {
    (cursor + 1).saturating_sub(usize::from(visible.max(1)))
}

/// ボタン領域の中央に固定幅で配置
fn button_rect(area: Rect) -> Rect {
    let width = BUTTON_WIDTH.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}

// ============================================================================
// view（描画）
// ============================================================================

impl Renderable for Model {
    fn render(&self, f: &mut Frame) {
        let layout = ScreenLayout::for_model(self, f.area());

        render_header(f, layout.header);
        render_checklist(f, &layout, self);
        render_status(f, layout.status, self);
        render_button(f, layout.cancel, ButtonId::Cancel, self.focus == Focus::Cancel);
        render_button(f, layout.save, ButtonId::Save, self.focus == Focus::Save);

        let help = Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray));
        f.render_widget(help, layout.help);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(TITLE).alignment(Alignment::Center).style(
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(header, area);
}

fn render_checklist(f: &mut Frame, layout: &ScreenLayout, model: &Model) {
    let items: Vec<ListItem> = model
        .items
        .iter()
        .map(|item| {
            let checkbox = if item.checked { "[x]" } else { "[ ]" };
            let mut spans = vec![Span::raw(format!("{} {}", checkbox, item.image.name))];
            if let Some(status) = &item.image.status {
                spans.push(Span::styled(
                    format!("  {}", status),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let focused = model.focus == Focus::Checklist;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let highlight_style = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Tool Images ")
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(highlight_style)
        .highlight_symbol("> ");

    // クリック判定と同じスクロール位置で描画する
    let offset = checklist_offset(model.cursor(), layout.checklist_inner().height);
    let mut state = model.state.with_offset(offset);
    f.render_stateful_widget(list, layout.checklist, &mut state);
}

fn render_status(f: &mut Frame, area: Rect, model: &Model) {
    let rows: Vec<Row> = model
        .status_rows()
        .into_iter()
        .map(|name| Row::new([name]))
        .collect();

    let table = Table::new(rows, [Constraint::Fill(1)])
        .header(Row::new([STATUS_HEADER]).style(Style::default().add_modifier(Modifier::BOLD)))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(table, area);
}

fn render_button(f: &mut Frame, area: Rect, button: ButtonId, focused: bool) {
    let base = match button {
        ButtonId::Cancel => Style::default().fg(Color::Red),
        ButtonId::Save => Style::default().fg(Color::Green),
    };

    let paragraph = Paragraph::new(button.label())
        .alignment(Alignment::Center)
        .style(focus_style(base, focused))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
