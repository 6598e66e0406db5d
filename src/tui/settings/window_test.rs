use std::collections::VecDeque;
use std::io;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use super::{DevEnvSettingsWindow, EventSource};
use crate::error::DemError;
use crate::tool_image::ToolImage;
use crate::tui::settings::outcome::{ButtonId, SessionOutcome};
use crate::tui::settings::view::ScreenLayout;

/// 事前に用意したイベントを順に返す
struct ScriptedEvents(VecDeque<Event>);

impl ScriptedEvents {
    fn keys(codes: &[KeyCode]) -> Self {
        Self(
            codes
                .iter()
                .map(|code| Event::Key(KeyEvent::new(*code, KeyModifiers::NONE)))
                .collect(),
        )
    }

    fn remaining(&self) -> usize {
        self.0.len()
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        self.0
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

fn make_window(names: &[&str], selected: &[&str]) -> DevEnvSettingsWindow {
    let images = names.iter().map(|n| ToolImage::new(*n)).collect();
    let selected: Vec<String> = selected.iter().map(|s| s.to_string()).collect();
    DevEnvSettingsWindow::new(images, &selected).unwrap()
}

fn run(window: DevEnvSettingsWindow, events: &mut ScriptedEvents) -> SessionOutcome {
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    window.run_with(&mut terminal, events).unwrap()
}

#[test]
fn button_id_constants() {
    assert_eq!(DevEnvSettingsWindow::CANCEL_BUTTON_ID, "cancel_button");
    assert_eq!(DevEnvSettingsWindow::SAVE_BUTTON_ID, "save_button");
}

#[test]
fn save_after_toggling_node() {
    let window = make_window(&["base", "python", "node"], &["python"]);
    assert_eq!(window.model().status_rows(), vec!["python"]);

    let mut events = ScriptedEvents::keys(&[
        KeyCode::Down,
        KeyCode::Down,
        KeyCode::Char(' '),
        KeyCode::Tab,
        KeyCode::Tab,
        KeyCode::Enter,
    ]);

    let outcome = run(window, &mut events);
    assert_eq!(outcome.button_id(), Some(DevEnvSettingsWindow::SAVE_BUTTON_ID));
    assert_eq!(outcome.selected, vec!["python".to_string(), "node".to_string()]);
}

#[test]
fn cancel_immediately() {
    let window = make_window(&["base"], &[]);
    let mut events = ScriptedEvents::keys(&[KeyCode::Tab, KeyCode::Enter]);

    let outcome = run(window, &mut events);
    assert_eq!(outcome, SessionOutcome::pressed(ButtonId::Cancel, vec![]));
}

#[test]
fn esc_presses_cancel() {
    let window = make_window(&["base"], &["base"]);
    let mut events = ScriptedEvents::keys(&[KeyCode::Esc]);

    let outcome = run(window, &mut events);
    assert!(outcome.is_cancelled());
    assert_eq!(outcome.selected, vec!["base".to_string()]);
}

#[test]
fn input_after_close_is_not_read() {
    let window = make_window(&["base", "python"], &[]);
    let mut events = ScriptedEvents::keys(&[
        KeyCode::Esc,
        KeyCode::Char(' '),
        KeyCode::Tab,
        KeyCode::Enter,
    ]);

    let outcome = run(window, &mut events);
    assert!(outcome.is_cancelled());
    assert!(outcome.selected.is_empty());
    assert_eq!(events.remaining(), 3);
}

#[test]
fn ctrl_c_ends_without_decision() {
    let window = make_window(&["base"], &["base"]);
    let mut events = ScriptedEvents(VecDeque::from([Event::Key(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
    ))]));

    let outcome = run(window, &mut events);
    assert_eq!(outcome, SessionOutcome::undecided());
}

#[test]
fn release_and_resize_events_are_ignored() {
    let window = make_window(&["base"], &[]);
    let mut events = ScriptedEvents(VecDeque::from([
        Event::Key(KeyEvent::new_with_kind(
            KeyCode::Char(' '),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        )),
        Event::Resize(100, 30),
        Event::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
        Event::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
        Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
    ]));

    let outcome = run(window, &mut events);
    assert_eq!(outcome, SessionOutcome::pressed(ButtonId::Save, vec![]));
}

fn left_click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn mouse_toggles_item_and_presses_save() {
    let window = make_window(&["base", "python", "node"], &["python"]);
    let layout = ScreenLayout::for_model(window.model(), Rect::new(0, 0, 80, 20));
    let inner = layout.checklist_inner();
    let save = layout.save;

    let mut events = ScriptedEvents(VecDeque::from([
        left_click(inner.x + 2, inner.y),
        left_click(inner.x + 2, inner.y + 1),
        left_click(save.x + save.width / 2, save.y + 1),
        left_click(inner.x + 2, inner.y + 2),
    ]));

    let outcome = run(window, &mut events);
    assert_eq!(
        outcome,
        SessionOutcome::pressed(ButtonId::Save, vec!["base".to_string()])
    );
    assert_eq!(events.remaining(), 1);
}

#[test]
fn event_source_failure_is_propagated() {
    let window = make_window(&["base"], &[]);
    let mut events = ScriptedEvents::keys(&[KeyCode::Down]);
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();

    let err = window.run_with(&mut terminal, &mut events).unwrap_err();
    assert!(matches!(err, DemError::Io(_)));
}

#[test]
fn empty_candidates_are_a_construction_error() {
    let err = DevEnvSettingsWindow::new(vec![], &[]).unwrap_err();
    assert!(matches!(err, DemError::NoToolImages));
}
