use crate::application::{App, AppMode, Focus};
use crate::domain::PickerKind;
use super::ui::help_line_count;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
            app.should_quit = true;
            return;
        }

        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::Picking(_) => Self::handle_picking_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        app.status_message = None;

        match key {
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
                app.focus_next();
            }
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => {
                app.focus_previous();
            }
            KeyCode::Enter | KeyCode::Char(' ') => match app.focus {
                Focus::Region => app.open_picker(PickerKind::Region),
                Focus::Place => app.open_picker(PickerKind::Place),
                Focus::Confirm => app.confirm(),
            },
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.open_help();
            }
            KeyCode::Char('q') | KeyCode::Esc if !modifiers.contains(KeyModifiers::CONTROL) => {
                app.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_picking_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                app.pick_current();
            }
            KeyCode::Esc | KeyCode::Char('q') => {
                app.close_picker();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.move_picker_cursor(-1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.move_picker_cursor(1);
            }
            KeyCode::PageUp => {
                app.move_picker_cursor(-10);
            }
            KeyCode::PageDown => {
                app.move_picker_cursor(10);
            }
            KeyCode::Home => {
                app.picker_cursor = 0;
            }
            KeyCode::End => {
                app.picker_cursor_to_end();
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        let last_line = help_line_count().saturating_sub(1);
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.help_scroll = app.help_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll = (app.help_scroll + 1).min(last_line);
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll = (app.help_scroll + 5).min(last_line);
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}
