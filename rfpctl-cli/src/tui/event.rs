//! Keyboard handling for the TUI

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use super::app::{Action, App, Mode, Pane, RosterField};

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Result of handling a key event
#[derive(Debug, PartialEq)]
pub enum HandleResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
    /// Execute a network action
    Run(Action),
}

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) -> HandleResult {
    // Global quit shortcuts (Ctrl+C, Ctrl+Q)
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return HandleResult::Quit,
            _ => {}
        }
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Edit => handle_edit_mode(app, key),
    }
}

fn run_or_continue(action: Option<Action>) -> HandleResult {
    match action {
        Some(action) => HandleResult::Run(action),
        None => HandleResult::Continue,
    }
}

/// Submit whatever the focused pane submits on Enter
fn submit_focused(app: &mut App) -> HandleResult {
    let action = match app.focused {
        Pane::Composer => app.submit_composer(),
        Pane::Roster => app.submit_send(),
        Pane::Compare => app.submit_compare(),
    };
    run_or_continue(action)
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Char('q') => HandleResult::Quit,

        // Pane focus
        KeyCode::Tab => {
            app.focus_next();
            HandleResult::Continue
        }
        KeyCode::BackTab => {
            app.focus_prev();
            HandleResult::Continue
        }
        KeyCode::Char('1') => {
            app.focused = Pane::Composer;
            HandleResult::Continue
        }
        KeyCode::Char('2') => {
            app.focused = Pane::Roster;
            HandleResult::Continue
        }
        KeyCode::Char('3') => {
            app.focused = Pane::Compare;
            HandleResult::Continue
        }

        // Enter edit mode on the focused pane
        KeyCode::Char('i') => {
            app.mode = Mode::Edit;
            app.set_status("-- EDIT --");
            HandleResult::Continue
        }

        // Jump straight to the add-vendor form
        KeyCode::Char('a') if app.focused == Pane::Roster => {
            app.roster.field = RosterField::Name;
            app.mode = Mode::Edit;
            app.set_status("-- EDIT --");
            HandleResult::Continue
        }

        // Roster list navigation and selection
        KeyCode::Char('j') | KeyCode::Down if app.focused == Pane::Roster => {
            app.roster_cursor_down();
            HandleResult::Continue
        }
        KeyCode::Char('k') | KeyCode::Up if app.focused == Pane::Roster => {
            app.roster_cursor_up();
            HandleResult::Continue
        }
        KeyCode::Char(' ') if app.focused == Pane::Roster => {
            app.toggle_at_cursor();
            HandleResult::Continue
        }

        // Reload the roster
        KeyCode::Char('r') if app.focused == Pane::Roster => {
            run_or_continue(app.start_roster_load())
        }

        // Dispatch / submit for the focused pane
        KeyCode::Char('s') if app.focused == Pane::Roster => {
            run_or_continue(app.submit_send())
        }
        KeyCode::Enter => submit_focused(app),

        _ => HandleResult::Continue,
    }
}

fn handle_edit_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::Normal;
            app.status_message = None;
            HandleResult::Continue
        }

        // Ctrl+S submits from edit mode without leaving it
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            submit_focused(app)
        }

        // Cycle roster form fields
        KeyCode::Tab if app.focused == Pane::Roster => {
            app.roster.field = app.roster.field.next();
            HandleResult::Continue
        }

        KeyCode::Enter => match app.focused {
            // The composer draft is free-form, multi-line text
            Pane::Composer => {
                app.input_char('\n');
                HandleResult::Continue
            }
            Pane::Roster => match app.roster.field {
                RosterField::Name | RosterField::Email => {
                    run_or_continue(app.submit_add_vendor())
                }
                RosterField::RfpId => run_or_continue(app.submit_send()),
            },
            Pane::Compare => run_or_continue(app.submit_compare()),
        },

        KeyCode::Backspace => {
            app.input_backspace();
            HandleResult::Continue
        }
        KeyCode::Char(c) => {
            app.input_char(c);
            HandleResult::Continue
        }

        _ => HandleResult::Continue,
    }
}
