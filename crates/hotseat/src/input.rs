//! Translating keys and text lines into actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use hotseat_engine::Position;
use tracing::debug;

use crate::action::{Action, Direction};
use crate::app::Screen;
use crate::setup::Field;

/// Moves the cursor one step, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    use Direction::*;
    use Position::*;

    match (cursor, direction) {
        // Right movement
        (TopLeft, Right) => TopCenter,
        (TopCenter, Right) => TopRight,
        (MiddleLeft, Right) => Center,
        (Center, Right) => MiddleRight,
        (BottomLeft, Right) => BottomCenter,
        (BottomCenter, Right) => BottomRight,

        // Left movement
        (TopCenter, Left) => TopLeft,
        (TopRight, Left) => TopCenter,
        (Center, Left) => MiddleLeft,
        (MiddleRight, Left) => Center,
        (BottomCenter, Left) => BottomLeft,
        (BottomRight, Left) => BottomCenter,

        // Down movement
        (TopLeft, Down) => MiddleLeft,
        (TopCenter, Down) => Center,
        (TopRight, Down) => MiddleRight,
        (MiddleLeft, Down) => BottomLeft,
        (Center, Down) => BottomCenter,
        (MiddleRight, Down) => BottomRight,

        // Up movement
        (MiddleLeft, Up) => TopLeft,
        (Center, Up) => TopCenter,
        (MiddleRight, Up) => TopRight,
        (BottomLeft, Up) => MiddleLeft,
        (BottomCenter, Up) => Center,
        (BottomRight, Up) => MiddleRight,

        // Edges
        _ => cursor,
    }
}

/// Maps a terminal key press to an action for the current screen.
pub fn action_for_key(screen: &Screen, key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match screen {
        Screen::Setup(_) => match key.code {
            KeyCode::Char(c) => Some(Action::Type(c)),
            KeyCode::Backspace => Some(Action::Erase),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                Some(Action::SwitchField)
            }
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Esc => Some(Action::Quit),
            _ => None,
        },
        Screen::Playing(_) => match key.code {
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .map(|digit| Action::ActivateCell(digit as u8)),
            KeyCode::Up => Some(Action::MoveCursor(Direction::Up)),
            KeyCode::Down => Some(Action::MoveCursor(Direction::Down)),
            KeyCode::Left => Some(Action::MoveCursor(Direction::Left)),
            KeyCode::Right => Some(Action::MoveCursor(Direction::Right)),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ActivateCursor),
            KeyCode::Char('r') => Some(Action::Restart),
            KeyCode::Char('n') => Some(Action::ChangePlayers),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        },
    }
}

/// Maps one line of text input to actions for the current screen.
///
/// On the setup form a line fills the focused field (a blank line keeps
/// what is there) and then moves on: to the O field after X, or submits
/// after O.
pub fn actions_for_line(screen: &Screen, line: &str) -> Vec<Action> {
    let line = line.trim();
    match screen {
        Screen::Setup(form) => {
            let mut actions = Vec::new();
            if !line.is_empty() {
                actions.push(Action::Fill(line.to_string()));
            }
            actions.push(match form.focus {
                Field::PlayerX => Action::SwitchField,
                Field::PlayerO => Action::Submit,
            });
            actions
        }
        Screen::Playing(_) => match line.to_ascii_lowercase().as_str() {
            "q" | "quit" => vec![Action::Quit],
            "r" | "restart" => vec![Action::Restart],
            "n" | "new" => vec![Action::ChangePlayers],
            other => match Position::parse(other) {
                Some(position) => vec![Action::ActivateCell(position.cell_number())],
                None => {
                    debug!(line = other, "Unrecognized input");
                    Vec::new()
                }
            },
        },
    }
}
