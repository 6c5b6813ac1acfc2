//! Full-screen terminal rendering with ratatui.

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use hotseat_engine::{GameView, Position, Square, Symbol};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument};

use super::Renderer;
use crate::app::AppView;
use crate::setup::{Field, SetupForm};

/// Renderer that owns the terminal in raw mode on the alternate screen.
///
/// Call [`TerminalRenderer::restore`] before exiting; dropping the renderer
/// restores the terminal as a fallback.
pub struct TerminalRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl TerminalRenderer {
    /// Switches the terminal into raw mode on the alternate screen.
    #[instrument]
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                return Err(e.into());
            }
        };
        info!("Terminal UI active");
        Ok(Self {
            terminal,
            active: true,
        })
    }

    /// Leaves raw mode and the alternate screen.
    #[instrument(skip(self))]
    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        debug!("Terminal restored");
        Ok(())
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, view: &AppView) -> Result<()> {
        self.terminal.draw(|frame| draw(frame, view))?;
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        if self.active {
            let _ = self.restore();
        }
    }
}

/// Draws one frame of the app.
pub fn draw(frame: &mut Frame, view: &AppView) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Form or board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    let title = Paragraph::new("Hotseat - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let (status, hint) = match view {
        AppView::Setup { form } => {
            draw_setup(frame, chunks[1], form);
            (
                form.prompt.as_str(),
                "Tab: switch field   Enter: start   Esc: quit",
            )
        }
        AppView::Game { game, cursor } => {
            draw_board(frame, chunks[1], game, *cursor);
            (game.message.as_str(), game_hint(game.show_restart))
        }
    };

    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let hint = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[3]);
}

fn game_hint(show_restart: bool) -> &'static str {
    if show_restart {
        "r: play again   n: new players   q: quit"
    } else {
        "1-9 or arrows + Enter: move   n: new players   q: quit"
    }
}

fn draw_setup(frame: &mut Frame, area: Rect, form: &SetupForm) {
    let form_area = center_rect(area, 40, 7);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(form_area);

    draw_field(frame, rows[0], "Player X", &form.player_x, form.focus == Field::PlayerX);
    draw_field(frame, rows[2], "Player O", &form.player_o, form.focus == Field::PlayerO);
}

fn draw_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let (text, border) = if focused {
        (format!("{}_", value), Style::default().fg(Color::Yellow))
    } else {
        (value.to_string(), Style::default().fg(Color::DarkGray))
    };

    let field = Paragraph::new(text).block(
        Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(field, area);
}

fn draw_board(frame: &mut Frame, area: Rect, game: &GameView, cursor: Position) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    draw_row(frame, rows[0], game, cursor, 0);
    draw_separator(frame, rows[1]);
    draw_row(frame, rows[2], game, cursor, 3);
    draw_separator(frame, rows[3]);
    draw_row(frame, rows[4], game, cursor, 6);
}

fn draw_row(frame: &mut Frame, area: Rect, game: &GameView, cursor: Position, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    draw_cell(frame, cols[0], game, cursor, start);
    draw_separator_vertical(frame, cols[1]);
    draw_cell(frame, cols[2], game, cursor, start + 1);
    draw_separator_vertical(frame, cols[3]);
    draw_cell(frame, cols[4], game, cursor, start + 2);
}

fn draw_cell(frame: &mut Frame, area: Rect, game: &GameView, cursor: Position, index: usize) {
    let (symbol, base_style) = match game.cells[index] {
        Square::Empty => (
            format!(" {} ", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Symbol::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Symbol::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if game.is_highlighted(index) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if !game.show_restart && cursor.to_index() == index {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
        Line::from(""),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
