//! Line-oriented text rendering.

use std::io::Write;

use anyhow::Result;
use hotseat_engine::{Board, GameView};

use super::Renderer;
use crate::app::AppView;
use crate::setup::{Field, SetupForm};

/// Writes each frame as plain text, for pipes and dumb terminals.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    /// Wraps a writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn setup(&mut self, form: &SetupForm) -> Result<()> {
        writeln!(self.out, "{}", form.prompt)?;
        let (label, current) = match form.focus {
            Field::PlayerX => ("Player X", &form.player_x),
            Field::PlayerO => ("Player O", &form.player_o),
        };
        if current.is_empty() {
            write!(self.out, "{} name: ", label)?;
        } else {
            write!(self.out, "{} name [{}]: ", label, current)?;
        }
        Ok(())
    }

    fn game(&mut self, game: &GameView) -> Result<()> {
        writeln!(self.out, "{} (X) vs {} (O)", game.player_x, game.player_o)?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", Board::from_squares(game.cells).display())?;
        writeln!(self.out)?;
        if let Some(line) = game.winning_line {
            let [a, b, c] = line.cells();
            writeln!(self.out, "Winning line: {}-{}-{}", a + 1, b + 1, c + 1)?;
        }
        writeln!(self.out, "{}", game.message)?;
        if game.show_restart {
            writeln!(self.out, "Enter 'r' to play again, 'n' for new players or 'q' to quit.")?;
        } else {
            writeln!(self.out, "Enter a cell (1-9), 'n' for new players or 'q' to quit.")?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, view: &AppView) -> Result<()> {
        match view {
            AppView::Setup { form } => self.setup(form)?,
            AppView::Game { game, .. } => self.game(game)?,
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::app::App;
    use crate::config::HotseatConfig;

    fn rendered(app: &App) -> String {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(&app.view()).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_setup_prompt_shows_prefill() {
        let app = App::new(&HotseatConfig::default(), Some("Ada".to_string()), None);
        assert_eq!(rendered(&app), "Enter names to begin.\nPlayer X name [Ada]: ");
    }

    #[test]
    fn test_board_and_status() {
        let mut app = App::new(&HotseatConfig::default(), None, Some("Bob".to_string()));
        app.handle(Action::Submit);
        app.handle(Action::ActivateCell(1));
        let text = rendered(&app);
        assert!(text.starts_with("Player X (X) vs Bob (O)\n"));
        assert!(text.contains("X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9"));
        assert!(text.contains("Bob, you're up!"));
        assert!(!text.contains("play again"));
    }

    #[test]
    fn test_win_shows_line_and_restart_hint() {
        let mut app = App::new(&HotseatConfig::default(), Some("Ada".to_string()), Some("Bob".to_string()));
        app.handle(Action::Submit);
        for cell in [1, 4, 2, 5, 3] {
            app.handle(Action::ActivateCell(cell));
        }
        let text = rendered(&app);
        assert!(text.contains("Winning line: 1-2-3"));
        assert!(text.contains("Ada congratulations, you won!"));
        assert!(text.contains("'r' to play again"));
    }
}
