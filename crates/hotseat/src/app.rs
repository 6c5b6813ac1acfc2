//! Application state machine.
//!
//! [`App`] owns the only live game. Each [`Action`] is applied to
//! completion before the next one is read; renderers only ever see the
//! resulting [`AppView`].

use hotseat_engine::{
    GameSession, GameView, PlayerDefaults, Position, Symbol, apply_move, restart,
    start_game_with,
};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::action::Action;
use crate::config::HotseatConfig;
use crate::input::move_cursor;
use crate::setup::{Field, NAMES_REQUIRED_PROMPT, SetupForm};

/// A game being played, plus where the keyboard cursor sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayState {
    session: GameSession,
    cursor: Position,
}

impl PlayState {
    fn new(session: GameSession) -> Self {
        Self {
            session,
            cursor: Position::Center,
        }
    }

    /// The session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }
}

/// Which screen is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Collecting names.
    Setup(SetupForm),
    /// A game on the board.
    Playing(PlayState),
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Setup(SetupForm::default())
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum AppView {
    /// The name entry form.
    Setup {
        /// Form contents.
        form: SetupForm,
    },
    /// The board.
    Game {
        /// Game snapshot.
        game: GameView,
        /// Keyboard cursor.
        cursor: Position,
    },
}

/// The running application.
#[derive(Debug)]
pub struct App {
    screen: Screen,
    defaults: PlayerDefaults,
    require_names: bool,
    quit: bool,
}

impl App {
    /// Creates the app on the setup form, optionally with prefilled names.
    #[instrument(skip(config))]
    pub fn new(config: &HotseatConfig, player_x: Option<String>, player_o: Option<String>) -> Self {
        let form = SetupForm::new(player_x.unwrap_or_default(), player_o.unwrap_or_default());
        Self {
            screen: Screen::Setup(form),
            defaults: config.player_defaults(),
            require_names: *config.require_names(),
            quit: false,
        }
    }

    /// Current screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The session in play, if any.
    pub fn session(&self) -> Option<&GameSession> {
        match &self.screen {
            Screen::Playing(play) => Some(&play.session),
            Screen::Setup(_) => None,
        }
    }

    /// True once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> AppView {
        match &self.screen {
            Screen::Setup(form) => AppView::Setup { form: form.clone() },
            Screen::Playing(play) => AppView::Game {
                game: GameView::of(&play.session),
                cursor: play.cursor,
            },
        }
    }

    /// Applies one action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        if action == Action::Quit {
            info!("Quit requested");
            self.quit = true;
            return;
        }
        self.screen = match std::mem::take(&mut self.screen) {
            Screen::Setup(form) => self.handle_setup(form, action),
            Screen::Playing(play) => self.handle_play(play, action),
        };
    }

    fn handle_setup(&self, mut form: SetupForm, action: Action) -> Screen {
        match action {
            Action::Type(c) => form.type_char(c),
            Action::Erase => form.erase(),
            Action::Fill(text) => form.fill(&text),
            Action::SwitchField => form.switch_field(),
            Action::Submit => return self.submit(form),
            other => debug!(action = ?other, "Ignoring action on setup form"),
        }
        Screen::Setup(form)
    }

    fn submit(&self, mut form: SetupForm) -> Screen {
        if self.require_names && !form.is_complete() {
            debug!("Rejecting setup form with a blank name");
            form.prompt = NAMES_REQUIRED_PROMPT.to_string();
            form.focus = if form.player_x.trim().is_empty() {
                Field::PlayerX
            } else {
                Field::PlayerO
            };
            return Screen::Setup(form);
        }
        let session = start_game_with(&form.player_x, &form.player_o, &self.defaults);
        Screen::Playing(PlayState::new(session))
    }

    fn handle_play(&self, mut play: PlayState, action: Action) -> Screen {
        match action {
            Action::ActivateCell(number) => match Position::from_cell_number(number) {
                Some(position) => {
                    play.cursor = position;
                    play.session = apply_move(play.session, position.to_index());
                }
                None => debug!(number, "Ignoring cell outside 1-9"),
            },
            Action::ActivateCursor => {
                play.session = apply_move(play.session, play.cursor.to_index());
            }
            Action::MoveCursor(direction) => play.cursor = move_cursor(play.cursor, direction),
            Action::Restart => {
                if play.session.status().is_terminal() {
                    play = PlayState::new(restart(play.session));
                } else {
                    debug!("Ignoring restart while the game is running");
                }
            }
            Action::ChangePlayers => {
                info!("Returning to setup form");
                let x = play.session.player(Symbol::X).name().to_string();
                let o = play.session.player(Symbol::O).name().to_string();
                return Screen::Setup(SetupForm::new(x, o));
            }
            other => debug!(action = ?other, "Ignoring action during play"),
        }
        Screen::Playing(play)
    }
}
