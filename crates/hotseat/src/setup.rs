//! The name entry form shown before a game.

use serde::Serialize;

/// Prompt shown on a fresh form.
pub const SETUP_PROMPT: &str = "Enter names to begin.";

/// Prompt shown when names are required and one is missing.
pub const NAMES_REQUIRED_PROMPT: &str = "Please enter both player names.";

/// Which name field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Field {
    /// The X player's name.
    #[default]
    PlayerX,
    /// The O player's name.
    PlayerO,
}

/// Two name fields and a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetupForm {
    /// Text in the X player's field.
    pub player_x: String,
    /// Text in the O player's field.
    pub player_o: String,
    /// Focused field.
    pub focus: Field,
    /// Message shown above the form.
    pub prompt: String,
}

impl Default for SetupForm {
    fn default() -> Self {
        Self::new(String::new(), String::new())
    }
}

impl SetupForm {
    /// Creates a form with prefilled names.
    pub fn new(player_x: String, player_o: String) -> Self {
        Self {
            player_x,
            player_o,
            focus: Field::PlayerX,
            prompt: SETUP_PROMPT.to_string(),
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::PlayerX => &mut self.player_x,
            Field::PlayerO => &mut self.player_o,
        }
    }

    /// Text in the focused field.
    pub fn focused(&self) -> &str {
        match self.focus {
            Field::PlayerX => &self.player_x,
            Field::PlayerO => &self.player_o,
        }
    }

    /// Appends a character to the focused field. Control characters are
    /// dropped.
    pub fn type_char(&mut self, c: char) {
        if !c.is_control() {
            self.focused_mut().push(c);
        }
    }

    /// Removes the last character of the focused field.
    pub fn erase(&mut self) {
        self.focused_mut().pop();
    }

    /// Replaces the focused field.
    pub fn fill(&mut self, text: &str) {
        *self.focused_mut() = text.to_string();
    }

    /// Moves focus to the other field.
    pub fn switch_field(&mut self) {
        self.focus = match self.focus {
            Field::PlayerX => Field::PlayerO,
            Field::PlayerO => Field::PlayerX,
        };
    }

    /// True if both fields contain something besides whitespace.
    pub fn is_complete(&self) -> bool {
        !self.player_x.trim().is_empty() && !self.player_o.trim().is_empty()
    }
}
