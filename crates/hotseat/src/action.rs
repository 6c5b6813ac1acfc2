//! Player intents fed into the application.

/// Arrow direction for keyboard navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the top row.
    Up,
    /// Toward the bottom row.
    Down,
    /// Toward the left column.
    Left,
    /// Toward the right column.
    Right,
}

/// Something a player did.
///
/// Actions that make no sense on the current screen are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a character to the focused name field.
    Type(char),
    /// Delete the last character of the focused name field.
    Erase,
    /// Replace the focused name field.
    Fill(String),
    /// Move focus to the other name field.
    SwitchField,
    /// Submit the setup form.
    Submit,
    /// Activate a cell by its on-screen number (1-9).
    ActivateCell(u8),
    /// Move the board cursor.
    MoveCursor(Direction),
    /// Activate the cell under the cursor.
    ActivateCursor,
    /// Play again with the same players.
    Restart,
    /// Return to the setup form.
    ChangePlayers,
    /// Leave the game.
    Quit,
}
