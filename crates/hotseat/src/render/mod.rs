//! Renderers.
//!
//! Each target environment gets its own [`Renderer`]; they all draw the same
//! [`AppView`](crate::AppView) and know nothing about game rules.

mod json;
mod terminal;
mod text;

pub use json::JsonRenderer;
pub use terminal::{TerminalRenderer, draw};
pub use text::TextRenderer;

use crate::app::AppView;

/// Draws frames for one output environment.
pub trait Renderer {
    /// Draws a single frame.
    fn render(&mut self, view: &AppView) -> anyhow::Result<()>;
}

