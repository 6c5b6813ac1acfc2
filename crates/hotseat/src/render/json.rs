//! JSON-lines rendering for programs driving the game.

use std::io::Write;

use anyhow::Result;

use super::Renderer;
use crate::app::AppView;

/// Writes each frame as one JSON object per line.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    /// Wraps a writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, view: &AppView) -> Result<()> {
        serde_json::to_writer(&mut self.out, view)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
