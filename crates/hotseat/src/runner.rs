//! Event loops that connect input, the app and a renderer.

use std::io::BufRead;

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::{debug, error, info, instrument};

use crate::app::App;
use crate::input::{action_for_key, actions_for_line};
use crate::render::{Renderer, TerminalRenderer};

/// Runs the full-screen terminal UI until the players quit.
///
/// The terminal is restored before any error is returned.
#[instrument(skip_all)]
pub fn run_terminal(app: &mut App) -> Result<()> {
    info!("Starting terminal UI");
    let mut renderer = TerminalRenderer::enter()?;
    let result = terminal_loop(app, &mut renderer);
    renderer.restore()?;

    if let Err(ref e) = result {
        error!(error = ?e, "Terminal loop failed");
    }
    result
}

fn terminal_loop(app: &mut App, renderer: &mut TerminalRenderer) -> Result<()> {
    while !app.should_quit() {
        renderer.render(&app.view())?;
        if let Event::Key(key) = event::read()?
            && let Some(action) = action_for_key(app.screen(), key)
        {
            app.handle(action);
        }
    }
    Ok(())
}

/// Runs the game line by line from `input` until quit or end of input.
#[instrument(skip_all)]
pub fn run_lines<R: BufRead, Re: Renderer>(
    app: &mut App,
    input: R,
    renderer: &mut Re,
) -> Result<()> {
    info!("Starting line-based session");
    renderer.render(&app.view())?;
    for line in input.lines() {
        let line = line?;
        for action in actions_for_line(app.screen(), &line) {
            app.handle(action);
            if app.should_quit() {
                return Ok(());
            }
        }
        renderer.render(&app.view())?;
    }
    debug!("Input closed");
    Ok(())
}
