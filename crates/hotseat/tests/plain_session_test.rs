//! Integration tests driving whole sessions through the line-based loop.

use hotseat::{App, HotseatConfig, JsonRenderer, TextRenderer, run_lines};
use hotseat_engine::{GameStatus, Symbol};
use serde_json::Value;
use std::io::Cursor;

fn play_text(config: &HotseatConfig, input: &str) -> (App, String) {
    let mut app = App::new(config, None, None);
    let mut renderer = TextRenderer::new(Vec::new());
    run_lines(&mut app, Cursor::new(input.to_string()), &mut renderer)
        .expect("Session failed");
    let out = String::from_utf8(renderer.into_inner()).expect("Output not UTF-8");
    (app, out)
}

#[test]
fn test_draw_then_play_again() {
    let input = "Ada\nBob\n1\n2\n3\n5\n4\n6\n8\n7\n9\nr\n";
    let (app, out) = play_text(&HotseatConfig::default(), input);

    assert!(out.contains("It's a Draw! Play again."));
    let session = app.session().expect("Should be playing");
    assert_eq!(session.status(), GameStatus::InProgress);
    assert!(session.history().is_empty());
    assert_eq!(session.player(Symbol::X).name(), "Ada");
    assert!(out.ends_with("Ada, you're up!\nEnter a cell (1-9), 'n' for new players or 'q' to quit.\n"));
}

#[test]
fn test_labels_and_numbers_both_move() {
    let input = "Ada\nBob\ncenter\n1\ntop-right\n";
    let (app, _) = play_text(&HotseatConfig::default(), input);
    let session = app.session().expect("Should be playing");
    assert_eq!(session.history(), &[4, 0, 2]);
    assert_eq!(session.turn(), Symbol::O);
}

#[test]
fn test_occupied_and_bogus_input_ignored() {
    let input = "\n\n5\n5\nelsewhere\n0\n";
    let (app, out) = play_text(&HotseatConfig::default(), input);
    let session = app.session().expect("Should be playing");
    assert_eq!(session.history(), &[4]);
    assert_eq!(session.turn(), Symbol::O);
    assert!(out.contains("Player O, you're up!"));
}

#[test]
fn test_change_players_keeps_names() {
    let input = "Ada\nBob\n5\nn\nCleo\n\n";
    let (app, _) = play_text(&HotseatConfig::default(), input);
    let session = app.session().expect("Should be playing");
    assert_eq!(session.player(Symbol::X).name(), "Cleo");
    assert_eq!(session.player(Symbol::O).name(), "Bob");
    assert!(session.history().is_empty());
}

#[test]
fn test_required_names_reprompt() {
    let config = HotseatConfig::from_toml("require_names = true").expect("Valid config");
    let (app, out) = play_text(&config, "Ada\n\n");
    assert!(app.session().is_none());
    assert!(out.contains("Please enter both player names."));
}

#[test]
fn test_required_names_recover_after_blank_x() {
    let config = HotseatConfig::from_toml("require_names = true").expect("Valid config");
    let (app, out) = play_text(&config, "\nBob\nAda\nBob\n");
    assert!(out.contains("Please enter both player names."));
    let session = app.session().expect("Should be playing");
    assert_eq!(session.player(Symbol::X).name(), "Ada");
    assert_eq!(session.player(Symbol::O).name(), "Bob");
}

#[test]
fn test_json_frames_track_the_game() {
    let mut app = App::new(&HotseatConfig::default(), Some("Ada".into()), Some("Bob".into()));
    let mut renderer = JsonRenderer::new(Vec::new());
    run_lines(&mut app, Cursor::new("\n\n7\n1\n5\n2\n3\n"), &mut renderer).expect("Session failed");

    let out = String::from_utf8(renderer.into_inner()).expect("Output not UTF-8");
    let last: Value = out
        .lines()
        .last()
        .map(|line| serde_json::from_str(line).expect("Frame is JSON"))
        .expect("At least one frame");
    assert_eq!(last["screen"], "game");
    assert_eq!(last["game"]["message"], "Ada congratulations, you won!");
    assert_eq!(last["game"]["show_restart"], true);
    assert_eq!(last["game"]["winning_line"], serde_json::json!([2, 4, 6]));
}
