//! Workspace integration tests, driven through the headless platform.

use super::*;
use crate::platform::headless::{HeadlessPlatform, WindowOp};

fn workspace() -> Workspace<HeadlessPlatform> {
    let platform = HeadlessPlatform::new(Rect::new(0.0, 0.0, 1920.0, 1080.0));
    Workspace::new(platform, Config::default(), Theme::default())
}

fn note_at(x: f64, y: f64) -> NoteOptions {
    NoteOptions {
        dimensions: Some(Rect::new(x, y, 250.0, 250.0)),
        ..NoteOptions::default()
    }
}

#[test]
fn bare_create_uses_config_defaults() {
    let mut ws = workspace();
    let id = ws.create_note(NoteOptions::default());

    let note = ws.note(id).unwrap();
    assert_eq!(note.dimensions, Rect::new(25.0, 25.0, 250.0, 250.0));
    assert_eq!(note.color, NoteColor::Blue);
    assert_eq!(note.content, "");

    let ops = ws.platform().ops();
    assert_eq!(
        ops,
        vec![WindowOp::Opened {
            window: 0,
            title: "Sticky Note (1)".to_string(),
            bounds: Rect::new(25.0, 25.0, 250.0, 250.0),
            frameless: true,
            always_on_top: true,
            stylesheets: vec!["theme/main.css", "theme/blue.css"],
        }]
    );
}

#[test]
fn spawn_adjacent_places_to_the_right() {
    let mut ws = workspace();
    let anchor = ws.create_note(note_at(100.0, 100.0));
    let spawned = ws.spawn_adjacent(anchor).unwrap();

    assert_eq!(
        ws.note(spawned).unwrap().dimensions,
        Rect::new(356.0, 100.0, 250.0, 250.0)
    );
    // The new window opens at the anchor's rect, then moves.
    let ops = ws.platform().ops();
    assert!(ops.contains(&WindowOp::SetBounds {
        window: 1,
        bounds: Rect::new(356.0, 100.0, 250.0, 250.0),
    }));
}

#[test]
fn spawn_adjacent_nudges_off_an_occupied_slot() {
    let mut ws = workspace();
    let anchor = ws.create_note(note_at(100.0, 100.0));
    ws.spawn_adjacent(anchor).unwrap();
    let second = ws.spawn_adjacent(anchor).unwrap();

    assert_eq!(
        ws.note(second).unwrap().dimensions.origin(),
        (380.0, 124.0)
    );
}

#[test]
fn spawn_adjacent_flips_left_near_the_screen_edge() {
    let mut ws = workspace();
    let anchor = ws.create_note(note_at(1700.0, 100.0));
    let spawned = ws.spawn_adjacent(anchor).unwrap();

    assert_eq!(
        ws.note(spawned).unwrap().dimensions,
        Rect::new(1444.0, 100.0, 250.0, 250.0)
    );
}

#[test]
fn spawn_adjacent_from_unknown_anchor_is_none() {
    let mut ws = workspace();
    assert!(ws.spawn_adjacent(NoteId(9)).is_none());
    assert!(ws.is_empty());
}

#[test]
fn close_removes_note_and_closes_window() {
    let mut ws = workspace();
    let a = ws.create_note(NoteOptions::default());
    let b = ws.create_note(NoteOptions::default());

    ws.close_note(a);
    assert_eq!(ws.len(), 1);
    assert!(ws.note(a).is_none());
    assert!(ws.note(b).is_some());
    assert!(ws
        .platform()
        .ops()
        .contains(&WindowOp::Closed { window: 0 }));
}

#[test]
fn close_unknown_id_issues_no_window_ops() {
    let mut ws = workspace();
    ws.create_note(NoteOptions::default());
    let before = ws.platform().ops().len();
    ws.close_note(NoteId(42));
    assert_eq!(ws.platform().ops().len(), before);
    assert_eq!(ws.len(), 1);
}

#[test]
fn closed_ids_are_reused_and_titles_follow() {
    let mut ws = workspace();
    let _a = ws.create_note(NoteOptions::default());
    let b = ws.create_note(NoteOptions::default());
    let _c = ws.create_note(NoteOptions::default());

    ws.close_note(b);
    let d = ws.create_note(NoteOptions::default());

    assert_eq!(d, NoteId(1));
    assert_eq!(ws.note(d).unwrap().window_title(), "Sticky Note (2)");
}

#[test]
fn recolor_updates_the_record() {
    let mut ws = workspace();
    let id = ws.create_note(NoteOptions::default());
    assert!(ws.set_color(id, NoteColor::Yellow));
    assert_eq!(ws.note(id).unwrap().color, NoteColor::Yellow);
    assert!(!ws.set_color(NoteId(7), NoteColor::Dark));
}

#[test]
fn locked_notes_ignore_content_edits() {
    let mut ws = workspace();
    let locked = ws.create_note(NoteOptions {
        properties: NoteProperties::LOCKED,
        ..NoteOptions::default()
    });
    let open = ws.create_note(NoteOptions::default());

    assert!(!ws.set_content(locked, "scribble"));
    assert_eq!(ws.note(locked).unwrap().content, "");

    assert!(ws.set_content(open, "shopping list"));
    assert_eq!(ws.note(open).unwrap().content, "shopping list");
}

#[test]
fn explicit_color_overrides_theme_default() {
    let mut ws = workspace();
    let id = ws.create_note(NoteOptions {
        color: Some(NoteColor::Dark),
        ..NoteOptions::default()
    });
    assert_eq!(ws.note(id).unwrap().color, NoteColor::Dark);

    let opened = &ws.platform().ops()[0];
    match opened {
        WindowOp::Opened { stylesheets, .. } => {
            assert_eq!(stylesheets, &vec!["theme/main.css", "theme/dark.css"]);
        }
        other => panic!("expected Opened, got {:?}", other),
    }
}
