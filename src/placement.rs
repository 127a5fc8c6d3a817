//! Placement for newly spawned notes.
//!
//! A new note goes directly to the right of the note it was spawned
//! from, falling back to the left (or clamping against the screen
//! edge) when there is no room, then nudging diagonally while its
//! origin coincides exactly with an existing note's.

use crate::geometry::Rect;

/// Gap between a note and the one it was spawned from.
pub const NEW_NOTE_PADDING: f64 = 6.0;

/// Fraction of the anchor's width that must still fit on screen for
/// a clamped right-side placement to be worth keeping.
const OVERFLOW_PROBE: f64 = 0.15;

/// Collision nudging gives up after this many attempts and returns
/// the current position as a best effort.
const MAX_NUDGE_ATTEMPTS: u32 = 8;

/// Compute where to place a new note of the same size as `anchor`,
/// next to it, within `screen`.
///
/// `occupied` holds the rectangles of all other live notes; a
/// placement whose origin exactly matches one of them is nudged by
/// `4 * NEW_NOTE_PADDING` on both axes and re-checked, up to
/// `MAX_NUDGE_ATTEMPTS` times. Every branch produces a rectangle;
/// there is no failure case.
pub fn place_next_to(anchor: Rect, screen: Rect, occupied: &[Rect]) -> Rect {
    let mut target = anchor;
    target.x += anchor.width + NEW_NOTE_PADDING;

    if target.x + anchor.width + NEW_NOTE_PADDING > screen.right() {
        if target.x + anchor.width * OVERFLOW_PROBE > screen.right() {
            // No usable room on the right; place on the left instead.
            target.x = anchor.x - anchor.width - NEW_NOTE_PADDING;
        } else {
            target.x = screen.right() - anchor.width - NEW_NOTE_PADDING;
        }
    }

    let nudge = NEW_NOTE_PADDING * 4.0;
    for _ in 0..MAX_NUDGE_ATTEMPTS {
        // Exact origin coincidence only: the user sees two notes
        // stacked perfectly, which is what the nudge exists to break.
        let collides = occupied
            .iter()
            .any(|r| r.x == target.x && r.y == target.y);
        if !collides {
            break;
        }
        target.x += nudge;
        target.y += nudge;
    }

    target
}
