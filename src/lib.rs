//! Stickypad - the core of a floating sticky-notes widget.
//!
//! Frameless, always-on-top note windows the user can jot text into,
//! recolor, spawn a neighbor from, and close. This crate owns the
//! logic side: note records and IDs, the live-note registry, and the
//! placement geometry for spawning a note next to an existing one.
//! A window-system binding implements the `platform` traits and
//! applies the computed titles and bounds to real windows; the
//! bundled headless implementation drives everything without a
//! display.

pub mod config;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod note;
pub mod placement;
pub mod platform;
pub mod registry;
pub mod theme;
pub mod workspace;
