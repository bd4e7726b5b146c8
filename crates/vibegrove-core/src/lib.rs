//! vibegrove-core: Screen routing and tree watering, no UI.
//!
//! This crate holds the navigation state machine (swipes, arrow keys, nav
//! bar), the drag-to-water controller, and the per-screen state that lives
//! between mount and teardown. It is completely UI-agnostic: frontends feed
//! it pointer and key input in pixel space and drain [`events::GroveEvent`]s.

pub mod app;
pub mod catalog;
pub mod config;
pub mod drag;
pub mod error;
pub mod events;
pub mod gesture;
pub mod router;
pub mod screen;
pub mod screens;
pub mod types;
pub mod timers;
