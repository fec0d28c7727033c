//! Core game types and logic (map, player, input).
//!
//! Re-exports:
//! - `maze`: Map validation and cell lookup
//! - `player`: Player pose and movement
//! - `process_events`: Input snapshot and the movement it drives

pub mod maze;
pub mod player;
pub mod process_events;
