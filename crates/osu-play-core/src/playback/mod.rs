//! Sequential playback through an external player
//!
//! - [`Player`] - anything that can play one file to completion
//! - [`PlayerCommand`] - a player backed by an external program
//! - [`PlaybackLoop`] - plays a track list one file at a time

mod engine;
mod player;

pub use engine::*;
pub use player::*;
