//! osu!lazer database and file storage integration
//!
//! - [`LazerDatabase`] - Reader for osu!lazer's `client.db`
//! - [`LazerFileStore`] - Access to lazer's content-addressed file store
//!
//! ## Example
//!
//! ```no_run
//! use osu_play_core::lazer::{LazerDatabase, StoreOptions};
//! use std::path::Path;
//!
//! let db = LazerDatabase::open(Path::new("/home/me/.local/share/osu"), &StoreOptions::default())?;
//! let sets = db.get_all_beatmap_sets()?;
//! println!("Found {} beatmap sets", sets.len());
//! # Ok::<(), osu_play_core::error::Error>(())
//! ```

mod database;
mod file_store;

pub use database::*;
pub use file_store::*;
