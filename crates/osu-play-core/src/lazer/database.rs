//! osu!lazer database reader
//!
//! Reads beatmap sets, their difficulties and named files from lazer's
//! SQLite `client.db`. The database is never written: it is copied into a
//! snapshot cache first (unless disabled) and the copy is opened read-only.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags, OptionalExtension};

use crate::beatmap::{Beatmap, BeatmapMetadata, BeatmapSet, NamedFile};
use crate::error::{Error, Result};
use crate::lazer::LazerFileStore;
use crate::library::BeatmapStore;

/// Database filename inside the lazer data directory
pub const DATABASE_FILE: &str = "client.db";

/// Realm database written by current osu!lazer releases
pub const REALM_FILE: &str = "client.realm";

const SELECT_SETS: &str = "
SELECT ID, OnlineBeatmapSetID
FROM BeatmapSetInfo
WHERE DeletePending = 0
ORDER BY ID";

const SELECT_BEATMAPS: &str = "
SELECT
    BeatmapInfo.ID,
    BeatmapInfo.BeatmapSetInfoID,
    BeatmapInfo.OnlineBeatmapID,
    BeatmapMetadata.Title,
    BeatmapMetadata.Artist,
    BeatmapMetadata.TitleUnicode,
    BeatmapMetadata.ArtistUnicode,
    BeatmapMetadata.AudioFile
FROM BeatmapInfo
INNER JOIN BeatmapSetInfo
    ON BeatmapInfo.BeatmapSetInfoID = BeatmapSetInfo.ID
LEFT JOIN BeatmapMetadata
    ON BeatmapMetadata.ID = COALESCE(BeatmapInfo.MetadataID, BeatmapSetInfo.MetadataID)
ORDER BY BeatmapInfo.BeatmapSetInfoID, BeatmapInfo.ID";

const SELECT_FILES: &str = "
SELECT BeatmapSetFileInfo.BeatmapSetInfoID, BeatmapSetFileInfo.Filename, FileInfo.Hash
FROM BeatmapSetFileInfo
INNER JOIN FileInfo
    ON FileInfo.ID = BeatmapSetFileInfo.FileInfoID
ORDER BY BeatmapSetFileInfo.BeatmapSetInfoID, BeatmapSetFileInfo.ID";

const HAS_MIGRATION_HISTORY: &str = "
SELECT COUNT(*) > 0
FROM sqlite_master
WHERE type = 'table' AND name = '__EFMigrationsHistory'";

/// How the lazer database should be opened
#[derive(Debug, Clone, Default)]
pub struct StoreOptions {
    /// Directory holding the snapshot copy of `client.db`.
    /// `None` opens the live database directly (still read-only).
    pub cache_dir: Option<PathBuf>,
    /// Refresh the snapshot even if it looks current
    pub reload: bool,
}

/// Reader for osu!lazer's beatmap database
pub struct LazerDatabase {
    conn: Connection,
    file_store: LazerFileStore,
}

impl LazerDatabase {
    /// Open the lazer database found in `data_path`
    pub fn open(data_path: &Path, options: &StoreOptions) -> Result<Self> {
        let db_path = data_path.join(DATABASE_FILE);
        if !db_path.is_file() {
            let realm_path = data_path.join(REALM_FILE);
            if realm_path.is_file() {
                return Err(Error::UnsupportedRealm(realm_path));
            }
            return Err(Error::OsuNotFound(data_path.to_path_buf()));
        }

        let open_path = match &options.cache_dir {
            Some(cache_dir) => refresh_snapshot(&db_path, cache_dir, options.reload)?,
            None => db_path,
        };

        tracing::debug!("Opening osu! database at {}", open_path.display());
        let conn = Connection::open_with_flags(
            &open_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        Ok(Self {
            conn,
            file_store: LazerFileStore::new(data_path),
        })
    }

    /// Latest schema migration applied by osu!, if the database records one
    pub fn schema_version(&self) -> Result<Option<String>> {
        let has_history: bool = self.conn.query_row(HAS_MIGRATION_HISTORY, [], |row| row.get(0))?;
        if !has_history {
            return Ok(None);
        }

        let version = self
            .conn
            .query_row(
                "SELECT MigrationId FROM __EFMigrationsHistory ORDER BY MigrationId DESC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()?;
        Ok(version)
    }

    /// Get all beatmap sets from the database, ordered by row id
    pub fn get_all_beatmap_sets(&self) -> Result<Vec<BeatmapSet>> {
        let mut sets = Vec::new();
        let mut index: HashMap<i64, usize> = HashMap::new();

        let mut stmt = self.conn.prepare(SELECT_SETS)?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, Option<i64>>(1)?))
        })?;
        for row in rows {
            let (id, online_id) = row?;
            index.insert(id, sets.len());
            sets.push(BeatmapSet {
                online_id,
                ..BeatmapSet::new(id)
            });
        }

        let mut stmt = self.conn.prepare(SELECT_BEATMAPS)?;
        let rows = stmt.query_map([], |row| {
            let set_id: i64 = row.get(1)?;
            let beatmap = Beatmap {
                id: row.get(0)?,
                online_id: row.get(2)?,
                metadata: BeatmapMetadata {
                    title: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                    artist: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
                    title_unicode: row.get(5)?,
                    artist_unicode: row.get(6)?,
                    audio_file: row.get(7)?,
                },
            };
            Ok((set_id, beatmap))
        })?;
        for row in rows {
            let (set_id, beatmap) = row?;
            // Beatmaps of sets pending deletion have no entry
            if let Some(&idx) = index.get(&set_id) {
                sets[idx].beatmaps.push(beatmap);
            }
        }

        let mut stmt = self.conn.prepare(SELECT_FILES)?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                NamedFile {
                    filename: row.get(1)?,
                    hash: row.get(2)?,
                },
            ))
        })?;
        for row in rows {
            let (set_id, file) = row?;
            if let Some(&idx) = index.get(&set_id) {
                sets[idx].files.push(file);
            }
        }

        tracing::debug!("Loaded {} beatmap sets", sets.len());
        Ok(sets)
    }

    /// Close the database handle, reporting any error from sqlite
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| Error::Database(e))
    }
}

impl BeatmapStore for LazerDatabase {
    fn beatmap_sets(&self) -> Result<Vec<BeatmapSet>> {
        self.get_all_beatmap_sets()
    }

    fn path_for(&self, hash: &str) -> Option<PathBuf> {
        self.file_store.hash_to_path(hash)
    }
}

/// Copy `db_path` into `cache_dir` when the snapshot is missing, older than
/// the source, or `force` is set. Returns the snapshot path.
pub fn refresh_snapshot(db_path: &Path, cache_dir: &Path, force: bool) -> Result<PathBuf> {
    let snapshot = cache_dir.join(DATABASE_FILE);

    let stale = force || !snapshot.is_file() || is_newer(db_path, &snapshot)?;
    if stale {
        fs::create_dir_all(cache_dir)?;
        fs::copy(db_path, &snapshot)?;
        tracing::info!("Cached osu! database at {}", snapshot.display());
    } else {
        tracing::debug!("Using cached osu! database at {}", snapshot.display());
    }

    Ok(snapshot)
}

fn is_newer(source: &Path, snapshot: &Path) -> Result<bool> {
    let source_modified = fs::metadata(source)?.modified()?;
    let snapshot_modified = fs::metadata(snapshot)?.modified()?;
    Ok(source_modified > snapshot_modified)
}
