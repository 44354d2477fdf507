//! osu-play - Play the audio of your osu!lazer beatmaps
//!
//! Usage:
//!   osu-play                          Pick a track and play from there
//!   osu-play --loop                   Start over after the last track
//!   osu-play --exportPlaylist <path>  Write all track paths and exit
//!   osu-play --help                   Show help

use std::future::Future;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use osu_play_core::{
    default_config_dir, default_osu_data_dir, enumerate, export_playlist, BeatmapStore, Config,
    Error, ExportSummary, LazerDatabase, PlaybackLoop, PlaybackOptions, PlaybackReport, Player,
    StoreOptions,
};

mod event;
mod fuzzy;
mod selector;
mod tui;

/// Play or export the audio of your osu!lazer beatmaps
#[derive(Parser, Debug)]
#[command(name = "osu-play", version, about)]
struct Cli {
    /// Refresh the cached copy of the osu! database
    #[arg(short, long)]
    reload: bool,

    /// Write the playlist to this file and exit
    #[arg(long = "exportPlaylist", value_name = "PATH")]
    export_playlist: Option<PathBuf>,

    /// osu!lazer data directory [default: <data dir>/osu]
    #[arg(short = 'd', long = "osuDataDir", value_name = "DIR")]
    osu_data_dir: Option<PathBuf>,

    /// Directory for osu-play's config and cache [default: <config dir>/osu-play]
    #[arg(short = 'c', long = "configDir", value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Start over from the first track after the last one
    #[arg(short, long = "loop")]
    looping: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config_dir = cli.config_dir.clone().unwrap_or_else(default_config_dir);
    let config = Config::load(&config_dir);
    let data_dir = cli
        .osu_data_dir
        .clone()
        .or_else(|| config.osu_data_dir.clone())
        .unwrap_or_else(default_osu_data_dir);

    let options = StoreOptions {
        cache_dir: Some(config_dir),
        reload: cli.reload,
    };
    let db = match LazerDatabase::open(&data_dir, &options) {
        Ok(db) => db,
        Err(Error::OsuNotFound(path)) => {
            eprintln!("Error: no osu!lazer database found in {}", path.display());
            eprintln!("Point --osuDataDir at your osu!lazer data folder.");
            std::process::exit(1);
        }
        Err(e @ Error::UnsupportedRealm(_)) => {
            eprintln!("Error: {}", e);
            eprintln!("Point --osuDataDir at a data folder that still has client.db.");
            std::process::exit(1);
        }
        Err(e) => return Err(e).context("Failed to open osu! database"),
    };

    log_schema_version(&db);
    let result = run(&cli, &config, &db, choose_start, config.player()).await;
    let closed = db.close().context("Failed to close osu! database");
    print_outcome(&result?);
    closed
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("osu_play=info,osu_play_core=info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn log_schema_version(db: &LazerDatabase) {
    match db.schema_version() {
        Ok(Some(version)) => tracing::debug!("osu! database schema: {}", version),
        Ok(None) => tracing::debug!("osu! database has no migration history"),
        Err(e) => tracing::debug!("Could not read osu! database schema: {}", e),
    }
}

/// How a run ended. Every variant exits with status 0.
#[derive(Debug, PartialEq, Eq)]
enum RunOutcome {
    Exported { dest: PathBuf, summary: ExportSummary },
    NothingToPlay,
    NoSelection,
    Played(PlaybackReport),
}

/// Export or play the tracks of `store`.
///
/// `choose` is handed the track titles and picks the start index, or
/// `None` to cancel.
async fn run<B, S, F, P>(
    cli: &Cli,
    config: &Config,
    store: &B,
    choose: S,
    player: P,
) -> anyhow::Result<RunOutcome>
where
    B: BeatmapStore,
    S: FnOnce(Vec<String>) -> F,
    F: Future<Output = anyhow::Result<Option<usize>>>,
    P: Player,
{
    let tracks = enumerate(store).context("Failed to read beatmaps")?;
    tracing::info!("Found {} unique tracks", tracks.len());

    if let Some(dest) = &cli.export_playlist {
        let summary = export_playlist(&tracks, dest)
            .with_context(|| format!("Failed to write playlist to {}", dest.display()))?;
        return Ok(RunOutcome::Exported {
            dest: dest.clone(),
            summary,
        });
    }

    if tracks.is_empty() {
        return Ok(RunOutcome::NothingToPlay);
    }

    let titles = tracks.iter().map(|t| t.title.clone()).collect();
    let Some(start) = choose(titles).await? else {
        return Ok(RunOutcome::NoSelection);
    };

    tracing::debug!("Using player: {}", player.name());
    let playback = PlaybackLoop::new(
        player,
        PlaybackOptions {
            looping: cli.looping,
            delay: config.track_delay(),
        },
    );
    let report = playback.run(&tracks, start).await?;

    Ok(RunOutcome::Played(report))
}

fn print_outcome(outcome: &RunOutcome) {
    match outcome {
        RunOutcome::Exported { dest, summary } => {
            println!("Wrote {} tracks to {}", summary.written, dest.display());
            if summary.skipped > 0 {
                println!("Skipped {} tracks without a file location", summary.skipped);
            }
        }
        RunOutcome::NothingToPlay => println!("No beatmap audio found, nothing to play"),
        RunOutcome::NoSelection => println!("No track selected"),
        RunOutcome::Played(report) => println!(
            "Played {} tracks, skipped {}",
            report.played.len(),
            report.skipped.len()
        ),
    }
}

/// Run the selector off the async runtime, since it blocks on terminal input
async fn choose_start(titles: Vec<String>) -> anyhow::Result<Option<usize>> {
    tokio::task::spawn_blocking(move || selector::select(&titles))
        .await
        .context("Track selector stopped unexpectedly")?
}
