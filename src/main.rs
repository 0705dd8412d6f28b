// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-RecipeTree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recipe Tree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Recipe Tree CLI entrypoint.
//!
//! Works on saved backend answers: `show` prints one frame, `play` runs timed playback,
//! `frontier` replays a recorded event stream and `query` prints the request for an element.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::level_filters::LevelFilter;

use recipe_tree::config::ViewerConfig;
use recipe_tree::format::{
    parse_search_response, FrontierEvent, SearchMode, SearchRequest, SseDecoder,
};
use recipe_tree::frontier::FrontierGraph;
use recipe_tree::playback::driver::{spawn_playback, PlaybackCommand};
use recipe_tree::playback::{PlaybackState, Speed};
use recipe_tree::render::{render_frontier, render_outline, FrameSnapshot};
use recipe_tree::reveal::{reveal, Frame};
use recipe_tree::viewer::Viewer;

const STREAM_CHUNK: usize = 4096;

#[derive(Parser, Debug)]
#[command(name = "recipe-tree", version, about = "Step through element recipe trees")]
struct Cli {
    /// Viewer config JSON (layout scale, playback speed).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log to stderr; repeat for more detail (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the tree revealed at one step.
    Show(ShowArgs),
    /// Play the recipe step by step on a timer.
    Play(PlayArgs),
    /// Replay a recorded frontier event stream.
    Frontier(FrontierArgs),
    /// Print the backend query string for an element.
    Query(QueryArgs),
}

#[derive(Args, Debug)]
struct ResultArgs {
    /// Saved search response JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// HTTP status the backend answered with.
    #[arg(long, default_value_t = 200)]
    status: u16,

    /// Search mode that produced the response; selects the layout.
    #[arg(long, default_value_t = SearchMode::Bfs)]
    mode: SearchMode,

    /// Recipe to use when the response holds several (0-based).
    #[arg(long, default_value_t = 0)]
    path: usize,
}

#[derive(Args, Debug)]
struct ShowArgs {
    #[command(flatten)]
    result: ResultArgs,

    /// Step to reveal (0-based, clamped); omit for the base elements only.
    #[arg(long)]
    step: Option<usize>,

    /// Print a JSON snapshot instead of the outline.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct PlayArgs {
    #[command(flatten)]
    result: ResultArgs,

    /// Playback speed (0.5x, 1x, 2x); overrides the config file.
    #[arg(long)]
    speed: Option<Speed>,

    /// Step to start from.
    #[arg(long)]
    from: Option<usize>,
}

#[derive(Args, Debug)]
struct FrontierArgs {
    /// Recorded `text/event-stream` body.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Args, Debug)]
struct QueryArgs {
    element: String,

    #[arg(long, default_value_t = SearchMode::Bfs)]
    mode: SearchMode,

    /// Number of recipes to ask for in `multi` mode.
    #[arg(long)]
    max_recipes: Option<u32>,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(level).init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ViewerConfig> {
    match path {
        Some(path) => ViewerConfig::load(path).context("load viewer config"),
        None => Ok(ViewerConfig::default()),
    }
}

fn load_viewer(config: ViewerConfig, args: &ResultArgs) -> anyhow::Result<Viewer> {
    let body = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read search response '{}'", args.in_path.display()))?;

    let mut viewer = Viewer::new(config, args.mode);
    match parse_search_response(args.status, &body) {
        Ok(outcome) => viewer.load(outcome),
        Err(err) => viewer.fail(err.to_string()),
    }
    if let Some(message) = viewer.error() {
        eprintln!("recipe-tree: {message}");
    }

    if !viewer.paths().is_empty() && !viewer.select_path(args.path) {
        anyhow::bail!("recipe {} out of range ({} returned)", args.path, viewer.paths().len());
    }
    Ok(viewer)
}

fn print_frame(viewer: &Viewer, frame: &Frame<'_>, status: &str, json: bool) -> anyhow::Result<()> {
    let Some(path) = viewer.selected_path() else {
        return Ok(());
    };
    if json {
        let snapshot = FrameSnapshot::new(frame, path.layout(), status);
        println!("{}", serde_json::to_string_pretty(&snapshot).context("serialize frame")?);
    } else {
        println!("{status}");
        print!("{}", render_outline(frame, path.layout()));
    }
    Ok(())
}

fn show(config: ViewerConfig, args: &ShowArgs) -> anyhow::Result<()> {
    let mut viewer = load_viewer(config, &args.result)?;

    let (frame, status) = match args.step {
        Some(step) => {
            viewer.playback_mut().seek(step);
            (viewer.frame(), viewer.status_line())
        }
        None => (viewer.base_frame(), "Base elements".to_owned()),
    };
    match frame {
        Some(frame) => print_frame(&viewer, &frame, &status, args.json),
        None => {
            println!("{}", viewer.status_line());
            Ok(())
        }
    }
}

fn play(config: ViewerConfig, args: &PlayArgs) -> anyhow::Result<()> {
    let mut viewer = load_viewer(config, &args.result)?;
    if let Some(speed) = args.speed {
        viewer.playback_mut().set_speed(speed);
    }
    if let Some(step) = args.from {
        viewer.playback_mut().seek(step);
    }

    let Some(tree) = viewer.selected_path().map(|path| path.tree()) else {
        println!("{}", viewer.status_line());
        return Ok(());
    };
    if let Some(frame) = viewer.frame() {
        print_frame(&viewer, &frame, &viewer.status_line(), false)?;
    }
    if viewer.playback().is_at_end() {
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    runtime.block_on(async {
        let handle = spawn_playback(viewer.playback().clone());
        let mut snapshots = handle.subscribe();
        let mut shown = viewer.playback().cursor();

        handle.send(PlaybackCommand::Play).await?;
        while snapshots.changed().await.is_ok() {
            let snapshot = *snapshots.borrow_and_update();
            if let Some(cursor) = snapshot.cursor.filter(|cursor| Some(*cursor) != shown) {
                shown = Some(cursor);
                print_frame(&viewer, &reveal(tree, cursor), &snapshot.status_line(), false)?;
            }
            if snapshot.state == PlaybackState::Stopped {
                break;
            }
        }

        handle.shutdown().await;
        Ok::<(), anyhow::Error>(())
    })
}

fn frontier(args: &FrontierArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.in_path)
        .with_context(|| format!("read event stream '{}'", args.in_path.display()))?;

    let mut decoder = SseDecoder::new();
    let mut graph = FrontierGraph::new();
    for chunk in bytes.chunks(STREAM_CHUNK) {
        for event in decoder.push(chunk) {
            match FrontierEvent::from_sse(&event) {
                Ok(Some(event)) => {
                    graph.apply(event);
                }
                Ok(None) => {}
                Err(err) => tracing::warn!(%err, "skipping malformed frontier event"),
            }
        }
    }

    print!("{}", render_frontier(&graph));
    Ok(())
}

fn query(args: &QueryArgs) {
    let mut request = SearchRequest::new(&args.element, args.mode);
    if let Some(max) = args.max_recipes {
        request = request.with_max_recipes(max);
    }
    println!("{}", request.query_string());
}

fn run(cli: Cli) -> anyhow::Result<()> {
    init_tracing(cli.verbose);
    let config = load_config(cli.config.as_deref())?;

    match &cli.cmd {
        Command::Show(args) => show(config, args),
        Command::Play(args) => play(config, args),
        Command::Frontier(args) => frontier(args),
        Command::Query(args) => {
            query(args);
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("recipe-tree: {err:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};
    use recipe_tree::format::SearchMode;
    use recipe_tree::playback::Speed;

    #[test]
    fn parses_show_with_defaults() {
        let cli = Cli::try_parse_from(["recipe-tree", "show", "--in", "brick.json"]).unwrap();
        let Command::Show(args) = cli.cmd else {
            panic!("expected show");
        };
        assert_eq!(args.result.status, 200);
        assert_eq!(args.result.mode, SearchMode::Bfs);
        assert_eq!(args.result.path, 0);
        assert_eq!(args.step, None);
        assert!(!args.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parses_play_flags_and_global_options() {
        let cli = Cli::try_parse_from([
            "recipe-tree",
            "play",
            "--in",
            "brick.json",
            "--mode",
            "dfs",
            "--speed",
            "0.5x",
            "--from",
            "2",
            "-vv",
            "--config",
            "viewer.json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("viewer.json")));
        let Command::Play(args) = cli.cmd else {
            panic!("expected play");
        };
        assert_eq!(args.result.mode, SearchMode::Dfs);
        assert_eq!(args.speed, Some(Speed::Half));
        assert_eq!(args.from, Some(2));
    }

    #[test]
    fn rejects_unknown_modes_and_speeds() {
        let bad_mode = ["recipe-tree", "show", "--in", "x", "--mode", "astar"];
        assert!(Cli::try_parse_from(bad_mode).is_err());
        let bad_speed = ["recipe-tree", "play", "--in", "x", "--speed", "3x"];
        assert!(Cli::try_parse_from(bad_speed).is_err());
    }

    #[test]
    fn parses_query_arguments() {
        let cli = Cli::try_parse_from([
            "recipe-tree",
            "query",
            "Brick",
            "--mode",
            "multi",
            "--max-recipes",
            "3",
        ])
        .unwrap();
        let Command::Query(args) = cli.cmd else {
            panic!("expected query");
        };
        assert_eq!(args.element, "Brick");
        assert_eq!(args.mode, SearchMode::Multi);
        assert_eq!(args.max_recipes, Some(3));
    }
}
