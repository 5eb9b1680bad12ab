// src/cli/handlers.rs
use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::args::{Cli, Commands, ExportFormat, Preset};
use crate::catalog;
use crate::config::Config;
use crate::engine::FeedEngine;
use crate::error::FeedError;
use crate::exit::FypExit;
use crate::reporting;
use crate::types::Interaction;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if loading files or the command itself fails.
pub fn execute(cli: &Cli) -> Result<FypExit> {
    let config = load_config(cli)?;
    if let Commands::Config = cli.command {
        print!("{}", config.to_toml_string()?);
        return Ok(FypExit::Success);
    }

    let mut engine = build_engine(cli, config)?;
    match &cli.command {
        Commands::Rank { top, json } => handle_rank(&mut engine, &cli.user, *top, *json),
        Commands::Interact {
            video,
            like,
            comment,
            share,
            save,
            watch,
            top,
        } => {
            let event = Interaction {
                like: *like,
                comment: *comment,
                share: *share,
                save: *save,
                watch: *watch,
            };
            handle_interact(&mut engine, &cli.user, video, &event, *top)
        }
        Commands::Next { seed } => handle_next(&mut engine, &cli.user, *seed),
        Commands::Export { format } => handle_export(&mut engine, *format),
        Commands::Config => Ok(FypExit::Success),
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load().context("failed to load fypgraph.toml")?,
    };
    match cli.profile {
        Some(Preset::GenreAware) => {
            let preset = Config::genre_aware();
            config.interaction = preset.interaction;
            config.ranker.genre_boost = preset.ranker.genre_boost;
        }
        Some(Preset::Simple) => {
            let preset = Config::simple();
            config.interaction = preset.interaction;
            config.ranker.genre_boost = preset.ranker.genre_boost;
        }
        None => {}
    }
    Ok(config)
}

fn build_engine(cli: &Cli, config: Config) -> Result<FeedEngine> {
    let path = cli
        .catalog
        .as_deref()
        .ok_or_else(|| anyhow!("--catalog <FILE> is required for this command"))?;
    let records = catalog::load_catalog(path)
        .with_context(|| format!("failed to load catalog {}", path.display()))?;

    let mut engine = FeedEngine::new(config)?;
    engine.ingest(records);
    engine.add_user(&cli.user);

    if let Some(events_path) = &cli.events {
        let events = catalog::load_events(events_path)
            .with_context(|| format!("failed to load events {}", events_path.display()))?;
        replay(&mut engine, &events);
    }
    Ok(engine)
}

fn replay(engine: &mut FeedEngine, events: &[catalog::EventRecord]) {
    for event in events {
        if let Err(e) = engine.record_interaction(&event.user, &event.video, &event.interaction) {
            eprintln!("{} {e}", "skipped:".yellow());
        }
    }
}

fn handle_rank(engine: &mut FeedEngine, user: &str, top: Option<usize>, json: bool) -> Result<FypExit> {
    let top_k = top.unwrap_or(engine.config().ranker.default_top_k);
    let ranked = match engine.for_your_page(user, top_k) {
        Ok(ranked) => ranked,
        Err(e) => return Ok(report_feed_error(&e)),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        println!("{}", "For Your Page".bold());
        reporting::print_ranking(engine.graph(), &ranked);
    }
    Ok(FypExit::Success)
}

fn handle_interact(
    engine: &mut FeedEngine,
    user: &str,
    video: &str,
    event: &Interaction,
    top: Option<usize>,
) -> Result<FypExit> {
    match engine.record_interaction(user, video, event) {
        Ok(total) => {
            let title = engine
                .graph()
                .video(video)
                .and_then(|v| v.title().map(str::to_string))
                .unwrap_or_else(|| video.to_string());
            println!("Interaction with {title} recorded (edge weight {total:.2})");
        }
        Err(e) => return Ok(report_feed_error(&e)),
    }
    handle_rank(engine, user, top, false)
}

fn handle_next(engine: &mut FeedEngine, user: &str, seed: Option<u64>) -> Result<FypExit> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let Some(id) = engine.next_video(user, &mut rng) else {
        println!("{}", "Catalog is empty.".yellow());
        return Ok(FypExit::Success);
    };
    if let Some(video) = engine.graph().video(&id) {
        reporting::print_video(video);
    }
    Ok(FypExit::Success)
}

fn handle_export(engine: &mut FeedEngine, format: ExportFormat) -> Result<FypExit> {
    let report = engine.recalculate_scores();
    eprintln!("{}", reporting::format_report(&report));

    let snapshot = engine.snapshot();
    match format {
        ExportFormat::Json => println!("{}", snapshot.to_json()?),
        ExportFormat::Dot => print!("{}", snapshot.to_dot()),
    }
    Ok(FypExit::Success)
}

fn report_feed_error(e: &FeedError) -> FypExit {
    eprintln!("{} {e}", "error:".red().bold());
    FypExit::from(e)
}
