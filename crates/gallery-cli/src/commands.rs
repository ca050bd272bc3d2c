use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use gallery_cli::session::{describe_view, run_session};
use gallery_cli::summary::{books_table, groups_table, match_table};
use gallery_content::{ContentSource, JsonFileSource, StaticSource};
use gallery_core::{Gallery, GalleryConfig, GalleryContext, match_episode};
use gallery_model::{Episode, PlaylistItem};

use crate::cli::{BrowseArgs, Cli, ContentArgs, MatchArgs};

/// Loads `gallery.toml` (or defaults) and applies command-line overrides.
fn load_config(cli: &Cli) -> Result<GalleryConfig> {
    let mut config = GalleryConfig::load_or_default(&cli.config)
        .with_context(|| format!("load configuration {}", cli.config.display()))?;
    if let Some(locale) = &cli.locale {
        config.locale.clone_from(locale);
    }
    Ok(config)
}

fn build_context(cli: &Cli, content: Box<dyn ContentSource>) -> Result<GalleryContext> {
    let config = load_config(cli)?;
    GalleryContext::from_config(config, content).context("build gallery context")
}

pub fn run_books(cli: &Cli) -> Result<()> {
    let context = build_context(cli, Box::new(StaticSource::new(Vec::new())))?;
    println!("{}", books_table(context.order(), context.translator()));
    Ok(())
}

pub fn run_groups(cli: &Cli, args: &ContentArgs) -> Result<()> {
    let context = build_context(cli, Box::new(JsonFileSource::new(&args.content)))?;
    let records = context
        .content()
        .fetch_artworks()
        .with_context(|| format!("load artworks from {}", args.content.display()))?;
    let gallery = Gallery::arrange(records, context.order());
    println!(
        "{} artworks in {} books",
        gallery.artwork_count(),
        gallery.groups().len()
    );
    println!("{}", groups_table(&gallery, context.translator()));
    Ok(())
}

pub fn run_browse(cli: &Cli, args: &BrowseArgs) -> Result<()> {
    let span = info_span!("browse", content = %args.content.display());
    let _guard = span.enter();
    let context = build_context(cli, Box::new(JsonFileSource::new(&args.content)))?;
    let report = run_session(&context, &args.query, args.member, &args.events);
    debug!(steps = report.steps.len(), writes = report.history.len(), "session finished");

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("serialize session report")?;
        println!("{json}");
        return Ok(());
    }

    println!("== mount {}", report.initial_url);
    print!("{}", describe_view(&report.initial));
    for step in &report.steps {
        let outcome = if step.changed { "changed" } else { "unchanged" };
        println!("== {} ({outcome}) {}", step.event, step.url);
        print!("{}", describe_view(&step.view));
    }
    Ok(())
}

pub fn run_match(args: &MatchArgs) -> Result<()> {
    let episodes = load_episodes(&args.episodes)?;
    let item = PlaylistItem {
        video_id: String::new(),
        title: args.title.clone(),
    };
    let matched = match_episode(&item, &episodes);
    match matched {
        Some(episode) => println!("'{}' matches episode {}", args.title, episode.id),
        None => println!("'{}' matches no episode", args.title),
    }
    println!("{}", match_table(&args.title, &episodes, matched));
    Ok(())
}

fn load_episodes(path: &Path) -> Result<Vec<Episode>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read episodes {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse episodes {}", path.display()))
}
