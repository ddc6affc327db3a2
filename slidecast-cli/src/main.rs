mod args;
mod config_gen;
mod setup;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use slidecast_core::config::CatalogConfig;
use slidecast_core::timeline::{self, SlideTimeline};
use slidecast_core::validate;
use slidecast_core::{loader, AssetManifest, ContentCatalog};

use args::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    setup::init(&cli.config);
    log::info!(">>> Slidecast started ({:?}) <<<", cli.command());

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            log::error!("{:#}", e);
            std::process::exit(1);
        }
    }
}

/// Returns `false` when the command ran but found problems.
fn run(cli: &Cli) -> Result<bool> {
    let catalog = open_catalog(cli)?;

    match cli.command() {
        Command::List => {
            for slide in catalog.resolve_all()? {
                let lines: usize = slide.subtitles.values().map(Vec::len).sum();
                println!("{:>4}  {:<24} {} line(s)", slide.number, slide.background, lines);
            }
        }
        Command::Show { n } => print_json(catalog.get_slide(n)?)?,
        Command::Resolve { n: Some(n) } => print_json(&catalog.resolve(n)?)?,
        Command::Resolve { n: None } => print_json(&catalog.resolve_all()?)?,
        Command::Timeline { n } => print_json(&SlideTimeline::build(&catalog.resolve(n)?))?,
        Command::Manifest => print_json(&AssetManifest::collect(&catalog)?)?,
        Command::Check => return check(&catalog),
    }
    Ok(true)
}

fn open_catalog(cli: &Cli) -> Result<ContentCatalog> {
    if cli.builtin {
        log::info!("Using bundled content");
        return Ok(ContentCatalog::builtin().clone());
    }
    match &cli.content {
        Some(path) => {
            let cfg: CatalogConfig = slidecast_shared::config::get("catalog");
            let cfg = CatalogConfig { use_builtin_when_missing: false, ..cfg };
            loader::load_content(path, &cfg)
        }
        None => loader::load_configured(),
    }
}

fn check(catalog: &ContentCatalog) -> Result<bool> {
    let issues = validate::validate(catalog);
    for issue in &issues {
        println!("{}", issue);
    }

    let manifest = AssetManifest::collect(catalog);
    let missing = match &manifest {
        Ok(m) => m.missing(Path::new(".")),
        Err(e) => {
            println!("error: assets not collected: {}", e);
            Vec::new()
        }
    };
    for path in &missing {
        println!("missing: {}", path.display());
    }

    let timelines: Vec<SlideTimeline> = catalog
        .resolve_all()
        .map(|slides| slides.iter().map(SlideTimeline::build).collect())
        .unwrap_or_default();
    let errors = validate::error_count(&issues);
    println!(
        "{} slide(s), {} issue(s), {} error(s), {} missing asset(s), {} ms total",
        catalog.len(),
        issues.len(),
        errors,
        missing.len(),
        timeline::total_duration_ms(&timelines)
    );

    Ok(errors == 0 && missing.is_empty() && manifest.is_ok())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
