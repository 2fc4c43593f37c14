//! placeholder-forge CLI
//!
//! Writes placeholder textures and item descriptors into a resource pack.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use placeholder_forge::{AssetCatalog, Generator, ResourcePackDir, Theme, layout_for};

/// Generate placeholder textures, GUI backgrounds and item descriptors.
#[derive(Parser)]
#[command(name = "placeholder-forge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Resource pack root; files go under <ROOT>/assets/<namespace>/
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Catalog JSON to use instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Style for GUI screens (final, placeholder)
    #[arg(long, default_value = "final", global = true)]
    theme: Theme,

    /// Log more (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Item and block icons
    Textures,
    /// GUI screen backgrounds
    Gui,
    /// Item descriptors (existing files are kept)
    Items,
    /// Everything
    All,
    /// Print a screen's layout descriptor as JSON
    Layout {
        /// Screen name, e.g. spawn_egg_mob_spawner
        screen: String,
    },
    /// Print the effective catalog as JSON
    Catalog,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let catalog = load_catalog(cli.catalog.as_deref())?;
    let generator = Generator::new(&catalog, cli.theme);
    let mut pack = ResourcePackDir::new(&cli.root, &catalog.namespace);

    match cli.command {
        Commands::Textures => {
            generator.generate_icons(&mut pack)?;
        }
        Commands::Gui => {
            generator.generate_panels(&mut pack)?;
        }
        Commands::Items => {
            generator.generate_descriptors(&mut pack)?;
        }
        Commands::All => {
            let report = generator.run(&mut pack)?;
            info!(
                textures = report.textures.len(),
                descriptors = report.descriptors.created.len(),
                skipped = report.descriptors.skipped.len(),
                root = %pack.root().display(),
                "done"
            );
        }
        Commands::Layout { screen } => {
            let layout = layout_for(&screen)?;
            println!("{}", layout.to_json_pretty()?);
        }
        Commands::Catalog => {
            println!("{}", catalog.to_json_pretty()?);
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<AssetCatalog> {
    let Some(path) = path else {
        let catalog = AssetCatalog::builtin();
        catalog.validate()?;
        return Ok(catalog);
    };

    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    AssetCatalog::from_json(&json).with_context(|| format!("invalid catalog {}", path.display()))
}
