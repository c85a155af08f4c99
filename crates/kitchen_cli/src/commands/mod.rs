//! CLI command definitions.
//!
//! Every command except `demo` loads a kitchen layout (or the bundled demo
//! layout when none is given), runs one operation against it and prints the
//! outcome. Nothing is written back to the layout file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use kitchen_core::{KitchenConfig, StationRegistry};

pub mod check;
pub mod demo;
pub mod merge;
pub mod prepare;
pub mod show;

/// kitchen - station and inventory registry for kitchen operations
#[derive(Parser)]
#[command(name = "kitchen")]
#[command(version, about = "Kitchen station and inventory registry")]
#[command(long_about = r#"
Routes orders to kitchen stations and tracks each station's ingredient stock.

COMMANDS:
  demo     → Run the bundled bistro scenario
  show     → List stations, their dishes and stock
  check    → Check which stations can fulfil an order
  prepare  → Prepare a dish at a station, consuming stock
  merge    → Merge one station into another

LAYOUT:
  Pass --config <file> (YAML, TOML or JSON) or set KITCHEN_CONFIG.
  Without a layout the bundled demo kitchen is used.

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments (unknown station or dish)
  3 - Order cannot be fulfilled
  4 - Layout file error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Kitchen layout file
    #[arg(short, long, global = true, env = "KITCHEN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bundled bistro scenario
    Demo(demo::DemoArgs),

    /// List stations, dishes and stock
    Show(show::ShowArgs),

    /// Check whether an order can be fulfilled
    Check(check::CheckArgs),

    /// Prepare a dish at a station
    Prepare(prepare::PrepareArgs),

    /// Merge one station into another
    Merge(merge::MergeArgs),
}

/// Build a registry from the layout file, or the demo layout if none.
pub fn load_registry(config: Option<&Path>) -> Result<StationRegistry> {
    let layout = match config {
        Some(path) => {
            info!("Loading kitchen layout: {}", path.display());
            KitchenConfig::from_path(path)
                .with_context(|| format!("Failed to read layout {}", path.display()))?
        }
        None => {
            info!("No layout given, using the demo kitchen");
            KitchenConfig::demo()
        }
    };

    Ok(layout.build()?)
}

/// Print one station's dishes and stock.
pub fn print_station(registry: &StationRegistry, name: &str) -> Result<()> {
    let station = registry.find_required(name)?;

    println!("🍳 {}", station.name());
    let dishes: Vec<_> = station
        .dishes()
        .iter()
        .filter_map(|id| registry.menu().get(*id))
        .map(|d| d.name())
        .collect();
    if dishes.is_empty() {
        println!("   dishes: (none)");
    } else {
        println!("   dishes: {}", dishes.join(", "));
    }

    if station.stock().is_empty() {
        println!("   stock:  (empty)");
    }
    for entry in station.stock() {
        println!(
            "   stock:  {:<12} {:>5} @ {:.2}",
            entry.name, entry.quantity, entry.price
        );
    }

    Ok(())
}
