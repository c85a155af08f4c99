//! Show command - List stations, dishes and stock.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::Path;

use kitchen_core::{Ingredient, StationRegistry};

use super::{load_registry, print_station};

#[derive(Args)]
pub struct ShowArgs {
    /// Only show this station
    #[arg(short, long)]
    station: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

/// Station as printed by `show --json`, with dishes resolved to names.
#[derive(Debug, Serialize)]
struct StationView<'a> {
    name: &'a str,
    dishes: Vec<&'a str>,
    stock: &'a [Ingredient],
}

fn views<'a>(registry: &'a StationRegistry, only: Option<&str>) -> Vec<StationView<'a>> {
    registry
        .iter()
        .filter(|s| only.map_or(true, |name| s.name() == name))
        .map(|s| StationView {
            name: s.name(),
            dishes: s
                .dishes()
                .iter()
                .filter_map(|id| registry.menu().get(*id))
                .map(|d| d.name())
                .collect(),
            stock: s.stock(),
        })
        .collect()
}

pub fn execute(config: Option<&Path>, args: ShowArgs) -> Result<()> {
    let registry = load_registry(config)?;

    if let Some(name) = &args.station {
        registry.find_required(name)?;
    }

    if args.json {
        let stations = views(&registry, args.station.as_deref());
        println!("{}", serde_json::to_string_pretty(&stations)?);
        return Ok(());
    }

    match &args.station {
        Some(name) => print_station(&registry, name)?,
        None => {
            println!("📋 Menu");
            for dish in registry.menu().iter() {
                println!(
                    "   {:<16} {:<10} {:>3} min  {:>6.2}",
                    dish.name(),
                    dish.cuisine,
                    dish.prep_time,
                    dish.price
                );
            }
            println!();

            if registry.is_empty() {
                println!("No stations configured");
            }
            for name in registry.names() {
                print_station(&registry, name)?;
            }
        }
    }

    Ok(())
}
