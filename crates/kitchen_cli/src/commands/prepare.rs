//! Prepare command - Prepare a dish at a station, consuming stock.

use anyhow::{Context, Result};
use clap::Args;
use std::path::Path;
use tracing::{info, warn};

use super::{load_registry, print_station};

#[derive(Args)]
pub struct PrepareArgs {
    /// Station to prepare at
    #[arg(short, long)]
    station: String,

    /// Dish to prepare
    #[arg(short, long)]
    dish: String,

    /// Number of servings to prepare
    #[arg(short, long, default_value_t = 1)]
    times: u32,
}

pub fn execute(config: Option<&Path>, args: PrepareArgs) -> Result<()> {
    let mut registry = load_registry(config)?;
    info!("Preparing {} x{} at {}", args.dish, args.times, args.station);

    let mut made = 0;
    for serving in 1..=args.times {
        match registry.try_prepare_at(&args.station, &args.dish) {
            Ok(()) => {
                made += 1;
                println!("✅ Prepared {} ({}/{})", args.dish, serving, args.times);
            }
            Err(e) if made == 0 => {
                return Err(e).with_context(|| {
                    format!("Failed to prepare {} at {}", args.dish, args.station)
                });
            }
            Err(e) => {
                warn!("Stopped after {} servings: {}", made, e);
                println!("❌ Stopped after {} of {}: {}", made, args.times, e);
                break;
            }
        }
    }

    println!();
    print_station(&registry, &args.station)?;

    Ok(())
}
