//! Check command - Check whether an order can be fulfilled.

use anyhow::Result;
use clap::Args;
use std::path::Path;
use tracing::info;

use super::load_registry;

#[derive(Args)]
pub struct CheckArgs {
    /// Name of the dish to order
    #[arg(short, long)]
    dish: String,
}

pub fn execute(config: Option<&Path>, args: CheckArgs) -> Result<()> {
    let registry = load_registry(config)?;
    info!("Checking order: {}", args.dish);

    if registry.can_complete_order(&args.dish) {
        println!("✅ {} can be prepared at:", args.dish);
        for name in registry.stations_for(&args.dish) {
            println!("   - {}", name);
        }
        return Ok(());
    }

    println!("❌ No station can prepare {}", args.dish);
    for station in registry.iter() {
        if let Err(reason) = station.check_order(registry.menu(), &args.dish) {
            println!("   - {}: {}", station.name(), reason);
        }
    }

    anyhow::bail!("Order cannot be fulfilled: {}", args.dish)
}
