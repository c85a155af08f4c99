//! Demo command - Run the bundled bistro scenario.

use anyhow::Result;
use clap::Args;
use tracing::info;

use kitchen_core::KitchenConfig;

use super::print_station;

#[derive(Args)]
pub struct DemoArgs {
    /// Dish to order
    #[arg(short, long, default_value = "Cake")]
    dish: String,

    /// Station to prepare it at
    #[arg(short, long, default_value = "Station 1")]
    station: String,
}

pub fn execute(args: DemoArgs) -> Result<()> {
    info!("Running demo order: {} at {}", args.dish, args.station);

    let mut registry = KitchenConfig::demo().build()?;

    if registry.can_complete_order(&args.dish) && registry.prepare_at(&args.station, &args.dish) {
        println!("Dish Made");
    } else {
        println!("Dish Not Made");
    }

    println!();
    for name in registry.names() {
        print_station(&registry, name)?;
    }

    Ok(())
}
