//! Merge command - Merge one station into another.

use anyhow::{Context, Result};
use clap::Args;
use std::path::Path;
use tracing::info;

use super::{load_registry, print_station};

#[derive(Args)]
pub struct MergeArgs {
    /// Station that receives the dishes and stock
    #[arg(long)]
    into: String,

    /// Station that is merged and removed
    #[arg(long)]
    from: String,

    /// Move the merged station to the front afterwards
    #[arg(long)]
    front: bool,
}

pub fn execute(config: Option<&Path>, args: MergeArgs) -> Result<()> {
    let mut registry = load_registry(config)?;
    info!("Merging {} into {}", args.from, args.into);

    registry
        .try_merge(&args.into, &args.from)
        .with_context(|| format!("Failed to merge {} into {}", args.from, args.into))?;

    if args.front {
        registry.try_move_to_front(&args.into)?;
    }

    println!("✅ Merged {} into {}", args.from, args.into);
    println!("   order: {}", registry.names().join(" → "));
    println!();
    print_station(&registry, &args.into)?;

    Ok(())
}
