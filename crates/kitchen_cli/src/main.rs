//! Kitchen CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments (unknown station or dish)
//! - 3: Order cannot be fulfilled
//! - 4: Layout file error

use std::process::ExitCode;

use clap::Parser;
use kitchen_core::KitchenError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const ORDER_UNFULFILLED: u8 = 3;
    pub const LAYOUT_ERROR: u8 = 4;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "kitchen=debug,kitchen_core=debug,warn"
    } else if cli.quiet {
        "warn"
    } else {
        "kitchen=info,warn"
    };

    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let result = match cli.command {
        Commands::Demo(args) => commands::demo::execute(args),
        Commands::Show(args) => commands::show::execute(cli.config.as_deref(), args),
        Commands::Check(args) => commands::check::execute(cli.config.as_deref(), args),
        Commands::Prepare(args) => commands::prepare::execute(cli.config.as_deref(), args),
        Commands::Merge(args) => commands::merge::execute(cli.config.as_deref(), args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    if let Some(err) = e.downcast_ref::<KitchenError>() {
        return match err {
            err if err.is_stock_shortage() => ExitCodes::ORDER_UNFULFILLED,
            KitchenError::StationNotFound(_)
            | KitchenError::UnknownDish(_)
            | KitchenError::DishNotAssigned { .. }
            | KitchenError::SelfMerge(_) => ExitCodes::INVALID_ARGS,
            KitchenError::UnsupportedFormat(_)
            | KitchenError::Io(_)
            | KitchenError::Yaml(_)
            | KitchenError::Json(_)
            | KitchenError::Toml(_)
            | KitchenError::DuplicateStation(_)
            | KitchenError::DuplicateDish { .. } => ExitCodes::LAYOUT_ERROR,
            _ => ExitCodes::GENERAL_ERROR,
        };
    }

    let msg = e.to_string().to_lowercase();
    if msg.contains("cannot be fulfilled") {
        ExitCodes::ORDER_UNFULFILLED
    } else if msg.contains("not found") {
        ExitCodes::INVALID_ARGS
    } else {
        ExitCodes::GENERAL_ERROR
    }
}
