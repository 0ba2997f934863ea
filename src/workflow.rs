//! Workflow orchestration
//!
//! This module dispatches the selected maintenance operation based on the
//! parsed command-line arguments and the loaded configuration.

use std::path::PathBuf;

use anyhow::Result;
use clap::ArgMatches;
use colored::Colorize;
use log::info;

use crate::config::{resolve_config_path, Config};
use crate::errors::generic_error;
use crate::logging::format_message;
use crate::metas::generate_metas;
use crate::sync::synchronize_tree;

/// Loads the configuration and runs the selected maintenance operation
///
/// # Arguments
/// * `argument_matches` - The parsed command-line arguments
///
/// # Returns
/// * `Result<()>` - Ok when the operation completes, or the first error
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or the operation
/// fails; there is no retry and no partial recovery.
pub fn perform_maintenance_based_on_configuration(argument_matches: ArgMatches) -> Result<()> {
    let config_argument = argument_matches
        .get_one::<String>("config")
        .ok_or_else(|| generic_error("Configuration file option not found"))?;
    let configuration_file_path = resolve_config_path(PathBuf::from(config_argument))?;

    let configuration = Config::load(&configuration_file_path)?;
    let dry_run = argument_matches.get_flag("dry");

    match argument_matches.subcommand() {
        Some(("metas", _)) => run_metas(&configuration, dry_run),
        Some(("sync", _)) => run_sync(&configuration, dry_run),
        _ => Err(generic_error("No maintenance operation selected").into()),
    }
}

/// Runs the metadata generator and logs a summary
fn run_metas(configuration: &Config, dry_run: bool) -> Result<()> {
    let processed = generate_metas(&configuration.metas.root, dry_run)?;

    let summary = format!("Generated navigation metadata for {processed} directories");
    info!("{}", format_message(&summary, &summary.green().to_string()));

    Ok(())
}

/// Runs the tree synchroniser and logs a summary
fn run_sync(configuration: &Config, dry_run: bool) -> Result<()> {
    let report = synchronize_tree(&configuration.sync, dry_run)?;

    let summary = format!(
        "Synchronised {} subtrees, removed {} redundant paths, rewrote headings in {} files",
        report.copied, report.removed, report.rewritten
    );
    info!("{}", format_message(&summary, &summary.green().to_string()));

    Ok(())
}
