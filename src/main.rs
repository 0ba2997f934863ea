use anyhow::Result;
use human_panic::setup_panic;

use doc_sync::logging::init_logger;
use doc_sync::{get_configuration_file_option, get_log_file, get_verbosity};
use doc_sync::perform_maintenance_based_on_configuration;

fn main() -> Result<()> {
    setup_panic!();

    let argument_matches = get_configuration_file_option()?;

    let verbosity = get_verbosity(&argument_matches);
    let log_file = get_log_file(&argument_matches)?;
    init_logger(verbosity, &log_file)?;

    perform_maintenance_based_on_configuration(argument_matches)
}
