pub use cli::*;
pub use errors::*;
pub use workflow::*;

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod metas;
pub mod sync;
pub mod title;
mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::cli::{get_configuration_file_option, get_log_file, get_verbosity};
    pub use crate::config::{resolve_config_path, Config};
    pub use crate::errors::{
        config_parsing_error, directory_not_found_error, file_operation_error, generic_error,
        glob_pattern_error, invalid_filename_error, path_operation_error, serialization_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{format_message, init_default_logger, init_logger, LogLevel};
    pub use crate::metas::generate_metas;
    pub use crate::sync::{synchronize_tree, SyncReport};
    pub use crate::title::derive_title;
    pub use crate::workflow::perform_maintenance_based_on_configuration;
}
