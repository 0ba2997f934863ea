/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Qualifier string used for application identification
///
/// This is used as part of the application's unique identifier.
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
///
/// This is used as part of the application's unique identifier.
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// This is the name of the application used in various contexts like
/// configuration file paths and application identification.
pub const APPLICATION: &str = "doc_sync";

/// Extension of the markdown files both maintenance operations act on
pub const MARKDOWN_EXTENSION: &str = "md";

/// Reserved filename of the per-directory navigation sidecar
pub const META_FILENAME: &str = "_meta.json";

/// Module-name prefixes stripped from an identifier before word splitting,
/// checked in order
pub const STRIPPED_PREFIXES: [&str; 2] = ["RMRK", "IRMRK"];

/// Identifiers starting with this prefix are well-known interface names and
/// are kept verbatim
pub const VERBATIM_PREFIX: &str = "IERC";

/// Acronym corrections applied to a derived title after word splitting,
/// in order
pub const TITLE_CORRECTIONS: [(&str, &str); 3] =
    [("E R C", "ERC"), ("Erc", "ERC"), ("U R I", "URI")];

/// Heading markers rewritten to bold text across synchronised markdown files
pub const HEADING_REWRITES: [(&str, &str); 2] = [
    ("#### Returns", "**Returns**"),
    ("#### Parameters", "**Parameters**"),
];

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read from a specific config file";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Run without writing or deleting any files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log-file command-line option
pub const LOG_FILE_HELP: &str = "Write the log to a specific file";

/// Help text for the local-logging command-line option
pub const LOCAL_LOGGING_HELP: &str = "Write the log file to the working directory";

/// Help text for the metas subcommand
pub const METAS_HELP: &str = "Generate navigation metadata for every directory in the docs tree";

/// Help text for the sync subcommand
pub const SYNC_HELP: &str = "Synchronise the package docs tree from its origin";

/// Default path for the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Default filename for the log file
pub const LOG_FILE_DEFAULT: &str = "doc_sync.log";
