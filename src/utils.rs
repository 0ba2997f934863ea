use std::fs::create_dir_all;

use directories::ProjectDirs;
use shellexpand::tilde;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{generic_error, Result};

/// Expands a tilde in a path segment and keeps Windows drive roots usable
pub(crate) fn process_path(path: &str) -> String {
    let mut p: String = tilde(path).to_string();
    if p.ends_with(':') {
        p += "\\";
    };
    p
}

/// Finds the per-user project folder, creating the config directory if needed
pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir())?;
    }
    Ok(folder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_path_keeps_plain_paths() {
        assert_eq!(process_path("pages"), "pages");
        assert_eq!(process_path("evm-package"), "evm-package");
    }

    #[test]
    fn test_process_path_expands_tilde() {
        let expanded = process_path("~/docs");
        assert!(
            !expanded.starts_with('~'),
            "Tilde should be expanded to the home directory"
        );
    }

    #[test]
    fn test_process_path_appends_backslash_to_drive() {
        assert_eq!(process_path("C:"), "C:\\");
    }
}
