//! Navigation metadata generation
//!
//! This module walks a documentation tree and writes one `_meta.json`
//! sidecar per directory, mapping every immediate child to its derived
//! title.

use std::collections::BTreeMap;
use std::fs::{read_dir, write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::constants::{MARKDOWN_EXTENSION, META_FILENAME};
use crate::errors::{
    directory_not_found_error, file_operation_error, invalid_filename_error, serialization_error,
    Result,
};
use crate::title::derive_title;

/// Generates a navigation sidecar for every directory under the root
///
/// Every directory in the tree, the root included, gets exactly one
/// `_meta.json` holding the identifier-to-title mapping of its immediate
/// children. An existing sidecar is fully overwritten; there is no merge
/// with prior content and no incremental mode.
///
/// # Arguments
/// * `root` - The root of the documentation tree
/// * `dry_run` - Whether to only log what would be written
///
/// # Returns
/// * `Result<usize>` - The number of directories processed, or an error
///
/// # Errors
/// Returns an error if the root is not a directory or any read or write
/// fails; the run aborts on the first failure.
pub fn generate_metas(root: &Path, dry_run: bool) -> Result<usize> {
    if !root.is_dir() {
        return Err(directory_not_found_error(root.to_path_buf()));
    }

    let mut processed = 0;
    process_directory(root, dry_run, &mut processed)?;
    Ok(processed)
}

/// Writes the sidecar for one directory, then recurses into its children
fn process_directory(directory: &Path, dry_run: bool, processed: &mut usize) -> Result<()> {
    let mut file_identifiers: Vec<String> = Vec::new();
    let mut subdirectories: Vec<PathBuf> = Vec::new();

    let entries =
        read_dir(directory).map_err(|e| file_operation_error(e, directory.to_path_buf(), "read"))?;
    for entry in entries {
        let path = entry
            .map_err(|e| file_operation_error(e, directory.to_path_buf(), "read"))?
            .path();
        if path.is_dir() {
            subdirectories.push(path);
        } else if is_markdown_file(&path) {
            file_identifiers.push(file_identifier(&path)?);
        }
    }

    // Files and directories share one namespace; directories are inserted
    // last, so a colliding directory name wins.
    let mut mapping: BTreeMap<String, String> = BTreeMap::new();
    for identifier in &file_identifiers {
        mapping.insert(identifier.clone(), derive_title(identifier));
    }
    for subdirectory in &subdirectories {
        let identifier = directory_identifier(subdirectory)?;
        mapping.insert(identifier.clone(), derive_title(&identifier));
    }

    write_sidecar(directory, &mapping, dry_run)?;
    *processed += 1;

    for subdirectory in &subdirectories {
        process_directory(subdirectory, dry_run, processed)?;
    }

    Ok(())
}

/// Serialises a mapping and writes it to the directory's sidecar file
fn write_sidecar(
    directory: &Path,
    mapping: &BTreeMap<String, String>,
    dry_run: bool,
) -> Result<()> {
    let sidecar_path = directory.join(META_FILENAME);
    let serialized = serde_json::to_string_pretty(mapping)
        .map_err(|e| serialization_error(e, sidecar_path.clone()))?;

    if dry_run {
        debug!("Simulating sidecar write: {}", sidecar_path.display());
        info!("Would create {} in {}", META_FILENAME, directory.display());
        return Ok(());
    }

    write(&sidecar_path, serialized)
        .map_err(|e| file_operation_error(e, sidecar_path.clone(), "write"))?;
    info!("Created {} in {}", META_FILENAME, directory.display());

    Ok(())
}

/// Checks whether a path is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(MARKDOWN_EXTENSION)
}

/// Gets a file's identifier: its base name with the markdown extension stripped
fn file_identifier(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.to_string())
        .ok_or_else(|| invalid_filename_error(path.to_path_buf()))
}

/// Gets a directory's identifier: its name, used directly
fn directory_identifier(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_string())
        .ok_or_else(|| invalid_filename_error(path.to_path_buf()))
}
