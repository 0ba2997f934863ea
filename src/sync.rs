//! Tree synchronisation
//!
//! This module copies the configured subtrees from the external origin into
//! the destination tree, deletes the paths made redundant by overlapping
//! copy targets, and rewrites heading markers across the resulting markdown
//! files.

use std::fs::{create_dir_all, read_to_string, remove_dir_all, write};
use std::path::Path;

use fs_extra::dir::{copy, CopyOptions};
use glob::glob;
use log::{debug, info};

use crate::config::SyncConfig;
use crate::constants::{HEADING_REWRITES, MARKDOWN_EXTENSION};
use crate::errors::{
    directory_not_found_error, file_operation_error, glob_pattern_error, invalid_filename_error,
    Result,
};

/// Summary of one synchronisation run
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// Number of subtree remappings applied
    pub copied: usize,
    /// Number of removal-list paths deleted
    pub removed: usize,
    /// Number of markdown files whose headings were rewritten
    pub rewritten: usize,
}

/// Synchronises the destination tree from the origin
///
/// The three passes run strictly in order: every remapping is copied first,
/// then every removal-list path is deleted, then the heading markers are
/// rewritten across all markdown files under the destination root. A
/// failure aborts the run with no rollback of already-applied changes;
/// rerunning from scratch is the supported recovery path.
///
/// # Arguments
/// * `config` - The synchronisation configuration
/// * `dry_run` - Whether to only log what would be done
///
/// # Returns
/// * `Result<SyncReport>` - A summary of the run, or an error
///
/// # Errors
/// Returns an error if any copy, delete, read, or write fails, or if a
/// removal-list path does not exist.
pub fn synchronize_tree(config: &SyncConfig, dry_run: bool) -> Result<SyncReport> {
    if !dry_run {
        create_dir_all(&config.destination)
            .map_err(|e| file_operation_error(e, config.destination.clone(), "create directory"))?;
    }

    let copied = copy_mapped_subtrees(config, dry_run)?;
    let removed = remove_redundant_paths(config, dry_run)?;
    let rewritten = rewrite_headings(&config.destination, dry_run)?;

    Ok(SyncReport {
        copied,
        removed,
        rewritten,
    })
}

/// Copies every remapped subtree into the destination, in table order
///
/// Copies merge with existing content: colliding files are overwritten,
/// destination-only files are left untouched.
fn copy_mapped_subtrees(config: &SyncConfig, dry_run: bool) -> Result<usize> {
    let options = CopyOptions::new().overwrite(true).content_only(true);
    let mut copied = 0;

    for remap in &config.mappings {
        let source = config.origin.join(&remap.from);
        let target = config.destination.join(&remap.to);

        if dry_run {
            info!(
                "Would copy {} -> {}",
                source.display(),
                target.display()
            );
            copied += 1;
            continue;
        }

        create_dir_all(&target)
            .map_err(|e| file_operation_error(e, target.clone(), "create directory"))?;
        copy(&source, &target, &options).map_err(|e| {
            file_operation_error(std::io::Error::other(e), source.clone(), "copy")
        })?;
        debug!("Copied {} -> {}", source.display(), target.display());
        copied += 1;
    }

    Ok(copied)
}

/// Deletes every removal-list path under the destination, in list order
///
/// Every removal target is expected to exist, having been created by the
/// preceding copy pass; a missing target is a hard error. A rerun after a
/// completed sync therefore stops here.
fn remove_redundant_paths(config: &SyncConfig, dry_run: bool) -> Result<usize> {
    let mut removed = 0;

    for path in &config.remove {
        let target = config.destination.join(path);

        if dry_run {
            info!("Would remove {}", target.display());
            removed += 1;
            continue;
        }

        if !target.exists() {
            return Err(directory_not_found_error(target));
        }
        remove_dir_all(&target)
            .map_err(|e| file_operation_error(e, target.clone(), "remove"))?;
        info!("Removed {}", target.display());
        removed += 1;
    }

    Ok(removed)
}

/// Rewrites heading markers across every markdown file under the root
///
/// The substitution is textual: every occurrence of a heading marker is
/// replaced regardless of nesting or code-block context.
fn rewrite_headings(destination: &Path, dry_run: bool) -> Result<usize> {
    let pattern_path = destination.join("**").join(format!("*.{MARKDOWN_EXTENSION}"));
    let pattern = pattern_path
        .to_str()
        .ok_or_else(|| invalid_filename_error(pattern_path.clone()))?;

    let mut rewritten = 0;
    for entry in glob(pattern).map_err(|e| glob_pattern_error(e, pattern))? {
        let file = entry.map_err(|e| {
            file_operation_error(e.into_error(), destination.to_path_buf(), "access")
        })?;

        let content =
            read_to_string(&file).map_err(|e| file_operation_error(e, file.clone(), "read"))?;
        let replaced = HEADING_REWRITES
            .iter()
            .fold(content.clone(), |current, (from, to)| current.replace(from, to));

        if replaced == content {
            continue;
        }

        if dry_run {
            debug!("Would rewrite headings in {}", file.display());
        } else {
            write(&file, replaced)
                .map_err(|e| file_operation_error(e, file.clone(), "write"))?;
            debug!("Rewrote headings in {}", file.display());
        }
        rewritten += 1;
    }

    Ok(rewritten)
}
