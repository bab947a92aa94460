//! Deletion of cleanable directories.

use crate::scanner::{cleanable_children, navigable_children};
use crate::session::SessionStats;

use colored::Colorize;
use humansize::{format_size, BINARY};
use std::fs;
use std::path::Path;

/// Remove a directory tree.
///
/// Failure (file in use, permission denied, a race with another process)
/// is reported to the user and absorbed; the caller only sees success or
/// failure and the session carries on with the remaining entries.
pub fn delete_dir(path: &Path) -> bool {
    match fs::remove_dir_all(path) {
        Ok(()) => true,
        Err(err) => {
            eprintln!(
                "   {} {}: {}",
                "Error deleting".red(),
                path.display(),
                err
            );
            false
        }
    }
}

/// Delete every cleanable entry at and below `dir`, depth first.
///
/// Unlike the preview scan this recursion has no depth cap: a wipe is
/// exhaustive. Prints one line per deleted entry, records each deletion
/// in `stats`, and returns the bytes freed from this subtree.
pub fn wipe_tree(dir: &Path, stats: &mut SessionStats) -> u64 {
    let mut freed = 0u64;

    for entry in cleanable_children(dir) {
        if delete_dir(&entry.path) {
            let shown = entry
                .path
                .strip_prefix(dir.parent().unwrap_or(dir))
                .unwrap_or(&entry.path);
            println!(
                "   {} {} ({})",
                "Deleted".green(),
                shown.display(),
                format_size(entry.size, BINARY)
            );
            freed += entry.size;
            stats.record_deletion(entry.size);
        }
    }

    for subdir in navigable_children(dir) {
        freed += wipe_tree(&subdir, stats);
    }

    freed
}
