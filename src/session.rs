//! The interactive navigation session.
//!
//! One call to [`navigate`] visits one directory node and loops there
//! until the user hands control back to the parent level. Descending is
//! a nested `navigate` call, so the walk's state lives on the call
//! stack; the only state threaded through explicitly is the running
//! [`SessionStats`] and each node's position among its siblings.

use crate::remove::{delete_dir, wipe_tree};
use crate::scanner::{
    cleanable_children, navigable_children, scan_recursive, CleanableEntry, RecursiveScan,
    SCAN_MAX_DEPTH,
};

use colored::Colorize;
use humansize::{format_size, BINARY};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Totals accumulated across one session, reported once at the end.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub freed_bytes: u64,
    pub deleted_dirs: u64,
}

impl SessionStats {
    pub fn record_deletion(&mut self, bytes: u64) {
        self.freed_bytes += bytes;
        self.deleted_dirs += 1;
    }
}

/// How a node's loop handed control back to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSignal {
    /// Done here; the parent moves on to its next child.
    Skip,
    /// Re-display the directory the user ascended from.
    Up,
    /// Step to the next sibling at the parent's level.
    Next,
    /// Step to the previous sibling.
    Prev,
}

/// Position of the current directory within its parent's sorted list of
/// navigable children. Lets the node offer next/previous without
/// rescanning the parent.
#[derive(Debug, Clone, Copy)]
pub struct SiblingPos {
    pub index: usize,
    pub count: usize,
}

impl SiblingPos {
    fn has_next(self) -> bool {
        self.index + 1 < self.count
    }

    fn has_prev(self) -> bool {
        self.index > 0
    }
}

/// Interactively visit `dir`, looping until the user hands control back
/// to the parent level.
///
/// `start` is the session's starting directory and bounds upward
/// navigation; `siblings` is this directory's position in the parent's
/// child list, when known. Contents are rescanned from disk on every
/// iteration, so the view reflects deletions just performed here and
/// any external changes.
pub fn navigate(
    dir: &Path,
    start: &Path,
    siblings: Option<SiblingPos>,
    stats: &mut SessionStats,
) -> NavSignal {
    // Result of an `r` scan during this visit; cleared once it goes stale.
    let mut scan: Option<RecursiveScan> = None;

    loop {
        let cleanable = cleanable_children(dir);
        let subdirs = navigable_children(dir);

        render(dir, &cleanable, scan, &subdirs);

        let can_wipe = !cleanable.is_empty() || scan.is_some();
        let can_clean = !cleanable.is_empty();
        let has_next = siblings.is_some_and(|pos| pos.has_next());
        let has_prev = siblings.is_some_and(|pos| pos.has_prev());
        let at_start = dir == start;

        print_menu(can_wipe, can_clean, subdirs.len(), at_start, has_next, has_prev);

        let choice = match prompt("Choice: ") {
            Some(line) => line,
            // Closed stdin behaves like an explicit quit.
            None => quit(),
        };

        match choice.as_str() {
            "q" => quit(),
            "s" => return NavSignal::Skip,
            "u" if !at_start => return NavSignal::Up,
            "n" if has_next => return NavSignal::Next,
            "p" if has_prev => return NavSignal::Prev,
            "r" if !subdirs.is_empty() => {
                println!("\n{}", "Scanning all subfolders recursively...".bold());
                let result = scan_recursive(dir, SCAN_MAX_DEPTH);
                if result.count > 0 {
                    println!("Found {} cleanable items in subfolders", result.count);
                    println!(
                        "Total potential space: {}",
                        format_size(result.bytes, BINARY).bold()
                    );
                    scan = Some(result);
                } else {
                    println!("{}", "No cleanable items found in any subfolders".green());
                    scan = None;
                }
                let _ = prompt("\nPress Enter to continue...");
            }
            "w" if can_wipe => {
                println!(
                    "{} {}/ and subfolders...",
                    "Wiping all packages from".bold(),
                    short_name(dir)
                );
                let freed = wipe_tree(dir, stats);
                println!(
                    "{} {} from this tree",
                    "Freed".green().bold(),
                    format_size(freed, BINARY)
                );
                // Whatever the last scan reported is stale now.
                scan = None;
            }
            "c" if can_clean => {
                let mut freed = 0u64;
                for entry in &cleanable {
                    if delete_dir(&entry.path) {
                        println!("   {} {}", "Deleted".green(), short_name(&entry.path));
                        freed += entry.size;
                        stats.record_deletion(entry.size);
                    }
                }
                println!("{} {}", "Freed".green().bold(), format_size(freed, BINARY));
            }
            other => match other.parse::<usize>() {
                Ok(number) if !subdirs.is_empty() => {
                    if (1..=subdirs.len()).contains(&number) {
                        descend(&subdirs, number - 1, start, stats);
                    } else {
                        println!("{} Choose 1-{}", "Invalid number.".red(), subdirs.len());
                    }
                }
                _ => println!("{}", "Invalid choice. Try again.".red()),
            },
        }
    }
}

/// Walk the chosen child and then its siblings, driven by the signal
/// each child's own loop returns. The cursor clamps at both ends with a
/// notice rather than wrapping; walking off the end resumes the parent.
fn descend(subdirs: &[PathBuf], chosen: usize, start: &Path, stats: &mut SessionStats) {
    let mut cursor = chosen;

    while cursor < subdirs.len() {
        let pos = SiblingPos {
            index: cursor,
            count: subdirs.len(),
        };
        match navigate(&subdirs[cursor], start, Some(pos), stats) {
            NavSignal::Up => break,
            NavSignal::Next => {
                if cursor + 1 < subdirs.len() {
                    cursor += 1;
                } else {
                    println!("   {}", "No more folders at this level".yellow());
                }
            }
            NavSignal::Prev => {
                if cursor > 0 {
                    cursor -= 1;
                } else {
                    println!("   {}", "Already at first folder".yellow());
                }
            }
            NavSignal::Skip => cursor += 1,
        }
    }
}

fn render(dir: &Path, cleanable: &[CleanableEntry], scan: Option<RecursiveScan>, subdirs: &[PathBuf]) {
    println!("\n{}", "=".repeat(60));
    println!("{} {}", "Current:".bold(), dir.display());
    println!("{}", "=".repeat(60));

    if cleanable.is_empty() {
        println!("\nNo cleanable items in this directory");
    } else {
        let subtotal: u64 = cleanable.iter().map(|entry| entry.size).sum();
        println!("\n{}", "Cleanable items:".bold());
        for entry in cleanable {
            println!(
                "   - {} ({}) - {}",
                short_name(&entry.path),
                entry.kind.label(),
                format_size(entry.size, BINARY)
            );
        }
        println!("   Subtotal: {}", format_size(subtotal, BINARY).bold());
    }

    if let Some(scan) = scan {
        println!(
            "\nRecursive scan: {} items in subfolders ({})",
            scan.count,
            format_size(scan.bytes, BINARY)
        );
    }

    if subdirs.is_empty() {
        println!("\nNo subdirectories");
    } else {
        println!("\n{} ({}):", "Subdirectories".bold(), subdirs.len());
        for (idx, subdir) in subdirs.iter().enumerate() {
            println!("   {}. {}", idx + 1, short_name(subdir));
        }
    }
}

fn print_menu(
    can_wipe: bool,
    can_clean: bool,
    subdir_count: usize,
    at_start: bool,
    has_next: bool,
    has_prev: bool,
) {
    println!("\n{}", "-".repeat(60));
    println!("Actions:");
    if can_wipe {
        println!("   w - Wipe all packages here and in ALL subfolders");
    }
    if can_clean {
        println!("   c - Clean only this folder");
    }
    if subdir_count > 0 {
        println!("   1-{} - Enter a subdirectory", subdir_count);
        println!("   r - Recursive scan (check all subfolders for packages)");
    }
    if !at_start {
        println!("   u - Go up one level");
    }
    if has_next {
        println!("   n - Next folder (same level)");
    }
    if has_prev {
        println!("   p - Previous folder (same level)");
    }
    println!("   s - Skip and continue");
    println!("   q - Quit");
    println!("{}", "-".repeat(60));
}

/// Read one trimmed, lowercased line from stdin. `None` means stdin is
/// closed, which the session treats the same as quitting.
fn prompt(label: &str) -> Option<String> {
    print!("{label}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_lowercase()),
    }
}

/// Immediate, unconditional exit: no summary is printed.
fn quit() -> ! {
    println!("\nQuitting...");
    std::process::exit(0);
}

fn short_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
