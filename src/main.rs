use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;
use humansize::{format_size, BINARY};
use std::env;
use std::path::PathBuf;

use reclaim::scanner::navigable_children;
use reclaim::session::{navigate, SessionStats, SiblingPos};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Interactively find and delete Python venvs and node_modules to free disk space",
    long_about = None
)]
struct Args {
    /// Directory to start exploring (defaults to the current directory)
    path: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let start = match args.path {
        Some(path) => path,
        None => env::current_dir()?,
    };
    if !start.exists() {
        bail!("path '{}' does not exist", start.display());
    }
    let start = start.canonicalize().unwrap_or(start);

    println!("{}", "Interactive Disk Space Cleanup".bold());
    println!("{}", "=".repeat(60));
    println!("Navigate folders freely - list subdirs, go up/down levels.");

    // Seed the starting directory with its position among its parent's
    // children so sibling stepping works from the root of the walk too.
    let siblings = start.parent().and_then(|parent| {
        let peers = navigable_children(parent);
        peers
            .iter()
            .position(|peer| peer == &start)
            .map(|index| SiblingPos {
                index,
                count: peers.len(),
            })
    });

    let mut stats = SessionStats::default();
    navigate(&start, &start, siblings, &mut stats);

    println!("\n{}", "=".repeat(60));
    println!("{}", "Cleanup complete!".green().bold());
    println!("   Deleted: {} directories", stats.deleted_dirs);
    println!("   Freed up: {}", format_size(stats.freed_bytes, BINARY));

    Ok(())
}
