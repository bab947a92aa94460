//! reclaim - interactive disk space cleanup.
//!
//! Finds Python virtual environments and `node_modules` directories
//! anywhere under a starting path and deletes them on request, through
//! an interactive depth-first tree navigator. Detection is structural
//! (venv marker files, the literal `node_modules` name); nothing else is
//! ever touched.

pub mod detect;
pub mod remove;
pub mod scanner;
pub mod session;

// Re-export commonly used items
pub use detect::{classify, CleanableKind, VENV_MARKERS};
pub use remove::{delete_dir, wipe_tree};
pub use scanner::{
    cleanable_children, dir_size, navigable_children, scan_recursive, CleanableEntry,
    RecursiveScan, SCAN_MAX_DEPTH,
};
pub use session::{navigate, NavSignal, SessionStats, SiblingPos};
