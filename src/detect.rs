//! Classification of cleanable directories.

use std::path::Path;

/// Relative paths that identify a directory as a Python virtual
/// environment. Any one of them is sufficient.
pub const VENV_MARKERS: &[&str] = &["pyvenv.cfg", "bin/activate", "Scripts/activate.bat"];

/// The two kinds of directory this tool will delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanableKind {
    VirtualEnv,
    DependencyCache,
}

impl CleanableKind {
    /// Short label shown next to entries in listings.
    pub fn label(self) -> &'static str {
        match self {
            CleanableKind::VirtualEnv => "venv",
            CleanableKind::DependencyCache => "node_modules",
        }
    }
}

/// Classify a directory as cleanable or not.
///
/// A virtual environment is any directory containing one of the
/// `VENV_MARKERS`; a dependency cache is any directory literally named
/// `node_modules`. Only existence checks, no content reads. Access
/// failures classify as not-cleanable so a scan never aborts on an
/// unreadable entry.
pub fn classify(path: &Path) -> Option<CleanableKind> {
    if !path.is_dir() {
        return None;
    }

    if VENV_MARKERS.iter().any(|marker| path.join(marker).exists()) {
        return Some(CleanableKind::VirtualEnv);
    }

    if path.file_name().and_then(|name| name.to_str()) == Some("node_modules") {
        return Some(CleanableKind::DependencyCache);
    }

    None
}
