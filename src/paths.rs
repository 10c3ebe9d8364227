//! Single source of truth for ALL storykit filesystem layout.
//!
//! This module defines WHERE files live. It has no I/O, no validation,
//! no business logic. One file shows the entire filesystem layout.
//!
//! # User-Level Paths (~/.storykit/)
//!
//! ```text
//! ~/.storykit/
//! └── templates/               # Extracted boilerplate (user-editable)
//!     ├── common/
//!     └── {framework}/{js,ts}/
//! ```
//!
//! # Project-Level Paths (project/)
//!
//! ```text
//! project/
//! ├── package.json             # Manifest (dependencies + scripts)
//! ├── storykit.toml            # Optional project config
//! ├── .storybook/
//! │   ├── main.js              # Story loader config
//! │   └── preview.js           # Global parameters
//! └── src/stories/ | stories/  # Copied components
//! ```

use std::path::{Path, PathBuf};

// =============================================================================
// User Level (~/.storykit/)
// =============================================================================

/// User's storykit home directory: `~/.storykit/`
pub fn storykit_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".storykit")
}

/// Extracted boilerplate templates: `~/.storykit/templates/`
pub fn templates_dir() -> PathBuf {
    storykit_home().join("templates")
}

// =============================================================================
// Project Level
// =============================================================================

/// Project-level paths, relative to a project root.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use storykit::paths::project;
///
/// let root = Path::new("/home/user/app");
/// assert_eq!(
///     project::main_config_path(root),
///     Path::new("/home/user/app/.storybook/main.js")
/// );
/// ```
pub mod project {
    use super::*;

    /// Project manifest: `package.json`
    pub fn package_json_path(root: &Path) -> PathBuf {
        root.join("package.json")
    }

    /// Optional project config: `storykit.toml`
    pub fn config_path(root: &Path) -> PathBuf {
        root.join("storykit.toml")
    }

    /// Story loader directory: `.storybook/`
    pub fn storybook_dir(root: &Path) -> PathBuf {
        root.join(".storybook")
    }

    /// Story loader entry: `.storybook/main.js`
    pub fn main_config_path(root: &Path) -> PathBuf {
        storybook_dir(root).join("main.js")
    }

    /// Global story parameters: `.storybook/preview.js`
    pub fn preview_config_path(root: &Path) -> PathBuf {
        storybook_dir(root).join("preview.js")
    }

    /// Source directory: `src/`
    pub fn src_dir(root: &Path) -> PathBuf {
        root.join("src")
    }

    /// Where copied components land: `src/stories/` when `src/` exists, else `stories/`
    pub fn stories_dir(root: &Path) -> PathBuf {
        if src_dir(root).is_dir() {
            root.join("src/stories")
        } else {
            root.join("stories")
        }
    }

    /// Story glob prefix relative to `.storybook/`
    pub fn stories_glob_prefix(root: &Path) -> &'static str {
        if src_dir(root).is_dir() {
            "../src"
        } else {
            "../stories"
        }
    }

    /// TypeScript marker: `tsconfig.json`
    pub fn tsconfig_path(root: &Path) -> PathBuf {
        root.join("tsconfig.json")
    }
}
