//! Scaffold module - file-tree side of `storykit init`
//!
//! The generator mutates the target project through the [`ProjectFiles`]
//! trait: it writes the story-loader configuration and copies boilerplate
//! components. [`Scaffolder`] is the filesystem implementation.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use storykit::project::{SupportedFramework, SupportedLanguage};
//! use storykit::scaffold::{ProjectFiles, Scaffolder};
//!
//! let scaffolder = Scaffolder::new(Path::new("."), storykit::paths::templates_dir());
//! scaffolder.configure(SupportedFramework::React, &["@storybook/addon-links".to_string()])?;
//! scaffolder.copy_components(SupportedFramework::React, SupportedLanguage::Typescript, false)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod configure;
mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::project::{SupportedFramework, SupportedLanguage};

pub use configure::{main_config, preview_config};
pub use templates::{copy_dir_recursive, install_all, templates_installed, TEMPLATES};

/// File collaborators used by the generator
pub trait ProjectFiles {
    /// Write `.storybook/main.js` and `.storybook/preview.js`
    fn configure(&self, framework: SupportedFramework, addons: &[String]) -> Result<()>;

    /// Copy boilerplate stories for a framework into the project
    fn copy_components(
        &self,
        framework: SupportedFramework,
        language: SupportedLanguage,
        raw_copy: bool,
    ) -> Result<()>;
}

/// Scaffolds a project on disk from the user template directory
#[derive(Debug, Clone)]
pub struct Scaffolder {
    project_root: PathBuf,
    templates_dir: PathBuf,
}

impl Scaffolder {
    pub fn new(project_root: &Path, templates_dir: PathBuf) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            templates_dir,
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }
}

impl ProjectFiles for Scaffolder {
    fn configure(&self, framework: SupportedFramework, addons: &[String]) -> Result<()> {
        configure::write_configs(&self.project_root, framework, addons)
    }

    fn copy_components(
        &self,
        framework: SupportedFramework,
        language: SupportedLanguage,
        raw_copy: bool,
    ) -> Result<()> {
        if !templates_installed(&self.templates_dir) {
            let written = install_all(&self.templates_dir)?;
            tracing::info!(
                dir = %self.templates_dir.display(),
                files = written,
                "extracted embedded templates"
            );
        }
        let copied = templates::copy_components(
            &self.templates_dir,
            &self.project_root,
            framework,
            language,
            raw_copy,
        )?;
        tracing::debug!(framework = %framework, files = copied, "copied components");
        Ok(())
    }
}
