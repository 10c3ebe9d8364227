//! Project configuration stored in `storykit.toml`
//!
//! Every section is optional. A missing file yields the defaults, and a few
//! environment variables override individual values:
//!
//! - `STORYKIT_REGISTRY` overrides `registry.url`
//! - `STORYKIT_TEMPLATES` overrides `templates.dir`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

/// Configuration for storykit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub registry: RegistrySection,
    #[serde(default)]
    pub versions: VersionsSection,
    #[serde(default)]
    pub templates: TemplatesSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySection {
    /// npm registry base URL
    #[serde(default = "default_registry_url")]
    pub url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_registry_url() -> String {
    "https://registry.npmjs.org".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for RegistrySection {
    fn default() -> Self {
        Self {
            url: default_registry_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VersionsSection {
    /// Version used for `@storybook/*` packages when the registry is unreachable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storybook: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplatesSection {
    /// Template root; defaults to `~/.storykit/templates`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration for a project, applying environment overrides
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = paths::project::config_path(project_root);
        let mut config = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        } else {
            Config::default()
        };

        if let Ok(url) = std::env::var("STORYKIT_REGISTRY") {
            tracing::debug!(%url, "registry overridden from environment");
            config.registry.url = url;
        }
        if let Ok(dir) = std::env::var("STORYKIT_TEMPLATES") {
            config.templates.dir = Some(PathBuf::from(dir));
        }

        Ok(config)
    }

    /// Effective template root
    pub fn templates_dir(&self) -> PathBuf {
        self.templates
            .dir
            .clone()
            .unwrap_or_else(paths::templates_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() -> Result<()> {
        let temp = TempDir::new()?;
        let config = Config::load(temp.path())?;
        assert_eq!(config.registry.timeout_secs, 10);
        assert!(config.versions.storybook.is_none());
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> Result<()> {
        let temp = TempDir::new()?;
        fs::write(
            temp.path().join("storykit.toml"),
            "[versions]\nstorybook = \"6.2.9\"\n\n[registry]\ntimeout_secs = 3\n",
        )?;

        let config: Config = toml::from_str(&fs::read_to_string(
            temp.path().join("storykit.toml"),
        )?)?;
        assert_eq!(config.versions.storybook.as_deref(), Some("6.2.9"));
        assert_eq!(config.registry.timeout_secs, 3);
        assert_eq!(config.registry.url, "https://registry.npmjs.org");
        Ok(())
    }
}
