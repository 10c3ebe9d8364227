//! Story-loader configuration (`.storybook/main.js`, `.storybook/preview.js`)

use anyhow::{Context, Result};
use serde_json::json;
use std::fs;
use std::path::Path;

use crate::paths;
use crate::project::SupportedFramework;

/// `.storybook/main.js` contents for a project
pub fn main_config(project_root: &Path, addons: &[String]) -> Result<String> {
    let prefix = paths::project::stories_glob_prefix(project_root);
    let config = json!({
        "stories": [
            format!("{}/**/*.stories.mdx", prefix),
            format!("{}/**/*.stories.@(js|jsx|ts|tsx)", prefix),
        ],
        "addons": addons,
    });
    Ok(format!(
        "module.exports = {};\n",
        serde_json::to_string_pretty(&config)?
    ))
}

/// `.storybook/preview.js` contents for a framework
pub fn preview_config(framework: SupportedFramework) -> String {
    let mut out = String::new();
    if framework == SupportedFramework::Angular {
        out.push_str("import { setCompodocJson } from \"@storybook/addon-docs/angular\";\n");
        out.push_str("import docJson from \"../documentation.json\";\n");
        out.push_str("setCompodocJson(docJson);\n\n");
    }
    out.push_str("export const parameters = {\n");
    out.push_str("  actions: { argTypesRegex: \"^on[A-Z].*\" },\n");
    out.push_str("}\n");
    out
}

pub(super) fn write_configs(
    project_root: &Path,
    framework: SupportedFramework,
    addons: &[String],
) -> Result<()> {
    let dir = paths::project::storybook_dir(project_root);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let main = paths::project::main_config_path(project_root);
    fs::write(&main, main_config(project_root, addons)?)
        .with_context(|| format!("Failed to write {}", main.display()))?;

    let preview = paths::project::preview_config_path(project_root);
    fs::write(&preview, preview_config(framework))
        .with_context(|| format!("Failed to write {}", preview.display()))?;

    tracing::debug!(dir = %dir.display(), addons = addons.len(), "wrote story loader config");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_main_config_points_at_stories_without_src() -> Result<()> {
        let temp = TempDir::new()?;
        let main = main_config(temp.path(), &["@storybook/addon-links".to_string()])?;

        assert!(main.starts_with("module.exports = {"));
        assert!(main.contains("\"../stories/**/*.stories.mdx\""));
        assert!(main.contains("\"../stories/**/*.stories.@(js|jsx|ts|tsx)\""));
        assert!(main.contains("\"@storybook/addon-links\""));
        Ok(())
    }

    #[test]
    fn test_main_config_points_at_src_when_present() -> Result<()> {
        let temp = TempDir::new()?;
        fs::create_dir(temp.path().join("src"))?;
        let main = main_config(temp.path(), &[])?;
        assert!(main.contains("\"../src/**/*.stories.mdx\""));
        assert!(!main.contains("../stories/"));
        Ok(())
    }

    #[test]
    fn test_main_config_lists_stories_before_addons() -> Result<()> {
        let temp = TempDir::new()?;
        let main = main_config(temp.path(), &["a".to_string(), "b".to_string()])?;
        let stories = main.find("\"stories\"").unwrap();
        let addons = main.find("\"addons\"").unwrap();
        assert!(stories < addons);
        assert!(main.find("\"a\"").unwrap() < main.find("\"b\"").unwrap());
        Ok(())
    }

    #[test]
    fn test_preview_config() {
        let react = preview_config(SupportedFramework::React);
        assert!(react.contains("argTypesRegex: \"^on[A-Z].*\""));
        assert!(!react.contains("setCompodocJson"));

        let angular = preview_config(SupportedFramework::Angular);
        assert!(angular.contains("setCompodocJson(docJson);"));
        assert!(angular.contains("argTypesRegex"));
    }

    #[test]
    fn test_write_configs_creates_storybook_dir() -> Result<()> {
        let temp = TempDir::new()?;
        write_configs(temp.path(), SupportedFramework::Vue3, &[])?;
        assert!(temp.path().join(".storybook/main.js").exists());
        assert!(temp.path().join(".storybook/preview.js").exists());
        Ok(())
    }
}
