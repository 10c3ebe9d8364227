//! Boilerplate template extraction and copying
//!
//! Templates are embedded at compile time and extracted to the user template
//! directory (`~/.storykit/templates/` by default) on first use, so users can
//! customise them. Copying always reads from the extracted tree.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::paths;
use crate::project::{SupportedFramework, SupportedLanguage};

/// Shared files overlaid on every non-raw copy
const COMMON_DIR: &str = "common";

/// Records which release extracted the template tree
const VERSION_MARKER: &str = ".storykit-version";

macro_rules! template {
    ($path:literal) => {
        (
            $path,
            include_str!(concat!("../../resources/frameworks/", $path)),
        )
    };
}

/// Embedded templates as `(relative path, contents)`
pub const TEMPLATES: &[(&str, &str)] = &[
    template!("common/Introduction.stories.mdx"),
    template!("common/button.css"),
    template!("react/js/Button.jsx"),
    template!("react/js/Button.stories.jsx"),
    template!("react/ts/Button.tsx"),
    template!("react/ts/Button.stories.tsx"),
    template!("preact/js/Button.jsx"),
    template!("preact/js/Button.stories.jsx"),
    template!("vue/js/Button.vue"),
    template!("vue/js/Button.stories.js"),
    template!("vue3/js/Button.vue"),
    template!("vue3/js/Button.stories.js"),
    template!("angular/ts/button.component.ts"),
    template!("angular/ts/Button.stories.ts"),
    template!("svelte/js/Button.svelte"),
    template!("svelte/js/Button.stories.js"),
    template!("html/js/Button.js"),
    template!("html/js/Button.stories.js"),
    template!("web-components/js/Button.js"),
    template!("web-components/js/Button.stories.js"),
    template!("ember/js/Button.stories.js"),
];

// =============================================================================
// Public API
// =============================================================================

/// Extract the embedded templates into `templates_dir` and stamp the release
///
/// Files already on disk are kept, so user edits survive an upgrade while
/// templates added by a newer release are filled in. Returns the number of
/// files written.
pub fn install_all(templates_dir: &Path) -> Result<usize> {
    fs::create_dir_all(templates_dir)
        .with_context(|| format!("Failed to create directory: {}", templates_dir.display()))?;

    let mut written = 0;
    for (relative, contents) in TEMPLATES {
        let dest = templates_dir.join(relative);
        if dest.exists() {
            continue;
        }
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&dest, contents)
            .with_context(|| format!("Failed to write template: {}", dest.display()))?;
        written += 1;
    }

    let marker = templates_dir.join(VERSION_MARKER);
    fs::write(&marker, env!("CARGO_PKG_VERSION"))
        .with_context(|| format!("Failed to write {}", marker.display()))?;
    Ok(written)
}

/// Have this release's templates been extracted into `templates_dir`?
pub fn templates_installed(templates_dir: &Path) -> bool {
    fs::read_to_string(templates_dir.join(VERSION_MARKER))
        .is_ok_and(|stamp| stamp.trim() == env!("CARGO_PKG_VERSION"))
}

/// Copy a framework's boilerplate into the project's stories directory
///
/// Picks `<framework>/<language>`, then `<framework>/js`, then the framework
/// directory itself, and overlays `common/`. A raw copy takes the framework
/// directory verbatim. Returns the number of files written.
pub(super) fn copy_components(
    templates_dir: &Path,
    project_root: &Path,
    framework: SupportedFramework,
    language: SupportedLanguage,
    raw_copy: bool,
) -> Result<usize> {
    let framework_dir = templates_dir.join(framework.as_str());
    if !framework_dir.is_dir() {
        bail!("Unsupported framework: {} has no templates", framework);
    }

    let dest = paths::project::stories_dir(project_root);
    if raw_copy {
        return copy_dir_recursive(&framework_dir, &dest);
    }

    let language_dir = framework_dir.join(language.folder());
    let js_dir = framework_dir.join(SupportedLanguage::Javascript.folder());
    let source = if language_dir.is_dir() {
        language_dir
    } else if js_dir.is_dir() {
        tracing::debug!(
            framework = %framework,
            language = %language,
            "no language templates, using js"
        );
        js_dir
    } else {
        framework_dir
    };

    let mut copied = copy_dir_recursive(&source, &dest)?;
    let common = templates_dir.join(COMMON_DIR);
    if common.is_dir() {
        copied += copy_dir_recursive(&common, &dest)?;
    }
    Ok(copied)
}

/// Recursively copy a directory, returning the number of files copied
pub fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<usize> {
    if !src.exists() {
        bail!("Source directory does not exist: {}", src.display());
    }

    fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create directory: {}", dest.display()))?;

    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if src_path.is_dir() {
            copied += copy_dir_recursive(&src_path, &dest_path)?;
        } else {
            fs::copy(&src_path, &dest_path).with_context(|| {
                format!(
                    "Failed to copy: {} -> {}",
                    src_path.display(),
                    dest_path.display()
                )
            })?;
            copied += 1;
        }
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn installed() -> TempDir {
        let temp = TempDir::new().unwrap();
        install_all(temp.path()).unwrap();
        temp
    }

    #[test]
    fn test_templates_compile() {
        assert!(TEMPLATES.iter().all(|(_, contents)| !contents.is_empty()));
        assert!(TEMPLATES.iter().any(|(path, _)| path.starts_with("common/")));
    }

    #[test]
    fn test_every_framework_has_templates() {
        for framework in SupportedFramework::ALL {
            let prefix = format!("{}/", framework.as_str());
            assert!(
                TEMPLATES.iter().any(|(path, _)| path.starts_with(&prefix)),
                "no templates for {}",
                framework
            );
        }
    }

    #[test]
    fn test_install_all() {
        let templates = installed();
        assert!(templates_installed(templates.path()));
        assert!(templates.path().join("react/ts/Button.tsx").exists());
        assert!(templates.path().join("common/button.css").exists());
    }

    #[test]
    fn test_install_keeps_user_edits_and_fills_gaps() -> Result<()> {
        let templates = TempDir::new()?;
        let css = templates.path().join("common/button.css");
        fs::create_dir_all(css.parent().unwrap())?;
        fs::write(&css, ".button { color: hotpink; }")?;
        assert!(!templates_installed(templates.path()));

        let written = install_all(templates.path())?;
        assert_eq!(written, TEMPLATES.len() - 1);
        assert_eq!(fs::read_to_string(&css)?, ".button { color: hotpink; }");
        assert!(templates.path().join("vue3/js/Button.vue").exists());
        assert!(templates_installed(templates.path()));

        assert_eq!(install_all(templates.path())?, 0);
        Ok(())
    }

    #[test]
    fn test_stamp_from_another_release_is_stale() -> Result<()> {
        let templates = installed();
        fs::write(templates.path().join(VERSION_MARKER), "0.0.1")?;
        assert!(!templates_installed(templates.path()));
        Ok(())
    }

    #[test]
    fn test_copy_selects_language_and_overlays_common() -> Result<()> {
        let templates = installed();
        let project = TempDir::new()?;

        let copied = copy_components(
            templates.path(),
            project.path(),
            SupportedFramework::React,
            SupportedLanguage::Typescript,
            false,
        )?;

        let stories = project.path().join("stories");
        assert_eq!(copied, 4);
        assert!(stories.join("Button.tsx").exists());
        assert!(stories.join("button.css").exists());
        assert!(stories.join("Introduction.stories.mdx").exists());
        assert!(!stories.join("Button.jsx").exists());
        Ok(())
    }

    #[test]
    fn test_copy_falls_back_to_js() -> Result<()> {
        let templates = installed();
        let project = TempDir::new()?;
        fs::create_dir(project.path().join("src"))?;

        copy_components(
            templates.path(),
            project.path(),
            SupportedFramework::Svelte,
            SupportedLanguage::Typescript,
            false,
        )?;

        assert!(project.path().join("src/stories/Button.svelte").exists());
        Ok(())
    }

    #[test]
    fn test_raw_copy_takes_framework_dir_verbatim() -> Result<()> {
        let templates = installed();
        let project = TempDir::new()?;

        copy_components(
            templates.path(),
            project.path(),
            SupportedFramework::React,
            SupportedLanguage::Javascript,
            true,
        )?;

        let stories = project.path().join("stories");
        assert!(stories.join("js/Button.jsx").exists());
        assert!(stories.join("ts/Button.tsx").exists());
        assert!(!stories.join("button.css").exists());
        Ok(())
    }

    #[test]
    fn test_missing_framework_is_an_error() -> Result<()> {
        let templates = TempDir::new()?;
        let project = TempDir::new()?;
        let err = copy_components(
            templates.path(),
            project.path(),
            SupportedFramework::Ember,
            SupportedLanguage::Javascript,
            false,
        )
        .unwrap_err();
        assert!(err.to_string().contains("ember"));
        Ok(())
    }
}
