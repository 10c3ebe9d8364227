//! Package manager backed by the installed npm / yarn / pnpm binary
//!
//! Version lookups go to the registry over HTTP; only the final install
//! shells out to the package manager itself.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

use super::manifest::PackageJson;
use super::registry::{parse_version, satisfies, Registry};
use super::{
    get_package_details, DependencyOptions, JsPackageManager, PackageManagerKind, ScriptOptions,
};
use crate::paths;

pub struct NodePackageManager {
    kind: PackageManagerKind,
    cwd: PathBuf,
    registry: Box<dyn Registry>,
    pinned_storybook: Option<String>,
}

impl NodePackageManager {
    pub fn new(kind: PackageManagerKind, cwd: &Path, registry: Box<dyn Registry>) -> Self {
        Self {
            kind,
            cwd: cwd.to_path_buf(),
            registry,
            pinned_storybook: None,
        }
    }

    /// Version used for `@storybook/*` packages when it beats the registry or the registry fails
    pub fn with_pinned_storybook(mut self, version: Option<String>) -> Self {
        self.pinned_storybook = version;
        self
    }

    fn manifest_path(&self) -> PathBuf {
        paths::project::package_json_path(&self.cwd)
    }

    fn write_package_json(&self, manifest: &PackageJson) -> Result<()> {
        manifest.save(&self.manifest_path())
    }

    fn run_install(&self) -> Result<()> {
        let binary = self.kind.binary();
        tracing::info!(binary, cwd = %self.cwd.display(), "running install");

        let status = Command::new(binary)
            .arg("install")
            .current_dir(&self.cwd)
            .status()
            .with_context(|| format!("Failed to run {} install", binary))?;

        if !status.success() {
            bail!("{} install failed ({})", binary, status);
        }
        Ok(())
    }
}

impl JsPackageManager for NodePackageManager {
    fn kind(&self) -> PackageManagerKind {
        self.kind
    }

    fn latest_version(&self, name: &str, constraint: Option<&str>) -> Result<String> {
        self.registry.package(name)?.resolve(name, constraint)
    }

    fn get_version(&self, name: &str, constraint: Option<&str>) -> Result<String> {
        let pinned = self
            .pinned_storybook
            .as_deref()
            .filter(|_| name.starts_with("@storybook/"));

        let latest = match self.latest_version(name, constraint) {
            Ok(latest) => latest,
            Err(err) => match pinned {
                Some(pinned) => {
                    tracing::warn!(
                        package = name,
                        error = %err,
                        "registry lookup failed, using pinned version"
                    );
                    return Ok(format!("^{}", pinned));
                }
                None => return Err(err),
            },
        };

        let use_pinned = pinned.is_some_and(|pinned| {
            constraint.map_or(true, |range| satisfies(pinned, range))
                && matches!(
                    (parse_version(pinned), parse_version(&latest)),
                    (Some(p), Some(l)) if p > l
                )
        });

        let version = match pinned {
            Some(pinned) if use_pinned => pinned,
            _ => latest.as_str(),
        };
        Ok(format!("^{}", version))
    }

    fn retrieve_package_json(&self) -> Result<PackageJson> {
        let path = self.manifest_path();
        let mut manifest = match PackageJson::load(&path)? {
            Some(manifest) => manifest,
            None => {
                let name = self
                    .cwd
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| "storybook-project".to_string());
                tracing::info!(path = %path.display(), "no package.json, creating one");
                let manifest = PackageJson::minimal(&name);
                self.write_package_json(&manifest)?;
                manifest
            }
        };
        manifest.ensure_dependency_tables();
        Ok(manifest)
    }

    fn add_dependencies(&self, options: DependencyOptions, dependencies: &[String]) -> Result<()> {
        let mut manifest = match options.package_json {
            Some(manifest) => manifest,
            None => self.retrieve_package_json()?,
        };

        let entries = dependencies.iter().map(|dep| {
            let (name, version) = get_package_details(dep);
            (name.to_string(), version.unwrap_or("latest").to_string())
        });
        manifest.add_dependencies(entries, options.npm.install_as_dev_dependencies);
        self.write_package_json(&manifest)?;

        if !options.npm.skip_install {
            self.run_install()?;
        }
        Ok(())
    }

    fn add_storybook_command_in_scripts(&self, options: &ScriptOptions) -> Result<()> {
        let mut manifest = self.retrieve_package_json()?;
        manifest.add_scripts(options.scripts(|cmd| self.run_command(cmd)));
        self.write_package_json(&manifest)
    }

    fn run_command(&self, script: &str) -> String {
        match self.kind {
            PackageManagerKind::Npm => format!("npm run {}", script),
            PackageManagerKind::Pnpm => format!("pnpm run {}", script),
            PackageManagerKind::Yarn | PackageManagerKind::Yarn2 => format!("yarn {}", script),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package_manager::registry::InMemoryRegistry;
    use crate::project::NpmOptions;
    use tempfile::TempDir;

    fn manager(dir: &Path, pinned: Option<&str>) -> NodePackageManager {
        let registry = InMemoryRegistry::new()
            .with_package("@storybook/react", &["6.1.21", "6.2.9"])
            .with_package("react-is", &["16.13.1", "17.0.2"]);
        NodePackageManager::new(PackageManagerKind::Npm, dir, Box::new(registry))
            .with_pinned_storybook(pinned.map(String::from))
    }

    #[test]
    fn test_versioned_packages_keep_order_and_constraints() -> Result<()> {
        let tmp = TempDir::new()?;
        let pm = manager(tmp.path(), None);
        let versioned = pm.get_versioned_packages(&[
            "react-is@^16.0.0".to_string(),
            "@storybook/react".to_string(),
        ])?;
        assert_eq!(versioned, vec!["react-is@^16.13.1", "@storybook/react@^6.2.9"]);
        Ok(())
    }

    #[test]
    fn test_pinned_storybook_covers_registry_failure() -> Result<()> {
        let tmp = TempDir::new()?;
        let pm = manager(tmp.path(), Some("6.3.0"));
        assert_eq!(pm.get_version("@storybook/addon-links", None)?, "^6.3.0");
        assert!(pm.get_version("left-pad", None).is_err());
        Ok(())
    }

    #[test]
    fn test_pinned_storybook_only_wins_when_newer() -> Result<()> {
        let tmp = TempDir::new()?;
        let newer = manager(tmp.path(), Some("6.3.0"));
        assert_eq!(newer.get_version("@storybook/react", None)?, "^6.3.0");
        let older = manager(tmp.path(), Some("6.0.0"));
        assert_eq!(older.get_version("@storybook/react", None)?, "^6.2.9");
        Ok(())
    }

    #[test]
    fn test_pinned_storybook_must_satisfy_comparator_range() -> Result<()> {
        let tmp = TempDir::new()?;
        let pm = manager(tmp.path(), Some("6.3.0"));
        assert_eq!(pm.get_version("@storybook/react", Some(">=6.0.0 <7.0.0"))?, "^6.3.0");
        assert_eq!(pm.get_version("@storybook/react", Some("6.1.x || 6.2.x"))?, "^6.2.9");
        Ok(())
    }

    #[test]
    fn test_retrieve_creates_manifest() -> Result<()> {
        let tmp = TempDir::new()?;
        let pm = manager(tmp.path(), None);
        let manifest = pm.retrieve_package_json()?;
        assert!(manifest.dependencies().is_empty());
        assert!(tmp.path().join("package.json").exists());
        Ok(())
    }

    #[test]
    fn test_add_dependencies_writes_manifest_when_skipping_install() -> Result<()> {
        let tmp = TempDir::new()?;
        let pm = manager(tmp.path(), None);
        let options = DependencyOptions {
            npm: NpmOptions {
                skip_install: true,
                install_as_dev_dependencies: true,
            },
            package_json: None,
        };
        pm.add_dependencies(
            options,
            &["@storybook/react@^6.2.9".to_string(), "react-is@^17.0.2".to_string()],
        )?;

        let written = PackageJson::load(&tmp.path().join("package.json"))?.unwrap();
        assert_eq!(written.dev_dependencies()["@storybook/react"], "^6.2.9");
        assert_eq!(written.dev_dependencies()["react-is"], "^17.0.2");
        Ok(())
    }

    #[test]
    fn test_storybook_scripts() -> Result<()> {
        let tmp = TempDir::new()?;
        let pm = manager(tmp.path(), None);
        pm.add_storybook_command_in_scripts(&ScriptOptions {
            port: 6006,
            static_folder: Some("public".to_string()),
            pre_command: Some("build:css".to_string()),
        })?;

        let scripts = pm.retrieve_package_json()?.scripts();
        assert_eq!(
            scripts["storybook"],
            "npm run build:css && start-storybook -p 6006 -s public"
        );
        assert_eq!(
            scripts["build-storybook"],
            "npm run build:css && build-storybook -s public"
        );
        Ok(())
    }

    #[test]
    fn test_run_command_per_kind() {
        let tmp = TempDir::new().unwrap();
        let yarn = NodePackageManager::new(
            PackageManagerKind::Yarn2,
            tmp.path(),
            Box::new(InMemoryRegistry::new()),
        );
        assert_eq!(yarn.run_command("storybook"), "yarn storybook");
        assert_eq!(manager(tmp.path(), None).run_command("storybook"), "npm run storybook");
    }
}
