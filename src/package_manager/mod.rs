//! Package manager collaborator
//!
//! The generator talks to npm, yarn classic, yarn berry and pnpm through the
//! [`JsPackageManager`] trait. [`NodePackageManager`] is the real
//! implementation; tests substitute their own.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use storykit::config::Config;
//! use storykit::package_manager::{self, HttpRegistry, JsPackageManager, NodePackageManager};
//!
//! let root = Path::new(".");
//! let config = Config::load(root)?;
//! let kind = package_manager::detect(root, None);
//! let pm = NodePackageManager::new(kind, root, Box::new(HttpRegistry::new(&config.registry)?));
//! println!("{:?}", pm.get_versioned_packages(&["react-is".to_string()])?);
//! # Ok::<(), anyhow::Error>(())
//! ```

mod manifest;
mod node;
pub mod registry;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::process::Command;

use crate::project::NpmOptions;

pub use manifest::PackageJson;
pub use node::NodePackageManager;
pub use registry::{HttpRegistry, InMemoryRegistry, Registry};

// =============================================================================
// Kinds
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PackageManagerKind {
    Npm,
    /// Yarn classic (v1)
    #[value(alias = "yarn1")]
    Yarn,
    /// Yarn berry (v2+); does not hoist peer dependencies
    #[value(name = "yarn2", alias = "berry")]
    Yarn2,
    Pnpm,
}

impl PackageManagerKind {
    /// Executable that runs installs for this kind
    pub fn binary(&self) -> &'static str {
        match self {
            PackageManagerKind::Npm => "npm",
            PackageManagerKind::Yarn | PackageManagerKind::Yarn2 => "yarn",
            PackageManagerKind::Pnpm => "pnpm",
        }
    }
}

impl fmt::Display for PackageManagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PackageManagerKind::Npm => "npm",
            PackageManagerKind::Yarn => "yarn",
            PackageManagerKind::Yarn2 => "yarn2",
            PackageManagerKind::Pnpm => "pnpm",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Trait
// =============================================================================

/// Options for [`JsPackageManager::add_dependencies`]
#[derive(Debug, Clone, Default)]
pub struct DependencyOptions {
    pub npm: NpmOptions,
    /// Manifest to merge into; read from disk when absent
    pub package_json: Option<PackageJson>,
}

/// Options for [`JsPackageManager::add_storybook_command_in_scripts`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptOptions {
    pub port: u16,
    pub static_folder: Option<String>,
    /// Script to run before storybook starts/builds
    pub pre_command: Option<String>,
}

impl ScriptOptions {
    /// `storybook` and `build-storybook` script entries
    pub fn scripts(&self, run_command: impl Fn(&str) -> String) -> Vec<(String, String)> {
        let (start, build) = match &self.static_folder {
            Some(dir) => (
                format!("start-storybook -p {} -s {}", self.port, dir),
                format!("build-storybook -s {}", dir),
            ),
            None => (
                format!("start-storybook -p {}", self.port),
                "build-storybook".to_string(),
            ),
        };

        let pre = self.pre_command.as_deref().map(run_command);
        let chain = |cmd: String| match &pre {
            Some(pre) => format!("{} && {}", pre, cmd),
            None => cmd,
        };

        vec![
            ("storybook".to_string(), chain(start)),
            ("build-storybook".to_string(), chain(build)),
        ]
    }
}

pub trait JsPackageManager {
    fn kind(&self) -> PackageManagerKind;

    /// Newest published version of `name` matching `constraint`
    fn latest_version(&self, name: &str, constraint: Option<&str>) -> Result<String>;

    /// Caret range for the version to install
    fn get_version(&self, name: &str, constraint: Option<&str>) -> Result<String> {
        Ok(format!("^{}", self.latest_version(name, constraint)?))
    }

    /// `name@range` for every package, in input order
    fn get_versioned_packages(&self, packages: &[String]) -> Result<Vec<String>> {
        packages
            .iter()
            .map(|pkg| {
                let (name, constraint) = get_package_details(pkg);
                Ok(format!("{}@{}", name, self.get_version(name, constraint)?))
            })
            .collect()
    }

    /// Current manifest, created on disk when missing
    fn retrieve_package_json(&self) -> Result<PackageJson>;

    /// Write dependencies into the manifest in one go, then install unless skipped
    fn add_dependencies(&self, options: DependencyOptions, dependencies: &[String]) -> Result<()>;

    fn add_storybook_command_in_scripts(&self, options: &ScriptOptions) -> Result<()>;

    /// Shell command that runs a manifest script
    fn run_command(&self, script: &str) -> String;
}

/// Split `name@range` into its parts; scoped names keep their leading `@`
pub fn get_package_details(pkg: &str) -> (&str, Option<&str>) {
    let search_from = usize::from(pkg.starts_with('@'));
    match pkg[search_from..].find('@') {
        Some(idx) => {
            let split = search_from + idx;
            let version = &pkg[split + 1..];
            (&pkg[..split], (!version.is_empty()).then_some(version))
        }
        None => (pkg, None),
    }
}

// =============================================================================
// Detection
// =============================================================================

/// What the machine and the project say about available package managers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Toolchain {
    pub has_pnpm_lock: bool,
    pub has_pnpm: bool,
    pub has_yarn_lock: bool,
    pub has_npm: bool,
    /// Major version reported by `yarn --version`, `None` when yarn is missing
    pub yarn_major: Option<u64>,
}

impl Toolchain {
    /// Probe lockfiles in `project_path` and binaries on `PATH`
    pub fn inspect(project_path: &Path) -> Self {
        Self {
            has_pnpm_lock: project_path.join("pnpm-lock.yaml").exists(),
            has_pnpm: which::which("pnpm").is_ok(),
            has_yarn_lock: project_path.join("yarn.lock").exists(),
            has_npm: which::which("npm").is_ok(),
            yarn_major: yarn_major_version(project_path),
        }
    }

    /// A pnpm lockfile selects pnpm when pnpm is installed. Yarn is used when
    /// it is installed and the project has a yarn.lock (or npm is missing);
    /// its major version decides between yarn classic and berry.
    pub fn choose(&self) -> PackageManagerKind {
        if self.has_pnpm_lock && self.has_pnpm {
            return PackageManagerKind::Pnpm;
        }

        match self.yarn_major {
            Some(major) if self.has_yarn_lock || !self.has_npm => {
                if major >= 2 {
                    PackageManagerKind::Yarn2
                } else {
                    PackageManagerKind::Yarn
                }
            }
            _ => PackageManagerKind::Npm,
        }
    }
}

/// Pick the package manager for a project; an explicit choice wins
pub fn detect(project_path: &Path, forced: Option<PackageManagerKind>) -> PackageManagerKind {
    if let Some(kind) = forced {
        return kind;
    }
    let toolchain = Toolchain::inspect(project_path);
    tracing::debug!(?toolchain, "detecting package manager");
    toolchain.choose()
}

fn yarn_major_version(project_path: &Path) -> Option<u64> {
    which::which("yarn").ok()?;
    let output = Command::new("yarn")
        .arg("--version")
        .current_dir(project_path)
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8_lossy(&output.stdout)
        .trim()
        .split('.')
        .next()?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_details() {
        assert_eq!(get_package_details("react-is"), ("react-is", None));
        assert_eq!(get_package_details("vue-loader@^16.0.0"), ("vue-loader", Some("^16.0.0")));
        assert_eq!(get_package_details("@storybook/react"), ("@storybook/react", None));
        assert_eq!(
            get_package_details("@storybook/react@6.2.9"),
            ("@storybook/react", Some("6.2.9"))
        );
        assert_eq!(get_package_details("left-pad@"), ("left-pad", None));
    }

    #[test]
    fn test_forced_kind_wins() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("yarn.lock"), "").unwrap();
        assert_eq!(
            detect(tmp.path(), Some(PackageManagerKind::Pnpm)),
            PackageManagerKind::Pnpm
        );
    }

    fn npm_only() -> Toolchain {
        Toolchain {
            has_npm: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_pnpm_needs_lockfile_and_binary() {
        let both = Toolchain {
            has_pnpm_lock: true,
            has_pnpm: true,
            ..npm_only()
        };
        assert_eq!(both.choose(), PackageManagerKind::Pnpm);

        let lock_only = Toolchain {
            has_pnpm_lock: true,
            ..npm_only()
        };
        assert_eq!(lock_only.choose(), PackageManagerKind::Npm);

        let binary_only = Toolchain {
            has_pnpm: true,
            ..npm_only()
        };
        assert_eq!(binary_only.choose(), PackageManagerKind::Npm);
    }

    #[test]
    fn test_pnpm_lock_beats_yarn_lock() {
        let toolchain = Toolchain {
            has_pnpm_lock: true,
            has_pnpm: true,
            has_yarn_lock: true,
            yarn_major: Some(1),
            ..npm_only()
        };
        assert_eq!(toolchain.choose(), PackageManagerKind::Pnpm);
    }

    #[test]
    fn test_yarn_lock_picks_yarn_by_major() {
        let classic = Toolchain {
            has_yarn_lock: true,
            yarn_major: Some(1),
            ..npm_only()
        };
        assert_eq!(classic.choose(), PackageManagerKind::Yarn);

        let berry = Toolchain {
            yarn_major: Some(3),
            ..classic
        };
        assert_eq!(berry.choose(), PackageManagerKind::Yarn2);
    }

    #[test]
    fn test_yarn_without_lock_needs_npm_missing() {
        let with_npm = Toolchain {
            yarn_major: Some(1),
            ..npm_only()
        };
        assert_eq!(with_npm.choose(), PackageManagerKind::Npm);

        let without_npm = Toolchain {
            has_npm: false,
            ..with_npm
        };
        assert_eq!(without_npm.choose(), PackageManagerKind::Yarn);
    }

    #[test]
    fn test_yarn_lock_without_yarn_falls_back_to_npm() {
        let toolchain = Toolchain {
            has_yarn_lock: true,
            ..npm_only()
        };
        assert_eq!(toolchain.choose(), PackageManagerKind::Npm);
        assert_eq!(Toolchain::default().choose(), PackageManagerKind::Npm);
    }

    #[test]
    fn test_kind_names() {
        use clap::ValueEnum;

        let parse = |s| PackageManagerKind::from_str(s, false);
        assert_eq!(parse("yarn2").unwrap(), PackageManagerKind::Yarn2);
        assert_eq!(parse("berry").unwrap(), PackageManagerKind::Yarn2);
        assert_eq!(parse("yarn1").unwrap(), PackageManagerKind::Yarn);
        assert!(parse("bun").is_err());
        for kind in PackageManagerKind::value_variants() {
            assert_eq!(kind.to_possible_value().unwrap().get_name(), kind.to_string());
        }
        assert_eq!(PackageManagerKind::Yarn2.binary(), "yarn");
    }

    #[test]
    fn test_script_options_without_static_dir() {
        let scripts = ScriptOptions {
            port: 6006,
            ..Default::default()
        }
        .scripts(|cmd| format!("npm run {}", cmd));
        assert_eq!(scripts[0], ("storybook".to_string(), "start-storybook -p 6006".to_string()));
        assert_eq!(scripts[1], ("build-storybook".to_string(), "build-storybook".to_string()));
    }
}
