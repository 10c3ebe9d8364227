//! Generator module - scaffold a project for one framework
//!
//! `generate` resolves the framework options, composes the install list,
//! resolves versions, writes the story-loader config, copies boilerplate and
//! finally records dependencies and scripts in the manifest. Steps run
//! strictly in that order and the first error aborts the run; nothing is
//! rolled back. Version resolution runs before any file is written, so a
//! registry failure leaves the project untouched.
//!
//! # Example
//!
//! ```
//! use storykit::generator::{resolve_framework_options, FrameworkOptions, FrameworkOverrides};
//!
//! let options = resolve_framework_options(
//!     FrameworkOptions::default(),
//!     FrameworkOverrides {
//!         static_dir: Some("public".to_string()),
//!         add_components: Some(false),
//!         ..Default::default()
//!     },
//! );
//! assert_eq!(options.static_dir.as_deref(), Some("public"));
//! assert!(!options.add_components);
//! assert!(options.add_scripts);
//! ```

mod babel;
mod internal;
mod packages;
mod presets;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::package_manager::JsPackageManager;
use crate::project::{GeneratorOptions, NpmOptions, SupportedFramework};
use crate::scaffold::ProjectFiles;

pub use babel::get_babel_dependencies;
pub use packages::{base_addons, install_addons, install_packages, yarn2_dependencies, PEER_SHIM};
pub use presets::preset;

/// Port bound by the generated `storybook` script
pub const DEFAULT_PORT: u16 = 6006;

/// Fully resolved per-framework options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkOptions {
    pub extra_packages: Vec<String>,
    pub extra_addons: Vec<String>,
    /// Static assets directory served by storybook
    pub static_dir: Option<String>,
    pub add_scripts: bool,
    pub add_components: bool,
    /// Copy the framework template directory as-is
    pub raw_copy: bool,
}

impl Default for FrameworkOptions {
    fn default() -> Self {
        Self {
            extra_packages: Vec::new(),
            extra_addons: Vec::new(),
            static_dir: None,
            add_scripts: true,
            add_components: true,
            raw_copy: false,
        }
    }
}

/// Caller-supplied options; `None` keeps the default
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkOverrides {
    pub extra_packages: Option<Vec<String>>,
    pub extra_addons: Option<Vec<String>>,
    pub static_dir: Option<String>,
    pub add_scripts: Option<bool>,
    pub add_components: Option<bool>,
    pub raw_copy: Option<bool>,
}

impl FrameworkOverrides {
    /// Layer `flags` on top of these overrides
    ///
    /// Lists are appended, scalars are replaced when `flags` sets them.
    pub fn layer(self, flags: FrameworkOverrides) -> FrameworkOverrides {
        fn append(base: Option<Vec<String>>, extra: Option<Vec<String>>) -> Option<Vec<String>> {
            match (base, extra) {
                (Some(mut base), Some(extra)) => {
                    base.extend(extra);
                    Some(base)
                }
                (base, extra) => base.or(extra),
            }
        }

        FrameworkOverrides {
            extra_packages: append(self.extra_packages, flags.extra_packages),
            extra_addons: append(self.extra_addons, flags.extra_addons),
            static_dir: flags.static_dir.or(self.static_dir),
            add_scripts: flags.add_scripts.or(self.add_scripts),
            add_components: flags.add_components.or(self.add_components),
            raw_copy: flags.raw_copy.or(self.raw_copy),
        }
    }
}

/// Merge overrides over defaults, field by field
pub fn resolve_framework_options(
    defaults: FrameworkOptions,
    overrides: FrameworkOverrides,
) -> FrameworkOptions {
    FrameworkOptions {
        extra_packages: overrides.extra_packages.unwrap_or(defaults.extra_packages),
        extra_addons: overrides.extra_addons.unwrap_or(defaults.extra_addons),
        static_dir: overrides.static_dir.or(defaults.static_dir),
        add_scripts: overrides.add_scripts.unwrap_or(defaults.add_scripts),
        add_components: overrides.add_components.unwrap_or(defaults.add_components),
        raw_copy: overrides.raw_copy.unwrap_or(defaults.raw_copy),
    }
}

/// Scaffold `framework` into the project behind `package_manager` and `files`
pub fn generate(
    package_manager: &dyn JsPackageManager,
    files: &dyn ProjectFiles,
    npm_options: NpmOptions,
    options: GeneratorOptions,
    framework: SupportedFramework,
    overrides: FrameworkOverrides,
) -> Result<()> {
    internal::generate(package_manager, files, npm_options, options, framework, overrides)
}
