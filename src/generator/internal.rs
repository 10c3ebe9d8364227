//! Internal implementation of the generator sequence

use anyhow::{Context, Result};

use crate::package_manager::{DependencyOptions, JsPackageManager, ScriptOptions};
use crate::project::{GeneratorOptions, NpmOptions, SupportedFramework};
use crate::scaffold::ProjectFiles;

use super::babel::get_babel_dependencies;
use super::packages::{base_addons, install_packages};
use super::{resolve_framework_options, FrameworkOptions, FrameworkOverrides, DEFAULT_PORT};

pub fn generate(
    package_manager: &dyn JsPackageManager,
    files: &dyn ProjectFiles,
    npm_options: NpmOptions,
    options: GeneratorOptions,
    framework: SupportedFramework,
    overrides: FrameworkOverrides,
) -> Result<()> {
    let resolved = resolve_framework_options(FrameworkOptions::default(), overrides);
    let kind = package_manager.kind();
    let packages = install_packages(framework, kind, &resolved);
    tracing::info!(
        framework = %framework,
        package_manager = %kind,
        packages = ?packages,
        "resolving versions"
    );

    // Nothing on disk has changed before this point
    let versioned = package_manager
        .get_versioned_packages(&packages)
        .context("Failed to resolve package versions")?;

    let addons: Vec<String> = base_addons()
        .into_iter()
        .chain(resolved.extra_addons.iter().cloned())
        .filter(|addon| !addon.trim().is_empty())
        .collect();
    files
        .configure(framework, &addons)
        .context("Failed to write story loader config")?;

    if resolved.add_components {
        files
            .copy_components(framework, options.language, resolved.raw_copy)
            .context("Failed to copy components")?;
    }

    let manifest = package_manager.retrieve_package_json()?;
    let babel = get_babel_dependencies(package_manager, &manifest)?;
    let dependencies: Vec<String> = versioned.into_iter().chain(babel).collect();
    package_manager.add_dependencies(
        DependencyOptions {
            npm: npm_options,
            package_json: Some(manifest),
        },
        &dependencies,
    )?;

    if resolved.add_scripts {
        package_manager.add_storybook_command_in_scripts(&ScriptOptions {
            port: DEFAULT_PORT,
            static_folder: resolved.static_dir,
            pre_command: None,
        })?;
    }

    tracing::info!(framework = %framework, dependencies = dependencies.len(), "scaffold complete");
    Ok(())
}
