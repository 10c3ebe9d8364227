//! Transpiler dependencies the project still needs

use anyhow::Result;

use crate::package_manager::registry::satisfies;
use crate::package_manager::{JsPackageManager, PackageJson};

const BABEL_LOADER_V8: &str = "^8.0.0-0";
const BABEL_LOADER_V7: &str = "^7.0.0";

/// `name@range` entries for babel packages missing from `manifest`
///
/// A project on babel 6 (`babel-core`) gets babel-loader 7; everything else
/// gets babel-loader 8 and, when no core is present, `@babel/core`.
pub fn get_babel_dependencies(
    package_manager: &dyn JsPackageManager,
    manifest: &PackageJson,
) -> Result<Vec<String>> {
    let mut dependencies = Vec::new();
    let mut babel_loader_range = BABEL_LOADER_V8;

    match manifest.dependency_version("babel-core") {
        None => {
            if !manifest.has_dependency("@babel/core") {
                let version = package_manager.get_version("@babel/core", None)?;
                dependencies.push(format!("@babel/core@{}", version));
            }
        }
        Some(range) => {
            let latest = package_manager.latest_version("babel-core", Some(&range))?;
            if satisfies(&latest, "^6.0.0") {
                tracing::debug!(babel_core = %latest, "babel 6 project, using babel-loader 7");
                babel_loader_range = BABEL_LOADER_V7;
            }
        }
    }

    if !manifest.has_dependency("babel-loader") {
        let version = package_manager.get_version("babel-loader", Some(babel_loader_range))?;
        dependencies.push(format!("babel-loader@{}", version));
    }

    Ok(dependencies)
}
