//! Install list composition

use crate::package_manager::PackageManagerKind;
use crate::project::SupportedFramework;

use super::FrameworkOptions;

/// Peer dependency several addons expect to be present
pub const PEER_SHIM: &str = "react-is";

/// Addons wired into `.storybook/main.js`
pub fn base_addons() -> Vec<String> {
    vec![
        "@storybook/addon-links".to_string(),
        "@storybook/addon-essentials".to_string(),
    ]
}

/// Addon packages written to the manifest
pub fn install_addons() -> Vec<String> {
    let mut addons = base_addons();
    addons.push("@storybook/addon-actions".to_string());
    addons
}

/// Packages yarn berry needs listed explicitly since it does not hoist peers
pub fn yarn2_dependencies(kind: PackageManagerKind) -> Vec<String> {
    match kind {
        PackageManagerKind::Yarn2 => vec![
            "@storybook/addon-docs".to_string(),
            "@mdx-js/react".to_string(),
        ],
        _ => Vec::new(),
    }
}

/// Full install list in install-log order, blank entries dropped
///
/// Duplicates are kept; the package manager resolves them.
pub fn install_packages(
    framework: SupportedFramework,
    kind: PackageManagerKind,
    options: &FrameworkOptions,
) -> Vec<String> {
    std::iter::once(framework.package_name())
        .chain(install_addons())
        .chain(options.extra_packages.iter().cloned())
        .chain(options.extra_addons.iter().cloned())
        .chain(yarn2_dependencies(kind))
        .chain(std::iter::once(PEER_SHIM.to_string()))
        .filter(|pkg| !pkg.trim().is_empty())
        .collect()
}
