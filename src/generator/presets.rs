//! Per-framework preset overrides

use crate::project::SupportedFramework;

use super::FrameworkOverrides;

fn packages(names: &[&str]) -> Option<Vec<String>> {
    Some(names.iter().map(|name| name.to_string()).collect())
}

/// Overrides a framework applies before the caller's flags
pub fn preset(framework: SupportedFramework) -> FrameworkOverrides {
    match framework {
        SupportedFramework::Vue => FrameworkOverrides {
            extra_packages: packages(&["vue-loader"]),
            ..Default::default()
        },
        SupportedFramework::Vue3 => FrameworkOverrides {
            extra_packages: packages(&["vue-loader@^16.0.0"]),
            ..Default::default()
        },
        SupportedFramework::Svelte => FrameworkOverrides {
            extra_packages: packages(&["svelte", "svelte-loader"]),
            ..Default::default()
        },
        SupportedFramework::WebComponents => FrameworkOverrides {
            extra_packages: packages(&["lit-html"]),
            ..Default::default()
        },
        SupportedFramework::Angular => FrameworkOverrides {
            extra_packages: packages(&["@compodoc/compodoc"]),
            ..Default::default()
        },
        SupportedFramework::Ember => FrameworkOverrides {
            extra_packages: packages(&[
                "babel-plugin-ember-modules-api-polyfill",
                "babel-plugin-htmlbars-inline-precompile",
            ]),
            static_dir: Some("dist".to_string()),
            ..Default::default()
        },
        SupportedFramework::React | SupportedFramework::Preact | SupportedFramework::Html => {
            FrameworkOverrides::default()
        }
    }
}
