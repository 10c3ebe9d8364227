//! Internal implementation for project module
//!
//! Framework, language and story-format vocabulary plus the per-invocation
//! option records handed to the generator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::paths;

// =============================================================================
// Frameworks
// =============================================================================

/// Frontend frameworks the generator knows how to scaffold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SupportedFramework {
    React,
    Preact,
    Vue,
    #[value(name = "vue3")]
    Vue3,
    Angular,
    Svelte,
    Html,
    WebComponents,
    Ember,
}

impl SupportedFramework {
    pub const ALL: [SupportedFramework; 9] = [
        SupportedFramework::React,
        SupportedFramework::Preact,
        SupportedFramework::Vue,
        SupportedFramework::Vue3,
        SupportedFramework::Angular,
        SupportedFramework::Svelte,
        SupportedFramework::Html,
        SupportedFramework::WebComponents,
        SupportedFramework::Ember,
    ];

    /// Identifier used in package names and template directories
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportedFramework::React => "react",
            SupportedFramework::Preact => "preact",
            SupportedFramework::Vue => "vue",
            SupportedFramework::Vue3 => "vue3",
            SupportedFramework::Angular => "angular",
            SupportedFramework::Svelte => "svelte",
            SupportedFramework::Html => "html",
            SupportedFramework::WebComponents => "web-components",
            SupportedFramework::Ember => "ember",
        }
    }

    /// The framework's own storybook package, e.g. `@storybook/react`
    pub fn package_name(&self) -> String {
        format!("@storybook/{}", self.as_str())
    }
}

impl fmt::Display for SupportedFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Language / Story Format
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SupportedLanguage {
    #[value(name = "js", alias = "javascript")]
    Javascript,
    #[value(name = "ts", alias = "typescript")]
    Typescript,
}

impl SupportedLanguage {
    /// Template sub-directory for this language
    pub fn folder(&self) -> &'static str {
        match self {
            SupportedLanguage::Javascript => "js",
            SupportedLanguage::Typescript => "ts",
        }
    }
}

impl fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupportedLanguage::Javascript => f.write_str("javascript"),
            SupportedLanguage::Typescript => f.write_str("typescript"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum StoryFormat {
    #[serde(rename = "csf")]
    Csf,
    #[serde(rename = "csf-ts")]
    #[value(name = "csf-ts")]
    CsfTypescript,
    #[serde(rename = "mdx")]
    Mdx,
}

impl fmt::Display for StoryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoryFormat::Csf => f.write_str("csf"),
            StoryFormat::CsfTypescript => f.write_str("csf-ts"),
            StoryFormat::Mdx => f.write_str("mdx"),
        }
    }
}

// =============================================================================
// Option Records
// =============================================================================

/// Immutable per-invocation generator options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub language: SupportedLanguage,
    pub story_format: StoryFormat,
}

/// How dependencies land in the project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NpmOptions {
    /// Only write the manifest; do not run the package manager's install
    pub skip_install: bool,
    /// Write into `devDependencies` instead of `dependencies`
    pub install_as_dev_dependencies: bool,
}

impl Default for NpmOptions {
    fn default() -> Self {
        Self {
            skip_install: false,
            install_as_dev_dependencies: true,
        }
    }
}

// =============================================================================
// Detection
// =============================================================================

/// TypeScript when the project has a tsconfig.json, JavaScript otherwise
pub fn detect_language(project_path: &Path) -> SupportedLanguage {
    if paths::project::tsconfig_path(project_path).exists() {
        SupportedLanguage::Typescript
    } else {
        SupportedLanguage::Javascript
    }
}
