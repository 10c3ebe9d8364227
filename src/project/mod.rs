//! Project module - target project vocabulary
//!
//! Frameworks, languages and story formats a scaffold can target, plus the
//! option records that travel with one `storykit init` invocation.
//!
//! # Example
//!
//! ```
//! use clap::ValueEnum;
//! use storykit::project::{GeneratorOptions, StoryFormat, SupportedFramework, SupportedLanguage};
//!
//! let framework = SupportedFramework::from_str("vue3", false).unwrap();
//! assert_eq!(framework.package_name(), "@storybook/vue3");
//!
//! let options = GeneratorOptions {
//!     language: SupportedLanguage::Typescript,
//!     story_format: StoryFormat::Csf,
//! };
//! assert_eq!(options.language.folder(), "ts");
//! ```

mod internal;

use std::path::Path;

pub use internal::{
    GeneratorOptions, NpmOptions, StoryFormat, SupportedFramework, SupportedLanguage,
};

/// Guess the project language from its files
pub fn detect_language(project_path: &Path) -> SupportedLanguage {
    internal::detect_language(project_path)
}
