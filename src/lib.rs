pub mod config;
pub mod generator;
pub mod package_manager;
pub mod paths;
pub mod project;
pub mod scaffold;
pub mod stories;

// Re-export commonly used types
pub use config::Config;
pub use generator::{generate, FrameworkOptions, FrameworkOverrides};
pub use package_manager::{JsPackageManager, PackageManagerKind};
pub use stories::{Story, StoryBook};
