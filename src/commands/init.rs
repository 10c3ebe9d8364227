//! `storykit init` - add Storybook to a project

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use storykit::config::Config;
use storykit::generator::{self, FrameworkOverrides};
use storykit::package_manager::{
    self, HttpRegistry, JsPackageManager, NodePackageManager, PackageManagerKind,
};
use storykit::project::{
    self, GeneratorOptions, NpmOptions, StoryFormat, SupportedFramework, SupportedLanguage,
};
use storykit::scaffold::Scaffolder;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Framework to scaffold
    #[arg(short, long, value_enum)]
    pub framework: SupportedFramework,

    /// Language of the copied components (detected from tsconfig.json when omitted)
    #[arg(short, long, value_enum)]
    pub language: Option<SupportedLanguage>,

    /// Story file format
    #[arg(long, value_enum, default_value_t = StoryFormat::Csf)]
    pub story_format: StoryFormat,

    /// Package manager (detected when omitted)
    #[arg(long, value_enum)]
    pub package_manager: Option<PackageManagerKind>,

    /// Additional package to install, repeatable
    #[arg(long = "extra-package", value_name = "PACKAGE")]
    pub extra_packages: Vec<String>,

    /// Additional addon to install and register, repeatable
    #[arg(long = "extra-addon", value_name = "ADDON")]
    pub extra_addons: Vec<String>,

    /// Static assets directory served by storybook
    #[arg(long)]
    pub static_dir: Option<String>,

    /// Do not add storybook scripts to package.json
    #[arg(long)]
    pub no_scripts: bool,

    /// Do not copy example components
    #[arg(long)]
    pub no_components: bool,

    /// Copy the framework template directory as-is
    #[arg(long)]
    pub raw_copy: bool,

    /// Write package.json only, skip the install
    #[arg(long)]
    pub skip_install: bool,

    /// Add to dependencies instead of devDependencies
    #[arg(long)]
    pub prod_dependencies: bool,

    /// Project directory
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
}

impl InitArgs {
    /// Overrides expressed by the flags; unset flags keep the preset/default
    fn overrides(&self) -> FrameworkOverrides {
        fn list(values: &[String]) -> Option<Vec<String>> {
            (!values.is_empty()).then(|| values.to_vec())
        }

        FrameworkOverrides {
            extra_packages: list(&self.extra_packages),
            extra_addons: list(&self.extra_addons),
            static_dir: self.static_dir.clone(),
            add_scripts: self.no_scripts.then_some(false),
            add_components: self.no_components.then_some(false),
            raw_copy: self.raw_copy.then_some(true),
        }
    }
}

pub fn execute(args: InitArgs) -> Result<()> {
    fs::create_dir_all(&args.dir)
        .with_context(|| format!("Failed to create directory: {}", args.dir.display()))?;
    let root = args
        .dir
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", args.dir.display()))?;

    println!(
        "🎨 Adding Storybook for {} to {}\n",
        args.framework.to_string().bold(),
        root.display()
    );

    let config = Config::load(&root)?;
    let kind = package_manager::detect(&root, args.package_manager);
    let registry = HttpRegistry::new(&config.registry)?;
    let pm = NodePackageManager::new(kind, &root, Box::new(registry))
        .with_pinned_storybook(config.versions.storybook.clone());
    let scaffolder = Scaffolder::new(&root, config.templates_dir());

    let language = args
        .language
        .unwrap_or_else(|| project::detect_language(&root));
    let options = GeneratorOptions {
        language,
        story_format: args.story_format,
    };
    let npm_options = NpmOptions {
        skip_install: args.skip_install,
        install_as_dev_dependencies: !args.prod_dependencies,
    };
    let overrides = generator::preset(args.framework).layer(args.overrides());

    println!("🔍 Using {} ({})", kind.to_string().cyan(), language);
    generator::generate(&pm, &scaffolder, npm_options, options, args.framework, overrides.clone())?;

    println!("  ✓ Wrote .storybook/main.js and .storybook/preview.js");
    if overrides.add_components != Some(false) {
        println!("  ✓ Copied example stories");
    }
    if args.skip_install {
        println!("  ✓ Updated package.json (install skipped)");
    } else {
        println!("  ✓ Installed dependencies");
    }

    if overrides.add_scripts != Some(false) {
        println!(
            "\n✨ Storybook is ready. Start it with: {}",
            pm.run_command("storybook").green()
        );
    } else {
        println!("\n✨ Storybook is ready.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: InitArgs,
    }

    #[test]
    fn test_flags_map_to_overrides() {
        let harness = Harness::parse_from([
            "storykit",
            "--framework",
            "vue3",
            "--extra-addon",
            "@storybook/addon-a11y",
            "--no-scripts",
            "--static-dir",
            "public",
        ]);
        let overrides = harness.args.overrides();
        assert_eq!(harness.args.framework, SupportedFramework::Vue3);
        assert_eq!(overrides.extra_addons, Some(vec!["@storybook/addon-a11y".to_string()]));
        assert_eq!(overrides.extra_packages, None);
        assert_eq!(overrides.add_scripts, Some(false));
        assert_eq!(overrides.add_components, None);
        assert_eq!(overrides.static_dir.as_deref(), Some("public"));
    }

    #[test]
    fn test_flags_layer_over_preset() {
        let harness = Harness::parse_from([
            "storykit",
            "--framework",
            "ember",
            "--extra-package",
            "ember-source",
        ]);
        let overrides = generator::preset(harness.args.framework).layer(harness.args.overrides());
        assert_eq!(overrides.static_dir.as_deref(), Some("dist"));
        assert_eq!(overrides.extra_packages.as_ref().map(Vec::len), Some(3));
        assert_eq!(
            overrides.extra_packages.as_ref().and_then(|p| p.last()).map(String::as_str),
            Some("ember-source")
        );
    }

    #[test]
    fn test_value_enum_names_and_aliases() {
        let harness = Harness::parse_from([
            "storykit",
            "-f",
            "web-components",
            "-l",
            "typescript",
            "--story-format",
            "csf-ts",
            "--package-manager",
            "berry",
        ]);
        assert_eq!(harness.args.framework, SupportedFramework::WebComponents);
        assert_eq!(harness.args.language, Some(SupportedLanguage::Typescript));
        assert_eq!(harness.args.story_format, StoryFormat::CsfTypescript);
        assert_eq!(harness.args.package_manager, Some(PackageManagerKind::Yarn2));

        let defaults = Harness::parse_from(["storykit", "--framework", "react"]);
        assert_eq!(defaults.args.story_format, StoryFormat::Csf);
        assert!(Harness::try_parse_from(["storykit", "--framework", "solid"]).is_err());
        let bad_format = ["storykit", "-f", "react", "--story-format", "jsx"];
        assert!(Harness::try_parse_from(bad_format).is_err());
    }
}
