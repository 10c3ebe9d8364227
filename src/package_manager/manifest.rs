//! package.json handling
//!
//! The manifest is kept as an ordered JSON object so keys we never touch keep
//! their position and formatting survives a read/write cycle.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

const DEPENDENCIES: &str = "dependencies";
const DEV_DEPENDENCIES: &str = "devDependencies";
const SCRIPTS: &str = "scripts";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageJson {
    raw: Map<String, Value>,
}

impl PackageJson {
    /// A fresh manifest for a project without one
    pub fn minimal(name: &str) -> Self {
        let mut raw = Map::new();
        raw.insert("name".to_string(), Value::String(name.to_string()));
        raw.insert("version".to_string(), Value::String("1.0.0".to_string()));
        raw.insert("private".to_string(), Value::Bool(true));
        let mut manifest = Self { raw };
        manifest.ensure_dependency_tables();
        manifest
    }

    /// Read `package.json`; `None` when the file does not exist
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let manifest: PackageJson = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Some(manifest))
    }

    /// Write with two-space indentation and a trailing newline
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut content = serde_json::to_string_pretty(&self.raw)?;
        content.push('\n');
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
    }

    pub fn name(&self) -> Option<&str> {
        self.raw.get("name").and_then(Value::as_str)
    }

    /// Make sure both dependency tables exist as objects
    pub fn ensure_dependency_tables(&mut self) {
        for key in [DEPENDENCIES, DEV_DEPENDENCIES] {
            if !self.raw.get(key).is_some_and(Value::is_object) {
                self.raw.insert(key.to_string(), Value::Object(Map::new()));
            }
        }
    }

    pub fn dependencies(&self) -> IndexMap<String, String> {
        self.string_table(DEPENDENCIES)
    }

    pub fn dev_dependencies(&self) -> IndexMap<String, String> {
        self.string_table(DEV_DEPENDENCIES)
    }

    pub fn scripts(&self) -> IndexMap<String, String> {
        self.string_table(SCRIPTS)
    }

    /// Version range declared for `name` in either dependency table
    pub fn dependency_version(&self, name: &str) -> Option<String> {
        self.dependencies()
            .get(name)
            .cloned()
            .or_else(|| self.dev_dependencies().get(name).cloned())
    }

    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependency_version(name).is_some()
    }

    /// Merge entries into `devDependencies` (or `dependencies`), keeping the table sorted
    pub fn add_dependencies<I>(&mut self, entries: I, dev: bool)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let key = if dev { DEV_DEPENDENCIES } else { DEPENDENCIES };
        let mut table = self.string_table(key);
        for (name, version) in entries {
            table.insert(name, version);
        }
        table.sort_keys();
        self.put_string_table(key, table);
    }

    /// Merge entries into `scripts`; existing names are overwritten
    pub fn add_scripts<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut table = self.string_table(SCRIPTS);
        for (name, command) in entries {
            table.insert(name, command);
        }
        self.put_string_table(SCRIPTS, table);
    }

    fn string_table(&self, key: &str) -> IndexMap<String, String> {
        self.raw
            .get(key)
            .and_then(Value::as_object)
            .map(|obj| {
                obj.iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn put_string_table(&mut self, key: &str, table: IndexMap<String, String>) {
        let obj: Map<String, Value> = table
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect();
        self.raw.insert(key.to_string(), Value::Object(obj));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_unknown_keys_keep_their_order() -> Result<()> {
        let tmp = TempDir::new()?;
        let path = tmp.path().join("package.json");
        fs::write(
            &path,
            r#"{"name":"app","browserslist":["defaults"],"dependencies":{"react":"^17.0.2"}}"#,
        )?;

        let mut manifest = PackageJson::load(&path)?.expect("manifest exists");
        manifest.add_dependencies([("react-is".to_string(), "^17.0.2".to_string())], true);
        manifest.save(&path)?;

        let written = fs::read_to_string(&path)?;
        let name_at = written.find("\"name\"").unwrap();
        let browsers_at = written.find("\"browserslist\"").unwrap();
        let dev_at = written.find("\"devDependencies\"").unwrap();
        assert!(name_at < browsers_at && browsers_at < dev_at);
        assert!(written.ends_with('\n'));
        Ok(())
    }

    #[test]
    fn test_add_dependencies_sorts_and_overwrites() {
        let mut manifest = PackageJson::minimal("app");
        manifest.add_dependencies(
            [
                ("zod".to_string(), "^3.0.0".to_string()),
                ("axios".to_string(), "^0.21.0".to_string()),
            ],
            false,
        );
        manifest.add_dependencies([("zod".to_string(), "^3.1.0".to_string())], false);

        let deps = manifest.dependencies();
        let names: Vec<&String> = deps.keys().collect();
        assert_eq!(names, vec!["axios", "zod"]);
        assert_eq!(deps["zod"], "^3.1.0");
        assert!(manifest.dev_dependencies().is_empty());
    }

    #[test]
    fn test_dependency_version_checks_both_tables() {
        let mut manifest = PackageJson::minimal("app");
        manifest.add_dependencies([("babel-loader".to_string(), "^8.2.2".to_string())], true);
        assert_eq!(manifest.dependency_version("babel-loader").as_deref(), Some("^8.2.2"));
        assert!(!manifest.has_dependency("@babel/core"));
    }

    #[test]
    fn test_dependency_version_prefers_runtime_table() {
        let mut manifest = PackageJson::minimal("app");
        manifest.add_dependencies([("react".to_string(), "^16.14.0".to_string())], true);
        manifest.add_dependencies([("react".to_string(), "^17.0.2".to_string())], false);
        manifest.add_dependencies([("babel-core".to_string(), "^6.26.0".to_string())], true);

        assert_eq!(manifest.dependency_version("react").as_deref(), Some("^17.0.2"));
        assert_eq!(manifest.dependency_version("babel-core").as_deref(), Some("^6.26.0"));
        assert!(manifest.has_dependency("babel-core"));
        assert_eq!(manifest.dependency_version("vue"), None);
    }

    #[test]
    fn test_load_missing_is_none() -> Result<()> {
        let tmp = TempDir::new()?;
        assert!(PackageJson::load(&tmp.path().join("package.json"))?.is_none());
        Ok(())
    }

    #[test]
    fn test_ensure_dependency_tables_replaces_non_objects() {
        let mut manifest: PackageJson =
            serde_json::from_str(r#"{"name":"app","dependencies":null}"#).unwrap();
        manifest.ensure_dependency_tables();
        assert!(manifest.dependencies().is_empty());
        assert_eq!(manifest.name(), Some("app"));
    }
}
