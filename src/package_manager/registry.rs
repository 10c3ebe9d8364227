//! npm registry lookups and version ranges
//!
//! Ranges follow npm's grammar on top of `semver` requirements: `||`
//! alternatives, space-separated comparators, hyphen ranges (`1.2.3 - 2`)
//! and `x`/`*` wildcards. Bare versions are exact, bare partials (`8`,
//! `6.26`) mean the whole line.

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use semver::VersionReq;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::config::RegistrySection;

pub use semver::Version;

/// Published versions of one package
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageDocument {
    #[serde(rename = "dist-tags", default)]
    pub dist_tags: HashMap<String, String>,
    #[serde(default)]
    pub versions: IndexMap<String, serde_json::Value>,
}

impl PackageDocument {
    /// Newest version matching `constraint`, or `dist-tags.latest` without one
    ///
    /// A constraint naming a dist-tag (`next`, `latest`) resolves to that tag.
    pub fn resolve(&self, name: &str, constraint: Option<&str>) -> Result<String> {
        let constraint = constraint.map(str::trim).unwrap_or("latest");
        if let Some(tagged) = self.dist_tags.get(constraint) {
            return Ok(tagged.clone());
        }
        if constraint == "latest" {
            bail!("No latest version published for {}", name);
        }

        let range = VersionRange::parse(constraint)?;
        self.versions
            .keys()
            .filter_map(|v| parse_version(v))
            .filter(|v| range.matches(v))
            .max()
            .map(|v| v.to_string())
            .with_context(|| format!("No version of {} satisfies {}", name, constraint))
    }
}

/// Source of package documents
pub trait Registry {
    fn package(&self, name: &str) -> Result<PackageDocument>;
}

/// Blocking HTTP client against an npm-compatible registry
pub struct HttpRegistry {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpRegistry {
    pub fn new(settings: &RegistrySection) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("storykit/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self {
            base_url: settings.url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

impl Registry for HttpRegistry {
    fn package(&self, name: &str) -> Result<PackageDocument> {
        let url = format!("{}/{}", self.base_url, name.replace('/', "%2F"));
        tracing::debug!(%url, "registry lookup");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .with_context(|| format!("Failed to reach registry for {}", name))?;

        if !response.status().is_success() {
            bail!("Registry returned {} for {}", response.status(), name);
        }

        response
            .json()
            .with_context(|| format!("Failed to parse registry document for {}", name))
    }
}

/// Fixed version table, for offline runs and tests
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    packages: HashMap<String, PackageDocument>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish `versions`; the last one becomes `latest`
    pub fn with_package(mut self, name: &str, versions: &[&str]) -> Self {
        let mut doc = PackageDocument::default();
        for version in versions {
            doc.versions.insert(version.to_string(), serde_json::Value::Null);
        }
        if let Some(latest) = versions.last() {
            doc.dist_tags.insert("latest".to_string(), latest.to_string());
        }
        self.packages.insert(name.to_string(), doc);
        self
    }
}

impl Registry for InMemoryRegistry {
    fn package(&self, name: &str) -> Result<PackageDocument> {
        self.packages
            .get(name)
            .cloned()
            .with_context(|| format!("Package not found in registry: {}", name))
    }
}

// =============================================================================
// Versions
// =============================================================================

/// Lenient version parse: surrounding whitespace and a leading `v` are ignored
pub fn parse_version(s: &str) -> Option<Version> {
    Version::parse(s.trim().trim_start_matches('v')).ok()
}

/// An npm range: any one of its `||` alternatives must match
#[derive(Debug, Clone)]
pub struct VersionRange {
    alternatives: Vec<VersionReq>,
}

impl VersionRange {
    pub fn parse(s: &str) -> Result<Self> {
        let alternatives = s
            .split("||")
            .map(comparator_set)
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("Unsupported version range: {}", s))?;
        Ok(Self { alternatives })
    }

    /// Prereleases only match when a comparator names one on the same release
    pub fn matches(&self, v: &Version) -> bool {
        self.alternatives.iter().any(|req| req.matches(v))
    }
}

/// One space-separated comparator set as a comma-separated `VersionReq`
fn comparator_set(set: &str) -> Result<VersionReq> {
    let tokens = join_operators(set.split_whitespace());

    let comparators: Vec<String> = match tokens.as_slice() {
        [low, dash, high] if dash == "-" => vec![
            comparator(&format!(">={}", low)),
            comparator(&format!("<={}", high)),
        ],
        _ => tokens.iter().map(|token| comparator(token)).collect(),
    };
    let comparators: Vec<String> = comparators
        .into_iter()
        .filter(|c| c != "*" && c != "latest")
        .collect();

    if comparators.is_empty() {
        return Ok(VersionReq::STAR);
    }
    Ok(VersionReq::parse(&comparators.join(", "))?)
}

/// `>= 1.2.3` is written with a space in the wild; glue operators back on
fn join_operators<'a>(tokens: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut joined: Vec<String> = Vec::new();
    let mut pending = String::new();
    for token in tokens {
        if token.chars().all(is_operator_char) {
            pending.push_str(token);
        } else {
            joined.push(format!("{}{}", std::mem::take(&mut pending), token));
        }
    }
    if !pending.is_empty() {
        joined.push(pending);
    }
    joined
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '<' | '>' | '=' | '^' | '~')
}

/// Rewrite one npm comparator in `semver` syntax
///
/// Wildcard components become `*` (bare) or are dropped (after an operator);
/// a bare version gets `=` so it keeps npm's exact/partial meaning rather than
/// the caret `semver` would assume.
fn comparator(token: &str) -> String {
    let split = token.find(|c: char| !is_operator_char(c)).unwrap_or(token.len());
    let (op, version) = token.split_at(split);
    let version = version.trim_start_matches('v');

    let parts: Vec<&str> = version.split('.').collect();
    let wildcard = parts.iter().position(|p| matches!(*p, "x" | "X" | "*"));

    match (op, wildcard) {
        (_, Some(0)) => "*".to_string(),
        ("", Some(at)) => format!("{}.*", parts[..at].join(".")),
        (op, Some(at)) => format!("{}{}", op, parts[..at].join(".")),
        ("", None) if version == "latest" => version.to_string(),
        ("", None) => format!("={}", version),
        (op, None) => format!("{}{}", op, version),
    }
}

/// Does `version` fall inside `range`? Unparseable input never matches.
pub fn satisfies(version: &str, range: &str) -> bool {
    match (parse_version(version), VersionRange::parse(range)) {
        (Some(v), Ok(r)) => r.matches(&v),
        _ => false,
    }
}
