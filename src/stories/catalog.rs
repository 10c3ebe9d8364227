//! Fixture catalogs and story registration
//!
//! Each catalog pairs a static, ordered list of fixture ids (story order)
//! with a registry of `(id, factory)` entries. Registration walks the id
//! list and resolves every id against the registry.

use anyhow::{Context, Result};

use super::component::Component;
use super::fixtures;
use super::story::{args_table_props, ArgsStory, ArgsTableProps, IssueStory, Story};

/// A named example component factory
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub id: &'static str,
    pub load: fn() -> Component,
}

/// How stories from a catalog behave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    /// Stateful story with a debug table
    Args,
    /// Args table only, updates reported as an action
    Issues,
}

#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    /// Short key used on the command line
    pub key: &'static str,
    /// Story namespace, e.g. `ArgTypes/TypeScript`
    pub namespace: &'static str,
    pub kind: CatalogKind,
    pub ids: &'static [&'static str],
    pub fixtures: &'static [Fixture],
}

impl Catalog {
    /// Build the fixture component for `id`
    pub fn load(&self, id: &str) -> Result<Component> {
        self.fixtures
            .iter()
            .find(|fixture| fixture.id == id)
            .map(|fixture| (fixture.load)())
            .with_context(|| format!("Fixture not found: {}/{}", self.key, id))
    }
}

pub static TYPESCRIPT: Catalog = Catalog {
    key: "typescript",
    namespace: "ArgTypes/TypeScript",
    kind: CatalogKind::Args,
    ids: fixtures::typescript::IDS,
    fixtures: fixtures::typescript::FIXTURES,
};

pub static PROPTYPES: Catalog = Catalog {
    key: "proptypes",
    namespace: "ArgTypes/PropTypes",
    kind: CatalogKind::Args,
    ids: fixtures::proptypes::IDS,
    fixtures: fixtures::proptypes::FIXTURES,
};

pub static ISSUES: Catalog = Catalog {
    key: "issues",
    namespace: "ArgTypes/Issues",
    kind: CatalogKind::Issues,
    ids: fixtures::issues::IDS,
    fixtures: fixtures::issues::FIXTURES,
};

/// All built-in catalogs, in registration order
pub fn catalogs() -> [&'static Catalog; 3] {
    [&TYPESCRIPT, &PROPTYPES, &ISSUES]
}

/// Look a catalog up by key or namespace
pub fn find_catalog(name: &str) -> Option<&'static Catalog> {
    catalogs()
        .into_iter()
        .find(|c| c.key.eq_ignore_ascii_case(name) || c.namespace == name)
}

#[derive(Debug, Clone)]
enum EntrySource {
    Component(Component),
    Props(ArgsTableProps),
}

/// One registered story
#[derive(Debug, Clone)]
pub struct StoryEntry {
    pub namespace: &'static str,
    pub catalog: &'static str,
    pub name: &'static str,
    source: EntrySource,
}

impl StoryEntry {
    /// `catalog/name`, the id used on the command line
    pub fn id(&self) -> String {
        format!("{}/{}", self.catalog, self.name)
    }

    /// Fresh story instance with its own state
    pub fn story(&self) -> Story {
        match &self.source {
            EntrySource::Component(component) => Story::Args(ArgsStory::new(component)),
            EntrySource::Props(props) => Story::Issue(IssueStory::new(props.clone())),
        }
    }
}

/// Registered stories, grouped by namespace in registration order
#[derive(Debug, Clone, Default)]
pub struct StoryBook {
    entries: Vec<StoryEntry>,
}

impl StoryBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in catalog registered
    pub fn with_builtin_catalogs() -> Result<Self> {
        let mut book = Self::new();
        for catalog in catalogs() {
            book.register_catalog(catalog)?;
        }
        Ok(book)
    }

    /// Register one story per fixture id; any load failure registers nothing
    pub fn register_catalog(&mut self, catalog: &'static Catalog) -> Result<()> {
        let mut entries = Vec::with_capacity(catalog.ids.len());
        for &id in catalog.ids {
            let component = catalog
                .load(id)
                .with_context(|| format!("Failed to register {}", catalog.namespace))?;
            let source = match catalog.kind {
                CatalogKind::Args => EntrySource::Component(component),
                CatalogKind::Issues => EntrySource::Props(args_table_props(&component)),
            };
            entries.push(StoryEntry {
                namespace: catalog.namespace,
                catalog: catalog.key,
                name: id,
                source,
            });
        }

        tracing::debug!(
            namespace = catalog.namespace,
            stories = entries.len(),
            "registered catalog"
        );
        self.entries.extend(entries);
        Ok(())
    }

    pub fn entries(&self) -> &[StoryEntry] {
        &self.entries
    }

    pub fn stories_of<'a>(
        &'a self,
        namespace: &'a str,
    ) -> impl Iterator<Item = &'a StoryEntry> + 'a {
        self.entries.iter().filter(move |e| e.namespace == namespace)
    }

    /// Find by `catalog/name`, where the catalog is a key or a full namespace
    pub fn find(&self, id: &str) -> Result<&StoryEntry> {
        let (catalog, name) = id
            .rsplit_once('/')
            .with_context(|| format!("Story id must look like <catalog>/<fixture>, got '{}'", id))?;
        let catalog =
            find_catalog(catalog).with_context(|| format!("Unknown catalog: {}", catalog))?;
        self.entries
            .iter()
            .find(|e| e.catalog == catalog.key && e.name == name)
            .with_context(|| format!("Fixture not found: {}/{}", catalog.key, name))
    }
}
