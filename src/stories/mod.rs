//! Story harness - arg tables for example components
//!
//! Fixtures are registered at compile time in three catalogs
//! (`typescript`, `proptypes`, `issues`). Each registered story derives its
//! arg rows from the fixture's prop metadata and renders them as a table.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use storykit::stories::{Story, StoryBook};
//!
//! let book = StoryBook::with_builtin_catalogs()?;
//! let mut story = book.find("typescript/scalars")?.story();
//! story.update_args([("number".to_string(), json!(5))]);
//!
//! if let Story::Args(args_story) = &story {
//!     assert_eq!(args_story.args().get("number"), Some(&json!(5)));
//!     assert_eq!(args_story.args().get("bool"), Some(&json!(null)));
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

mod arg_types;
mod args;
mod catalog;
mod component;
mod fixtures;
mod story;

pub use arg_types::{
    combine_parameters, extract_arg_types, infer_controls, ArgRow, ArgRows, ControlKind,
};
pub use args::ArgsState;
pub use catalog::{
    catalogs, find_catalog, Catalog, CatalogKind, Fixture, StoryBook, StoryEntry, ISSUES,
    PROPTYPES, TYPESCRIPT,
};
pub use component::{Component, PropDef, SbType};
pub use story::{args_table_props, ArgsStory, ArgsTableProps, IssueStory, Story};
