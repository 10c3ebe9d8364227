//! Renderable stories
//!
//! An [`ArgsStory`] owns its args state and renders a debug table next to the
//! args table. An [`IssueStory`] renders the args table alone and only
//! reports updates as an `updateArgs` action.

use prettytable::{format, row, Table};
use serde::Serialize;
use serde_json::Value;

use super::arg_types::{combine_parameters, extract_arg_types, infer_controls, ArgRows};
use super::args::ArgsState;
use super::component::Component;

/// Props handed to the args table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArgsTableProps {
    pub rows: ArgRows,
}

/// Rows for a component: extracted types combined with inferred controls
pub fn args_table_props(component: &Component) -> ArgsTableProps {
    let arg_types = extract_arg_types(component);
    let controls = infer_controls(&arg_types);
    ArgsTableProps {
        rows: combine_parameters(arg_types, controls),
    }
}

/// A story that keeps local edit state
#[derive(Debug, Clone)]
pub struct ArgsStory {
    component: String,
    rows: ArgRows,
    args: ArgsState,
}

impl ArgsStory {
    pub fn new(component: &Component) -> Self {
        let ArgsTableProps { rows } = args_table_props(component);
        let args = ArgsState::from_rows(&rows);
        Self {
            component: component.name.clone(),
            rows,
            args,
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn rows(&self) -> &ArgRows {
        &self.rows
    }

    pub fn args(&self) -> &ArgsState {
        &self.args
    }

    pub fn update_args<I>(&mut self, partial: I)
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        self.args.update_args(partial);
    }

    pub fn render(&self) -> String {
        let mut out = debug_table(&self.args).to_string();
        out.push('\n');
        out.push_str(&args_table(&self.rows, Some(&self.args)).to_string());
        out
    }
}

/// An issue-regression story: rows computed once, updates reported not stored
#[derive(Debug, Clone)]
pub struct IssueStory {
    props: ArgsTableProps,
}

impl IssueStory {
    pub fn new(props: ArgsTableProps) -> Self {
        Self { props }
    }

    pub fn rows(&self) -> &ArgRows {
        &self.props.rows
    }

    /// Report the update; returns the action payload
    pub fn update_args<I>(&self, partial: I) -> Value
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let payload: serde_json::Map<String, Value> = partial.into_iter().collect();
        let payload = Value::Object(payload);
        tracing::info!(action = "updateArgs", args = %payload, "story action");
        payload
    }

    pub fn render(&self) -> String {
        args_table(&self.props.rows, None).to_string()
    }
}

/// A story ready to render
#[derive(Debug, Clone)]
pub enum Story {
    Args(ArgsStory),
    Issue(IssueStory),
}

impl Story {
    pub fn rows(&self) -> &ArgRows {
        match self {
            Story::Args(story) => story.rows(),
            Story::Issue(story) => story.rows(),
        }
    }

    pub fn render(&self) -> String {
        match self {
            Story::Args(story) => story.render(),
            Story::Issue(story) => story.render(),
        }
    }

    /// Apply an update; issue stories hand back the reported action instead
    pub fn update_args<I>(&mut self, partial: I) -> Option<Value>
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        match self {
            Story::Args(story) => {
                story.update_args(partial);
                None
            }
            Story::Issue(story) => Some(story.update_args(partial)),
        }
    }

    /// JSON view of rows and current args
    pub fn to_json(&self) -> Value {
        let args = match self {
            Story::Args(story) => serde_json::to_value(story.args()).unwrap_or(Value::Null),
            Story::Issue(_) => Value::Object(Default::default()),
        };
        serde_json::json!({
            "rows": self.rows(),
            "args": args,
        })
    }
}

fn debug_table(args: &ArgsState) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row!["key", "val"]);
    for (key, value) in args.iter() {
        let rendered = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
        table.add_row(row![key, rendered]);
    }
    table
}

fn args_table(rows: &ArgRows, args: Option<&ArgsState>) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row!["Name", "Description", "Type", "Default", "Control", "Value"]);

    for (key, arg) in rows {
        let name = if arg.required == Some(true) {
            format!("{}*", key)
        } else {
            key.clone()
        };
        let sb_type = arg.sb_type.as_ref().map(|t| t.summary()).unwrap_or_default();
        let default = arg
            .default_value
            .as_ref()
            .map(Value::to_string)
            .unwrap_or_else(|| "-".to_string());
        let control = arg
            .control
            .map(|c| c.as_str().to_string())
            .unwrap_or_else(|| "-".to_string());
        let value = args
            .and_then(|a| a.get(key))
            .map(Value::to_string)
            .unwrap_or_default();

        table.add_row(row![
            name,
            arg.description.as_deref().unwrap_or(""),
            sb_type,
            default,
            control,
            value
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stories::arg_types::ControlKind;
    use crate::stories::component::{PropDef, SbType};
    use serde_json::json;

    fn button() -> Component {
        Component::new("Button")
            .prop(PropDef::new("label", SbType::String).required().describe("Button text"))
            .prop(PropDef::new("primary", SbType::Boolean).default(json!(false)))
            .prop(PropDef::new("onClick", SbType::Function))
    }

    #[test]
    fn test_args_table_props_rows() {
        let ArgsTableProps { rows } = args_table_props(&button());
        let keys: Vec<&String> = rows.keys().collect();
        assert_eq!(keys, vec!["label", "primary", "onClick"]);
        assert_eq!(rows["label"].control, Some(ControlKind::Text));
        assert_eq!(rows["onClick"].control, None);
        assert_eq!(rows["onClick"].sb_type, Some(SbType::Function));
    }

    #[test]
    fn test_args_story_initialises_null_args() {
        let story = ArgsStory::new(&button());
        assert_eq!(
            serde_json::to_value(story.args()).unwrap(),
            json!({"label": null, "primary": null, "onClick": null})
        );
    }

    #[test]
    fn test_render_shows_updated_value() {
        let mut story = ArgsStory::new(&button());
        story.update_args([("label".to_string(), json!("Hello"))]);
        let rendered = story.render();
        assert!(rendered.contains("\"Hello\""));
        assert!(rendered.contains("label*"));
        assert!(rendered.contains("Button text"));
    }

    #[test]
    fn test_issue_story_reports_without_storing() {
        let mut story = Story::Issue(IssueStory::new(args_table_props(&button())));
        let action = story.update_args([("primary".to_string(), json!(true))]);
        assert_eq!(action, Some(json!({"primary": true})));
        assert_eq!(story.to_json()["args"], json!({}));
    }

    #[test]
    fn test_story_json_view() {
        let mut story = Story::Args(ArgsStory::new(&button()));
        assert!(story.update_args([("primary".to_string(), json!(true))]).is_none());
        let view = story.to_json();
        assert_eq!(view["args"]["primary"], json!(true));
        assert_eq!(view["rows"]["primary"]["control"], json!("boolean"));
    }
}
