//! Arg rows: extracted type metadata combined with inferred controls

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::OnceLock;

use super::component::{Component, SbType};

/// Interactive editor used for an arg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    Boolean,
    Text,
    Number,
    Color,
    Date,
    Object,
    Radio,
    Select,
}

impl ControlKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlKind::Boolean => "boolean",
            ControlKind::Text => "text",
            ControlKind::Number => "number",
            ControlKind::Color => "color",
            ControlKind::Date => "date",
            ControlKind::Object => "object",
            ControlKind::Radio => "radio",
            ControlKind::Select => "select",
        }
    }
}

/// Everything known about one arg. Every field is optional so partial rows
/// from different sources can be layered with [`ArgRow::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub sb_type: Option<SbType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control: Option<ControlKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<Value>>,
}

impl ArgRow {
    /// Field-wise merge; whatever `later` sets wins
    pub fn merge(self, later: ArgRow) -> ArgRow {
        ArgRow {
            name: later.name.or(self.name),
            description: later.description.or(self.description),
            sb_type: later.sb_type.or(self.sb_type),
            required: later.required.or(self.required),
            default_value: later.default_value.or(self.default_value),
            control: later.control.or(self.control),
            options: later.options.or(self.options),
        }
    }
}

/// Arg name to row, in prop declaration order
pub type ArgRows = IndexMap<String, ArgRow>;

/// One row per declared prop, carrying its type metadata
pub fn extract_arg_types(component: &Component) -> ArgRows {
    component
        .props
        .iter()
        .map(|prop| {
            let row = ArgRow {
                name: Some(prop.name.clone()),
                description: prop.description.clone(),
                sb_type: Some(prop.sb_type.clone()),
                required: Some(prop.required),
                default_value: prop.default_value.clone(),
                ..Default::default()
            };
            (prop.name.clone(), row)
        })
        .collect()
}

fn color_matcher() -> &'static Regex {
    static MATCHER: OnceLock<Regex> = OnceLock::new();
    MATCHER.get_or_init(|| Regex::new(r"(?i)(background|color)$").expect("valid regex"))
}

fn date_matcher() -> &'static Regex {
    static MATCHER: OnceLock<Regex> = OnceLock::new();
    MATCHER.get_or_init(|| Regex::new(r"Date$").expect("valid regex"))
}

fn infer_control(name: &str, row: &ArgRow) -> Option<ArgRow> {
    let sb_type = row.sb_type.as_ref()?;

    let control = |kind| ArgRow {
        control: Some(kind),
        ..Default::default()
    };

    if color_matcher().is_match(name) {
        if matches!(sb_type, SbType::String) {
            return Some(control(ControlKind::Color));
        }
        tracing::debug!(arg = name, "color-like name on a non-string arg");
    }
    if date_matcher().is_match(name) {
        return Some(control(ControlKind::Date));
    }

    match sb_type {
        SbType::Array(_) => Some(control(ControlKind::Object)),
        SbType::Boolean => Some(control(ControlKind::Boolean)),
        SbType::String => Some(control(ControlKind::Text)),
        SbType::Number => Some(control(ControlKind::Number)),
        SbType::Enum(values) => Some(ArgRow {
            control: Some(if values.len() <= 5 {
                ControlKind::Radio
            } else {
                ControlKind::Select
            }),
            options: Some(values.clone()),
            ..Default::default()
        }),
        SbType::Function | SbType::Symbol | SbType::Void => None,
        _ => Some(control(ControlKind::Object)),
    }
}

/// Control rows for every arg that can be edited
pub fn infer_controls(arg_types: &ArgRows) -> ArgRows {
    arg_types
        .iter()
        .filter_map(|(name, row)| infer_control(name, row).map(|c| (name.clone(), c)))
        .collect()
}

/// Union of both row sets; colliding keys are merged with `later` winning
pub fn combine_parameters(base: ArgRows, later: ArgRows) -> ArgRows {
    let mut combined = base;
    for (name, row) in later {
        match combined.get_mut(&name) {
            Some(existing) => {
                let current = std::mem::take(existing);
                *existing = current.merge(row);
            }
            None => {
                combined.insert(name, row);
            }
        }
    }
    combined
}
