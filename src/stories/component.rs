//! Components and their static prop metadata

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structural type of an arg
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", content = "value", rename_all = "lowercase")]
pub enum SbType {
    Boolean,
    String,
    Number,
    Function,
    Symbol,
    Void,
    Array(Box<SbType>),
    Object(IndexMap<String, SbType>),
    Enum(Vec<Value>),
    Union(Vec<SbType>),
    Intersection(Vec<SbType>),
    Other(String),
}

impl SbType {
    /// Short human-readable form used in the args table
    pub fn summary(&self) -> String {
        match self {
            SbType::Boolean => "boolean".to_string(),
            SbType::String => "string".to_string(),
            SbType::Number => "number".to_string(),
            SbType::Function => "func".to_string(),
            SbType::Symbol => "symbol".to_string(),
            SbType::Void => "void".to_string(),
            SbType::Array(of) => match of.as_ref() {
                SbType::Union(_) | SbType::Intersection(_) => format!("({})[]", of.summary()),
                _ => format!("{}[]", of.summary()),
            },
            SbType::Object(fields) if fields.is_empty() => "object".to_string(),
            SbType::Object(fields) => {
                let inner: Vec<String> = fields
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k, v.summary()))
                    .collect();
                format!("{{ {} }}", inner.join("; "))
            }
            SbType::Enum(values) => values
                .iter()
                .map(Value::to_string)
                .collect::<Vec<_>>()
                .join(" | "),
            SbType::Union(types) => join_summaries(types, " | "),
            SbType::Intersection(types) => join_summaries(types, " & "),
            SbType::Other(raw) => raw.clone(),
        }
    }
}

fn join_summaries(types: &[SbType], sep: &str) -> String {
    types.iter().map(SbType::summary).collect::<Vec<_>>().join(sep)
}

/// One declared prop of a component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropDef {
    pub name: String,
    pub sb_type: SbType,
    pub description: Option<String>,
    pub default_value: Option<Value>,
    pub required: bool,
}

impl PropDef {
    pub fn new(name: &str, sb_type: SbType) -> Self {
        Self {
            name: name.to_string(),
            sb_type,
            description: None,
            default_value: None,
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn describe(mut self, text: &str) -> Self {
        self.description = Some(text.to_string());
        self
    }

    pub fn default(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }
}

/// An example component with its prop metadata attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub props: Vec<PropDef>,
}

impl Component {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            props: Vec::new(),
        }
    }

    pub fn prop(mut self, prop: PropDef) -> Self {
        self.props.push(prop);
        self
    }
}
