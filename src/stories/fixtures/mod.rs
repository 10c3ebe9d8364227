//! Built-in example components
//!
//! Each submodule exports `IDS` (story order) and `FIXTURES` (the factory
//! registry) for one catalog.

pub mod issues;
pub mod proptypes;
pub mod typescript;

use serde_json::Value;

use super::component::SbType;

fn enum_of(values: &[&str]) -> SbType {
    SbType::Enum(values.iter().map(|v| Value::String(v.to_string())).collect())
}

fn array_of(of: SbType) -> SbType {
    SbType::Array(Box::new(of))
}

fn object(fields: &[(&str, SbType)]) -> SbType {
    SbType::Object(
        fields
            .iter()
            .map(|(name, ty)| (name.to_string(), ty.clone()))
            .collect(),
    )
}

fn other(raw: &str) -> SbType {
    SbType::Other(raw.to_string())
}
