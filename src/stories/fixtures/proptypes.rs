//! Components typed with runtime prop-types declarations

use serde_json::json;

use super::{array_of, enum_of, object, other};
use crate::stories::catalog::Fixture;
use crate::stories::component::{Component, PropDef, SbType};

pub const IDS: &[&str] = &["arrays", "enums", "misc", "objects", "react", "scalars"];

pub const FIXTURES: &[Fixture] = &[
    Fixture { id: "arrays", load: arrays },
    Fixture { id: "enums", load: enums },
    Fixture { id: "misc", load: misc },
    Fixture { id: "objects", load: objects },
    Fixture { id: "react", load: react },
    Fixture { id: "scalars", load: scalars },
];

fn arrays() -> Component {
    Component::new("PropTypesArrays")
        .prop(PropDef::new("optionalArray", array_of(other("any"))).describe("PropTypes.array"))
        .prop(
            PropDef::new("arrayOfStrings", array_of(SbType::String))
                .describe("PropTypes.arrayOf(PropTypes.string)"),
        )
        .prop(PropDef::new("arrayOfShape", array_of(object(&[("active", SbType::Boolean)]))))
        .prop(PropDef::new("requiredArray", array_of(SbType::Number)).required())
}

fn enums() -> Component {
    Component::new("PropTypesEnums")
        .prop(PropDef::new("oneOfString", enum_of(&["News", "Photos"])).describe("PropTypes.oneOf"))
        .prop(PropDef::new("oneOfNumber", SbType::Enum(vec![json!(1), json!(2), json!(3)])))
        .prop(
            PropDef::new("oneOfType", SbType::Union(vec![SbType::String, SbType::Number]))
                .describe("PropTypes.oneOfType"),
        )
}

fn misc() -> Component {
    Component::new("PropTypesMisc")
        .prop(PropDef::new("optionalAny", other("any")))
        .prop(PropDef::new("customProp", other("custom")).describe("Custom validator"))
        .prop(
            PropDef::new("instanceOf", other("Message"))
                .describe("PropTypes.instanceOf(Message)"),
        )
}

fn objects() -> Component {
    Component::new("PropTypesObjects")
        .prop(PropDef::new("optionalObject", object(&[])))
        .prop(PropDef::new("objectOf", other("objectOf(number)")))
        .prop(PropDef::new(
            "shape",
            object(&[("color", SbType::String), ("fontSize", SbType::Number)]),
        ))
        .prop(PropDef::new("exact", object(&[("name", SbType::String)])).required())
}

fn react() -> Component {
    Component::new("PropTypesReact")
        .prop(PropDef::new("children", other("node")).describe("Anything that can be rendered"))
        .prop(PropDef::new("element", other("element")))
        .prop(PropDef::new("elementType", other("elementType")))
}

fn scalars() -> Component {
    Component::new("PropTypesScalars")
        .prop(PropDef::new("optionalBool", SbType::Boolean).default(json!(true)))
        .prop(PropDef::new("optionalFunc", SbType::Function))
        .prop(PropDef::new("optionalNumber", SbType::Number))
        .prop(PropDef::new("optionalString", SbType::String).default(json!("Default")))
        .prop(PropDef::new("optionalSymbol", SbType::Symbol))
        .prop(PropDef::new("requiredString", SbType::String).required())
}
