//! Components typed with TypeScript interfaces

use serde_json::json;

use super::{array_of, enum_of, object, other};
use crate::stories::catalog::Fixture;
use crate::stories::component::{Component, PropDef, SbType};

pub const IDS: &[&str] = &[
    "aliases",
    "arrays",
    "enums",
    "functions",
    "interfaces",
    "intersections",
    "records",
    "scalars",
    "tuples",
    "unions",
];

pub const FIXTURES: &[Fixture] = &[
    Fixture { id: "aliases", load: aliases },
    Fixture { id: "arrays", load: arrays },
    Fixture { id: "enums", load: enums },
    Fixture { id: "functions", load: functions },
    Fixture { id: "interfaces", load: interfaces },
    Fixture { id: "intersections", load: intersections },
    Fixture { id: "records", load: records },
    Fixture { id: "scalars", load: scalars },
    Fixture { id: "tuples", load: tuples },
    Fixture { id: "unions", load: unions },
];

fn aliases() -> Component {
    Component::new("Aliases")
        .prop(
            PropDef::new("typeAlias", SbType::String)
                .required()
                .describe("type StringAlias = string"),
        )
        .prop(PropDef::new("numberAlias", SbType::Number).describe("type NumberAlias = number"))
        .prop(
            PropDef::new("functionAlias", SbType::Function)
                .describe("type Handler = (e: Event) => void"),
        )
}

fn arrays() -> Component {
    Component::new("Arrays")
        .prop(PropDef::new("arrayOfPrimitive", array_of(SbType::String)).required())
        .prop(PropDef::new(
            "arrayOfComplexObject",
            array_of(object(&[("name", SbType::String), ("age", SbType::Number)])),
        ))
        .prop(PropDef::new(
            "arrayOfUnion",
            array_of(SbType::Union(vec![SbType::String, SbType::Number])),
        ))
        .prop(PropDef::new("genericArray", array_of(other("T"))))
}

fn enums() -> Component {
    Component::new("Enums")
        .prop(PropDef::new("size", enum_of(&["small", "medium", "large"])).default(json!("medium")))
        .prop(PropDef::new("numericEnum", SbType::Enum(vec![json!(0), json!(1), json!(2)])))
        .prop(PropDef::new(
            "direction",
            enum_of(&["north", "north-east", "east", "south-east", "south", "west"]),
        ))
}

fn functions() -> Component {
    Component::new("Functions")
        .prop(PropDef::new("onClick", SbType::Function).describe("Click handler"))
        .prop(PropDef::new("onChange", SbType::Function).required())
        .prop(
            PropDef::new("render", SbType::Function)
                .describe("(props: RenderProps) => ReactNode"),
        )
}

fn interfaces() -> Component {
    Component::new("Interfaces")
        .prop(
            PropDef::new("person", object(&[("name", SbType::String), ("email", SbType::String)]))
                .required()
                .describe("interface Person"),
        )
        .prop(PropDef::new(
            "address",
            object(&[("street", SbType::String), ("zip", SbType::Number)]),
        ))
        .prop(PropDef::new("empty", object(&[])))
}

fn intersections() -> Component {
    Component::new("Intersections")
        .prop(PropDef::new(
            "intersectionType",
            SbType::Intersection(vec![
                object(&[("a", SbType::String)]),
                object(&[("b", SbType::Number)]),
            ]),
        ))
        .prop(PropDef::new(
            "withNamedTypes",
            SbType::Intersection(vec![other("ItemInterface"), other("PersonInterface")]),
        ))
}

fn records() -> Component {
    Component::new("Records")
        .prop(PropDef::new("recordOfString", other("Record<string, string>")))
        .prop(PropDef::new("recordOfComplex", other("Record<string, { id: number }>")).required())
}

fn scalars() -> Component {
    Component::new("Scalars")
        .prop(PropDef::new("any", other("any")))
        .prop(PropDef::new("bool", SbType::Boolean).default(json!(false)))
        .prop(PropDef::new("number", SbType::Number).default(json!(10)))
        .prop(PropDef::new("string", SbType::String).required().default(json!("hello")))
        .prop(PropDef::new("symbol", SbType::Symbol))
        .prop(
            PropDef::new("backgroundColor", SbType::String)
                .describe("Matched by the color control"),
        )
        .prop(PropDef::new("createdDate", SbType::String).describe("Matched by the date control"))
}

fn tuples() -> Component {
    Component::new("Tuples")
        .prop(PropDef::new("tupleOfPrimitive", other("[string, number]")).required())
        .prop(PropDef::new("tupleWithComplexType", other("[string, { id: number }]")))
}

fn unions() -> Component {
    Component::new("Unions")
        .prop(
            PropDef::new("kind", enum_of(&["default", "action"]))
                .describe("String literal union"),
        )
        .prop(PropDef::new("inlinedNumericLiteralUnion", SbType::Enum(vec![json!(0), json!(1)])))
        .prop(PropDef::new(
            "mixed",
            SbType::Union(vec![SbType::String, SbType::Number, SbType::Boolean]),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stories::arg_types::ControlKind;
    use crate::stories::story::args_table_props;

    #[test]
    fn test_scalars_controls() {
        let rows = args_table_props(&scalars()).rows;
        assert_eq!(rows["bool"].control, Some(ControlKind::Boolean));
        assert_eq!(rows["backgroundColor"].control, Some(ControlKind::Color));
        assert_eq!(rows["createdDate"].control, Some(ControlKind::Date));
        assert_eq!(rows["symbol"].control, None);
        assert_eq!(rows["any"].control, Some(ControlKind::Object));
    }

    #[test]
    fn test_enums_controls() {
        let rows = args_table_props(&enums()).rows;
        assert_eq!(rows["size"].control, Some(ControlKind::Radio));
        assert_eq!(rows["direction"].control, Some(ControlKind::Select));
    }
}
