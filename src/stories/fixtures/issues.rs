//! Regression fixtures, one per reported arg-table issue

use serde_json::json;

use super::{array_of, enum_of, object, other};
use crate::stories::catalog::Fixture;
use crate::stories::component::{Component, PropDef, SbType};

pub const IDS: &[&str] = &[
    "js-class-component",
    "ts-function-component",
    "9399-js-proptypes-shape",
    "8663-js-styled-components",
    "9626-js-default-values",
    "9668-js-proptypes-no-jsdoc",
    "8143-ts-react-fc-generics",
    "8143-ts-imported-types",
    "8279-js-styled-docgen",
    "8140-js-prop-types-oneof",
    "9023-js-hoc",
    "8740-ts-multi-props",
    "9556-ts-react-default-exports",
    "9592-ts-styled-props",
    "9591-ts-import-types",
    "9721-ts-deprecated-jsdoc",
    "9827-ts-default-values",
    "9586-js-react-memo",
    "9575-ts-camel-case",
    "9493-ts-display-name",
    "8894-9511-ts-forward-ref",
    "9465-ts-type-props",
    "8428-js-static-prop-types",
    "9764-ts-extend-props",
    "9922-ts-component-props",
];

pub const FIXTURES: &[Fixture] = &[
    Fixture { id: "js-class-component", load: js_class_component },
    Fixture { id: "ts-function-component", load: ts_function_component },
    Fixture { id: "9399-js-proptypes-shape", load: js_proptypes_shape },
    Fixture { id: "8663-js-styled-components", load: js_styled_components },
    Fixture { id: "9626-js-default-values", load: js_default_values },
    Fixture { id: "9668-js-proptypes-no-jsdoc", load: js_proptypes_no_jsdoc },
    Fixture { id: "8143-ts-react-fc-generics", load: ts_react_fc_generics },
    Fixture { id: "8143-ts-imported-types", load: ts_imported_types },
    Fixture { id: "8279-js-styled-docgen", load: js_styled_docgen },
    Fixture { id: "8140-js-prop-types-oneof", load: js_prop_types_oneof },
    Fixture { id: "9023-js-hoc", load: js_hoc },
    Fixture { id: "8740-ts-multi-props", load: ts_multi_props },
    Fixture { id: "9556-ts-react-default-exports", load: ts_react_default_exports },
    Fixture { id: "9592-ts-styled-props", load: ts_styled_props },
    Fixture { id: "9591-ts-import-types", load: ts_import_types },
    Fixture { id: "9721-ts-deprecated-jsdoc", load: ts_deprecated_jsdoc },
    Fixture { id: "9827-ts-default-values", load: ts_default_values },
    Fixture { id: "9586-js-react-memo", load: js_react_memo },
    Fixture { id: "9575-ts-camel-case", load: ts_camel_case },
    Fixture { id: "9493-ts-display-name", load: ts_display_name },
    Fixture { id: "8894-9511-ts-forward-ref", load: ts_forward_ref },
    Fixture { id: "9465-ts-type-props", load: ts_type_props },
    Fixture { id: "8428-js-static-prop-types", load: js_static_prop_types },
    Fixture { id: "9764-ts-extend-props", load: ts_extend_props },
    Fixture { id: "9922-ts-component-props", load: ts_component_props },
];

fn js_class_component() -> Component {
    Component::new("Button")
        .prop(PropDef::new("children", other("node")).required().describe("Button label"))
        .prop(PropDef::new("onClick", SbType::Function).describe("Click handler"))
        .prop(PropDef::new("disabled", SbType::Boolean).default(json!(false)))
}

fn ts_function_component() -> Component {
    Component::new("Button")
        .prop(PropDef::new("label", SbType::String).required())
        .prop(PropDef::new("primary", SbType::Boolean).default(json!(false)))
        .prop(PropDef::new("size", enum_of(&["small", "medium", "large"])).default(json!("medium")))
}

fn js_proptypes_shape() -> Component {
    Component::new("PropTypesShape")
        .prop(PropDef::new(
            "foo",
            object(&[("a", SbType::Number), ("b", SbType::String)]),
        ).describe("Nested shape"))
}

fn js_styled_components() -> Component {
    Component::new("StyledButton")
        .prop(PropDef::new("color", SbType::String).default(json!("tomato")))
        .prop(PropDef::new("as", other("elementType")))
}

fn js_default_values() -> Component {
    Component::new("DefaultValues")
        .prop(PropDef::new("stringProp", SbType::String).default(json!("hello")))
        .prop(PropDef::new("numberProp", SbType::Number).default(json!(42)))
        .prop(PropDef::new("arrayProp", array_of(SbType::Number)).default(json!([1, 2, 3])))
        .prop(PropDef::new("objectProp", object(&[("a", SbType::Number)])).default(json!({"a": 1})))
}

fn js_proptypes_no_jsdoc() -> Component {
    Component::new("NoJsDoc")
        .prop(PropDef::new("title", SbType::String))
        .prop(PropDef::new("count", SbType::Number))
}

fn ts_react_fc_generics() -> Component {
    Component::new("Generic")
        .prop(PropDef::new("items", array_of(other("T"))).required())
        .prop(PropDef::new("renderItem", SbType::Function).required())
}

fn ts_imported_types() -> Component {
    Component::new("ImportedTypes")
        .prop(PropDef::new("theme", other("Theme")).describe("Imported from ./types"))
        .prop(PropDef::new("variant", enum_of(&["outlined", "contained"])))
}

fn js_styled_docgen() -> Component {
    Component::new("StyledDocgen")
        .prop(
            PropDef::new("label", SbType::String)
                .describe("Documented through the styled wrapper"),
        )
        .prop(PropDef::new("padding", SbType::Number))
}

fn js_prop_types_oneof() -> Component {
    Component::new("OneOf")
        .prop(
            PropDef::new("blank", enum_of(&["a", "b", "c"]))
                .describe("oneOf with literal values"),
        )
        .prop(PropDef::new(
            "numbers",
            SbType::Enum(vec![json!(1), json!(2), json!(3), json!(4), json!(5), json!(6)]),
        ))
        .prop(PropDef::new("computed", other("oneOf(Object.keys(map))")))
}

fn js_hoc() -> Component {
    Component::new("withTheme(Button)")
        .prop(PropDef::new("label", SbType::String).required())
        .prop(PropDef::new("theme", object(&[("primary", SbType::String)])))
}

fn ts_multi_props() -> Component {
    Component::new("MultiProps")
        .prop(PropDef::new("firstProp", SbType::String).describe("From the first props interface"))
        .prop(
            PropDef::new("secondProp", SbType::Number)
                .describe("From the second props interface"),
        )
}

fn ts_react_default_exports() -> Component {
    Component::new("DefaultExport")
        .prop(PropDef::new("title", SbType::String).required())
        .prop(PropDef::new("subtitle", SbType::String))
}

fn ts_styled_props() -> Component {
    Component::new("StyledProps")
        .prop(PropDef::new("primary", SbType::Boolean))
        .prop(PropDef::new("backgroundColor", SbType::String))
}

fn ts_import_types() -> Component {
    Component::new("ImportTypes")
        .prop(PropDef::new("user", other("import('./types').User")).required())
}

fn ts_deprecated_jsdoc() -> Component {
    Component::new("Deprecated")
        .prop(PropDef::new("oldProp", SbType::String).describe("@deprecated Use newProp instead"))
        .prop(PropDef::new("newProp", SbType::String))
}

fn ts_default_values() -> Component {
    Component::new("TsDefaults")
        .prop(PropDef::new("name", SbType::String).default(json!("storybook")))
        .prop(PropDef::new("enabled", SbType::Boolean).default(json!(true)))
        .prop(PropDef::new("ratio", SbType::Number).default(json!(0.5)))
}

fn js_react_memo() -> Component {
    Component::new("Memo(Button)")
        .prop(PropDef::new("label", SbType::String).required())
        .prop(PropDef::new("onClick", SbType::Function))
}

fn ts_camel_case() -> Component {
    Component::new("CamelCase")
        .prop(PropDef::new("camelCaseProp", SbType::String))
        .prop(PropDef::new("anotherCamelCaseProp", SbType::Boolean))
}

fn ts_display_name() -> Component {
    Component::new("DisplayNameOverride")
        .prop(PropDef::new("text", SbType::String).required())
}

fn ts_forward_ref() -> Component {
    Component::new("ForwardRef(Input)")
        .prop(PropDef::new("value", SbType::String))
        .prop(PropDef::new("placeholder", SbType::String).default(json!("Type here")))
        .prop(PropDef::new("onChange", SbType::Function))
}

fn ts_type_props() -> Component {
    Component::new("TypeProps")
        .prop(
            PropDef::new("a", SbType::String)
                .describe("Declared with a type alias, not an interface"),
        )
        .prop(PropDef::new("b", SbType::Number))
}

fn js_static_prop_types() -> Component {
    Component::new("StaticPropTypes")
        .prop(
            PropDef::new("title", SbType::String)
                .required()
                .describe("static propTypes on the class"),
        )
        .prop(PropDef::new("items", array_of(SbType::String)))
}

fn ts_extend_props() -> Component {
    Component::new("ExtendProps")
        .prop(PropDef::new("label", SbType::String).required())
        .prop(
            PropDef::new("disabled", SbType::Boolean)
                .describe("Inherited from ButtonHTMLAttributes"),
        )
        .prop(PropDef::new("type", enum_of(&["button", "submit", "reset"])))
}

fn ts_component_props() -> Component {
    Component::new("WithComponentProps")
        .prop(PropDef::new("buttonProps", other("ComponentProps<typeof Button>")))
        .prop(PropDef::new("spacing", SbType::Number).default(json!(8)))
}
