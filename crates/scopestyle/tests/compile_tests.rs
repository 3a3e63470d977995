//! Integration tests for spec compilation: rule shapes, ordering, value
//! resolution, and naming.

use scopestyle::{CompileError, Scalar, SpecValue, StyleSpec, ToCss, Value, compile, spec};

/// The root rule with the minted class substituted out, for content
/// comparisons across compilations.
fn root_rule(spec: &StyleSpec) -> String {
    let style = compile(spec, "style").unwrap();
    style.rules()[0].replace(style.root_class(), "ROOT")
}

#[test]
fn test_root_rule_shape() {
    let style = compile(&spec! { width: 10, color: "red" }, "style").unwrap();
    let root = style.root_class();
    assert_eq!(
        style.rules()[0],
        format!(".{root} {{ box-sizing:border-box;width:10px;color:red;-moz-box-sizing:border-box; }}")
    );
}

#[test]
fn test_root_class_format() {
    let style = compile(&spec! { width: 10 }, "style").unwrap();
    let root = style.root_class();
    assert!(root.starts_with("Style_style"));
    assert!(root["Style_style".len()..].parse::<u64>().is_ok());
}

#[test]
fn test_root_rule_is_always_first() {
    let style = compile(
        &spec! {
            hover: { color: "white" },
            width: 10,
        },
        "style",
    )
    .unwrap();
    // The hover key comes first in the spec, but the root rule still leads.
    assert!(style.rules()[0].contains("box-sizing:border-box"));
    assert!(style.rules()[1].contains(":hover"));
}

#[test]
fn test_empty_spec_still_emits_fixed_fragments() {
    let style = compile(&spec! {}, "style").unwrap();
    let root = style.root_class();
    assert_eq!(
        style.rules(),
        [format!(".{root} {{ box-sizing:border-box;-moz-box-sizing:border-box; }}")]
    );
}

#[test]
fn test_array_values_fan_out() {
    let style = compile(&spec! { color: [], width: [1, 10] }, "style").unwrap();
    assert!(style.rules()[0].contains("color:;width:1px;width:10px"));
}

#[test]
fn test_camel_case_properties_hyphenate() {
    let style = compile(&spec! { fontSize: 12, backgroundColor: "blue" }, "style").unwrap();
    assert!(style.rules()[0].contains("font-size:12px"));
    assert!(style.rules()[0].contains("background-color:blue"));
}

#[test]
fn test_px_suffix_is_unconditional() {
    // Even a key that is not a real CSS property gets the suffix.
    let style = compile(&spec! { x: 3 }, "style").unwrap();
    assert!(style.rules()[0].contains("x:3px"));
}

#[test]
fn test_rule_count_is_one_plus_variant_nodes() {
    let style = compile(
        &spec! {
            color: "red",
            x: { color: "blue", y: { color: "white" } },
            hover: { width: 1 },
        },
        "style",
    )
    .unwrap();
    // Root plus x, x.y, and hover.
    assert_eq!(style.rules().len(), 4);
}

#[derive(Debug)]
struct Em(f64);

impl ToCss for Em {
    fn to_css(&self) -> Scalar {
        Scalar::Text(format!("{}em", self.0))
    }
}

#[derive(Debug)]
struct Doubled(f64);

impl ToCss for Doubled {
    fn to_css(&self) -> Scalar {
        Scalar::Number(self.0 * 2.0)
    }
}

#[test]
fn test_convertible_values_convert_once() {
    let mut spec = StyleSpec::new();
    spec.set("fontSize", SpecValue::Leaf(Value::convertible(Em(1.5))));
    let style = compile(&spec, "style").unwrap();
    assert!(style.rules()[0].contains("font-size:1.5em"));
}

#[test]
fn test_converted_numbers_still_take_px() {
    let mut spec = StyleSpec::new();
    spec.set("margin", SpecValue::Leaf(Value::convertible(Doubled(8.0))));
    let style = compile(&spec, "style").unwrap();
    assert!(style.rules()[0].contains("margin:16px"));
}

#[test]
fn test_convertibles_inside_arrays() {
    let mut spec = StyleSpec::new();
    spec.set(
        "lineHeight",
        SpecValue::Leaf(Value::List(vec![
            Value::from(20),
            Value::convertible(Em(1.2)),
        ])),
    );
    let style = compile(&spec, "style").unwrap();
    assert!(style.rules()[0].contains("line-height:20px;line-height:1.2em"));
}

#[test]
fn test_malformed_value_aborts_whole_compile() {
    let mut spec = StyleSpec::new();
    spec.set("color", SpecValue::Leaf(Value::from("red")));
    spec.set(
        "margin",
        SpecValue::Leaf(Value::List(vec![Value::List(vec![Value::from(1)])])),
    );
    let err = compile(&spec, "style").unwrap_err();
    assert!(matches!(err, CompileError::Value { property, .. } if property == "margin"));
}

#[test]
fn test_recompilation_is_structurally_identical_but_uniquely_named() {
    let spec = spec! {
        width: 10,
        hover: { color: "white" },
    };
    let first = compile(&spec, "style").unwrap();
    let second = compile(&spec, "style").unwrap();

    assert_ne!(first.root_class(), second.root_class());

    let normalize = |style: &scopestyle::CompiledStyle| -> Vec<String> {
        style
            .rules()
            .iter()
            .map(|rule| rule.replace(style.root_class(), "ROOT"))
            .collect()
    };
    assert_eq!(normalize(&first), normalize(&second));
}

#[test]
fn test_declaration_order_follows_spec_order() {
    assert!(root_rule(&spec! { width: 1, height: 2 })
        .contains("width:1px;height:2px"));
    assert!(root_rule(&spec! { height: 2, width: 1 })
        .contains("height:2px;width:1px"));
}

#[test]
fn test_compile_from_json_spec() {
    let json = r#"{ "width": 10, "color": "red", "focus": { "color": "blue" } }"#;
    let spec: StyleSpec = serde_json::from_str(json).unwrap();
    let style = compile(&spec, "panel").unwrap();

    assert_eq!(style.rules().len(), 2);
    assert!(style.rules()[0].contains("width:10px;color:red"));
    assert!(style.rules()[1].contains(":focus"));
}

#[test]
fn test_to_css_concatenates_all_rules() {
    let style = compile(&spec! { width: 10, hover: { color: "white" } }, "style").unwrap();
    let css = style.to_css();
    assert_eq!(css, style.rules().join("\n"));
}
