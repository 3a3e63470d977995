//! Integration tests for variant selector construction: dashed modifiers,
//! native pseudo-class forms, and their combinations.

use scopestyle::{PseudoClasses, compile, compile_with, spec};

#[test]
fn test_recognized_pseudo_gets_both_forms() {
    let style = compile(&spec! { focus: { color: "red" } }, "style").unwrap();
    let root = style.root_class();

    assert_eq!(style.rules().len(), 2);
    assert_eq!(
        style.rules()[1],
        format!(".{root}--focus, .{root}:focus {{ color:red; }}")
    );
}

#[test]
fn test_arbitrary_variant_gets_only_dashed_form() {
    let style = compile(&spec! { selected: { color: "red" } }, "style").unwrap();
    let root = style.root_class();
    assert_eq!(style.rules()[1], format!(".{root}--selected {{ color:red; }}"));
}

#[test]
fn test_nested_arbitrary_variants_chain_dashes() {
    let style = compile(
        &spec! { x: { color: "red", y: { color: "white" } } },
        "style",
    )
    .unwrap();
    let root = style.root_class();

    assert_eq!(style.rules().len(), 3);
    assert_eq!(style.rules()[1], format!(".{root}--x {{ color:red; }}"));
    assert_eq!(style.rules()[2], format!(".{root}--x--y {{ color:white; }}"));
}

#[test]
fn test_pseudo_chain_emits_all_equivalent_forms() {
    let style = compile(
        &spec! { firstChild: { color: "red", hover: { color: "white" } } },
        "style",
    )
    .unwrap();
    let root = style.root_class();

    assert_eq!(style.rules().len(), 3);
    assert_eq!(
        style.rules()[1],
        format!(".{root}--firstChild, .{root}:first-child {{ color:red; }}")
    );
    assert_eq!(
        style.rules()[2],
        format!(
            ".{root}--firstChild--hover, .{root}:first-child:hover, .{root}--firstChild:hover {{ color:white; }}"
        )
    );
}

#[test]
fn test_mixed_chain_keeps_arbitrary_segment_dashed() {
    let style = compile(
        &spec! { x: { hover: { color: "white" } } },
        "style",
    )
    .unwrap();
    let root = style.root_class();

    assert_eq!(
        style.rules()[2],
        format!(".{root}--x--hover, .{root}--x:hover {{ color:white; }}")
    );
}

#[test]
fn test_variant_rule_holds_only_its_own_declarations() {
    let style = compile(
        &spec! { x: { color: "red", y: { width: 4 } } },
        "style",
    )
    .unwrap();

    // x's rule carries color only; y's width lives in y's own rule.
    assert!(style.rules()[1].contains("color:red"));
    assert!(!style.rules()[1].contains("width"));
    assert!(style.rules()[2].contains("width:4px"));
}

#[test]
fn test_variant_with_no_declarations_still_emits_a_rule() {
    let style = compile(&spec! { x: {} }, "style").unwrap();
    let root = style.root_class();

    assert_eq!(style.rules().len(), 2);
    assert_eq!(style.rules()[1], format!(".{root}--x {{ }}"));
}

#[test]
fn test_custom_pseudo_table_is_consulted() {
    let mut table = PseudoClasses::default();
    table.register("placeholderShown", ":placeholder-shown");

    let style = compile_with(
        &spec! { placeholderShown: { color: "gray" } },
        "input",
        &table,
    )
    .unwrap();
    let root = style.root_class();

    assert_eq!(
        style.rules()[1],
        format!(".{root}--placeholderShown, .{root}:placeholder-shown {{ color:gray; }}")
    );
}

#[test]
fn test_empty_pseudo_table_makes_every_variant_arbitrary() {
    let style = compile_with(
        &spec! { hover: { color: "white" } },
        "style",
        &PseudoClasses::empty(),
    )
    .unwrap();
    let root = style.root_class();

    assert_eq!(style.rules()[1], format!(".{root}--hover {{ color:white; }}"));
}
