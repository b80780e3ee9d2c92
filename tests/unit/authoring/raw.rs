use super::*;
use crate::expression::compile::compile;

fn parse(json: &str) -> RawElement {
    serde_json::from_str(json).unwrap()
}

fn eval(json: &str, bindings: &Bindings) -> f64 {
    let op = parse(json).resolve(bindings).unwrap();
    compile(&op).unwrap().eval()
}

#[test]
fn element_shapes_parse() {
    assert_eq!(parse("3"), RawElement::Number(3.0));
    assert_eq!(
        parse(r#"{"ref":"x"}"#),
        RawElement::Ref(RawRef {
            name: "x".to_string()
        })
    );
    match parse(r#"{"kind":"add","a":1,"b":{"ref":"x"}}"#) {
        RawElement::Node(node) => {
            assert_eq!(node.kind.as_deref(), Some("add"));
            assert_eq!(node.a, Some(RawElement::Number(1.0)));
        }
        other => panic!("expected node, got {other:?}"),
    }
}

#[test]
fn missing_kind_is_missing_element_type() {
    let err = parse(r#"{"a":1,"b":2}"#)
        .resolve(&Bindings::new())
        .unwrap_err();
    assert!(matches!(err, ExprError::MissingElementType));
}

#[test]
fn unknown_kind_is_rejected() {
    let err = parse(r#"{"kind":"lerp","a":1,"b":2}"#)
        .resolve(&Bindings::new())
        .unwrap_err();
    assert!(matches!(err, ExprError::UnknownNodeKind(k) if k == "lerp"));
}

#[test]
fn unknown_kind_deep_in_tree_is_rejected() {
    let json = r#"{"kind":"cond","expr":0,"ifNode":{"kind":"nope"},"elseNode":1}"#;
    let err = parse(json).resolve(&Bindings::new()).unwrap_err();
    assert!(matches!(err, ExprError::UnknownNodeKind(_)));
}

#[test]
fn zero_literal_counts_as_present() {
    let b = Bindings::new();
    assert_eq!(eval(r#"{"kind":"add","a":0,"b":0}"#, &b), 0.0);
    assert_eq!(eval(r#"{"kind":"eq","left":0,"right":0}"#, &b), 1.0);
}

#[test]
fn absent_b_fails_at_compile() {
    let op = parse(r#"{"kind":"multiply","a":2}"#)
        .resolve(&Bindings::new())
        .unwrap();
    assert!(matches!(
        compile(&op),
        Err(ExprError::MissingOperand {
            kind: "multiply",
            field: "b"
        })
    ));
}

#[test]
fn names_resolve_against_bindings() {
    let mut b = Bindings::new();
    let x = b.declare("x", Some(2.0));
    b.declare("out", None);

    let json = r#"{"kind":"set","target":"out",
        "source":{"kind":"multiply","a":{"kind":"value","name":"x"},"b":{"ref":"x"},
                  "others":[{"kind":"number","value":0.5}]}}"#;
    assert_eq!(eval(json, &b), 2.0);
    assert_eq!(b.value("out").unwrap().read(), Some(2.0));
    x.set(4.0);
    assert_eq!(eval(json, &b), 8.0);
}

#[test]
fn unbound_names_fail_resolution() {
    let b = Bindings::new();
    let err = parse(r#"{"ref":"ghost"}"#).resolve(&b).unwrap_err();
    assert!(matches!(err, ExprError::UnknownValue(n) if n == "ghost"));

    let err = parse(r#"{"kind":"call","callback":"ghost"}"#)
        .resolve(&b)
        .unwrap_err();
    assert!(matches!(err, ExprError::UnknownCallback(_)));
}

#[test]
fn number_node_requires_value() {
    let err = parse(r#"{"kind":"number"}"#)
        .resolve(&Bindings::new())
        .unwrap_err();
    assert!(matches!(
        err,
        ExprError::MissingOperand {
            kind: "number",
            field: "value"
        }
    ));
}

#[test]
fn optional_collections_default_to_empty() {
    let b = Bindings::new();
    assert_eq!(eval(r#"{"kind":"block"}"#, &b), 0.0);
    assert_eq!(eval(r#"{"kind":"call"}"#, &b), 0.0);
    assert_eq!(eval(r#"{"kind":"cond","expr":0,"ifNode":5}"#, &b), 0.0);
}
