use super::*;
use crate::foundation::error::ExprError;

const COUNTER: &str = r#"{
    "values": { "count": 0, "out": null },
    "root": {
        "kind": "block",
        "nodes": [
            { "kind": "set", "target": "count",
              "source": { "kind": "add", "a": { "ref": "count" }, "b": 1 } },
            { "kind": "set", "target": "out",
              "source": { "kind": "modulo", "a": { "ref": "count" }, "b": 3 } }
        ]
    }
}"#;

#[test]
fn document_declares_values_and_compiles() {
    let mut b = Bindings::new();
    let root = compile_document(COUNTER, &mut b).unwrap();
    let results: Vec<f64> = (0..4).map(|_| root.eval()).collect();
    assert_eq!(results, vec![1.0, 2.0, 0.0, 1.0]);
    assert_eq!(b.snapshot().get("count"), Some(&Some(4.0)));
}

#[test]
fn host_bound_values_take_precedence() {
    let mut b = Bindings::new();
    let count = b.declare("count", Some(10.0));
    let root = compile_document(COUNTER, &mut b).unwrap();
    assert_eq!(root.eval(), 2.0);
    assert_eq!(count.get(), Some(11.0));
}

#[test]
fn failed_compile_leaves_bindings_untouched() {
    let json = r#"{
        "values": { "fresh": 1 },
        "root": { "kind": "add", "a": { "ref": "fresh" } }
    }"#;
    let mut b = Bindings::new();
    b.declare("host", Some(2.0));
    let err = compile_document(json, &mut b).unwrap_err();
    assert!(matches!(err, ExprError::MissingOperand { kind: "add", field: "b" }));
    assert!(!b.has_value("fresh"));
    assert_eq!(b.snapshot().len(), 1);
}

#[test]
fn options_are_honoured() {
    let json = r#"{
        "options": { "maxDepth": 1 },
        "root": { "kind": "abs", "v": { "kind": "abs", "v": -1 } }
    }"#;
    let err = compile_document(json, &mut Bindings::new()).unwrap_err();
    assert!(matches!(err, ExprError::DepthExceeded { limit: 1 }));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Document::from_json("{ \"root\": ").unwrap_err();
    assert!(matches!(err, ExprError::Serde(_)));
}

#[test]
fn missing_root_is_a_serde_error() {
    let err = Document::from_json(r#"{ "values": {} }"#).unwrap_err();
    assert!(err.to_string().contains("root"));
}
