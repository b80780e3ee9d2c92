use super::*;
use crate::external::value::DerivedValue;

#[test]
fn declare_and_resolve_values() {
    let mut b = Bindings::new();
    let x = b.declare("x", Some(1.5));
    b.declare("y", None);

    assert_eq!(b.value("x").unwrap().read(), Some(1.5));
    assert_eq!(b.value("y").unwrap().read(), None);
    x.set(2.0);
    assert_eq!(b.snapshot().get("x"), Some(&Some(2.0)));
}

#[test]
fn unknown_names_fail() {
    let b = Bindings::new();
    assert!(matches!(b.value("nope"), Err(ExprError::UnknownValue(n)) if n == "nope"));
    assert!(matches!(b.callback("cb"), Err(ExprError::UnknownCallback(n)) if n == "cb"));
}

#[test]
fn assign_reports_read_only_values() {
    let mut b = Bindings::new();
    b.declare("x", None);
    b.bind_value("clock", Rc::new(DerivedValue::new(|| Some(0.25))));

    assert!(b.assign("x", 3.0).unwrap());
    assert_eq!(b.value("x").unwrap().read(), Some(3.0));
    assert!(!b.assign("clock", 3.0).unwrap());
    assert!(b.assign("missing", 1.0).is_err());
}

#[test]
fn bound_callbacks_are_shared() {
    let hits = Rc::new(std::cell::Cell::new(0));
    let h = hits.clone();
    let mut b = Bindings::new();
    b.bind_callback("tick", Callback::new(move |_| h.set(h.get() + 1)));

    b.callback("tick").unwrap().invoke(&[]);
    b.callback("tick").unwrap().invoke(&[1.0]);
    assert_eq!(hits.get(), 2);
}
