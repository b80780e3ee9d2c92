use super::*;

#[test]
fn animated_value_reads_back_writes() {
    let v = AnimatedValue::new(1.0);
    assert_eq!(v.read(), Some(1.0));
    assert!(v.write(4.0));
    assert_eq!(v.get(), Some(4.0));
    v.clear();
    assert_eq!(v.read(), None);
}

#[test]
fn unset_value_reads_as_nan() {
    let v = AnimatedValue::unset();
    assert!(read_or_nan(&v).is_nan());
    v.set(2.0);
    assert_eq!(read_or_nan(&v), 2.0);
}

#[test]
fn derived_value_is_read_only() {
    let source = AnimatedValue::shared(3.0);
    let s = source.clone();
    let derived = DerivedValue::new(move || s.get().map(|x| x * 2.0));
    assert_eq!(derived.read(), Some(6.0));
    assert!(!derived.write(1.0));
    source.set(5.0);
    assert_eq!(derived.read(), Some(10.0));
}
