use super::*;
use crate::expression::{compile::compile, ops};
use crate::external::value::AnimatedValue;

#[test]
fn tick_counts_passes() {
    let x = AnimatedValue::shared(0.0);
    let root = compile(&ops::set(ops::add(x.clone(), 0.5), x.clone()).into()).unwrap();
    let mut d = Driver::new(root);

    assert_eq!(d.tick(), 0.5);
    assert_eq!(d.run(3), vec![1.0, 1.5, 2.0]);
    assert_eq!(d.passes(), 4);
    assert_eq!(x.get(), Some(2.0));
}

#[test]
fn driver_rereads_external_values() {
    let x = AnimatedValue::shared(1.0);
    let mut d = Driver::new(compile(&ops::multiply(x.clone(), 3.0).into()).unwrap());
    assert_eq!(d.tick(), 3.0);
    x.set(2.0);
    assert_eq!(d.tick(), 6.0);
    assert_eq!(d.into_inner().eval(), 6.0);
}
