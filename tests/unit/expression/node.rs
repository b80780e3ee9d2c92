use super::*;

#[test]
fn every_kind_round_trips_through_its_tag() {
    let mut count = 0;
    for kind in NodeKind::all() {
        assert_eq!(NodeKind::from_tag(kind.tag()), Some(kind), "{kind}");
        count += 1;
    }
    assert_eq!(count, 36);
}

#[test]
fn unknown_tags_are_rejected() {
    assert_eq!(NodeKind::from_tag("lerp"), None);
    assert_eq!(NodeKind::from_tag("Add"), None);
    assert_eq!(NodeKind::from_tag(""), None);
}

#[test]
fn node_reports_its_kind() {
    let node = ExpressionNode::Compare {
        op: CompareOp::LessOrEq,
        left: Some(1.0.into()),
        right: None,
    };
    assert_eq!(node.kind(), NodeKind::Compare(CompareOp::LessOrEq));
    assert_eq!(node.kind().tag(), "lessOrEq");
}

#[test]
fn zero_literal_is_a_present_operand() {
    let op: Operand = 0.0.into();
    assert!(matches!(op, Operand::Number(v) if v == 0.0));
}
