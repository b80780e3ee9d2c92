use super::*;
use crate::expression::node::NodeKind;

#[test]
fn helpers_build_the_matching_kind() {
    assert_eq!(add(1.0, 2.0).kind(), NodeKind::Binary(BinaryOp::Add));
    assert_eq!(floor(1.5).kind(), NodeKind::Unary(UnaryOp::Floor));
    assert_eq!(
        greater_or_eq(1.0, 2.0).kind(),
        NodeKind::Compare(CompareOp::GreaterOrEq)
    );
    assert_eq!(cond(1.0, 2.0, None).kind(), NodeKind::Cond);
    assert_eq!(number(1.0).kind(), NodeKind::Number);
}

#[test]
fn helpers_mark_operands_present() {
    match sub(0.0, 0.0) {
        ExpressionNode::Binary { a, b, others, .. } => {
            assert!(matches!(a, Some(Operand::Number(v)) if v == 0.0));
            assert!(matches!(b, Some(Operand::Number(v)) if v == 0.0));
            assert!(others.is_empty());
        }
        other => panic!("unexpected node {other:?}"),
    }
}
