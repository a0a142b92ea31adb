//! Operator and punctuation matching.
//!
//! Operators live in a fixed prefix tree: each node accepts one byte and
//! its children extend the symbol by one more byte. Matching walks the tree
//! and keeps the deepest node reached, which yields the longest operator.
//! `/` is not in the tree; see [`LineLexer::scan_comment`].

use std::sync::LazyLock;

use super::LineLexer;
use crate::token::Operator;

/// One node of the operator tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperatorNode {
    /// Operator matched when the walk stops here.
    pub kind: Operator,
    /// Byte this node accepts.
    pub symbol: u8,
    /// Longer operators sharing this prefix.
    pub children: Vec<OperatorNode>,
}

impl OperatorNode {
    fn leaf(symbol: u8, kind: Operator) -> Self {
        Self::node(symbol, kind, Vec::new())
    }

    fn node(symbol: u8, kind: Operator, children: Vec<OperatorNode>) -> Self {
        Self {
            kind,
            symbol,
            children,
        }
    }
}

static OPERATOR_TREE: LazyLock<Vec<OperatorNode>> = LazyLock::new(build_operator_tree);

/// Root level of the operator tree.
pub fn operator_tree() -> &'static [OperatorNode] {
    &OPERATOR_TREE
}

fn build_operator_tree() -> Vec<OperatorNode> {
    use Operator::*;
    use OperatorNode as N;

    vec![
        N::leaf(b'.', Accessor),
        N::leaf(b'\\', BackSlash),
        N::leaf(b'~', BitwiseNot),
        N::leaf(b'}', ClosedCurly),
        N::leaf(b')', ClosedParen),
        N::leaf(b',', Comma),
        N::leaf(b'#', Macro),
        N::leaf(b'{', OpenCurly),
        N::leaf(b'(', OpenParen),
        N::leaf(b';', Semicolon),
        N::leaf(b'?', Ternary),
        N::leaf(b'`', Unsupported),
        N::leaf(b'@', Unsupported),
        N::node(b'*', Asterisk, vec![N::leaf(b'=', MultiplyEqual)]),
        N::node(
            b'&',
            BitwiseAnd,
            vec![N::leaf(b'=', BitwiseAndEqual), N::leaf(b'&', LogicalAnd)],
        ),
        N::node(
            b'|',
            BitwiseOr,
            vec![N::leaf(b'=', BitwiseOrEqual), N::leaf(b'|', LogicalOr)],
        ),
        N::node(
            b'^',
            BitwiseXor,
            vec![N::leaf(b'=', BitwiseXorEqual), N::leaf(b'^', LogicalXor)],
        ),
        N::node(b']', ClosedSquare, vec![N::leaf(b']', ClosedAttribute)]),
        N::node(b':', Colon, vec![N::leaf(b':', Scope)]),
        N::node(
            b'=',
            Equals,
            vec![N::leaf(b'=', EqualsTo), N::leaf(b'>', MatchCase)],
        ),
        N::node(
            b'>',
            Greater,
            vec![
                N::leaf(b'=', GreaterEqual),
                N::node(b'>', RightShift, vec![N::leaf(b'=', RightShiftEqual)]),
            ],
        ),
        N::node(
            b'<',
            Less,
            vec![
                N::node(b'=', LessEqual, vec![N::leaf(b'>', ThreeWayComp)]),
                N::node(b'<', LeftShift, vec![N::leaf(b'=', LeftShiftEqual)]),
            ],
        ),
        N::node(b'!', LogicalNot, vec![N::leaf(b'=', NotEqual)]),
        N::node(
            b'-',
            Minus,
            vec![
                N::leaf(b'>', Arrow),
                N::leaf(b'-', Decrement),
                N::leaf(b'=', MinusEqual),
            ],
        ),
        N::node(b'%', Modulo, vec![N::leaf(b'=', ModuloEqual)]),
        N::node(b'[', OpenSquare, vec![N::leaf(b'[', OpenAttribute)]),
        N::node(
            b'+',
            Plus,
            vec![N::leaf(b'+', Increment), N::leaf(b'=', PlusEqual)],
        ),
    ]
}

impl<'a> LineLexer<'a> {
    /// Matches the longest operator at the cursor.
    pub fn match_operator(&mut self) -> Option<Operator> {
        let mut level = operator_tree();
        let mut matched = None;
        let mut depth = 0;

        while let Some(b) = self.cursor.peek_byte(depth) {
            let Some(node) = level.iter().find(|node| node.symbol == b) else {
                break;
            };
            matched = Some(node.kind);
            depth += 1;
            if node.children.is_empty() {
                break;
            }
            level = &node.children;
        }

        if matched.is_some() {
            self.cursor.advance_bytes(depth);
        }
        matched
    }
}
