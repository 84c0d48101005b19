//! Expression nodes.
//!
//! One `ExprKind` variant per language construct. Children are `ExprId`
//! indices into the owning [`ExprArena`](crate::ExprArena); optional children
//! use the `ExprId::INVALID` sentinel.

mod operators;

pub use operators::BinaryOp;

use crate::{ExprId, ExprRange, Name, ParamRange};

/// Expression node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Expr {
    pub kind: ExprKind,
}

impl Expr {
    #[inline]
    pub const fn new(kind: ExprKind) -> Self {
        Expr { kind }
    }
}

/// Expression variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExprKind {
    // Literals
    /// Integer literal: `42`
    Int(i64),
    /// Boolean literal: `true`, `false`
    Bool(bool),
    /// `null`
    Null,

    /// Variable reference: `x`
    Ident(Name),

    /// `print(expr)`, evaluates to its operand.
    Print(ExprId),

    /// Binary operation: `left op right`
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// `if (cond) { then_branch } else { else_branch }`
    If {
        cond: ExprId,
        then_branch: ExprId,
        /// `ExprId::INVALID` when there is no `else`.
        else_branch: ExprId,
    },

    /// `while (cond) { body }`
    While { cond: ExprId, body: ExprId },

    /// `first; second`
    Seq { first: ExprId, second: ExprId },

    /// A block with its own scope.
    Block(ExprId),

    /// `var name = init`
    VarDecl { name: Name, init: ExprId },

    /// `name = value`
    Assign { name: Name, value: ExprId },

    /// `function (params) { body }`
    Function {
        params: ParamRange,
        /// `ExprId::INVALID` for an empty body.
        body: ExprId,
    },

    /// `func(args)`
    Call { func: ExprId, args: ExprRange },
}
