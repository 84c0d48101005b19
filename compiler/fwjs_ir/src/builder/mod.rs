//! `ExprBuilder`: how a front-end emits expression trees.
//!
//! A syntax-tree walker calls one constructor per construct it visits.
//! Statements with no runtime effect (an empty `;`) are passed as `None`
//! and dropped when statement lists are folded into sequences.

use crate::{BinaryOp, Expr, ExprArena, ExprId, ExprKind, SharedArena, StringInterner};

/// Builder for an [`ExprArena`].
pub struct ExprBuilder<'a> {
    interner: &'a StringInterner,
    arena: ExprArena,
}

impl<'a> ExprBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        ExprBuilder {
            interner,
            arena: ExprArena::new(),
        }
    }

    #[inline]
    fn alloc(&mut self, kind: ExprKind) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind))
    }

    pub fn int(&mut self, value: i64) -> ExprId {
        self.alloc(ExprKind::Int(value))
    }

    pub fn bool(&mut self, value: bool) -> ExprId {
        self.alloc(ExprKind::Bool(value))
    }

    pub fn null(&mut self) -> ExprId {
        self.alloc(ExprKind::Null)
    }

    pub fn ident(&mut self, name: &str) -> ExprId {
        let name = self.interner.intern(name);
        self.alloc(ExprKind::Ident(name))
    }

    pub fn print(&mut self, operand: ExprId) -> ExprId {
        self.alloc(ExprKind::Print(operand))
    }

    pub fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        self.alloc(ExprKind::Binary { op, left, right })
    }

    /// Binary node from an operator token; `None` if the token is not an operator.
    pub fn binary_symbol(&mut self, symbol: &str, left: ExprId, right: ExprId) -> Option<ExprId> {
        let op = BinaryOp::from_symbol(symbol)?;
        Some(self.binary(op, left, right))
    }

    /// `if (cond) then_branch`, no `else`.
    pub fn if_then(&mut self, cond: ExprId, then_branch: impl Into<ExprId>) -> ExprId {
        self.alloc(ExprKind::If {
            cond,
            then_branch: then_branch.into(),
            else_branch: ExprId::INVALID,
        })
    }

    pub fn if_else(
        &mut self,
        cond: ExprId,
        then_branch: impl Into<ExprId>,
        else_branch: impl Into<ExprId>,
    ) -> ExprId {
        self.alloc(ExprKind::If {
            cond,
            then_branch: then_branch.into(),
            else_branch: else_branch.into(),
        })
    }

    pub fn while_loop(&mut self, cond: ExprId, body: impl Into<ExprId>) -> ExprId {
        self.alloc(ExprKind::While {
            cond,
            body: body.into(),
        })
    }

    /// A single `first; second` node.
    pub fn seq_pair(&mut self, first: ExprId, second: ExprId) -> ExprId {
        self.alloc(ExprKind::Seq { first, second })
    }

    /// Fold a statement list into a right-nested chain of sequences.
    ///
    /// `None` entries are skipped. An empty list yields `None`, and a single
    /// statement is returned as-is.
    pub fn seq(&mut self, stmts: impl IntoIterator<Item = Option<ExprId>>) -> Option<ExprId> {
        let stmts: Vec<ExprId> = stmts.into_iter().flatten().collect();
        let mut rest = stmts.into_iter().rev();
        let last = rest.next()?;
        Some(rest.fold(last, |second, first| self.seq_pair(first, second)))
    }

    /// A program's top-level statement list.
    pub fn program(&mut self, stmts: impl IntoIterator<Item = Option<ExprId>>) -> Option<ExprId> {
        self.seq(stmts)
    }

    /// A `{ ... }` block. Blocks share the enclosing scope.
    pub fn block(&mut self, stmts: impl IntoIterator<Item = Option<ExprId>>) -> Option<ExprId> {
        self.seq(stmts)
    }

    /// A `{ ... }` block evaluated in its own child scope.
    pub fn scoped_block(
        &mut self,
        stmts: impl IntoIterator<Item = Option<ExprId>>,
    ) -> Option<ExprId> {
        let body = self.seq(stmts)?;
        Some(self.alloc(ExprKind::Block(body)))
    }

    pub fn var_decl(&mut self, name: &str, init: ExprId) -> ExprId {
        let name = self.interner.intern(name);
        self.alloc(ExprKind::VarDecl { name, init })
    }

    pub fn assign(&mut self, name: &str, value: ExprId) -> ExprId {
        let name = self.interner.intern(name);
        self.alloc(ExprKind::Assign { name, value })
    }

    /// Function literal. `body` is absent for `function () {}`.
    pub fn function(&mut self, params: &[&str], body: impl Into<ExprId>) -> ExprId {
        let names: Vec<_> = params.iter().map(|p| self.interner.intern(p)).collect();
        let params = self.arena.alloc_params(names);
        self.alloc(ExprKind::Function {
            params,
            body: body.into(),
        })
    }

    pub fn call(&mut self, func: ExprId, args: impl IntoIterator<Item = ExprId>) -> ExprId {
        let args = self.arena.alloc_expr_list(args);
        self.alloc(ExprKind::Call { func, args })
    }

    /// Read access to the arena under construction.
    pub fn arena(&self) -> &ExprArena {
        &self.arena
    }

    /// Freeze the arena for evaluation.
    pub fn finish(self) -> SharedArena {
        SharedArena::new(self.arena)
    }
}
