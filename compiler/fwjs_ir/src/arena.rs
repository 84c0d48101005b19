//! Arena allocation for expressions.
//!
//! Expressions, argument lists and parameter lists live in flat vectors and
//! are addressed by index. Once built, an arena is frozen into a
//! [`SharedArena`] and never mutated again.

use std::ops::Deref;
use std::sync::Arc;

use crate::{Expr, ExprId, ExprKind, ExprRange, Name, ParamRange};

/// Convert a table length to a `u32` index.
///
/// # Panics
/// Panics if the table exceeds `u32::MAX` entries.
#[inline]
pub(crate) fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("too many {what}: {len} exceeds u32::MAX"))
}

/// Convert a list length to a `u16` range length.
///
/// # Panics
/// Panics if the list exceeds `u16::MAX` entries.
#[inline]
pub(crate) fn to_u16(len: usize, what: &str) -> u16 {
    u16::try_from(len).unwrap_or_else(|_| panic!("too many {what}: {len} exceeds u16::MAX"))
}

/// Flat storage for an expression tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    /// Flattened argument lists, indexed by `ExprRange`.
    expr_lists: Vec<ExprId>,
    /// Flattened parameter lists, indexed by `ParamRange`.
    params: Vec<Name>,
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an expression, returning its ID.
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len(), "expressions"));
        self.exprs.push(expr);
        id
    }

    /// Allocate an argument list, returning its range.
    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = to_u32(self.expr_lists.len(), "argument entries");
        self.expr_lists.extend(ids);
        let len = to_u16(self.expr_lists.len() - start as usize, "arguments");
        ExprRange::new(start, len)
    }

    /// Allocate a parameter list, returning its range.
    pub fn alloc_params(&mut self, names: impl IntoIterator<Item = Name>) -> ParamRange {
        let start = to_u32(self.params.len(), "parameter entries");
        self.params.extend(names);
        let len = to_u16(self.params.len() - start as usize, "parameters");
        ParamRange::new(start, len)
    }

    /// Get an expression by ID.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Get the kind of an expression by ID.
    #[inline]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.get_expr(id).kind
    }

    /// Get the argument IDs for a range.
    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    /// Get the parameter names for a range.
    #[inline]
    pub fn get_params(&self, range: ParamRange) -> &[Name] {
        let start = range.start as usize;
        &self.params[start..start + range.len()]
    }

    /// Number of allocated expressions.
    #[inline]
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}

/// Frozen, shareable expression arena.
///
/// Closures carry the arena their body lives in, so a closure value stays
/// callable from any interpreter it is handed to.
#[derive(Clone, Debug)]
pub struct SharedArena(Arc<ExprArena>);

impl SharedArena {
    /// Freeze an arena.
    pub fn new(arena: ExprArena) -> Self {
        SharedArena(Arc::new(arena))
    }

    /// Whether two handles refer to the same arena.
    #[inline]
    pub fn ptr_eq(a: &SharedArena, b: &SharedArena) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl Deref for SharedArena {
    type Target = ExprArena;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<ExprArena> for SharedArena {
    fn from(arena: ExprArena) -> Self {
        SharedArena::new(arena)
    }
}
