//! FWJS IR - expression tree for the featherweight JS evaluator.
//!
//! This crate contains the data structures the evaluator walks:
//! - Names for interned identifiers
//! - Expression nodes (`Expr`, `ExprKind`, `BinaryOp`)
//! - Arena allocation for expressions
//! - `ExprBuilder`, the contract a front-end uses to emit trees
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers are `Name(u32)`
//! - **Flatten Everything**: no `Box<Expr>`, children are `ExprId(u32)` indices
//! - **Immutable Once Built**: an arena is frozen into a `SharedArena` before evaluation

mod arena;
pub mod ast;
mod builder;
mod expr_id;
mod interner;
mod name;

pub use arena::{ExprArena, SharedArena};
pub use ast::{BinaryOp, Expr, ExprKind};
pub use builder::ExprBuilder;
pub use expr_id::{ExprId, ExprRange, ParamRange};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
