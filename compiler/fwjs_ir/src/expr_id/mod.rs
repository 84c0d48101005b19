//! Expression IDs and ranges for the flat expression tree.
//!
//! - `ExprId(u32)` instead of `Box<Expr>`
//! - `ExprRange` for argument lists, `ParamRange` for parameter lists

use std::fmt;

/// Index into an [`ExprArena`](crate::ExprArena).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    /// Invalid expression ID (sentinel value).
    ///
    /// Marks an absent child: an `if` without `else`, or a function with an
    /// empty body.
    pub const INVALID: ExprId = ExprId(u32::MAX);

    /// Create a new `ExprId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this ID represents a present (non-sentinel) node.
    #[inline]
    pub const fn is_present(self) -> bool {
        self.0 != u32::MAX
    }

    /// `Some(self)` if present, `None` for the sentinel.
    #[inline]
    pub const fn to_option(self) -> Option<ExprId> {
        if self.is_present() {
            Some(self)
        } else {
            None
        }
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_present() {
            write!(f, "ExprId({})", self.0)
        } else {
            write!(f, "ExprId::INVALID")
        }
    }
}

impl Default for ExprId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl From<Option<ExprId>> for ExprId {
    fn from(id: Option<ExprId>) -> Self {
        id.unwrap_or(ExprId::INVALID)
    }
}

/// Range of expression IDs in the arena's flattened argument table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ExprRange {
    pub start: u32,
    pub len: u16,
}

impl ExprRange {
    /// Empty range.
    pub const EMPTY: ExprRange = ExprRange { start: 0, len: 0 };

    #[inline]
    pub const fn new(start: u32, len: u16) -> Self {
        ExprRange { start, len }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }
}

/// Range of names in the arena's flattened parameter table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ParamRange {
    pub start: u32,
    pub len: u16,
}

impl ParamRange {
    /// Empty range.
    pub const EMPTY: ParamRange = ParamRange { start: 0, len: 0 };

    #[inline]
    pub const fn new(start: u32, len: u16) -> Self {
        ParamRange { start, len }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }
}
