//! Lexically scoped environment.
//!
//! An [`Environment`] is a handle to one [`Scope`] in a parent-linked chain
//! ending at the global scope. Handles are shared: the frame that created a
//! scope, every child scope chained to it, and every closure that captured
//! it all point at the same `Scope`, so a write through any of them is seen
//! by all.
//!
//! The three operations keep the language's asymmetry:
//! - `resolve` of an unbound name is `None` (the evaluator reads it as null)
//! - `update` of an unbound name creates it in the global scope
//! - `declare` of a name already bound in the same scope is an error

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use fwjs_ir::Name;

use crate::Value;

/// A single-threaded, reference-counted, interior-mutable scope cell.
///
/// All scope allocations go through `LocalScope::new`. Not `Send`: an
/// environment can never be reached from two threads.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether both handles point at the same cell.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

/// Variable bindings of one scope plus the link to its enclosing scope.
#[derive(Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    /// `None` only for the global scope.
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    /// Create a new empty scope with no parent.
    pub fn new() -> Self {
        Scope::default()
    }

    /// Create a new empty scope with a parent.
    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Binding in this scope only.
    #[inline]
    pub fn get_local(&self, name: Name) -> Option<&Value> {
        self.bindings.get(&name)
    }

    #[inline]
    pub fn binds(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Error returned by [`Environment::declare`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclareError {
    /// The name is already bound in the current scope.
    Duplicate,
}

/// Which scope an [`Environment::update`] wrote to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// An existing binding somewhere in the chain was rebound.
    Rebound,
    /// No scope bound the name; it was created in the global scope.
    CreatedGlobal,
}

/// Handle to the current scope of an environment chain.
#[derive(Clone, Debug)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// A fresh, empty global environment.
    pub fn global() -> Self {
        Environment {
            scope: LocalScope::new(Scope::new()),
        }
    }

    /// A new empty scope whose parent is this one.
    #[must_use]
    pub fn child(&self) -> Self {
        Environment {
            scope: LocalScope::new(Scope::with_parent(self.scope.clone())),
        }
    }

    /// The enclosing scope, `None` for the global scope.
    pub fn parent(&self) -> Option<Environment> {
        self.scope
            .borrow()
            .parent
            .clone()
            .map(|scope| Environment { scope })
    }

    pub fn is_global(&self) -> bool {
        self.scope.borrow().parent.is_none()
    }

    /// Number of scopes from this one up to and including the global scope.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self.parent();
        while let Some(env) = current {
            depth += 1;
            current = env.parent();
        }
        depth
    }

    /// Whether both handles refer to the same scope.
    #[inline]
    pub fn ptr_eq(a: &Environment, b: &Environment) -> bool {
        LocalScope::ptr_eq(&a.scope, &b.scope)
    }

    /// Value bound to `name` in the nearest scope that binds it.
    pub fn resolve(&self, name: Name) -> Option<Value> {
        let mut current = self.scope.clone();
        loop {
            let parent = {
                let scope = current.borrow();
                if let Some(value) = scope.bindings.get(&name) {
                    return Some(value.clone());
                }
                scope.parent.clone()?
            };
            current = parent;
        }
    }

    /// Rebind `name` in the nearest scope that binds it, or create it in
    /// the global scope if none does.
    pub fn update(&self, name: Name, value: Value) -> UpdateOutcome {
        let mut current = self.scope.clone();
        loop {
            let parent = {
                let mut scope = current.borrow_mut();
                if let Some(slot) = scope.bindings.get_mut(&name) {
                    *slot = value;
                    return UpdateOutcome::Rebound;
                }
                let parent = scope.parent.clone();
                match parent {
                    Some(parent) => parent,
                    None => {
                        scope.bindings.insert(name, value);
                        return UpdateOutcome::CreatedGlobal;
                    }
                }
            };
            current = parent;
        }
    }

    /// Bind `name` in this scope. Shadowing an outer binding is allowed;
    /// rebinding a name of this same scope is not.
    pub fn declare(&self, name: Name, value: Value) -> Result<(), DeclareError> {
        let mut scope = self.scope.borrow_mut();
        if scope.binds(name) {
            return Err(DeclareError::Duplicate);
        }
        scope.bindings.insert(name, value);
        Ok(())
    }

    /// Whether `name` is bound in this scope (not its parents).
    pub fn binds_locally(&self, name: Name) -> bool {
        self.scope.borrow().binds(name)
    }

    /// Number of bindings in this scope (not its parents).
    pub fn local_len(&self) -> usize {
        self.scope.borrow().len()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::global()
    }
}
