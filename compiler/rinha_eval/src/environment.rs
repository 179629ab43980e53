//! Environments for variable scoping.
//!
//! An environment is a chain of reference-counted frames. `let` extends
//! the current frame in place; a call pushes a child frame whose parent is
//! the closure's captured environment. Frames are never copied.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;
use std::sync::Arc;

use rinha_ir::Parameter;
use rustc_hash::FxHashMap;

use crate::Value;

/// A single-threaded, shared, mutable cell.
///
/// All scope allocations go through [`LocalScope::new`].
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether both handles point at the same frame.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A single frame of bindings.
pub struct Scope {
    bindings: FxHashMap<Arc<str>, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: None,
        }
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind a name in this frame, replacing any earlier binding of it.
    #[inline]
    pub fn define(&mut self, name: Arc<str>, value: Value) {
        self.bindings.insert(name, value);
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to an environment frame.
///
/// Cloning the handle aliases the frame: a `bind` through one clone is
/// visible through every other.
#[derive(Clone)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// Create an empty root environment.
    pub fn new() -> Self {
        Environment {
            scope: LocalScope::new(Scope::new()),
        }
    }

    /// Look a name up, innermost frame first.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        let mut current = self.scope.clone();
        loop {
            let parent = {
                let scope = current.borrow();
                if let Some(value) = scope.bindings.get(name) {
                    return Some(value.clone());
                }
                scope.parent.clone()?
            };
            current = parent;
        }
    }

    /// Bind a name in this frame.
    pub fn bind(&self, name: Arc<str>, value: Value) {
        self.scope.borrow_mut().define(name, value);
    }

    /// Create a child frame binding each parameter to its argument.
    ///
    /// Callers check arity first; surplus parameters or arguments are
    /// ignored.
    pub fn child_with(&self, parameters: &[Parameter], arguments: Vec<Value>) -> Environment {
        let mut scope = Scope::with_parent(self.scope.clone());
        for (param, value) in parameters.iter().zip(arguments) {
            scope.define(Arc::clone(&param.text), value);
        }
        Environment {
            scope: LocalScope::new(scope),
        }
    }

    /// Number of frames from this one up to the root, inclusive.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self.scope.borrow().parent.clone();
        while let Some(scope) = current {
            depth += 1;
            current = scope.borrow().parent.clone();
        }
        depth
    }

    /// Whether both handles refer to the same frame.
    pub fn same_frame(&self, other: &Environment) -> bool {
        LocalScope::ptr_eq(&self.scope, &other.scope)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("bindings", &self.scope.borrow().len())
            .field("depth", &self.depth())
            .finish()
    }
}
