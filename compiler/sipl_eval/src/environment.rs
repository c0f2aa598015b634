//! Variable scopes for the interpreter.
//!
//! Scopes live in an index arena used as a strict LIFO stack. Each scope
//! names its lexical parent by index, so lookup walks a chain of indices
//! instead of reference-counted links. Function calls push a detached
//! scope whose chain ends at itself: callee bodies see neither globals
//! nor caller locals.

use rustc_hash::FxHashMap;
use sipl_ir::Name;
use tracing::trace;

use crate::Value;

/// Index of the global scope. It is never popped.
const GLOBAL: usize = 0;

/// A single scope containing variable bindings.
#[derive(Clone, Debug, Default)]
struct Scope {
    bindings: FxHashMap<Name, Value>,
    /// Lexical parent; `None` for the global scope and function scopes.
    parent: Option<usize>,
    /// Scope that becomes current again when this one is popped.
    restore: usize,
}

/// Environment for the interpreter using a scope stack.
#[derive(Clone, Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
    current: usize,
}

impl Environment {
    /// Create an environment holding only the empty global scope.
    pub fn new() -> Self {
        Environment {
            scopes: vec![Scope::default()],
            current: GLOBAL,
        }
    }

    /// Push a child of the current scope (block entry).
    pub fn push_scope(&mut self) {
        self.push(Some(self.current));
    }

    /// Push a scope with no parent (function entry).
    pub fn push_detached_scope(&mut self) {
        self.push(None);
    }

    fn push(&mut self, parent: Option<usize>) {
        let restore = self.current;
        self.scopes.push(Scope {
            bindings: FxHashMap::default(),
            parent,
            restore,
        });
        self.current = self.scopes.len() - 1;
        trace!(depth = self.scopes.len(), detached = parent.is_none(), "push scope");
    }

    /// Pop the most recently pushed scope, restoring the one current before it.
    pub fn pop_scope(&mut self) {
        debug_assert!(self.current != GLOBAL, "cannot pop the global scope");
        debug_assert_eq!(self.current, self.scopes.len() - 1, "scopes must pop in LIFO order");
        if self.current == GLOBAL {
            return;
        }
        if let Some(scope) = self.scopes.pop() {
            self.current = scope.restore;
        }
        trace!(depth = self.scopes.len(), "pop scope");
    }

    /// Number of live scopes, including the global scope.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Index of the nearest scope on the current chain that binds `name`.
    fn owner(&self, name: Name) -> Option<usize> {
        let mut index = Some(self.current);
        while let Some(i) = index {
            let scope = &self.scopes[i];
            if scope.bindings.contains_key(&name) {
                return Some(i);
            }
            index = scope.parent;
        }
        None
    }

    /// Look up a variable on the current scope chain.
    pub fn lookup(&self, name: Name) -> Option<&Value> {
        self.owner(name)
            .and_then(|i| self.scopes[i].bindings.get(&name))
    }

    /// Mutate the nearest binding of `name`, or create it in the current scope.
    pub fn assign(&mut self, name: Name, value: Value) {
        let target = self.owner(name).unwrap_or(self.current);
        self.scopes[target].bindings.insert(name, value);
    }

    /// Bindings of the global scope, in no particular order.
    pub fn globals(&self) -> impl Iterator<Item = (Name, &Value)> {
        self.scopes[GLOBAL]
            .bindings
            .iter()
            .map(|(name, value)| (*name, value))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
