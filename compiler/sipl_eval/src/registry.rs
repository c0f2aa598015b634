//! Function registry.
//!
//! Built in one pass over the declarations before the main block runs, so
//! any function can call any other regardless of declaration order.

use rustc_hash::FxHashMap;
use sipl_ir::{Function, Name, Program};

/// Lookup table from function name to declaration.
///
/// Duplicate names are not rejected: the last declaration in source order
/// is the one that gets called.
#[derive(Clone, Debug, Default)]
pub struct FunctionRegistry<'p> {
    functions: FxHashMap<Name, &'p Function>,
}

impl<'p> FunctionRegistry<'p> {
    pub fn from_program(program: &'p Program) -> Self {
        let mut functions = FxHashMap::default();
        functions.reserve(program.functions.len());
        for function in &program.functions {
            functions.insert(function.name, function);
        }
        FunctionRegistry { functions }
    }

    #[inline]
    pub fn get(&self, name: Name) -> Option<&'p Function> {
        self.functions.get(&name).copied()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
