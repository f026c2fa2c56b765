use super::{CONSTANTS, ConstantDefinition, FUNCTIONS, FunctionDefinition};
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Static name index over the function and constant tables
static REGISTRY: OnceLock<Index> = OnceLock::new();

struct Index {
    functions: FxHashMap<&'static str, &'static FunctionDefinition>,
    constants: FxHashMap<&'static str, &'static ConstantDefinition>,
}

/// Initialize the index with every canonical name and alias
fn init_registry() -> Index {
    let mut functions = FxHashMap::default();
    functions.reserve(FUNCTIONS.len() * 2);
    for def in FUNCTIONS {
        functions.insert(def.name, def);
        for alias in def.aliases {
            functions.insert(*alias, def);
        }
    }

    let constants = CONSTANTS.iter().map(|c| (c.name, c)).collect();

    Index {
        functions,
        constants,
    }
}

/// Central registry for name lookups
pub(crate) struct Registry;

impl Registry {
    /// Get a function definition by name - O(1) lookup, ASCII case-insensitive
    pub(crate) fn function(name: &str) -> Option<&'static FunctionDefinition> {
        let index = REGISTRY.get_or_init(init_registry);
        match index.functions.get(name) {
            Some(def) => Some(*def),
            None => index
                .functions
                .get(name.to_ascii_lowercase().as_str())
                .copied(),
        }
    }

    /// Get a named constant - ASCII case-insensitive
    pub(crate) fn constant(name: &str) -> Option<&'static ConstantDefinition> {
        let index = REGISTRY.get_or_init(init_registry);
        match index.constants.get(name) {
            Some(def) => Some(*def),
            None => index
                .constants
                .get(name.to_ascii_lowercase().as_str())
                .copied(),
        }
    }
}
