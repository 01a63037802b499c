use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// Definition of a named built-in: its canonical name and numeric evaluation
#[derive(Clone, Copy)]
pub struct FunctionDefinition {
    /// Canonical (lower-case) name, e.g. "rect", "sin"
    pub name: &'static str,

    /// Short human readable description, used in docs and diagnostics
    pub summary: &'static str,

    /// Numerical evaluation function
    pub eval: fn(f64) -> f64,
}

impl FunctionDefinition {
    #[inline]
    pub fn call(&self, x: f64) -> f64 {
        (self.eval)(x)
    }
}

// Definitions are identified by name; fn pointers are not meaningfully comparable
impl PartialEq for FunctionDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for FunctionDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionDefinition")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Static registry storing all function definitions
static REGISTRY: OnceLock<FxHashMap<&'static str, &'static FunctionDefinition>> = OnceLock::new();

fn init_registry() -> FxHashMap<&'static str, &'static FunctionDefinition> {
    let defs = super::definitions::all_definitions();
    let mut map = FxHashMap::with_capacity_and_hasher(defs.len(), Default::default());
    for def in defs {
        map.insert(def.name, def);
    }
    map
}

/// Central registry for getting function definitions
pub struct Registry;

impl Registry {
    /// Get a function definition by name - O(1) HashMap lookup
    pub fn get(name: &str) -> Option<&'static FunctionDefinition> {
        REGISTRY.get_or_init(init_registry).get(name).copied()
    }

    /// Whether `name` is a registered function
    pub fn contains(name: &str) -> bool {
        Self::get(name).is_some()
    }

    /// All registered names, in definition order
    pub fn names() -> impl Iterator<Item = &'static str> {
        super::definitions::all_definitions().iter().map(|d| d.name)
    }
}
