//! Centralized registry of the named functions the interpreter understands
//!
//! This module is the single source of truth for function names: the parser
//! resolves identifiers through [`Registry`], and evaluation calls
//! the `eval` pointer stored in each [`FunctionDefinition`].

pub(crate) mod definitions;
pub(crate) mod registry;

pub use registry::{FunctionDefinition, Registry};
