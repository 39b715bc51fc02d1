//! Static catalogs of function specifications.
//!
//! Feature builders define their functions once, keyed by a logical name, and
//! look them up instead of re-typing signatures at every call site. Two
//! lookups of the same logical name yield equal [`FunctionSignature`]s, so
//! independent features touching `_beforeTokenTransfer` address the same
//! function in the contract.
//!
//! # Example
//!
//! ```
//! use solwiz_ir::{FunctionRegistry, FunctionSpec, Visibility};
//!
//! let functions = FunctionRegistry::new()
//!     .define("pause", FunctionSpec::new("pause", Visibility::Public))
//!     .define("unpause", FunctionSpec::new("unpause", Visibility::Public));
//!
//! assert_eq!(functions.get("pause").unwrap().name, "pause");
//! assert!(functions.get("burn").is_err());
//! ```
//!
//! [`FunctionSignature`]: crate::FunctionSignature

use indexmap::IndexMap;

use crate::{Error, FunctionSpec, Result};

/// Logical name → function specification.
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    functions: IndexMap<&'static str, FunctionSpec>,
}

impl FunctionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `spec` under `logical_name`, replacing any earlier entry.
    pub fn define(mut self, logical_name: &'static str, spec: FunctionSpec) -> Self {
        self.functions.insert(logical_name, spec);
        self
    }

    /// Look up a function by logical name.
    pub fn get(&self, logical_name: &str) -> Result<&FunctionSpec> {
        self.functions
            .get(logical_name)
            .ok_or_else(|| Error::UnknownFunction {
                name: logical_name.to_string(),
            })
    }

    /// Iterate over entries in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FunctionSpec)> {
        self.functions.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
