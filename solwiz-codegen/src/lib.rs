//! Solidity rendering for the solwiz contract generator.
//!
//! # Module Organization
//!
//! - [`builder`] - Fragment layout and indentation (CodeBuilder, CodeFragment)
//! - [`overrides`] - Override clause resolution for diamond inheritance
//! - [`names`] - Upgradeable name and import rewriting
//! - [`printer`] - Contract IR to source text
//! - [`versioned`] - Rendering with version-pinned imports
//!
//! # Example
//!
//! ```
//! use solwiz_codegen::{PrintOptions, print_contract};
//! use solwiz_ir::{ContractBuilder, FunctionSpec, Visibility};
//!
//! let mut c = ContractBuilder::new("Greeter");
//! let greet = FunctionSpec::new("greet", Visibility::Public);
//! c.add_function_code("emit Greeted();", &greet)?;
//!
//! let source = print_contract(&c.build(), &PrintOptions::new())?;
//! assert!(source.contains("function greet() public {"));
//! # Ok::<(), solwiz_ir::Error>(())
//! ```

pub mod builder;
mod imports;
pub mod names;
pub mod overrides;
pub mod printer;
pub mod versioned;

pub use imports::ImportCollector;
pub use overrides::{OverrideClause, resolve_override};
pub use printer::{PrintOptions, SOLIDITY_VERSION, print_contract, print_contracts};
pub use versioned::{pin_import, print_contract_versioned, print_contracts_versioned};
