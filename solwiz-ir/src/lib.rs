//! Contract intermediate representation for the solwiz generator.
//!
//! Feature builders assemble one [`Contract`] per generated contract through a
//! [`ContractBuilder`], then hand the frozen IR to the renderer in
//! `solwiz-codegen`.
//!
//! # Architecture
//!
//! ```text
//! option record → feature builders → ContractBuilder → Contract → renderer → .sol
//! ```
//!
//! The IR only grows: every builder operation adds inheritance, overrides,
//! code or declarations, and nothing is ever removed.

mod contract;
mod error;
mod function;
mod registry;

pub use contract::{Contract, ContractBuilder, Parent, ParentContract, Using, Value};
pub use error::{Error, Result};
pub use function::{
    ContractFunction, FunctionArgument, FunctionSignature, FunctionSpec, Mutability, Visibility,
};
pub use registry::FunctionRegistry;
