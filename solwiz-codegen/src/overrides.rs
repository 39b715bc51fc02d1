//! Override clause resolution.
//!
//! When several bases declare the same virtual function, the deriving
//! contract must redeclare it and list every declaring base. Solidity checks
//! the listed bases as a set, but generated output lists them in inheritance
//! order so that the clause is stable no matter which feature registered its
//! override first.

use solwiz_ir::{Contract, ContractFunction, Error, Result};
use tracing::trace;

/// The override marker a function declaration carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideClause<'a> {
    /// Newly introduced function, no `override`.
    None,
    /// Exactly one base declares it: bare `override`.
    Single,
    /// Several bases declare it: `override(A, B)`, in parent order.
    Multiple(Vec<&'a str>),
}

/// Resolve the override clause of `function` within `contract`.
///
/// Fails with [`Error::UnknownAncestor`] when an override names a contract
/// that is not a parent.
pub fn resolve_override<'a>(
    contract: &'a Contract,
    function: &'a ContractFunction,
) -> Result<OverrideClause<'a>> {
    let mut ancestors = function
        .overrides()
        .iter()
        .map(|ancestor| match contract.parent_position(ancestor) {
            Some(position) => Ok((position, ancestor.as_str())),
            None => Err(Error::UnknownAncestor {
                contract: contract.name().to_string(),
                function: function.spec().signature().to_string(),
                ancestor: ancestor.clone(),
            }),
        })
        .collect::<Result<Vec<_>>>()?;

    let clause = match ancestors.len() {
        0 => OverrideClause::None,
        1 => OverrideClause::Single,
        _ => {
            ancestors.sort_by_key(|(position, _)| *position);
            OverrideClause::Multiple(ancestors.into_iter().map(|(_, name)| name).collect())
        }
    };
    trace!(contract = %contract.name(), function = %function.name(), ?clause, "resolved override");
    Ok(clause)
}
