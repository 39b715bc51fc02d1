//! Functions and parents shared across token standards.

use std::sync::LazyLock;

use solwiz_ir::{FunctionRegistry, FunctionSpec, Mutability, ParentContract, Result, Visibility};

static FUNCTIONS: LazyLock<FunctionRegistry> = LazyLock::new(|| {
    FunctionRegistry::new().define(
        "supportsInterface",
        FunctionSpec::new("supportsInterface", Visibility::Public)
            .arg("interfaceId", "bytes4")
            .returns("bool")
            .mutability(Mutability::View),
    )
});

/// ERC165 `supportsInterface`, declared by every token base and by `AccessControl`.
pub(crate) fn supports_interface() -> Result<&'static FunctionSpec> {
    FUNCTIONS.get("supportsInterface")
}

/// A contract from the `@openzeppelin/contracts` package.
pub(crate) fn openzeppelin(name: &str, path: &str) -> ParentContract {
    ParentContract::new(name, format!("@openzeppelin/contracts/{path}"))
}
