//! Rendering with imports pinned to a contracts release.

use solwiz_core::{OPENZEPPELIN_CONTRACTS, Version};
use solwiz_ir::{Contract, Result};

use crate::{PrintOptions, print_contract, print_contracts};

const PACKAGES: [&str; 2] = [
    "@openzeppelin/contracts-upgradeable",
    "@openzeppelin/contracts",
];

/// Pin an OpenZeppelin import to `version`:
/// `@openzeppelin/contracts/x.sol` → `@openzeppelin/contracts@4.3.2/x.sol`.
pub fn pin_import(path: &str, version: Version) -> String {
    for package in PACKAGES {
        if let Some(rest) = path.strip_prefix(package)
            && (rest.is_empty() || rest.starts_with('/'))
        {
            return format!("{package}@{version}{rest}");
        }
    }
    path.to_string()
}

/// [`print_contract`] with imports pinned to the bundled contracts release.
pub fn print_contract_versioned(contract: &Contract) -> Result<String> {
    let pin = |path: &str| pin_import(path, OPENZEPPELIN_CONTRACTS);
    print_contract(contract, &PrintOptions::new().transform_import(&pin))
}

/// [`print_contracts`] with imports pinned to the bundled contracts release.
pub fn print_contracts_versioned(contracts: &[Contract]) -> Result<String> {
    let pin = |path: &str| pin_import(path, OPENZEPPELIN_CONTRACTS);
    print_contracts(contracts, &PrintOptions::new().transform_import(&pin))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_import() {
        let v = Version::new(4, 3, 2);
        assert_eq!(
            pin_import("@openzeppelin/contracts/token/ERC721/ERC721.sol", v),
            "@openzeppelin/contracts@4.3.2/token/ERC721/ERC721.sol"
        );
        assert_eq!(
            pin_import(
                "@openzeppelin/contracts-upgradeable/proxy/utils/Initializable.sol",
                v
            ),
            "@openzeppelin/contracts-upgradeable@4.3.2/proxy/utils/Initializable.sol"
        );
    }

    #[test]
    fn test_pin_import_leaves_other_packages() {
        let v = Version::new(4, 3, 2);
        for path in ["./Local.sol", "@openzeppelin/contracts-extra/x.sol", "hardhat/console.sol"] {
            assert_eq!(pin_import(path, v), path);
        }
    }
}
