//! Proxy-based upgradeability.
//!
//! Setup is split in two: [`set_upgradeable`] must run before any other
//! parent is added so that `Initializable` leads the inheritance list, and
//! [`add_upgrade_authorization`] runs last so that `UUPSUpgradeable` closes it.

use std::sync::LazyLock;

use solwiz_ir::{ContractBuilder, FunctionRegistry, FunctionSpec, Result, Visibility};
use solwiz_options::{Access, Upgradeable};

use crate::{access::set_access_control, common::openzeppelin};

static FUNCTIONS: LazyLock<FunctionRegistry> = LazyLock::new(|| {
    FunctionRegistry::new().define(
        "_authorizeUpgrade",
        FunctionSpec::new("_authorizeUpgrade", Visibility::Internal)
            .arg("newImplementation", "address"),
    )
});

/// Mark the contract upgradeable and add `Initializable`.
pub fn set_upgradeable(c: &mut ContractBuilder, upgradeable: Option<Upgradeable>) -> Result<()> {
    if upgradeable.is_none() {
        return Ok(());
    }
    c.set_upgradeable();
    c.add_parent(
        openzeppelin("Initializable", "proxy/utils/Initializable.sol"),
        vec![],
    )
}

/// For UUPS proxies, add `UUPSUpgradeable` with a privileged `_authorizeUpgrade`.
pub fn add_upgrade_authorization(
    c: &mut ContractBuilder,
    upgradeable: Option<Upgradeable>,
    access: Access,
) -> Result<()> {
    match upgradeable {
        None | Some(Upgradeable::Transparent) => Ok(()),
        Some(Upgradeable::Uups) => {
            let authorize = FUNCTIONS.get("_authorizeUpgrade")?;
            set_access_control(c, &[authorize], access, "UPGRADER")?;
            c.add_parent(
                openzeppelin("UUPSUpgradeable", "proxy/utils/UUPSUpgradeable.sol"),
                vec![],
            )?;
            c.add_override("UUPSUpgradeable", authorize);
            c.set_function_body(Vec::<String>::new(), authorize)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_upgradeable() {
        let mut c = ContractBuilder::new("MyToken");
        set_upgradeable(&mut c, None).unwrap();
        add_upgrade_authorization(&mut c, None, Access::Ownable).unwrap();

        let contract = c.build();
        assert!(!contract.is_upgradeable());
        assert!(contract.parents().is_empty());
    }

    #[test]
    fn test_transparent() {
        let mut c = ContractBuilder::new("MyToken");
        set_upgradeable(&mut c, Some(Upgradeable::Transparent)).unwrap();
        add_upgrade_authorization(&mut c, Some(Upgradeable::Transparent), Access::Ownable)
            .unwrap();

        let contract = c.build();
        assert!(contract.is_upgradeable());
        let names: Vec<_> = contract
            .parents()
            .iter()
            .map(|p| p.contract.name.as_str())
            .collect();
        assert_eq!(names, ["Initializable"]);
    }

    #[test]
    fn test_uups() {
        let mut c = ContractBuilder::new("MyToken");
        set_upgradeable(&mut c, Some(Upgradeable::Uups)).unwrap();
        add_upgrade_authorization(&mut c, Some(Upgradeable::Uups), Access::Ownable).unwrap();

        let contract = c.build();
        let names: Vec<_> = contract
            .parents()
            .iter()
            .map(|p| p.contract.name.as_str())
            .collect();
        assert_eq!(names, ["Initializable", "Ownable", "UUPSUpgradeable"]);

        let authorize = FUNCTIONS.get("_authorizeUpgrade").unwrap();
        let f = contract.function(&authorize.signature()).unwrap();
        assert!(f.is_replaced());
        assert!(f.code().is_empty());
        assert_eq!(f.modifiers(), ["onlyOwner"]);
    }
}
