//! Access control for privileged functions.

use solwiz_ir::{ContractBuilder, FunctionSpec, Result};
use solwiz_options::Access;
use tracing::debug;

use crate::common::{openzeppelin, supports_interface};

/// Restrict `functions` to the owner, or to holders of `<role>_ROLE`.
///
/// Safe to call repeatedly: the access parent, the role constant and its
/// constructor grant are only added once.
pub fn set_access_control(
    c: &mut ContractBuilder,
    functions: &[&FunctionSpec],
    access: Access,
    role: &str,
) -> Result<()> {
    debug!(contract = %c.name(), %access, role, "set access control");
    match access {
        Access::Ownable => {
            if !c.has_parent("Ownable") {
                c.add_parent(openzeppelin("Ownable", "access/Ownable.sol"), vec![])?;
            }
            for function in functions {
                c.add_modifier("onlyOwner", function);
            }
        }
        Access::Roles => {
            if !c.has_parent("AccessControl") {
                c.add_parent(
                    openzeppelin("AccessControl", "access/AccessControl.sol"),
                    vec![],
                )?;
                c.add_constructor_code("_setupRole(DEFAULT_ADMIN_ROLE, msg.sender);");
            }
            c.add_override("AccessControl", supports_interface()?);

            let role_id = format!("{role}_ROLE");
            let declaration = format!("bytes32 public constant {role_id} = keccak256(\"{role_id}\");");
            if !c.contract().variables().contains(&declaration) {
                c.add_variable(declaration);
                c.add_constructor_code(format!("_setupRole({role_id}, msg.sender);"));
            }

            let modifier = format!("onlyRole({role_id})");
            for function in functions {
                c.add_modifier(&modifier, function);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use solwiz_ir::Visibility;

    use super::*;

    fn pause() -> FunctionSpec {
        FunctionSpec::new("pause", Visibility::Public)
    }

    fn unpause() -> FunctionSpec {
        FunctionSpec::new("unpause", Visibility::Public)
    }

    #[test]
    fn test_ownable() {
        let mut c = ContractBuilder::new("MyToken");
        set_access_control(&mut c, &[&pause(), &unpause()], Access::Ownable, "PAUSER").unwrap();
        set_access_control(&mut c, &[&pause()], Access::Ownable, "MINTER").unwrap();

        let contract = c.build();
        assert_eq!(contract.parents().len(), 1);
        assert!(contract.has_parent("Ownable"));
        let f = contract.function(&pause().signature()).unwrap();
        assert_eq!(f.modifiers(), ["onlyOwner", "onlyOwner"]);
        assert!(contract.constructor_code().is_empty());
    }

    #[test]
    fn test_roles_are_granted_once() {
        let mut c = ContractBuilder::new("MyToken");
        set_access_control(&mut c, &[&pause()], Access::Roles, "PAUSER").unwrap();
        set_access_control(&mut c, &[&unpause()], Access::Roles, "PAUSER").unwrap();
        set_access_control(&mut c, &[&pause()], Access::Roles, "MINTER").unwrap();

        let contract = c.build();
        assert_eq!(contract.parents().len(), 1);
        assert_eq!(
            contract.variables(),
            [
                "bytes32 public constant PAUSER_ROLE = keccak256(\"PAUSER_ROLE\");",
                "bytes32 public constant MINTER_ROLE = keccak256(\"MINTER_ROLE\");",
            ]
        );
        assert_eq!(
            contract.constructor_code(),
            [
                "_setupRole(DEFAULT_ADMIN_ROLE, msg.sender);",
                "_setupRole(PAUSER_ROLE, msg.sender);",
                "_setupRole(MINTER_ROLE, msg.sender);",
            ]
        );
        let f = contract.function(&unpause().signature()).unwrap();
        assert_eq!(f.modifiers(), ["onlyRole(PAUSER_ROLE)"]);

        let supports = contract
            .function(&supports_interface().unwrap().signature())
            .unwrap();
        assert_eq!(supports.overrides().len(), 1);
    }
}
