//! ERC1155 multi tokens.

use std::sync::LazyLock;

use solwiz_ir::{Contract, ContractBuilder, FunctionRegistry, FunctionSpec, Result, Visibility};
use solwiz_options::{Access, Erc1155Options};
use tracing::debug;

use crate::{
    access::set_access_control,
    common::{openzeppelin, supports_interface},
    pausable::add_pausable,
    upgradeable::{add_upgrade_authorization, set_upgradeable},
};

static FUNCTIONS: LazyLock<FunctionRegistry> = LazyLock::new(|| {
    FunctionRegistry::new()
        .define(
            "setURI",
            FunctionSpec::new("setURI", Visibility::Public).arg("newuri", "string memory"),
        )
        .define(
            "mint",
            FunctionSpec::new("mint", Visibility::Public)
                .arg("account", "address")
                .arg("id", "uint256")
                .arg("amount", "uint256")
                .arg("data", "bytes memory"),
        )
        .define(
            "mintBatch",
            FunctionSpec::new("mintBatch", Visibility::Public)
                .arg("to", "address")
                .arg("ids", "uint256[] memory")
                .arg("amounts", "uint256[] memory")
                .arg("data", "bytes memory"),
        )
        .define(
            "_beforeTokenTransfer",
            FunctionSpec::new("_beforeTokenTransfer", Visibility::Internal)
                .arg("operator", "address")
                .arg("from", "address")
                .arg("to", "address")
                .arg("ids", "uint256[] memory")
                .arg("amounts", "uint256[] memory")
                .arg("data", "bytes memory"),
        )
});

/// Assemble an ERC1155 token.
pub fn build_erc1155(opts: &Erc1155Options) -> Result<Contract> {
    debug!(name = %opts.name, "building ERC1155");
    let access = opts.common.access;
    let mut c = ContractBuilder::new(&opts.name);
    c.set_license(&opts.common.license);

    set_upgradeable(&mut c, opts.common.upgradeable)?;
    add_base(&mut c, &opts.uri)?;

    if opts.updatable_uri {
        add_set_uri(&mut c, access)?;
    }
    if opts.pausable {
        add_pausable(&mut c, access, &[FUNCTIONS.get("_beforeTokenTransfer")?])?;
    }
    if opts.burnable {
        add_burnable(&mut c)?;
    }
    if opts.mintable {
        add_mintable(&mut c, access)?;
    }
    if opts.supply {
        add_supply(&mut c)?;
    }
    add_upgrade_authorization(&mut c, opts.common.upgradeable, access)?;

    Ok(c.build())
}

fn add_base(c: &mut ContractBuilder, uri: &str) -> Result<()> {
    c.add_parent(
        openzeppelin("ERC1155", "token/ERC1155/ERC1155.sol"),
        vec![uri.into()],
    )?;
    c.add_override("ERC1155", FUNCTIONS.get("_beforeTokenTransfer")?);
    c.add_override("ERC1155", supports_interface()?);
    Ok(())
}

fn add_set_uri(c: &mut ContractBuilder, access: Access) -> Result<()> {
    let set_uri = FUNCTIONS.get("setURI")?;
    set_access_control(c, &[set_uri], access, "URI_SETTER")?;
    c.add_function_code("_setURI(newuri);", set_uri)
}

fn add_burnable(c: &mut ContractBuilder) -> Result<()> {
    c.add_parent(
        openzeppelin(
            "ERC1155Burnable",
            "token/ERC1155/extensions/ERC1155Burnable.sol",
        ),
        vec![],
    )
}

fn add_mintable(c: &mut ContractBuilder, access: Access) -> Result<()> {
    let mint = FUNCTIONS.get("mint")?;
    let mint_batch = FUNCTIONS.get("mintBatch")?;
    set_access_control(c, &[mint, mint_batch], access, "MINTER")?;
    c.add_function_code("_mint(account, id, amount, data);", mint)?;
    c.add_function_code("_mintBatch(to, ids, amounts, data);", mint_batch)
}

fn add_supply(c: &mut ContractBuilder) -> Result<()> {
    c.add_parent(
        openzeppelin("ERC1155Supply", "token/ERC1155/extensions/ERC1155Supply.sol"),
        vec![],
    )?;
    c.add_override("ERC1155Supply", FUNCTIONS.get("_beforeTokenTransfer")?);
    Ok(())
}
