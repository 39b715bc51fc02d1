//! ERC721 non-fungible tokens.

use std::sync::LazyLock;

use solwiz_core::string_literal;
use solwiz_ir::{
    Contract, ContractBuilder, FunctionArgument, FunctionRegistry, FunctionSpec, Mutability,
    Result, Visibility,
};
use solwiz_options::{Access, Erc721Options};
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
            "_beforeTokenTransfer",
            FunctionSpec::new("_beforeTokenTransfer", Visibility::Internal)
                .arg("from", "address")
                .arg("to", "address")
                .arg("tokenId", "uint256"),
        )
        .define(
            "_burn",
            FunctionSpec::new("_burn", Visibility::Internal).arg("tokenId", "uint256"),
        )
        .define(
            "tokenURI",
            FunctionSpec::new("tokenURI", Visibility::Public)
                .arg("tokenId", "uint256")
                .returns("string memory")
                .mutability(Mutability::View),
        )
        .define(
            "_baseURI",
            FunctionSpec::new("_baseURI", Visibility::Internal)
                .returns("string memory")
                .mutability(Mutability::Pure),
        )
        .define(
            "isApprovedForAll",
            FunctionSpec::new("isApprovedForAll", Visibility::Public)
                .arg("owner", "address")
                .arg("operator", "address")
                .returns("bool")
                .mutability(Mutability::View),
        )
        .define(
            "safeMint",
            FunctionSpec::new("safeMint", Visibility::Public)
                .arg("to", "address")
                .arg("tokenId", "uint256"),
        )
        .define(
            "safeMintIncremental",
            FunctionSpec::new("safeMint", Visibility::Public).arg("to", "address"),
        )
});

/// Assemble an ERC721 token.
///
/// With `open_sea` enabled the result also carries the `OwnableDelegateProxy`
/// and `ProxyRegistry` declarations the token refers to, ahead of the token
/// itself.
pub fn build_erc721(opts: &Erc721Options) -> Result<Vec<Contract>> {
    debug!(name = %opts.name, "building ERC721");
    let access = opts.common.access;
    let mut c = ContractBuilder::new(&opts.name);
    c.set_license(&opts.common.license);

    set_upgradeable(&mut c, opts.common.upgradeable)?;
    add_base(&mut c, &opts.name, &opts.symbol)?;

    if let Some(base_uri) = opts.base_uri.as_deref().filter(|uri| !uri.is_empty()) {
        add_base_uri(&mut c, base_uri)?;
    }
    if opts.enumerable {
        add_enumerable(&mut c)?;
    }
    if opts.uri_storage {
        add_uri_storage(&mut c)?;
    }
    if opts.pausable {
        add_pausable(&mut c, access, &[FUNCTIONS.get("_beforeTokenTransfer")?])?;
    }
    if opts.burnable {
        add_burnable(&mut c)?;
    }
    if opts.mintable {
        add_mintable(&mut c, access, opts.incremental)?;
    }
    if opts.open_sea {
        add_open_sea(&mut c)?;
    }
    add_upgrade_authorization(&mut c, opts.common.upgradeable, access)?;

    let mut contracts = Vec::with_capacity(3);
    if opts.open_sea {
        contracts.push(ownable_delegate_proxy(&opts.common.license));
        contracts.push(proxy_registry(&opts.common.license));
    }
    contracts.push(c.build());
    Ok(contracts)
}

fn add_base(c: &mut ContractBuilder, name: &str, symbol: &str) -> Result<()> {
    c.add_parent(
        openzeppelin("ERC721", "token/ERC721/ERC721.sol"),
        vec![name.into(), symbol.into()],
    )?;
    for function in ["_beforeTokenTransfer", "_burn", "tokenURI"] {
        c.add_override("ERC721", FUNCTIONS.get(function)?);
    }
    c.add_override("ERC721", supports_interface()?);
    Ok(())
}

fn add_base_uri(c: &mut ContractBuilder, base_uri: &str) -> Result<()> {
    let base_uri_fn = FUNCTIONS.get("_baseURI")?;
    c.add_override("ERC721", base_uri_fn);
    c.set_function_body([format!("return {};", string_literal(base_uri))], base_uri_fn)
}

fn add_enumerable(c: &mut ContractBuilder) -> Result<()> {
    c.add_parent(
        openzeppelin(
            "ERC721Enumerable",
            "token/ERC721/extensions/ERC721Enumerable.sol",
        ),
        vec![],
    )?;
    c.add_override("ERC721Enumerable", FUNCTIONS.get("_beforeTokenTransfer")?);
    c.add_override("ERC721Enumerable", supports_interface()?);
    Ok(())
}

fn add_uri_storage(c: &mut ContractBuilder) -> Result<()> {
    c.add_parent(
        openzeppelin(
            "ERC721URIStorage",
            "token/ERC721/extensions/ERC721URIStorage.sol",
        ),
        vec![],
    )?;
    c.add_override("ERC721URIStorage", FUNCTIONS.get("_burn")?);
    c.add_override("ERC721URIStorage", FUNCTIONS.get("tokenURI")?);
    Ok(())
}

fn add_burnable(c: &mut ContractBuilder) -> Result<()> {
    c.add_parent(
        openzeppelin("ERC721Burnable", "token/ERC721/extensions/ERC721Burnable.sol"),
        vec![],
    )
}

fn add_mintable(c: &mut ContractBuilder, access: Access, incremental: bool) -> Result<()> {
    if !incremental {
        let mint = FUNCTIONS.get("safeMint")?;
        set_access_control(c, &[mint], access, "MINTER")?;
        return c.add_function_code("_safeMint(to, tokenId);", mint);
    }

    let mint = FUNCTIONS.get("safeMintIncremental")?;
    set_access_control(c, &[mint], access, "MINTER")?;
    c.add_using(openzeppelin("Counters", "utils/Counters.sol"), "Counters.Counter");
    c.add_variable("Counters.Counter private _tokenIdCounter;");
    c.add_function_code("_safeMint(to, _tokenIdCounter.current());", mint)?;
    c.add_function_code("_tokenIdCounter.increment();", mint)
}

/// Approve the owner's OpenSea proxy as an operator, so listing needs no
/// separate approval transaction.
fn add_open_sea(c: &mut ContractBuilder) -> Result<()> {
    c.add_constructor_argument(FunctionArgument::new("_proxyRegistryAddress", "address"));
    c.add_constructor_code("proxyRegistryAddress = _proxyRegistryAddress;");
    c.add_variable("address proxyRegistryAddress;");

    let approved = FUNCTIONS.get("isApprovedForAll")?;
    c.add_override("ERC721", approved);
    for line in [
        "ProxyRegistry proxyRegistry = ProxyRegistry(proxyRegistryAddress);",
        "if (address(proxyRegistry.proxies(owner)) == operator) {",
        "    return true;",
        "}",
    ] {
        c.add_function_code(line, approved)?;
    }
    Ok(())
}

fn ownable_delegate_proxy(license: &str) -> Contract {
    let mut c = ContractBuilder::new("OwnableDelegateProxy");
    c.set_license(license);
    c.add_variable("// Per-user proxy deployed through the OpenSea proxy registry.");
    c.build()
}

fn proxy_registry(license: &str) -> Contract {
    let mut c = ContractBuilder::new("ProxyRegistry");
    c.set_license(license);
    c.add_variable("mapping(address => OwnableDelegateProxy) public proxies;");
    c.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parent_names(contract: &Contract) -> Vec<&str> {
        contract
            .parents()
            .iter()
            .map(|p| p.contract.name.as_str())
            .collect()
    }

    #[test]
    fn test_registry_signatures_are_distinct() {
        let regular = FUNCTIONS.get("safeMint").unwrap().signature();
        let incremental = FUNCTIONS.get("safeMintIncremental").unwrap().signature();
        assert_ne!(regular, incremental);
        assert_eq!(regular.name, incremental.name);
    }

    #[test]
    fn test_feature_parents_in_order() {
        let mut opts = Erc721Options::new("MyToken", "MTK");
        opts.enumerable = true;
        opts.uri_storage = true;
        opts.pausable = true;
        opts.burnable = true;
        opts.mintable = true;

        let contracts = build_erc721(&opts).unwrap();
        assert_eq!(contracts.len(), 1);
        assert_eq!(
            parent_names(&contracts[0]),
            [
                "ERC721",
                "ERC721Enumerable",
                "ERC721URIStorage",
                "Pausable",
                "Ownable",
                "ERC721Burnable",
            ]
        );
    }

    #[test]
    fn test_open_sea_adds_declarations_first() {
        let mut opts = Erc721Options::new("MyToken", "MTK");
        opts.open_sea = true;
        opts.common.license = "Apache-2.0".to_string();

        let contracts = build_erc721(&opts).unwrap();
        let names: Vec<_> = contracts.iter().map(Contract::name).collect();
        assert_eq!(names, ["OwnableDelegateProxy", "ProxyRegistry", "MyToken"]);
        assert!(contracts.iter().all(|c| c.license() == "Apache-2.0"));
        assert_eq!(contracts[2].constructor_args().len(), 1);
    }

    #[test]
    fn test_empty_base_uri_is_ignored() {
        let mut opts = Erc721Options::new("MyToken", "MTK");
        opts.base_uri = Some(String::new());

        let contracts = build_erc721(&opts).unwrap();
        let base_uri = FUNCTIONS.get("_baseURI").unwrap().signature();
        assert!(contracts[0].function(&base_uri).is_none());
    }
}
