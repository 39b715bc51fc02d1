//! Rendered ERC1155 contracts.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use solwiz_codegen::{PrintOptions, print_contracts};
use solwiz_contracts::build_generic;
use solwiz_options::{Access, Erc1155Options, GenericOptions, Upgradeable};

fn render(opts: Erc1155Options) -> String {
    let contracts = build_generic(&GenericOptions::from(opts)).unwrap();
    print_contracts(&contracts, &PrintOptions::new()).unwrap()
}

#[test]
fn test_full_featured() {
    let mut opts = Erc1155Options::new("MyToken", "https://example.com/{id}.json");
    opts.pausable = true;
    opts.burnable = true;
    opts.mintable = true;
    opts.supply = true;

    insta::assert_snapshot!(render(opts), @r#"
    // SPDX-License-Identifier: MIT
    pragma solidity ^0.8.2;

    import "@openzeppelin/contracts/token/ERC1155/ERC1155.sol";
    import "@openzeppelin/contracts/access/Ownable.sol";
    import "@openzeppelin/contracts/security/Pausable.sol";
    import "@openzeppelin/contracts/token/ERC1155/extensions/ERC1155Burnable.sol";
    import "@openzeppelin/contracts/token/ERC1155/extensions/ERC1155Supply.sol";

    contract MyToken is ERC1155, Ownable, Pausable, ERC1155Burnable, ERC1155Supply {
        constructor() ERC1155("https://example.com/{id}.json") {}

        function setURI(string memory newuri) public onlyOwner {
            _setURI(newuri);
        }

        function pause() public onlyOwner {
            _pause();
        }

        function unpause() public onlyOwner {
            _unpause();
        }

        function mint(address account, uint256 id, uint256 amount, bytes memory data)
            public
            onlyOwner
        {
            _mint(account, id, amount, data);
        }

        function mintBatch(address to, uint256[] memory ids, uint256[] memory amounts, bytes memory data)
            public
            onlyOwner
        {
            _mintBatch(to, ids, amounts, data);
        }

        // The following functions are overrides required by Solidity.

        function _beforeTokenTransfer(address operator, address from, address to, uint256[] memory ids, uint256[] memory amounts, bytes memory data)
            internal
            whenNotPaused
            override(ERC1155, ERC1155Supply)
        {
            super._beforeTokenTransfer(operator, from, to, ids, amounts, data);
        }
    }
    "#);
}

#[test]
fn test_roles() {
    let mut opts = Erc1155Options::new("MyToken", "");
    opts.common.access = Access::Roles;

    insta::assert_snapshot!(render(opts), @r#"
    // SPDX-License-Identifier: MIT
    pragma solidity ^0.8.2;

    import "@openzeppelin/contracts/token/ERC1155/ERC1155.sol";
    import "@openzeppelin/contracts/access/AccessControl.sol";

    contract MyToken is ERC1155, AccessControl {
        constructor() ERC1155("") {
            _setupRole(DEFAULT_ADMIN_ROLE, msg.sender);
            _setupRole(URI_SETTER_ROLE, msg.sender);
        }

        function setURI(string memory newuri) public onlyRole(URI_SETTER_ROLE) {
            _setURI(newuri);
        }

        // The following functions are overrides required by Solidity.

        function supportsInterface(bytes4 interfaceId)
            public
            view
            override(ERC1155, AccessControl)
            returns (bool)
        {
            return super.supportsInterface(interfaceId);
        }

        bytes32 public constant URI_SETTER_ROLE = keccak256("URI_SETTER_ROLE");
    }
    "#);
}

#[test]
fn test_pausable_without_supply() {
    let mut opts = Erc1155Options::new("MyToken", "");
    opts.pausable = true;
    opts.updatable_uri = false;

    let source = render(opts);
    assert!(source.contains("        whenNotPaused\n        override\n    {\n"), "{source}");
    assert!(!source.contains("setURI"));
}

#[test]
fn test_upgradeable_uri_initializer() {
    let mut opts = Erc1155Options::new("MyToken", "ipfs://{id}");
    opts.common.upgradeable = Some(Upgradeable::Transparent);

    let source = render(opts);
    assert!(source.contains("contract MyToken is Initializable, ERC1155Upgradeable, OwnableUpgradeable {"));
    assert!(source.contains("        __ERC1155_init(\"ipfs://{id}\");\n        __Ownable_init();\n"));
}
