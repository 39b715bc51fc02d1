//! Starter option records written by `solwiz init`.

use crate::ContractKind;

const ERC721: &str = r#"# Options for `solwiz generate`.
kind = "ERC721"
name = "MyToken"
symbol = "MTK"
# base-uri = "https://example.com/"

enumerable = false
uri-storage = false
burnable = false
pausable = false
mintable = true
incremental = true
open-sea = false

access = "ownable"          # or "roles"
# upgradeable = "uups"      # or "transparent"
license = "MIT"
"#;

const ERC1155: &str = r#"# Options for `solwiz generate`.
kind = "ERC1155"
name = "MyToken"
uri = "https://example.com/{id}.json"

burnable = false
pausable = false
mintable = true
supply = false
updatable-uri = true

access = "ownable"          # or "roles"
# upgradeable = "uups"      # or "transparent"
license = "MIT"
"#;

/// Starter option record for `kind`.
pub fn template(kind: ContractKind) -> &'static str {
    match kind {
        ContractKind::Erc721 => ERC721,
        ContractKind::Erc1155 => ERC1155,
    }
}
