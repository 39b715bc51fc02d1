//! Token standards the generator can assemble.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ContractKind {
    #[default]
    #[serde(rename = "ERC721")]
    Erc721,
    #[serde(rename = "ERC1155")]
    Erc1155,
}

impl ContractKind {
    pub const ALL: [ContractKind; 2] = [ContractKind::Erc721, ContractKind::Erc1155];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractKind::Erc721 => "ERC721",
            ContractKind::Erc1155 => "ERC1155",
        }
    }

    /// Lenient parse for user input: anything unrecognized becomes ERC721.
    pub fn sanitize(input: &str) -> Self {
        input.parse().unwrap_or_default()
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ERC721" => Ok(ContractKind::Erc721),
            "ERC1155" => Ok(ContractKind::Erc1155),
            _ => Err(format!(
                "unknown contract kind '{s}', expected 'ERC721' or 'ERC1155'"
            )),
        }
    }
}
