//! Option records for each supported token standard.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    ContractKind, Result,
    error::SourceContext,
    validate::{validate_contract_name, validate_license},
};

/// Who may call privileged functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    /// A single owner (`Ownable`, `onlyOwner`).
    #[default]
    Ownable,
    /// One role per capability (`AccessControl`, `onlyRole(X_ROLE)`).
    Roles,
}

impl Access {
    pub fn as_str(&self) -> &'static str {
        match self {
            Access::Ownable => "ownable",
            Access::Roles => "roles",
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Proxy pattern for upgradeable contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Upgradeable {
    /// Upgrade logic lives in the implementation (`UUPSUpgradeable`).
    Uups,
    /// Upgrade logic lives in the proxy.
    Transparent,
}

impl Upgradeable {
    pub fn as_str(&self) -> &'static str {
        match self {
            Upgradeable::Uups => "uups",
            Upgradeable::Transparent => "transparent",
        }
    }
}

impl fmt::Display for Upgradeable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_license() -> String {
    "MIT".to_string()
}

fn default_true() -> bool {
    true
}

/// Options shared by every token standard.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CommonOptions {
    #[serde(default)]
    pub access: Access,
    /// Omitted means the contract is not upgradeable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgradeable: Option<Upgradeable>,
    /// SPDX license identifier.
    #[serde(default = "default_license")]
    pub license: String,
}

impl Default for CommonOptions {
    fn default() -> Self {
        Self {
            access: Access::default(),
            upgradeable: None,
            license: default_license(),
        }
    }
}

/// Options for an ERC721 non-fungible token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Erc721Options {
    pub name: String,
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_uri: Option<String>,
    #[serde(default)]
    pub enumerable: bool,
    #[serde(default)]
    pub uri_storage: bool,
    #[serde(default)]
    pub burnable: bool,
    #[serde(default)]
    pub pausable: bool,
    #[serde(default)]
    pub mintable: bool,
    /// Mint with an auto-incrementing token id. Requires `mintable`.
    #[serde(default)]
    pub incremental: bool,
    /// Pre-approve the OpenSea proxy registry for every owner.
    #[serde(default)]
    pub open_sea: bool,
    #[serde(flatten)]
    pub common: CommonOptions,
}

impl Erc721Options {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            base_uri: None,
            enumerable: false,
            uri_storage: false,
            burnable: false,
            pausable: false,
            mintable: false,
            incremental: false,
            open_sea: false,
            common: CommonOptions::default(),
        }
    }
}

/// Options for an ERC1155 multi token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Erc1155Options {
    pub name: String,
    /// Metadata URI template, usually ending in `{id}.json`.
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub burnable: bool,
    #[serde(default)]
    pub pausable: bool,
    #[serde(default)]
    pub mintable: bool,
    /// Track total supply per id.
    #[serde(default)]
    pub supply: bool,
    /// Expose a privileged `setURI`.
    #[serde(default = "default_true")]
    pub updatable_uri: bool,
    #[serde(flatten)]
    pub common: CommonOptions,
}

impl Erc1155Options {
    pub fn new(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            burnable: false,
            pausable: false,
            mintable: false,
            supply: false,
            updatable_uri: true,
            common: CommonOptions::default(),
        }
    }
}

/// An option record: the `kind` discriminator plus that standard's options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind")]
pub enum GenericOptions {
    #[serde(rename = "ERC721", alias = "erc721", alias = "Erc721")]
    Erc721(Erc721Options),
    #[serde(rename = "ERC1155", alias = "erc1155", alias = "Erc1155")]
    Erc1155(Erc1155Options),
}

impl GenericOptions {
    pub fn kind(&self) -> ContractKind {
        match self {
            GenericOptions::Erc721(_) => ContractKind::Erc721,
            GenericOptions::Erc1155(_) => ContractKind::Erc1155,
        }
    }

    /// Name of the main contract.
    pub fn name(&self) -> &str {
        match self {
            GenericOptions::Erc721(opts) => &opts.name,
            GenericOptions::Erc1155(opts) => &opts.name,
        }
    }

    pub fn common(&self) -> &CommonOptions {
        match self {
            GenericOptions::Erc721(opts) => &opts.common,
            GenericOptions::Erc1155(opts) => &opts.common,
        }
    }

    /// Parse and validate an option record, using `filename` in diagnostics.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let options: GenericOptions = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        options.validate(&ctx)?;
        tracing::debug!(kind = %options.kind(), name = %options.name(), "parsed option record");
        Ok(options)
    }

    /// Check constraints serde cannot express.
    pub fn validate(&self, ctx: &SourceContext<'_>) -> Result<()> {
        if let Some(reason) = validate_contract_name(self.name()) {
            return Err(ctx.invalid_identifier_error(self.name(), "name", reason));
        }
        if let Some(reason) = validate_license(&self.common().license) {
            return Err(ctx.validation_error(reason, "license"));
        }
        if let GenericOptions::Erc721(opts) = self
            && opts.incremental
            && !opts.mintable
        {
            return Err(ctx.validation_error("`incremental` requires `mintable = true`", "incremental"));
        }
        Ok(())
    }
}

impl FromStr for GenericOptions {
    type Err = Box<crate::Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "solwiz.toml")
    }
}

impl From<Erc721Options> for GenericOptions {
    fn from(options: Erc721Options) -> Self {
        GenericOptions::Erc721(options)
    }
}

impl From<Erc1155Options> for GenericOptions {
    fn from(options: Erc1155Options) -> Self {
        GenericOptions::Erc1155(options)
    }
}
