//! Option records for the solwiz contract generator.
//!
//! An option record is a small TOML document whose `kind` key selects the
//! token standard and whose remaining keys toggle that standard's features:
//!
//! ```
//! use solwiz_options::{ContractKind, GenericOptions};
//!
//! let options: GenericOptions = r#"
//! kind = "ERC721"
//! name = "MyToken"
//! symbol = "MTK"
//! mintable = true
//! "#
//! .parse()?;
//!
//! assert_eq!(options.kind(), ContractKind::Erc721);
//! assert_eq!(options.name(), "MyToken");
//! # Ok::<(), Box<solwiz_options::Error>>(())
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod kind;
mod options;
mod template;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use file::OptionsFile;
pub use kind::ContractKind;
pub use options::{
    Access, CommonOptions, Erc721Options, Erc1155Options, GenericOptions, Upgradeable,
};
pub use template::template;
