//! Feature builders for OpenZeppelin-based token contracts.
//!
//! Each token standard starts from its base contract and layers optional
//! features on top. Features only talk to the contract through
//! [`ContractBuilder`](solwiz_ir::ContractBuilder), so any two of them can
//! touch the same function and the renderer works out the override clause.
//!
//! ```
//! use solwiz_contracts::build_generic;
//! use solwiz_options::{Erc721Options, GenericOptions};
//!
//! let mut opts = Erc721Options::new("MyToken", "MTK");
//! opts.mintable = true;
//!
//! let contracts = build_generic(&GenericOptions::from(opts))?;
//! assert_eq!(contracts.len(), 1);
//! assert!(contracts[0].has_parent("Ownable"));
//! # Ok::<(), solwiz_ir::Error>(())
//! ```

mod access;
mod common;
mod erc1155;
mod erc721;
mod pausable;
mod upgradeable;

pub use access::set_access_control;
pub use erc721::build_erc721;
pub use erc1155::build_erc1155;
pub use pausable::add_pausable;
pub use upgradeable::{add_upgrade_authorization, set_upgradeable};

use solwiz_ir::{Contract, Result};
use solwiz_options::GenericOptions;

/// Assemble every contract an option record describes, in output order.
pub fn build_generic(options: &GenericOptions) -> Result<Vec<Contract>> {
    match options {
        GenericOptions::Erc721(opts) => build_erc721(opts),
        GenericOptions::Erc1155(opts) => Ok(vec![build_erc1155(opts)?]),
    }
}
