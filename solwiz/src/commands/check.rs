use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use solwiz_codegen::{OverrideClause, resolve_override};
use solwiz_contracts::build_generic;
use solwiz_ir::Contract;
use solwiz_options::OptionsFile;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the option record (defaults to ./solwiz.toml)
    #[arg(short, long, default_value = OptionsFile::DEFAULT_NAME)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = OptionsFile::open(&self.config).unwrap_or_exit();
        let options = file.options();

        let contracts = build_generic(options).wrap_err("Failed to assemble contracts")?;

        println!("{} ({})", options.name(), options.kind());
        println!();
        for contract in &contracts {
            Self::print_contract(contract)?;
        }
        println!("✓ {} is valid", self.config.display());
        Ok(())
    }

    fn print_contract(contract: &Contract) -> Result<()> {
        let upgradeable = if contract.is_upgradeable() {
            " [upgradeable]"
        } else {
            ""
        };
        println!("contract {}{}", contract.name(), upgradeable);

        if !contract.parents().is_empty() {
            let parents: Vec<_> = contract
                .parents()
                .iter()
                .map(|p| p.contract.name.as_str())
                .collect();
            println!("  parents: {}", parents.join(", "));
        }

        let mut overriding = Vec::new();
        for function in contract.functions() {
            let clause = resolve_override(contract, function)
                .wrap_err_with(|| format!("Invalid override in {}", contract.name()))?;
            let ancestors: Vec<&str> = match clause {
                OverrideClause::None => continue,
                OverrideClause::Single => function.overrides().iter().map(String::as_str).collect(),
                OverrideClause::Multiple(ancestors) => ancestors,
            };
            overriding.push(format!("{} ({})", function.name(), ancestors.join(", ")));
        }
        if !overriding.is_empty() {
            println!("  overrides:");
            for line in overriding {
                println!("    {line}");
            }
        }
        println!();
        Ok(())
    }
}
