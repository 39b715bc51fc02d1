use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use solwiz_codegen::{PrintOptions, print_contracts, print_contracts_versioned};
use solwiz_contracts::build_generic;
use solwiz_core::File;
use solwiz_options::OptionsFile;
use tracing::debug;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the option record (defaults to ./solwiz.toml)
    #[arg(short, long, default_value = OptionsFile::DEFAULT_NAME)]
    pub config: PathBuf,

    /// Output file (defaults to ./<Name>.sol)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pin OpenZeppelin imports to the bundled contracts release
    #[arg(long)]
    pub versioned: bool,

    /// Print the generated source instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = OptionsFile::open(&self.config).unwrap_or_exit();
        let options = file.options();

        let contracts = build_generic(options).wrap_err("Failed to assemble contracts")?;
        let source = if self.versioned {
            print_contracts_versioned(&contracts)
        } else {
            print_contracts(&contracts, &PrintOptions::new())
        }
        .wrap_err("Failed to render contracts")?;
        debug!(contracts = contracts.len(), bytes = source.len(), "rendered");

        if self.dry_run {
            print!("{source}");
            return Ok(());
        }

        let output = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.sol", options.name())));
        File::new(&output, source)
            .write()
            .wrap_err_with(|| format!("Failed to write {}", output.display()))?;

        println!("Generated: {}", output.display());
        Ok(())
    }
}
