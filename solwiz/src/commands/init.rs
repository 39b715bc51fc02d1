use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use solwiz_core::{File, Overwrite, WriteResult};
use solwiz_options::{ContractKind, OptionsFile, template};

#[derive(Args)]
pub struct InitCommand {
    /// Token standard: ERC721 or ERC1155 (anything else falls back to ERC721)
    #[arg(short, long, default_value = "ERC721")]
    pub kind: String,

    /// Where to write the option record
    #[arg(short, long, default_value = OptionsFile::DEFAULT_NAME)]
    pub output: PathBuf,

    /// Replace an existing file
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let kind = ContractKind::sanitize(&self.kind);
        let overwrite = if self.force {
            Overwrite::Always
        } else {
            Overwrite::IfMissing
        };

        let result = File::new(&self.output, template(kind))
            .with_overwrite(overwrite)
            .write()
            .wrap_err_with(|| format!("Failed to write {}", self.output.display()))?;

        match result {
            WriteResult::Written => {
                println!("Created {} option record in {}", kind, self.output.display());
                println!();
                println!("Next steps:");
                println!("  solwiz check -c {}", self.output.display());
                println!("  solwiz generate -c {}", self.output.display());
            }
            WriteResult::Skipped => {
                println!(
                    "{} already exists, use --force to replace it",
                    self.output.display()
                );
            }
        }
        Ok(())
    }
}
