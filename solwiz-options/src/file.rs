use std::path::{Path, PathBuf};

use crate::{Error, GenericOptions, Result};

/// An option record on disk, with both raw content and parsed options.
#[derive(Debug)]
pub struct OptionsFile {
    path: PathBuf,
    content: String,
    options: GenericOptions,
}

impl OptionsFile {
    /// Default file name looked up by the CLI.
    pub const DEFAULT_NAME: &'static str = "solwiz.toml";

    /// Open, parse and validate an option record.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let options = GenericOptions::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            options,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn options(&self) -> &GenericOptions {
        &self.options
    }
}
