//! Import collection and deduplication.

use indexmap::IndexSet;

/// Tracks import paths and deduplicates them.
///
/// Maintains first-insertion order for deterministic output.
///
/// # Example
///
/// ```
/// use solwiz_codegen::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("@openzeppelin/contracts/token/ERC721/ERC721.sol");
/// imports.add("@openzeppelin/contracts/access/Ownable.sol");
/// imports.add("@openzeppelin/contracts/token/ERC721/ERC721.sol");
///
/// assert_eq!(imports.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    paths: IndexSet<String>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import path. Returns `false` if it was already present.
    pub fn add(&mut self, path: impl Into<String>) -> bool {
        self.paths.insert(path.into())
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Render one `import` statement per path.
    pub fn statements(&self) -> Vec<String> {
        self.iter().map(|p| format!("import \"{p}\";")).collect()
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Get the number of distinct imports.
    pub fn len(&self) -> usize {
        self.paths.len()
    }
}
