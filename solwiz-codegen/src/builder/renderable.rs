//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Layout is built as a tree of fragments first and only turned into text by
//! [`CodeBuilder`](super::CodeBuilder), so nesting never depends on string
//! concatenation order.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line, never indented.
    Blank,
    /// Indent the contained fragments by one level.
    Indent(Vec<CodeFragment>),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create an indented fragment sequence.
    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

/// Blanket implementation for references.
impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl Renderable for Vec<CodeFragment> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.clone()
    }
}

/// Join non-empty sections with exactly one blank line between them.
pub fn space_between<I>(sections: I) -> Vec<CodeFragment>
where
    I: IntoIterator<Item = Vec<CodeFragment>>,
{
    let mut out = Vec::new();
    for section in sections.into_iter().filter(|s| !s.is_empty()) {
        if !out.is_empty() {
            out.push(CodeFragment::Blank);
        }
        out.extend(section);
    }
    out
}
