//! Function specifications and the per-contract function definitions built from them.

use std::fmt;

use indexmap::IndexSet;

use crate::{Error, Result};

/// Function visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Internal,
    Public,
    External,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::Public => "public",
            Self::External => "external",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State mutability. `NonPayable` is the implicit default and is never rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mutability {
    #[default]
    NonPayable,
    View,
    Pure,
    Payable,
}

impl Mutability {
    /// Keyword to render, if any.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Self::NonPayable => None,
            Self::View => Some("view"),
            Self::Pure => Some("pure"),
            Self::Payable => Some("payable"),
        }
    }
}

/// A named, typed function or constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionArgument {
    pub name: String,
    /// Solidity type including data location, e.g. `string memory`.
    pub ty: String,
}

impl FunctionArgument {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// The fixed shape of a function: everything but its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSpec {
    /// Function name as rendered.
    pub name: String,
    pub visibility: Visibility,
    pub args: Vec<FunctionArgument>,
    /// Return types including data location.
    pub returns: Vec<String>,
    pub mutability: Mutability,
    /// NatSpec line rendered above the function.
    pub doc: Option<String>,
}

impl FunctionSpec {
    /// Create a non-payable function with no arguments and no return values.
    pub fn new(name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            visibility,
            args: Vec::new(),
            returns: Vec::new(),
            mutability: Mutability::NonPayable,
            doc: None,
        }
    }

    /// Add an argument.
    pub fn arg(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.args.push(FunctionArgument::new(name, ty));
        self
    }

    /// Add a return type.
    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns.push(ty.into());
        self
    }

    /// Set the state mutability.
    pub fn mutability(mut self, mutability: Mutability) -> Self {
        self.mutability = mutability;
        self
    }

    /// Set the NatSpec comment.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Identity of this function within a contract.
    pub fn signature(&self) -> FunctionSignature {
        FunctionSignature {
            name: self.name.clone(),
            arg_types: self.args.iter().map(|a| a.ty.clone()).collect(),
        }
    }
}

/// Name plus argument types: two specs with equal signatures address the same function.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionSignature {
    pub name: String,
    pub arg_types: Vec<String>,
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.arg_types.join(","))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Body {
    #[default]
    Empty,
    Appended(Vec<String>),
    Replaced(Vec<String>),
}

/// A function as accumulated inside one contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractFunction {
    spec: FunctionSpec,
    overrides: IndexSet<String>,
    modifiers: Vec<String>,
    body: Body,
}

impl ContractFunction {
    pub(crate) fn new(spec: FunctionSpec) -> Self {
        Self {
            spec,
            overrides: IndexSet::new(),
            modifiers: Vec::new(),
            body: Body::Empty,
        }
    }

    pub fn spec(&self) -> &FunctionSpec {
        &self.spec
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    /// Ancestors declaring this function, in first-insertion order.
    pub fn overrides(&self) -> &IndexSet<String> {
        &self.overrides
    }

    pub fn modifiers(&self) -> &[String] {
        &self.modifiers
    }

    /// Body lines, either appended fragments or the replaced body.
    pub fn code(&self) -> &[String] {
        match &self.body {
            Body::Empty => &[],
            Body::Appended(lines) | Body::Replaced(lines) => lines,
        }
    }

    /// Whether the body was set with `set_function_body`.
    pub fn is_replaced(&self) -> bool {
        matches!(self.body, Body::Replaced(_))
    }

    pub(crate) fn add_override(&mut self, ancestor: &str) -> bool {
        self.overrides.insert(ancestor.to_string())
    }

    pub(crate) fn add_modifier(&mut self, modifier: &str) {
        self.modifiers.push(modifier.to_string());
    }

    pub(crate) fn append_code(&mut self, line: &str) -> Result<()> {
        match &mut self.body {
            Body::Replaced(_) => Err(Error::BodyAlreadyReplaced {
                function: self.spec.signature().to_string(),
            }),
            Body::Appended(lines) => {
                lines.push(line.to_string());
                Ok(())
            }
            Body::Empty => {
                self.body = Body::Appended(vec![line.to_string()]);
                Ok(())
            }
        }
    }

    pub(crate) fn replace_body(&mut self, lines: Vec<String>) -> Result<()> {
        match self.body {
            Body::Appended(_) => Err(Error::BodyAlreadyAppended {
                function: self.spec.signature().to_string(),
            }),
            Body::Empty | Body::Replaced(_) => {
                self.body = Body::Replaced(lines);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn before_token_transfer() -> FunctionSpec {
        FunctionSpec::new("_beforeTokenTransfer", Visibility::Internal)
            .arg("from", "address")
            .arg("to", "address")
            .arg("tokenId", "uint256")
    }

    #[test]
    fn test_signature_uses_argument_types() {
        let sig = before_token_transfer().signature();
        assert_eq!(sig.to_string(), "_beforeTokenTransfer(address,address,uint256)");
    }

    #[test]
    fn test_signature_ignores_argument_names_and_returns() {
        let renamed = FunctionSpec::new("_beforeTokenTransfer", Visibility::Internal)
            .arg("sender", "address")
            .arg("recipient", "address")
            .arg("id", "uint256");
        assert_eq!(renamed.signature(), before_token_transfer().signature());

        let overload = FunctionSpec::new("_beforeTokenTransfer", Visibility::Internal)
            .arg("from", "address");
        assert_ne!(overload.signature(), before_token_transfer().signature());
    }

    #[test]
    fn test_mutability_keyword() {
        assert_eq!(Mutability::NonPayable.keyword(), None);
        assert_eq!(Mutability::View.keyword(), Some("view"));
        assert_eq!(Mutability::Pure.keyword(), Some("pure"));
        assert_eq!(Mutability::Payable.keyword(), Some("payable"));
    }

    #[test]
    fn test_append_then_replace_is_rejected() {
        let mut f = ContractFunction::new(before_token_transfer());
        f.append_code("a;").unwrap();
        assert!(matches!(
            f.replace_body(vec!["b;".into()]),
            Err(Error::BodyAlreadyAppended { .. })
        ));
        assert_eq!(f.code(), ["a;"]);
    }

    #[test]
    fn test_replace_twice_last_write_wins() {
        let mut f = ContractFunction::new(before_token_transfer());
        f.replace_body(vec!["a;".into()]).unwrap();
        f.replace_body(vec!["b;".into(), "c;".into()]).unwrap();
        assert!(f.is_replaced());
        assert_eq!(f.code(), ["b;", "c;"]);
        assert!(matches!(
            f.append_code("d;"),
            Err(Error::BodyAlreadyReplaced { ref function }) if function.starts_with("_beforeTokenTransfer(")
        ));
    }

    #[test]
    fn test_overrides_keep_first_insertion_order() {
        let mut f = ContractFunction::new(before_token_transfer());
        assert!(f.add_override("ERC721Enumerable"));
        assert!(f.add_override("ERC721"));
        assert!(!f.add_override("ERC721Enumerable"));
        let names: Vec<_> = f.overrides().iter().map(String::as_str).collect();
        assert_eq!(names, ["ERC721Enumerable", "ERC721"]);
    }
}
