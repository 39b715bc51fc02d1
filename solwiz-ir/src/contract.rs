//! The contract IR root and its builder.

use indexmap::IndexMap;
use tracing::trace;

use crate::{
    ContractFunction, Error, FunctionArgument, FunctionSignature, FunctionSpec, Result,
};

/// A contract or library referenced by import path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParentContract {
    pub name: String,
    pub path: String,
}

impl ParentContract {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// An argument expression passed to a parent constructor or initializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Rendered as an escaped string literal.
    String(String),
    /// Rendered as a decimal integer.
    Int(i64),
    /// Rendered verbatim.
    Lit(String),
}

impl Value {
    pub fn lit(expr: impl Into<String>) -> Self {
        Self::Lit(expr.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// A base contract together with its constructor arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parent {
    pub contract: ParentContract,
    pub params: Vec<Value>,
}

/// A `using <library> for <type>;` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Using {
    pub library: ParentContract,
    pub using_for: String,
}

/// One assembled contract, read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contract {
    name: String,
    license: String,
    upgradeable: bool,
    parents: Vec<Parent>,
    functions: IndexMap<FunctionSignature, ContractFunction>,
    variables: Vec<String>,
    using: Vec<Using>,
    constructor_args: Vec<FunctionArgument>,
    constructor_code: Vec<String>,
}

impl Contract {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// SPDX license identifier.
    pub fn license(&self) -> &str {
        &self.license
    }

    pub fn is_upgradeable(&self) -> bool {
        self.upgradeable
    }

    /// Parents in the order they were added.
    pub fn parents(&self) -> &[Parent] {
        &self.parents
    }

    /// Position of a parent in the inheritance list.
    pub fn parent_position(&self, name: &str) -> Option<usize> {
        self.parents.iter().position(|p| p.contract.name == name)
    }

    pub fn has_parent(&self, name: &str) -> bool {
        self.parent_position(name).is_some()
    }

    /// Functions in first-touch order.
    pub fn functions(&self) -> impl Iterator<Item = &ContractFunction> {
        self.functions.values()
    }

    pub fn function(&self, signature: &FunctionSignature) -> Option<&ContractFunction> {
        self.functions.get(signature)
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn using(&self) -> &[Using] {
        &self.using
    }

    pub fn constructor_args(&self) -> &[FunctionArgument] {
        &self.constructor_args
    }

    pub fn constructor_code(&self) -> &[String] {
        &self.constructor_code
    }
}

/// Single-owner, append-only assembler for a [`Contract`].
///
/// # Example
///
/// ```
/// use solwiz_ir::{ContractBuilder, FunctionSpec, ParentContract, Visibility};
///
/// let mint = FunctionSpec::new("safeMint", Visibility::Public).arg("to", "address");
///
/// let mut c = ContractBuilder::new("MyToken");
/// c.add_parent(
///     ParentContract::new("ERC721", "@openzeppelin/contracts/token/ERC721/ERC721.sol"),
///     vec!["MyToken".into(), "MTK".into()],
/// )?;
/// c.add_function_code("_safeMint(to, 0);", &mint)?;
///
/// let contract = c.build();
/// assert_eq!(contract.parents().len(), 1);
/// assert_eq!(contract.functions().count(), 1);
/// # Ok::<(), solwiz_ir::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ContractBuilder {
    contract: Contract,
}

impl ContractBuilder {
    /// Create an empty, MIT-licensed, non-upgradeable contract.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            contract: Contract {
                name: name.into(),
                license: "MIT".to_string(),
                upgradeable: false,
                parents: Vec::new(),
                functions: IndexMap::new(),
                variables: Vec::new(),
                using: Vec::new(),
                constructor_args: Vec::new(),
                constructor_code: Vec::new(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.contract.name
    }

    pub fn has_parent(&self, name: &str) -> bool {
        self.contract.has_parent(name)
    }

    /// The contract assembled so far.
    pub fn contract(&self) -> &Contract {
        &self.contract
    }

    /// Freeze the contract for rendering.
    pub fn build(self) -> Contract {
        self.contract
    }

    pub fn set_license(&mut self, license: impl Into<String>) {
        self.contract.license = license.into();
    }

    /// Render the contract against the upgradeable contracts package.
    pub fn set_upgradeable(&mut self) {
        self.contract.upgradeable = true;
    }

    /// Append a parent. Its position is the inheritance-list position.
    pub fn add_parent(&mut self, contract: ParentContract, params: Vec<Value>) -> Result<()> {
        if self.has_parent(&contract.name) {
            return Err(Error::DuplicateParent {
                contract: self.contract.name.clone(),
                name: contract.name,
            });
        }
        trace!(contract = %self.contract.name, parent = %contract.name, "add parent");
        self.contract.parents.push(Parent { contract, params });
        Ok(())
    }

    pub fn add_using(&mut self, library: ParentContract, using_for: impl Into<String>) {
        self.contract.using.push(Using {
            library,
            using_for: using_for.into(),
        });
    }

    /// Record that `ancestor` declares `spec`, creating the function if unseen.
    pub fn add_override(&mut self, ancestor: &str, spec: &FunctionSpec) {
        if self.function_mut(spec).add_override(ancestor) {
            trace!(contract = %self.contract.name, function = %spec.name, ancestor, "add override");
        }
    }

    pub fn add_modifier(&mut self, modifier: &str, spec: &FunctionSpec) {
        self.function_mut(spec).add_modifier(modifier);
    }

    /// Append one line to the function body.
    pub fn add_function_code(&mut self, line: &str, spec: &FunctionSpec) -> Result<()> {
        self.function_mut(spec).append_code(line)
    }

    /// Replace the whole function body. Calling it again replaces it again.
    pub fn set_function_body<I, S>(&mut self, lines: I, spec: &FunctionSpec) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines = lines.into_iter().map(Into::into).collect();
        self.function_mut(spec).replace_body(lines)
    }

    /// Append a raw declaration or comment line. Lines are never deduplicated.
    pub fn add_variable(&mut self, line: impl Into<String>) {
        self.contract.variables.push(line.into());
    }

    pub fn add_constructor_argument(&mut self, arg: FunctionArgument) {
        self.contract.constructor_args.push(arg);
    }

    pub fn add_constructor_code(&mut self, line: impl Into<String>) {
        self.contract.constructor_code.push(line.into());
    }

    fn function_mut(&mut self, spec: &FunctionSpec) -> &mut ContractFunction {
        self.contract
            .functions
            .entry(spec.signature())
            .or_insert_with(|| ContractFunction::new(spec.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Visibility;

    fn erc721() -> ParentContract {
        ParentContract::new("ERC721", "@openzeppelin/contracts/token/ERC721/ERC721.sol")
    }

    fn safe_mint() -> FunctionSpec {
        FunctionSpec::new("safeMint", Visibility::Public)
            .arg("to", "address")
            .arg("tokenId", "uint256")
    }

    #[test]
    fn test_duplicate_parent() {
        let mut c = ContractBuilder::new("MyToken");
        c.add_parent(erc721(), vec!["MyToken".into(), "MTK".into()])
            .unwrap();

        let err = c.add_parent(erc721(), vec![]).unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateParent {
                contract: "MyToken".to_string(),
                name: "ERC721".to_string(),
            }
        );
        assert_eq!(c.contract().parents()[0].params.len(), 2);
    }

    #[test]
    fn test_parents_keep_insertion_order() {
        let mut c = ContractBuilder::new("MyToken");
        c.add_parent(ParentContract::new("B", "b.sol"), vec![]).unwrap();
        c.add_parent(ParentContract::new("A", "a.sol"), vec![]).unwrap();
        let contract = c.build();
        assert_eq!(contract.parent_position("B"), Some(0));
        assert_eq!(contract.parent_position("A"), Some(1));
        assert_eq!(contract.parent_position("C"), None);
    }

    #[test]
    fn test_append_keeps_call_order() {
        let mut c = ContractBuilder::new("MyToken");
        c.add_function_code("first();", &safe_mint()).unwrap();
        c.add_function_code("second();", &safe_mint()).unwrap();
        c.add_function_code("third();", &safe_mint()).unwrap();

        let contract = c.build();
        let f = contract.function(&safe_mint().signature()).unwrap();
        assert_eq!(f.code(), ["first();", "second();", "third();"]);
        assert!(!f.is_replaced());
    }

    #[test]
    fn test_replace_after_append_fails() {
        let mut c = ContractBuilder::new("MyToken");
        c.add_function_code("_safeMint(to, tokenId);", &safe_mint())
            .unwrap();

        let err = c.set_function_body(["return;"], &safe_mint()).unwrap_err();
        assert_eq!(
            err,
            Error::BodyAlreadyAppended {
                function: "safeMint(address,uint256)".to_string()
            }
        );
    }

    #[test]
    fn test_append_after_replace_fails() {
        let mut c = ContractBuilder::new("MyToken");
        c.set_function_body(Vec::<String>::new(), &safe_mint()).unwrap();

        let err = c.add_function_code("x;", &safe_mint()).unwrap_err();
        assert!(matches!(err, Error::BodyAlreadyReplaced { .. }));
    }

    #[test]
    fn test_override_creates_function_once() {
        let mut c = ContractBuilder::new("MyToken");
        c.add_override("ERC721", &safe_mint());
        c.add_override("ERC721Enumerable", &safe_mint());
        c.add_override("ERC721", &safe_mint());
        c.add_modifier("onlyOwner", &safe_mint());

        let contract = c.build();
        assert_eq!(contract.functions().count(), 1);
        let f = contract.functions().next().unwrap();
        assert_eq!(f.overrides().len(), 2);
        assert_eq!(f.modifiers(), ["onlyOwner"]);
    }

    #[test]
    fn test_variables_are_not_deduplicated() {
        let mut c = ContractBuilder::new("MyToken");
        c.add_variable("// section");
        c.add_variable("// section");
        assert_eq!(c.contract().variables().len(), 2);
    }

    #[test]
    fn test_constructor_parts_keep_order() {
        let mut c = ContractBuilder::new("MyToken");
        c.add_constructor_argument(FunctionArgument::new("a", "address"));
        c.add_constructor_argument(FunctionArgument::new("b", "uint256"));
        c.add_constructor_code("x = a;");
        c.add_constructor_code("y = b;");

        let contract = c.build();
        let names: Vec<_> = contract
            .constructor_args()
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(contract.constructor_code(), ["x = a;", "y = b;"]);
    }

    #[test]
    fn test_defaults() {
        let mut c = ContractBuilder::new("MyToken");
        assert_eq!(c.name(), "MyToken");
        assert_eq!(c.contract().license(), "MIT");
        assert!(!c.contract().is_upgradeable());

        c.set_license("Apache-2.0");
        c.set_upgradeable();
        let contract = c.build();
        assert_eq!(contract.license(), "Apache-2.0");
        assert!(contract.is_upgradeable());
    }

    #[test]
    fn test_value_conversions() {
        assert_eq!(Value::from("MTK"), Value::String("MTK".to_string()));
        assert_eq!(Value::from(18i64), Value::Int(18));
        assert_eq!(Value::lit("msg.sender"), Value::Lit("msg.sender".to_string()));
    }
}
