//! Solidity source rendering.
//!
//! Turns one or more frozen [`Contract`]s into a complete source file:
//!
//! ```text
//! SPDX + pragma
//! imports (deduplicated, parents first, then libraries)
//! contract <Name> is <parents> {
//!     using directives
//!     constructor / initializer
//!     functions without overrides
//!     functions with overrides
//!     variables
//! }
//! ```
//!
//! Sections are separated by exactly one blank line and empty sections are
//! dropped, so identical IR always renders to identical bytes.

use std::borrow::Cow;

use indexmap::IndexSet;
use solwiz_core::string_literal;
use solwiz_ir::{Contract, ContractFunction, FunctionArgument, Parent, Result, Value};
use tracing::debug;

use crate::{
    ImportCollector,
    builder::{CodeBuilder, CodeFragment, Renderable, space_between},
    names::{upgradeable_import, upgradeable_name, upgradeable_variable},
    overrides::{OverrideClause, resolve_override},
};

/// Compiler version the generated pragma targets.
pub const SOLIDITY_VERSION: &str = "0.8.2";

/// Headings longer than this put each modifier on its own line.
const MAX_HEADING_LENGTH: usize = 72;

const OVERRIDES_COMMENT: &str = "// The following functions are overrides required by Solidity.";

/// Rendering options.
#[derive(Clone, Copy, Default)]
pub struct PrintOptions<'a> {
    transform_import: Option<&'a dyn Fn(&str) -> String>,
}

impl<'a> PrintOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrite every emitted import path, e.g. to pin a package version.
    pub fn transform_import(mut self, transform: &'a dyn Fn(&str) -> String) -> Self {
        self.transform_import = Some(transform);
        self
    }
}

/// Render a single contract.
pub fn print_contract(contract: &Contract, options: &PrintOptions<'_>) -> Result<String> {
    print_contracts(std::slice::from_ref(contract), options)
}

/// Render several contracts into one file, in the given order.
///
/// The file carries one license/pragma header (taken from the first
/// contract) and the union of all imports; each contract block starts at
/// column zero.
pub fn print_contracts(contracts: &[Contract], options: &PrintOptions<'_>) -> Result<String> {
    let mut imports = ImportCollector::new();
    let mut blocks = Vec::with_capacity(contracts.len());

    for contract in contracts {
        debug!(contract = %contract.name(), upgradeable = contract.is_upgradeable(), "rendering contract");
        let helpers = Helpers::new(contract, options);
        for path in contract_imports(contract) {
            imports.add(helpers.import(path));
        }
        blocks.push(contract_block(contract, &helpers)?);
    }

    let license = contracts.first().map_or("MIT", |c| c.license());
    let header = vec![
        CodeFragment::line(format!("// SPDX-License-Identifier: {license}")),
        CodeFragment::line(format!("pragma solidity ^{SOLIDITY_VERSION};")),
    ];
    let imports = imports
        .statements()
        .into_iter()
        .map(CodeFragment::Line)
        .collect();

    let file = space_between([header, imports].into_iter().chain(blocks));

    let mut builder = CodeBuilder::new();
    builder.emit(&file);
    Ok(builder.build())
}

/// Per-contract name and path rewriting.
struct Helpers<'a> {
    upgradeable: bool,
    transform_import: Option<&'a dyn Fn(&str) -> String>,
}

impl<'a> Helpers<'a> {
    fn new(contract: &Contract, options: &PrintOptions<'a>) -> Self {
        Self {
            upgradeable: contract.is_upgradeable(),
            transform_import: options.transform_import,
        }
    }

    fn name<'n>(&self, name: &'n str) -> Cow<'n, str> {
        if self.upgradeable {
            Cow::Owned(upgradeable_name(name))
        } else {
            Cow::Borrowed(name)
        }
    }

    fn import(&self, path: &str) -> String {
        let path = if self.upgradeable {
            upgradeable_import(path)
        } else {
            path.to_string()
        };
        match self.transform_import {
            Some(transform) => transform(&path),
            None => path,
        }
    }

    fn variable<'v>(&self, line: &'v str) -> Cow<'v, str> {
        if self.upgradeable {
            Cow::Owned(upgradeable_variable(line))
        } else {
            Cow::Borrowed(line)
        }
    }
}

fn contract_imports(contract: &Contract) -> impl Iterator<Item = &str> {
    let parents = contract.parents().iter().map(|p| p.contract.path.as_str());
    let libraries = contract.using().iter().map(|u| u.library.path.as_str());
    parents.chain(libraries)
}

fn contract_block(contract: &Contract, helpers: &Helpers<'_>) -> Result<Vec<CodeFragment>> {
    let mut heading = format!("contract {}", contract.name());
    if !contract.parents().is_empty() {
        let names: Vec<_> = contract
            .parents()
            .iter()
            .map(|p| helpers.name(&p.contract.name))
            .collect();
        heading.push_str(" is ");
        heading.push_str(&names.join(", "));
    }
    heading.push_str(" {");

    let mut plain = Vec::new();
    let mut overriding = Vec::new();
    for function in contract.functions() {
        let clause = resolve_override(contract, function)?;
        let Some(layout) = FunctionLayout::new(function, &clause, helpers) else {
            continue;
        };
        match clause {
            OverrideClause::None => plain.push(layout.to_fragments()),
            _ => overriding.push(layout.to_fragments()),
        }
    }
    let overrides_comment = if overriding.is_empty() {
        vec![]
    } else {
        vec![CodeFragment::line(OVERRIDES_COMMENT)]
    };

    let variables = contract
        .variables()
        .iter()
        .map(|v| CodeFragment::line(helpers.variable(v)))
        .collect();

    let body = space_between(
        [using_directives(contract, helpers), constructor(contract, helpers)]
            .into_iter()
            .chain(plain)
            .chain([overrides_comment])
            .chain(overriding)
            .chain([variables]),
    );

    Ok(vec![
        CodeFragment::line(heading),
        CodeFragment::indent(body),
        CodeFragment::line("}"),
    ])
}

fn using_directives(contract: &Contract, helpers: &Helpers<'_>) -> Vec<CodeFragment> {
    let pairs: IndexSet<_> = contract
        .using()
        .iter()
        .map(|u| (u.library.name.as_str(), u.using_for.as_str()))
        .collect();
    pairs
        .into_iter()
        .map(|(library, using_for)| {
            CodeFragment::line(format!(
                "using {} for {};",
                helpers.name(library),
                helpers.name(using_for)
            ))
        })
        .collect()
}

fn constructor(contract: &Contract, helpers: &Helpers<'_>) -> Vec<CodeFragment> {
    let with_initializers: Vec<&Parent> = contract
        .parents()
        .iter()
        .filter(|p| p.contract.name != "Initializable")
        .collect();
    let has_parent_params = contract.parents().iter().any(|p| !p.params.is_empty());
    let has_args = !contract.constructor_args().is_empty();
    let has_code = !contract.constructor_code().is_empty();
    let needs_initializer = helpers.upgradeable && !with_initializers.is_empty();

    if !(has_parent_params || has_args || has_code || needs_initializer) {
        return vec![];
    }

    let parent_calls: Vec<String> = with_initializers
        .iter()
        .filter_map(|p| parent_constructor(p, helpers))
        .collect();
    let args: Vec<String> = contract.constructor_args().iter().map(argument).collect();
    let code = contract
        .constructor_code()
        .iter()
        .map(CodeFragment::line)
        .collect::<Vec<_>>();

    if !helpers.upgradeable {
        return function_block("constructor", &args, &parent_calls, code);
    }

    let init_calls = parent_calls
        .iter()
        .map(|call| CodeFragment::line(format!("{call};")))
        .collect();
    let initializer = function_block(
        "function initialize",
        &args,
        &["initializer public".to_string()],
        space_between([init_calls, code]),
    );
    space_between([
        vec![
            CodeFragment::line("/// @custom:oz-upgrades-unsafe-allow constructor"),
            CodeFragment::line("constructor() initializer {}"),
        ],
        initializer,
    ])
}

/// `Base(args)` for plain contracts, `__Base_init(args)` for upgradeable ones.
fn parent_constructor(parent: &Parent, helpers: &Helpers<'_>) -> Option<String> {
    if !helpers.upgradeable && parent.params.is_empty() {
        return None;
    }
    let name = &parent.contract.name;
    let callee = if helpers.upgradeable {
        format!("__{name}_init")
    } else {
        name.clone()
    };
    let params: Vec<String> = parent.params.iter().map(value).collect();
    Some(format!("{callee}({})", params.join(", ")))
}

/// Render a constructor argument value.
pub fn value(value: &Value) -> String {
    match value {
        Value::String(s) => string_literal(s),
        Value::Int(i) => i.to_string(),
        Value::Lit(expr) => expr.clone(),
    }
}

fn argument(arg: &FunctionArgument) -> String {
    format!("{} {}", arg.ty, arg.name)
}

/// A function declaration ready for layout.
struct FunctionLayout {
    doc: Option<String>,
    kinded_name: String,
    args: Vec<String>,
    modifiers: Vec<String>,
    body: Vec<CodeFragment>,
}

impl FunctionLayout {
    /// `None` when the function does not need redeclaring: at most one base
    /// declares it and nothing was added to it.
    fn new(
        function: &ContractFunction,
        clause: &OverrideClause<'_>,
        helpers: &Helpers<'_>,
    ) -> Option<Self> {
        let untouched = function.modifiers().is_empty()
            && function.code().is_empty()
            && !function.is_replaced();
        if function.overrides().len() <= 1 && untouched {
            return None;
        }

        let spec = function.spec();
        let mut modifiers = vec![spec.visibility.to_string()];
        modifiers.extend(spec.mutability.keyword().map(str::to_string));
        modifiers.extend(function.modifiers().iter().cloned());
        match clause {
            OverrideClause::None => {}
            OverrideClause::Single => modifiers.push("override".to_string()),
            OverrideClause::Multiple(ancestors) => {
                let names: Vec<_> = ancestors.iter().map(|a| helpers.name(a)).collect();
                modifiers.push(format!("override({})", names.join(", ")));
            }
        }
        if !spec.returns.is_empty() {
            modifiers.push(format!("returns ({})", spec.returns.join(", ")));
        }

        let mut body: Vec<CodeFragment> = function.code().iter().map(CodeFragment::line).collect();
        if *clause != OverrideClause::None && !function.is_replaced() {
            let args: Vec<&str> = spec.args.iter().map(|a| a.name.as_str()).collect();
            let call = format!("super.{}({});", spec.name, args.join(", "));
            body.push(CodeFragment::line(if spec.returns.is_empty() {
                call
            } else {
                format!("return {call}")
            }));
        }

        Some(Self {
            doc: spec.doc.clone(),
            kinded_name: format!("function {}", spec.name),
            args: spec.args.iter().map(argument).collect(),
            modifiers,
            body,
        })
    }
}

impl Renderable for FunctionLayout {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut out = Vec::new();
        if let Some(doc) = &self.doc {
            out.push(CodeFragment::line(format!("/// {doc}")));
        }
        out.extend(function_block(
            &self.kinded_name,
            &self.args,
            &self.modifiers,
            self.body.clone(),
        ));
        out
    }
}

/// Shared layout for functions and constructors.
///
/// `kinded_name` is `function foo`, `constructor` or `function initialize`.
fn function_block(
    kinded_name: &str,
    args: &[String],
    modifiers: &[String],
    body: Vec<CodeFragment>,
) -> Vec<CodeFragment> {
    let heading_length = kinded_name.len()
        + args.iter().map(String::len).sum::<usize>()
        + modifiers.iter().map(String::len).sum::<usize>();
    let braces = if body.is_empty() { "{}" } else { "{" };
    let signature = format!("{kinded_name}({})", args.join(", "));

    let mut out = if heading_length <= MAX_HEADING_LENGTH {
        let mut parts = vec![signature];
        parts.extend(modifiers.iter().cloned());
        parts.push(braces.to_string());
        vec![CodeFragment::line(parts.join(" "))]
    } else {
        vec![
            CodeFragment::line(signature),
            CodeFragment::indent(modifiers.iter().map(CodeFragment::line).collect()),
            CodeFragment::line(braces),
        ]
    };

    if !body.is_empty() {
        out.push(CodeFragment::indent(body));
        out.push(CodeFragment::line("}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value() {
        assert_eq!(value(&Value::from("My \"Token\"")), r#""My \"Token\"""#);
        assert_eq!(value(&Value::from(42i64)), "42");
        assert_eq!(value(&Value::lit("msg.sender")), "msg.sender");
    }

    #[test]
    fn test_short_heading_stays_on_one_line() {
        let out = function_block(
            "function pause",
            &[],
            &["public".to_string(), "onlyOwner".to_string()],
            vec![CodeFragment::line("_pause();")],
        );
        assert_eq!(
            out,
            vec![
                CodeFragment::line("function pause() public onlyOwner {"),
                CodeFragment::indent(vec![CodeFragment::line("_pause();")]),
                CodeFragment::line("}"),
            ]
        );
    }

    #[test]
    fn test_long_heading_breaks_modifiers() {
        let args = vec![
            "address from".to_string(),
            "address to".to_string(),
            "uint256 tokenId".to_string(),
        ];
        let modifiers = vec![
            "internal".to_string(),
            "override(ERC721, ERC721Enumerable)".to_string(),
        ];
        let out = function_block("function _beforeTokenTransfer", &args, &modifiers, vec![]);
        assert_eq!(
            out,
            vec![
                CodeFragment::line(
                    "function _beforeTokenTransfer(address from, address to, uint256 tokenId)"
                ),
                CodeFragment::indent(vec![
                    CodeFragment::line("internal"),
                    CodeFragment::line("override(ERC721, ERC721Enumerable)"),
                ]),
                CodeFragment::line("{}"),
            ]
        );
    }
}
