//! Extracts alias registrations from single classmap lines.
//!
//! The compatibility layer registers legacy class names with calls like
//!
//! ```php
//! JLoader::registerAlias('JFoo', 'Joomla\CMS\Foo', '3.9.0');
//! ```
//!
//! This extractor decides, for one raw source line, whether it is such a
//! call and pulls out the three string fields. Matching is two-stage: a
//! cheap case-insensitive substring check rejects the vast majority of
//! lines before the line is handed to tree-sitter for structural
//! confirmation of the call shape. Anything that does not match exactly
//! (wrong class, wrong method, wrong arity, non-literal arguments, plain
//! syntax errors) is a NoMatch, never an error.

use crate::error::StubGenError;
use crate::version::DEFAULT_REMOVAL_VERSION;
use tree_sitter::{Node, Parser};

/// Lowercased token that gates structural parsing. Lines without it are
/// rejected without ever touching the parser.
const CALL_TOKEN: &str = "registeralias";

/// Class and method the call must target, matched case-sensitively.
const LOADER_CLASS: &str = "JLoader";
const REGISTER_METHOD: &str = "registerAlias";

/// One extracted alias registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRecord {
    /// Legacy class name being registered.
    pub alias: String,
    /// Namespaced class the alias resolves to.
    pub canonical: String,
    /// Version in which the alias is removed. Defaults to
    /// [`DEFAULT_REMOVAL_VERSION`] when the call omits its third argument.
    pub removed_in_version: String,
}

/// Extracts [`AliasRecord`]s from individual source lines.
///
/// Holds a tree-sitter PHP parser so repeated calls reuse the grammar.
pub struct AliasExtractor {
    parser: Parser,
}

impl std::fmt::Debug for AliasExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AliasExtractor")
            .field("language", &"PHP")
            .finish()
    }
}

impl AliasExtractor {
    /// Create a new extractor instance
    pub fn new() -> Result<Self, StubGenError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_php::LANGUAGE_PHP.into())
            .map_err(|e| StubGenError::ParserInit {
                reason: format!("tree-sitter error: {e}"),
            })?;

        Ok(Self { parser })
    }

    /// Extract an alias registration from a single line.
    ///
    /// Returns `None` for every line that is not exactly a
    /// `JLoader::registerAlias(...)` expression statement with two or
    /// three string-literal arguments.
    pub fn extract(&mut self, line: &str) -> Option<AliasRecord> {
        // Cheap rejection first. The structural parse only ever sees
        // candidate lines.
        if !line.to_ascii_lowercase().contains(CALL_TOKEN) {
            return None;
        }

        let source = format!("<?php {line}");
        let tree = self.parser.parse(&source, None)?;
        let root = tree.root_node();
        if root.has_error() {
            return None;
        }

        let statement = single_statement(root)?;
        if statement.kind() != "expression_statement" {
            return None;
        }
        let call = statement.child(0)?;
        if call.kind() != "scoped_call_expression" {
            return None;
        }

        let scope = call.child_by_field_name("scope")?;
        if &source[scope.byte_range()] != LOADER_CLASS {
            return None;
        }
        let method = call.child_by_field_name("name")?;
        if &source[method.byte_range()] != REGISTER_METHOD {
            return None;
        }

        let arguments = call.child_by_field_name("arguments")?;
        let mut literals = Vec::with_capacity(3);
        let mut cursor = arguments.walk();
        for child in arguments.children(&mut cursor) {
            if child.kind() == "argument" {
                // Every argument must be a plain string literal.
                literals.push(string_literal(child.child(0)?, &source)?);
            }
        }

        let (alias, canonical, removed_in_version) = match literals.len() {
            2 => {
                let mut it = literals.into_iter();
                (it.next()?, it.next()?, DEFAULT_REMOVAL_VERSION.to_string())
            }
            3 => {
                let mut it = literals.into_iter();
                (it.next()?, it.next()?, it.next()?)
            }
            _ => return None,
        };

        if alias.is_empty() {
            return None;
        }

        Some(AliasRecord {
            alias,
            canonical,
            removed_in_version,
        })
    }
}

/// Find the single non-comment statement under the program node.
///
/// The wrapped line parses as `program -> php_tag, <statement>` with
/// optional trailing comments. More than one statement on the line means
/// this is not the registration call we are looking for.
fn single_statement(root: Node) -> Option<Node> {
    let mut statement = None;
    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        match child.kind() {
            "php_tag" | "comment" => continue,
            _ => {
                if statement.is_some() {
                    return None;
                }
                statement = Some(child);
            }
        }
    }
    statement
}

/// Decode a PHP string literal node to its runtime value.
///
/// Accepts single-quoted (`string`) and double-quoted (`encapsed_string`)
/// literals; anything else, including interpolated strings with embedded
/// variables, is not a literal for our purposes.
fn string_literal(node: Node, source: &str) -> Option<String> {
    match node.kind() {
        "string" | "encapsed_string" => {}
        _ => return None,
    }

    // Interpolation makes the value non-constant.
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "string_content" | "escape_sequence" => {}
            _ => return None,
        }
    }

    let raw = &source[node.byte_range()];
    let inner = raw
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .or_else(|| {
            raw.strip_prefix('"')
                .and_then(|rest| rest.strip_suffix('"'))
        })?;
    Some(unescape(inner))
}

/// Resolve PHP escape sequences (`\\`, `\'`, `\"`, `\n`, ...) to their
/// characters. Unknown escapes stay intact, as PHP leaves them.
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('$') => out.push('$'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
