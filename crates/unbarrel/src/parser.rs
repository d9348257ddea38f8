//! Declaration-level view of barrel files.
//!
//! The resolver does not need a full AST: it needs each top-level statement
//! classified as a wildcard re-export, a named re-export, an exported
//! declaration (with its names) or something else. This module parses a file
//! with OXC and reduces it to that shape, so the arena-allocated AST never
//! escapes the function that built it.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    BindingPatternKind, Declaration, ImportDeclarationSpecifier, ModuleExportName, Statement,
};
use oxc_parser::Parser;
use oxc_span::SourceType;
use rustc_hash::FxHashSet;

use crate::error::ResolveError;

/// One `A` or `A as B` entry of an `export { ... }` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReExportSpecifier {
    /// Name on the source side (`A` in `A as B`)
    pub local: String,
    /// Name consumers import (`B` in `A as B`)
    pub exported: String,
}

impl ReExportSpecifier {
    pub fn is_aliased(&self) -> bool {
        self.local != self.exported
    }
}

/// Classification of one top-level statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationNode {
    /// `export * from './x'`
    WildcardReExport { source: String },
    /// `export * as NS from './x'`
    NamespaceReExport { source: String, exported: String },
    /// `export { A, B as C }` or `export { A, B as C } from './x'`
    NamedReExport {
        source: Option<String>,
        specifiers: Vec<ReExportSpecifier>,
    },
    /// `export const/function/class/type/interface/enum ...`
    ///
    /// `malformed` describes declarators whose name could not be extracted.
    Declaration {
        names: Vec<String>,
        malformed: Vec<String>,
    },
    /// `export default ...`
    DefaultExport,
    /// Anything else, including imports
    Other,
}

/// Top-level statements of a barrel file, in source order.
#[derive(Debug, Clone, Default)]
pub struct DeclarationTree {
    pub nodes: Vec<DeclarationNode>,
    /// Local names bound by import declarations in the same file
    pub imported_bindings: FxHashSet<String>,
}

/// Source type for a path, defaulting to a TypeScript module.
pub fn source_type_for(path: &Path) -> SourceType {
    SourceType::from_path(path).unwrap_or_else(|_| SourceType::ts())
}

/// Parse a barrel file into its declaration-level tree.
///
/// # Errors
///
/// Returns `ResolveError::Parse` if the source has syntax errors.
pub fn parse_declarations(path: &Path, source: &str) -> Result<DeclarationTree, ResolveError> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, source_type_for(path)).parse();

    if ret.panicked || !ret.errors.is_empty() {
        let messages: Vec<String> = ret.errors.iter().map(|e| e.to_string()).collect();
        return Err(ResolveError::parse_error(path, &messages));
    }

    let mut tree = DeclarationTree::default();

    for statement in ret.program.body.iter() {
        let node = match statement {
            Statement::ImportDeclaration(import) => {
                if let Some(specifiers) = &import.specifiers {
                    for specifier in specifiers.iter() {
                        tree.imported_bindings
                            .insert(import_local_name(specifier).to_string());
                    }
                }
                DeclarationNode::Other
            }
            Statement::ExportAllDeclaration(all) => match &all.exported {
                None => DeclarationNode::WildcardReExport {
                    source: all.source.value.to_string(),
                },
                Some(exported) => DeclarationNode::NamespaceReExport {
                    source: all.source.value.to_string(),
                    exported: module_export_name(exported),
                },
            },
            Statement::ExportNamedDeclaration(named) => match &named.declaration {
                Some(declaration) => {
                    let mut names = Vec::new();
                    let mut malformed = Vec::new();
                    collect_declaration_names(declaration, &mut names, &mut malformed);
                    DeclarationNode::Declaration { names, malformed }
                }
                None => DeclarationNode::NamedReExport {
                    source: named.source.as_ref().map(|s| s.value.to_string()),
                    specifiers: named
                        .specifiers
                        .iter()
                        .map(|specifier| ReExportSpecifier {
                            local: module_export_name(&specifier.local),
                            exported: module_export_name(&specifier.exported),
                        })
                        .collect(),
                },
            },
            Statement::ExportDefaultDeclaration(_) => DeclarationNode::DefaultExport,
            _ => DeclarationNode::Other,
        };
        tree.nodes.push(node);
    }

    Ok(tree)
}

/// Text of an export/import name (`A`, or `"string name"`).
pub(crate) fn module_export_name(name: &ModuleExportName<'_>) -> String {
    match name {
        ModuleExportName::IdentifierName(ident) => ident.name.to_string(),
        ModuleExportName::IdentifierReference(ident) => ident.name.to_string(),
        ModuleExportName::StringLiteral(lit) => lit.value.to_string(),
    }
}

fn import_local_name<'s>(specifier: &'s ImportDeclarationSpecifier<'_>) -> &'s str {
    match specifier {
        ImportDeclarationSpecifier::ImportSpecifier(named) => named.local.name.as_str(),
        ImportDeclarationSpecifier::ImportDefaultSpecifier(default) => default.local.name.as_str(),
        ImportDeclarationSpecifier::ImportNamespaceSpecifier(ns) => ns.local.name.as_str(),
    }
}

fn collect_declaration_names(
    declaration: &Declaration<'_>,
    names: &mut Vec<String>,
    malformed: &mut Vec<String>,
) {
    match declaration {
        Declaration::VariableDeclaration(variable) => {
            for declarator in variable.declarations.iter() {
                match &declarator.id.kind {
                    BindingPatternKind::BindingIdentifier(ident) => {
                        names.push(ident.name.to_string());
                    }
                    _ => malformed.push("destructuring pattern in exported variable".to_string()),
                }
            }
        }
        Declaration::FunctionDeclaration(function) => match &function.id {
            Some(id) => names.push(id.name.to_string()),
            None => malformed.push("exported function without a name".to_string()),
        },
        Declaration::ClassDeclaration(class) => match &class.id {
            Some(id) => names.push(id.name.to_string()),
            None => malformed.push("exported class without a name".to_string()),
        },
        Declaration::TSTypeAliasDeclaration(alias) => names.push(alias.id.name.to_string()),
        Declaration::TSInterfaceDeclaration(interface) => {
            names.push(interface.id.name.to_string());
        }
        Declaration::TSEnumDeclaration(enumeration) => names.push(enumeration.id.name.to_string()),
        Declaration::TSModuleDeclaration(module) => names.push(module.id.name().to_string()),
        Declaration::TSImportEqualsDeclaration(import_equals) => {
            names.push(import_equals.id.name.to_string());
        }
        #[allow(unreachable_patterns)]
        _ => malformed.push("unsupported exported declaration".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> DeclarationTree {
        parse_declarations(Path::new("index.ts"), source).expect("parse should succeed")
    }

    #[test]
    fn test_classifies_wildcard_and_namespace_re_exports() {
        let tree = parse("export * from './a';\nexport * as ns from './b';");

        assert_eq!(
            tree.nodes,
            vec![
                DeclarationNode::WildcardReExport {
                    source: "./a".to_string()
                },
                DeclarationNode::NamespaceReExport {
                    source: "./b".to_string(),
                    exported: "ns".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_classifies_named_re_exports() {
        let tree = parse("export { A, B as C } from './x';\nconst D = 1;\nexport { D };");

        assert_eq!(tree.nodes.len(), 3);
        match &tree.nodes[0] {
            DeclarationNode::NamedReExport { source, specifiers } => {
                assert_eq!(source.as_deref(), Some("./x"));
                assert_eq!(specifiers.len(), 2);
                assert!(!specifiers[0].is_aliased());
                assert_eq!(specifiers[1].local, "B");
                assert_eq!(specifiers[1].exported, "C");
            }
            other => panic!("expected named re-export, got {:?}", other),
        }
        assert_eq!(tree.nodes[1], DeclarationNode::Other);
        assert!(matches!(
            &tree.nodes[2],
            DeclarationNode::NamedReExport { source: None, .. }
        ));
    }

    #[test]
    fn test_extracts_declaration_names() {
        let tree = parse(
            r#"
            export const a = 1, b = 2;
            export function f() {}
            export class K {}
            export type T = string;
            export interface I {}
            export enum E { One }
            "#,
        );

        let names: Vec<String> = tree
            .nodes
            .iter()
            .flat_map(|node| match node {
                DeclarationNode::Declaration { names, .. } => names.clone(),
                _ => Vec::new(),
            })
            .collect();

        assert_eq!(names, vec!["a", "b", "f", "K", "T", "I", "E"]);
    }

    #[test]
    fn test_destructuring_export_is_reported_malformed() {
        let tree = parse("const obj = { x: 1 };\nexport const { x } = obj;");

        match &tree.nodes[1] {
            DeclarationNode::Declaration { names, malformed } => {
                assert!(names.is_empty());
                assert_eq!(malformed.len(), 1);
            }
            other => panic!("expected declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_tracks_imported_bindings() {
        let tree = parse("import { A, B as C } from './x';\nimport D from './d';\nexport { A };");

        assert!(tree.imported_bindings.contains("A"));
        assert!(tree.imported_bindings.contains("C"));
        assert!(tree.imported_bindings.contains("D"));
        assert!(!tree.imported_bindings.contains("B"));
    }

    #[test]
    fn test_default_export_is_classified() {
        let tree = parse("export default function main() {}");
        assert_eq!(tree.nodes, vec![DeclarationNode::DefaultExport]);
    }

    #[test]
    fn test_syntax_error_fails() {
        let err = parse_declarations(Path::new("index.ts"), "export { from").unwrap_err();
        assert!(matches!(err, ResolveError::Parse { .. }));
    }
}
