use std::path::{Path, PathBuf};

use tempfile::TempDir;
use unbarrel::test_utils::{create_test_project, read_fixture};
use unbarrel::{
    BarrelTransform, DiagnosticKind, ExportGraphResolver, ImportRewriter, ImportSpecifier,
    ImportStatement, NativeFileSystem, RewriteError, RewriteOptions, RewriteOutcome,
    SpecifierStyle, TransformError,
};

fn project() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let root = create_test_project(
        &temp,
        &[
            (
                "src/barrel/index.ts",
                "export const Foo = 1;\nexport { Bar as Baz } from './impl';\nexport * from './sub';",
            ),
            ("src/barrel/impl.ts", "export const Bar = 2;"),
            ("src/barrel/sub/index.ts", "export const Qux = 3;"),
            (
                "src/pages/home.tsx",
                "import { Foo, Baz as Renamed, Qux, Nope } from '../barrel';\nimport { useState } from 'react';\n\nexport const Home = () => [Foo, Renamed, Qux, Nope, useState];\n",
            ),
        ],
    );
    (temp, root)
}

fn transform(root: &Path, style: SpecifierStyle) -> BarrelTransform {
    BarrelTransform::new(ImportRewriter::new(
        ExportGraphResolver::new(NativeFileSystem),
        vec![root.join("src/barrel")],
        RewriteOptions {
            specifier_style: style,
        },
    ))
}

#[test]
fn rewrites_consumer_file_to_direct_imports() {
    let (_temp, root) = project();
    let transform = transform(&root, SpecifierStyle::Relative);

    let output = transform.transform_file(&root.join("src/pages/home.tsx")).unwrap();

    assert_eq!(
        output.code,
        "import { Foo } from '../barrel/index';\nimport { Bar as Renamed } from '../barrel/impl';\nimport { Qux } from '../barrel/sub';\nimport { useState } from 'react';\n\nexport const Home = () => [Foo, Renamed, Qux, Nope, useState];\n"
    );
    assert_eq!(output.replaced_imports, 1);
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].kind, DiagnosticKind::UnresolvedName);
}

#[test]
fn absolute_style_matches_joined_paths() {
    let (_temp, root) = project();
    let transform = transform(&root, SpecifierStyle::Absolute);
    let source = "import { Qux } from '../barrel';\n";

    let output = transform
        .transform_source(&root.join("src/pages/home.tsx"), source)
        .unwrap();

    let sub = root.join("src/barrel/sub");
    assert_eq!(
        output.code,
        format!("import {{ Qux }} from '{}';\n", sub.to_string_lossy().replace('\\', "/"))
    );
}

#[test]
fn transformed_output_is_a_fixed_point() {
    let (_temp, root) = project();
    let transform = transform(&root, SpecifierStyle::Relative);
    let path = root.join("src/pages/home.tsx");

    let first = transform.transform_file(&path).unwrap();
    let second = transform.transform_source(&path, &first.code).unwrap();

    assert!(first.modified);
    assert!(!second.modified);
    assert_eq!(second.code, first.code);
}

#[test]
fn rewriter_leaves_non_barrel_statements_identical() {
    let (_temp, root) = project();
    let transform = transform(&root, SpecifierStyle::Relative);
    let statement = ImportStatement::new("./sub", vec![ImportSpecifier::named("Qux", "Qux")]);

    let rewrite = transform
        .rewriter()
        .rewrite(&root.join("src/barrel/index.ts"), &statement)
        .unwrap();

    assert_eq!(rewrite.outcome, RewriteOutcome::Untouched);
    assert!(rewrite.diagnostics.is_empty());
}

#[test]
fn namespace_import_of_barrel_is_rejected() {
    let (_temp, root) = project();
    let transform = transform(&root, SpecifierStyle::Relative);

    let err = transform
        .transform_source(
            &root.join("src/pages/home.tsx"),
            "import * as All from '../barrel';\n",
        )
        .unwrap_err();

    match err {
        TransformError::Rewrite(RewriteError::UnsupportedImportShape {
            source_specifier,
            kinds,
            ..
        }) => {
            assert_eq!(source_specifier, "../barrel");
            assert_eq!(kinds, "namespace");
        }
        other => panic!("expected unsupported import shape, got {other:?}"),
    }
}

#[test]
fn broken_barrel_surfaces_resolution_error() {
    let temp = TempDir::new().unwrap();
    let broken = create_test_project(&temp, &[("lib/index.ts", "export * from './missing';")]);
    let transform = BarrelTransform::new(ImportRewriter::new(
        ExportGraphResolver::new(NativeFileSystem),
        vec![broken.join("lib")],
        RewriteOptions::default(),
    ));

    let err = transform
        .transform_source(&broken.join("main.ts"), "import { A } from './lib';\n")
        .unwrap_err();

    assert!(matches!(
        err,
        TransformError::Rewrite(RewriteError::Resolution(_))
    ));
}

#[test]
fn fixture_on_disk_is_not_modified_by_transform() {
    let (_temp, root) = project();
    let transform = transform(&root, SpecifierStyle::Relative);
    let before = read_fixture(&root, "src/pages/home.tsx");

    transform.transform_file(&root.join("src/pages/home.tsx")).unwrap();

    assert_eq!(read_fixture(&root, "src/pages/home.tsx"), before);
}
