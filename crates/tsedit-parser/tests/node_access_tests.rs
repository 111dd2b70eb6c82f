//! Tests for NodeArena queries.
use tsedit_parser::{SyntaxKind, parse_source_file};

#[test]
fn path_round_trips_through_nested_containers() {
    let source = "namespace N {\n    function f() {\n        switch (x) {\n            case 1:\n                a();\n        }\n    }\n}\n";
    let (arena, root, _) = parse_source_file("test.ts", source);

    let namespace = arena.statements_of(root).unwrap()[0];
    let block = arena.body_of(namespace).unwrap();
    let function = arena.statements_of(block).unwrap()[0];
    let body = arena.body_of(function).unwrap();
    let switch = arena.statements_of(body).unwrap()[0];
    let clause = arena.children(switch)[0];
    assert_eq!(arena.kind_of(clause), Some(SyntaxKind::CaseClause));

    let path = arena.path_of(clause);
    assert_eq!(path.as_slice(), &[0, 0, 0, 0, 0, 0]);
    assert_eq!(arena.resolve_path(root, &path), Some(clause));
    assert_eq!(arena.resolve_path(root, &[3]), None);
}

#[test]
fn declaration_files_are_ambient() {
    let (arena, root, _) = parse_source_file("lib.d.ts", "function f(): void;\n");
    let function = arena.statements_of(root).unwrap()[0];
    assert!(arena.is_ambient_or_in_ambient_context(function));

    let (arena, root, _) = parse_source_file("lib.ts", "function f(): void;\n");
    let function = arena.statements_of(root).unwrap()[0];
    assert!(!arena.is_ambient_or_in_ambient_context(function));
}

#[test]
fn parents_and_ancestors_are_linked() {
    let (arena, root, _) = parse_source_file("test.ts", "declare namespace N {\n    class A {}\n}\n");
    let namespace = arena.statements_of(root).unwrap()[0];
    let block = arena.body_of(namespace).unwrap();
    let class = arena.statements_of(block).unwrap()[0];

    let ancestors: Vec<_> = arena.ancestors(class).collect();
    assert_eq!(ancestors, vec![block, namespace, root]);
    assert!(arena.is_ambient_or_in_ambient_context(class));
    assert_eq!(arena.text_of(class), "class A {}");
}
