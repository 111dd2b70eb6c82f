//! Tests for statement parsing in the parser.
use tsedit_parser::{
    ModifierFlags, NodeArena, NodeData, NodeIndex, ParserState, SyntaxKind,
    VariableDeclarationKind,
};

fn parse_source(source: &str) -> (ParserState, NodeIndex) {
    let mut parser = ParserState::new("test.ts".to_string(), source.to_string());
    let root = parser.parse_source_file();
    (parser, root)
}

fn statement_kinds(arena: &NodeArena, container: NodeIndex) -> Vec<SyntaxKind> {
    arena
        .statements_of(container)
        .unwrap_or_default()
        .iter()
        .filter_map(|&statement| arena.kind_of(statement))
        .collect()
}

#[test]
fn parse_declarations_and_overloads() {
    let (parser, root) =
        parse_source("class A {\n}\n\nfunction f(): void;\nfunction f() {}\n");
    let arena = parser.get_arena();
    assert_eq!(
        statement_kinds(arena, root),
        vec![
            SyntaxKind::ClassDeclaration,
            SyntaxKind::FunctionDeclaration,
            SyntaxKind::FunctionDeclaration,
        ]
    );
    let statements = arena.statements_of(root).unwrap();
    assert_eq!(arena.name_of(statements[0]), Some("A"));
    assert!(!arena.has_body(statements[1]));
    assert!(arena.has_body(statements[2]));
    assert!(parser.get_diagnostics().is_empty());
}

#[test]
fn parse_automatic_semicolon_insertion() {
    let (parser, root) = parse_source("let a = 1\nlet b = 2\nfoo()\n  .bar()\n");
    let arena = parser.get_arena();
    assert_eq!(
        statement_kinds(arena, root),
        vec![
            SyntaxKind::VariableStatement,
            SyntaxKind::VariableStatement,
            SyntaxKind::ExpressionStatement,
        ]
    );
    let last = arena.statements_of(root).unwrap()[2];
    assert_eq!(arena.text_of(last), "foo()\n  .bar()");
}

#[test]
fn parse_statement_owns_leading_and_trailing_comments() {
    let (parser, root) = parse_source("a();\n// lead\nb(); // trail\n");
    let arena = parser.get_arena();
    let statements = arena.statements_of(root).unwrap();
    assert_eq!(arena.text_of(statements[0]), "a();");
    assert_eq!(arena.text_of(statements[1]), "// lead\nb(); // trail");
}

#[test]
fn parse_dotted_namespace_as_one_declaration() {
    let (parser, root) = parse_source("declare namespace A.B {\n    function f(): void;\n}\n");
    let arena = parser.get_arena();
    let namespace = arena.statements_of(root).unwrap()[0];
    let node = arena.get(namespace).unwrap();
    assert_eq!(node.kind, SyntaxKind::ModuleDeclaration);
    assert!(node.has_modifier(ModifierFlags::DECLARE));
    assert_eq!(arena.name_of(namespace), Some("A.B"));

    let body = arena.body_of(namespace).unwrap();
    assert_eq!(arena.kind_of(body), Some(SyntaxKind::ModuleBlock));
    let function = arena.statements_of(body).unwrap()[0];
    assert!(arena.is_ambient_or_in_ambient_context(function));
}

#[test]
fn parse_bodyless_module_and_global_augmentation() {
    let (parser, root) = parse_source("declare module \"m\";\ndeclare global {\n}\n");
    let arena = parser.get_arena();
    let statements = arena.statements_of(root).unwrap();
    assert_eq!(arena.name_of(statements[0]), Some("\"m\""));
    assert!(!arena.has_body(statements[0]));
    assert_eq!(arena.name_of(statements[1]), Some("global"));
    assert!(arena.has_body(statements[1]));
}

#[test]
fn parse_switch_clauses() {
    let source = "switch (x) {\n    case 1:\n        a();\n        break;\n    default: {\n        b();\n    }\n}\n";
    let (parser, root) = parse_source(source);
    let arena = parser.get_arena();
    let switch = arena.statements_of(root).unwrap()[0];
    let NodeData::Switch { clauses } = &arena.get(switch).unwrap().data else {
        panic!("expected switch data");
    };
    assert_eq!(clauses.len(), 2);
    assert_eq!(
        statement_kinds(arena, clauses[0]),
        vec![SyntaxKind::ExpressionStatement, SyntaxKind::BreakStatement]
    );
    assert_eq!(statement_kinds(arena, clauses[1]), vec![SyntaxKind::Block]);
}

#[test]
fn parse_stray_close_brace_reports_ts1128() {
    let (parser, root) = parse_source("}\nlet a = 1;");
    let arena = parser.get_arena();
    assert_eq!(
        statement_kinds(arena, root),
        vec![SyntaxKind::ExpressionStatement, SyntaxKind::VariableStatement]
    );
    let codes: Vec<u32> = parser.get_diagnostics().iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![1128]);
}

#[test]
fn parse_variable_declaration_list() {
    let (parser, root) =
        parse_source("export const a = 1, b: Array<string> = [], { c } = d;");
    let arena = parser.get_arena();
    let statement = arena.statements_of(root).unwrap()[0];
    let node = arena.get(statement).unwrap();
    assert!(node.has_modifier(ModifierFlags::EXPORT));
    let NodeData::VariableStatement {
        declaration_kind, ..
    } = node.data
    else {
        panic!("expected variable statement data");
    };
    assert_eq!(declaration_kind, VariableDeclarationKind::Const);

    let names: Vec<_> = arena
        .variable_declarations(statement)
        .iter()
        .map(|&declaration| arena.name_of(declaration))
        .collect();
    assert_eq!(names, vec![Some("a"), Some("b"), Some("{ c }")]);
}

#[test]
fn parse_object_return_type_before_body() {
    let (parser, root) = parse_source("function f(): { a: number } {\n    return;\n}\n");
    let arena = parser.get_arena();
    let function = arena.statements_of(root).unwrap()[0];
    let body = arena.body_of(function).unwrap();
    assert_eq!(statement_kinds(arena, body), vec![SyntaxKind::ReturnStatement]);
}

#[test]
fn parse_braces_inside_templates_and_regexes() {
    let (parser, root) = parse_source("const s = `${a}}`;\nconst r = /}/;\nfoo(() => {\n    a;\n});\n");
    let arena = parser.get_arena();
    assert_eq!(
        statement_kinds(arena, root),
        vec![
            SyntaxKind::VariableStatement,
            SyntaxKind::VariableStatement,
            SyntaxKind::ExpressionStatement,
        ]
    );
    assert!(parser.get_diagnostics().is_empty());
}

#[test]
fn parse_class_heritage_and_default_export() {
    let source = "abstract class A<T extends { x: 1 }> extends B<T> implements C {\n    m() { if (a) { } }\n}\nexport default class {}\n";
    let (parser, root) = parse_source(source);
    let arena = parser.get_arena();
    let statements = arena.statements_of(root).unwrap();
    assert_eq!(statements.len(), 2);

    let abstract_class = arena.get(statements[0]).unwrap();
    assert!(abstract_class.has_modifier(ModifierFlags::ABSTRACT));
    assert_eq!(arena.name_of(statements[0]), Some("A"));

    let default_class = arena.get(statements[1]).unwrap();
    assert!(default_class.has_modifier(ModifierFlags::EXPORT | ModifierFlags::DEFAULT));
    assert_eq!(arena.name_of(statements[1]), None);
}

#[test]
fn parse_type_aliases_spanning_lines() {
    let (parser, root) = parse_source("type A =\n    | B\n    | C;\ntype D<T> = Map<string, T>\nconst enum E { X }\n");
    let arena = parser.get_arena();
    assert_eq!(
        statement_kinds(arena, root),
        vec![
            SyntaxKind::TypeAliasDeclaration,
            SyntaxKind::TypeAliasDeclaration,
            SyntaxKind::EnumDeclaration,
        ]
    );
    let statements = arena.statements_of(root).unwrap();
    assert_eq!(arena.name_of(statements[1]), Some("D"));
    assert!(arena.get(statements[2]).unwrap().has_modifier(ModifierFlags::CONST));
}

#[test]
fn parse_compound_statements_keep_nested_blocks() {
    let (parser, root) = parse_source("if (a) {\n    b();\n} else c();\ntry {\n} finally {\n}\n");
    let arena = parser.get_arena();
    let statements = arena.statements_of(root).unwrap();
    assert_eq!(arena.children(statements[0]).len(), 2);
    assert_eq!(arena.kind_of(arena.children(statements[0])[0]), Some(SyntaxKind::Block));
    assert_eq!(arena.children(statements[1]).len(), 2);
}
