//! Tests for removing statements.
use tsedit_printer::{ClassStructure, FunctionStructure, TypeAliasStructure};
use tsedit_statements::{ManipulationError, SourceFile, TypedNode};

fn source(text: &str) -> SourceFile {
    SourceFile::new("test.ts", text)
}

#[test]
fn remove_middle_statement() {
    let mut file = source("a();\nb();\nc();\n");
    let mut statements = file.statements();
    statements.remove_statements((1, 1)).unwrap();
    assert_eq!(statements.statement_count().unwrap(), 2);
    assert_eq!(file.text(), "a();\nc();\n");
}

#[test]
fn inverted_range_is_rejected_without_changes() {
    let mut file = source("a();\nb();\nc();\n");
    let error = file.statements().remove_statements((2, 0)).unwrap_err();
    assert_eq!(error, ManipulationError::OutOfBounds { index: 2, length: 3 });
    assert_eq!(file.text(), "a();\nb();\nc();\n");

    let error = file.statements().remove_statement(3).unwrap_err();
    assert_eq!(error, ManipulationError::OutOfBounds { index: 3, length: 3 });
}

#[test]
fn remove_first_and_last_statements() {
    let mut file = source("a();\nb();\nc();\n");
    file.statements().remove_statement(0).unwrap();
    assert_eq!(file.text(), "b();\nc();\n");
    file.statements().remove_statement(1).unwrap();
    assert_eq!(file.text(), "b();\n");
    file.statements().remove_statement(0).unwrap();
    assert_eq!(file.text(), "");
}

#[test]
fn declarations_with_bodies_keep_a_blank_line() {
    let mut file = source("class A {\n}\n\nlet x = 1;\n\nclass B {\n}\n");
    file.statements().remove_statement(1).unwrap();
    assert_eq!(file.text(), "class A {\n}\n\nclass B {\n}\n");
}

#[test]
fn insert_then_remove_restores_text() {
    let original = "class A {\n}\n\nclass C {\n}\n";
    let mut file = source(original);
    file.statements()
        .insert_class(1, &ClassStructure::new("B"))
        .unwrap();
    file.statements().remove_statement(1).unwrap();
    assert_eq!(file.text(), original);

    let original = "type A = string;\ntype C = string;\n";
    let mut file = source(original);
    file.statements()
        .insert_type_alias(1, &TypeAliasStructure::new("B", "number"))
        .unwrap();
    file.statements().remove_statement(1).unwrap();
    assert_eq!(file.text(), original);
}

#[test]
fn insert_then_remove_round_trips_at_the_edges() {
    let original = "class B {\n}\n";
    let mut file = source(original);
    file.statements()
        .insert_class(0, &ClassStructure::new("A"))
        .unwrap();
    assert_eq!(file.text(), "class A {\n}\n\nclass B {\n}\n");
    file.statements().remove_statement(0).unwrap();
    assert_eq!(file.text(), original);

    file.statements().add_class(&ClassStructure::new("C")).unwrap();
    file.statements().remove_statement(1).unwrap();
    assert_eq!(file.text(), original);
}

#[test]
fn remove_all_statements_from_a_body_keeps_the_braces() {
    let mut file = source("function f() {\n    a();\n    b();\n}\n");
    let function = file.statements().get_function_or_throw("f").unwrap();
    let mut body = file.statemented(function.node()).unwrap();
    body.remove_statements((0, 1)).unwrap();
    assert_eq!(body.statement_count().unwrap(), 0);
    assert_eq!(file.text(), "function f() {\n}\n");
    let function = file.statements().get_function_or_throw("f").unwrap();
    assert!(function.has_body(&file));
}

#[test]
fn remove_inside_namespace() {
    let mut file = source("namespace N {\n    class A {\n    }\n\n    class B {\n    }\n}\n");
    let namespace = file.statements().get_namespace_or_throw("N").unwrap();
    let mut body = file.statemented(namespace.node()).unwrap();
    body.remove_statement(0).unwrap();
    assert_eq!(file.text(), "namespace N {\n    class B {\n    }\n}\n");
}

#[test]
fn remove_statements_from_case_clause() {
    let mut file = source("switch (x) {\n    case 1:\n        a();\n        break;\n}\n");
    let switch = file.statements().get_statements().unwrap()[0];
    let clause = file.arena().children(switch)[0];
    let mut clause = file.statemented(clause).unwrap();
    clause.remove_statement(1).unwrap();
    assert_eq!(clause.text(), "switch (x) {\n    case 1:\n        a();\n}\n");
    clause.remove_statement(0).unwrap();
    assert_eq!(file.text(), "switch (x) {\n    case 1:\n}\n");
}

#[test]
fn remove_function_with_overloads() {
    let mut file = source("");
    let function = FunctionStructure {
        overloads: vec![Default::default()],
        ..FunctionStructure::new("f")
    };
    file.statements().add_function(&function).unwrap();
    file.statements().remove_statements((0, 1)).unwrap();
    assert_eq!(file.text(), "");
}

#[test]
fn inline_neighbours_keep_their_line() {
    let mut file = source("a(); b(); c();\n");
    file.statements().remove_statement(1).unwrap();
    assert_eq!(file.text(), "a(); c();\n");
}

#[test]
fn first_statement_on_the_brace_line() {
    let mut file = source("function f() { a();\n    b();\n}\n");
    let function = file.statements().get_function_or_throw("f").unwrap();
    file.statemented(function.node())
        .unwrap()
        .remove_statement(0)
        .unwrap();
    assert_eq!(file.text(), "function f() {\n    b();\n}\n");

    let mut file = source("switch (x) {\n    case 1: a();\n        b();\n}\n");
    let switch = file.statements().get_statements().unwrap()[0];
    let clause = file.arena().children(switch)[0];
    file.statemented(clause).unwrap().remove_statement(0).unwrap();
    assert_eq!(file.text(), "switch (x) {\n    case 1:\n        b();\n}\n");
}

#[test]
fn first_of_inline_statements() {
    let mut file = source("a(); b();\n");
    file.statements().remove_statement(0).unwrap();
    assert_eq!(file.text(), "b();\n");
}

#[test]
fn insert_then_remove_next_to_inline_statements() {
    let original = "a(); b(); c();\n";
    let mut file = source(original);
    let inserted = file.statements().insert_statements(1, "x();").unwrap();
    assert_eq!(inserted.len(), 1);
    assert_eq!(file.text(), "a();\nx(); b(); c();\n");
    file.statements().remove_statement(1).unwrap();
    assert_eq!(file.text(), original);
}

#[test]
fn insert_then_remove_before_inline_brace() {
    let original = "function f() { a(); }\n";
    let mut file = source(original);
    let function = file.statements().get_function_or_throw("f").unwrap();
    let mut body = file.statemented(function.node()).unwrap();
    body.add_statements("c();").unwrap();
    assert_eq!(body.text(), "function f() { a();\n    c(); }\n");
    body.remove_statement(1).unwrap();
    assert_eq!(file.text(), original);
}
