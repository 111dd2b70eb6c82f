//! Tests for container resolution and body handling.
use tsedit_common::{IndentationText, ManipulationSettings, TextRange};
use tsedit_parser::SyntaxKind;
use tsedit_printer::ClassStructure;
use tsedit_statements::{ManipulationError, SourceFile, TypedNode};

fn source(text: &str) -> SourceFile {
    SourceFile::new("test.ts", text)
}

#[test]
fn non_container_nodes_are_not_implemented() {
    let mut file = source("class A {\n}\n");
    let class = file.statements().get_class_or_throw("A").unwrap();
    let error = file.statemented(class.node()).unwrap_err();
    assert_eq!(
        error,
        ManipulationError::NotImplemented(
            "Could not find the statements for node kind: ClassDeclaration".to_string()
        )
    );
}

#[test]
fn bodyless_function_reads_as_empty_without_creating_a_body() {
    let mut file = source("function f();\n");
    let function = file.statements().get_statements().unwrap()[0];
    let body = file.statemented(function).unwrap();
    assert_eq!(body.get_statements().unwrap(), Vec::new());
    assert_eq!(file.text(), "function f();\n");
}

#[test]
fn ensure_body_is_idempotent() {
    let mut file = source("namespace N {\n    function f(): void; // sig\n}\n");
    let namespace = file.statements().get_namespace_or_throw("N").unwrap();
    let function = {
        let body = file.statemented(namespace.node()).unwrap();
        body.get_function_or_throw("f").unwrap_err();
        body.get_statements().unwrap()[0]
    };
    let mut function = file.statemented(function).unwrap();
    function.ensure_body().unwrap();
    function.ensure_body().unwrap();
    assert_eq!(
        file.text(),
        "namespace N {\n    function f(): void {\n    } // sig\n}\n"
    );
}

#[test]
fn ensure_body_without_semicolon() {
    let mut file = source("declare module \"m\"\n");
    let module = file.statements().get_namespace_or_throw("\"m\"").unwrap();
    file.statemented(module.node())
        .unwrap()
        .add_class(&ClassStructure::new("A"))
        .unwrap();
    assert_eq!(
        file.text(),
        "declare module \"m\" {\n    class A {\n    }\n}\n"
    );
}

#[test]
fn remove_body_requires_a_body() {
    let mut file = source("function f();\n");
    let function = file.statements().get_statements().unwrap()[0];
    let error = file.statemented(function).unwrap().remove_body().unwrap_err();
    assert!(matches!(error, ManipulationError::InvalidOperation(_)));

    let error = file.statements().remove_body().unwrap_err();
    assert!(matches!(error, ManipulationError::InvalidOperation(_)));
}

#[test]
fn clause_with_block_edits_the_block() {
    let mut file = source("switch (x) {\n    case 1: {\n        a();\n    }\n}\n");
    let switch = file.statements().get_statements().unwrap()[0];
    let clause = file.arena().children(switch)[0];
    let mut clause = file.statemented(clause).unwrap();
    assert_eq!(clause.statement_count().unwrap(), 1);
    clause.add_statements("break;").unwrap();
    assert_eq!(
        file.text(),
        "switch (x) {\n    case 1: {\n        a();\n        break;\n    }\n}\n"
    );
}

#[test]
fn standalone_blocks_are_containers() {
    let mut file = source("if (x) {\n    a();\n}\n");
    let statement = file.statements().get_statements().unwrap()[0];
    let block = file
        .arena()
        .children(statement)
        .iter()
        .copied()
        .find(|&child| file.arena().kind_of(child) == Some(SyntaxKind::Block))
        .unwrap();
    let mut block = file.statemented(block).unwrap();
    block.insert_statements(0, "b();").unwrap();
    assert_eq!(file.text(), "if (x) {\n    b();\n    a();\n}\n");
}

#[test]
fn editor_follows_the_container_across_edits() {
    let mut file = source("let a = 1;\n\nnamespace N {\n}\n");
    let namespace = file.statements().get_namespace_or_throw("N").unwrap();
    let mut body = file.statemented(namespace.node()).unwrap();
    body.add_class(&ClassStructure::new("A")).unwrap();
    body.add_class(&ClassStructure::new("B")).unwrap();
    body.remove_statement(0).unwrap();
    assert_eq!(body.kind(), Some(SyntaxKind::ModuleDeclaration));
    assert_eq!(
        file.text(),
        "let a = 1;\n\nnamespace N {\n    class B {\n    }\n}\n"
    );
}

#[test]
fn replace_text_rejects_ranges_outside_the_text() {
    let mut file = source("a();\n");
    let error = file.replace_text(TextRange::new(2, 10), "").unwrap_err();
    assert!(matches!(error, ManipulationError::InvalidOperation(_)));
    assert_eq!(file.text(), "a();\n");

    file.insert_text(0, "b();\n").unwrap();
    assert_eq!(file.text(), "b();\na();\n");
    assert_eq!(file.statements().statement_count().unwrap(), 2);

    file.remove_text(TextRange::new(0, 5)).unwrap();
    assert_eq!(file.text(), "a();\n");
    assert_eq!(file.statements().statement_count().unwrap(), 1);
}

#[test]
fn changed_settings_apply_to_later_edits() {
    let mut file = source("namespace N {\n}\n");
    file.set_settings(ManipulationSettings::default().with_indentation(IndentationText::TwoSpaces));
    let namespace = file.statements().get_namespace_or_throw("N").unwrap();
    file.statemented(namespace.node())
        .unwrap()
        .add_statements("a();")
        .unwrap();
    assert_eq!(file.text(), "namespace N {\n  a();\n}\n");
    assert_eq!(file.settings().indentation_text, IndentationText::TwoSpaces);
}

#[test]
fn parse_diagnostics_do_not_block_editing() {
    let mut file = source("class A {\n");
    assert!(!file.diagnostics().is_empty());
    let class = file.statements().get_class_or_throw("A").unwrap();
    assert_eq!(class.name(&file), Some("A"));
}
