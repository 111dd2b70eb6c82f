//! Tests for the structure printers.
use tsedit_common::ManipulationSettings;
use tsedit_printer::*;

fn print<P: StructurePrinter>(printer: P, structures: &[P::Structure]) -> String {
    let mut writer = CodeWriter::new(&ManipulationSettings::default());
    printer.print_texts(&mut writer, structures);
    writer.into_string()
}

#[test]
fn classes_are_separated_by_blank_lines() {
    let text = print(
        ClassPrinter::new(false),
        &[ClassStructure::new("A"), ClassStructure::new("B")],
    );
    assert_eq!(text, "class A {\n}\n\nclass B {\n}");
}

#[test]
fn ambient_classes_are_separated_by_new_lines_and_omit_bodies() {
    let mut class = ClassStructure::new("A");
    class.has_declare_keyword = true;
    class.methods.push(MethodStructure {
        name: "m".to_string(),
        return_type: Some("void".to_string()),
        ..MethodStructure::default()
    });
    let text = print(ClassPrinter::new(true), &[class, ClassStructure::new("B")]);
    assert_eq!(text, "declare class A {\n    m(): void;\n}\nclass B {\n}");
}

#[test]
fn class_members_and_modifiers() {
    let class = ClassStructure {
        name: Some("Point".to_string()),
        is_exported: true,
        is_abstract: true,
        docs: vec!["A point.".to_string()],
        type_parameters: vec![TypeParameterStructure::new("T")],
        extends: Some("Base<T>".to_string()),
        implements: vec!["I".to_string(), "J".to_string()],
        properties: vec![PropertyStructure {
            name: "x".to_string(),
            scope: Some(Scope::Private),
            is_readonly: true,
            type_text: Some("number".to_string()),
            initializer: Some("0".to_string()),
            ..PropertyStructure::default()
        }],
        methods: vec![MethodStructure {
            name: "get".to_string(),
            body_text: Some("return this.x;".to_string()),
            ..MethodStructure::default()
        }],
        ..ClassStructure::default()
    };
    let text = print(ClassPrinter::new(false), &[class]);
    assert_eq!(
        text,
        "/**\n * A point.\n */\nexport abstract class Point<T> extends Base<T> implements I, J {\n    private readonly x: number = 0;\n\n    get() {\n        return this.x;\n    }\n}"
    );
}

#[test]
fn function_spacing_depends_on_declare() {
    let mut f = FunctionStructure::new("f");
    f.has_declare_keyword = true;
    let mut g = FunctionStructure::new("g");
    g.has_declare_keyword = true;
    let text = print(FunctionPrinter::new(false), &[f.clone(), g]);
    assert_eq!(text, "declare function f();\ndeclare function g();");

    let h = FunctionStructure::new("h");
    let text = print(FunctionPrinter::new(false), &[f, h]);
    assert_eq!(text, "declare function f();\n\nfunction h() {\n}");
}

#[test]
fn function_overloads_precede_the_implementation() {
    let function = FunctionStructure {
        name: Some("f".to_string()),
        is_exported: true,
        parameters: vec![ParameterStructure::new("a").with_type("string | number")],
        overloads: vec![FunctionOverloadStructure {
            is_exported: true,
            parameters: vec![ParameterStructure::new("a").with_type("string")],
            return_type: Some("void".to_string()),
            ..FunctionOverloadStructure::default()
        }],
        body: StatementedStructure {
            body_text: Some(Some("console.log(a);".to_string())),
            ..StatementedStructure::default()
        },
        ..FunctionStructure::default()
    };
    assert_eq!(function.statement_count(), 2);
    let text = print(FunctionPrinter::new(false), &[function]);
    assert_eq!(
        text,
        "export function f(a: string): void;\nexport function f(a: string | number) {\n    console.log(a);\n}"
    );
}

#[test]
fn enum_members_with_values() {
    let mut structure = EnumStructure::new("E");
    structure.is_const = true;
    structure.members = vec![
        EnumMemberStructure {
            value: Some(EnumValue::Number(1.0)),
            ..EnumMemberStructure::new("A")
        },
        EnumMemberStructure {
            value: Some(EnumValue::String("b".to_string())),
            ..EnumMemberStructure::new("B")
        },
        EnumMemberStructure::new("C"),
    ];
    let text = print(EnumPrinter, &[structure]);
    assert_eq!(text, "const enum E {\n    A = 1,\n    B = \"b\",\n    C\n}");
}

#[test]
fn type_aliases_and_variables_use_single_new_lines() {
    let text = print(
        TypeAliasPrinter,
        &[
            TypeAliasStructure::new("A", "string"),
            TypeAliasStructure::new("B", "number"),
        ],
    );
    assert_eq!(text, "type A = string;\ntype B = number;");

    let statement = VariableStatementStructure::new(
        VariableDeclarationKind::Const,
        vec![
            VariableDeclarationStructure::new("a").with_initializer("1"),
            VariableDeclarationStructure::new("b").with_initializer("2"),
        ],
    );
    let text = print(VariableStatementPrinter, &[statement.clone(), statement]);
    assert_eq!(text, "const a = 1, b = 2;\nconst a = 1, b = 2;");
}

#[test]
fn namespace_body_groups_in_order() {
    let namespace = NamespaceStructure {
        name: "N".to_string(),
        has_declare_keyword: true,
        body: StatementedStructure {
            classes: Some(vec![ClassStructure::new("C")]),
            type_aliases: Some(vec![TypeAliasStructure::new("T", "string")]),
            functions: Some(vec![FunctionStructure::new("f"), FunctionStructure::new("g")]),
            ..StatementedStructure::default()
        },
        ..NamespaceStructure::default()
    };
    let text = print(NamespacePrinter::new(false), &[namespace]);
    assert_eq!(
        text,
        "declare namespace N {\n    type T = string;\n\n    function f();\n    function g();\n\n    class C {\n    }\n}"
    );
}

#[test]
fn interfaces_print_signatures() {
    let interface = InterfaceStructure {
        name: "I".to_string(),
        extends: vec!["J".to_string()],
        properties: vec![PropertySignatureStructure {
            name: "p".to_string(),
            has_question_token: true,
            type_text: Some("string".to_string()),
            ..PropertySignatureStructure::default()
        }],
        methods: vec![MethodSignatureStructure {
            name: "m".to_string(),
            parameters: vec![ParameterStructure::new("x").with_type("number")],
            return_type: Some("void".to_string()),
            ..MethodSignatureStructure::default()
        }],
        ..InterfaceStructure::default()
    };
    let text = print(InterfacePrinter, &[interface]);
    assert_eq!(text, "interface I extends J {\n    p?: string;\n    m(x: number): void;\n}");
}

#[test]
fn global_augmentation_has_no_name() {
    let namespace = NamespaceStructure {
        name: "ignored".to_string(),
        has_declare_keyword: true,
        declaration_kind: NamespaceDeclarationKind::Global,
        ..NamespaceStructure::default()
    };
    let text = print(NamespacePrinter::new(false), &[namespace]);
    assert_eq!(text, "declare global {\n}");
}
