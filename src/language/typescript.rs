//! TypeScript language definition

use super::{CommentStyle, LanguageDef, LanguageId};

static DEFINITION: LanguageDef = LanguageDef {
    id: LanguageId::TypeScript,
    name: "typescript",
    human_name: "TypeScript",
    grammar: || tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
    extensions: &["ts", "tsx"],
    comment: CommentStyle::Line("//"),
    import_nodes: &["import_statement"],
    function_nodes: &["function_declaration", "generator_function_declaration"],
    class_nodes: &["class_declaration", "interface_declaration"],
    comment_nodes: &["comment"],
    function_body_nodes: &["statement_block"],
    context_nodes: &[
        "class_declaration",
        "interface_declaration",
        "function_declaration",
        "generator_function_declaration",
        "call_expression",
        "program",
    ],
    import_predicate: None,
};

pub fn definition() -> &'static LanguageDef {
    &DEFINITION
}
