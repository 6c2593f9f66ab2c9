//! JavaScript language definition

use super::{CommentStyle, LanguageDef, LanguageId};

static DEFINITION: LanguageDef = LanguageDef {
    id: LanguageId::JavaScript,
    name: "javascript",
    human_name: "JavaScript",
    grammar: || tree_sitter_javascript::LANGUAGE.into(),
    extensions: &["js", "jsx"],
    comment: CommentStyle::Line("//"),
    import_nodes: &["import_statement"],
    function_nodes: &["function_declaration", "generator_function_declaration"],
    class_nodes: &["class_declaration"],
    comment_nodes: &["comment"],
    function_body_nodes: &["statement_block"],
    context_nodes: &[
        "class_declaration",
        "lexical_declaration",
        "function_declaration",
        "generator_function_declaration",
    ],
    import_predicate: None,
};

pub fn definition() -> &'static LanguageDef {
    &DEFINITION
}
