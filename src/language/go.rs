//! Go language definition

use super::{CommentStyle, LanguageDef, LanguageId};

static DEFINITION: LanguageDef = LanguageDef {
    id: LanguageId::Go,
    name: "go",
    human_name: "Go",
    grammar: || tree_sitter_go::LANGUAGE.into(),
    extensions: &["go"],
    comment: CommentStyle::Line("//"),
    import_nodes: &["import_declaration"],
    function_nodes: &["function_declaration"],
    class_nodes: &[],
    comment_nodes: &["comment"],
    function_body_nodes: &["block"],
    context_nodes: &[],
    import_predicate: None,
};

pub fn definition() -> &'static LanguageDef {
    &DEFINITION
}
