//! Kotlin language definition

use super::{CommentStyle, LanguageDef, LanguageId};

static DEFINITION: LanguageDef = LanguageDef {
    id: LanguageId::Kotlin,
    name: "kotlin",
    human_name: "Kotlin",
    grammar: || tree_sitter_kotlin::LANGUAGE.into(),
    extensions: &["kt", "kts"],
    comment: CommentStyle::Line("//"),
    import_nodes: &["import_header"],
    function_nodes: &["function_declaration"],
    class_nodes: &["class_declaration"],
    comment_nodes: &["line_comment", "multiline_comment"],
    function_body_nodes: &["function_body"],
    context_nodes: &[],
    import_predicate: None,
};

pub fn definition() -> &'static LanguageDef {
    &DEFINITION
}
