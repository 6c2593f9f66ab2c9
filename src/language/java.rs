//! Java language definition

use super::{CommentStyle, LanguageDef, LanguageId};

static DEFINITION: LanguageDef = LanguageDef {
    id: LanguageId::Java,
    name: "java",
    human_name: "Java",
    grammar: || tree_sitter_java::LANGUAGE.into(),
    extensions: &["java"],
    comment: CommentStyle::Line("//"),
    // Plain and static imports share the same node kind in the Java grammar
    import_nodes: &["import_declaration"],
    // Every Java function belongs to a class; no standalone-function tag
    function_nodes: &[],
    class_nodes: &["class_declaration"],
    comment_nodes: &["line_comment", "block_comment"],
    function_body_nodes: &[],
    context_nodes: &[],
    import_predicate: None,
};

pub fn definition() -> &'static LanguageDef {
    &DEFINITION
}
