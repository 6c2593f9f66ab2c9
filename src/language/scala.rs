//! Scala language definition

use super::{CommentStyle, LanguageDef, LanguageId};

static DEFINITION: LanguageDef = LanguageDef {
    id: LanguageId::Scala,
    name: "scala",
    human_name: "Scala",
    grammar: || tree_sitter_scala::LANGUAGE.into(),
    extensions: &["scala"],
    comment: CommentStyle::Line("//"),
    import_nodes: &["import_declaration"],
    function_nodes: &["function_definition"],
    class_nodes: &["class_definition"],
    comment_nodes: &["comment", "block_comment"],
    function_body_nodes: &["block"],
    context_nodes: &[],
    import_predicate: None,
};

pub fn definition() -> &'static LanguageDef {
    &DEFINITION
}
