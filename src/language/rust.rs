//! Rust language definition

use super::{CommentStyle, LanguageDef, LanguageId};

static DEFINITION: LanguageDef = LanguageDef {
    id: LanguageId::Rust,
    name: "rust",
    human_name: "Rust",
    grammar: || tree_sitter_rust::LANGUAGE.into(),
    extensions: &["rs"],
    comment: CommentStyle::Line("//"),
    import_nodes: &["use_declaration"],
    function_nodes: &["function_item"],
    class_nodes: &["struct_item"],
    comment_nodes: &["line_comment", "block_comment"],
    function_body_nodes: &["block"],
    context_nodes: &[],
    import_predicate: None,
};

pub fn definition() -> &'static LanguageDef {
    &DEFINITION
}
