//! C language definition

use super::{CommentStyle, LanguageDef, LanguageId};

static DEFINITION: LanguageDef = LanguageDef {
    id: LanguageId::C,
    name: "c",
    human_name: "C",
    grammar: || tree_sitter_c::LANGUAGE.into(),
    extensions: &["c", "h"],
    comment: CommentStyle::Block {
        open: "/*",
        close: "*/",
    },
    import_nodes: &["preproc_include"],
    function_nodes: &["function_definition"],
    class_nodes: &[],
    comment_nodes: &["comment"],
    function_body_nodes: &["compound_statement"],
    context_nodes: &[],
    import_predicate: None,
};

pub fn definition() -> &'static LanguageDef {
    &DEFINITION
}
