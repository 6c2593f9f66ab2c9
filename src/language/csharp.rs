//! C# language definition

use super::{CommentStyle, LanguageDef, LanguageId};

static DEFINITION: LanguageDef = LanguageDef {
    id: LanguageId::CSharp,
    name: "csharp",
    human_name: "C#",
    grammar: || tree_sitter_c_sharp::LANGUAGE.into(),
    extensions: &["cs"],
    comment: CommentStyle::Line("//"),
    import_nodes: &["using_directive"],
    // Every C# function belongs to a class; no standalone-function tag
    function_nodes: &[],
    class_nodes: &["class_declaration"],
    comment_nodes: &["comment"],
    function_body_nodes: &[],
    context_nodes: &[],
    import_predicate: None,
};

pub fn definition() -> &'static LanguageDef {
    &DEFINITION
}
