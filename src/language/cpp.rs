//! C++ language definition

use super::{CommentStyle, LanguageDef, LanguageId};

static DEFINITION: LanguageDef = LanguageDef {
    id: LanguageId::Cpp,
    name: "cpp",
    human_name: "C++",
    grammar: || tree_sitter_cpp::LANGUAGE.into(),
    // Uppercase variants are a Unix convention for C++ headers
    extensions: &["cpp", "hpp", "c++", "h++", "cc", "hh", "C", "H"],
    comment: CommentStyle::Line("//"),
    import_nodes: &["preproc_include"],
    function_nodes: &["function_definition"],
    class_nodes: &["class_specifier"],
    comment_nodes: &["comment"],
    function_body_nodes: &["compound_statement"],
    context_nodes: &[],
    import_predicate: None,
};

pub fn definition() -> &'static LanguageDef {
    &DEFINITION
}
