//! PHP language definition

use super::{CommentStyle, LanguageDef, LanguageId};

static DEFINITION: LanguageDef = LanguageDef {
    id: LanguageId::Php,
    name: "php",
    human_name: "PHP",
    grammar: || tree_sitter_php::LANGUAGE_PHP.into(),
    extensions: &["php", "php3", "php4", "php5", "phps", "phpt"],
    comment: CommentStyle::Line("//"),
    import_nodes: &["namespace_use_declaration"],
    function_nodes: &["function_definition"],
    class_nodes: &["class_declaration"],
    comment_nodes: &["comment"],
    function_body_nodes: &["compound_statement"],
    context_nodes: &[],
    import_predicate: None,
};

pub fn definition() -> &'static LanguageDef {
    &DEFINITION
}
