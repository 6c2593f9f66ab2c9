//! Python language definition

use super::{CommentStyle, LanguageDef, LanguageId};

static DEFINITION: LanguageDef = LanguageDef {
    id: LanguageId::Python,
    name: "python",
    human_name: "Python",
    grammar: || tree_sitter_python::LANGUAGE.into(),
    extensions: &["py"],
    comment: CommentStyle::Line("#"),
    // `import x` and `from x import y` are distinct node kinds
    import_nodes: &["import_statement", "import_from_statement"],
    function_nodes: &["function_definition"],
    class_nodes: &["class_definition"],
    comment_nodes: &["comment"],
    function_body_nodes: &["block"],
    context_nodes: &["class_definition", "function_definition", "module"],
    import_predicate: None,
};

pub fn definition() -> &'static LanguageDef {
    &DEFINITION
}
