//! Ruby language definition

use super::{CommentStyle, LanguageDef, LanguageId};

/// `require` is a plain method call in the Ruby grammar, so the import tag
/// is the generic `call` node narrowed by this predicate.
fn is_require_call(node: &tree_sitter::Node<'_>, source: &[u8]) -> bool {
    if node.child_count() != 2 {
        return false;
    }

    let (Some(first), Some(second)) = (node.child(0), node.child(1)) else {
        return false;
    };

    let first_text = first.utf8_text(source).unwrap_or_default();

    (first_text == "require" || first_text == "require_relative")
        && first.kind() == "identifier"
        && second.kind() == "argument_list"
}

static DEFINITION: LanguageDef = LanguageDef {
    id: LanguageId::Ruby,
    name: "ruby",
    human_name: "Ruby",
    grammar: || tree_sitter_ruby::LANGUAGE.into(),
    extensions: &["rb"],
    comment: CommentStyle::Line("#"),
    import_nodes: &["call"],
    function_nodes: &["method"],
    class_nodes: &["class", "module"],
    comment_nodes: &["comment"],
    function_body_nodes: &["body_statement"],
    context_nodes: &[],
    import_predicate: Some(is_require_call),
};

pub fn definition() -> &'static LanguageDef {
    &DEFINITION
}
