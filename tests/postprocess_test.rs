//! Integration tests for completion post-processing

use codeprompt::postprocess::{
    clean_model_reflection, fix_end_block_errors, remove_comment_only_completion,
    trim_by_min_allowed_context,
};
use codeprompt::{LanguageId, PostProcessor};

const IF_BLOCK_PREFIX: &str = "def f(x):\n    if x:\n        ";

const PROCESS_FN: &str =
    "def process(items):\n    total = 0\n    for item in items:\n        total += item.value\n    return total\n";

#[test]
fn trim_cuts_completion_at_the_end_of_the_enclosing_block() {
    let completion = "foo()\n        bar()\nunrelated_next_statement()";
    let trimmed =
        trim_by_min_allowed_context(IF_BLOCK_PREFIX, completion, Some(LanguageId::Python));
    assert_eq!(trimmed, "foo()\n        bar()");
}

#[test]
fn trim_is_idempotent() {
    let completion = "foo()\n        bar()\nunrelated_next_statement()";
    let once = trim_by_min_allowed_context(IF_BLOCK_PREFIX, completion, Some(LanguageId::Python));
    let twice = trim_by_min_allowed_context(IF_BLOCK_PREFIX, &once, Some(LanguageId::Python));
    assert_eq!(once, twice);
}

#[test]
fn trim_keeps_completion_without_alphanumeric_content() {
    let completion = "  )\n";
    let trimmed =
        trim_by_min_allowed_context(IF_BLOCK_PREFIX, completion, Some(LanguageId::Python));
    assert_eq!(trimmed, completion);
}

#[test]
fn trim_keeps_completion_for_unknown_language() {
    let completion = "foo()\nbar()";
    assert_eq!(
        trim_by_min_allowed_context(IF_BLOCK_PREFIX, completion, None),
        completion
    );
}

#[test]
fn comment_only_completion_is_removed() {
    assert_eq!(
        remove_comment_only_completion("# just a note\n# nothing else\n", Some(LanguageId::Python)),
        ""
    );
}

#[test]
fn mixed_completion_is_kept() {
    let completion = "# comment\nx = 1\n";
    assert_eq!(
        remove_comment_only_completion(completion, Some(LanguageId::Python)),
        completion
    );
}

#[test]
fn duplicated_block_terminator_is_removed() {
    let prefix = "function f() {\n";
    let completion = "  return 1;\n}";
    let suffix = "\n}";
    let fixed = fix_end_block_errors(prefix, completion, suffix, Some(LanguageId::JavaScript));
    assert_eq!(fixed, "  return 1;\n");
}

#[test]
fn terminator_stays_when_removal_breaks_the_code() {
    // The completion's brace closes the inner block and the suffix closes
    // the function; dropping the brace leaves the document unbalanced.
    let prefix = "function f() {\n  if (x) {\n";
    let completion = "    return 1;\n  }";
    let suffix = "\n}";
    let fixed = fix_end_block_errors(prefix, completion, suffix, Some(LanguageId::JavaScript));
    assert_eq!(fixed, completion);
}

#[test]
fn completion_without_duplicate_passes_through() {
    let prefix = "function f() {\n";
    let completion = "  return 1;";
    let suffix = "\n}";
    assert_eq!(
        fix_end_block_errors(prefix, completion, suffix, Some(LanguageId::JavaScript)),
        completion
    );
}

#[test]
fn reflection_of_a_long_context_block_is_removed() {
    // The model echoes the whole preceding function back
    let context = format!("{PROCESS_FN}\n");
    assert_eq!(clean_model_reflection(&context, PROCESS_FN), "");
}

#[test]
fn reflected_comment_line_is_removed() {
    let context = "# compute totals\nx = 1\n";
    let completion = "# compute totals\nx = 2\n";
    assert_eq!(clean_model_reflection(context, completion), "\nx = 2\n");
}

#[test]
fn fresh_completion_is_untouched_by_reflection_cleanup() {
    let context = "def f(x):\n";
    let completion = "    if x:\n        return 1\n    return 0\n";
    assert_eq!(clean_model_reflection(context, completion), completion);
}

#[test]
fn processor_drops_reflected_function_body() {
    let prefix = format!("{PROCESS_FN}\n");
    let processor = PostProcessor::new(&prefix, "", Some(LanguageId::Python));
    assert_eq!(processor.process(PROCESS_FN), "");
}

#[test]
fn processor_removes_comment_only_completions() {
    let processor = PostProcessor::new("x = 1\n", "", Some(LanguageId::Python));
    assert_eq!(processor.process("# only a comment"), "");
}

#[test]
fn processor_trims_and_strips() {
    let processor = PostProcessor::new(IF_BLOCK_PREFIX, "", Some(LanguageId::Python));
    let out = processor.process("foo()\n        bar()\nunrelated_next_statement()");
    assert_eq!(out, "foo()\n        bar()");

    // Whitespace-only results collapse to empty
    assert_eq!(processor.process("   \n  "), "");
}

#[test]
fn empty_completion_stays_empty() {
    let processor = PostProcessor::new("x = 1\n", "", Some(LanguageId::Python));
    assert_eq!(processor.process(""), "");
}
