//! Completion post-processing
//!
//! Model output is trimmed against the parse tree of the surrounding code
//! before it goes back to the editor. Every step degrades gracefully: when
//! the language is unknown or parsing fails, the completion passes through
//! unchanged.

use std::collections::HashMap;

use crate::language::LanguageId;
use crate::ops;
use crate::parser::CodeParser;

const COMMENT_PREFIXES: [&str; 3] = ["/*", "//", "#"];
const SPECIAL_CHARS: &str = "()[];.,$%&^*@#!{}/";
/// Repeated groups shorter than this many lines stay in the completion
const REFLECTION_MIN_GROUP: usize = 5;
const REFLECTION_MAX_SPECIAL_SHARE: f64 = 0.25;
const REFLECTION_MAX_DIVERSITY: f64 = 0.35;

/// Trim `completion` to the smallest multi-line block enclosing the cursor.
///
/// The prefix and completion are parsed together; the block containing the
/// first alphanumeric character of the completion decides where it ends.
pub fn trim_by_min_allowed_context(
    prefix: &str,
    completion: &str,
    lang_id: Option<LanguageId>,
) -> String {
    let code_sample = format!("{prefix}{completion}");

    let Some(target_point) = ops::find_alnum_point(&code_sample, prefix.len()) else {
        return completion.to_string();
    };
    let Some(lang_id) = lang_id else {
        return completion.to_string();
    };

    let parser = match CodeParser::from_language_id(code_sample.as_str(), lang_id) {
        Ok(parser) => parser,
        Err(e) => {
            tracing::warn!(language = %lang_id, "failed to parse code: {e}");
            return completion.to_string();
        }
    };

    let context = parser.min_allowed_context(target_point);
    let Some(end_pos) = ops::find_cursor_position(&code_sample, context.end) else {
        return completion.to_string();
    };

    code_sample
        .get(prefix.len()..end_pos)
        .map(str::to_string)
        .unwrap_or_else(|| completion.to_string())
}

/// Drop a completion that consists solely of comments.
pub fn remove_comment_only_completion(completion: &str, lang_id: Option<LanguageId>) -> String {
    if completion.is_empty() {
        return completion.to_string();
    }
    let Some(lang_id) = lang_id else {
        return completion.to_string();
    };

    match CodeParser::from_language_id(completion, lang_id) {
        Ok(parser) if parser.comments_only() => {
            tracing::info!(language = %lang_id, "removing comments-only completion");
            String::new()
        }
        Ok(_) => completion.to_string(),
        Err(e) => {
            tracing::warn!(language = %lang_id, "failed to parse code: {e}");
            completion.to_string()
        }
    }
}

/// Remove lines the model echoed back from the surrounding code.
///
/// The completion is matched line by line against the context. Repeated
/// comment lines and long repeats of ordinary code are dropped; short
/// repeats stay, since re-emitting a line or two is often legitimate. The
/// current line, up to the first newline after the context, is never
/// touched.
pub fn clean_model_reflection(context: &str, completion: &str) -> String {
    let text = format!("{context}{completion}");
    let Some(br_pos) = ops::find_newline_position(&text, context.len()) else {
        // Only the current line was completed
        return completion.to_string();
    };

    let lines_before = split_code_lines(&text[..br_pos]);
    let lines_after = split_code_lines(&text[br_pos..]);

    let source: Vec<&str> = lines_before.iter().map(|line| line.trim()).collect();
    let target: Vec<&str> = lines_after.iter().map(|line| line.trim()).collect();

    let mut kept: Vec<&str> = Vec::new();
    let mut prev_line = 0;
    for group in ops::find_common_lines(&source, &target) {
        let (Some(&first), Some(&last)) = (group.first(), group.last()) else {
            continue;
        };
        let repeated = &lines_after[first..=last];
        kept.extend_from_slice(&lines_after[prev_line..first]);

        if !is_repeated_comment(repeated) && !is_large_repeat(&group, repeated) {
            kept.extend_from_slice(repeated);
        }
        prev_line = last + 1;
    }
    kept.extend_from_slice(&lines_after[prev_line..]);

    let mut out = text[context.len()..br_pos].to_string();
    for line in kept {
        out.push_str(line);
    }
    out
}

fn is_repeated_comment(lines: &[&str]) -> bool {
    lines.len() == 1
        && COMMENT_PREFIXES
            .iter()
            .any(|prefix| lines[0].trim_start().starts_with(prefix))
}

fn is_large_repeat(group: &[usize], lines: &[&str]) -> bool {
    if group.len() < REFLECTION_MIN_GROUP {
        return false;
    }

    let mut counts: HashMap<char, usize> = HashMap::new();
    for line in lines {
        for c in line.trim().chars() {
            *counts.entry(c).or_insert(0) += 1;
        }
    }
    let total: usize = counts.values().sum();
    if total == 0 {
        return false;
    }

    // Blocks heavy on punctuation or with many distinct characters carry
    // structure worth keeping even when repeated
    let special: usize = SPECIAL_CHARS.chars().filter_map(|c| counts.get(&c)).sum();
    let special_share = special as f64 / total as f64;
    let diversity = counts.len() as f64 / total as f64;

    special_share < REFLECTION_MAX_SPECIAL_SHARE && diversity < REFLECTION_MAX_DIVERSITY
}

/// Split into lines with each newline attached to the line it starts, so
/// concatenating the pieces reproduces the input.
fn split_code_lines(s: &str) -> Vec<&str> {
    if s.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut start = 0;
    for (idx, _) in s.match_indices('\n') {
        out.push(&s[start..idx]);
        start = idx;
    }
    out.push(&s[start..]);
    out
}

/// Remove a duplicated block terminator from the end of the completion.
///
/// Models often re-emit the closing line that already sits at the start of
/// the suffix. If dropping it from the completion leaves the document free
/// of syntax errors, the shorter completion wins.
pub fn fix_end_block_errors(
    prefix: &str,
    completion: &str,
    suffix: &str,
    lang_id: Option<LanguageId>,
) -> String {
    let suffix_first_line = suffix.trim();
    if suffix_first_line.is_empty() {
        return completion.to_string();
    }
    let suffix_first_line = match suffix_first_line.find('\n') {
        Some(idx) => &suffix_first_line[..idx],
        None => suffix_first_line,
    };

    let completion_lookup = completion.trim_end();
    if !completion_lookup.ends_with(suffix_first_line) {
        return completion.to_string();
    }
    let Some(lang_id) = lang_id else {
        return completion.to_string();
    };

    let completion_lookup = &completion_lookup[..completion_lookup.len() - suffix_first_line.len()];
    let code_sample = format!("{prefix}{completion_lookup}{suffix}");

    match CodeParser::from_language_id(code_sample, lang_id) {
        Ok(parser) if parser.errors().is_empty() => completion_lookup.to_string(),
        Ok(_) => completion.to_string(),
        Err(e) => {
            tracing::warn!(language = %lang_id, "failed to parse code: {e}");
            completion.to_string()
        }
    }
}

/// Insert a newline between context and completion when neither side has
/// one at the boundary.
pub fn prepend_new_line(code_context: &str, completion: &str) -> String {
    if !completion.is_empty() && !code_context.ends_with('\n') && !completion.starts_with('\n') {
        return format!("\n{completion}");
    }
    completion.to_string()
}

/// The standard post-processing chain for code completions
pub struct PostProcessor<'a> {
    code_context: &'a str,
    suffix: &'a str,
    lang_id: Option<LanguageId>,
}

impl<'a> PostProcessor<'a> {
    pub fn new(code_context: &'a str, suffix: &'a str, lang_id: Option<LanguageId>) -> Self {
        PostProcessor {
            code_context,
            suffix,
            lang_id,
        }
    }

    pub fn process(&self, completion: &str) -> String {
        let completion = remove_comment_only_completion(completion, self.lang_id);
        if completion.is_empty() {
            return completion;
        }

        let completion = trim_by_min_allowed_context(self.code_context, &completion, self.lang_id);
        let completion = clean_model_reflection(self.code_context, &completion);
        let completion =
            fix_end_block_errors(self.code_context, &completion, self.suffix, self.lang_id);

        ops::strip_whitespaces(&completion).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepend_new_line_only_when_boundary_has_none() {
        assert_eq!(prepend_new_line("a = 1", "b = 2"), "\nb = 2");
        assert_eq!(prepend_new_line("a = 1\n", "b = 2"), "b = 2");
        assert_eq!(prepend_new_line("a = 1", "\nb = 2"), "\nb = 2");
        assert_eq!(prepend_new_line("a = 1", ""), "");
    }

    #[test]
    fn unknown_language_passes_completion_through() {
        assert_eq!(trim_by_min_allowed_context("a", "bc", None), "bc");
        assert_eq!(remove_comment_only_completion("# note", None), "# note");
        assert_eq!(fix_end_block_errors("a", "b}", "}", None), "b}");
    }

    #[test]
    fn split_code_lines_keeps_newlines_attached() {
        assert_eq!(split_code_lines("a\nb\n"), vec!["a", "\nb", "\n"]);
        assert_eq!(split_code_lines("a\nb"), vec!["a", "\nb"]);
        assert_eq!(split_code_lines("\n"), vec!["", "\n"]);
        assert_eq!(split_code_lines(""), Vec::<&str>::new());
    }

    #[test]
    fn reflection_keeps_single_line_completion() {
        assert_eq!(clean_model_reflection("x = ", "1"), "1");
    }

    #[test]
    fn reflection_keeps_short_repeats() {
        let context = "x = 1\ny = 2\n";
        let completion = "x = 1\ny = 2\n";
        assert_eq!(clean_model_reflection(context, completion), completion);
    }
}
