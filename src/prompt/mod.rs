//! Token-budgeted prompt construction
//!
//! The engine splits a model's context window between the code body and
//! extracted context (imports, function signatures), truncates each part
//! with the tokenizer, and assembles the final prompt.

pub mod builder;
pub mod tokens;

pub use builder::{
    CodeInfo, MetadataCodeContent, MetadataExtraInfo, Prompt, PromptBuilder, PromptMetadata,
};
pub use tokens::{CodeContent, HfTokenizer, TokenizationStrategy, TokenizerError, TruncationSide};

use serde::{Deserialize, Serialize};

use crate::language::{LanguageId, SymbolCategory};
use crate::ops;
use crate::parser::CodeParser;

/// Share of the context window reserved for imports
const MAX_TOKENS_IMPORTS_PERCENT: f64 = 0.12;
/// Share of the body budget given to the suffix under
/// [`BodySplit::SuffixPercent`]
const MAX_TOKENS_SUFFIX_PERCENT: f64 = 0.07;
/// Hard cap on tokens spent on function signatures
const MAX_TOKENS_FUNC_SIGNATURES: usize = 1024;

/// How the body budget is divided between prefix and suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodySplit {
    /// Suffix gets a fixed small share, prefix takes the rest
    #[default]
    SuffixPercent,
    /// Prefix and suffix each get half
    Even,
}

/// Prompt engine settings
#[derive(Debug, Clone, Copy)]
pub struct EngineOptions {
    /// Model context window size in tokens
    pub max_model_len: usize,
    pub body_split: BodySplit,
    /// Bound the suffix to the enclosing context construct before
    /// truncating it by tokens
    pub truncate_suffix_near_cursor: bool,
}

impl EngineOptions {
    pub fn new(max_model_len: usize) -> Self {
        EngineOptions {
            max_model_len,
            body_split: BodySplit::default(),
            truncate_suffix_near_cursor: false,
        }
    }
}

enum ExtractTarget {
    Imports,
    FunctionSignatures,
}

/// Builds completion prompts within a fixed token budget
pub struct PromptEngine<T> {
    tokenizer: T,
    options: EngineOptions,
}

impl<T: TokenizationStrategy> PromptEngine<T> {
    pub fn new(tokenizer: T, options: EngineOptions) -> Self {
        PromptEngine { tokenizer, options }
    }

    /// Assemble a prompt from the code around the cursor.
    ///
    /// Imports come from the prefix, signatures from the suffix. Each
    /// section is capped, the remaining budget goes to the body, and the
    /// sections are prepended to the truncated prefix.
    pub fn build_prompt(
        &self,
        prefix: &str,
        suffix: &str,
        file_name: &str,
        lang_id: Option<LanguageId>,
    ) -> Result<Prompt, TokenizerError> {
        let imports = self.extract_code_info(prefix, ExtractTarget::Imports, lang_id)?;
        let imports_max =
            (self.options.max_model_len as f64 * MAX_TOKENS_IMPORTS_PERCENT) as usize;
        let imports_budget = imports.total_length_tokens().min(imports_max);

        let signatures =
            self.extract_code_info(suffix, ExtractTarget::FunctionSignatures, lang_id)?;
        let signatures_budget = signatures
            .total_length_tokens()
            .min(MAX_TOKENS_FUNC_SIGNATURES);

        let body_budget = self
            .options
            .max_model_len
            .saturating_sub(imports_budget)
            .saturating_sub(signatures_budget);

        tracing::debug!(
            imports_budget,
            signatures_budget,
            body_budget,
            "prompt budgets"
        );

        let suffix = if self.options.truncate_suffix_near_cursor {
            self.suffix_near_cursor(prefix, suffix, lang_id)
                .unwrap_or_else(|| suffix.to_string())
        } else {
            suffix.to_string()
        };

        let (body_prefix, body_suffix) = self.split_body(prefix, &suffix, body_budget)?;

        let mut builder = PromptBuilder::new(body_prefix, body_suffix, file_name, lang_id);
        // prepend order: the section added last lands first in the prefix
        builder.add_extra_info("function_signatures", &signatures, signatures_budget);
        builder.add_extra_info("imports", &imports, imports_budget);

        Ok(builder.build())
    }

    /// Truncate prefix and suffix into `max_length` tokens.
    ///
    /// The suffix is truncated first; tokens it does not use roll over to
    /// the prefix.
    fn split_body(
        &self,
        prefix: &str,
        suffix: &str,
        max_length: usize,
    ) -> Result<(CodeContent, CodeContent), TokenizerError> {
        let suffix_budget = match self.options.body_split {
            BodySplit::SuffixPercent => {
                (max_length as f64 * MAX_TOKENS_SUFFIX_PERCENT) as usize
            }
            BodySplit::Even => max_length / 2,
        };

        let suffix_truncated =
            self.tokenizer
                .truncate_content(suffix, suffix_budget, TruncationSide::Right)?;

        let prefix_budget = max_length.saturating_sub(suffix_truncated.length_tokens);
        let prefix_truncated =
            self.tokenizer
                .truncate_content(prefix, prefix_budget, TruncationSide::Left)?;

        Ok((prefix_truncated, suffix_truncated))
    }

    fn extract_code_info(
        &self,
        content: &str,
        target: ExtractTarget,
        lang_id: Option<LanguageId>,
    ) -> Result<CodeInfo, TokenizerError> {
        let Some(lang_id) = lang_id else {
            return Ok(CodeInfo::default());
        };

        let snippets = match CodeParser::from_language_id(content, lang_id) {
            Ok(parser) => match target {
                ExtractTarget::Imports => parser.imports(),
                ExtractTarget::FunctionSignatures => parser.function_signatures(),
            },
            Err(e) => {
                tracing::warn!(language = %lang_id, "code extraction failed: {e}");
                return Ok(CodeInfo::default());
            }
        };

        let as_comments = matches!(target, ExtractTarget::FunctionSignatures);
        self.to_code_info(snippets, lang_id, as_comments)
    }

    fn to_code_info(
        &self,
        snippets: Vec<String>,
        lang_id: LanguageId,
        as_comments: bool,
    ) -> Result<CodeInfo, TokenizerError> {
        if snippets.is_empty() {
            return Ok(CodeInfo::default());
        }

        let snippets: Vec<String> = match (as_comments, lang_id.def()) {
            (true, Some(def)) => snippets
                .iter()
                .map(|text| def.comment.render(text))
                .collect(),
            _ => snippets,
        };

        let refs: Vec<&str> = snippets.iter().map(String::as_str).collect();
        let lengths = self.tokenizer.estimate_length(&refs)?;

        Ok(CodeInfo {
            content: snippets
                .into_iter()
                .zip(lengths)
                .map(|(text, length_tokens)| CodeContent {
                    text,
                    length_tokens,
                })
                .collect(),
        })
    }

    /// Suffix bounded to the end of the construct enclosing the cursor.
    /// Falls back to `None` whenever the source cannot be parsed or the
    /// language declares no context constructs.
    fn suffix_near_cursor(
        &self,
        prefix: &str,
        suffix: &str,
        lang_id: Option<LanguageId>,
    ) -> Option<String> {
        let lang_id = lang_id?;
        let source = format!("{prefix}{suffix}");
        let cursor = ops::end_point(prefix);

        match CodeParser::from_language_id(source, lang_id) {
            Ok(parser) => parser.suffix_near_cursor(cursor),
            Err(e) => {
                tracing::warn!(language = %lang_id, "suffix bounding failed: {e}");
                None
            }
        }
    }
}

/// Count symbols in `content`, for request telemetry.
///
/// Returns an empty map when the language is unknown or parsing fails.
pub fn count_symbols(
    content: &str,
    lang_id: Option<LanguageId>,
    categories: Option<&[SymbolCategory]>,
) -> std::collections::HashMap<SymbolCategory, usize> {
    let Some(lang_id) = lang_id else {
        return Default::default();
    };

    match CodeParser::from_language_id(content, lang_id) {
        Ok(parser) => parser.count_symbols(categories),
        Err(e) => {
            tracing::warn!(language = %lang_id, "symbol counting failed: {e}");
            Default::default()
        }
    }
}
