//! Common test fixtures and helpers
//!
//! Usage in test files:
//! ```ignore
//! mod common;
//! use common::CharTokenizer;
//! ```

use codeprompt::prompt::{CodeContent, TokenizationStrategy, TokenizerError, TruncationSide};

/// Deterministic tokenizer for tests: one token per character.
///
/// Truncation becomes plain character slicing, so budget arithmetic in
/// assertions can be done by counting characters.
pub struct CharTokenizer;

impl TokenizationStrategy for CharTokenizer {
    fn truncate_content(
        &self,
        text: &str,
        max_length: usize,
        side: TruncationSide,
    ) -> Result<CodeContent, TokenizerError> {
        let count = text.chars().count();
        if count <= max_length {
            return Ok(CodeContent {
                text: text.to_string(),
                length_tokens: count,
            });
        }

        let text: String = match side {
            TruncationSide::Left => text.chars().skip(count - max_length).collect(),
            TruncationSide::Right => text.chars().take(max_length).collect(),
        };

        Ok(CodeContent {
            text,
            length_tokens: max_length,
        })
    }

    fn estimate_length(&self, texts: &[&str]) -> Result<Vec<usize>, TokenizerError> {
        Ok(texts.iter().map(|text| text.chars().count()).collect())
    }
}
