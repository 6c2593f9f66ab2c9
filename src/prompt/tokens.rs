//! Token-based text measurement and truncation
//!
//! The [`TokenizationStrategy`] trait keeps the prompt engine independent
//! of any one tokenizer; [`HfTokenizer`] is the production implementation
//! over a HuggingFace tokenizer file.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error("Tokenizer error: {0}")]
    Backend(String),
}

impl From<tokenizers::Error> for TokenizerError {
    fn from(e: tokenizers::Error) -> Self {
        TokenizerError::Backend(e.to_string())
    }
}

/// Which end of the text to discard when over budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruncationSide {
    /// Drop tokens from the front, keeping the tail (prefixes)
    Left,
    /// Drop tokens from the back, keeping the head (suffixes)
    Right,
}

/// Text together with its measured token length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeContent {
    pub text: String,
    pub length_tokens: usize,
}

/// Tokenizer seam for the prompt engine
pub trait TokenizationStrategy {
    /// Truncate `text` to at most `max_length` tokens, discarding from
    /// `side`. Text within budget is returned verbatim.
    fn truncate_content(
        &self,
        text: &str,
        max_length: usize,
        side: TruncationSide,
    ) -> Result<CodeContent, TokenizerError>;

    /// Token lengths of a batch of texts
    fn estimate_length(&self, texts: &[&str]) -> Result<Vec<usize>, TokenizerError>;
}

/// [`TokenizationStrategy`] backed by the `tokenizers` crate
///
/// Special tokens are never added: measured lengths must match what the
/// serving model sees in the prompt body.
pub struct HfTokenizer {
    inner: tokenizers::Tokenizer,
}

impl HfTokenizer {
    pub fn new(inner: tokenizers::Tokenizer) -> Self {
        HfTokenizer { inner }
    }

    /// Load from a `tokenizer.json` file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, TokenizerError> {
        let inner = tokenizers::Tokenizer::from_file(path)?;
        Ok(HfTokenizer { inner })
    }
}

impl TokenizationStrategy for HfTokenizer {
    fn truncate_content(
        &self,
        text: &str,
        max_length: usize,
        side: TruncationSide,
    ) -> Result<CodeContent, TokenizerError> {
        let encoding = self.inner.encode(text, false)?;
        let ids = encoding.get_ids();

        if ids.len() <= max_length {
            return Ok(CodeContent {
                text: text.to_string(),
                length_tokens: ids.len(),
            });
        }

        let kept = match side {
            TruncationSide::Left => &ids[ids.len() - max_length..],
            TruncationSide::Right => &ids[..max_length],
        };

        Ok(CodeContent {
            text: self.inner.decode(kept, true)?,
            length_tokens: kept.len(),
        })
    }

    fn estimate_length(&self, texts: &[&str]) -> Result<Vec<usize>, TokenizerError> {
        texts
            .iter()
            .map(|text| {
                let encoding = self.inner.encode(*text, false)?;
                Ok(encoding.get_ids().len())
            })
            .collect()
    }
}
