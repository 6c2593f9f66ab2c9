//! Prompt assembly with per-component accounting
//!
//! The builder starts from the truncated prefix/suffix body and prepends
//! extra context sections one at a time, tracking how much of each section
//! survived its token budget.

use std::collections::HashMap;

use serde::Serialize;

use crate::language::LanguageId;
use crate::prompt::tokens::CodeContent;

/// Size of one prompt component, before or after budgeting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetadataCodeContent {
    /// Length in bytes
    pub length: usize,
    pub length_tokens: usize,
}

/// Accounting for one extra-info section: what was extracted (`pre`)
/// versus what the budget admitted (`post`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataExtraInfo {
    pub name: String,
    pub pre: MetadataCodeContent,
    pub post: MetadataCodeContent,
}

/// Per-component sizes recorded during assembly
#[derive(Debug, Clone, Default, Serialize)]
pub struct PromptMetadata {
    /// Body components keyed by name (`prefix`, `suffix`)
    pub components: HashMap<String, MetadataCodeContent>,
    /// Extra-info sections keyed by name (`imports`, `function_signatures`)
    pub extra_info: HashMap<String, MetadataExtraInfo>,
}

/// An assembled prompt ready for the model
#[derive(Debug, Clone, Serialize)]
pub struct Prompt {
    pub prefix: String,
    pub suffix: String,
    pub metadata: PromptMetadata,
}

/// Extracted context snippets with their token lengths
#[derive(Debug, Clone, Default)]
pub struct CodeInfo {
    pub content: Vec<CodeContent>,
}

impl CodeInfo {
    pub fn total_length(&self) -> usize {
        self.content.iter().map(|info| info.text.len()).sum()
    }

    pub fn total_length_tokens(&self) -> usize {
        self.content.iter().map(|info| info.length_tokens).sum()
    }
}

/// Assembles the final prefix from body text plus extra-info sections.
///
/// Sections are prepended whole, so the section added last ends up first
/// in the final prefix.
pub struct PromptBuilder {
    lang_id: Option<LanguageId>,
    file_name: String,
    prefix: String,
    suffix: String,
    metadata: PromptMetadata,
}

impl PromptBuilder {
    pub fn new(
        prefix: CodeContent,
        suffix: CodeContent,
        file_name: impl Into<String>,
        lang_id: Option<LanguageId>,
    ) -> Self {
        let mut metadata = PromptMetadata::default();
        metadata.components.insert(
            "prefix".to_string(),
            MetadataCodeContent {
                length: prefix.text.len(),
                length_tokens: prefix.length_tokens,
            },
        );
        metadata.components.insert(
            "suffix".to_string(),
            MetadataCodeContent {
                length: suffix.text.len(),
                length_tokens: suffix.length_tokens,
            },
        );

        PromptBuilder {
            lang_id,
            file_name: file_name.into(),
            prefix: prefix.text,
            suffix: suffix.text,
            metadata,
        }
    }

    /// Prepend the items of `extra_info` to the prefix, newest first,
    /// subject to `max_total_length_tokens`.
    ///
    /// Items already present in the prefix or suffix are skipped without
    /// charge. Over-budget items are dropped whole, but their tokens stay
    /// in the running total, so admission stops at the first item that
    /// overflows.
    pub fn add_extra_info(
        &mut self,
        name: &str,
        extra_info: &CodeInfo,
        max_total_length_tokens: usize,
    ) {
        let mut total_length = 0;
        let mut total_length_tokens = 0;
        let mut tokens_used = 0;

        for info in &extra_info.content {
            if self.prefix.contains(&info.text) || self.suffix.contains(&info.text) {
                continue;
            }

            total_length += info.text.len();
            total_length_tokens += info.length_tokens;
            if total_length_tokens <= max_total_length_tokens {
                self.prefix = format!("{}\n{}", info.text, self.prefix);
                tokens_used = total_length_tokens;
            }
        }

        self.metadata.extra_info.insert(
            name.to_string(),
            MetadataExtraInfo {
                name: name.to_string(),
                pre: MetadataCodeContent {
                    length: extra_info.total_length(),
                    length_tokens: extra_info.total_length_tokens(),
                },
                post: MetadataCodeContent {
                    length: total_length,
                    length_tokens: tokens_used,
                },
            },
        );
    }

    /// Header comment naming the file and language, rendered in the
    /// language's own comment style. Without a known language the header
    /// is a bare line naming only the file.
    fn prepend_header(&self) -> String {
        match self.lang_id.and_then(|lang| lang.def()) {
            Some(def) => {
                let header = def.comment.render(&format!(
                    "This code has a filename of {} and is written in {}.",
                    self.file_name, def.human_name,
                ));
                format!("{}\n{}", header, self.prefix)
            }
            None => format!(
                "This code has a filename of {}\n{}",
                self.file_name, self.prefix
            ),
        }
    }

    pub fn build(self) -> Prompt {
        let prefix = self.prepend_header();
        Prompt {
            prefix,
            suffix: self.suffix,
            metadata: self.metadata,
        }
    }
}
