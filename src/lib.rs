//! # codeprompt - Code-aware prompt construction
//!
//! Building blocks for code-suggestion services: extract syntactic context
//! from the code around a cursor, assemble a token-budgeted completion
//! prompt, and trim model output back to a syntactically sensible block.
//!
//! ## Features
//!
//! - **Language table**: one registry drives 13 languages; grammars are
//!   cargo features, so services compile in only what they serve
//! - **Tree visitors**: imports, function signatures, symbol counts,
//!   error blocks and cursor-enclosing contexts from one parse
//! - **Budgeted prompts**: context-window split between body, imports and
//!   signatures, measured with a HuggingFace tokenizer
//! - **Completion trimming**: parse-tree-driven post-processing of model
//!   output
//!
//! ## Quick Start
//!
//! ```no_run
//! use codeprompt::prompt::{EngineOptions, HfTokenizer, PromptEngine};
//! use codeprompt::{LanguageId, PostProcessor};
//!
//! # fn main() -> anyhow::Result<()> {
//! let lang_id = LanguageId::from_file_name("app/main.py");
//!
//! // Build a prompt from the code around the cursor
//! let tokenizer = HfTokenizer::from_file("tokenizer.json")?;
//! let engine = PromptEngine::new(tokenizer, EngineOptions::new(2048));
//! let prompt = engine.build_prompt("import os\n\ndef main():\n    ", "", "main.py", lang_id)?;
//!
//! // ... send prompt.prefix / prompt.suffix to the model ...
//! # let completion = String::new();
//!
//! // Trim the completion against the surrounding code
//! let processor = PostProcessor::new(&prompt.prefix, &prompt.suffix, lang_id);
//! let suggestion = processor.process(&completion);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod language;
pub mod ops;
pub mod parser;
pub mod postprocess;
pub mod prompt;

pub use config::Config;
pub use language::{LanguageDef, LanguageId, SymbolCategory};
pub use parser::{CodeContext, CodeParser, ParserError, Point};
pub use postprocess::PostProcessor;
pub use prompt::{Prompt, PromptEngine};
