//! Language registry for code parsing
//!
//! This module is the single source of truth for per-language knowledge:
//! file extensions, tree-sitter grammar constructors, comment templates, and
//! the node-type tags behind each extraction category (imports, functions,
//! classes, comments).
//!
//! Languages are registered at compile time based on feature flags.
//!
//! # Feature Flags
//!
//! One `lang-*` flag per language (e.g. `lang-python`, `lang-rust`), all
//! enabled by default. Disabling a flag drops the grammar dependency; the
//! `LanguageId` variant stays, but parsing it fails with
//! `ParserError::UnsupportedLanguage`.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

#[cfg(feature = "lang-c")]
mod c;
#[cfg(feature = "lang-cpp")]
mod cpp;
#[cfg(feature = "lang-csharp")]
mod csharp;
#[cfg(feature = "lang-go")]
mod go;
#[cfg(feature = "lang-java")]
mod java;
#[cfg(feature = "lang-javascript")]
mod javascript;
#[cfg(feature = "lang-kotlin")]
mod kotlin;
#[cfg(feature = "lang-php")]
mod php;
#[cfg(feature = "lang-python")]
mod python;
#[cfg(feature = "lang-ruby")]
mod ruby;
#[cfg(feature = "lang-rust")]
mod rust;
#[cfg(feature = "lang-scala")]
mod scala;
#[cfg(feature = "lang-typescript")]
mod typescript;

/// A language definition with all parsing configuration
pub struct LanguageDef {
    /// Which language this defines
    pub id: LanguageId,
    /// Language name (e.g., "python", "csharp")
    pub name: &'static str,
    /// Human-readable name used in prompt headers (e.g., "C#")
    pub human_name: &'static str,
    /// Function to get the tree-sitter grammar
    pub grammar: fn() -> tree_sitter::Language,
    /// File extensions for this language
    pub extensions: &'static [&'static str],
    /// How to render a line of text as a source comment
    pub comment: CommentStyle,
    /// Node kinds that represent import statements
    pub import_nodes: &'static [&'static str],
    /// Node kinds that represent function definitions
    pub function_nodes: &'static [&'static str],
    /// Node kinds that represent class-like definitions
    pub class_nodes: &'static [&'static str],
    /// Node kinds that represent comments
    pub comment_nodes: &'static [&'static str],
    /// Child node kinds holding a function body (stripped for signatures)
    pub function_body_nodes: &'static [&'static str],
    /// Node kinds usable as cursor context, most relevant first
    pub context_nodes: &'static [&'static str],
    /// Extra filter applied to `import_nodes` matches (Ruby `require` calls
    /// share the generic `call` node kind)
    pub import_predicate: Option<fn(&tree_sitter::Node<'_>, &[u8]) -> bool>,
}

impl LanguageDef {
    /// Node kinds registered for an extraction category.
    ///
    /// An empty slice means the language has no tags for that category;
    /// extraction yields an empty result, never an error.
    pub fn category_nodes(&self, category: SymbolCategory) -> &'static [&'static str] {
        match category {
            SymbolCategory::Imports => self.import_nodes,
            SymbolCategory::Functions => self.function_nodes,
            SymbolCategory::Classes => self.class_nodes,
            SymbolCategory::Comments => self.comment_nodes,
        }
    }
}

/// Comment template for a language
#[derive(Debug, Clone, Copy)]
pub enum CommentStyle {
    /// Prefix-style comment, e.g. `// ...` or `# ...`
    Line(&'static str),
    /// Delimited comment, e.g. `/* ... */`
    Block {
        /// Opening delimiter
        open: &'static str,
        /// Closing delimiter
        close: &'static str,
    },
}

impl CommentStyle {
    /// Render `text` as a single comment line
    pub fn render(&self, text: &str) -> String {
        match self {
            CommentStyle::Line(prefix) => format!("{prefix} {text}"),
            CommentStyle::Block { open, close } => format!("{open} {text} {close}"),
        }
    }
}

/// Extraction categories tracked per language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolCategory {
    /// Import/include/use statements
    Imports,
    /// Function definitions
    Functions,
    /// Class-like definitions (classes, interfaces, modules)
    Classes,
    /// Comments
    Comments,
}

impl SymbolCategory {
    /// All registered categories, in a stable order
    pub const ALL: &'static [SymbolCategory] = &[
        SymbolCategory::Imports,
        SymbolCategory::Functions,
        SymbolCategory::Classes,
        SymbolCategory::Comments,
    ];
}

impl std::fmt::Display for SymbolCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymbolCategory::Imports => write!(f, "imports"),
            SymbolCategory::Functions => write!(f, "functions"),
            SymbolCategory::Classes => write!(f, "classes"),
            SymbolCategory::Comments => write!(f, "comments"),
        }
    }
}

/// Error returned when parsing an invalid SymbolCategory string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSymbolCategoryError {
    /// The invalid input string
    pub input: String,
}

impl std::fmt::Display for ParseSymbolCategoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown symbol category: '{}'. Valid options: imports, functions, classes, comments",
            self.input
        )
    }
}

impl std::error::Error for ParseSymbolCategoryError {}

impl std::str::FromStr for SymbolCategory {
    type Err = ParseSymbolCategoryError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "imports" => Ok(SymbolCategory::Imports),
            "functions" => Ok(SymbolCategory::Functions),
            "classes" => Ok(SymbolCategory::Classes),
            "comments" => Ok(SymbolCategory::Comments),
            _ => Err(ParseSymbolCategoryError {
                input: s.to_string(),
            }),
        }
    }
}

/// Supported programming languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageId {
    /// C (.c, .h files)
    C,
    /// C++ (.cpp, .hpp, .cc, .hh, ... files)
    Cpp,
    /// C# (.cs files)
    CSharp,
    /// Go (.go files)
    Go,
    /// Java (.java files)
    Java,
    /// JavaScript (.js, .jsx files)
    JavaScript,
    /// Kotlin (.kt, .kts files)
    Kotlin,
    /// PHP (.php and variants)
    Php,
    /// Python (.py files)
    Python,
    /// Ruby (.rb files)
    Ruby,
    /// Rust (.rs files)
    Rust,
    /// Scala (.scala files)
    Scala,
    /// TypeScript (.ts, .tsx files)
    TypeScript,
}

impl LanguageId {
    /// Get the language definition from the registry.
    ///
    /// `None` when the language's feature flag is disabled.
    pub fn def(&self) -> Option<&'static LanguageDef> {
        REGISTRY.get(*self)
    }

    /// Resolve a language from a file name by its extension.
    ///
    /// Unknown or missing extensions resolve to `None`, never an error.
    pub fn from_file_name(file_name: impl AsRef<Path>) -> Option<Self> {
        let ext = file_name.as_ref().extension()?.to_str()?;
        REGISTRY.from_extension(ext).map(|def| def.id)
    }

    /// Human-readable name, e.g. "C++" (falls back to the identifier)
    pub fn human_name(&self) -> &'static str {
        self.def().map_or("unknown", |def| def.human_name)
    }
}

impl std::fmt::Display for LanguageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LanguageId::C => write!(f, "c"),
            LanguageId::Cpp => write!(f, "cpp"),
            LanguageId::CSharp => write!(f, "csharp"),
            LanguageId::Go => write!(f, "go"),
            LanguageId::Java => write!(f, "java"),
            LanguageId::JavaScript => write!(f, "javascript"),
            LanguageId::Kotlin => write!(f, "kotlin"),
            LanguageId::Php => write!(f, "php"),
            LanguageId::Python => write!(f, "python"),
            LanguageId::Ruby => write!(f, "ruby"),
            LanguageId::Rust => write!(f, "rust"),
            LanguageId::Scala => write!(f, "scala"),
            LanguageId::TypeScript => write!(f, "typescript"),
        }
    }
}

/// Error returned when parsing an invalid LanguageId string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLanguageError {
    /// The invalid input string
    pub input: String,
}

impl std::fmt::Display for ParseLanguageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown language: '{}'", self.input)
    }
}

impl std::error::Error for ParseLanguageError {}

impl std::str::FromStr for LanguageId {
    type Err = ParseLanguageError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "c" => Ok(LanguageId::C),
            "cpp" | "c++" => Ok(LanguageId::Cpp),
            "csharp" | "c#" => Ok(LanguageId::CSharp),
            "go" => Ok(LanguageId::Go),
            "java" => Ok(LanguageId::Java),
            "javascript" | "js" => Ok(LanguageId::JavaScript),
            "kotlin" => Ok(LanguageId::Kotlin),
            "php" => Ok(LanguageId::Php),
            "python" => Ok(LanguageId::Python),
            "ruby" => Ok(LanguageId::Ruby),
            "rust" => Ok(LanguageId::Rust),
            "scala" => Ok(LanguageId::Scala),
            "typescript" | "ts" => Ok(LanguageId::TypeScript),
            _ => Err(ParseLanguageError {
                input: s.to_string(),
            }),
        }
    }
}

/// Global language registry
pub static REGISTRY: LazyLock<LanguageRegistry> = LazyLock::new(LanguageRegistry::new);

/// Registry of all supported languages
pub struct LanguageRegistry {
    /// Languages indexed by id
    by_id: HashMap<LanguageId, &'static LanguageDef>,
    /// Languages indexed by extension
    by_extension: HashMap<&'static str, &'static LanguageDef>,
}

impl LanguageRegistry {
    /// Create a new registry with all enabled languages
    fn new() -> Self {
        let mut reg = Self {
            by_id: HashMap::new(),
            by_extension: HashMap::new(),
        };

        // Register all enabled languages based on feature flags
        #[cfg(feature = "lang-c")]
        reg.register(c::definition());

        #[cfg(feature = "lang-cpp")]
        reg.register(cpp::definition());

        #[cfg(feature = "lang-csharp")]
        reg.register(csharp::definition());

        #[cfg(feature = "lang-go")]
        reg.register(go::definition());

        #[cfg(feature = "lang-java")]
        reg.register(java::definition());

        #[cfg(feature = "lang-javascript")]
        reg.register(javascript::definition());

        #[cfg(feature = "lang-kotlin")]
        reg.register(kotlin::definition());

        #[cfg(feature = "lang-php")]
        reg.register(php::definition());

        #[cfg(feature = "lang-python")]
        reg.register(python::definition());

        #[cfg(feature = "lang-ruby")]
        reg.register(ruby::definition());

        #[cfg(feature = "lang-rust")]
        reg.register(rust::definition());

        #[cfg(feature = "lang-scala")]
        reg.register(scala::definition());

        #[cfg(feature = "lang-typescript")]
        reg.register(typescript::definition());

        reg
    }

    fn register(&mut self, def: &'static LanguageDef) {
        self.by_id.insert(def.id, def);
        for ext in def.extensions {
            self.by_extension.insert(*ext, def);
        }
    }

    /// Get a language definition by id
    pub fn get(&self, id: LanguageId) -> Option<&'static LanguageDef> {
        self.by_id.get(&id).copied()
    }

    /// Get a language definition by file extension
    pub fn from_extension(&self, ext: &str) -> Option<&'static LanguageDef> {
        self.by_extension.get(ext).copied()
    }

    /// Iterate over all registered languages
    pub fn all(&self) -> impl Iterator<Item = &'static LanguageDef> + '_ {
        self.by_id.values().copied()
    }

    /// Get all supported extensions
    pub fn supported_extensions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.by_extension.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(feature = "lang-python")]
    fn test_registry_by_id() {
        let python = REGISTRY.get(LanguageId::Python);
        assert!(python.is_some());
        assert_eq!(python.unwrap().name, "python");
        assert_eq!(python.unwrap().extensions, &["py"]);
    }

    #[test]
    fn test_resolver_every_registered_extension() {
        // For every supported language and every extension registered to it,
        // resolution maps back to that language.
        for def in REGISTRY.all() {
            for ext in def.extensions {
                let file_name = format!("x.{ext}");
                assert_eq!(
                    LanguageId::from_file_name(&file_name),
                    Some(def.id),
                    "extension {ext} should resolve to {}",
                    def.id
                );
            }
        }
    }

    #[test]
    fn test_resolver_unknown_extension() {
        assert_eq!(LanguageId::from_file_name("a.xyz"), None);
        assert_eq!(LanguageId::from_file_name("no_extension"), None);
        assert_eq!(LanguageId::from_file_name(""), None);
    }

    #[test]
    #[cfg(all(feature = "lang-c", feature = "lang-cpp"))]
    fn test_resolver_many_to_one() {
        assert_eq!(LanguageId::from_file_name("a.cpp"), Some(LanguageId::Cpp));
        assert_eq!(LanguageId::from_file_name("a.hpp"), Some(LanguageId::Cpp));
        assert_eq!(LanguageId::from_file_name("a.cc"), Some(LanguageId::Cpp));
        assert_eq!(LanguageId::from_file_name("a.hh"), Some(LanguageId::Cpp));
        assert_eq!(LanguageId::from_file_name("a.c"), Some(LanguageId::C));
        assert_eq!(LanguageId::from_file_name("a.h"), Some(LanguageId::C));
    }

    #[test]
    #[cfg(feature = "lang-rust")]
    fn test_language_grammar() {
        let rust = REGISTRY.get(LanguageId::Rust).unwrap();
        let grammar = (rust.grammar)();
        assert!(grammar.abi_version() > 0);
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("python".parse::<LanguageId>().unwrap(), LanguageId::Python);
        assert_eq!("PYTHON".parse::<LanguageId>().unwrap(), LanguageId::Python);
        assert_eq!("c++".parse::<LanguageId>().unwrap(), LanguageId::Cpp);
        assert_eq!("ts".parse::<LanguageId>().unwrap(), LanguageId::TypeScript);
        assert!("invalid".parse::<LanguageId>().is_err());
    }

    #[test]
    fn test_language_display_roundtrip() {
        let langs = [
            LanguageId::C,
            LanguageId::Cpp,
            LanguageId::CSharp,
            LanguageId::Go,
            LanguageId::Java,
            LanguageId::JavaScript,
            LanguageId::Kotlin,
            LanguageId::Php,
            LanguageId::Python,
            LanguageId::Ruby,
            LanguageId::Rust,
            LanguageId::Scala,
            LanguageId::TypeScript,
        ];
        for lang in langs {
            let parsed: LanguageId = lang.to_string().parse().unwrap();
            assert_eq!(lang, parsed);
        }
    }

    #[test]
    fn test_symbol_category_from_str() {
        assert_eq!(
            "imports".parse::<SymbolCategory>().unwrap(),
            SymbolCategory::Imports
        );
        assert_eq!(
            "Functions".parse::<SymbolCategory>().unwrap(),
            SymbolCategory::Functions
        );
        assert!("other".parse::<SymbolCategory>().is_err());
    }

    #[test]
    fn test_comment_style_render() {
        assert_eq!(CommentStyle::Line("//").render("hello"), "// hello");
        assert_eq!(CommentStyle::Line("#").render("hello"), "# hello");
        assert_eq!(
            CommentStyle::Block {
                open: "/*",
                close: "*/"
            }
            .render("hello"),
            "/* hello */"
        );
    }

    #[test]
    #[cfg(feature = "lang-java")]
    fn test_category_without_tags_is_empty() {
        // Java has no standalone-function tag; the category must be empty,
        // not an error.
        let java = REGISTRY.get(LanguageId::Java).unwrap();
        assert!(java.category_nodes(SymbolCategory::Functions).is_empty());
        assert!(!java.category_nodes(SymbolCategory::Imports).is_empty());
    }
}
