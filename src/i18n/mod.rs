//! Language model for page localization.
//!
//! # Architecture
//!
//! - `registry`: the fixed set of supported languages and the fallback
//! - `language`: validated `Language` codes, locale-hint detection, toggling
//! - `table`: nested translation tables and dotted key-path resolution
//! - `validator`: coverage checks between a language and the fallback table
//! - `metrics`: per-controller load and render counters
//!
//! # Example
//!
//! ```rust
//! use page_localizer::i18n::{Language, TranslationTable};
//!
//! let language = Language::detect("de-AT");
//! assert_eq!(language.code(), "de");
//!
//! let table = TranslationTable::from_json_str(r#"{"greeting": {"hello": "Hallo"}}"#).unwrap();
//! assert_eq!(table.resolve("greeting.hello"), Some("Hallo"));
//! ```

mod language;
mod metrics;
mod registry;
mod table;
mod validator;

pub use language::{primary_subtag, Language};
pub use metrics::{LocalizationMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use table::{TableError, TranslationTable};
pub use validator::{TableValidator, ValidationReport};
