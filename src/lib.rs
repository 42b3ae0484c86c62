//! Page localization: detect a preferred language, lazily load translation
//! tables and rewrite keyed page elements in place.
//!
//! - [`controller`]: the localization controller (cache, active language, switching)
//! - [`source`]: translation table sources (HTTP, directory)
//! - [`surface`]: page surfaces the controller rewrites
//! - [`i18n`]: languages, tables, validation and metrics

pub mod config;
pub mod controller;
pub mod i18n;
pub mod retry;
pub mod source;
pub mod surface;

pub use controller::LocalizationController;
pub use i18n::{Language, TranslationTable};
pub use source::{DirectoryTranslationSource, HttpTranslationSource, LoadError, TranslationSource};
pub use surface::{DomSurface, ElementId, MemorySurface, TranslatableElement};
