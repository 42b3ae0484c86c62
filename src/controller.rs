//! Localization controller.
//!
//! Owns the active language and the per-language table cache for one page
//! session, and drives a [`DomSurface`] from tables fetched through a
//! [`TranslationSource`].
//!
//! All operations take `&mut self`: there is exactly one writer, and the only
//! suspension point is the source fetch inside [`ensure_loaded`]. A language
//! switch either applies completely or leaves the page untouched.
//!
//! [`ensure_loaded`]: LocalizationController::ensure_loaded

use crate::i18n::{Language, LocalizationMetrics, TranslationTable};
use crate::source::TranslationSource;
use crate::surface::DomSurface;
use std::collections::HashMap;
use tracing::{debug, error, info, warn};

pub struct LocalizationController<S, D> {
    source: S,
    surface: D,
    /// Loaded tables. Entries are inserted once and never replaced or evicted.
    cache: HashMap<Language, TranslationTable>,
    /// Active language; only ever set to a language present in `cache`.
    current: Option<Language>,
    metrics: LocalizationMetrics,
}

impl<S, D> LocalizationController<S, D>
where
    S: TranslationSource,
    D: DomSurface,
{
    pub fn new(source: S, surface: D) -> Self {
        Self {
            source,
            surface,
            cache: HashMap::new(),
            current: None,
            metrics: LocalizationMetrics::new(),
        }
    }

    /// Choose the initial language from an environment locale hint.
    pub fn detect(hint: &str) -> Language {
        Language::detect(hint)
    }

    /// Startup transition: detect a language from `hint` and switch to it.
    pub async fn start(&mut self, hint: &str) -> bool {
        let language = Self::detect(hint);
        info!(hint = %hint, language = %language, "Detected preferred language");
        self.set_language(language).await
    }

    /// Make sure `language` has a table in the cache.
    ///
    /// A cached language returns `true` without touching the source. A failed
    /// fetch is logged and reported as `false`; the cache is left unchanged.
    pub async fn ensure_loaded(&mut self, language: Language) -> bool {
        if self.cache.contains_key(&language) {
            self.metrics.record_cache_hit();
            debug!(language = %language, "Translations already loaded");
            return true;
        }

        self.metrics.record_cache_miss();
        self.metrics.record_fetch();

        match self.source.fetch_table(language).await {
            Ok(table) => {
                info!(language = %language, entries = table.len(), "Loaded translations");
                self.cache.entry(language).or_insert(table);
                true
            }
            Err(e) => {
                self.metrics.record_fetch_failure();
                error!(language = %language, error = %e, "Failed to load translations");
                false
            }
        }
    }

    /// Resolve a dotted key path against a table.
    pub fn resolve_key<'a>(table: &'a TranslationTable, key_path: &str) -> Option<&'a str> {
        table.resolve(key_path)
    }

    /// Rewrite every keyed element from the active language's table.
    ///
    /// Keys that do not resolve are logged and their elements keep their
    /// existing content. Does nothing before a language is active.
    pub fn apply_to_surface(&mut self) {
        let Some(language) = self.current else {
            debug!("No active language, skipping render");
            return;
        };
        let Some(table) = self.cache.get(&language) else {
            return;
        };

        for element in self.surface.translatable_elements() {
            match Self::resolve_key(table, &element.key) {
                Some(translation) => {
                    self.surface.set_content(element.id, translation);
                    self.metrics.record_applied();
                }
                None => {
                    self.metrics.record_missing_key();
                    warn!(language = %language, key = %element.key, "Translation missing for key");
                }
            }
        }
    }

    /// Switch the page to `language`.
    ///
    /// Only after the table is available are the active language, the
    /// document language attribute, the page content and the toggle label
    /// updated together. Returns whether the switch happened.
    pub async fn set_language(&mut self, language: Language) -> bool {
        if !self.ensure_loaded(language).await {
            warn!(
                requested = %language,
                current = ?self.current.map(|l| l.code()),
                "Language switch aborted"
            );
            return false;
        }

        self.current = Some(language);
        self.surface.set_document_language(language.code());
        self.apply_to_surface();
        self.surface.set_toggle_label(language.alternate().toggle_label());

        info!(language = %language, "Language switched");
        true
    }

    /// Switch to the other supported language.
    ///
    /// Before any language is active the fallback counts as current.
    pub async fn toggle(&mut self) -> bool {
        let target = self.current.unwrap_or_else(Language::fallback).alternate();
        self.set_language(target).await
    }

    pub fn current_language(&self) -> Option<Language> {
        self.current
    }

    pub fn is_loaded(&self, language: Language) -> bool {
        self.cache.contains_key(&language)
    }

    pub fn table(&self, language: Language) -> Option<&TranslationTable> {
        self.cache.get(&language)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Mutable access to the page, e.g. to add elements before re-rendering
    /// with [`apply_to_surface`](Self::apply_to_surface).
    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }

    pub fn metrics(&self) -> &LocalizationMetrics {
        &self.metrics
    }

    pub fn into_surface(self) -> D {
        self.surface
    }
}
