//! Preview binary - renders a page from translation tables and reports gaps
//!
//! Usage:
//!   cargo run -- [LOCALE]      # e.g. `cargo run -- de-AT`
//!
//! The page has one element per key of the fallback table, initially showing
//! the fallback text. The controller then starts from LOCALE (or the
//! configured locale hint) and the rendered page is printed.
//!
//! Optional environment variables:
//! - LOCALIZER_SOURCE_URL (fetch `<url>/<code>.json` over HTTP)
//! - LOCALIZER_TRANSLATIONS_DIR (defaults to translations/)
//! - LOCALIZER_FETCH_ATTEMPTS (defaults to 1)
//! - LOCALIZER_LOCALE, then LANG (locale hint)

use anyhow::{bail, Context, Result};
use page_localizer::config::Config;
use page_localizer::i18n::{Language, LanguageRegistry, TableValidator};
use page_localizer::{LocalizationController, MemorySurface};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("page_localizer=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let hint = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.locale_hint.clone());

    let mut controller =
        LocalizationController::new(config.translation_source(), MemorySurface::new().with_toggle(""));

    // Step 1: Lay out the page from the fallback table
    let fallback = Language::fallback();
    if !controller.ensure_loaded(fallback).await {
        bail!("Failed to load fallback translations ({})", fallback);
    }
    let reference = controller
        .table(fallback)
        .cloned()
        .context("Fallback table missing after load")?;

    for key in reference.leaf_keys() {
        let text = reference.resolve(&key).unwrap_or_default().to_string();
        controller.surface_mut().add_element(key, text);
    }
    info!("Page has {} translatable elements", controller.surface().len());

    // Step 2: Start from the locale hint
    if !controller.start(&hint).await {
        bail!("Failed to switch page to the detected language");
    }

    let surface = controller.surface();
    println!(
        "lang={} toggle={}",
        surface.document_language().unwrap_or("?"),
        surface.toggle_label().unwrap_or("-")
    );
    for (key, content) in surface.rendered() {
        println!("{:<40} {}", key, content);
    }

    // Step 3: Validate every other language against the fallback
    for language_config in LanguageRegistry::get().list_enabled() {
        let language = Language::from_code(language_config.code)?;
        if language == fallback {
            continue;
        }

        if !controller.ensure_loaded(language).await {
            println!("\n[{}] could not be loaded", language);
            continue;
        }

        let Some(table) = controller.table(language) else {
            continue;
        };
        let report = TableValidator::validate(&reference, table);
        println!(
            "\n[{}] {} errors, {} warnings",
            language,
            report.errors.len(),
            report.warnings.len()
        );
        for error in &report.errors {
            println!("  error: {}", error);
        }
        for warning in &report.warnings {
            println!("  warning: {}", warning);
        }
    }

    println!(
        "\n{}",
        serde_json::to_string_pretty(&controller.metrics().report())?
    );

    Ok(())
}
