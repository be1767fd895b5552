//! Localization for `yearwrap-ui`.
//!
//! Fluent bundles are embedded at compile time (`rust-embed`) and selected
//! through `i18n-embed`; lookups go through the [`t!`](crate::t) macro, which
//! `i18n-embed-fl` checks against the fallback file at compile time.
//!
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/yearwrap-ui.ftl   (fallback/reference)
//!   es-ES/yearwrap-ui.ftl
//!   fr-FR/yearwrap-ui.ftl
//! ```
//!
//! Desktop builds ask the OS for preferred languages; the web build reads
//! `navigator.languages`. A new locale only needs a folder with a translated
//! copy of the fallback file; the completeness tests catch missing keys.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Translation lookup through the shared [`LOADER`]. Arguments are passed as
/// `name = value` pairs and must match the variables in the fallback message.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "yearwrap-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE.parse().unwrap_or_default();
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    if let Err(err) = loader.load_fallback_language(&Localizations) {
        warn!(%err, "fallback locale failed to load");
    }
    loader
});

const FALLBACK_LANGUAGE: &str = "en-US";

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(%err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        debug!(tag, "ignoring invalid language tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
