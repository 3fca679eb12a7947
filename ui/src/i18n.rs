//! Internationalization (i18n) support for `qiskit-ignis-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` bundles through `i18n-embed`'s `fluent-system` feature
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/qiskit-ignis-ui.ftl   (fallback/reference)
//!   es-ES/qiskit-ignis-ui.ftl   (additional locale)
//!   ja-JP/qiskit-ignis-ui.ftl   (additional locale)
//! ```
//!
//! There is no process-wide loader. A host creates one [`Localizer`] at app
//! start and installs it with [`provide_localization`]; components read it
//! back with [`use_localizer`]:
//! ```ignore
//! #[component]
//! fn App() -> Element {
//!     ui::i18n::provide_localization();
//!     rsx! { Router::<Route> {} }
//! }
//! ```
//!
//! Language switches are announced through the [`ActiveLocale`] signal. Any
//! component that reads it during render is re-run on the next update cycle.
//!
//! To add a new locale:
//! 1. Copy `en-US/qiskit-ignis-ui.ftl` to `i18n/<lang-id>/qiskit-ignis-ui.ftl`.
//! 2. Translate each message value (keep IDs identical).
//! 3. Run `tests/i18n_completeness.rs`; new folders are picked up automatically.
//!
//! Platform notes:
//! - Desktop: uses `DesktopLanguageRequester` (OS locale list).
//! - Web/WASM: uses `WebLanguageRequester` (`navigator.languages`).
//! - Assets are always embedded on WASM (`debug-embed` is enabled for that target).
use std::fmt;
use std::sync::Arc;

use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::{I18nEmbedError, LanguageLoader};
use rust_embed::Embed;
use thiserror::Error;
use tracing::warn;
use unic_langid::LanguageIdentifier;

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "qiskit-ignis-ui";

/// Language used when nothing requested by the platform is available.
pub const FALLBACK_LANGUAGE: &str = "en-US";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("`{0}` is not a valid language tag")]
    InvalidTag(String),
    #[error("no bundle is embedded for `{0}`")]
    Unsupported(String),
    #[error(transparent)]
    Embed(#[from] I18nEmbedError),
}

/// Handle to a loaded set of Fluent bundles.
///
/// Cheap to clone; clones share the same loader, so a language switch made
/// through one handle is visible through all of them.
#[derive(Clone)]
pub struct Localizer {
    loader: Arc<FluentLanguageLoader>,
}

impl Localizer {
    /// Build a localizer for the languages the platform asks for.
    ///
    /// Never fails: when selection goes wrong the fallback bundle is loaded
    /// and the error is logged.
    pub fn new() -> Self {
        let localizer = Self::empty();
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*localizer.loader, &Localizations, &requested) {
            warn!(target: "i18n", %err, "failed selecting requested languages; using fallback");
            localizer.load_fallback();
        }
        localizer
    }

    /// Build a localizer pinned to `tag`.
    pub fn with_language(tag: &str) -> Result<Self, LocaleError> {
        let localizer = Self::empty();
        localizer.select(tag)?;
        Ok(localizer)
    }

    fn empty() -> Self {
        let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
            .parse()
            .unwrap_or_else(|_| LanguageIdentifier::default());
        Self {
            loader: Arc::new(FluentLanguageLoader::new(DOMAIN, fallback)),
        }
    }

    fn load_fallback(&self) {
        let fallback = self.loader.fallback_language().clone();
        if let Err(err) = i18n_embed::select(&*self.loader, &Localizations, &[fallback]) {
            warn!(target: "i18n", %err, "fallback bundle failed to load");
        }
    }

    /// Resolve a message id in the active language.
    ///
    /// Unknown ids resolve to the id itself so rendering always proceeds.
    pub fn resolve(&self, key: &str) -> String {
        if self.loader.has(key) {
            self.loader.get(key)
        } else {
            key.to_string()
        }
    }

    /// Switch to `tag`. On error the current language is left untouched.
    pub fn select(&self, tag: &str) -> Result<LanguageIdentifier, LocaleError> {
        let lang: LanguageIdentifier = tag
            .parse()
            .map_err(|_| LocaleError::InvalidTag(tag.to_string()))?;
        let canonical = lang.to_string();
        if !available_languages().iter().any(|l| *l == canonical) {
            return Err(LocaleError::Unsupported(canonical));
        }
        let loaded = i18n_embed::select(&*self.loader, &Localizations, &[lang.clone()])?;
        Ok(loaded.into_iter().next().unwrap_or(lang))
    }

    pub fn current_language(&self) -> LanguageIdentifier {
        self.loader.current_language()
    }
}

impl Default for Localizer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Localizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Localizer")
            .field("domain", &DOMAIN)
            .field("current", &self.current_language().to_string())
            .finish()
    }
}

/// Reactive marker for the active language code.
///
/// Reading it inside a component subscribes that component to language
/// changes; writing it is how the language switcher notifies the tree.
#[derive(Clone, Copy, PartialEq)]
pub struct ActiveLocale(pub Signal<String>);

/// Install a fresh [`Localizer`] and its [`ActiveLocale`] signal into the
/// current scope. Call once, at the top of the host's root component.
pub fn provide_localization() -> Localizer {
    let localizer = use_context_provider(Localizer::new);
    let initial = localizer.clone();
    let active = use_signal(move || initial.current_language().to_string());
    use_context_provider(|| ActiveLocale(active));
    localizer
}

/// Fetch the [`Localizer`] provided by an ancestor.
///
/// Components stay mountable without a provider: in that case a default
/// localizer is created once for this component and reused across renders.
pub fn use_localizer() -> Localizer {
    use_hook(|| try_consume_context::<Localizer>().unwrap_or_default())
}

/// Subscribe the calling component to language changes and return the
/// active code (empty when no host signal is mounted).
pub fn use_locale_marker() -> String {
    try_use_context::<ActiveLocale>()
        .map(|active| active.0.read().clone())
        .unwrap_or_default()
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
