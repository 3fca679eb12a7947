use dioxus::prelude::*;
use once_cell::sync::OnceCell;
#[cfg(debug_assertions)]
use tracing::debug;
use tracing::warn;

use crate::i18n::{self, ActiveLocale};

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
///
/// Each closure receives the localized label and returns a link that already
/// contains it:
/// ```ignore
/// use ui::components::app_navbar::{register_nav, NavBuilder};
/// fn install_nav() {
///     register_nav(NavBuilder {
///         ignis: |label| rsx!( Link { class: "navbar__link", to: Route::Ignis {}, "{label}" } ),
///     });
/// }
/// ```
///
/// Without a builder the navbar renders any `children` it is given.
pub struct NavBuilder {
    pub ignis: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Host chrome: brand, localized navigation and the language switcher.
///
/// Picking a language switches the shared [`i18n::Localizer`] and then
/// writes the new code into [`ActiveLocale`], which re-renders every
/// subscribed view.
#[component]
pub fn AppNavbar(children: Element) -> Element {
    let localizer = i18n::use_localizer();
    let langs = use_signal(i18n::available_languages);
    let lang_list = langs();
    let show_switcher = lang_list.len() > 1;
    let active: Option<ActiveLocale> = try_use_context::<ActiveLocale>();
    let current = i18n::use_locale_marker();

    #[cfg(debug_assertions)]
    debug!(target: "i18n", lang = %current, "AppNavbar render");

    let on_change = {
        let localizer = localizer.clone();
        move |evt: FormEvent| {
            let val = evt.value();
            match localizer.select(&val) {
                Ok(lang) => {
                    if let Some(ActiveLocale(mut code)) = active {
                        code.set(lang.to_string());
                    }
                }
                Err(err) => warn!(target: "i18n", %err, "language switch rejected"),
            }
        }
    };

    let internal_nav = NAV_BUILDER
        .get()
        .map(|b| (b.ignis)(&localizer.resolve("nav-ignis")));

    rsx! {
        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "Qiskit" }
                    span { class: "navbar__brand-subtitle", {localizer.resolve("shell-tagline")} }
                }

                if let Some(links) = internal_nav {
                    nav { class: "navbar__links", {links} }
                } else {
                    nav { class: "navbar__links", {children} }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label { class: "visually-hidden", r#for: "locale-select",
                            {localizer.resolve("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current}",
                            oninput: on_change,
                            for code in lang_list.iter() {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
