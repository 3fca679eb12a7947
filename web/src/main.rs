use dioxus::prelude::*;
use tracing::Level;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::pages::PageIgnis;
use ui::styles::THEME;
use ui::tracking::Tracking;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/ignis")]
    Ignis {},
}

fn nav_ignis(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Ignis {},
        "{label}"
    })
}

fn init_logging() {
    // Fails only if a subscriber is already installed.
    let _ = dioxus::logger::init(Level::INFO);
}

fn main() {
    init_logging();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::provide_localization();
    use_context_provider(Tracking::platform_default);
    register_nav(NavBuilder { ignis: nav_ignis });

    rsx! {
        document::Title { "Qiskit Ignis" }
        document::Style { "{THEME.css}" }

        Router::<Route> {}
    }
}

/// A web-specific layout around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! { PageIgnis {} }
}

#[component]
fn Ignis() -> Element {
    rsx! { PageIgnis {} }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_logging_init_is_harmless() {
        init_logging();
        init_logging();
        tracing::info!(target: "web", "logging still usable");
    }
}
