//! Shared UI crate for the Qiskit Ignis page. Components, localization,
//! tracking and styles live here; the `web` and `desktop` crates only host.

pub mod core;
pub mod highlight;
pub mod i18n;
pub mod pages;
pub mod styles;
pub mod tracking;

pub mod components {
    // Localized host chrome (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod code_sample;
    pub use code_sample::{CodeSample, COPY_STATUS_RESET_MS};

    mod icons;
    pub use icons::GithubIcon;

    mod stack_list;
    pub use stack_list::StackList;
}
