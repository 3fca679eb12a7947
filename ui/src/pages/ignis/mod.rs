//! The Qiskit Ignis informational page.
//!
//! Everything on the page is static apart from the localized text and two
//! click-tracking hooks: following the GitHub link and copying the code
//! sample.

pub mod content;

use dioxus::prelude::*;
#[cfg(debug_assertions)]
use tracing::debug;

use crate::components::{CodeSample, GithubIcon, StackList};
use crate::i18n::{use_locale_marker, use_localizer, Localizer};
use crate::styles::{compose, ignis_page_styles};
use crate::tracking::{use_tracking, Tracking};

use content::{
    CODE_SAMPLE, CODE_SAMPLE_LANGUAGE, COPY_EVENT, GITHUB_EVENT, IGNIS_LOGO, REPOSITORY_URL, STACK,
};

/// Name the page is registered under with its host.
pub const TAG_NAME: &str = "page-ignis";

/// Localized strings used by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnisKey {
    AltLogo,
    HeaderTitle,
    HeaderSubtitle,
    AboutTitle,
    AboutDescription,
    StackTitle,
    ExampleTitle,
}

impl IgnisKey {
    pub const ALL: [IgnisKey; 7] = [
        IgnisKey::AltLogo,
        IgnisKey::HeaderTitle,
        IgnisKey::HeaderSubtitle,
        IgnisKey::AboutTitle,
        IgnisKey::AboutDescription,
        IgnisKey::StackTitle,
        IgnisKey::ExampleTitle,
    ];

    /// Fluent message id.
    pub fn id(self) -> &'static str {
        match self {
            IgnisKey::AltLogo => "ignis-alt-logo",
            IgnisKey::HeaderTitle => "ignis-header-title",
            IgnisKey::HeaderSubtitle => "ignis-header-subtitle",
            IgnisKey::AboutTitle => "ignis-about-title",
            IgnisKey::AboutDescription => "ignis-about-description",
            IgnisKey::StackTitle => "ignis-stack-title",
            IgnisKey::ExampleTitle => "ignis-example-title",
        }
    }
}

/// The page's text in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnisStrings {
    pub alt_logo: String,
    pub header_title: String,
    pub header_subtitle: String,
    pub about_title: String,
    pub about_description: String,
    pub stack_title: String,
    pub example_title: String,
}

impl IgnisStrings {
    pub fn resolve(localizer: &Localizer) -> Self {
        let t = |key: IgnisKey| localizer.resolve(key.id());
        Self {
            alt_logo: t(IgnisKey::AltLogo),
            header_title: t(IgnisKey::HeaderTitle),
            header_subtitle: t(IgnisKey::HeaderSubtitle),
            about_title: t(IgnisKey::AboutTitle),
            about_description: t(IgnisKey::AboutDescription),
            stack_title: t(IgnisKey::StackTitle),
            example_title: t(IgnisKey::ExampleTitle),
        }
    }
}

pub fn track_github(tracking: &Tracking) {
    tracking.emit(&GITHUB_EVENT);
}

pub fn track_copy(tracking: &Tracking) {
    tracking.emit(&COPY_EVENT);
}

#[component]
pub fn PageIgnis() -> Element {
    let localizer = use_localizer();
    let tracking = use_tracking();
    let _lang = use_locale_marker();
    let styles = use_hook(|| compose(ignis_page_styles()));

    #[cfg(debug_assertions)]
    debug!(target: "i18n", lang = %_lang, "PageIgnis render");

    let strings = IgnisStrings::resolve(&localizer);

    // The link keeps its default action; tracking runs alongside navigation.
    let on_github = {
        let tracking = tracking.clone();
        move |_: MouseEvent| track_github(&tracking)
    };
    let on_copy = move |_: ()| track_copy(&tracking);

    rsx! {
        document::Style { "{styles}" }

        div { class: "page page-ignis", "data-page": TAG_NAME,
            header {
                img { src: "{IGNIS_LOGO}", alt: "{strings.alt_logo}" }
                div {
                    h1 { "{strings.header_title}" }
                    h2 { "{strings.header_subtitle}" }
                    div { class: "badges",
                        a {
                            href: REPOSITORY_URL,
                            target: "_blank",
                            rel: "noopener",
                            onclick: on_github,
                            span { class: "button button--secondary button--small",
                                GithubIcon {}
                                "GitHub"
                            }
                        }
                    }
                }
            }

            section { class: "colored",
                div { class: "row limited-width",
                    div { class: "description",
                        h3 { "{strings.about_title}" }
                        p { "{strings.about_description}" }
                        h3 { "{strings.stack_title}" }
                        StackList { entries: &STACK[..] }
                    }
                    div { class: "illustration",
                        h3 { "{strings.example_title}" }
                        CodeSample {
                            code: CODE_SAMPLE,
                            language: CODE_SAMPLE_LANGUAGE,
                            on_copy: on_copy,
                        }
                    }
                }
            }
        }
    }
}
