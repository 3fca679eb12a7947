use dioxus::prelude::*;
use tracing::warn;

use crate::core::clipboard::copy_text;
use crate::core::timing::sleep_ms;
use crate::highlight::{dedent, highlight};
use crate::i18n::{use_locale_marker, use_localizer};

/// How long the copy confirmation stays visible.
pub const COPY_STATUS_RESET_MS: u64 = 2_000;

#[derive(Clone, Copy, Debug, PartialEq)]
enum CopyStatus {
    Idle,
    Copied,
    Failed,
}

/// Read-only, highlighted code block with a copy button.
///
/// `on_copy` fires on every press of the copy button, whether or not the
/// clipboard write succeeds. The resulting status message clears after
/// [`COPY_STATUS_RESET_MS`]; a newer press restarts the countdown.
#[component]
pub fn CodeSample(code: &'static str, language: &'static str, on_copy: EventHandler) -> Element {
    let localizer = use_localizer();
    let _lang = use_locale_marker();
    let mut status = use_signal(|| CopyStatus::Idle);
    let mut generation = use_signal(|| 0u32);

    let source = dedent(code);
    let lines = highlight(&source, language);

    let payload = source.clone();
    let copy = move |_: MouseEvent| {
        on_copy.call(());
        match copy_text(&payload) {
            Ok(()) => status.set(CopyStatus::Copied),
            Err(err) => {
                warn!(target: "clipboard", %err, "code sample copy failed");
                status.set(CopyStatus::Failed);
            }
        }

        let issued = generation.peek().wrapping_add(1);
        generation.set(issued);
        spawn(async move {
            sleep_ms(COPY_STATUS_RESET_MS).await;
            let mut status_signal = status;
            if *generation.peek() == issued {
                status_signal.set(CopyStatus::Idle);
            }
        });
    };

    let status_text = match status() {
        CopyStatus::Idle => None,
        CopyStatus::Copied => Some(localizer.resolve("code-sample-copied")),
        CopyStatus::Failed => Some(localizer.resolve("code-sample-copy-failed")),
    };

    rsx! {
        div { class: "code-sample", "data-language": language,
            button {
                class: "button button--secondary button--small code-sample__copy",
                r#type: "button",
                onclick: copy,
                {localizer.resolve("code-sample-copy")}
            }
            if let Some(text) = status_text {
                span { class: "code-sample__status", role: "status", "{text}" }
            }
            pre {
                code { class: "language-{language}",
                    for (idx, (line, tokens)) in source.lines().zip(lines.iter()).enumerate() {
                        span { key: "{idx}", class: "code-sample__line",
                            for token in tokens.iter() {
                                span { class: token.kind.css_class(), {token.text(line)} }
                            }
                            "\n"
                        }
                    }
                }
            }
        }
    }
}
