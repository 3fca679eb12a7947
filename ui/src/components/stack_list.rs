use dioxus::prelude::*;

use crate::pages::ignis::content::{StackEntry, StackMarker};

/// Vertical list of stack stages, top to bottom.
#[component]
pub fn StackList(entries: &'static [StackEntry]) -> Element {
    rsx! {
        div { class: "stack-list",
            for entry in entries.iter() {
                div {
                    key: "{entry.title}",
                    class: match entry.marker {
                        StackMarker::Plain => "element",
                        StackMarker::Dot => "element dot",
                    },
                    div { class: "title", {entry.title} }
                    div { class: "subtitle", {entry.subtitle} }
                }
            }
        }
    }
}
