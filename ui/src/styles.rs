//! Style fragments and their composition into a page's style scope.
//!
//! Fragments are embedded at compile time so desktop release builds never
//! depend on an external stylesheet being shipped next to the binary.

/// One named block of CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleFragment {
    pub name: &'static str,
    pub css: &'static str,
}

macro_rules! fragment {
    ($name:literal, $path:literal) => {
        StyleFragment {
            name: $name,
            css: include_str!(concat!(env!("CARGO_MANIFEST_DIR"), $path)),
        }
    };
}

pub const SHARED: StyleFragment = fragment!("shared", "/assets/styling/shared.css");
pub const HEADER: StyleFragment = fragment!("header", "/assets/styling/header.css");
pub const SECTION: StyleFragment = fragment!("section", "/assets/styling/section.css");
pub const SECTION_ELEMENT: StyleFragment =
    fragment!("section-element", "/assets/styling/section-element.css");
pub const STACK_LIST: StyleFragment = fragment!("stack-list", "/assets/styling/stack-list.css");

/// Global theme used by the hosts (body, navbar, utilities).
pub const THEME: StyleFragment = fragment!("theme", "/assets/theme/main.css");

pub const IGNIS_OVERRIDES: StyleFragment = fragment!("ignis", "/assets/pages/ignis.css");

/// Shared fragments first, page-local overrides last so they win ties.
static IGNIS_PAGE_STYLES: [StyleFragment; 6] = [
    SHARED,
    HEADER,
    SECTION,
    SECTION_ELEMENT,
    STACK_LIST,
    IGNIS_OVERRIDES,
];

pub fn ignis_page_styles() -> &'static [StyleFragment; 6] {
    &IGNIS_PAGE_STYLES
}

/// Concatenate `fragments` in order, each preceded by a banner comment.
pub fn compose(fragments: &[StyleFragment]) -> String {
    let mut out = String::with_capacity(fragments.iter().map(|f| f.css.len() + 32).sum());
    for fragment in fragments {
        out.push_str("/* --- ");
        out.push_str(fragment.name);
        out.push_str(" --- */\n");
        out.push_str(fragment.css.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignis_scope_order_is_shared_then_local() {
        let names: Vec<_> = ignis_page_styles().iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            ["shared", "header", "section", "section-element", "stack-list", "ignis"]
        );
    }

    #[test]
    fn compose_keeps_fragment_order() {
        let css = compose(ignis_page_styles());
        let stack = css.find("--- stack-list ---").unwrap();
        let local = css.find("--- ignis ---").unwrap();
        assert!(stack < local);
        assert!(css.ends_with('\n'));
    }

    #[test]
    fn no_fragment_is_empty() {
        for fragment in ignis_page_styles().iter().chain([&THEME]) {
            assert!(!fragment.css.trim().is_empty(), "{} is empty", fragment.name);
        }
    }

    #[test]
    fn overrides_mark_last_stack_entry_round() {
        assert!(IGNIS_OVERRIDES.css.contains(".stack-list .element.dot::before"));
        assert!(IGNIS_OVERRIDES.css.contains("border-radius: 50%"));
    }
}
