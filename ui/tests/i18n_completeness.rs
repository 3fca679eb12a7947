//! Translation completeness.
//!
//! - Every locale folder ships `qiskit-ignis-ui.ftl` with every fallback key
//!   and no duplicate definitions.
//! - Every message id referenced from Rust sources (`resolve("...")` calls
//!   and the `IgnisKey` id table) exists in the fallback bundle.
//! - Every embedded locale resolves every page key at runtime.
//!
//! Adding a locale only needs the new folder; this test discovers it.
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use ui::i18n::{available_languages, Localizer, FALLBACK_LANGUAGE};
use ui::pages::ignis::IgnisKey;

const FTL_FILENAME: &str = "qiskit-ignis-ui.ftl";

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Message ids defined in a Fluent file, in definition order (duplicates kept).
fn message_ids(src: &str) -> Vec<String> {
    src.lines()
        .filter(|line| !line.starts_with([' ', '\t', '#', '.', '-']))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'))
        .map(str::to_string)
        .collect()
}

fn locale_bundles() -> BTreeMap<String, String> {
    let root = crate_root().join("i18n");
    let mut bundles = BTreeMap::new();
    for entry in fs::read_dir(&root).expect("i18n directory readable").flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let locale = path
            .file_name()
            .and_then(|s| s.to_str())
            .expect("utf-8 locale folder")
            .to_string();
        let file = path.join(FTL_FILENAME);
        let content = fs::read_to_string(&file)
            .unwrap_or_else(|err| panic!("{locale}: cannot read {file:?}: {err}"));
        bundles.insert(locale, content);
    }
    bundles
}

/// String literals following `needle` in every `.rs` file under `dir`.
fn literals_after(dir: &Path, needle: &str, found: &mut BTreeSet<String>) {
    for entry in fs::read_dir(dir).into_iter().flatten().flatten() {
        let path = entry.path();
        if path.is_dir() {
            literals_after(&path, needle, found);
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for (_, rest) in content.match_indices(needle).map(|(i, _)| content.split_at(i + needle.len())) {
            if let Some(end) = rest.find('"') {
                let literal = &rest[..end];
                if literal.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
                    found.insert(literal.to_string());
                }
            }
        }
    }
}

#[test]
fn every_locale_has_every_fallback_key_once() {
    let bundles = locale_bundles();
    let fallback = bundles
        .get(FALLBACK_LANGUAGE)
        .expect("fallback locale folder present");
    let fallback_keys: BTreeSet<_> = message_ids(fallback).into_iter().collect();
    assert!(!fallback_keys.is_empty(), "fallback bundle defines no messages");

    let mut failures = Vec::new();
    for (locale, src) in &bundles {
        let ids = message_ids(src);
        let mut defined: BTreeSet<String> = BTreeSet::new();
        let dups: Vec<_> = ids.iter().filter(|id| !defined.insert(id.to_string())).collect();
        if !dups.is_empty() {
            failures.push(format!("{locale}: duplicate ids {dups:?}"));
        }
        let missing: Vec<_> = fallback_keys.difference(&defined).cloned().collect();
        if !missing.is_empty() {
            failures.push(format!("{locale}: missing {}", missing.join(", ")));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation completeness check failed:\n  {}\n\nHint: copy the missing keys from {FALLBACK_LANGUAGE}, then translate.",
        failures.join("\n  ")
    );
}

#[test]
fn referenced_ids_exist_in_fallback() {
    let bundles = locale_bundles();
    let fallback: BTreeSet<_> = message_ids(&bundles[FALLBACK_LANGUAGE]).into_iter().collect();

    let mut referenced = BTreeSet::new();
    let src = crate_root().join("src");
    literals_after(&src, "resolve(\"", &mut referenced);
    for key in IgnisKey::ALL {
        referenced.insert(key.id().to_string());
    }

    let missing: Vec<_> = referenced.difference(&fallback).cloned().collect();
    assert!(missing.is_empty(), "ids referenced but not defined: {missing:?}");

    let unused: Vec<_> = fallback.difference(&referenced).cloned().collect();
    if !unused.is_empty() {
        eprintln!("[i18n] NOTE: fallback ids never referenced from src: {}", unused.join(", "));
    }
}

#[test]
fn embedded_languages_match_locale_folders() {
    let folders: Vec<_> = locale_bundles().into_keys().collect();
    assert_eq!(available_languages(), folders);
}

#[test]
fn every_language_resolves_every_page_key() {
    for lang in available_languages() {
        let localizer = Localizer::with_language(&lang).expect("embedded language loads");
        for key in IgnisKey::ALL {
            let text = localizer.resolve(key.id());
            assert_ne!(text, key.id(), "{lang}: {key:?} unresolved");
            assert!(!text.trim().is_empty(), "{lang}: {key:?} is blank");
        }
    }
}
