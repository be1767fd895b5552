use std::collections::{BTreeSet, HashSet};

use fluent::FluentResource;

/// Bundled locales. Register new ones here.
const EN_US: &str = include_str!("../i18n/en-US/yearwrap-ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/yearwrap-ui.ftl");
const FR_FR: &str = include_str!("../i18n/fr-FR/yearwrap-ui.ftl");

const TRANSLATIONS: &[(&str, &str)] = &[("es-ES", ES_ES), ("fr-FR", FR_FR)];

/// Every translation provides exactly the keys of the fallback `en-US`
/// bundle: nothing missing, nothing stale.
#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback_keys = extract_keys(EN_US);
    assert!(!fallback_keys.is_empty(), "Fallback (en-US) contains no keys.");
    assert_no_dup_keys(EN_US, "en-US");

    let mut failures = Vec::new();

    for (locale, src) in TRANSLATIONS {
        assert_no_dup_keys(src, locale);
        let keys = extract_keys(src);

        let missing: BTreeSet<_> = fallback_keys.difference(&keys).cloned().collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }

        let stale: BTreeSet<_> = keys.difference(&fallback_keys).cloned().collect();
        if !stale.is_empty() {
            failures.push(format!(
                "Locale {locale} defines {} key(s) unknown to en-US:\n  {}",
                stale.len(),
                stale.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn all_locales_parse_as_fluent() {
    for (locale, src) in [("en-US", EN_US)].iter().chain(TRANSLATIONS) {
        if let Err((_, errors)) = FluentResource::try_new(src.to_string()) {
            panic!("{locale} has Fluent syntax errors: {errors:?}");
        }
    }
}

/// Message keys of a Fluent file: any unindented `key =` line that is not a
/// comment, term, attribute or variant.
fn extract_keys(src: &str) -> HashSet<String> {
    src.lines()
        .filter_map(message_key)
        .map(str::to_string)
        .collect()
}

fn message_key(line: &str) -> Option<&str> {
    if line.starts_with(char::is_whitespace) {
        return None;
    }
    let line = line.trim();
    if line.is_empty() || line.starts_with(['#', '.', '-', '[', '*', '}']) {
        return None;
    }
    let (left, _) = line.split_once('=')?;
    let key = left.trim();
    (!key.is_empty() && !key.contains(char::is_whitespace)).then_some(key)
}

fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let dups: BTreeSet<_> = src
        .lines()
        .filter_map(message_key)
        .filter(|key| !seen.insert(*key))
        .collect();

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
