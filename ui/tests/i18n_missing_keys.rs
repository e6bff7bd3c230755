use std::collections::BTreeSet;

/// Translation completeness test: every non-fallback locale must provide at
/// least the keys present in the fallback `en-US/casework-ui.ftl`.
///
/// The parser here is deliberately shallow. It treats `key =` lines as
/// message definitions, skips comments, attributes and continuation lines,
/// and ignores pattern bodies entirely.
///
/// Adding a locale means creating `ui/i18n/<locale>/casework-ui.ftl`, copying
/// the en-US keys, and registering the file below.
#[test]
fn all_locales_have_all_fallback_keys() {
    const EN_US: &str = include_str!("../i18n/en-US/casework-ui.ftl");
    const ES_ES: &str = include_str!("../i18n/es-ES/casework-ui.ftl");
    const FR_FR: &str = include_str!("../i18n/fr-FR/casework-ui.ftl");

    let (fallback_keys, fallback_dups) = extract_keys(EN_US);
    assert!(
        !fallback_keys.is_empty(),
        "fallback (en-US) contains no keys"
    );
    assert!(
        fallback_dups.is_empty(),
        "duplicate keys in en-US: {fallback_dups:?}"
    );

    let locales: &[(&str, &str)] = &[("es-ES", ES_ES), ("fr-FR", FR_FR)];

    let mut failures = Vec::new();
    for (locale, src) in locales {
        let (keys, dups) = extract_keys(src);
        if !dups.is_empty() {
            failures.push(format!("{locale} defines duplicate keys: {dups:?}"));
        }

        let missing: Vec<&String> = fallback_keys.iter().filter(|k| !keys.contains(*k)).collect();
        if !missing.is_empty() {
            failures.push(format!(
                "{locale} is missing {} key(s): {}",
                missing.len(),
                missing
                    .iter()
                    .map(|k| k.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "translation completeness check failed:\n{}",
        failures.join("\n")
    );
}

/// Collect message keys from a Fluent source, along with any keys defined
/// more than once.
fn extract_keys(src: &str) -> (BTreeSet<String>, BTreeSet<String>) {
    let mut keys = BTreeSet::new();
    let mut dups = BTreeSet::new();

    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        let Some(eq_pos) = line.find('=') else {
            continue;
        };
        let key = line[..eq_pos].trim();
        if key.is_empty()
            || key.contains(' ')
            || key.contains('\t')
            || key.starts_with('[')
            || key.starts_with('@')
        {
            continue;
        }
        if !keys.insert(key.to_string()) {
            dups.insert(key.to_string());
        }
    }

    (keys, dups)
}
