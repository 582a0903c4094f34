const SECTIONS: [&str; 4] = ["FILTERS", "STATUS", "DATA", "GENERAL"];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured() {
    for warning in collect_unconfigured_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut keys = env
        .into_iter()
        .map(|(key, _)| key)
        .filter(|key| single_underscore_section(key).is_some())
        .collect::<Vec<_>>();
    keys.sort();

    keys.into_iter()
        .filter_map(|key| {
            let section = single_underscore_section(&key)?;
            let field = &key[format!("ADMINJO_{section}_").len()..];
            Some(format!(
                "{key} is ignored: {} config reads ADMINJO_{section}__<FIELD> (example: ADMINJO_{section}__{field}).",
                section.to_ascii_lowercase()
            ))
        })
        .collect()
}

/// The section a key names with a single `_` separator, e.g. `ADMINJO_STATUS_X`.
fn single_underscore_section(key: &str) -> Option<&'static str> {
    let rest = key.strip_prefix("ADMINJO_")?;
    SECTIONS.into_iter().find(|section| {
        rest.strip_prefix(section)
            .and_then(|tail| tail.strip_prefix('_'))
            .is_some_and(|field| !field.is_empty() && !field.starts_with('_'))
    })
}
