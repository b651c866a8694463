use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::error::{BlendError, Result};
use crate::models::Berry;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Canonical catalog key: lowercase, hyphen-separated, without a trailing
/// `-berry`.
///
/// "Cheri Berry", "CHERI_BERRY" and "cheri" all normalize to `cheri`.
pub fn normalize_name(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name.trim().chars() {
        let c = if c.is_whitespace() || c == '_' { '-' } else { c };
        if c == '-' && (key.is_empty() || key.ends_with('-')) {
            continue;
        }
        key.extend(c.to_lowercase());
    }
    while key.ends_with('-') {
        key.pop();
    }
    match key.strip_suffix("-berry") {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => key,
    }
}

/// Human-readable key for a recipe: the first berry's name followed by
/// two-letter abbreviations of the rest, e.g. `cheri-ch-pe`.
pub fn recipe_name<S: AsRef<str>>(names: &[S]) -> String {
    let mut parts = Vec::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        let key = normalize_name(name.as_ref());
        if i == 0 {
            parts.push(key);
        } else {
            parts.push(key.chars().take(2).collect());
        }
    }
    parts.join("-")
}

/// Read-only lookup from berry name to berry data.
#[derive(Debug, Clone, Default)]
pub struct BerryCatalog {
    /// All berries keyed by normalized name.
    berries: HashMap<String, Berry>,
}

impl BerryCatalog {
    /// Build a catalog. A later duplicate of the same normalized name wins.
    pub fn new(berries: Vec<Berry>) -> Self {
        let mut map = HashMap::with_capacity(berries.len());
        for berry in berries {
            map.insert(normalize_name(&berry.name), berry);
        }
        Self { berries: map }
    }

    /// Look up a berry by any spelling of its name.
    pub fn lookup(&self, name: &str) -> Result<&Berry> {
        let key = normalize_name(name);
        self.berries.get(&key).ok_or(BlendError::NotFound(key))
    }

    /// Resolve every name, in order. The first unknown name fails the whole
    /// call; no partial list is returned.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&Berry>> {
        names.iter().map(|name| self.lookup(name.as_ref())).collect()
    }

    /// Closest known berry name for a misspelled one.
    pub fn suggest(&self, name: &str) -> Option<&str> {
        let key = normalize_name(name);
        self.berries
            .keys()
            .map(|k| (k, jaro_winkler(k, &key)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| {
                a.1.partial_cmp(&b.1)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| b.0.cmp(a.0))
            })
            .map(|(k, _)| k.as_str())
    }

    /// All berries sorted by normalized name.
    pub fn iter(&self) -> impl Iterator<Item = &Berry> {
        let mut keys: Vec<&String> = self.berries.keys().collect();
        keys.sort();
        keys.into_iter().map(move |k| &self.berries[k])
    }

    pub fn len(&self) -> usize {
        self.berries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.berries.is_empty()
    }
}
