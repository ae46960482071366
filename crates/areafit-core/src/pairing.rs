//! Grouping dropped files into original/focused pairs by base name.
//!
//! A file named `Focused cat.png` (prefix matched case-insensitively) is the
//! focused counterpart of `cat.png`. Both resolve to the same base name,
//! `cat` with the default extension-stripping policy or `cat.png` without it.

use std::collections::BTreeMap;
use std::path::Path;

use crate::config::PairingConfig;
use crate::types::{FileReference, Pair, Role};

/// Derives base names and roles from display names.
#[derive(Debug, Clone)]
pub struct PairingResolver {
    config: PairingConfig,
}

impl PairingResolver {
    pub fn new(config: PairingConfig) -> Self {
        Self { config }
    }

    /// Split a display name into its base name and role.
    pub fn derive(&self, display_name: &str) -> (String, Role) {
        let (working, role) = match self.strip_prefix(display_name) {
            Some(rest) => (rest, Role::Focused),
            None => (display_name, Role::Original),
        };

        let base_name = if self.config.strip_extension {
            Path::new(working)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| working.to_string())
        } else {
            working.to_string()
        };

        (base_name, role)
    }

    fn strip_prefix<'a>(&self, name: &'a str) -> Option<&'a str> {
        let prefix = &self.config.focused_prefix;
        let head = name.get(..prefix.len())?;
        if head.eq_ignore_ascii_case(prefix) {
            Some(&name[prefix.len()..])
        } else {
            None
        }
    }
}

/// Pairs keyed by base name, iterated in base-name order.
#[derive(Debug, Clone)]
pub struct PairingMap {
    resolver: PairingResolver,
    pairs: BTreeMap<String, Pair>,
}

impl PairingMap {
    pub fn new(config: PairingConfig) -> Self {
        Self {
            resolver: PairingResolver::new(config),
            pairs: BTreeMap::new(),
        }
    }

    /// Insert a reference under its base name and role.
    ///
    /// A later reference for the same base name and role replaces the earlier one.
    /// Returns the base name the reference was filed under.
    pub fn resolve(&mut self, reference: FileReference) -> String {
        let (base_name, role) = self.resolver.derive(&reference.display_name());
        let pair = self.pairs.entry(base_name.clone()).or_default();
        if let Some(previous) = pair.set(role, reference) {
            tracing::debug!(
                "Replaced {:?} reference for {:?}: {:?}",
                role,
                base_name,
                previous.path()
            );
        }
        base_name
    }

    pub fn get(&self, base_name: &str) -> Option<&Pair> {
        self.pairs.get(base_name)
    }

    /// All pairs in base-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Pair)> {
        self.pairs.iter()
    }

    /// Originals to process, with the base name each is paired under.
    ///
    /// Pairs holding only a focused reference are skipped.
    pub fn originals(&self) -> impl Iterator<Item = (&str, &FileReference)> {
        self.pairs
            .iter()
            .filter_map(|(name, pair)| pair.original.as_ref().map(|o| (name.as_str(), o)))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> PairingMap {
        PairingMap::new(PairingConfig::default())
    }

    #[test]
    fn test_derive_original_and_focused() {
        let resolver = PairingResolver::new(PairingConfig::default());
        assert_eq!(resolver.derive("cat.png"), ("cat".to_string(), Role::Original));
        assert_eq!(
            resolver.derive("Focused cat.png"),
            ("cat".to_string(), Role::Focused)
        );
    }

    #[test]
    fn test_prefix_is_case_insensitive() {
        let resolver = PairingResolver::new(PairingConfig::default());
        assert_eq!(resolver.derive("FOCUSED cat.png").1, Role::Focused);
        assert_eq!(resolver.derive("focused cat.png").1, Role::Focused);
    }

    #[test]
    fn test_prefix_requires_trailing_space() {
        let resolver = PairingResolver::new(PairingConfig::default());
        assert_eq!(
            resolver.derive("Focusedcat.png"),
            ("Focusedcat".to_string(), Role::Original)
        );
        assert_eq!(resolver.derive("Focused").1, Role::Original);
    }

    #[test]
    fn test_keep_extension_policy() {
        let resolver = PairingResolver::new(PairingConfig {
            strip_extension: false,
            ..PairingConfig::default()
        });
        assert_eq!(
            resolver.derive("Focused cat.png"),
            ("cat.png".to_string(), Role::Focused)
        );
    }

    #[test]
    fn test_names_without_extension() {
        let resolver = PairingResolver::new(PairingConfig::default());
        assert_eq!(resolver.derive("README").0, "README");
        assert_eq!(resolver.derive(".png").0, ".png");
        assert_eq!(resolver.derive("archive.tar.gz").0, "archive.tar");
    }

    #[test]
    fn test_non_ascii_name_shorter_than_prefix() {
        let resolver = PairingResolver::new(PairingConfig::default());
        assert_eq!(resolver.derive("é.png").0, "é");
        assert_eq!(resolver.derive("Focuséd x.png").1, Role::Original);
    }

    #[test]
    fn test_original_then_focused_forms_one_pair() {
        let mut pairs = map();
        pairs.resolve(FileReference::new("/drop/cat.png"));
        pairs.resolve(FileReference::new("/drop/Focused cat.png"));

        assert_eq!(pairs.len(), 1);
        let pair = pairs.get("cat").unwrap();
        assert!(pair.is_complete());
        assert_eq!(pair.original, Some(FileReference::new("/drop/cat.png")));
        assert_eq!(pair.focused, Some(FileReference::new("/drop/Focused cat.png")));
    }

    #[test]
    fn test_focused_alone_is_kept_but_not_processed() {
        let mut pairs = map();
        pairs.resolve(FileReference::new("Focused dog.jpg"));

        let pair = pairs.get("dog").unwrap();
        assert!(pair.original.is_none());
        assert!(pair.focused.is_some());
        assert_eq!(pairs.originals().count(), 0);
    }

    #[test]
    fn test_duplicate_original_last_write_wins() {
        let mut pairs = map();
        pairs.resolve(FileReference::new("/a/cat.png"));
        pairs.resolve(FileReference::new("/b/cat.jpg"));

        assert_eq!(pairs.len(), 1);
        assert_eq!(
            pairs.get("cat").unwrap().original,
            Some(FileReference::new("/b/cat.jpg"))
        );
    }

    #[test]
    fn test_originals_in_base_name_order() {
        let mut pairs = map();
        pairs.resolve(FileReference::new("zebra.png"));
        pairs.resolve(FileReference::new("Focused owl.png"));
        pairs.resolve(FileReference::new("ant.png"));

        let names: Vec<&str> = pairs.originals().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["ant", "zebra"]);
    }
}
