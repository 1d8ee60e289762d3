//! Builds alias maps from the classmap source text.

use crate::error::StubGenResult;
use crate::parsing::AliasExtractor;
use std::collections::BTreeMap;

/// The two maps built from a classmap file: alias to canonical class, and
/// alias to removal version. Both share the same key set.
///
/// Sorted keys keep stub generation order deterministic and make map
/// comparison insertion-order independent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassMaps {
    /// alias -> canonical namespaced class
    pub classes: BTreeMap<String, String>,
    /// alias -> version in which the alias is removed
    pub versions: BTreeMap<String, String>,
}

impl ClassMaps {
    /// Build both maps from raw classmap source text.
    ///
    /// Every line is offered to the extractor; lines that do not match
    /// are skipped silently. A later registration for the same alias
    /// overwrites the earlier one in both maps.
    pub fn from_source(source: &str) -> StubGenResult<Self> {
        let mut extractor = AliasExtractor::new()?;
        let mut maps = Self::default();

        for raw_line in source.lines() {
            // `str::lines` already splits on \n; strip any \r left over
            // from CRLF input.
            let line = raw_line.trim_end_matches('\r');
            match extractor.extract(line) {
                Some(record) => {
                    tracing::debug!(
                        alias = %record.alias,
                        canonical = %record.canonical,
                        version = %record.removed_in_version,
                        "registered alias"
                    );
                    maps.classes.insert(record.alias.clone(), record.canonical);
                    maps.versions
                        .insert(record.alias, record.removed_in_version);
                }
                None => continue,
            }
        }

        Ok(maps)
    }

    /// Number of registered aliases.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether no alias was extracted.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
