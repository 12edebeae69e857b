//! Project alias table
//!
//! Maps free-text project names (Arabic and Latin spellings) to canonical
//! project identifiers. Lookup is case-insensitive substring containment and
//! the first entry in table order wins, so more specific aliases must come
//! before shorter ones they contain.

use kayan_config::AliasEntry;
use kayan_core::ProjectId;
use once_cell::sync::Lazy;

use crate::error::{Result, TextProcessingError};

/// Built-in aliases, in lookup order
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("حمد", "hamad-tower"),
    ("الحمد", "hamad-tower"),
    ("hamad", "hamad-tower"),
    ("ليليان", "lilian-tower"),
    ("lilian", "lilian-tower"),
];

static BUILTIN_TABLE: Lazy<AliasTable> = Lazy::new(AliasTable::builtin);

/// Immutable alias table
#[derive(Debug, Clone)]
pub struct AliasTable {
    /// (lowercased alias, project id) in lookup order
    entries: Vec<(String, ProjectId)>,
}

impl AliasTable {
    /// Table holding only the built-in aliases
    pub fn builtin() -> Self {
        let entries = BUILTIN_ALIASES
            .iter()
            .map(|(alias, id)| (alias.to_lowercase(), ProjectId::new(*id)))
            .collect();
        Self { entries }
    }

    /// Built-in aliases followed by `extra`, in the given order
    pub fn with_entries(extra: &[AliasEntry]) -> Result<Self> {
        let mut table = Self::builtin();
        for entry in extra {
            let alias = entry.alias.trim();
            if alias.is_empty() {
                return Err(TextProcessingError::InvalidAlias {
                    alias: entry.alias.clone(),
                    message: "alias text is empty".to_string(),
                });
            }

            let project_id = entry.project_id.trim();
            if project_id.is_empty() {
                return Err(TextProcessingError::InvalidAlias {
                    alias: entry.alias.clone(),
                    message: "project id is empty".to_string(),
                });
            }

            table
                .entries
                .push((alias.to_lowercase(), ProjectId::new(project_id)));
        }

        tracing::debug!(
            builtin = BUILTIN_ALIASES.len(),
            configured = extra.len(),
            "Built project alias table"
        );
        Ok(table)
    }

    /// First project whose alias occurs in `text`
    pub fn lookup(&self, text: &str) -> Option<&ProjectId> {
        let lower = text.to_lowercase();
        self.entries
            .iter()
            .find(|(alias, _)| lower.contains(alias.as_str()))
            .map(|(_, id)| id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (alias, project id) pairs in lookup order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProjectId)> {
        self.entries.iter().map(|(alias, id)| (alias.as_str(), id))
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Look `text` up in the built-in alias table
pub fn lookup_alias(text: &str) -> Option<ProjectId> {
    BUILTIN_TABLE.lookup(text).cloned()
}
