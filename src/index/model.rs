//! Alias model types.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::error::{IndexError, IndexResult};
use crate::hashing::hash_index;

/// One entity in the authoritative master record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasEntity {
    /// Stable entity identifier.
    pub id: String,
    /// Known alternate names, in authoring order.
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl AliasEntity {
    pub fn new(id: impl Into<String>, aliases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            id: id.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }
}

/// Authoritative alias record as written by the external authoring process.
///
/// `entities` is required and unknown keys are rejected, so a misspelled or foreign
/// document fails to parse instead of yielding an empty index.
///
/// # Example
/// ```rust
/// use alias::{AliasEntity, AliasMaster};
///
/// let master = AliasMaster::new(vec![AliasEntity::new("plot-7", ["North Field"])]);
/// assert_eq!(master.entities.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasMaster {
    pub entities: Vec<AliasEntity>,
}

impl AliasMaster {
    pub fn new(entities: Vec<AliasEntity>) -> Self {
        Self { entities }
    }
}

/// Runtime lookup from entity identifier to its set of known aliases.
///
/// Built once per load and never mutated afterwards. Two indexes built from the same
/// master content compare equal regardless of which tier supplied them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasIndex {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl AliasIndex {
    /// Derives an index from a master record.
    ///
    /// Identifiers and aliases are trimmed, blank aliases are dropped and repeated
    /// identifiers have their alias lists merged. A blank identifier rejects the whole
    /// record rather than yielding a partial index.
    pub fn from_master(master: &AliasMaster) -> IndexResult<Self> {
        let mut entries: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for (position, entity) in master.entities.iter().enumerate() {
            let id = entity.id.trim();
            if id.is_empty() {
                return Err(IndexError::EmptyIdentifier { position });
            }

            let names = entries.entry(id.to_string()).or_default();
            names.extend(
                entity
                    .aliases
                    .iter()
                    .map(|a| a.trim())
                    .filter(|a| !a.is_empty())
                    .map(str::to_string),
            );
        }

        Ok(Self { entries })
    }

    /// Builds an index from already-normalized `(id, aliases)` pairs.
    pub(crate) fn from_entries<I, A>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, A)>,
        A: IntoIterator<Item = String>,
    {
        let mut map: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (id, aliases) in entries {
            map.entry(id).or_default().extend(aliases);
        }
        Self { entries: map }
    }

    /// Returns the alias set for `id`.
    pub fn get(&self, id: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of aliases across all entities.
    pub fn alias_count(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }

    /// Iterates entities in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.entries.iter().map(|(id, names)| (id.as_str(), names))
    }

    /// Encoding-independent content fingerprint (see [`hash_index`]).
    pub fn fingerprint(&self) -> [u8; 32] {
        hash_index(self)
    }
}
