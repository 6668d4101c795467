use crate::covering::{DerivedDataset, IndexConfig};
use crate::error::{CatalogError, Result};
use crate::fingerprint::Signature;
use crate::hash::Fnv1a64;
use crate::source::Source;
use crate::{state, Content};
use matidx_plan::{PlanEngine, StructType};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// Record format version. Bumped when the logical shape changes.
pub const LOG_ENTRY_VERSION: &str = "0.1";

fn default_version() -> String {
    LOG_ENTRY_VERSION.to_string()
}

/// Top-level versioned catalog record describing one materialized index:
/// what was built (`derived_dataset`), where it was written (`content`), and
/// what it was built from (`source`).
///
/// Entries are immutable values; "updating" one produces a new value (see
/// [`IndexLogEntry::with_state`]). Equality and hashing are semantic, not
/// structural — see [`IndexLogEntry::semantic_eq`] and
/// [`IndexLogEntry::semantic_hash`] — so neither `PartialEq` nor `Hash` is
/// implemented.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct IndexLogEntry {
    pub name: String,
    #[serde(rename = "derivedDataset")]
    pub derived_dataset: DerivedDataset,
    /// Output location of the index itself.
    pub content: Content,
    pub source: Source,
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
    /// Lifecycle tag, governed by the action layer. Read-only here.
    pub state: String,
    #[serde(default = "default_version")]
    pub version: String,
}

impl IndexLogEntry {
    pub fn new(
        name: impl Into<String>,
        derived_dataset: DerivedDataset,
        content: Content,
        source: Source,
    ) -> Self {
        Self {
            name: name.into(),
            derived_dataset,
            content,
            source,
            extra: BTreeMap::new(),
            state: state::CREATING.to_string(),
            version: LOG_ENTRY_VERSION.to_string(),
        }
    }

    /// New value with the given lifecycle state. Used by the action layer;
    /// this crate never transitions states itself.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn has_supported_version(&self) -> bool {
        self.version == LOG_ENTRY_VERSION
    }

    /// Parses the stored schema string into a structured type.
    pub fn schema(&self) -> Result<StructType> {
        Ok(StructType::from_json(
            &self.derived_dataset.properties().schema_string,
        )?)
    }

    pub fn is_active(&self) -> bool {
        self.state == state::ACTIVE
    }

    pub fn indexed_columns(&self) -> &[String] {
        &self.derived_dataset.properties().columns.indexed
    }

    pub fn included_columns(&self) -> &[String] {
        &self.derived_dataset.properties().columns.included
    }

    pub fn num_buckets(&self) -> u32 {
        self.derived_dataset.properties().num_buckets
    }

    /// Re-deserializes the source plan through the engine's active session.
    pub fn resolved_plan<E: PlanEngine>(&self, engine: &E) -> Result<E::Plan> {
        Ok(self.source.plan.resolve(engine)?)
    }

    /// Projects the entry into the configuration describing what index to
    /// build.
    pub fn config(&self) -> IndexConfig {
        IndexConfig::new(
            self.name.clone(),
            self.indexed_columns().to_vec(),
            self.included_columns().to_vec(),
        )
    }

    /// The single canonical signature of the source plan fingerprint.
    ///
    /// Downstream equality assumes exactly one signature; a stored entry
    /// with zero or multiple signatures is corrupt, and this fails with
    /// [`CatalogError::ContractViolation`] rather than picking one.
    pub fn signature(&self) -> Result<&Signature> {
        let signatures = self.source.plan.fingerprint().signatures();
        match signatures {
            [single] => Ok(single),
            _ => Err(CatalogError::ContractViolation(format!(
                "entry '{}' has {} fingerprint signatures, expected exactly 1",
                self.name,
                signatures.len()
            ))),
        }
    }

    /// Semantic record equality: config, canonical signature, bucket count,
    /// output-content **root path only**, full source (semantic plan rule),
    /// and lifecycle state.
    ///
    /// Only the output root is compared, not the directory listing: two
    /// entries materialized at the same root are the same index regardless
    /// of incidental listing drift, while entries at different locations
    /// stay distinct.
    pub fn semantic_eq<E: PlanEngine>(&self, other: &Self, engine: &E) -> Result<bool> {
        if self.config() != other.config()
            || self.signature()? != other.signature()?
            || self.num_buckets() != other.num_buckets()
            || self.content.root != other.content.root
            || self.state != other.state
        {
            return Ok(false);
        }
        Ok(self.source.semantic_eq(&other.source, engine)?)
    }

    /// Semantic record hash: config, canonical signature, bucket count, and
    /// the **full** output content tree.
    ///
    /// Known asymmetry, preserved from the record format's pre-existing
    /// behavior: equality compares only `content.root`, so two entries equal
    /// under [`IndexLogEntry::semantic_eq`] can still hash differently when
    /// their directory listings drift apart. Callers must not use this hash
    /// to bucket entries for equality.
    pub fn semantic_hash(&self) -> Result<u64> {
        let mut hasher = Fnv1a64::new();
        self.config().hash(&mut hasher);
        self.signature()?.hash(&mut hasher);
        self.num_buckets().hash(&mut hasher);
        self.content.hash(&mut hasher);
        Ok(hasher.finish())
    }
}
