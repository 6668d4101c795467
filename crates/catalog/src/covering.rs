use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Indexed and included column names, both in declaration order.
///
/// The two sets are disjoint in intended use; that is not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Columns {
    pub indexed: Vec<String>,
    pub included: Vec<String>,
}

impl Columns {
    pub fn new(indexed: Vec<String>, included: Vec<String>) -> Self {
        Self { indexed, included }
    }
}

/// The logical shape of a covering index: its columns, the serialized schema
/// of the materialized rows, and the bucket count (always > 0).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoveringIndex {
    pub columns: Columns,
    pub schema_string: String,
    pub num_buckets: u32,
}

/// The produced artifact's shape, tagged by kind for format evolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "properties")]
pub enum DerivedDataset {
    CoveringIndex(CoveringIndex),
}

impl DerivedDataset {
    pub fn covering_index(
        columns: Columns,
        schema_string: impl Into<String>,
        num_buckets: u32,
    ) -> Self {
        DerivedDataset::CoveringIndex(CoveringIndex {
            columns,
            schema_string: schema_string.into(),
            num_buckets,
        })
    }

    pub fn properties(&self) -> &CoveringIndex {
        match self {
            DerivedDataset::CoveringIndex(props) => props,
        }
    }
}

/// Description of what index to build, consumed by the index-build pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IndexConfig {
    pub index_name: String,
    pub indexed_columns: Vec<String>,
    pub included_columns: Vec<String>,
}

impl IndexConfig {
    pub fn new(
        index_name: impl Into<String>,
        indexed_columns: Vec<String>,
        included_columns: Vec<String>,
    ) -> Self {
        Self {
            index_name: index_name.into(),
            indexed_columns,
            included_columns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn derived_dataset_serializes_with_kind_and_camel_case_properties() {
        let dataset = DerivedDataset::covering_index(
            Columns::new(vec!["a".into()], vec!["b".into()]),
            "{\"type\":\"struct\",\"fields\":[]}",
            4,
        );
        let json = serde_json::to_value(&dataset).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "CoveringIndex",
                "properties": {
                    "columns": {"indexed": ["a"], "included": ["b"]},
                    "schemaString": "{\"type\":\"struct\",\"fields\":[]}",
                    "numBuckets": 4
                }
            })
        );
    }

    #[test]
    fn config_equality_is_structural() {
        let a = IndexConfig::new("idx1", vec!["a".into()], vec!["b".into()]);
        let b = IndexConfig::new("idx1", vec!["a".into()], vec!["b".into()]);
        let c = IndexConfig::new("idx1", vec!["b".into()], vec!["a".into()]);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
