use crate::error::SchemaError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A structured-type schema decoded from its serialized JSON form.
///
/// The encoding is `{"type":"struct","fields":[{"name":..,"type":..,
/// "nullable":..,"metadata":{..}},..]}`; field order is significant and
/// preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StructType {
    #[serde(rename = "type")]
    kind: String,
    pub fields: Vec<StructField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StructField {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: FieldType,
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

/// A field's type: either an atomic type name ("integer", "string", ...) or
/// a nested struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum FieldType {
    Atomic(String),
    Nested(StructType),
}

fn default_nullable() -> bool {
    true
}

impl StructType {
    pub fn new(fields: Vec<StructField>) -> Self {
        Self {
            kind: "struct".to_string(),
            fields,
        }
    }

    /// Decodes a serialized schema string into a struct type.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let parsed: StructType = serde_json::from_str(json)?;
        if parsed.kind != "struct" {
            return Err(SchemaError::NotAStruct(parsed.kind));
        }
        Ok(parsed)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

impl StructField {
    pub fn atomic(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: FieldType::Atomic(type_name.into()),
            nullable: true,
            metadata: serde_json::Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_two_field_struct_in_order() {
        let json = r#"{"type":"struct","fields":[
            {"name":"a","type":"integer","nullable":true,"metadata":{}},
            {"name":"b","type":"string","nullable":true,"metadata":{}}
        ]}"#;
        let schema = StructType::from_json(json).unwrap();

        assert_eq!(schema.field_names(), vec!["a", "b"]);
        assert_eq!(
            schema.fields[0].data_type,
            FieldType::Atomic("integer".to_string())
        );
        assert_eq!(
            schema.fields[1].data_type,
            FieldType::Atomic("string".to_string())
        );
    }

    #[test]
    fn nullable_and_metadata_default_when_absent() {
        let json = r#"{"type":"struct","fields":[{"name":"a","type":"long"}]}"#;
        let schema = StructType::from_json(json).unwrap();

        assert!(schema.fields[0].nullable);
        assert!(schema.fields[0].metadata.is_empty());
    }

    #[test]
    fn parses_nested_struct_field() {
        let json = r#"{"type":"struct","fields":[
            {"name":"outer","type":{"type":"struct","fields":[
                {"name":"inner","type":"double"}
            ]}}
        ]}"#;
        let schema = StructType::from_json(json).unwrap();

        match &schema.fields[0].data_type {
            FieldType::Nested(inner) => assert_eq!(inner.field_names(), vec!["inner"]),
            other => panic!("expected nested struct, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_struct_top_level() {
        let err = StructType::from_json(r#"{"type":"map","fields":[]}"#).unwrap_err();
        assert!(matches!(err, SchemaError::NotAStruct(kind) if kind == "map"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = StructType::from_json("not-a-schema").unwrap_err();
        assert!(matches!(err, SchemaError::Json(_)));
    }
}
