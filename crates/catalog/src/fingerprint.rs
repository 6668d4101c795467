use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One fingerprinting method's output over a source plan.
///
/// `value` is meaningful only relative to `provider`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Signature {
    pub provider: String,
    pub value: String,
}

impl Signature {
    pub fn new(provider: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            value: value.into(),
        }
    }
}

/// A named collection of signatures capturing a source plan's semantic
/// identity.
///
/// Signature order is insertion order. It is not otherwise significant,
/// except that index 0 is the canonical signature should multiple
/// fingerprinting providers ever be active at once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "properties")]
pub enum PlanFingerprint {
    LogicalPlan { signatures: Vec<Signature> },
}

impl PlanFingerprint {
    pub fn new(signatures: Vec<Signature>) -> Self {
        PlanFingerprint::LogicalPlan { signatures }
    }

    pub fn signatures(&self) -> &[Signature] {
        match self {
            PlanFingerprint::LogicalPlan { signatures } => signatures,
        }
    }
}
