use crate::fingerprint::PlanFingerprint;
use crate::Content;
use matidx_plan::{PlanEngine, Result as PlanResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A source query plan: its opaque serialized text paired with the
/// fingerprint capturing its semantic identity.
///
/// Equality is deliberately NOT structural. Serializations of logically
/// identical plans can differ byte-for-byte (lazily computed fields differ
/// across serializations), so comparing `rawPlan` text would produce false
/// negatives. Use [`SourcePlan::semantic_eq`]; there is no `PartialEq` impl.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "properties")]
pub enum SourcePlan {
    Spark {
        #[serde(rename = "rawPlan")]
        raw_plan: String,
        fingerprint: PlanFingerprint,
    },
}

impl SourcePlan {
    pub fn new(raw_plan: impl Into<String>, fingerprint: PlanFingerprint) -> Self {
        SourcePlan::Spark {
            raw_plan: raw_plan.into(),
            fingerprint,
        }
    }

    /// A plan with no serialized text, identified by its fingerprint alone.
    pub fn reduced(fingerprint: PlanFingerprint) -> Self {
        Self::new("", fingerprint)
    }

    pub fn raw_plan(&self) -> &str {
        match self {
            SourcePlan::Spark { raw_plan, .. } => raw_plan,
        }
    }

    pub fn fingerprint(&self) -> &PlanFingerprint {
        match self {
            SourcePlan::Spark { fingerprint, .. } => fingerprint,
        }
    }

    /// Semantic plan equality.
    ///
    /// Two plans are equal iff their fingerprints are structurally equal,
    /// AND either both raw texts are empty, or both texts — re-deserialized
    /// through the engine's active session — are recognized as structurally
    /// equivalent by the engine's own fast comparison. The fingerprint check
    /// alone is not trusted when raw text is present: a fingerprint may not
    /// capture every distinguishing detail of a plan.
    ///
    /// Fails with [`matidx_plan::PlanError::MissingContext`] when a raw plan
    /// is present but no session is active, and with
    /// [`matidx_plan::PlanError::Deserialization`] on malformed text.
    pub fn semantic_eq<E: PlanEngine>(&self, other: &Self, engine: &E) -> PlanResult<bool> {
        if self.fingerprint() != other.fingerprint() {
            return Ok(false);
        }
        if self.raw_plan().is_empty() && other.raw_plan().is_empty() {
            return Ok(true);
        }

        log::debug!("re-deserializing raw plans for semantic equality check");
        let session = engine.require_session()?;
        let ours = engine.deserialize(self.raw_plan(), session)?;
        let theirs = engine.deserialize(other.raw_plan(), session)?;
        Ok(engine.fast_equals(&ours, &theirs))
    }

    /// Re-deserializes the raw plan through the engine's active session.
    pub fn resolve<E: PlanEngine>(&self, engine: &E) -> PlanResult<E::Plan> {
        let session = engine.require_session()?;
        engine.deserialize(self.raw_plan(), session)
    }
}

/// Hash covers only the fingerprint. Raw text varies across equivalent
/// serializations, so hashing it would let semantically equal plans hash
/// differently.
impl Hash for SourcePlan {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fingerprint().hash(state);
    }
}

/// The data side of a source: a content tree tagged with the filesystem
/// kind it was listed from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "properties")]
pub enum SourceData {
    #[serde(rename = "HDFS")]
    Hdfs { content: Content },
}

impl SourceData {
    pub fn new(content: Content) -> Self {
        SourceData::Hdfs { content }
    }

    pub fn content(&self) -> &Content {
        match self {
            SourceData::Hdfs { content } => content,
        }
    }
}

/// One logical source plan together with the one-or-more physical data
/// locations it reads.
#[derive(Debug, Clone, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Source {
    pub plan: SourcePlan,
    pub data: Vec<SourceData>,
}

impl Source {
    pub fn new(plan: SourcePlan, data: Vec<SourceData>) -> Self {
        Self { plan, data }
    }

    /// Full source equality: semantic plan equality plus structural data
    /// equality.
    pub fn semantic_eq<E: PlanEngine>(&self, other: &Self, engine: &E) -> PlanResult<bool> {
        if self.data != other.data {
            return Ok(false);
        }
        self.plan.semantic_eq(&other.plan, engine)
    }
}
