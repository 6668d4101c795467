//! # matidx Catalog Records
//!
//! Versioned metadata records for a derived-dataset catalog. Each
//! [`IndexLogEntry`] describes one materialized index: the shape that was
//! built, the output location, and the source plan + data snapshot it was
//! built from.
//!
//! ## Record shape
//!
//! ```text
//! IndexLogEntry
//!     ├── DerivedDataset (CoveringIndex: columns, schema, buckets)
//!     ├── Content (output tree)
//!     └── Source
//!           ├── SourcePlan (raw text + PlanFingerprint of Signatures)
//!           └── SourceData (HDFS content trees)
//! ```
//!
//! ## Equality
//!
//! Record and plan equality are *semantic*, not structural: serialized plan
//! text varies across equivalent serializations, so plan comparison goes
//! through an external [`matidx_plan::PlanEngine`] and entry comparison
//! composes it with config/signature/root checks. These contracts live on
//! named methods (`semantic_eq`, `semantic_hash`), never on `PartialEq`.
//!
//! ## Example
//!
//! ```no_run
//! use matidx_catalog::{
//!     Columns, Content, DerivedDataset, IndexLogEntry, PlanFingerprint, Signature, Source,
//!     SourceData, SourcePlan,
//! };
//!
//! let fingerprint = PlanFingerprint::new(vec![Signature::new("planHash", "abc123")]);
//! let source = Source::new(
//!     SourcePlan::reduced(fingerprint),
//!     vec![SourceData::new(Content::root_only("/data/t1"))],
//! );
//! let dataset = DerivedDataset::covering_index(
//!     Columns::new(vec!["a".into()], vec!["b".into()]),
//!     r#"{"type":"struct","fields":[]}"#,
//!     4,
//! );
//! let entry = IndexLogEntry::new("idx1", dataset, Content::root_only("/out/idx1"), source);
//! assert_eq!(entry.num_buckets(), 4);
//! ```

mod content;
mod covering;
mod entry;
mod error;
mod fingerprint;
mod hash;
mod source;
pub mod state;

pub use content::{Content, Directory, DirectoryFingerprint};
pub use covering::{Columns, CoveringIndex, DerivedDataset, IndexConfig};
pub use entry::{IndexLogEntry, LOG_ENTRY_VERSION};
pub use error::{CatalogError, Result};
pub use fingerprint::{PlanFingerprint, Signature};
pub use hash::Fnv1a64;
pub use source::{Source, SourceData, SourcePlan};
