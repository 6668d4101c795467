//! # matidx Plan Seams
//!
//! External-collaborator interfaces for the catalog record model: the plan
//! engine used to re-deserialize serialized query plans (with its explicit
//! session requirement), and the structured-type schema codec.
//!
//! Nothing here executes plans or touches storage; these are the seams the
//! catalog crate threads through its equality and accessor operations.

mod engine;
mod error;
mod schema;

pub use engine::PlanEngine;
pub use error::{PlanError, Result, SchemaError};
pub use schema::{FieldType, StructField, StructType};
