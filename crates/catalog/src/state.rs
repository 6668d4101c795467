//! Lifecycle state tags.
//!
//! The set of states and the transitions between them are governed by the
//! action layer outside this crate; records here only carry and compare the
//! tag. States stay plain strings so unknown future tags round-trip
//! unchanged.

pub const ACTIVE: &str = "ACTIVE";
pub const CREATING: &str = "CREATING";
pub const DELETED: &str = "DELETED";
pub const REFRESHING: &str = "REFRESHING";
pub const RESTORING: &str = "RESTORING";
pub const VACUUMING: &str = "VACUUMING";
pub const OPTIMIZING: &str = "OPTIMIZING";
pub const DOES_NOT_EXIST: &str = "DOESNOTEXIST";
