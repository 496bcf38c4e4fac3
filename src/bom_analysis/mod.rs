//! BOM graph analysis: domain model and pure services.
//!
//! Nothing in this module performs I/O; every service works on a
//! [`domain::BomRepository`] snapshot passed in by the caller.

pub mod domain;
pub mod services;
