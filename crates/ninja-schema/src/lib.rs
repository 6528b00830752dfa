//! # ninja-schema
//!
//! Schema registry and client-side validation for the Ninja Park CMS.
//!
//! This crate provides:
//! - `SchemaRegistry`: the static mapping from entity key to [`EntitySchema`]
//! - `coerce`: turning raw form/CLI string input into a typed [`Item`]
//! - `validate`: required-field and constraint checks that run before any
//!   network call
//! - JSON Schema export of entity definitions (`ncms schema --json-schema`)
//!
//! [`EntitySchema`]: ninja_core::EntitySchema
//! [`Item`]: ninja_core::Item

mod catalog;
mod coerce;
mod error;
mod export;
mod registry;
mod validation;

pub use coerce::{CoerceMode, coerce};
pub use error::SchemaError;
pub use export::{entity_json_schema, meta_schemas};
pub use registry::SchemaRegistry;
pub use validation::{FieldError, ValidationErrors, is_blank, validate};
