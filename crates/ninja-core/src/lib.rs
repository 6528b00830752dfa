//! # ninja-core
//!
//! Core types shared across all Ninja Park CMS crates:
//! - Field and entity schema definitions (the declarative shape of every
//!   managed collection)
//! - `Item`, the opaque server-owned record rendered by forms and lists
//! - `ActionResult`, the uniform contract returned by every mutating action
//! - Cross-cutting error types

pub mod errors;
pub mod item;
pub mod result;
pub mod schema;

pub use errors::CoreError;
pub use item::Item;
pub use result::ActionResult;
pub use schema::{Constraints, EntitySchema, FieldSchema, FieldType, SelectOption};
