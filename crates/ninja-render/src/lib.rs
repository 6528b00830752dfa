//! # ninja-render
//!
//! Schema-driven renderers for the CMS admin.
//!
//! - [`FormState`]: create/edit form state, validation-gated submission
//! - [`CollectionList`]: list columns, display cells, confirm-then-delete
//! - [`html`]: server-rendered HTML for forms, lists and admin pages
//! - [`media_url`]: resolution of stored media paths
//!
//! The state types are headless: the same logic drives the HTML pages served
//! by `ncms serve` and the CLI.

mod control;
mod form;
pub mod html;
mod list;
mod media;

pub use control::Control;
pub use form::{FIX_ERRORS, FormMode, FormState, SubmitOutcome, TOKEN_FIELD};
pub use html::{FormOptions, ListOptions};
pub use list::{Cell, CollectionList, Confirm, DELETE_PROMPT, DeleteOutcome, EMPTY_MESSAGE, Row};
pub use media::media_url;
