//! # ninja-actions
//!
//! The server-side action layer of the CMS admin: one generic CRUD
//! [`Collection`] per entity schema, backed by the REST client and an
//! entity-keyed list cache.
//!
//! ```no_run
//! # async fn demo() -> Result<(), ninja_core::CoreError> {
//! use ninja_actions::CmsService;
//! use ninja_config::NinjaConfig;
//! use ninja_core::Item;
//!
//! let service = CmsService::new(&NinjaConfig::default())?;
//! let contacts = service.collection("contact_info")?;
//! let result = contacts.create(Item::new().with("phone", "123")).await;
//! if !result.success {
//!     eprintln!("{}", result.error_message());
//! }
//! # Ok(())
//! # }
//! ```

mod cache;
mod collection;
mod service;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;


pub use cache::{CacheLookup, ListCache};
pub use collection::Collection;
pub use service::CmsService;
