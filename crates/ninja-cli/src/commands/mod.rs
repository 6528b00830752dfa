pub mod create;
pub mod delete;
pub mod dispatch;
pub mod entities;
pub mod get;
pub mod launch;
pub mod list;
pub mod schema;
pub mod seo;
pub mod serve;
pub mod shared;
pub mod update;
