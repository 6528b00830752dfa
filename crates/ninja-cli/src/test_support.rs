//! Command and server test helpers over the shared stub backend.

pub use ninja_actions::test_support::StubBackend as Backend;
use ninja_actions::test_support::unreachable_ninja_config;

use crate::context::AppContext;

/// Builds an [`AppContext`] wired to a stub backend.
pub trait BackendContext {
    fn context(&self) -> AppContext;
}

impl BackendContext for Backend {
    fn context(&self) -> AppContext {
        AppContext::init(self.config()).expect("context builds")
    }
}

/// A context whose API base points at a port nothing listens on.
pub fn unreachable_context() -> AppContext {
    AppContext::init(unreachable_ninja_config()).expect("context builds")
}
