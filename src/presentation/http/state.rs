// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

/// Shared per-process state, injected into handlers as an `Extension`.
#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
}
