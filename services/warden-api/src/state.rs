//! Application state

use std::sync::Arc;

use warden_core::{AuthService, MemoryIdentityStore};

/// Type alias for the auth service with the concrete store type
pub type AuthServiceImpl = AuthService<MemoryIdentityStore>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Auth service for credential checks and token validation
    pub auth: Arc<AuthServiceImpl>,
}

impl AppState {
    /// Create new application state
    pub fn new(auth: Arc<AuthServiceImpl>) -> Self {
        Self { auth }
    }
}
