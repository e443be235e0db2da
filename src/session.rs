// session.rs
//! Token lifecycle shared between the client and its caller.
//!
//! The token is an opaque string handed out by the login endpoint. It lives
//! exactly as long as the session object: set on successful login, cleared on
//! logout. Nothing is persisted.

use std::sync::Mutex;

/// Process-session authentication state.
///
/// Injected into the client rather than read from ambient globals, so tests
/// can construct a session with an arbitrary token.
#[derive(Debug, Default)]
pub struct Session {
    token: Mutex<Option<String>>,
}

impl Session {
    /// Fresh, unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session pre-seeded with an existing token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Mutex::new(Some(token.into())) }
    }

    /// Store the token received from a successful login.
    pub fn login(&self, token: impl Into<String>) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = Some(token.into());
        }
    }

    /// Drop the token. Idempotent.
    pub fn logout(&self) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = None;
        }
    }

    /// Current token, if authenticated.
    pub fn current_token(&self) -> Option<String> {
        self.token.lock().ok().and_then(|guard| guard.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_token().is_some()
    }
}
