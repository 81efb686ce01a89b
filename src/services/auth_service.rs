//! Admin authentication for NexNav.
//!
//! Single shared admin password; a successful login issues an opaque session
//! token that privileged operations must present explicitly. Tokens live only
//! in process memory, so a restart invalidates every session.

use std::collections::HashSet;
use std::sync::Mutex;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use ring::constant_time::verify_slices_are_equal;
use ring::rand::{SecureRandom, SystemRandom};
use zeroize::Zeroizing;

use crate::types::errors::AuthError;

const TOKEN_BYTES: usize = 32;

/// Trait defining admin authentication operations.
pub trait AuthServiceTrait {
    /// Constant-time comparison against the admin password.
    fn verify_password(&self, candidate: &str) -> bool;
    /// Issues a fresh session token when the password matches.
    fn login(&self, password: &str) -> Result<String, AuthError>;
    /// True when the token belongs to a live session.
    fn validate(&self, token: &str) -> bool;
    /// Drops the session; unknown tokens are ignored.
    fn logout(&self, token: &str);
}

/// In-memory session registry keyed by the shared admin password.
pub struct AuthService {
    admin_password: Zeroizing<String>,
    sessions: Mutex<HashSet<String>>,
    rng: SystemRandom,
}

impl AuthService {
    pub fn new(admin_password: &str) -> Self {
        Self {
            admin_password: Zeroizing::new(admin_password.to_string()),
            sessions: Mutex::new(HashSet::new()),
            rng: SystemRandom::new(),
        }
    }

    fn sessions(&self) -> std::sync::MutexGuard<'_, HashSet<String>> {
        match self.sessions.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl AuthServiceTrait for AuthService {
    fn verify_password(&self, candidate: &str) -> bool {
        verify_slices_are_equal(candidate.as_bytes(), self.admin_password.as_bytes()).is_ok()
    }

    fn login(&self, password: &str) -> Result<String, AuthError> {
        if !self.verify_password(password) {
            return Err(AuthError::InvalidPassword);
        }

        let mut bytes = [0u8; TOKEN_BYTES];
        self.rng
            .fill(&mut bytes)
            .map_err(|_| AuthError::TokenGeneration("system RNG unavailable".to_string()))?;
        let token = URL_SAFE_NO_PAD.encode(bytes);

        self.sessions().insert(token.clone());
        Ok(token)
    }

    fn validate(&self, token: &str) -> bool {
        self.sessions().contains(token)
    }

    fn logout(&self, token: &str) {
        self.sessions().remove(token);
    }
}
