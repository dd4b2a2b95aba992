use std::sync::Arc;

use dashmap::DashMap;
use rand::rngs::OsRng;
use rand::RngCore;

/// Bearer-token bindings for plugin sessions, keyed by token value.
///
/// Each token maps to exactly one user identity; a user may hold several
/// valid tokens at once (issuing a new token does not revoke the old
/// one). Bindings live until `revoke` or process exit — the registry
/// grows monotonically under normal operation.
#[derive(Clone, Default)]
pub struct TokenRegistry {
    tokens: Arc<DashMap<String, String>>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a fresh opaque token and bind it to `user`.
    ///
    /// 32 bytes from the OS CSPRNG, hex-encoded — collision probability
    /// is negligible and values are not guessable.
    pub fn issue(&self, user: &str) -> String {
        let mut bytes = [0u8; 32];
        OsRng.fill_bytes(&mut bytes);
        let token = hex::encode(bytes);
        self.tokens.insert(token.clone(), user.to_string());
        token
    }

    /// Look up the identity a token was issued to. Pure lookup, no side
    /// effects; `None` means the token was never issued (or was revoked)
    /// and must be treated as an authentication failure by callers.
    pub fn resolve(&self, token: &str) -> Option<String> {
        self.tokens.get(token).map(|entry| entry.value().clone())
    }

    /// Drop a token binding. Revoking an unknown token is a no-op.
    pub fn revoke(&self, token: &str) {
        self.tokens.remove(token);
    }
}
