use chrono::{DateTime, Utc};
use std::sync::{Arc, PoisonError, RwLock};

use dto::auth::{LoginResponse, UserDto};

/// Credential kept after a successful login
#[derive(Clone, Debug, PartialEq)]
pub struct StoredCredential {
    pub token: String,
    pub expires_at: String,
    pub attachment_token: String,
    pub user: Option<UserDto>,
}

impl From<LoginResponse> for StoredCredential {
    fn from(res: LoginResponse) -> Self {
        Self {
            token: res.token,
            expires_at: res.expires_at,
            attachment_token: res.attachment_token,
            user: res.user,
        }
    }
}

impl StoredCredential {
    /// An expiry that cannot be parsed as RFC 3339 never expires
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match DateTime::parse_from_rfc3339(&self.expires_at) {
            Ok(expires_at) => expires_at <= now,
            Err(_) => false,
        }
    }
}

/// Shared holder of the login credential.
///
/// Clones see the same credential, so one session can be handed to the
/// data-access client and to the login flow at the same time.
#[derive(Clone, Debug, Default)]
pub struct Session {
    inner: Arc<RwLock<Option<StoredCredential>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, res: LoginResponse) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(res.into());
    }

    pub fn clear(&self) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }

    pub fn credential(&self) -> Option<StoredCredential> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard.clone()
    }

    /// Token usable right now, if any
    pub fn token(&self) -> Option<String> {
        self.token_at(Utc::now())
    }

    pub fn token_at(&self, now: DateTime<Utc>) -> Option<String> {
        self.credential()
            .filter(|c| !c.is_expired_at(now))
            .map(|c| c.token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// False when nothing is stored
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.credential()
            .map(|c| c.is_expired_at(now))
            .unwrap_or(false)
    }
}
