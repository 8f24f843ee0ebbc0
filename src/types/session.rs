use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Bearer token issued by the external identity provider.
///
/// Zeroized on drop and redacted from debug output; only the store client
/// reads the raw value when it builds request headers.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token value for the Authorization header.
    pub fn reveal(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// An authenticated user session, as yielded by the identity provider's
/// redirect flow. The core only needs the owning-user identifier and the
/// token the store client presents.
#[derive(Debug, Clone)]
pub struct Session {
    user_id: String,
    access_token: AccessToken,
}

impl Session {
    pub fn new(user_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            access_token: AccessToken::new(access_token),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn access_token(&self) -> &AccessToken {
        &self.access_token
    }
}
