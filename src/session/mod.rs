//! Session collaborator seam.
//!
//! Token issuance and refresh belong to an external identity provider; this
//! module only models what the relay needs from it — a bearer token and a
//! presence/absence signal.

use async_trait::async_trait;

/// An authenticated caller's session.
///
/// The relay reads the token and attaches it to the outbound request; it
/// never mutates or persists the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Opaque bearer token proving the caller's identity.
    pub access_token: String,
    /// Identity claims reported by the provider, opaque to the relay.
    pub claims: serde_json::Value,
}

/// Resolves an inbound credential into a session.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Resolve the caller's session from the request's `Authorization`
    /// value. `None` means unauthenticated.
    async fn resolve(&self, credential: Option<&str>) -> Option<Session>;
}

/// Accepts `Bearer <token>` credentials and passes the token through.
///
/// The token is treated as opaque; validation happens downstream at the
/// remote agent runtime.
#[derive(Debug, Default)]
pub struct BearerSessionProvider;

impl BearerSessionProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SessionProvider for BearerSessionProvider {
    async fn resolve(&self, credential: Option<&str>) -> Option<Session> {
        let token = credential?.strip_prefix("Bearer ")?.trim();
        if token.is_empty() {
            return None;
        }
        Some(Session {
            access_token: token.to_string(),
            claims: serde_json::json!({}),
        })
    }
}

/// Always resolves to a fixed session. For embedding and tests.
#[derive(Debug, Clone)]
pub struct StaticSessionProvider {
    session: Session,
}

impl StaticSessionProvider {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            session: Session {
                access_token: access_token.into(),
                claims: serde_json::json!({}),
            },
        }
    }
}

#[async_trait]
impl SessionProvider for StaticSessionProvider {
    async fn resolve(&self, _credential: Option<&str>) -> Option<Session> {
        Some(self.session.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bearer_provider_extracts_token() {
        let provider = BearerSessionProvider::new();
        let session = provider.resolve(Some("Bearer abc123")).await.unwrap();
        assert_eq!(session.access_token, "abc123");
    }

    #[tokio::test]
    async fn bearer_provider_rejects_missing_credential() {
        let provider = BearerSessionProvider::new();
        assert!(provider.resolve(None).await.is_none());
    }

    #[tokio::test]
    async fn bearer_provider_rejects_wrong_scheme() {
        let provider = BearerSessionProvider::new();
        assert!(provider.resolve(Some("Basic dXNlcg==")).await.is_none());
    }

    #[tokio::test]
    async fn bearer_provider_rejects_empty_token() {
        let provider = BearerSessionProvider::new();
        assert!(provider.resolve(Some("Bearer   ")).await.is_none());
    }

    #[tokio::test]
    async fn static_provider_ignores_credential() {
        let provider = StaticSessionProvider::new("fixed-token");
        let session = provider.resolve(None).await.unwrap();
        assert_eq!(session.access_token, "fixed-token");
    }
}
