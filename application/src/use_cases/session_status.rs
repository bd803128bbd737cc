//! Session status use case
//!
//! Reports whether the stored session would pass the login gate, without
//! the gate's side effects: nothing is revoked, nothing is navigated.

use crate::ports::identity_provider::{AuthError, IdentityProvider};
use poliseek_domain::{EmailDomainPolicy, PolicyVerdict};
use std::sync::Arc;
use tracing::debug;

pub struct SessionStatusUseCase {
    provider: Arc<dyn IdentityProvider>,
}

impl SessionStatusUseCase {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    pub async fn execute(&self) -> Result<PolicyVerdict, AuthError> {
        let session = self.provider.get_session().await?;
        debug!("Session present: {}", session.is_some());
        Ok(EmailDomainPolicy.validate(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use poliseek_domain::{AuthSession, AuthUser, OAuthSignInRequest};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use url::Url;

    struct StaticProvider {
        email: Option<&'static str>,
        sign_outs: AtomicUsize,
    }

    #[async_trait]
    impl IdentityProvider for StaticProvider {
        async fn get_session(&self) -> Result<Option<AuthSession>, AuthError> {
            Ok(self.email.map(|email| {
                AuthSession::new(
                    "token",
                    AuthUser {
                        id: "u-1".to_string(),
                        email: Some(email.to_string()),
                    },
                )
            }))
        }

        async fn sign_in_with_oauth(&self, _request: &OAuthSignInRequest) -> Result<Url, AuthError> {
            Err(AuthError::NotConfigured("unused".to_string()))
        }

        async fn sign_out(&self) -> Result<(), AuthError> {
            self.sign_outs.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_status_never_signs_out() {
        let provider = Arc::new(StaticProvider {
            email: Some("user@gmail.com"),
            sign_outs: AtomicUsize::new(0),
        });
        let verdict = SessionStatusUseCase::new(provider.clone())
            .execute()
            .await
            .unwrap();

        assert!(matches!(verdict, PolicyVerdict::RejectedWrongDomain { .. }));
        assert_eq!(provider.sign_outs.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_status_default_callback_uses_current_session() {
        let provider = StaticProvider {
            email: Some("dean@neu.edu.ph"),
            sign_outs: AtomicUsize::new(0),
        };
        let session = provider.session_from_callback("#access_token=x").await.unwrap();
        assert_eq!(session.unwrap().email(), Some("dean@neu.edu.ph"));

        let verdict = SessionStatusUseCase::new(Arc::new(provider)).execute().await.unwrap();
        assert!(verdict.is_accepted());
    }
}
