//! Supabase auth client

use super::error::{Result, SupabaseError};
use super::types::{ErrorBody, RefreshRequest, TokenResponse, UserResponse};
use crate::session_store::SessionStore;
use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use poliseek_application::{AuthError, IdentityProvider};
use poliseek_domain::{
    AuthSession, AuthUser, OAuthCallback, OAuthSignInRequest, expiry_after, mask_secret,
};
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

/// Refresh this long before the access token actually expires.
const EXPIRY_MARGIN_SECS: i64 = 30;

/// Connection settings for a Supabase project
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: Url,
    pub anon_key: String,
}

impl SupabaseConfig {
    pub fn new(url: &str, anon_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            url: Url::parse(url)?,
            anon_key: anon_key.into(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}/auth/v1/{}", base, path))?)
    }
}

/// [`IdentityProvider`] backed by the Supabase auth REST API
pub struct SupabaseAuthClient {
    config: SupabaseConfig,
    http: reqwest::Client,
    store: Arc<dyn SessionStore>,
}

impl SupabaseAuthClient {
    pub fn new(config: SupabaseConfig, store: Arc<dyn SessionStore>) -> Self {
        info!(
            "Supabase auth client for {} (anon key {})",
            config.url,
            mask_secret(&config.anon_key)
        );
        Self {
            config,
            http: reqwest::Client::new(),
            store,
        }
    }

    /// Build the authorize URL the browser is sent to
    pub fn authorize_url(&self, request: &OAuthSignInRequest) -> Result<Url> {
        let mut url = self.config.endpoint("authorize")?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("provider", &request.provider);
            if let Some(redirect_to) = &request.redirect_to {
                query.append_pair("redirect_to", redirect_to);
            }
            for (key, value) in &request.query_params {
                query.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// `GET /auth/v1/user` for an access token
    async fn fetch_user(&self, access_token: &str) -> Result<AuthUser> {
        let response = self
            .http
            .get(self.config.endpoint("user")?)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;
        let user: UserResponse = Self::read_json(response).await?;
        Ok(user.into())
    }

    /// `POST /auth/v1/token?grant_type=refresh_token`
    async fn refresh(&self, refresh_token: &str) -> Result<AuthSession> {
        let mut url = self.config.endpoint("token")?;
        url.query_pairs_mut()
            .append_pair("grant_type", "refresh_token");

        let response = self
            .http
            .post(url)
            .header("apikey", &self.config.anon_key)
            .json(&RefreshRequest { refresh_token })
            .send()
            .await?;
        let token: TokenResponse = Self::read_json(response).await?;
        Ok(Self::session_from_token(token))
    }

    /// `POST /auth/v1/logout`; an already invalid token counts as signed out
    async fn revoke(&self, access_token: &str) -> Result<()> {
        let response = self
            .http
            .post(self.config.endpoint("logout")?)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        match Self::check_status(response).await {
            Ok(_) => Ok(()),
            Err(e) if e.is_invalid_session() => {
                debug!("Session already invalid on the server: {}", e);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn session_from_token(token: TokenResponse) -> AuthSession {
        let now = Utc::now();
        let expires_at = token
            .expires_at
            .and_then(|at| Utc.timestamp_opt(at, 0).single())
            .or_else(|| token.expires_in.and_then(|secs| expiry_after(now, secs)));

        AuthSession {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            token_type: token.token_type.unwrap_or_else(|| "bearer".to_string()),
            expires_at,
            user: token.user.into(),
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        let fallback = if text.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        } else {
            text.clone()
        };
        let message = serde_json::from_str::<ErrorBody>(&text)
            .unwrap_or_default()
            .into_message(fallback);
        Err(SupabaseError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl IdentityProvider for SupabaseAuthClient {
    async fn get_session(&self) -> std::result::Result<Option<AuthSession>, AuthError> {
        let Some(session) = self.store.load().map_err(SupabaseError::from)? else {
            return Ok(None);
        };

        if !session.is_expired(Utc::now(), Duration::seconds(EXPIRY_MARGIN_SECS)) {
            return Ok(Some(session));
        }

        let Some(refresh_token) = session.refresh_token.as_deref() else {
            debug!("Stored session expired without a refresh token");
            self.store.clear().map_err(SupabaseError::from)?;
            return Ok(None);
        };

        match self.refresh(refresh_token).await {
            Ok(refreshed) => {
                debug!("Refreshed expired session");
                self.store.save(&refreshed).map_err(SupabaseError::from)?;
                Ok(Some(refreshed))
            }
            Err(SupabaseError::Api { status, message }) if status < 500 && status != 429 => {
                warn!("Refresh rejected ({}): {}, signing out locally", status, message);
                self.store.clear().map_err(SupabaseError::from)?;
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn session_from_callback(
        &self,
        fragment: &str,
    ) -> std::result::Result<Option<AuthSession>, AuthError> {
        let tokens = OAuthCallback::parse(fragment)?.into_tokens()?;
        let user = self.fetch_user(&tokens.access_token).await?;

        let session = AuthSession {
            expires_at: tokens.expiry(Utc::now()),
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: tokens.token_type,
            user,
        };
        self.store.save(&session).map_err(SupabaseError::from)?;
        info!("Received session from OAuth callback");
        Ok(Some(session))
    }

    async fn sign_in_with_oauth(
        &self,
        request: &OAuthSignInRequest,
    ) -> std::result::Result<Url, AuthError> {
        Ok(self.authorize_url(request)?)
    }

    async fn sign_out(&self) -> std::result::Result<(), AuthError> {
        let Some(session) = self.store.load().map_err(SupabaseError::from)? else {
            return Ok(());
        };
        // Local sign-out first: the stored session must not outlive a failed revoke.
        self.store.clear().map_err(SupabaseError::from)?;
        self.revoke(&session.access_token).await?;
        info!("Signed out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session_store::MemorySessionStore;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer, store: Arc<MemorySessionStore>) -> SupabaseAuthClient {
        let config = SupabaseConfig::new(&server.uri(), "anon-key").unwrap();
        SupabaseAuthClient::new(config, store)
    }

    fn stored(expires_in: i64) -> AuthSession {
        AuthSession::new(
            "old-access",
            AuthUser {
                id: "u-1".to_string(),
                email: Some("student@neu.edu.ph".to_string()),
            },
        )
        .with_refresh_token("r1")
        .with_expires_at(Utc::now() + Duration::seconds(expires_in))
    }

    #[tokio::test]
    async fn test_callback_resolves_user_and_persists() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .and(header("apikey", "anon-key"))
            .and(header("authorization", "Bearer eyJ.abc"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": "u-1", "email": "student@neu.edu.ph", "aud": "authenticated"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let store = Arc::new(MemorySessionStore::new());
        let client = client(&server, store.clone());

        let session = client
            .session_from_callback("#access_token=eyJ.abc&refresh_token=r1&expires_in=3600&token_type=bearer")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(session.email(), Some("student@neu.edu.ph"));
        assert!(session.expires_at.is_some());
        assert_eq!(store.load().unwrap(), Some(session));
    }

    #[tokio::test]
    async fn test_callback_error_fragment() {
        let server = MockServer::start().await;
        let client = client(&server, Arc::new(MemorySessionStore::new()));

        let err = client
            .session_from_callback("#error=access_denied&error_description=denied")
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Callback(_)));
    }

    #[tokio::test]
    async fn test_callback_with_rejected_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"msg": "invalid JWT"})))
            .mount(&server)
            .await;
        let client = client(&server, Arc::new(MemorySessionStore::new()));

        let err = client
            .session_from_callback("#access_token=bad")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            AuthError::Api {
                status: 401,
                message: "invalid JWT".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_get_session_returns_fresh_session_without_network() {
        let server = MockServer::start().await;
        let store = Arc::new(MemorySessionStore::with_session(stored(3600)));
        let client = client(&server, store);

        let session = client.get_session().await.unwrap();

        assert_eq!(session.unwrap().access_token, "old-access");
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_session_refreshes_expired_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "refresh_token"))
            .and(body_json(json!({"refresh_token": "r1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "new-access",
                "refresh_token": "r2",
                "token_type": "bearer",
                "expires_in": 3600,
                "user": {"id": "u-1", "email": "student@neu.edu.ph"}
            })))
            .expect(1)
            .mount(&server)
            .await;
        let store = Arc::new(MemorySessionStore::with_session(stored(-10)));
        let client = client(&server, store.clone());

        let session = client.get_session().await.unwrap().unwrap();

        assert_eq!(session.access_token, "new-access");
        assert_eq!(store.load().unwrap().unwrap().refresh_token.as_deref(), Some("r2"));
    }

    #[tokio::test]
    async fn test_unrepresentable_expiry_is_not_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "new-access",
                "refresh_token": "r2",
                "expires_in": 999_999_999_999_999i64,
                "user": {"id": "u-1", "email": "student@neu.edu.ph"}
            })))
            .mount(&server)
            .await;
        let store = Arc::new(MemorySessionStore::with_session(stored(-10)));
        let client = client(&server, store);

        let session = client.get_session().await.unwrap().unwrap();
        assert_eq!(session.access_token, "new-access");
        assert!(session.expires_at.is_none());

        let err = client
            .session_from_callback("#access_token=eyJ.abc&expires_in=9223372036854775807")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Callback(_)));
    }

    #[tokio::test]
    async fn test_get_session_rejected_refresh_signs_out_locally() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({"error": "invalid_grant", "error_description": "Invalid Refresh Token"})),
            )
            .mount(&server)
            .await;
        let store = Arc::new(MemorySessionStore::with_session(stored(-10)));
        let client = client(&server, store.clone());

        assert!(client.get_session().await.unwrap().is_none());
        assert!(store.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_session_server_error_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        let store = Arc::new(MemorySessionStore::with_session(stored(-10)));
        let client = client(&server, store.clone());

        let err = client.get_session().await.unwrap_err();

        assert!(err.is_transient());
        assert!(store.load().unwrap().is_some());
    }

    #[tokio::test]
    async fn test_sign_out_revokes_and_clears() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/logout"))
            .and(header("authorization", "Bearer old-access"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        let store = Arc::new(MemorySessionStore::with_session(stored(3600)));
        let client = client(&server, store.clone());

        client.sign_out().await.unwrap();

        assert!(store.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sign_out_is_idempotent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/logout"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        let store = Arc::new(MemorySessionStore::with_session(stored(3600)));
        let client = client(&server, store.clone());

        client.sign_out().await.unwrap();
        // No session left: no request at all
        client.sign_out().await.unwrap();

        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_authorize_url_carries_domain_hints() {
        let server = MockServer::start().await;
        let client = client(&server, Arc::new(MemorySessionStore::new()));
        let request =
            OAuthSignInRequest::google_for_domain().with_redirect_to("http://localhost:8080/login");

        let url = client.sign_in_with_oauth(&request).await.unwrap();

        assert_eq!(url.path(), "/auth/v1/authorize");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("provider".to_string(), "google".to_string())));
        assert!(pairs.contains(&("hd".to_string(), "neu.edu.ph".to_string())));
        assert!(pairs.contains(&("login_hint".to_string(), "@neu.edu.ph".to_string())));
        assert!(pairs.contains(&(
            "redirect_to".to_string(),
            "http://localhost:8080/login".to_string()
        )));
    }
}
