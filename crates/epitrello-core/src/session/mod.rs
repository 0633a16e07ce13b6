//! Session State
//!
//! Explicit application state for the auth token and theme, with init
//! (read from storage) and teardown (clear storage) rules.

mod jwt;
mod storage;
mod theme;

use crate::api::{ApiError, BoardApi};
use crate::domain::User;

pub use jwt::{decode_claims, JwtError, TokenClaims};
pub use storage::{KeyValueStore, MemoryStore};
pub use theme::Theme;

/// Client-side form validation failures, worded for display
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthFormError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Form(#[from] AuthFormError),
    /// Server rejection or network failure, with the message to show
    #[error("{0}")]
    Rejected(String),
}

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn validate_login(email: &str, password: &str) -> Result<(), AuthFormError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AuthFormError::MissingFields);
    }
    Ok(())
}

pub fn validate_registration(email: &str, password: &str, confirm: &str) -> Result<(), AuthFormError> {
    if email.trim().is_empty() || password.is_empty() || confirm.is_empty() {
        return Err(AuthFormError::MissingFields);
    }
    if password != confirm {
        return Err(AuthFormError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthFormError::PasswordTooShort);
    }
    Ok(())
}

/// Auth token and verified user, mirrored to a key-value store
#[derive(Debug, Clone)]
pub struct Session<S> {
    store: S,
    token_key: String,
    token: Option<String>,
    user: Option<User>,
}

impl<S: KeyValueStore> Session<S> {
    /// Read the persisted token, if any. The user stays unknown until `verify`.
    pub fn load(store: S, token_key: impl Into<String>) -> Self {
        let token_key = token_key.into();
        let token = store.get(&token_key).filter(|t| !t.is_empty());
        Self { store, token_key, token, user: None }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Unverified claims of the current token, for optimistic display only
    pub fn claims(&self) -> Option<TokenClaims> {
        let token = self.token.as_deref()?;
        match decode_claims(token) {
            Ok(claims) => Some(claims),
            Err(e) => {
                log::debug!("[SESSION] cannot decode token payload: {}", e);
                None
            }
        }
    }

    /// Verified e-mail if known, otherwise the one claimed by the token
    pub fn display_email(&self) -> Option<String> {
        self.user
            .as_ref()
            .map(|u| u.email.clone())
            .or_else(|| self.claims().and_then(|c| c.email))
    }

    pub fn sign_in(&mut self, token: String, user: User) {
        self.store.set(&self.token_key, &token);
        self.token = Some(token);
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        self.store.remove(&self.token_key);
        self.token = None;
        self.user = None;
    }

    pub async fn login<A: BoardApi + ?Sized>(&mut self, api: &A, email: &str, password: &str) -> Result<User, AuthError> {
        validate_login(email, password)?;
        let response = api
            .login(email.trim(), password)
            .await
            .map_err(|e| AuthError::Rejected(e.message_or("Login failed")))?;
        log::info!("[SESSION] signed in as {}", response.user.email);
        self.sign_in(response.token, response.user.clone());
        Ok(response.user)
    }

    pub async fn register<A: BoardApi + ?Sized>(
        &mut self,
        api: &A,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> Result<User, AuthError> {
        validate_registration(email, password, confirm)?;
        let response = api
            .register(email.trim(), password)
            .await
            .map_err(|e| AuthError::Rejected(e.message_or("Registration failed")))?;
        log::info!("[SESSION] registered {}", response.user.email);
        self.sign_in(response.token, response.user.clone());
        Ok(response.user)
    }

    /// Confirm the token with `/me`.
    ///
    /// A 401/403 clears the stored token. Other failures leave it in place and
    /// are returned to the caller.
    pub async fn verify<A: BoardApi + ?Sized>(&mut self, api: &A) -> Result<Option<User>, ApiError> {
        let Some(token) = self.token.clone() else {
            return Ok(None);
        };
        let verification = check_token(api, &token).await?;
        self.apply_verification(&token, &verification);
        Ok(match verification {
            Verification::Valid(user) => Some(user),
            Verification::Rejected => None,
        })
    }

    /// Record what `/me` said about `token`.
    ///
    /// Does nothing and returns `false` when the session no longer holds that
    /// token, e.g. after a sign-in or sign-out while the request was in flight.
    pub fn apply_verification(&mut self, token: &str, verification: &Verification) -> bool {
        if self.token.as_deref() != Some(token) {
            return false;
        }
        match verification {
            Verification::Valid(user) => self.user = Some(user.clone()),
            Verification::Rejected => {
                log::info!("[SESSION] token rejected by /me, signing out");
                self.sign_out();
            }
        }
        true
    }
}

/// What `/me` said about a token
#[derive(Debug, Clone, PartialEq)]
pub enum Verification {
    Valid(User),
    /// 401 or 403
    Rejected,
}

/// Ask `/me` about `token` without touching any session. Errors other than an
/// auth failure are returned as-is.
pub async fn check_token<A: BoardApi + ?Sized>(api: &A, token: &str) -> Result<Verification, ApiError> {
    match api.me(token).await {
        Ok(user) => Ok(Verification::Valid(user)),
        Err(err) if err.is_auth_failure() => Ok(Verification::Rejected),
        Err(err) => {
            log::warn!("[SESSION] could not verify token: {}", err);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeApi;

    fn session_with_token(token: &str) -> (MemoryStore, Session<MemoryStore>) {
        let store = MemoryStore::new();
        store.set("token", token);
        let session = Session::load(store.clone(), "token");
        (store, session)
    }

    #[test]
    fn test_load_reads_token() {
        let (_, session) = session_with_token("abc");
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("abc"));
        assert!(session.user().is_none());
    }

    #[test]
    fn test_load_without_token() {
        let session = Session::load(MemoryStore::new(), "token");
        assert!(!session.is_authenticated());
        assert!(session.claims().is_none());
    }

    #[tokio::test]
    async fn test_login_stores_token() {
        let store = MemoryStore::new();
        let mut session = Session::load(store.clone(), "token");
        let api = FakeApi::default();

        let user = session.login(&api, " ann@example.com ", "secret").await.unwrap();

        assert_eq!(user.email, "ann@example.com");
        assert_eq!(store.get("token").as_deref(), Some("login-token"));
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_rejected_shows_server_message_and_stores_nothing() {
        let store = MemoryStore::new();
        let mut session = Session::load(store.clone(), "token");
        let api = FakeApi::failing(ApiError::from_response(401, r#"{"error":"Invalid email or password"}"#));

        let err = session.login(&api, "ann@example.com", "wrong").await.unwrap_err();

        assert_eq!(err, AuthError::Rejected("Invalid email or password".to_string()));
        assert_eq!(err.to_string(), "Invalid email or password");
        assert_eq!(store.get("token"), None);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_network_failure_uses_fallback() {
        let mut session = Session::load(MemoryStore::new(), "token");
        let api = FakeApi::failing(ApiError::Network("connection refused".to_string()));
        let err = session.login(&api, "a@b.c", "secret").await.unwrap_err();
        assert_eq!(err.to_string(), "Login failed");
    }

    #[tokio::test]
    async fn test_login_empty_fields_skip_network() {
        let mut session = Session::load(MemoryStore::new(), "token");
        let api = FakeApi::default();
        let err = session.login(&api, "  ", "secret").await.unwrap_err();
        assert_eq!(err, AuthError::Form(AuthFormError::MissingFields));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_register_validates_before_calling() {
        let mut session = Session::load(MemoryStore::new(), "token");
        let api = FakeApi::default();

        let err = session.register(&api, "a@b.c", "secret", "secreT").await.unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match.");
        let err = session.register(&api, "a@b.c", "abc", "abc").await.unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 6 characters.");
        assert!(api.calls().is_empty());

        session.register(&api, "a@b.c", "secret", "secret").await.unwrap();
        assert_eq!(api.calls(), vec!["register a@b.c"]);
        assert_eq!(session.token(), Some("new-token"));
    }

    #[tokio::test]
    async fn test_verify_unauthorized_clears_token() {
        let (store, mut session) = session_with_token("stale");
        let api = FakeApi::failing(ApiError::from_response(401, "unauthorized"));

        let user = session.verify(&api).await.unwrap();

        assert!(user.is_none());
        assert!(!session.is_authenticated());
        assert_eq!(store.get("token"), None);
    }

    #[tokio::test]
    async fn test_verify_network_error_keeps_token() {
        let (store, mut session) = session_with_token("abc");
        let api = FakeApi::failing(ApiError::Network("offline".to_string()));

        assert!(session.verify(&api).await.is_err());
        assert!(session.is_authenticated());
        assert_eq!(store.get("token").as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_verify_success_sets_user() {
        let (_, mut session) = session_with_token("abc");
        let api = FakeApi::default();

        let user = session.verify(&api).await.unwrap().unwrap();

        assert_eq!(user.email, "me@example.com");
        assert_eq!(session.display_email().as_deref(), Some("me@example.com"));
        assert_eq!(api.calls(), vec!["me abc"]);
    }

    #[tokio::test]
    async fn test_stale_verification_leaves_new_sign_in_alone() {
        let (store, mut session) = session_with_token("old");
        let api = FakeApi::failing(ApiError::from_response(401, "unauthorized"));
        let verification = check_token(&api, "old").await.unwrap();
        assert_eq!(verification, Verification::Rejected);

        // user signed in again while /me was answering for the old token
        let fresh = User { id: 9, email: "new@example.com".to_string(), created_at: None };
        session.sign_in("new".to_string(), fresh.clone());

        assert!(!session.apply_verification("old", &verification));
        assert_eq!(session.token(), Some("new"));
        assert_eq!(session.user(), Some(&fresh));
        assert_eq!(store.get("token").as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn test_stale_user_not_applied_after_sign_out() {
        let (_, mut session) = session_with_token("abc");
        let verification = check_token(&FakeApi::default(), "abc").await.unwrap();
        session.sign_out();

        assert!(!session.apply_verification("abc", &verification));
        assert!(session.user().is_none());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_matching_verification_applies() {
        let (_, mut session) = session_with_token("abc");
        let verification = check_token(&FakeApi::default(), "abc").await.unwrap();
        assert!(session.apply_verification("abc", &verification));
        assert_eq!(session.user().map(|u| u.email.as_str()), Some("me@example.com"));
    }

    #[tokio::test]
    async fn test_verify_without_token_is_noop() {
        let mut session = Session::load(MemoryStore::new(), "token");
        let api = FakeApi::default();
        assert_eq!(session.verify(&api).await.unwrap(), None);
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_sign_out_clears_storage() {
        let (store, mut session) = session_with_token("abc");
        session.sign_out();
        assert_eq!(store.get("token"), None);
        assert!(session.token().is_none());
    }

    #[test]
    fn test_display_email_falls_back_to_claims() {
        use base64::engine::general_purpose::URL_SAFE_NO_PAD;
        use base64::Engine;
        let payload = URL_SAFE_NO_PAD.encode(r#"{"user_id":3,"email":"claimed@example.com"}"#);
        let (_, session) = session_with_token(&format!("h.{}.s", payload));
        assert_eq!(session.display_email().as_deref(), Some("claimed@example.com"));
    }

    #[test]
    fn test_registration_rules() {
        assert_eq!(validate_registration("", "secret", "secret"), Err(AuthFormError::MissingFields));
        assert_eq!(validate_registration("a@b.c", "secret", ""), Err(AuthFormError::MissingFields));
        assert_eq!(validate_registration("a@b.c", "secret", "secret"), Ok(()));
    }
}
