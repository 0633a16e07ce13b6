//! Auth Commands
//!
//! Login, registration and token verification against `/login`, `/register`, `/me`.

use epitrello_core::domain::User;
use epitrello_core::session::{self, Verification};

use super::client;
use crate::context::BrowserSession;

pub async fn login(session: &mut BrowserSession, email: &str, password: &str) -> Result<User, String> {
    session.login(&client(), email, password).await.map_err(|e| e.to_string())
}

pub async fn register(session: &mut BrowserSession, email: &str, password: &str, confirm: &str) -> Result<User, String> {
    session
        .register(&client(), email, password, confirm)
        .await
        .map_err(|e| e.to_string())
}

/// Ask `/me` about a token; the caller applies the answer to the live session
pub async fn check_token(token: &str) -> Result<Verification, String> {
    session::check_token(&client(), token).await.map_err(|e| e.to_string())
}
