//! HTTP Client
//!
//! `BoardApi` over reqwest. Uses fetch in the browser and hyper elsewhere.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

use super::requests::{ContentBody, Credentials, EmailBody, TitleBody, UserIdBody};
use super::{ApiError, ApiResult, BoardApi, CardPatch, NewCard, NewTag};
use crate::config::AppConfig;
use crate::domain::{
    AuthResponse, BoardDetail, BoardMember, BoardSummary, CardComment, CardDetail, CardMember, CardRecord, CardTag,
    User,
};

/// REST client rooted at the API base URL (e.g. `http://localhost:8080/api`)
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client: Client::new(), base_url }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path))
            .header(CONTENT_TYPE, "application/json");
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// `GET /users/search?q=`, query form-encoded
    fn search_request(&self, token: &str, query: &str) -> RequestBuilder {
        self.request(Method::GET, "/users/search", Some(token)).query(&[("q", query)])
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let response = builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_response(status.as_u16(), &body);
            log::debug!("[API] {} -> {}", status, err);
            return Err(err);
        }
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send_empty(&self, builder: RequestBuilder) -> ApiResult<()> {
        let response = builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_response(status.as_u16(), &body))
    }

    /// List endpoints answer `null` instead of `[]` when nothing matches
    async fn send_list<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<Vec<T>> {
        let items: Option<Vec<T>> = self.send(builder).await?;
        Ok(items.unwrap_or_default())
    }
}

#[async_trait(?Send)]
impl BoardApi for HttpApi {
    async fn register(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        let req = self.request(Method::POST, "/register", None).json(&Credentials { email, password });
        self.send(req).await
    }

    async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        let req = self.request(Method::POST, "/login", None).json(&Credentials { email, password });
        self.send(req).await
    }

    async fn me(&self, token: &str) -> ApiResult<User> {
        self.send(self.request(Method::GET, "/me", Some(token))).await
    }

    async fn list_boards(&self, token: &str) -> ApiResult<Vec<BoardSummary>> {
        self.send_list(self.request(Method::GET, "/boards", Some(token))).await
    }

    async fn create_board(&self, token: &str, title: &str) -> ApiResult<BoardSummary> {
        let req = self.request(Method::POST, "/boards", Some(token)).json(&TitleBody { title });
        self.send(req).await
    }

    async fn get_board(&self, token: &str, board_id: i64) -> ApiResult<BoardDetail> {
        self.send(self.request(Method::GET, &format!("/boards/{}", board_id), Some(token))).await
    }

    async fn create_card(&self, token: &str, list_id: i64, card: &NewCard) -> ApiResult<CardRecord> {
        let req = self.request(Method::POST, &format!("/lists/{}/cards", list_id), Some(token)).json(card);
        self.send(req).await
    }

    async fn update_card(&self, token: &str, card_id: i64, patch: &CardPatch) -> ApiResult<CardRecord> {
        let req = self.request(Method::PATCH, &format!("/cards/{}", card_id), Some(token)).json(patch);
        self.send(req).await
    }

    async fn get_card(&self, token: &str, card_id: i64) -> ApiResult<CardDetail> {
        self.send(self.request(Method::GET, &format!("/cards/{}", card_id), Some(token))).await
    }

    async fn add_card_tag(&self, token: &str, card_id: i64, tag: &NewTag) -> ApiResult<CardTag> {
        let req = self.request(Method::POST, &format!("/cards/{}/tags", card_id), Some(token)).json(tag);
        self.send(req).await
    }

    async fn remove_card_tag(&self, token: &str, card_id: i64, tag_id: i64) -> ApiResult<()> {
        let req = self.request(Method::DELETE, &format!("/cards/{}/tags/{}", card_id, tag_id), Some(token));
        self.send_empty(req).await
    }

    async fn list_comments(&self, token: &str, card_id: i64) -> ApiResult<Vec<CardComment>> {
        self.send_list(self.request(Method::GET, &format!("/cards/{}/comments", card_id), Some(token))).await
    }

    async fn add_comment(&self, token: &str, card_id: i64, content: &str) -> ApiResult<CardComment> {
        let req = self
            .request(Method::POST, &format!("/cards/{}/comments", card_id), Some(token))
            .json(&ContentBody { content });
        self.send(req).await
    }

    async fn add_card_member(&self, token: &str, card_id: i64, user_id: i64) -> ApiResult<CardMember> {
        let req = self
            .request(Method::POST, &format!("/cards/{}/members", card_id), Some(token))
            .json(&UserIdBody { user_id });
        self.send(req).await
    }

    async fn remove_card_member(&self, token: &str, card_id: i64, user_id: i64) -> ApiResult<()> {
        let req = self.request(Method::DELETE, &format!("/cards/{}/members/{}", card_id, user_id), Some(token));
        self.send_empty(req).await
    }

    async fn list_members(&self, token: &str, board_id: i64) -> ApiResult<Vec<BoardMember>> {
        self.send_list(self.request(Method::GET, &format!("/boards/{}/members", board_id), Some(token))).await
    }

    async fn invite_member(&self, token: &str, board_id: i64, email: &str) -> ApiResult<BoardMember> {
        let req = self
            .request(Method::POST, &format!("/boards/{}/members", board_id), Some(token))
            .json(&EmailBody { email });
        self.send(req).await
    }

    async fn remove_member(&self, token: &str, board_id: i64, user_id: i64) -> ApiResult<()> {
        let req = self.request(Method::DELETE, &format!("/boards/{}/members/{}", board_id, user_id), Some(token));
        self.send_empty(req).await
    }

    async fn search_users(&self, token: &str, query: &str) -> ApiResult<Vec<User>> {
        self.send_list(self.search_request(token, query)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let api = HttpApi::new("http://localhost:8080/api/");
        assert_eq!(api.base_url(), "http://localhost:8080/api");
    }

    #[test]
    fn test_authorized_request_carries_bearer_token() {
        let api = HttpApi::new("http://localhost:8080/api");
        let req = api.request(Method::GET, "/boards/3", Some("abc")).build().unwrap();
        assert_eq!(req.url().as_str(), "http://localhost:8080/api/boards/3");
        assert_eq!(req.headers().get(AUTHORIZATION).unwrap(), "Bearer abc");
        assert_eq!(req.headers().get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_public_request_has_no_authorization() {
        let api = HttpApi::new("http://localhost:8080/api");
        let req = api.request(Method::POST, "/login", None).build().unwrap();
        assert!(req.headers().get(AUTHORIZATION).is_none());
        assert_eq!(req.method(), Method::POST);
    }

    #[test]
    fn test_search_query_is_encoded() {
        let api = HttpApi::new("http://localhost:8080/api");
        let req = api.search_request("t", "ann smith&co").build().unwrap();
        assert_eq!(req.method(), Method::GET);
        assert_eq!(req.url().as_str(), "http://localhost:8080/api/users/search?q=ann+smith%26co");
        assert_eq!(req.headers().get(AUTHORIZATION).unwrap(), "Bearer t");
    }
}
