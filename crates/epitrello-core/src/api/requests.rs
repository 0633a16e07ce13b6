//! Request Bodies
//!
//! JSON payloads sent to the backend. Field names follow the server.

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Serialize)]
pub(crate) struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub(crate) struct TitleBody<'a> {
    pub title: &'a str,
}

#[derive(Serialize)]
pub(crate) struct EmailBody<'a> {
    pub email: &'a str,
}

#[derive(Serialize)]
pub(crate) struct ContentBody<'a> {
    pub content: &'a str,
}

#[derive(Serialize)]
pub(crate) struct UserIdBody {
    pub user_id: i64,
}

/// Body of `POST /lists/:listId/cards`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCard {
    pub title: String,
    pub badge: String,
    pub color: String,
}

/// Body of `PATCH /cards/:id`; absent fields are left untouched by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CardPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "listId", skip_serializing_if = "Option::is_none")]
    pub list_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    /// `Some(None)` clears the due date
    #[serde(rename = "dueDate", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<NaiveDate>>,
}

/// Body of `POST /cards/:id/tags`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTag {
    pub name: String,
    pub color: String,
}
