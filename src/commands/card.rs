//! Card Commands
//!
//! Card composer and editor operations on `/lists/:id/cards` and `/cards/:id`.

use epitrello_core::composer::{self, CardEdit};
use epitrello_core::domain::{Card, CardComment, CardDetail, CardMember, CardTag, Column};
use epitrello_core::BoardApi;

use super::client;

pub async fn create_card(title: &str, column: &Column, token: Option<&str>) -> Result<Option<Card>, String> {
    composer::submit_new_card(&client(), title, column, token)
        .await
        .map_err(|e| e.to_string())
}

pub async fn update_card(card: &Card, edit: &CardEdit, token: Option<&str>) -> Result<Option<Card>, String> {
    composer::submit_card_edit(&client(), card, edit, token)
        .await
        .map_err(|e| e.to_string())
}

/// Full card with tags, members and comments
pub async fn get_card(token: &str, card_id: i64) -> Result<CardDetail, String> {
    client()
        .get_card(token, card_id)
        .await
        .map_err(|e| e.message_or("Failed to load card"))
}

pub async fn add_tag(card: &Card, name: &str, color: &str, token: Option<&str>) -> Result<Option<CardTag>, String> {
    composer::add_tag(&client(), card, name, color, token)
        .await
        .map_err(|e| e.to_string())
}

pub async fn remove_tag(card: &Card, tag_id: i64, token: Option<&str>) -> Result<(), String> {
    composer::remove_tag(&client(), card, tag_id, token)
        .await
        .map_err(|e| e.to_string())
}

pub async fn add_comment(card: &Card, content: &str, token: Option<&str>) -> Result<Option<CardComment>, String> {
    composer::add_comment(&client(), card, content, token)
        .await
        .map_err(|e| e.to_string())
}

pub async fn assign_member(card: &Card, user_id: i64, token: Option<&str>) -> Result<CardMember, String> {
    composer::assign_member(&client(), card, user_id, token)
        .await
        .map_err(|e| e.to_string())
}

pub async fn unassign_member(card: &Card, user_id: i64, token: Option<&str>) -> Result<(), String> {
    composer::unassign_member(&client(), card, user_id, token)
        .await
        .map_err(|e| e.to_string())
}
