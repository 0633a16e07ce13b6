//! Card Composer and Editor
//!
//! Client-side rules for creating and editing cards. Validation happens before
//! any network call; failures come back as display-ready `ComposerError`s.

use chrono::NaiveDate;

use crate::api::{BoardApi, CardPatch, NewCard, NewTag};
use crate::domain::{Card, CardComment, CardMember, CardTag, Column};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComposerError {
    #[error("This list is not connected to a saved board yet.")]
    MissingList,
    #[error("This card is not saved yet.")]
    MissingCard,
    #[error("You need to be signed in to add cards.")]
    MissingToken,
    /// Server message, or a generic fallback
    #[error("{0}")]
    Remote(String),
}

/// Validated `POST /lists/:listId/cards` call
#[derive(Debug, Clone, PartialEq)]
pub struct NewCardRequest {
    pub list_id: i64,
    pub card: NewCard,
}

/// Check a new card before sending it.
///
/// `Ok(None)` means there is nothing to do (blank title). New cards carry the
/// column's title as badge and its accent as color.
pub fn validate_new_card(title: &str, column: &Column, token: Option<&str>) -> Result<Option<NewCardRequest>, ComposerError> {
    let title = title.trim();
    if title.is_empty() {
        return Ok(None);
    }
    let list_id = column.list_id.ok_or(ComposerError::MissingList)?;
    if token.map_or(true, str::is_empty) {
        return Err(ComposerError::MissingToken);
    }
    Ok(Some(NewCardRequest {
        list_id,
        card: NewCard {
            title: title.to_string(),
            badge: column.title.clone(),
            color: column.accent.clone(),
        },
    }))
}

pub async fn submit_new_card<A: BoardApi + ?Sized>(
    api: &A,
    title: &str,
    column: &Column,
    token: Option<&str>,
) -> Result<Option<Card>, ComposerError> {
    let Some(request) = validate_new_card(title, column, token)? else {
        return Ok(None);
    };
    let record = api
        .create_card(token.unwrap_or_default(), request.list_id, &request.card)
        .await
        .map_err(|e| ComposerError::Remote(e.message_or("Failed to create card")))?;
    log::info!("[COMPOSER] created card {} in list {}", record.id, request.list_id);
    Ok(Some(Card::from(record)))
}

/// Append `card` to the column `column_id`
pub fn append_card(columns: &[Column], column_id: &str, card: Card) -> Vec<Column> {
    let mut next = columns.to_vec();
    if let Some(column) = next.iter_mut().find(|c| c.id == column_id) {
        column.cards.push(card);
    }
    next
}

/// Swap in an edited card, matched by id
pub fn replace_card(columns: &[Column], card: &Card) -> Vec<Column> {
    let mut next = columns.to_vec();
    if let Some(slot) = next.iter_mut().flat_map(|c| c.cards.iter_mut()).find(|c| c.id == card.id) {
        *slot = card.clone();
    }
    next
}

/// Editable fields of the card modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardEdit {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
}

impl CardEdit {
    pub fn from_card(card: &Card) -> Self {
        Self {
            title: card.title.clone(),
            description: card.description.clone().unwrap_or_default(),
            due_date: card.due_date,
        }
    }
}

/// Apply an edit without the server, as for cards on the local board.
/// `None` when the title is blank.
pub fn apply_edit(card: &Card, edit: &CardEdit) -> Option<Card> {
    let title = edit.title.trim();
    if title.is_empty() {
        return None;
    }
    let mut updated = card.clone();
    updated.title = title.to_string();
    updated.description = Some(edit.description.clone()).filter(|d| !d.trim().is_empty());
    updated.due_date = edit.due_date;
    Some(updated)
}

fn backing<'a>(card: &Card, token: Option<&'a str>) -> Result<(i64, &'a str), ComposerError> {
    let card_id = card.card_id.ok_or(ComposerError::MissingCard)?;
    match token {
        Some(token) if !token.is_empty() => Ok((card_id, token)),
        _ => Err(ComposerError::MissingToken),
    }
}

/// Check an edit before sending it. `Ok(None)` for a blank title.
pub fn validate_card_edit(card: &Card, edit: &CardEdit, token: Option<&str>) -> Result<Option<(i64, CardPatch)>, ComposerError> {
    let title = edit.title.trim();
    if title.is_empty() {
        return Ok(None);
    }
    let (card_id, _) = backing(card, token)?;
    let patch = CardPatch {
        title: Some(title.to_string()),
        description: Some(edit.description.clone()),
        due_date: (edit.due_date != card.due_date).then_some(edit.due_date),
        ..Default::default()
    };
    Ok(Some((card_id, patch)))
}

/// Save an edit and return the card as it should now be displayed
pub async fn submit_card_edit<A: BoardApi + ?Sized>(
    api: &A,
    card: &Card,
    edit: &CardEdit,
    token: Option<&str>,
) -> Result<Option<Card>, ComposerError> {
    let Some((card_id, patch)) = validate_card_edit(card, edit, token)? else {
        return Ok(None);
    };
    let record = api
        .update_card(token.unwrap_or_default(), card_id, &patch)
        .await
        .map_err(|e| ComposerError::Remote(e.message_or("Failed to update card")))?;

    let updated = apply_edit(card, edit).map(|mut updated| {
        updated.title = record.title;
        updated
    });
    Ok(updated)
}

/// Attach a tag; a blank name is a no-op
pub async fn add_tag<A: BoardApi + ?Sized>(
    api: &A,
    card: &Card,
    name: &str,
    color: &str,
    token: Option<&str>,
) -> Result<Option<CardTag>, ComposerError> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(None);
    }
    let (card_id, token) = backing(card, token)?;
    let tag = NewTag { name: name.to_string(), color: color.to_string() };
    api.add_card_tag(token, card_id, &tag)
        .await
        .map(Some)
        .map_err(|e| ComposerError::Remote(e.message_or("Failed to add tag")))
}

pub async fn remove_tag<A: BoardApi + ?Sized>(api: &A, card: &Card, tag_id: i64, token: Option<&str>) -> Result<(), ComposerError> {
    let (card_id, token) = backing(card, token)?;
    api.remove_card_tag(token, card_id, tag_id)
        .await
        .map_err(|e| ComposerError::Remote(e.message_or("Failed to remove tag")))
}

/// Post a comment; a blank comment is a no-op
pub async fn add_comment<A: BoardApi + ?Sized>(
    api: &A,
    card: &Card,
    content: &str,
    token: Option<&str>,
) -> Result<Option<CardComment>, ComposerError> {
    let content = content.trim();
    if content.is_empty() {
        return Ok(None);
    }
    let (card_id, token) = backing(card, token)?;
    api.add_comment(token, card_id, content)
        .await
        .map(Some)
        .map_err(|e| ComposerError::Remote(e.message_or("Failed to add comment")))
}

pub async fn assign_member<A: BoardApi + ?Sized>(
    api: &A,
    card: &Card,
    user_id: i64,
    token: Option<&str>,
) -> Result<CardMember, ComposerError> {
    let (card_id, token) = backing(card, token)?;
    api.add_card_member(token, card_id, user_id)
        .await
        .map_err(|e| ComposerError::Remote(e.message_or("Failed to assign member")))
}

pub async fn unassign_member<A: BoardApi + ?Sized>(
    api: &A,
    card: &Card,
    user_id: i64,
    token: Option<&str>,
) -> Result<(), ComposerError> {
    let (card_id, token) = backing(card, token)?;
    api.remove_card_member(token, card_id, user_id)
        .await
        .map_err(|e| ComposerError::Remote(e.message_or("Failed to remove member")))
}
