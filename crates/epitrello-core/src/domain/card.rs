//! Card Entity
//!
//! A unit of work inside a column, with its optional metadata.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Card displayed in a column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Identifier unique within the board (`card-<id>` for saved cards)
    #[serde(default)]
    pub id: String,
    /// Backing-store identifier, `None` for template cards
    #[serde(default)]
    pub card_id: Option<i64>,
    pub title: String,
    pub badge: String,
    pub color: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<CardTag>,
    #[serde(default)]
    pub members: Vec<CardMember>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl Card {
    /// Local card with no backing-store identity
    pub fn new(id: impl Into<String>, title: impl Into<String>, badge: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            card_id: None,
            title: title.into(),
            badge: badge.into(),
            color: color.into(),
            description: None,
            tags: Vec::new(),
            members: Vec::new(),
            due_date: None,
        }
    }

    /// Take on the category label of the column the card now lives in
    pub fn retag(&mut self, badge: &str, color: &str) {
        self.badge = badge.to_string();
        self.color = color.to_string();
    }
}

/// Tag attached to a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardTag {
    pub id: i64,
    #[serde(default)]
    pub card_id: i64,
    pub name: String,
    #[serde(default)]
    pub color: String,
}

/// User assigned to a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardMember {
    pub user_id: i64,
    pub email: String,
}

/// Comment left on a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardComment {
    pub id: i64,
    pub card_id: i64,
    pub user_id: i64,
    pub user_email: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Card as returned by `POST /lists/:id/cards`, `PATCH /cards/:id` and inside board details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: i64,
    pub list_id: i64,
    pub title: String,
    #[serde(default)]
    pub badge: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Vec<CardTag>,
    #[serde(default)]
    pub members: Vec<CardMember>,
}

/// `GET /cards/:id` response: the card plus its comments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDetail {
    #[serde(flatten)]
    pub card: CardRecord,
    #[serde(default)]
    pub comments: Vec<CardComment>,
}

impl From<CardRecord> for Card {
    fn from(record: CardRecord) -> Self {
        Self {
            id: format!("card-{}", record.id),
            card_id: Some(record.id),
            title: record.title,
            badge: record.badge,
            color: record.color,
            description: record.description.filter(|d| !d.is_empty()),
            tags: record.tags,
            members: record.members,
            due_date: record.due_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_conversion_keeps_backing_id() {
        let record: CardRecord = serde_json::from_str(
            r#"{"id":12,"list_id":3,"title":"Ship it","badge":"Dev","color":"primary","position":0,"description":""}"#,
        )
        .unwrap();
        let card = Card::from(record);
        assert_eq!(card.id, "card-12");
        assert_eq!(card.card_id, Some(12));
        assert_eq!(card.description, None);
        assert!(card.tags.is_empty());
    }

    #[test]
    fn test_card_detail_flattens_record() {
        let detail: CardDetail = serde_json::from_str(
            r#"{"id":4,"list_id":1,"title":"T","badge":"B","color":"accent","position":2,
                "tags":[{"id":1,"card_id":4,"name":"urgent","color":"warning"}],
                "comments":[{"id":9,"card_id":4,"user_id":2,"user_email":"a@b.c","content":"hi","created_at":"2024-01-02T03:04:05Z"}]}"#,
        )
        .unwrap();
        assert_eq!(detail.card.position, 2);
        assert_eq!(detail.card.tags[0].name, "urgent");
        assert_eq!(detail.comments[0].user_email, "a@b.c");
    }
}
