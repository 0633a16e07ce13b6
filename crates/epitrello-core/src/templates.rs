//! Board Templates
//!
//! Starter column layouts offered when creating a local board.

use crate::domain::{slug, Card, Column};

#[derive(Debug, Clone, PartialEq)]
pub struct BoardTemplate {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub columns: Vec<Column>,
}

type CardSeed = (&'static str, &'static str, &'static str, &'static str);
type ColumnSeed = (&'static str, &'static str, &'static [CardSeed]);

fn build(key: &str, seeds: &[ColumnSeed]) -> Vec<Column> {
    seeds
        .iter()
        .map(|(title, accent, cards)| {
            Column::new(format!("{}-{}", key, slug(title)), *title, *accent)
                .with_cards(cards.iter().map(|(id, t, badge, color)| Card::new(*id, *t, *badge, *color)).collect())
        })
        .collect()
}

const KANBAN: &[ColumnSeed] = &[
    ("Ideas", "accent", &[
        ("k1", "Explore new feature ideas", "Product", "accent"),
        ("k2", "Collect feedback from users", "Research", "primary"),
    ]),
    ("In Progress", "primary", &[("k3", "Implement auth flow", "Dev", "primary")]),
    ("Review", "warning", &[("k4", "QA for sprint items", "QA", "warning")]),
    ("Done", "success", &[("k5", "Release v1.0.0", "Release", "success")]),
];

const SCRUM: &[ColumnSeed] = &[
    ("Backlog", "accent", &[("s1", "Story: user can reset password", "Story", "accent")]),
    ("In Progress", "primary", &[("s2", "Task: API endpoint", "Task", "primary")]),
    ("Review", "warning", &[("s3", "Code review", "Review", "warning")]),
    ("Done", "success", &[("s4", "Sprint demo", "Sprint", "success")]),
];

const PERSONAL: &[ColumnSeed] = &[
    ("To do", "accent", &[("p1", "Plan weekly goals", "Life", "accent")]),
    ("Doing", "primary", &[("p2", "Work on portfolio", "Focus", "primary")]),
    ("Done", "success", &[("p3", "Clean inbox", "Quick", "success")]),
];

const BUGS: &[ColumnSeed] = &[
    ("New", "accent", &[("b1", "Crash when saving form", "P1", "warning")]),
    ("Investigating", "primary", &[]),
    ("Fix in Progress", "primary", &[]),
    ("QA", "warning", &[]),
    ("Closed", "success", &[]),
];

pub fn templates() -> Vec<BoardTemplate> {
    vec![
        BoardTemplate {
            key: "kanban",
            name: "Kanban",
            description: "Ideas → In Progress → Review → Done",
            columns: build("kanban", KANBAN),
        },
        BoardTemplate {
            key: "scrum",
            name: "Scrum",
            description: "Backlog → In Progress → Review → Done",
            columns: build("scrum", SCRUM),
        },
        BoardTemplate {
            key: "personal",
            name: "Personal Tasks",
            description: "To do → Doing → Done",
            columns: build("personal", PERSONAL),
        },
        BoardTemplate {
            key: "bugs",
            name: "Bug Tracker",
            description: "New → Investigating → Fix → QA → Closed",
            columns: build("bugs", BUGS),
        },
    ]
}

pub fn find_template(key: &str) -> Option<BoardTemplate> {
    templates().into_iter().find(|t| t.key == key)
}

/// Columns of a fresh local board (the Kanban template)
pub fn default_columns() -> Vec<Column> {
    build("kanban", KANBAN)
}
