//! View models handed to the rendering layer
//!
//! Every value here is built fresh by a mapper call and owned by the caller.

use crate::domain::{TaskPriority, User};
use serde::Serialize;

/// A named fact shown inside a column card, e.g. "Participants"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnRow {
    pub name: String,
    pub value: String,
}

impl ColumnRow {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A card in a column or board view
///
/// `rows` keeps the order in which facts were appended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnItem {
    pub id: u64,
    pub title: String,
    pub rows: Vec<ColumnRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl ColumnItem {
    /// Start a card with no rows and no optional parts
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            rows: Vec::new(),
            priority: None,
            author: None,
            text: None,
            href: None,
        }
    }

    pub fn row(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.rows.push(ColumnRow::new(name, value));
        self
    }
}

/// Icon shown next to a list fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Sunrise,
    Sunset,
    People,
    Dollar,
    Status,
}

/// One renderable piece of a list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListDatum {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    pub text: String,
}

impl ListDatum {
    pub fn with_icon(icon: Icon, text: impl Into<String>) -> Self {
        Self {
            icon: Some(icon),
            text: text.into(),
        }
    }
}

/// An entry in a generic list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub title: String,
    pub data: Vec<ListDatum>,
    /// Identifier shown on the right-hand side, kept numeric
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<u64>,
    /// Navigation target, passed to the router untouched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// A titled value in a detail panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detail {
    pub title: String,
    pub value: String,
}

impl Detail {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}
