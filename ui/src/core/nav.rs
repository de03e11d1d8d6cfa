//! Navigation items: the static list of in-page anchors the navbar links to.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Anchor id of the target section (without the leading `#`).
    pub id: String,
    pub label: String,
}

impl NavItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    #[error("navigation needs at least one item")]
    Empty,
    #[error("navigation item #{index} has a blank id")]
    BlankId { index: usize },
    #[error("duplicate navigation id `{0}`")]
    DuplicateId(String),
}

/// Ordered, non-empty list of navigation items with unique ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NavItem>", into = "Vec<NavItem>")]
pub struct NavItems(Vec<NavItem>);

impl NavItems {
    pub fn new(items: Vec<NavItem>) -> Result<Self, NavError> {
        if items.is_empty() {
            return Err(NavError::Empty);
        }

        let mut seen = HashSet::new();
        for (index, item) in items.iter().enumerate() {
            if item.id.trim().is_empty() {
                return Err(NavError::BlankId { index });
            }
            if !seen.insert(item.id.as_str()) {
                return Err(NavError::DuplicateId(item.id.clone()));
            }
        }

        Ok(Self(items))
    }

    /// The first item; its id is the active section before any measurement.
    pub fn first(&self) -> &NavItem {
        // Non-empty by construction.
        &self.0[0]
    }

    pub fn get(&self, id: &str) -> Option<&NavItem> {
        self.0.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NavItem> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for NavItems {
    fn default() -> Self {
        Self(vec![
            NavItem::new("Home", "Home"),
            NavItem::new("About", "About"),
            NavItem::new("Portfolio", "Portfolio"),
            NavItem::new("Contact", "Contact"),
        ])
    }
}

impl TryFrom<Vec<NavItem>> for NavItems {
    type Error = NavError;

    fn try_from(items: Vec<NavItem>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl From<NavItems> for Vec<NavItem> {
    fn from(items: NavItems) -> Self {
        items.0
    }
}

impl<'a> IntoIterator for &'a NavItems {
    type Item = &'a NavItem;
    type IntoIter = std::slice::Iter<'a, NavItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
