//! Category identifiers and the "today" tag.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TODAY_CATEGORY_ID;

/// Remote category identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The categories of one event. Building one from any sequence drops duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySet(BTreeSet<CategoryId>);

impl CategorySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: CategoryId) -> bool {
        self.0.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryId> {
        self.0.iter()
    }
}

impl FromIterator<CategoryId> for CategorySet {
    fn from_iter<I: IntoIterator<Item = CategoryId>>(iter: I) -> Self {
        CategorySet(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[u64; N]> for CategorySet {
    fn from(ids: [u64; N]) -> Self {
        ids.into_iter().map(CategoryId).collect()
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<String> = self.0.iter().map(|id| id.to_string()).collect();
        write!(f, "[{}]", ids.join(", "))
    }
}

/// The distinguished category marking events that take place today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodayTag(CategoryId);

impl Default for TodayTag {
    fn default() -> Self {
        TodayTag(CategoryId(DEFAULT_TODAY_CATEGORY_ID))
    }
}

impl TodayTag {
    pub const fn new(id: CategoryId) -> Self {
        TodayTag(id)
    }

    pub fn id(&self) -> CategoryId {
        self.0
    }

    /// `current` without the tag. Every other id is kept.
    pub fn remove_from(&self, current: &CategorySet) -> CategorySet {
        current.iter().copied().filter(|id| *id != self.0).collect()
    }

    /// `current` with the tag present exactly once (set union, never append).
    pub fn add_to(&self, current: &CategorySet) -> CategorySet {
        current.iter().copied().chain(std::iter::once(self.0)).collect()
    }
}
