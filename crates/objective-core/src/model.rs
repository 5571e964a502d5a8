//! Objective Entities
//!
//! An objective is a title plus sub-items, each belonging to one of five
//! fixed categories.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sub-item category (`itemsType` on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ItemCategory {
    /// By when
    Period = 1,
    /// How much
    Degree = 2,
    /// What for
    Purpose = 3,
    /// What to do
    Action = 4,
    /// How to measure
    Metric = 5,
}

/// Display label and input placeholder for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemInfo {
    pub title: &'static str,
    pub placeholder: &'static str,
}

impl ItemCategory {
    /// All categories in presentation order
    pub const ALL: [ItemCategory; 5] = [
        ItemCategory::Period,
        ItemCategory::Degree,
        ItemCategory::Purpose,
        ItemCategory::Action,
        ItemCategory::Metric,
    ];

    pub fn from_items_type(value: u8) -> Option<Self> {
        match value {
            1 => Some(ItemCategory::Period),
            2 => Some(ItemCategory::Degree),
            3 => Some(ItemCategory::Purpose),
            4 => Some(ItemCategory::Action),
            5 => Some(ItemCategory::Metric),
            _ => None,
        }
    }

    pub fn items_type(self) -> u8 {
        self as u8
    }

    /// Zero-based bucket index
    pub fn index(self) -> usize {
        self as usize - 1
    }

    pub fn info(self) -> ItemInfo {
        match self {
            ItemCategory::Period => ItemInfo { title: "期間", placeholder: "いつまでに？" },
            ItemCategory::Degree => ItemInfo { title: "程度", placeholder: "どのくらい？" },
            ItemCategory::Purpose => ItemInfo { title: "目的", placeholder: "なんのために？" },
            ItemCategory::Action => ItemInfo { title: "行動", placeholder: "なにをする？" },
            ItemCategory::Metric => ItemInfo { title: "評価指標", placeholder: "どう評価する？" },
        }
    }
}

impl TryFrom<u8> for ItemCategory {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_items_type(value).ok_or_else(|| format!("invalid itemsType: {}", value))
    }
}

impl From<ItemCategory> for u8 {
    fn from(category: ItemCategory) -> Self {
        category.items_type()
    }
}

/// One categorized sub-item of an objective
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveItem {
    /// Stable per-field identity
    pub id: String,
    pub title: String,
    pub items_type: ItemCategory,
}

impl ObjectiveItem {
    /// A new empty item with a fresh id
    pub fn blank(category: ItemCategory) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: String::new(),
            items_type: category,
        }
    }
}

/// The aggregated form value handed to the submit function
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Objective {
    pub title: String,
    pub objective_items: Vec<ObjectiveItem>,
}

impl Objective {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of items per category, indexed by `ItemCategory::index`
    pub fn category_counts(&self) -> [usize; 5] {
        let mut counts = [0; 5];
        for item in &self.objective_items {
            counts[item.items_type.index()] += 1;
        }
        counts
    }
}

/// An objective as returned by the persistence host
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedObjective {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub objective_items: Vec<ObjectiveItem>,
}

impl SavedObjective {
    pub fn to_objective(&self) -> Objective {
        Objective {
            title: self.title.clone(),
            objective_items: self.objective_items.clone(),
        }
    }
}

/// Signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    pub display_name: String,
}
