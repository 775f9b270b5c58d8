//! Item categories.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Category tag carried by every item.
///
/// Stored records may carry category strings this version does not know;
/// those deserialize as [`Category::Other`] and fall back to the default
/// policy entries rather than failing the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Clothing,
    Books,
    Electronics,
    Documents,
    Kitchenware,
    Cosmetics,
    Toys,
    Tools,
    Medicine,
    Accessories,
    Food,
    #[serde(other)]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Clothing => "clothing",
            Category::Books => "books",
            Category::Electronics => "electronics",
            Category::Documents => "documents",
            Category::Kitchenware => "kitchenware",
            Category::Cosmetics => "cosmetics",
            Category::Toys => "toys",
            Category::Tools => "tools",
            Category::Medicine => "medicine",
            Category::Accessories => "accessories",
            Category::Food => "food",
            Category::Other => "other",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Other
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clothing" => Ok(Category::Clothing),
            "books" => Ok(Category::Books),
            "electronics" => Ok(Category::Electronics),
            "documents" => Ok(Category::Documents),
            "kitchenware" => Ok(Category::Kitchenware),
            "cosmetics" => Ok(Category::Cosmetics),
            "toys" => Ok(Category::Toys),
            "tools" => Ok(Category::Tools),
            "medicine" => Ok(Category::Medicine),
            "accessories" => Ok(Category::Accessories),
            "food" => Ok(Category::Food),
            "other" => Ok(Category::Other),
            _ => Err(DomainError::validation(format!("unknown category: {s}"))),
        }
    }
}
