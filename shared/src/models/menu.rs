//! Menu Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Appetizer,
    Main,
    Dessert,
    Beverage,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Appetizer => "appetizer",
            Self::Main => "main",
            Self::Dessert => "dessert",
            Self::Beverage => "beverage",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cuisine tag used for menu browsing filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cuisine {
    NorthIndian,
    SouthIndian,
    Chinese,
    Italian,
    Continental,
    Desserts,
    Beverages,
    Starters,
}

impl Cuisine {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NorthIndian => "north-indian",
            Self::SouthIndian => "south-indian",
            Self::Chinese => "chinese",
            Self::Italian => "italian",
            Self::Continental => "continental",
            Self::Desserts => "desserts",
            Self::Beverages => "beverages",
            Self::Starters => "starters",
        }
    }

    /// All cuisines, in menu display order
    pub const ALL: [Cuisine; 8] = [
        Self::NorthIndian,
        Self::SouthIndian,
        Self::Chinese,
        Self::Italian,
        Self::Continental,
        Self::Desserts,
        Self::Beverages,
        Self::Starters,
    ];
}

impl std::fmt::Display for Cuisine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub menu_id: i64,
    pub item_name: String,
    pub description: Option<String>,
    pub category: Category,
    pub cuisine: Cuisine,
    /// Price in currency units
    pub price: Decimal,
    /// Preparation time in minutes
    pub preparation_time: Option<i32>,
    pub is_available: bool,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub item_name: String,
    pub description: Option<String>,
    pub category: Category,
    pub cuisine: Cuisine,
    pub price: Decimal,
    pub preparation_time: Option<i32>,
    pub is_available: Option<bool>,
}

/// Update menu item payload (full replace, PUT semantics)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub item_name: String,
    pub description: Option<String>,
    pub category: Category,
    pub cuisine: Cuisine,
    pub price: Decimal,
    pub preparation_time: Option<i32>,
    pub is_available: Option<bool>,
}

/// Toggle availability payload (independent of edit)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityPatch {
    pub is_available: bool,
}

/// Create response payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreated {
    pub menu_id: i64,
}

/// List query filter
#[derive(Debug, Clone, Default)]
pub struct MenuFilter {
    pub cuisine: Option<Cuisine>,
    pub category: Option<Category>,
    pub available: Option<bool>,
}

impl MenuFilter {
    /// Only items currently marked available
    pub fn available_only() -> Self {
        Self {
            available: Some(true),
            ..Self::default()
        }
    }

    /// Query-string pairs for the list endpoint
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(cuisine) = self.cuisine {
            pairs.push(("cuisine", cuisine.as_str().to_string()));
        }
        if let Some(category) = self.category {
            pairs.push(("category", category.as_str().to_string()));
        }
        if let Some(available) = self.available {
            pairs.push(("available", available.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuisine_wire_form_is_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Cuisine::NorthIndian).unwrap(),
            "\"north-indian\""
        );
        let back: Cuisine = serde_json::from_str("\"south-indian\"").unwrap();
        assert_eq!(back, Cuisine::SouthIndian);
    }

    #[test]
    fn decodes_menu_item_row() {
        let raw = r#"{
            "menu_id": 12,
            "item_name": "Paneer Tikka",
            "description": "Chargrilled cottage cheese",
            "category": "appetizer",
            "cuisine": "north-indian",
            "price": 249.0,
            "preparation_time": 20,
            "is_available": true
        }"#;
        let item: MenuItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.menu_id, 12);
        assert_eq!(item.category, Category::Appetizer);
        assert_eq!(item.price, Decimal::from(249));
    }

    #[test]
    fn filter_builds_query_pairs() {
        let filter = MenuFilter {
            cuisine: Some(Cuisine::Chinese),
            category: None,
            available: Some(true),
        };
        assert_eq!(
            filter.query_pairs(),
            vec![
                ("cuisine", "chinese".to_string()),
                ("available", "true".to_string())
            ]
        );
        assert!(MenuFilter::default().query_pairs().is_empty());
    }
}
