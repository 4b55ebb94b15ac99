use serde::{Deserialize, Serialize};

use crate::catalog::GenderType;

const DEFAULT_STOCK_ALERT: u32 = 10;

/// Shared product attributes typed once during batch entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    /// Style name; also the SKU prefix.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    pub category: String,
    pub color: String,
    pub price: f64,
    pub cost_price: f64,
    #[serde(default = "default_stock_alert")]
    pub stock_alert: u32,
    #[serde(default)]
    pub gender: GenderType,
}

const fn default_stock_alert() -> u32 {
    DEFAULT_STOCK_ALERT
}

impl BatchEntry {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        color: impl Into<String>,
        price: f64,
        cost_price: f64,
    ) -> Self {
        Self {
            name: name.into(),
            product_name: None,
            category: category.into(),
            color: color.into(),
            price,
            cost_price,
            stock_alert: DEFAULT_STOCK_ALERT,
            gender: GenderType::default(),
        }
    }

    #[must_use]
    pub fn with_product_name(mut self, product_name: impl Into<String>) -> Self {
        self.product_name = Some(product_name.into());
        self
    }

    #[must_use]
    pub const fn with_stock_alert(mut self, stock_alert: u32) -> Self {
        self.stock_alert = stock_alert;
        self
    }

    #[must_use]
    pub const fn with_gender(mut self, gender: GenderType) -> Self {
        self.gender = gender;
        self
    }
}

/// One product record per size, ready for the catalog store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    pub category: String,
    pub size: String,
    pub color: String,
    pub price: f64,
    pub cost_price: f64,
    pub stock: u32,
    pub stock_alert: u32,
    pub gender: GenderType,
    /// Display label; not unique.
    pub sku: String,
}
