use std::{fmt::Display, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::field_errors::FieldErrors, value_objects::PageInfo};

/// Products per page on the storefront listing.
pub const SHOP_PAGE_SIZE: u64 = 8;
/// Products shown on the home page.
pub const HOME_PRODUCTS: u64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
    Draft,
    Archived,
}

impl Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            ProductStatus::Active => "active",
            ProductStatus::Draft => "draft",
            ProductStatus::Archived => "archived",
        };
        write!(f, "{value}")
    }
}

impl FromStr for ProductStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ProductStatus::Active),
            "draft" => Ok(ProductStatus::Draft),
            "archived" => Ok(ProductStatus::Archived),
            other => Err(format!("unknown product status: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductPrice {
    #[schema(value_type = f64)]
    pub base: Decimal,
    #[schema(value_type = Option<f64>)]
    pub discount: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductVariant {
    pub option: String,
    pub value: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
}

/// The owning category's id and name, joined onto product reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryRef {
    pub id: Uuid,
    pub name: String,
}

/// Attributes shared by product create and update.
#[derive(Debug, Clone)]
pub struct ProductAttributes {
    pub name: String,
    pub sku: String,
    pub description: String,
    pub status: ProductStatus,
    pub stock_quantity: i32,
    pub price: ProductPrice,
    pub category_id: Uuid,
    pub variants: Option<Vec<ProductVariant>>,
    pub metadata: Option<serde_json::Value>,
}

/// Largest price the catalog stores (`NUMERIC(10, 2)`).
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

impl ProductAttributes {
    /// Amount and quantity bounds; uniqueness and references are checked by the service.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.stock_quantity < 0 {
            errors.add("stock_quantity", "The stock quantity must be at least 0.");
        }
        check_price(&mut errors, "price.base", "base price", self.price.base);
        if let Some(discount) = self.price.discount {
            check_price(&mut errors, "price.discount", "discount price", discount);
        }
        for (index, variant) in self.variants.iter().flatten().enumerate() {
            check_price(
                &mut errors,
                &format!("variants.{index}.price"),
                "variant price",
                variant.price,
            );
        }

        errors
    }
}

fn check_price(errors: &mut FieldErrors, field: &str, label: &str, amount: Decimal) {
    if amount.is_sign_negative() {
        errors.add(field, format!("The {label} must be at least 0."));
    } else if amount > MAX_PRICE {
        errors.add(field, format!("The {label} may not exceed {MAX_PRICE}."));
    }
    if amount.normalize().scale() > 2 {
        errors.add(
            field,
            format!("The {label} may not have more than 2 decimal places."),
        );
    }
}

#[derive(Debug, Clone)]
pub struct CreateProductInput {
    pub attributes: ProductAttributes,
}

#[derive(Debug, Clone)]
pub struct UpdateProductInput {
    pub product_id: Uuid,
    pub attributes: ProductAttributes,
}

#[derive(Debug, Clone, Default)]
pub struct ShopProductsFilter {
    pub search: Option<String>,
    /// Category name; `+` stands for a space and `all` disables the filter.
    pub category: Option<String>,
    pub offset: u64,
}

impl ShopProductsFilter {
    pub fn category_name(&self) -> Option<String> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != "all")
            .map(|c| c.replace('+', " "))
    }

    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShopPage<T> {
    pub data: Vec<T>,
    pub pagination: PageInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attributes() -> ProductAttributes {
        ProductAttributes {
            name: "Paper Plates".to_string(),
            sku: "PP-001".to_string(),
            description: "Compostable plates".to_string(),
            status: ProductStatus::Active,
            stock_quantity: 10,
            price: ProductPrice {
                base: Decimal::new(499, 2),
                discount: None,
            },
            category_id: Uuid::nil(),
            variants: None,
            metadata: None,
        }
    }

    #[test]
    fn test_valid_attributes() {
        assert!(attributes().validate().is_empty());
    }

    #[test]
    fn test_negative_amounts_are_reported_per_field() {
        let mut attrs = attributes();
        attrs.stock_quantity = -1;
        attrs.price.discount = Some(Decimal::new(-1, 0));
        attrs.variants = Some(vec![ProductVariant {
            option: "size".to_string(),
            value: "L".to_string(),
            price: Decimal::new(-5, 1),
        }]);

        let errors = attrs.validate();
        assert!(errors.contains("stock_quantity"));
        assert!(errors.contains("price.discount"));
        assert!(errors.contains("variants.0.price"));
        assert!(!errors.contains("price.base"));
    }

    #[test]
    fn test_shop_category_filter() {
        let filter = ShopProductsFilter {
            category: Some("paper+cups".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.category_name().as_deref(), Some("paper cups"));

        let all = ShopProductsFilter {
            category: Some("all".to_string()),
            ..Default::default()
        };
        assert_eq!(all.category_name(), None);
    }

    #[test]
    fn test_status_round_trips_through_strings() {
        for status in [ProductStatus::Active, ProductStatus::Draft, ProductStatus::Archived] {
            assert_eq!(status.to_string().parse::<ProductStatus>(), Ok(status));
        }
        assert!("deleted".parse::<ProductStatus>().is_err());
    }

    #[test]
    fn test_max_price_fits_the_price_column() {
        assert_eq!(MAX_PRICE, Decimal::new(9_999_999_999, 2));
    }

    #[test]
    fn test_prices_above_column_precision_are_rejected() {
        let mut attrs = attributes();
        attrs.price.base = Decimal::new(100_000_000, 0);
        attrs.price.discount = Some(Decimal::new(125, 3));

        let errors = attrs.validate();
        assert!(errors.contains("price.base"));
        assert_eq!(
            errors.get("price.discount"),
            Some(&["The discount price may not have more than 2 decimal places.".to_string()][..])
        );

        attrs.price.base = MAX_PRICE;
        attrs.price.discount = Some(Decimal::new(4_990, 3));
        assert!(attrs.validate().is_empty());
    }
}
