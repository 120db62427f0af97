use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    pub fn new(name: String, slug: Option<String>, is_active: bool) -> Self {
        let (now, timestamp) = generate_timestamp();
        let slug = slug.unwrap_or_else(|| slugify(&name));

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            slug,
            is_active,
            is_deleted: false,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn update(&mut self, name: String, slug: Option<String>, is_active: Option<bool>) {
        self.slug = slug.unwrap_or_else(|| slugify(&name));
        self.name = name;
        if let Some(is_active) = is_active {
            self.is_active = is_active;
        }
        self.updated_at = Utc::now();
    }

    pub fn soft_delete(&mut self) {
        self.is_deleted = true;
        self.deleted_at = Some(Utc::now());
        self.updated_at = Utc::now();
    }
}

/// Lowercases and joins alphanumeric runs with `-`.
pub fn slugify(value: &str) -> String {
    value
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
