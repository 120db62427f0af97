use chrono::{TimeZone, Utc};

use crate::{domain::category::entities::Category, entity::categories::Model as CategoryModel};

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: model.id,
            name: model.name,
            slug: model.slug,
            is_active: model.is_active,
            is_deleted: model.is_deleted,
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
            deleted_at: model.deleted_at.map(|dt| dt.and_utc()),
        }
    }
}
