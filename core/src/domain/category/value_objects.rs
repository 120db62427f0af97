use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateCategoryInput {
    pub name: String,
    pub slug: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct UpdateCategoryInput {
    pub category_id: Uuid,
    pub name: String,
    pub slug: Option<String>,
    pub is_active: Option<bool>,
}
